use leptos::prelude::*;
use leptos_meta::*;

use crate::components::{use_smooth_anchor_scroll, Footer, Nav};
use crate::models::{SectionId, ACCENT};
use crate::pages::HomePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    use_smooth_anchor_scroll();

    view! {
        <Title text="Waggy - Where Every Tail Finds Its Wag"/>
        <Meta name="description" content="Pet food, veterinary care and grooming delivered to your doorstep across India"/>
        <Meta name="theme-color" content=ACCENT/>

        <div id=SectionId::Home.fragment() class="page">
            <Nav/>
            <main>
                <HomePage/>
            </main>
            <Footer/>
        </div>
    }
}
