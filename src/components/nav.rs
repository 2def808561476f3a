use leptos::prelude::*;

use super::Icon;
use crate::models::{IconKind, BRAND, NAV_LINKS};

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="main-nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <Icon kind=IconKind::Dog class="brand-icon"/>
                    <span>{BRAND}</span>
                </a>

                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.section.href()>{link.label}</a> })
                        .collect_view()}
                </div>

                // No handlers: sign-in and onboarding are not part of this page
                <div class="nav-actions">
                    <button type="button" class="btn-link">"Login"</button>
                    <button type="button" class="btn btn-primary">"Get Started"</button>
                </div>
            </div>
        </nav>
    }
}
