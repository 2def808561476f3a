use leptos::prelude::*;

use super::Icon;
use crate::models::{Highlight, Testimonial};

#[component]
pub fn ServiceCard(service: Highlight) -> impl IntoView {
    view! {
        <div class="service-card">
            <div class="icon-tile icon-tile-lg">
                <Icon kind=service.icon class="accent"/>
            </div>
            <h3>{service.title}</h3>
            <p class="muted">{service.description}</p>
            <a class="learn-more">"Learn more →"</a>
        </div>
    }
}

#[component]
pub fn FeatureItem(feature: Highlight) -> impl IntoView {
    view! {
        <div class="feature-item">
            <div class="icon-tile">
                <Icon kind=feature.icon class="accent"/>
            </div>
            <div>
                <h3>{feature.title}</h3>
                <p class="muted">{feature.description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let stars = "★".repeat(testimonial.rating as usize);

    view! {
        <div class="testimonial-card">
            <div class="testimonial-author">
                <img src=testimonial.avatar alt=testimonial.name class="avatar"/>
                <div>
                    <h3>{testimonial.name}</h3>
                    <p class="muted small">{testimonial.role}</p>
                </div>
            </div>
            <div class="stars" aria-label=format!("{} out of 5 stars", testimonial.rating)>{stars}</div>
            <p class="muted">"“"{testimonial.quote}"”"</p>
        </div>
    }
}
