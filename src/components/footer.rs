use leptos::prelude::*;

use super::Icon;
use crate::models::{
    IconKind, BRAND, CONTACT_DETAILS, FOOTER_QUICK_LINKS, FOOTER_SERVICES, LEGAL_LINKS,
    SOCIAL_LINKS,
};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <Icon kind=IconKind::Dog class="brand-icon"/>
                            <span>{BRAND}</span>
                        </div>
                        <p class="footer-blurb">
                            "India's first comprehensive pet care platform providing everything from "
                            "food delivery to medical services for all types of pets."
                        </p>
                        <div class="footer-social">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|s| view! {
                                    <a href=s.href aria-label=s.label>
                                        <Icon kind=s.icon/>
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3>"Quick Links"</h3>
                        <ul>
                            {FOOTER_QUICK_LINKS
                                .iter()
                                .map(|link| view! { <li><a href=link.section.href()>{link.label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3>"Services"</h3>
                        <ul>
                            {FOOTER_SERVICES
                                .iter()
                                .map(|name| view! { <li><a>{*name}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3>"Contact"</h3>
                        <ul class="footer-contact">
                            {CONTACT_DETAILS
                                .iter()
                                .map(|c| view! {
                                    <li>
                                        <Icon kind=c.icon class="accent"/>
                                        {c.value}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>"© 2025 Waggy. All rights reserved. Founded by R Abhinav Vinaayak."</p>
                    <div class="footer-legal">
                        {LEGAL_LINKS
                            .iter()
                            .map(|name| view! { <a>{*name}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
