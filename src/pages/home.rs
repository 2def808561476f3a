use leptos::prelude::*;

use crate::components::{FeatureItem, Icon, Reveal, ServiceCard, TestimonialCard};
use crate::models::{
    IconKind, SectionId, ABOUT_PHOTOS, CONTACT_DETAILS, CONTACT_SUBJECTS, DIFFERENTIATORS,
    FEATURES, HERO_AVATARS, HERO_IMAGE, PLATFORM_HIGHLIGHTS, SERVICES, SOCIAL_LINKS, TESTIMONIALS,
};
use crate::motion::{RevealVariant, Stagger};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Hero/>
            <About/>
            <Services/>
            <Features/>
            <Testimonials/>
            <Newsletter/>
            <Contact/>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <Reveal variant=RevealVariant::Hero>
                <div class="container two-col hero-grid">
                    <div>
                        <h1>
                            "Where Every " <span class="accent">"Tail"</span>
                            <br/>
                            "Finds Its Wag!"
                        </h1>
                        <p class="lead muted">
                            "India's first comprehensive pet care platform for all your pet needs - "
                            "from food and toys to veterinary services and grooming, delivered right to your doorstep."
                        </p>
                        <div class="cta-buttons">
                            <button type="button" class="btn btn-primary btn-lg">"Explore Services"</button>
                            <button type="button" class="btn btn-outline btn-lg">"Learn More"</button>
                        </div>
                        <div class="trusted-by">
                            <div class="avatar-stack">
                                {HERO_AVATARS
                                    .iter()
                                    .map(|src| view! { <img src=*src alt="User" class="avatar avatar-ring"/> })
                                    .collect_view()}
                            </div>
                            <div>
                                <p class="strong">"Trusted by"</p>
                                <p class="accent">"10,000+ Pet Parents"</p>
                            </div>
                        </div>
                    </div>
                    <div class="hero-media">
                        <img src=HERO_IMAGE.src alt=HERO_IMAGE.alt class="hero-image"/>
                        <div class="delivery-badge">
                            <Icon kind=IconKind::Truck class="accent"/>
                            <span>"17-min delivery"</span>
                        </div>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section class="section section-white" id=SectionId::About.fragment()>
            <div class="container">
                <Reveal variant=RevealVariant::Section>
                    <h2 class="section-title">"About Waggy"</h2>
                    <p class="section-intro muted">
                        "Waggy is revolutionizing pet care in India by providing a comprehensive platform "
                        "that connects pet owners with everything they need for their beloved companions."
                    </p>

                    <div class="two-col">
                        <div>
                            <h3 class="subheading">"Our Mission"</h3>
                            <p class="muted paragraph">
                                "We believe every pet deserves the best care possible. Our mission is to make pet care "
                                "accessible, affordable, and convenient for all pet owners across India, whether they "
                                "have household companions or farm animals."
                            </p>

                            <h3 class="subheading">"What Makes Us Different"</h3>
                            <div class="stack">
                                {DIFFERENTIATORS
                                    .iter()
                                    .map(|d| view! {
                                        <div class="differentiator">
                                            <div class="icon-tile icon-tile-warm">
                                                <Icon kind=d.icon class="accent"/>
                                            </div>
                                            <div>
                                                <h4>{d.title}</h4>
                                                <p class="muted">{d.description}</p>
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="photo-grid">
                            {ABOUT_PHOTOS
                                .iter()
                                .enumerate()
                                .map(|(i, photo)| view! {
                                    <Reveal variant=RevealVariant::Image delay=Stagger::GRID.delay(i)>
                                        <img src=photo.src alt=photo.alt class="grid-photo"/>
                                    </Reveal>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section class="section section-white" id=SectionId::Services.fragment()>
            <div class="container">
                <Reveal variant=RevealVariant::Section>
                    <h2 class="section-title">"Our Services"</h2>
                    <p class="section-intro muted">
                        "From food delivery to medical care, we provide everything your pet needs to stay happy and healthy."
                    </p>
                    <div class="three-col">
                        {SERVICES
                            .iter()
                            .map(|s| view! { <ServiceCard service=*s/> })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="section" id=SectionId::Features.fragment()>
            <div class="container">
                <Reveal variant=RevealVariant::Section>
                    <h2 class="section-title">"Key Features"</h2>
                    <p class="section-intro muted">
                        "Discover what makes Waggy the most comprehensive pet care platform in India."
                    </p>
                    <div class="two-col">
                        <div class="stack stack-lg">
                            {FEATURES
                                .iter()
                                .map(|f| view! { <FeatureItem feature=*f/> })
                                .collect_view()}
                        </div>
                        <div class="panel">
                            <h3 class="subheading">"Revolutionizing Pet Care in India"</h3>
                            <p class="muted paragraph">
                                "Waggy is transforming how pet owners access care for their beloved companions. "
                                "Our platform integrates cutting-edge technology with local partnerships."
                            </p>
                            <ul class="checklist">
                                {PLATFORM_HIGHLIGHTS
                                    .iter()
                                    .map(|item| view! {
                                        <li><span class="accent">"✓"</span>{*item}</li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="section section-white">
            <div class="container">
                <Reveal variant=RevealVariant::Section>
                    <h2 class="section-title">"What Pet Parents Say"</h2>
                    <p class="section-intro muted">
                        "Join thousands of happy pet owners who trust Waggy for all their pet care needs."
                    </p>
                    <div class="three-col">
                        {TESTIMONIALS
                            .iter()
                            .enumerate()
                            .map(|(i, t)| view! {
                                <Reveal variant=RevealVariant::Testimonial delay=Stagger::GRID.delay(i)>
                                    <TestimonialCard testimonial=*t/>
                                </Reveal>
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

/// Signup markup only. The form has no endpoint.
#[component]
fn Newsletter() -> impl IntoView {
    view! {
        <section class="newsletter">
            <div class="container narrow">
                <h2>"Join the Waggy Family"</h2>
                <p>"Subscribe to our newsletter for pet care tips, exclusive offers, and updates."</p>
                <form class="newsletter-form">
                    <input type="email" placeholder="Your email address"/>
                    <button class="btn btn-dark">"Subscribe"</button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section class="section" id=SectionId::Contact.fragment()>
            <div class="container">
                <Reveal variant=RevealVariant::Section>
                    <div class="two-col">
                        <div>
                            <h2 class="section-title left">"Get in Touch"</h2>
                            <p class="muted paragraph">
                                "Have questions about our services or want to partner with us? Reach out to our "
                                "team and we'll get back to you as soon as possible."
                            </p>

                            <div class="stack">
                                {CONTACT_DETAILS
                                    .iter()
                                    .map(|c| view! {
                                        <div class="contact-detail">
                                            <div class="icon-tile icon-tile-warm">
                                                <Icon kind=c.icon class="accent"/>
                                            </div>
                                            <div>
                                                <h3>{c.title}</h3>
                                                <p class="muted">{c.value}</p>
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>

                            <div class="follow-us">
                                <h3>"Follow Us"</h3>
                                <div class="social-tiles">
                                    {SOCIAL_LINKS
                                        .iter()
                                        .map(|s| view! {
                                            <a href=s.href class="social-tile" aria-label=s.label>
                                                <Icon kind=s.icon/>
                                            </a>
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>

                        <ContactForm/>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

/// Message form markup. Nothing is validated or sent.
#[component]
fn ContactForm() -> impl IntoView {
    view! {
        <div class="panel">
            <h3 class="subheading">"Send Us a Message"</h3>
            <form class="contact-form">
                <label>
                    <span>"Your Name"</span>
                    <input type="text"/>
                </label>
                <label>
                    <span>"Email Address"</span>
                    <input type="email"/>
                </label>
                <label>
                    <span>"Phone Number"</span>
                    <input type="tel"/>
                </label>
                <label>
                    <span>"Subject"</span>
                    <select>
                        {CONTACT_SUBJECTS
                            .iter()
                            .map(|subject| view! { <option>{*subject}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    <span>"Your Message"</span>
                    <textarea rows="4"></textarea>
                </label>
                <button type="submit" class="btn btn-primary btn-block">"Send Message"</button>
            </form>
        </div>
    }
}
