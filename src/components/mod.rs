mod cards;
mod footer;
mod icon;
mod nav;
mod reveal;
mod smooth_scroll;

pub use cards::{FeatureItem, ServiceCard, TestimonialCard};
pub use footer::Footer;
pub use icon::Icon;
pub use nav::Nav;
pub use reveal::Reveal;
pub use smooth_scroll::use_smooth_anchor_scroll;
