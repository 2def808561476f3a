//! Scroll-reveal and smooth-anchor behaviour.
//!
//! `reveal` and `anchor` are plain Rust and hold all of the logic; `dom` binds
//! them to `IntersectionObserver` and click listeners in the browser.

pub mod anchor;
pub mod reveal;

#[cfg(feature = "csr")]
pub mod dom;

pub use anchor::{intercept_click, AnchorInterceptor, ClickOutcome, Fragment, LinkHost, ScrollSurface};
pub use reveal::{
    Intersection, Motion, Pose, RevealPhase, RevealTrigger, RevealVariant, Stagger, Trigger,
    DEFAULT_THRESHOLD,
};
