//! Same-page anchor navigation.
//!
//! Clicks on `#fragment` links are turned into smooth scrolls. The browser side
//! lives in [`crate::motion::dom`]; everything here works against the
//! [`ScrollSurface`] and [`LinkHost`] traits so it can be driven without a DOM.

/// Selector for links whose target is a same-page fragment.
pub const FRAGMENT_LINK_SELECTOR: &str = r##"a[href^="#"]"##;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// `#` or `#top`: the top of the document.
    Top,
    Element(&'a str),
}

impl<'a> Fragment<'a> {
    pub fn parse(href: &'a str) -> Option<Self> {
        let id = href.trim().strip_prefix('#')?;
        if id.is_empty() || id.eq_ignore_ascii_case("top") {
            Some(Fragment::Top)
        } else {
            Some(Fragment::Element(id))
        }
    }
}

/// Something that can be scrolled to a fragment.
pub trait ScrollSurface {
    /// Smoothly scroll the element with `id` to the top of the viewport.
    /// Returns `false` when no element has that id.
    fn scroll_element_into_view(&self, id: &str) -> bool;

    fn scroll_to_top(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not a fragment link; the default navigation proceeds.
    Ignored,
    ScrolledToTop,
    ScrolledTo(String),
    /// Fragment names no element. Nothing happens.
    Unresolved(String),
}

impl ClickOutcome {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored)
    }
}

pub fn intercept_click<S: ScrollSurface + ?Sized>(href: &str, surface: &S) -> ClickOutcome {
    match Fragment::parse(href) {
        None => ClickOutcome::Ignored,
        Some(Fragment::Top) => {
            surface.scroll_to_top();
            ClickOutcome::ScrolledToTop
        }
        Some(Fragment::Element(id)) => {
            if surface.scroll_element_into_view(id) {
                ClickOutcome::ScrolledTo(id.to_string())
            } else {
                tracing::debug!(fragment = id, "anchor target not found");
                ClickOutcome::Unresolved(id.to_string())
            }
        }
    }
}

/// A document whose fragment links can carry the smooth-scroll click handler.
pub trait LinkHost {
    type Link;

    /// Every link whose target begins with `#`.
    fn fragment_links(&self) -> Vec<Self::Link>;

    fn attach(&self, link: &Self::Link);

    fn detach(&self, link: &Self::Link);
}

/// Owns the click handlers attached at install time.
/// Dropping it detaches every one of them.
pub struct AnchorInterceptor<H: LinkHost> {
    host: H,
    links: Vec<H::Link>,
}

impl<H: LinkHost> AnchorInterceptor<H> {
    pub fn install(host: H) -> Self {
        let links = host.fragment_links();
        for link in &links {
            host.attach(link);
        }
        tracing::debug!(links = links.len(), "smooth anchor scrolling installed");
        Self { host, links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn uninstall(self) {
        drop(self);
    }
}

impl<H: LinkHost> Drop for AnchorInterceptor<H> {
    fn drop(&mut self) {
        for link in self.links.drain(..) {
            self.host.detach(&link);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeSurface {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl ScrollSurface for FakeSurface {
        fn scroll_element_into_view(&self, id: &str) -> bool {
            if self.ids.contains(&id) {
                self.scrolled.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }

        fn scroll_to_top(&self) {
            self.scrolled.borrow_mut().push("<top>".to_string());
        }
    }

    #[test]
    fn parses_fragments() {
        assert_eq!(Fragment::parse("#about"), Some(Fragment::Element("about")));
        assert_eq!(Fragment::parse("#"), Some(Fragment::Top));
        assert_eq!(Fragment::parse("#top"), Some(Fragment::Top));
        assert_eq!(Fragment::parse("/about"), None);
        assert_eq!(Fragment::parse("https://waggy.in/#about"), None);
    }

    #[test]
    fn known_fragment_scrolls() {
        let surface = FakeSurface {
            ids: vec!["contact"],
            ..Default::default()
        };
        let outcome = intercept_click("#contact", &surface);
        assert_eq!(outcome, ClickOutcome::ScrolledTo("contact".into()));
        assert!(outcome.prevents_default());
        assert_eq!(*surface.scrolled.borrow(), vec!["contact".to_string()]);
    }

    #[test]
    fn unknown_fragment_does_nothing() {
        let surface = FakeSurface::default();
        let outcome = intercept_click("#pricing", &surface);
        assert_eq!(outcome, ClickOutcome::Unresolved("pricing".into()));
        assert!(outcome.prevents_default());
        assert!(surface.scrolled.borrow().is_empty());
    }

    #[test]
    fn external_links_are_left_alone() {
        let surface = FakeSurface::default();
        let outcome = intercept_click("mailto:support@waggy.in", &surface);
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert!(!outcome.prevents_default());
    }

    #[test]
    fn bare_hash_goes_to_top() {
        let surface = FakeSurface::default();
        assert_eq!(intercept_click("#", &surface), ClickOutcome::ScrolledToTop);
        assert_eq!(*surface.scrolled.borrow(), vec!["<top>".to_string()]);
    }
}
