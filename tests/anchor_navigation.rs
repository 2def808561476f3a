//! Anchor interception against an in-memory document.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use waggy::models::{SectionId, NAV_LINKS};
use waggy::motion::{intercept_click, AnchorInterceptor, ClickOutcome, LinkHost, ScrollSurface};

/// A page with element ids, links by href, and a record of what happened.
#[derive(Default)]
struct Page {
    ids: Vec<String>,
    links: Vec<String>,
    bound: RefCell<BTreeSet<usize>>,
    scrolled_to: RefCell<Vec<String>>,
    scroll_top: RefCell<u32>,
    navigations: RefCell<Vec<String>>,
}

impl Page {
    fn landing() -> Rc<Self> {
        let mut links: Vec<String> = NAV_LINKS.iter().map(|l| l.section.href().to_string()).collect();
        links.push("#pricing".into());
        links.push("https://www.pexels.com".into());
        Rc::new(Self {
            ids: SectionId::all().iter().map(|s| s.fragment().to_string()).collect(),
            links,
            ..Default::default()
        })
    }

    /// Simulates a click: the bound handler runs if present, otherwise the
    /// browser performs its default navigation.
    fn click(&self, link: usize) -> Option<ClickOutcome> {
        let href = &self.links[link];
        if self.bound.borrow().contains(&link) {
            let outcome = intercept_click(href, self);
            if !outcome.prevents_default() {
                self.navigations.borrow_mut().push(href.clone());
            }
            Some(outcome)
        } else {
            self.navigations.borrow_mut().push(href.clone());
            None
        }
    }

    fn link_index(&self, href: &str) -> usize {
        self.links.iter().position(|l| l == href).unwrap()
    }
}

impl ScrollSurface for Page {
    fn scroll_element_into_view(&self, id: &str) -> bool {
        if self.ids.iter().any(|known| known == id) {
            self.scrolled_to.borrow_mut().push(id.to_string());
            true
        } else {
            false
        }
    }

    fn scroll_to_top(&self) {
        *self.scroll_top.borrow_mut() += 1;
    }
}

struct Host(Rc<Page>);

impl LinkHost for Host {
    type Link = usize;

    fn fragment_links(&self) -> Vec<usize> {
        self.0
            .links
            .iter()
            .enumerate()
            .filter(|(_, href)| href.starts_with('#'))
            .map(|(i, _)| i)
            .collect()
    }

    fn attach(&self, link: &usize) {
        self.0.bound.borrow_mut().insert(*link);
    }

    fn detach(&self, link: &usize) {
        self.0.bound.borrow_mut().remove(link);
    }
}

#[test]
fn binds_only_fragment_links() {
    let page = Page::landing();
    let interceptor = AnchorInterceptor::install(Host(page.clone()));
    assert_eq!(interceptor.len(), NAV_LINKS.len() + 1);
    let external = page.link_index("https://www.pexels.com");
    assert!(!page.bound.borrow().contains(&external));
}

#[test]
fn contact_link_scrolls_without_navigating() {
    let page = Page::landing();
    let _interceptor = AnchorInterceptor::install(Host(page.clone()));

    let outcome = page.click(page.link_index("#contact"));
    assert_eq!(outcome, Some(ClickOutcome::ScrolledTo("contact".into())));
    assert_eq!(*page.scrolled_to.borrow(), vec!["contact".to_string()]);
    assert!(page.navigations.borrow().is_empty());
}

#[test]
fn missing_target_is_inert() {
    let page = Page::landing();
    let _interceptor = AnchorInterceptor::install(Host(page.clone()));

    let outcome = page.click(page.link_index("#pricing"));
    assert_eq!(outcome, Some(ClickOutcome::Unresolved("pricing".into())));
    assert!(page.scrolled_to.borrow().is_empty());
    assert!(page.navigations.borrow().is_empty());
}

#[test]
fn home_link_scrolls_to_top() {
    let page = Page::landing();
    let _interceptor = AnchorInterceptor::install(Host(page.clone()));

    assert_eq!(page.click(page.link_index("#")), Some(ClickOutcome::ScrolledToTop));
    assert_eq!(*page.scroll_top.borrow(), 1);
}

#[test]
fn no_handler_fires_after_teardown() {
    let page = Page::landing();
    let interceptor = AnchorInterceptor::install(Host(page.clone()));
    assert!(!interceptor.is_empty());
    interceptor.uninstall();

    assert!(page.bound.borrow().is_empty());
    let about = page.link_index("#about");
    assert_eq!(page.click(about), None);
    assert!(page.scrolled_to.borrow().is_empty());
}

#[test]
fn reinstall_after_teardown_binds_again() {
    let page = Page::landing();
    drop(AnchorInterceptor::install(Host(page.clone())));
    let _again = AnchorInterceptor::install(Host(page.clone()));

    assert_eq!(
        page.click(page.link_index("#services")),
        Some(ClickOutcome::ScrolledTo("services".into()))
    );
}
