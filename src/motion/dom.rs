//! Browser bindings for the reveal and anchor cores.

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
    Window,
};

use super::anchor::{intercept_click, LinkHost, ScrollSurface, FRAGMENT_LINK_SELECTOR};
use super::reveal::{Intersection, RevealTrigger};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl DomError {
    fn js(context: &'static str, value: JsValue) -> Self {
        DomError::Js {
            context,
            message: format!("{value:?}"),
        }
    }
}

fn window_and_document() -> Result<(Window, Document), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    Ok((window, document))
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` watching one element until it first reveals.
///
/// The observer disconnects itself after the trigger fires. Dropping the watch
/// disconnects it as well, so an unmounted block stops being observed.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilityWatch {
    pub fn observe(
        target: &Element,
        threshold: f64,
        on_reveal: impl FnOnce() + 'static,
    ) -> Result<Self, DomError> {
        let mut trigger = RevealTrigger::new(threshold);
        let threshold = trigger.threshold();
        let mut on_reveal = Some(on_reveal);

        let callback: EntriesCallback =
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let sample = Intersection {
                        ratio: entry.intersection_ratio(),
                        intersecting: entry.is_intersecting(),
                    };
                    if trigger.observe(sample) {
                        observer.disconnect();
                        if let Some(on_reveal) = on_reveal.take() {
                            on_reveal();
                        }
                        break;
                    }
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| DomError::js("creating IntersectionObserver", e))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Smooth scrolling on the live window.
pub struct WindowScroll {
    window: Window,
    document: Document,
}

impl WindowScroll {
    pub fn new() -> Result<Self, DomError> {
        let (window, document) = window_and_document()?;
        Ok(Self { window, document })
    }
}

impl ScrollSurface for WindowScroll {
    fn scroll_element_into_view(&self, id: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// The document's `a[href^="#"]` links, sharing one click closure.
pub struct DocumentLinks {
    document: Document,
    on_click: Closure<dyn FnMut(MouseEvent)>,
}

impl DocumentLinks {
    pub fn new() -> Result<Self, DomError> {
        let surface = WindowScroll::new()?;
        let document = surface.document.clone();

        let on_click = Closure::new(move |ev: MouseEvent| {
            let href = ev
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|link| link.get_attribute("href"));
            let Some(href) = href else {
                return;
            };
            if intercept_click(&href, &surface).prevents_default() {
                ev.prevent_default();
            }
        });

        Ok(Self { document, on_click })
    }
}

impl LinkHost for DocumentLinks {
    type Link = Element;

    fn fragment_links(&self) -> Vec<Element> {
        let nodes = match self.document.query_selector_all(FRAGMENT_LINK_SELECTOR) {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::warn!(error = %DomError::js("querying anchor links", e), "no anchors bound");
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn attach(&self, link: &Element) {
        if let Err(e) =
            link.add_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref())
        {
            tracing::warn!(error = %DomError::js("attaching click handler", e), "anchor left unbound");
        }
    }

    fn detach(&self, link: &Element) {
        let _ = link
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
    }
}
