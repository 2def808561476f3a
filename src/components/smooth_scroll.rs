/// Makes every `#fragment` link on the page scroll smoothly to its target.
///
/// Handlers are bound once the page has mounted and removed again when the
/// calling component is cleaned up.
pub fn use_smooth_anchor_scroll() {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::*;

        use crate::motion::{dom::DocumentLinks, AnchorInterceptor};

        let interceptor = StoredValue::new_local(None::<AnchorInterceptor<DocumentLinks>>);

        Effect::new(move |_| match DocumentLinks::new() {
            Ok(links) => interceptor.set_value(Some(AnchorInterceptor::install(links))),
            Err(e) => tracing::warn!(error = %e, "smooth anchor scrolling unavailable"),
        });

        on_cleanup(move || {
            interceptor.try_update_value(|i| i.take().map(AnchorInterceptor::uninstall));
        });
    }
}
