use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::motion::{dom::VisibilityWatch, Trigger};
use crate::motion::{RevealPhase, RevealVariant};

/// Wraps its children in a block that animates from the variant's hidden pose
/// to its visible pose, once.
///
/// Scroll variants start when a fifth of the block is on screen; the hero
/// variant plays a keyframe entrance as soon as it is inserted.
#[component]
pub fn Reveal(
    variant: RevealVariant,
    /// Extra wait before the transition starts, for staggered grids.
    #[prop(optional)]
    delay: Duration,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let (phase, set_phase) = signal(RevealPhase::Pending);
    let node = NodeRef::<Div>::new();

    #[cfg(feature = "csr")]
    {
        let motion = variant.motion();
        let watch = StoredValue::new_local(None::<VisibilityWatch>);

        Effect::new(move |started: Option<bool>| {
            if started == Some(true) {
                return true;
            }
            let Some(el) = node.get() else {
                return false;
            };

            match motion.trigger {
                // The keyframe animation is already running.
                Trigger::OnMount => set_phase.set(RevealPhase::Triggered),
                Trigger::InView { threshold } => {
                    let on_reveal = move || {
                        tracing::debug!(
                            variant = variant.as_str(),
                            settle_ms = motion.settle_time(delay).as_millis() as u64,
                            "block revealed"
                        );
                        set_phase.set(RevealPhase::Triggered);
                    };
                    match VisibilityWatch::observe(&el, threshold, on_reveal) {
                        Ok(w) => watch.set_value(Some(w)),
                        Err(e) => {
                            tracing::warn!(error = %e, variant = variant.as_str(), "block will stay hidden")
                        }
                    }
                }
            }
            true
        });

        on_cleanup(move || {
            watch.try_update_value(|w| w.take());
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = set_phase;

    let class = format!("reveal reveal-{} {}", variant.as_str(), class)
        .trim_end()
        .to_string();

    let keyframes = variant
        .keyframes()
        .map(|css| view! { <style>{css}</style> });

    view! {
        {keyframes}
        <div node_ref=node class=class style=move || variant.style(phase.get(), delay)>
            {children()}
        </div>
    }
}
