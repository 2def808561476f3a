//! Reveal-on-scroll core.
//!
//! Each animated block owns a [`RevealTrigger`]: a two-state machine that moves
//! from `Pending` to `Triggered` the first time an intersection sample reaches
//! the block's threshold, and never moves back. The visual side is a small
//! table of [`Motion`]s keyed by [`RevealVariant`].

use std::time::Duration;

/// CSS form of the ease-out curve used by every reveal.
pub const EASE_OUT: &str = "cubic-bezier(0, 0, 0.58, 1)";

/// Fraction of a block that must be inside the viewport before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// A visual pose: opacity plus a 2D translate and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    /// Fully opaque, untransformed.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    const fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    pub fn transform_css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
    }
}

/// When a block starts its transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Plays unconditionally as soon as the block is mounted.
    OnMount,
    /// Plays the first time the visible fraction reaches `threshold`.
    InView { threshold: f64 },
}

/// Hidden and visible poses for one variant, with timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub hidden: Pose,
    pub visible: Pose,
    pub duration: Duration,
    pub trigger: Trigger,
}

impl Motion {
    pub fn pose(&self, phase: RevealPhase) -> Pose {
        match phase {
            RevealPhase::Pending => self.hidden,
            RevealPhase::Triggered => self.visible,
        }
    }

    /// Inline style for a block in `phase`. The transition is always present so
    /// the browser animates the flip from hidden to visible.
    pub fn style(&self, phase: RevealPhase, delay: Duration) -> String {
        let pose = self.pose(phase);
        let duration = self.duration.as_millis();
        let delay = delay.as_millis();
        format!(
            "opacity: {}; transform: {}; \
             transition: opacity {duration}ms {EASE_OUT} {delay}ms, transform {duration}ms {EASE_OUT} {delay}ms; \
             will-change: opacity, transform;",
            pose.opacity,
            pose.transform_css(),
        )
    }

    /// Inline style for an [`Trigger::OnMount`] block: a keyframe animation
    /// named `name`, held at the hidden pose through `delay`. It does not
    /// depend on the phase, since a transition needs a computed starting style
    /// that a freshly inserted node never has.
    pub fn entrance_style(&self, name: &str, delay: Duration) -> String {
        format!(
            "animation: {name} {}ms {EASE_OUT} {}ms both; will-change: opacity, transform;",
            self.duration.as_millis(),
            delay.as_millis(),
        )
    }

    /// `@keyframes` rule from the hidden pose to the visible one.
    pub fn keyframes_css(&self, name: &str) -> String {
        format!(
            "@keyframes {name} {{ from {{ opacity: {}; transform: {}; }} to {{ opacity: {}; transform: {}; }} }}",
            self.hidden.opacity,
            self.hidden.transform_css(),
            self.visible.opacity,
            self.visible.transform_css(),
        )
    }

    /// Time after the trigger at which the block has reached its visible pose.
    pub fn settle_time(&self, delay: Duration) -> Duration {
        delay + self.duration
    }
}

/// The presentation variants used on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealVariant {
    Hero,
    Section,
    Image,
    Testimonial,
}

impl RevealVariant {
    pub fn motion(self) -> Motion {
        let in_view = Trigger::InView {
            threshold: DEFAULT_THRESHOLD,
        };
        match self {
            RevealVariant::Hero => Motion {
                hidden: Pose {
                    scale: 0.9,
                    ..Pose::hidden()
                },
                visible: Pose::REST,
                duration: Duration::from_millis(800),
                trigger: Trigger::OnMount,
            },
            RevealVariant::Section => Motion {
                hidden: Pose {
                    y: 50.0,
                    ..Pose::hidden()
                },
                visible: Pose::REST,
                duration: Duration::from_millis(600),
                trigger: in_view,
            },
            RevealVariant::Image => Motion {
                hidden: Pose {
                    scale: 0.8,
                    ..Pose::hidden()
                },
                visible: Pose::REST,
                duration: Duration::from_millis(500),
                trigger: in_view,
            },
            RevealVariant::Testimonial => Motion {
                hidden: Pose {
                    x: -20.0,
                    ..Pose::hidden()
                },
                visible: Pose::REST,
                duration: Duration::from_millis(500),
                trigger: in_view,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RevealVariant::Hero => "hero",
            RevealVariant::Section => "section",
            RevealVariant::Image => "image",
            RevealVariant::Testimonial => "testimonial",
        }
    }

    pub fn animation_name(&self) -> String {
        format!("reveal-{}", self.as_str())
    }

    /// Inline style for a block of this variant in `phase`.
    pub fn style(&self, phase: RevealPhase, delay: Duration) -> String {
        let motion = self.motion();
        match motion.trigger {
            Trigger::OnMount => motion.entrance_style(&self.animation_name(), delay),
            Trigger::InView { .. } => motion.style(phase, delay),
        }
    }

    /// Stylesheet the variant needs next to its inline style, if any.
    pub fn keyframes(&self) -> Option<String> {
        let motion = self.motion();
        match motion.trigger {
            Trigger::OnMount => Some(motion.keyframes_css(&self.animation_name())),
            Trigger::InView { .. } => None,
        }
    }

    pub fn all() -> Vec<RevealVariant> {
        vec![
            RevealVariant::Hero,
            RevealVariant::Section,
            RevealVariant::Image,
            RevealVariant::Testimonial,
        ]
    }
}

/// Evenly spaced delays for a grid of blocks that reveal together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub base: Duration,
    pub step: Duration,
}

impl Stagger {
    /// 100ms, 200ms, 300ms, ...
    pub const GRID: Stagger = Stagger {
        base: Duration::from_millis(100),
        step: Duration::from_millis(100),
    };

    pub fn delay(&self, index: usize) -> Duration {
        self.base + self.step * index as u32
    }
}

/// One visibility sample for a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Fraction of the block's area inside the viewport, `0.0..=1.0`.
    pub ratio: f64,
    pub intersecting: bool,
}

impl Intersection {
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio,
            intersecting: ratio > 0.0,
        }
    }

    pub fn reaches(&self, threshold: f64) -> bool {
        self.intersecting && !self.ratio.is_nan() && self.ratio >= threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Pending,
    Triggered,
}

/// Fire-once visibility trigger for a single block.
#[derive(Debug, Clone)]
pub struct RevealTrigger {
    threshold: f64,
    phase: RevealPhase,
}

impl RevealTrigger {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            phase: RevealPhase::Pending,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_triggered(&self) -> bool {
        self.phase == RevealPhase::Triggered
    }

    /// Feed one sample. Returns `true` only on the `Pending -> Triggered` step.
    pub fn observe(&mut self, sample: Intersection) -> bool {
        if self.is_triggered() || !sample.reaches(self.threshold) {
            return false;
        }
        self.phase = RevealPhase::Triggered;
        true
    }
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_fires_once() {
        let mut trigger = RevealTrigger::default();
        assert!(!trigger.observe(Intersection::new(0.1)));
        assert!(trigger.observe(Intersection::new(0.25)));
        assert!(!trigger.observe(Intersection::new(0.9)));
        assert!(!trigger.observe(Intersection::new(0.0)));
        assert_eq!(trigger.phase(), RevealPhase::Triggered);
    }

    #[test]
    fn below_threshold_stays_pending() {
        let mut trigger = RevealTrigger::new(0.5);
        for ratio in [0.0, 0.1, 0.3, 0.49] {
            assert!(!trigger.observe(Intersection::new(ratio)));
        }
        assert!(!trigger.is_triggered());
    }

    #[test]
    fn ratio_exactly_at_threshold_counts() {
        let mut trigger = RevealTrigger::new(0.2);
        assert!(trigger.observe(Intersection::new(0.2)));
    }

    #[test]
    fn non_intersecting_sample_is_ignored_even_at_zero_threshold() {
        let mut trigger = RevealTrigger::new(0.0);
        assert!(!trigger.observe(Intersection {
            ratio: 0.0,
            intersecting: false,
        }));
        assert!(trigger.observe(Intersection {
            ratio: 0.0,
            intersecting: true,
        }));
    }

    #[test]
    fn nan_input_is_ignored() {
        let mut trigger = RevealTrigger::new(f64::NAN);
        assert_eq!(trigger.threshold(), DEFAULT_THRESHOLD);
        assert!(!trigger.observe(Intersection {
            ratio: f64::NAN,
            intersecting: true,
        }));
        assert!(!trigger.is_triggered());
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealTrigger::new(1.7).threshold(), 1.0);
        assert_eq!(RevealTrigger::new(-0.3).threshold(), 0.0);
    }

    #[test]
    fn variant_table_matches_page_design() {
        let section = RevealVariant::Section.motion();
        assert_eq!(section.hidden.y, 50.0);
        assert_eq!(section.hidden.opacity, 0.0);
        assert_eq!(section.visible, Pose::REST);
        assert_eq!(section.duration, Duration::from_millis(600));

        let image = RevealVariant::Image.motion();
        assert_eq!(image.hidden.scale, 0.8);

        let testimonial = RevealVariant::Testimonial.motion();
        assert_eq!(testimonial.hidden.x, -20.0);

        let hero = RevealVariant::Hero.motion();
        assert_eq!(hero.trigger, Trigger::OnMount);
        assert_eq!(hero.hidden.scale, 0.9);
        assert_eq!(hero.duration, Duration::from_millis(800));
    }

    #[test]
    fn scroll_variants_use_default_threshold() {
        for variant in RevealVariant::all() {
            if variant == RevealVariant::Hero {
                continue;
            }
            assert_eq!(
                variant.motion().trigger,
                Trigger::InView {
                    threshold: DEFAULT_THRESHOLD
                }
            );
        }
    }

    #[test]
    fn variant_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            RevealVariant::all().iter().map(|v| v.as_str()).collect();
        assert_eq!(names.len(), RevealVariant::all().len());
        assert_eq!(RevealVariant::Hero.animation_name(), "reveal-hero");
    }

    #[test]
    fn hero_enters_with_keyframes_not_a_transition() {
        let hero = RevealVariant::Hero;
        let pending = hero.style(RevealPhase::Pending, Duration::ZERO);
        assert_eq!(pending, hero.style(RevealPhase::Triggered, Duration::ZERO));
        assert!(pending.contains("animation: reveal-hero 800ms cubic-bezier(0, 0, 0.58, 1) 0ms both;"));
        assert!(!pending.contains("transition"));

        let keyframes = hero.keyframes().unwrap_or_default();
        assert!(keyframes.starts_with("@keyframes reveal-hero {"));
        assert!(keyframes.contains("from { opacity: 0; transform: translate(0px, 0px) scale(0.9); }"));
        assert!(keyframes.contains("to { opacity: 1; transform: translate(0px, 0px) scale(1); }"));
    }

    #[test]
    fn scroll_variants_keep_transitions() {
        for variant in [
            RevealVariant::Section,
            RevealVariant::Image,
            RevealVariant::Testimonial,
        ] {
            assert_eq!(variant.keyframes(), None);
            let style = variant.style(RevealPhase::Pending, Duration::ZERO);
            assert_eq!(style, variant.motion().style(RevealPhase::Pending, Duration::ZERO));
            assert!(style.contains("transition: opacity"));
        }
    }

    #[test]
    fn stagger_spacing() {
        let delays: Vec<_> = (0..4).map(|i| Stagger::GRID.delay(i).as_millis()).collect();
        assert_eq!(delays, vec![100, 200, 300, 400]);
    }

    #[test]
    fn style_reflects_phase_and_delay() {
        let motion = RevealVariant::Section.motion();
        let hidden = motion.style(RevealPhase::Pending, Duration::from_millis(200));
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate(0px, 50px) scale(1)"));
        assert!(hidden.contains("opacity 600ms cubic-bezier(0, 0, 0.58, 1) 200ms"));

        let visible = motion.style(RevealPhase::Triggered, Duration::ZERO);
        assert!(visible.contains("opacity: 1;"));
        assert!(visible.contains("translate(0px, 0px) scale(1)"));
    }

    #[test]
    fn settle_time_adds_delay() {
        let motion = RevealVariant::Image.motion();
        assert_eq!(
            motion.settle_time(Duration::from_millis(300)),
            Duration::from_millis(800)
        );
    }
}
