//! One-shot visibility reveal.

use leptos::html::ElementType;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Visible fraction required when the caller has no preference
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Browsers round `intersectionRatio`, so a crossing can report slightly under the threshold
const RATIO_TOLERANCE: f64 = 1e-3;

/// Clamp a requested threshold into the range IntersectionObserver accepts
pub fn normalize_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_REVEAL_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// What the observer callback should do with one entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealStep {
    /// Not visible enough yet, keep observing
    Pending,
    /// First qualifying entry: set the flag and disconnect
    Reveal,
    /// Already revealed, ignore
    Done,
}

/// Monotonic not-seen -> seen latch
#[derive(Clone, Copy, Debug)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: normalize_threshold(threshold),
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection entry. Returns `Reveal` at most once per latch.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> RevealStep {
        if self.revealed {
            return RevealStep::Done;
        }
        if is_intersecting && ratio + RATIO_TOLERANCE >= self.threshold {
            self.revealed = true;
            RevealStep::Reveal
        } else {
            RevealStep::Pending
        }
    }
}

/// Class string for a revealable block: `base` plus `is-visible` once seen
pub fn reveal_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{} is-visible", base)
    } else {
        base.to_string()
    }
}

/// Handle returned by [`use_reveal`]: attach `node_ref` to the element, read `visible`
pub struct Reveal<E>
where
    E: ElementType,
    E::Output: 'static,
{
    pub node_ref: NodeRef<E>,
    pub visible: ReadSignal<bool>,
}

impl<E> Clone for Reveal<E>
where
    E: ElementType,
    E::Output: 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Reveal<E>
where
    E: ElementType,
    E::Output: 'static,
{
}

impl<E> Reveal<E>
where
    E: ElementType,
    E::Output: 'static,
{
    /// Reactive class closure for use in `class=` attributes
    pub fn class(self, base: &'static str) -> impl Fn() -> String + Copy + 'static {
        let visible = self.visible;
        move || reveal_class(base, visible.get())
    }
}

/// A live observer plus the JS callback it calls into.
/// The closure must outlive the observer, so both are dropped together.
struct ActiveObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl ActiveObserver {
    fn attach(
        target: &web_sys::Element,
        threshold: f64,
        set_visible: WriteSignal<bool>,
    ) -> Result<Self, JsValue> {
        let mut latch = RevealLatch::new(threshold);

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    match latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                        RevealStep::Pending => {}
                        RevealStep::Reveal => {
                            set_visible.set(true);
                            observer.disconnect();
                            return;
                        }
                        RevealStep::Done => return,
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(latch.threshold()));
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Watch an element and flip `visible` to true the first time at least
/// `threshold` of it is inside the viewport. Observation stops after that.
///
/// Nothing happens until the returned `node_ref` is attached to a mounted element.
pub fn use_reveal<E>(threshold: f64) -> Reveal<E>
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    let threshold = normalize_threshold(threshold);
    let node_ref = NodeRef::<E>::new();
    let (visible, set_visible) = signal(false);
    let active = StoredValue::new_local(None::<ActiveObserver>);

    Effect::new(move |_| {
        let Some(target) = node_ref.get() else {
            return;
        };
        if visible.get_untracked() {
            return;
        }

        // Element swapped under the same ref: drop the old observer first
        active.update_value(|slot| {
            if let Some(prev) = slot.take() {
                prev.disconnect();
            }
        });

        match ActiveObserver::attach(target.unchecked_ref(), threshold, set_visible) {
            Ok(observer) => active.set_value(Some(observer)),
            Err(err) => {
                log::warn!("[REVEAL] IntersectionObserver unavailable, showing content: {:?}", err);
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        active.try_update_value(|slot| {
            if let Some(observer) = slot.take() {
                observer.disconnect();
            }
        });
    });

    Reveal { node_ref, visible }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_stays_pending_below_threshold() {
        let mut latch = RevealLatch::new(0.5);
        assert_eq!(latch.observe(true, 0.2), RevealStep::Pending);
        assert_eq!(latch.observe(false, 0.0), RevealStep::Pending);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_latch_reveals_once() {
        let mut latch = RevealLatch::new(0.1);
        assert_eq!(latch.observe(true, 0.1), RevealStep::Reveal);
        assert!(latch.is_revealed());

        // Leaving and re-entering the viewport never flips it back
        assert_eq!(latch.observe(false, 0.0), RevealStep::Done);
        assert_eq!(latch.observe(true, 1.0), RevealStep::Done);
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_needs_intersection_flag() {
        let mut latch = RevealLatch::new(0.0);
        assert_eq!(latch.observe(false, 0.0), RevealStep::Pending);
        assert_eq!(latch.observe(true, 0.0), RevealStep::Reveal);
    }

    #[test]
    fn test_latch_tolerates_ratio_rounding() {
        let mut latch = RevealLatch::new(0.2);
        assert_eq!(latch.observe(true, 0.198), RevealStep::Pending);
        assert_eq!(latch.observe(true, 0.1996), RevealStep::Reveal);
    }

    #[test]
    fn test_normalize_threshold() {
        assert_eq!(normalize_threshold(0.3), 0.3);
        assert_eq!(normalize_threshold(-1.0), 0.0);
        assert_eq!(normalize_threshold(4.0), 1.0);
        assert_eq!(normalize_threshold(f64::NAN), DEFAULT_REVEAL_THRESHOLD);
    }

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class("reveal fade-up", false), "reveal fade-up");
        assert_eq!(reveal_class("reveal fade-up", true), "reveal fade-up is-visible");
    }
}
