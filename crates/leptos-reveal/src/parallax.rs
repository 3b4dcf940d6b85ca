//! Scroll-linked parallax offset.

use leptos::html::ElementType;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Fraction of the container's viewport offset applied as translation
pub const PARALLAX_SPEED: f64 = 0.15;

/// Below this viewport width no scroll listener is registered
pub const PARALLAX_MIN_VIEWPORT_PX: f64 = 768.0;

/// Whether parallax should run at this viewport width
pub fn parallax_enabled(viewport_width: f64) -> bool {
    viewport_width >= PARALLAX_MIN_VIEWPORT_PX
}

/// Offset for a container whose bounding box spans `top..bottom` in viewport
/// coordinates. `None` when the container is vertically off screen.
pub fn parallax_offset(top: f64, bottom: f64, viewport_height: f64, speed: f64) -> Option<f64> {
    if top < viewport_height && bottom > 0.0 {
        Some(top * speed)
    } else {
        None
    }
}

fn viewport_dimension(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// Recompute and apply the offset for one scroll event
fn apply_parallax(window: &web_sys::Window, target: &web_sys::HtmlElement) {
    let Some(container) = target.parent_element() else {
        return;
    };
    let rect = container.get_bounding_client_rect();
    let viewport_height = viewport_dimension(window.inner_height());

    if let Some(offset) = parallax_offset(rect.top(), rect.bottom(), viewport_height, PARALLAX_SPEED) {
        let _ = target
            .style()
            .set_property("transform", &format!("translateY({}px)", offset));
    }
}

/// Registered `scroll` listener, removed when dropped from the hook's slot
struct ScrollListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ScrollListener {
    fn bind(window: &web_sys::Window, target: web_sys::HtmlElement) -> Result<Self, JsValue> {
        let win = window.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            apply_parallax(&win, &target);
        });

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            window: window.clone(),
            callback,
        })
    }

    fn remove(self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

/// Translate the attached element vertically as its parent scrolls past.
///
/// Attach the returned ref to the decorative layer; its parent is the
/// container whose position drives the offset.
pub fn use_parallax<E>() -> NodeRef<E>
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    let node_ref = NodeRef::<E>::new();
    let listener = StoredValue::new_local(None::<ScrollListener>);

    Effect::new(move |_| {
        let Some(target) = node_ref.get() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };

        let width = viewport_dimension(window.inner_width());
        if !parallax_enabled(width) {
            log::debug!("[PARALLAX] viewport {}px below breakpoint, not listening", width);
            return;
        }

        listener.update_value(|slot| {
            if let Some(prev) = slot.take() {
                prev.remove();
            }
        });

        match ScrollListener::bind(&window, target.unchecked_into()) {
            Ok(bound) => listener.set_value(Some(bound)),
            Err(err) => log::warn!("[PARALLAX] failed to bind scroll listener: {:?}", err),
        }
    });

    on_cleanup(move || {
        listener.try_update_value(|slot| {
            if let Some(bound) = slot.take() {
                bound.remove();
            }
        });
    });

    node_ref
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_below_breakpoint() {
        assert!(!parallax_enabled(375.0));
        assert!(!parallax_enabled(767.0));
        assert!(parallax_enabled(768.0));
        assert!(parallax_enabled(1440.0));
    }

    fn approx(actual: Option<f64>, expected: f64) -> bool {
        actual.map_or(false, |v| (v - expected).abs() < 1e-9)
    }

    #[test]
    fn test_offset_scales_container_top() {
        assert!(approx(parallax_offset(200.0, 800.0, 900.0, PARALLAX_SPEED), 30.0));
        // Container scrolled partly above the fold gives a negative shift
        assert!(approx(parallax_offset(-100.0, 500.0, 900.0, PARALLAX_SPEED), -15.0));
    }

    #[test]
    fn test_offset_skipped_off_screen() {
        // Below the viewport
        assert_eq!(parallax_offset(900.0, 1500.0, 900.0, PARALLAX_SPEED), None);
        // Above the viewport
        assert_eq!(parallax_offset(-600.0, 0.0, 900.0, PARALLAX_SPEED), None);
    }

    #[test]
    fn test_offset_is_idempotent() {
        let first = parallax_offset(120.0, 700.0, 800.0, PARALLAX_SPEED);
        let second = parallax_offset(120.0, 700.0, 800.0, PARALLAX_SPEED);
        assert_eq!(first, second);
    }
}
