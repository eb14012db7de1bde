use gloo_events::EventListener;
use shared::adaptivity::{Adaptivity, Platform};
use web_sys::window;
use yew::prelude::*;

use crate::telegram::Host;

fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn detect(host: &Host) -> Adaptivity {
    let navigator = window().map(|w| w.navigator());
    let platform = host
        .platform()
        .and_then(|p| Platform::from_host(&p))
        .unwrap_or_else(|| {
            let user_agent = navigator
                .as_ref()
                .and_then(|n| n.user_agent().ok())
                .unwrap_or_default();
            Platform::from_user_agent(&user_agent)
        });
    let is_touch = navigator.map_or(false, |n| n.max_touch_points() > 0);
    let (width, height) = viewport_size();
    Adaptivity::new(platform, width, height, is_touch)
}

/// Platform and size classes, refreshed on window resize.
#[hook]
pub fn use_adaptivity(host: &Host) -> Adaptivity {
    let adaptivity = {
        let host = host.clone();
        use_state(move || detect(&host))
    };

    {
        let adaptivity = adaptivity.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    let (width, height) = viewport_size();
                    adaptivity.set((*adaptivity).resized(width, height));
                })
            });
            move || drop(listener)
        });
    }

    *adaptivity
}
