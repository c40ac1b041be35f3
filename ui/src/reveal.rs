//! Viewport-entry reveal hook and the ambient motion preference.
//!
//! The motion preference is read from the environment exactly once, at app
//! mount, and passed down as context; everything below that point is a pure
//! function of it.

use leptos::*;
use viz_engine::{MotionPreference, RevealConfig, RevealState};

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;
#[cfg(target_arch = "wasm32")]
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Clone, Copy)]
pub struct MotionCtx(pub MotionPreference);

#[cfg(target_arch = "wasm32")]
fn detect_motion() -> MotionPreference {
    let reduced = web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false);
    if reduced {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn detect_motion() -> MotionPreference {
    MotionPreference::Full
}

pub fn provide_motion() {
    provide_context(MotionCtx(detect_motion()));
}

pub fn use_motion() -> MotionPreference {
    use_context::<MotionCtx>().expect("MotionCtx not provided").0
}

/// One-shot reveal for a chart container. `false` until the container first
/// intersects the viewport above `threshold`, then `true` forever. Under
/// reduced motion it starts `true`; in the server render it is always `true`
/// so static output is the final state.
pub fn use_reveal(target: NodeRef<html::Div>, threshold: f64) -> ReadSignal<bool> {
    let motion = use_motion();
    let config = RevealConfig::new(threshold, motion);
    let initial = if cfg!(target_arch = "wasm32") {
        RevealState::new(&config).is_revealed()
    } else {
        true
    };
    let (revealed, set_revealed) = create_signal(initial);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (&target, &set_revealed);

    #[cfg(target_arch = "wasm32")]
    {
        type ObserverSlot = Rc<RefCell<Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)>>>;
        let slot: ObserverSlot = Rc::new(RefCell::new(None));
        let attached = Rc::new(Cell::new(false));

        {
            let slot = slot.clone();
            create_effect(move |_| {
                if attached.get() {
                    return;
                }
                let Some(el) = target.get() else {
                    return;
                };
                attached.set(true);
                if revealed.get_untracked() {
                    return;
                }
                let slot = slot.clone();
                spawn_local(async move {
                    // Let layout settle before measuring intersection.
                    TimeoutFuture::new(0).await;
                    let mut latch = RevealState::new(&config);
                    let set_revealed = set_revealed;
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, obs: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                                else {
                                    continue;
                                };
                                if !entry.is_intersecting() {
                                    continue;
                                }
                                // Reported ratios can land a hair under the
                                // threshold that fired the callback.
                                let ratio =
                                    entry.intersection_ratio().max(config.threshold);
                                if latch.observe(ratio, &config) {
                                    set_revealed.set(true);
                                    obs.disconnect();
                                }
                            }
                        },
                    );
                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(config.threshold));
                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &init,
                    ) {
                        observer.observe(&el);
                        *slot.borrow_mut() = Some((observer, callback));
                    }
                });
            });
        }

        on_cleanup(move || {
            if let Some((observer, _callback)) = slot.borrow_mut().take() {
                observer.disconnect();
            }
        });
    }

    revealed
}
