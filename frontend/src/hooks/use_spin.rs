use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::adaptivity::Adaptivity;
use shared::constants::STRIP_REPETITIONS;
use shared::prize_catalog::{roulette_catalog, PrizeEntry};
use shared::spin::{
    advance_shared, easing_for, SpinEvent, SpinMachine, SpinPhase, SpinPlan, StripGeometry,
};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::telegram::Host;

#[derive(Clone)]
pub struct SpinHandle {
    pub phase: SpinPhase,
    pub winner: Option<PrizeEntry>,
    pub geometry: StripGeometry,
    /// The catalog repeated `geometry.repetitions` times, as laid out on screen.
    pub strip: Rc<Vec<PrizeEntry>>,
    pub spin: Callback<()>,
    pub viewport_ref: NodeRef,
    pub strip_ref: NodeRef,
}

impl SpinHandle {
    pub fn is_idle(&self) -> bool {
        self.phase == SpinPhase::Idle
    }
}

#[derive(Default)]
struct SpinTimers {
    reveal: Option<Timeout>,
    hide: Option<Timeout>,
    frame: Option<AnimationFrame>,
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Snaps the strip back to the start, then animates it to the plan's offset on the next frame.
fn animate_strip(strip: &HtmlElement, plan: &SpinPlan, easing: &str) -> AnimationFrame {
    let style = strip.style();
    let _ = style.set_property("transition", "none");
    let _ = style.set_property("transform", "translateX(0px)");
    // Reading layout flushes the reset before the transition is applied
    let _ = strip.offset_width();

    let strip = strip.clone();
    let transition = format!("transform {}ms {}", plan.duration_ms, easing);
    let transform = format!("translateX(-{}px)", plan.offset_px);
    request_animation_frame(move |_| {
        let style = strip.style();
        let _ = style.set_property("transition", &transition);
        let _ = style.set_property("transform", &transform);
    })
}

#[hook]
pub fn use_spin(host: &Host, adaptivity: Adaptivity) -> SpinHandle {
    let machine = use_mut_ref(|| SpinMachine::new(roulette_catalog()));
    let rng = use_mut_ref(SmallRng::from_entropy);
    let timers = use_mut_ref(SpinTimers::default);
    let phase = use_state(|| SpinPhase::Idle);
    let strip = use_memo((), {
        let machine = machine.clone();
        move |_| {
            machine
                .borrow()
                .catalog()
                .strip(STRIP_REPETITIONS)
                .cloned()
                .collect::<Vec<_>>()
        }
    });
    let viewport_ref = use_node_ref();
    let strip_ref = use_node_ref();

    let viewport_width = viewport_ref
        .cast::<HtmlElement>()
        .map(|el| el.client_width() as f64);
    let geometry = StripGeometry::for_size(adaptivity.size_x, viewport_width);

    // Pending timers and frames die with the component
    {
        let timers = timers.clone();
        use_effect_with((), move |_| {
            move || {
                let mut timers = timers.borrow_mut();
                timers.reveal = None;
                timers.hide = None;
                timers.frame = None;
            }
        });
    }

    let spin = {
        let machine = machine.clone();
        let phase = phase.clone();
        let host = host.clone();
        let viewport_ref = viewport_ref.clone();
        let strip_ref = strip_ref.clone();
        let platform = adaptivity.platform;
        let size = adaptivity.size_x;

        Callback::from(move |_: ()| {
            let container_width = viewport_ref
                .cast::<HtmlElement>()
                .map(|el| el.client_width() as f64);
            let geometry = StripGeometry::for_size(size, container_width);
            let started_at = now_ms();

            let plan = machine
                .borrow_mut()
                .start(started_at, &mut *rng.borrow_mut(), &geometry);
            let Some(plan) = plan else {
                log::debug!("Spin ignored, roulette is busy");
                return;
            };
            log::info!("Spin started, winning index {}", plan.winning_index);
            phase.set(machine.borrow().phase());

            let mut slots = timers.borrow_mut();
            if let Some(strip) = strip_ref.cast::<HtmlElement>() {
                slots.frame = Some(animate_strip(&strip, &plan, easing_for(platform)));
            }

            let reveal_deadline = started_at + u64::from(plan.duration_ms);
            let reveal_ms = machine.borrow().reveal_ms();
            let machine = machine.clone();
            let phase = phase.clone();
            let host = host.clone();
            let hide_slot = timers.clone();
            slots.reveal = Some(Timeout::new(plan.duration_ms, move || {
                let revealed_at = now_ms().max(reveal_deadline);
                let (event, current) = advance_shared(&machine, revealed_at);
                if let Some(SpinEvent::Revealed(index)) = event {
                    log::info!("Revealed prize {}", index);
                    host.haptic_success();
                }
                phase.set(current);

                let hide_deadline = revealed_at + u64::from(reveal_ms);
                let machine = machine.clone();
                let phase = phase.clone();
                hide_slot.borrow_mut().hide = Some(Timeout::new(reveal_ms, move || {
                    let now = now_ms().max(hide_deadline);
                    let (event, current) = advance_shared(&machine, now);
                    if event == Some(SpinEvent::Hidden) {
                        phase.set(current);
                    }
                }));
            }));
        })
    };

    let winner = machine.borrow().winning_entry().cloned();

    SpinHandle {
        phase: *phase,
        winner,
        geometry,
        strip: strip.clone(),
        spin,
        viewport_ref,
        strip_ref,
    }
}
