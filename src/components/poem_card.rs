use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::model::Poem;
use crate::services::WebHaptics;
use crate::state::swipe::CardPhase;
use crate::state::{first_touch, Settle, Surface, SwipeOutcome, SwipeRecognizer};

/// Controls inside the card carry this class; touches on them never drag.
const ACTION_CLASS: &str = "action-btn";

#[derive(Properties, PartialEq, Clone)]
pub struct PoemCardProps {
    pub poem: Poem,
    pub favorited: bool,
    pub on_outcome: Callback<SwipeOutcome>,
    pub on_toggle_favorite: Callback<()>,
}

fn on_action_control(event: &TouchEvent) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(&format!(".{ACTION_CLASS}")).ok().flatten())
        .is_some()
}

#[function_component]
pub fn PoemCard(props: &PoemCardProps) -> Html {
    let card_ref = use_node_ref();
    let recognizer = use_mut_ref(SwipeRecognizer::new);
    let settle_timer = use_mut_ref(|| None::<Timeout>);
    let redraw = use_force_update();
    // Listeners are registered once; they read the latest callback through this.
    let on_outcome = use_mut_ref(|| props.on_outcome.clone());
    *on_outcome.borrow_mut() = props.on_outcome.clone();

    {
        let recognizer = recognizer.clone();
        let redraw = redraw.clone();
        use_effect_with(card_ref.clone(), move |card_ref| {
            let mut listeners = Vec::new();
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let arm_settle: Rc<dyn Fn(Settle)> = {
                    let recognizer = recognizer.clone();
                    let redraw = redraw.clone();
                    Rc::new(move |settle: Settle| {
                        let recognizer = recognizer.clone();
                        let redraw = redraw.clone();
                        let on_outcome = on_outcome.clone();
                        let timer = Timeout::new(settle.duration_ms, move || {
                            let outcome = recognizer.borrow_mut().finish_settle();
                            if let Some(outcome) = outcome {
                                let cb = on_outcome.borrow().clone();
                                cb.emit(outcome);
                            }
                            redraw.force_update();
                        });
                        *settle_timer.borrow_mut() = Some(timer);
                    })
                };

                let start = {
                    let recognizer = recognizer.clone();
                    let redraw = redraw.clone();
                    EventListener::new_with_options(
                        &card,
                        "touchstart",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            let Some(event) = event.dyn_ref::<TouchEvent>() else { return };
                            let Some(point) = first_touch(event) else { return };
                            let started = recognizer.borrow_mut().on_start(point, on_action_control(event));
                            if started {
                                event.prevent_default();
                                redraw.force_update();
                            }
                        },
                    )
                };
                let moved = {
                    let recognizer = recognizer.clone();
                    let redraw = redraw.clone();
                    EventListener::new_with_options(
                        &card,
                        "touchmove",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            let Some(event) = event.dyn_ref::<TouchEvent>() else { return };
                            let (Some(point), Some(surface)) = (first_touch(event), Surface::from_window()) else {
                                return;
                            };
                            let moved = recognizer.borrow_mut().on_move(point, surface);
                            if moved.is_some() {
                                event.prevent_default();
                                redraw.force_update();
                            }
                        },
                    )
                };
                let end = {
                    let recognizer = recognizer.clone();
                    let redraw = redraw.clone();
                    let arm_settle = arm_settle.clone();
                    EventListener::new_with_options(
                        &card,
                        "touchend",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            let Some(surface) = Surface::from_window() else { return };
                            let settle = recognizer.borrow_mut().on_end(surface, &WebHaptics);
                            if let Some(settle) = settle {
                                event.prevent_default();
                                redraw.force_update();
                                arm_settle(settle);
                            }
                        },
                    )
                };
                let cancel = {
                    let recognizer = recognizer.clone();
                    let redraw = redraw.clone();
                    EventListener::new(&card, "touchcancel", move |_| {
                        let settle = recognizer.borrow_mut().on_cancel();
                        if let Some(settle) = settle {
                            redraw.force_update();
                            arm_settle(settle);
                        }
                    })
                };
                listeners.extend([start, moved, end, cancel]);
            }
            move || drop(listeners)
        });
    }

    let (transform, transition, phase) = {
        let r = recognizer.borrow();
        (r.css_transform(), r.css_transition(), r.phase())
    };
    let cursor = if phase == CardPhase::Dragging { "grabbing" } else { "grab" };
    let style = format!(
        "transform:{transform}; transition:{transition}; cursor:{cursor}; touch-action:none; user-select:none; \
         margin:24px; padding:28px 24px; border-radius:16px; background:#161b22; border:1px solid #30363d; \
         box-shadow:0 8px 24px rgba(0,0,0,0.4); position:relative; will-change:transform;"
    );
    let toggle_cb = {
        let cb = props.on_toggle_favorite.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div ref={card_ref} style={style}>
        <p style="white-space:pre-wrap; font-size:20px; line-height:1.6; margin:0 0 16px 0;">{ props.poem.text.clone() }</p>
        <p style="margin:0; color:#8b949e; font-style:italic;">{ format!("- {}", props.poem.author) }</p>
        <button
            class={ACTION_CLASS}
            onclick={toggle_cb}
            aria-label={ if props.favorited { "Remove from favorites" } else { "Add to favorites" } }
            style="position:absolute; right:16px; bottom:16px; background:none; border:none; font-size:26px; color:#f778ba;"
        >{ if props.favorited { "\u{2665}" } else { "\u{2661}" } }</button>
    </div>}
}
