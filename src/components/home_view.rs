use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::TouchEvent;
use yew::prelude::*;

use super::{poem_card::PoemCard, spawn_refresh, spawn_toggle_favorite, Session};
use crate::model::{PoemAction, PoemState, SwipeIntent};
use crate::state::{first_touch, PullToRefresh, SwipeOutcome};

#[derive(Properties, PartialEq, Clone)]
pub struct HomeViewProps {
    pub state: UseReducerHandle<PoemState>,
    pub session: Session,
}

#[function_component]
pub fn HomeView(props: &HomeViewProps) -> Html {
    let pull = use_mut_ref(PullToRefresh::default);
    let pull_distance = use_state(|| 0.0_f64);
    let redraw = use_force_update();

    // Pull-to-refresh listens on the whole document while this view is mounted.
    {
        let pull = pull.clone();
        let pull_distance = pull_distance.clone();
        let redraw = redraw.clone();
        let dispatcher = props.state.dispatcher();
        let session = props.session.clone();
        use_effect_with((), move |_| {
            let document = gloo::utils::document();
            let start = {
                let pull = pull.clone();
                EventListener::new(&document, "touchstart", move |event| {
                    let Some(point) = event.dyn_ref::<TouchEvent>().and_then(first_touch) else { return };
                    let scroll_top = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    pull.borrow_mut().on_start(point, scroll_top);
                })
            };
            let moved = {
                let pull = pull.clone();
                let pull_distance = pull_distance.clone();
                EventListener::new_with_options(
                    &document,
                    "touchmove",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(point) = event.dyn_ref::<TouchEvent>().and_then(first_touch) else { return };
                        let consumed = pull.borrow_mut().on_move(point);
                        if consumed {
                            event.prevent_default();
                            pull_distance.set(pull.borrow().distance());
                        }
                    },
                )
            };
            let end = {
                let pull = pull.clone();
                let pull_distance = pull_distance.clone();
                EventListener::new(&document, "touchend", move |_| {
                    let was_pulled = pull.borrow().distance() > 0.0;
                    let triggered = pull.borrow_mut().on_end();
                    if was_pulled {
                        pull_distance.set(0.0);
                    }
                    if triggered {
                        log::debug!("[event] pull_to_refresh:triggered");
                        redraw.force_update();
                        let pull = pull.clone();
                        let redraw = redraw.clone();
                        spawn_refresh(dispatcher.clone(), session.clone(), move || {
                            pull.borrow_mut().finish_refresh();
                            redraw.force_update();
                        });
                    }
                })
            };
            let cancel = EventListener::new(&document, "touchcancel", move |_| {
                pull.borrow_mut().on_cancel();
                pull_distance.set(0.0);
            });
            move || drop((start, moved, end, cancel))
        });
    }

    let on_outcome = {
        let state = props.state.clone();
        let session = props.session.clone();
        Callback::from(move |outcome: SwipeOutcome| match SwipeIntent::from_outcome(outcome) {
            Some(SwipeIntent::ShowNext) => state.dispatch(PoemAction::Next),
            Some(SwipeIntent::ToggleFavorite) => {
                if let Some(poem) = state.current_poem() {
                    spawn_toggle_favorite(&state, &session, poem.id.clone());
                }
            }
            None => {}
        })
    };
    let on_toggle_favorite = {
        let state = props.state.clone();
        let session = props.session.clone();
        Callback::from(move |_| {
            if let Some(poem) = state.current_poem() {
                spawn_toggle_favorite(&state, &session, poem.id.clone());
            }
        })
    };
    let clear_error = {
        let state = props.state.clone();
        Callback::from(move |_| state.dispatch(PoemAction::ClearError))
    };

    let st = &*props.state;
    let indicator = if pull.borrow().is_refreshing() {
        html! {<div style="text-align:center; padding:8px; color:#8b949e;">{"Refreshing..."}</div>}
    } else if *pull_distance > 0.0 {
        html! {<div style={format!("height:{}px; display:flex; align-items:flex-end; justify-content:center; color:#8b949e;", *pull_distance)}>
            {"Pull to refresh"}
        </div>}
    } else {
        html! {}
    };
    let error = if let Some(msg) = &st.error {
        html! {<div onclick={clear_error} style="margin:12px 24px 0 24px; padding:8px 12px; background:#3d1214; border:1px solid #f85149; border-radius:8px; font-size:13px;">
            { msg.clone() }
        </div>}
    } else {
        html! {}
    };
    let body = if let Some(poem) = st.current_poem() {
        html! {<>
            <PoemCard
                poem={poem.clone()}
                favorited={st.is_favorited(&poem.id)}
                on_outcome={on_outcome}
                on_toggle_favorite={on_toggle_favorite}
            />
            <div style="text-align:center; font-size:12px; color:#8b949e;">
                { format!("{} / {}", st.poems.cursor() + 1, st.poems.len()) }
            </div>
            <div style="text-align:center; font-size:11px; color:#6e7681; margin-top:6px;">
                {"Swipe sideways for the next poem, up to favorite"}
            </div>
        </>}
    } else if st.is_loading {
        html! {<p style="text-align:center; color:#8b949e;">{"Loading poems..."}</p>}
    } else {
        html! {<p style="text-align:center; color:#8b949e;">{"No poems yet. Be the first to write one."}</p>}
    };

    html! {<section style="flex:1; display:flex; flex-direction:column; justify-content:center;">
        { indicator }
        { error }
        { body }
    </section>}
}
