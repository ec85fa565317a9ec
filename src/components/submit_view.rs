use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::Session;
use crate::model::{NewPoem, PoemAction, PoemState, DEFAULT_AUTHOR};
use crate::store;

#[derive(Properties, PartialEq, Clone)]
pub struct SubmitViewProps {
    pub state: UseReducerHandle<PoemState>,
    pub session: Session,
    /// Fired after the poem is stored; it is already the current poem.
    pub on_submitted: Callback<()>,
}

#[function_component]
pub fn SubmitView(props: &SubmitViewProps) -> Html {
    let text = use_state(String::new);
    let author = use_state(String::new);
    let is_submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_text = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlTextAreaElement = e.target_unchecked_into();
            text.set(el.value());
        })
    };
    let on_author = {
        let author = author.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            author.set(el.value());
        })
    };
    let on_submit = {
        let text = text.clone();
        let author = author.clone();
        let is_submitting = is_submitting.clone();
        let error = error.clone();
        let dispatcher = props.state.dispatcher();
        let session = props.session.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            is_submitting.set(true);
            error.set(None);
            let draft = NewPoem { text: (*text).clone(), author: (*author).clone() };
            let text = text.clone();
            let author = author.clone();
            let is_submitting = is_submitting.clone();
            let error = error.clone();
            let dispatcher = dispatcher.clone();
            let session = session.clone();
            let on_submitted = on_submitted.clone();
            spawn_local(async move {
                let dispatch = move |action: PoemAction| dispatcher.dispatch(action);
                match store::add_poem(&*session.backend, &draft, &dispatch).await {
                    Ok(_) => {
                        text.set(String::new());
                        author.set(String::new());
                        is_submitting.set(false);
                        on_submitted.emit(());
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    let can_submit = !*is_submitting && !text.trim().is_empty();
    html! {<form onsubmit={on_submit} style="padding:24px; display:flex; flex-direction:column; gap:12px;">
        <h2 style="margin:0; font-weight:normal;">{"Write a poem"}</h2>
        <textarea
            rows="8"
            value={(*text).clone()}
            oninput={on_text}
            placeholder="A few lines..."
            style="background:#161b22; color:#e6edf3; border:1px solid #30363d; border-radius:8px; padding:12px; font:inherit; font-size:18px; resize:vertical;"
        />
        <input
            type="text"
            value={(*author).clone()}
            oninput={on_author}
            placeholder={DEFAULT_AUTHOR}
            style="background:#161b22; color:#e6edf3; border:1px solid #30363d; border-radius:8px; padding:10px 12px; font:inherit;"
        />
        { if let Some(msg) = &*error { html!{ <div style="color:#f85149; font-size:13px;">{ msg.clone() }</div> } } else { html!{} } }
        <button type="submit" disabled={!can_submit} style="padding:12px; border-radius:8px; background:#238636; color:#fff; border:none; font-size:16px;">
            { if *is_submitting { "Submitting..." } else { "Share" } }
        </button>
    </form>}
}
