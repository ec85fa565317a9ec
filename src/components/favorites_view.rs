use super::{spawn_toggle_favorite, Session};
use crate::model::PoemState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FavoritesViewProps {
    pub state: UseReducerHandle<PoemState>,
    pub session: Session,
}

#[function_component]
pub fn FavoritesView(props: &FavoritesViewProps) -> Html {
    let favorites = props.state.favorited_poems();
    if favorites.is_empty() {
        return html! {<p style="padding:24px; text-align:center; color:#8b949e;">
            {"No favorites yet. Swipe a poem up to keep it here."}
        </p>};
    }
    html! {<ul style="list-style:none; margin:0; padding:16px; overflow-y:auto; display:flex; flex-direction:column; gap:12px;">
        { for favorites.into_iter().map(|poem| {
            let remove = {
                let state = props.state.clone();
                let session = props.session.clone();
                let id = poem.id.clone();
                Callback::from(move |_| spawn_toggle_favorite(&state, &session, id.clone()))
            };
            html! {<li key={poem.id.clone()} style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px; position:relative;">
                <p style="white-space:pre-wrap; margin:0 0 8px 0; line-height:1.5;">{ poem.text.clone() }</p>
                <p style="margin:0; color:#8b949e; font-style:italic; font-size:13px;">{ format!("- {}", poem.author) }</p>
                <button class="action-btn" onclick={remove} style="position:absolute; top:8px; right:8px; background:none; border:none; color:#f778ba; font-size:20px;" aria-label="Remove from favorites">
                    {"\u{2665}"}
                </button>
            </li>}
        }) }
    </ul>}
}
