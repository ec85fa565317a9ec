pub mod app;
pub mod favorites_view;
pub mod home_view;
pub mod nav_bar;
pub mod poem_card;
pub mod submit_view;

use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::model::{PoemAction, PoemId, PoemState};
use crate::services::SupabaseClient;
use crate::store;

/// Backend handle plus the anonymous id, shared by every view.
#[derive(Clone, PartialEq)]
pub struct Session {
    pub backend: Rc<SupabaseClient>,
    pub anonymous_id: Rc<str>,
}

/// Reloads poems and favorites, then runs `done`.
pub fn spawn_refresh(dispatcher: UseReducerDispatcher<PoemState>, session: Session, done: impl FnOnce() + 'static) {
    spawn_local(async move {
        let dispatch = move |action: PoemAction| dispatcher.dispatch(action);
        let _ = store::fetch_poems(&*session.backend, &session.anonymous_id, &dispatch).await;
        done();
    });
}

pub fn spawn_toggle_favorite(state: &UseReducerHandle<PoemState>, session: &Session, poem_id: PoemId) {
    let favorited = state.is_favorited(&poem_id);
    let dispatcher = state.dispatcher();
    let session = session.clone();
    spawn_local(async move {
        let dispatch = move |action: PoemAction| dispatcher.dispatch(action);
        let _ = store::toggle_favorite(&*session.backend, &session.anonymous_id, &poem_id, favorited, &dispatch).await;
    });
}
