use super::{
    favorites_view::FavoritesView, home_view::HomeView, nav_bar::NavBar, spawn_refresh,
    submit_view::SubmitView, Session,
};
use crate::config::AppConfig;
use crate::model::PoemState;
use crate::services::{resolve_anonymous_id, PoemBackend, SupabaseClient};
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum View {
    Home,
    Favorites,
    Submit,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Home);
    let state = use_reducer(PoemState::default);
    let session = use_memo((), |_| {
        AppConfig::from_build_env().map(|config| {
            let anonymous_id = resolve_anonymous_id();
            Session {
                backend: Rc::new(SupabaseClient::new(&config, anonymous_id.clone())),
                anonymous_id: anonymous_id.into(),
            }
        })
    });

    // Initial load
    {
        let session = session.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            match &*session {
                Ok(session) => {
                    let backend = session.backend.clone();
                    spawn_local(async move {
                        if !backend.check_connection().await {
                            log::warn!("backend unreachable at startup");
                        }
                    });
                    spawn_refresh(dispatcher, session.clone(), || ());
                }
                Err(err) => log::error!("{err}"),
            }
            || ()
        });
    }

    let session = match &*session {
        Ok(session) => session.clone(),
        Err(err) => {
            return html! {<div style="padding:24px; color:#f85149; font-family:sans-serif;">
                <h2 style="margin:0 0 8px 0;">{"Configuration error"}</h2>
                <p style="margin:0;">{ err.to_string() }</p>
            </div>};
        }
    };

    let select_view = {
        let view = view.clone();
        Callback::from(move |v: View| view.set(v))
    };
    let to_home = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Home))
    };

    let content = match *view {
        View::Home => html! { <HomeView state={state.clone()} session={session.clone()} /> },
        View::Favorites => html! { <FavoritesView state={state.clone()} session={session.clone()} /> },
        View::Submit => html! { <SubmitView
            state={state.clone()}
            session={session.clone()}
            on_submitted={to_home}
        /> },
    };

    html! {<div style="min-height:100vh; display:flex; flex-direction:column; background:#0d1117; color:#e6edf3; font-family:Georgia, serif;">
        <main style="flex:1; display:flex; flex-direction:column; overflow:hidden;">{ content }</main>
        <NavBar view={*view} on_select={select_view} />
    </div>}
}
