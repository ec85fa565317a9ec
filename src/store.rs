//! Async poem operations.
//!
//! Each operation talks to a [`PoemBackend`] and reports through `dispatch`,
//! which the views wire to the `PoemState` reducer. Local state only changes
//! after the backend call succeeds; a failed favorite toggle re-reads the
//! favorites so the view matches the server again.

use crate::error::{describe, ApiError, SubmitError};
use crate::model::{NewPoem, Poem, PoemAction};
use crate::services::PoemBackend;

pub async fn fetch_poems<B: PoemBackend>(
    backend: &B,
    anonymous_id: &str,
    dispatch: &impl Fn(PoemAction),
) -> Result<(), ApiError> {
    log::debug!("[event] fetch_poems:start");
    dispatch(PoemAction::Loading);
    match backend.fetch_poems().await {
        Ok(poems) => {
            log::debug!("[event] fetch_poems:success count={}", poems.len());
            dispatch(PoemAction::PoemsLoaded(poems));
            fetch_favorites(backend, anonymous_id, dispatch).await
        }
        Err(err) => {
            dispatch(PoemAction::Failed(describe(&err, "fetch_poems")));
            Err(err)
        }
    }
}

pub async fn fetch_favorites<B: PoemBackend>(
    backend: &B,
    anonymous_id: &str,
    dispatch: &impl Fn(PoemAction),
) -> Result<(), ApiError> {
    log::debug!("[event] fetch_favorites:start");
    match backend.fetch_favorites(anonymous_id).await {
        Ok(favorites) => {
            log::debug!("[event] fetch_favorites:success count={}", favorites.len());
            dispatch(PoemAction::FavoritesLoaded(favorites));
            Ok(())
        }
        Err(err) => {
            dispatch(PoemAction::Failed(describe(&err, "fetch_favorites")));
            Err(err)
        }
    }
}

/// Stores a new poem and makes it the current one.
pub async fn add_poem<B: PoemBackend>(
    backend: &B,
    poem: &NewPoem,
    dispatch: &impl Fn(PoemAction),
) -> Result<Poem, SubmitError> {
    let poem = poem.normalized().ok_or(SubmitError::EmptyText)?;
    dispatch(PoemAction::Loading);
    match backend.insert_poem(&poem).await {
        Ok(stored) => {
            log::debug!("[event] add_poem:success id={}", stored.id);
            dispatch(PoemAction::PoemAdded(stored.clone()));
            Ok(stored)
        }
        Err(err) => {
            log::error!("Error adding poem: {err}");
            let err = SubmitError::from(err);
            dispatch(PoemAction::Failed(err.to_string()));
            Err(err)
        }
    }
}

/// Flips favorite membership of `poem_id`. `favorited` is the membership the
/// caller currently shows.
pub async fn toggle_favorite<B: PoemBackend>(
    backend: &B,
    anonymous_id: &str,
    poem_id: &str,
    favorited: bool,
    dispatch: &impl Fn(PoemAction),
) -> Result<(), ApiError> {
    log::debug!("[event] toggle_favorite:start poem_id={poem_id}");
    let result = if favorited {
        backend
            .remove_favorite(poem_id, anonymous_id)
            .await
            .map(|()| PoemAction::FavoriteRemoved(poem_id.to_owned()))
    } else {
        backend
            .add_favorite(poem_id, anonymous_id)
            .await
            .map(|()| PoemAction::FavoriteAdded(poem_id.to_owned()))
    };
    match result {
        Ok(action) => {
            log::debug!("[event] toggle_favorite:{} poem_id={poem_id}", if favorited { "removed" } else { "added" });
            dispatch(action);
            Ok(())
        }
        Err(err) => {
            dispatch(PoemAction::Failed(describe(&err, "toggle_favorite")));
            if let Err(refetch) = fetch_favorites(backend, anonymous_id, dispatch).await {
                log::warn!("favorites re-read after failed toggle also failed: {refetch}");
            }
            Err(err)
        }
    }
}
