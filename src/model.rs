//! Poem rows and the reducer state the views render from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::rc::Rc;
use yew::Reducible;

use crate::state::{BrowseList, SwipeOutcome};

pub type PoemId = String;

/// Poems the current anonymous user has favorited.
pub type FavoriteSet = HashSet<PoemId>;

pub const DEFAULT_AUTHOR: &str = "Anonymous";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Poem {
    pub id: PoemId,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPoem {
    pub text: String,
    pub author: String,
}

impl NewPoem {
    /// Trimmed copy with a blank author replaced by [`DEFAULT_AUTHOR`].
    /// `None` when there is no text left.
    pub fn normalized(&self) -> Option<NewPoem> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        let author = match self.author.trim() {
            "" => DEFAULT_AUTHOR,
            a => a,
        };
        Some(NewPoem { text: text.to_owned(), author: author.to_owned() })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoemState {
    /// Newest first.
    pub poems: BrowseList<Poem>,
    pub favorites: FavoriteSet,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl PoemState {
    pub fn current_poem(&self) -> Option<&Poem> {
        self.poems.current()
    }

    pub fn is_favorited(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Favorited poems in list order.
    pub fn favorited_poems(&self) -> Vec<&Poem> {
        self.poems.iter().filter(|p| self.favorites.contains(&p.id)).collect()
    }
}

#[derive(Clone, Debug)]
pub enum PoemAction {
    Loading,
    PoemsLoaded(Vec<Poem>),
    PoemAdded(Poem),
    FavoritesLoaded(FavoriteSet),
    FavoriteAdded(PoemId),
    FavoriteRemoved(PoemId),
    Next,
    // No gesture steps back yet: left and right swipes both advance.
    #[allow(dead_code)]
    Previous,
    Failed(String),
    ClearError,
}

/// What a finished card swipe asks for. Left and right are the same request;
/// the direction only picks the exit animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeIntent {
    ShowNext,
    ToggleFavorite,
}

impl SwipeIntent {
    pub fn from_outcome(outcome: SwipeOutcome) -> Option<Self> {
        match outcome {
            SwipeOutcome::Left | SwipeOutcome::Right => Some(SwipeIntent::ShowNext),
            SwipeOutcome::Up => Some(SwipeIntent::ToggleFavorite),
            SwipeOutcome::SnapBack => None,
        }
    }
}

impl Reducible for PoemState {
    type Action = PoemAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PoemAction::*;
        let mut new = (*self).clone();
        match action {
            Loading => {
                new.is_loading = true;
                new.error = None;
            }
            PoemsLoaded(poems) => {
                new.poems.replace_all(poems);
                new.is_loading = false;
            }
            PoemAdded(poem) => {
                new.poems.prepend(poem);
                new.is_loading = false;
            }
            FavoritesLoaded(favorites) => new.favorites = favorites,
            FavoriteAdded(id) => {
                new.favorites.insert(id);
            }
            FavoriteRemoved(id) => {
                new.favorites.remove(&id);
            }
            Next => {
                if let Err(err) = new.poems.advance() {
                    log::debug!("browse next: {err}");
                    return self;
                }
            }
            Previous => {
                if let Err(err) = new.poems.retreat() {
                    log::debug!("browse previous: {err}");
                    return self;
                }
            }
            Failed(msg) => {
                new.error = Some(msg);
                new.is_loading = false;
            }
            ClearError => new.error = None,
        }
        Rc::new(new)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn poem(id: &str, minute: u32) -> Poem {
        Poem {
            id: id.to_owned(),
            text: format!("poem {id}"),
            author: DEFAULT_AUTHOR.to_owned(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
            likes: 0,
        }
    }
}
