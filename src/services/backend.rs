//! Hosted poem database.
//!
//! [`PoemBackend`] is the seam the store talks to; [`SupabaseClient`] speaks
//! PostgREST over `fetch`. Every call is single-shot: failures come back as
//! [`ApiError`] and the caller decides what to do.

use gloo::net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::model::{FavoriteSet, NewPoem, Poem, PoemId};

#[allow(async_fn_in_trait)]
pub trait PoemBackend {
    /// All poems, newest first.
    async fn fetch_poems(&self) -> Result<Vec<Poem>, ApiError>;
    /// Inserts and returns the stored row with its generated id.
    async fn insert_poem(&self, poem: &NewPoem) -> Result<Poem, ApiError>;
    async fn fetch_favorites(&self, anonymous_id: &str) -> Result<FavoriteSet, ApiError>;
    async fn add_favorite(&self, poem_id: &str, anonymous_id: &str) -> Result<(), ApiError>;
    async fn remove_favorite(&self, poem_id: &str, anonymous_id: &str) -> Result<(), ApiError>;
    async fn check_connection(&self) -> bool;
}

#[derive(Deserialize)]
struct FavoriteRow {
    poem_id: PoemId,
}

#[derive(serde::Serialize)]
struct FavoriteInsert<'a> {
    poem_id: &'a str,
    anonymous_id: &'a str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SupabaseClient {
    poems_url: String,
    favorites_url: String,
    anon_key: String,
    anonymous_id: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig, anonymous_id: impl Into<String>) -> Self {
        Self {
            poems_url: config.rest_url("poems"),
            favorites_url: config.rest_url("favorites"),
            anon_key: config.supabase_anon_key.clone(),
            anonymous_id: anonymous_id.into(),
        }
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("x-anonymous-id", &self.anonymous_id)
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        expect_success(resp).await
    }

    async fn send_json<T: serde::Serialize>(&self, req: RequestBuilder, body: &T) -> Result<Response, ApiError> {
        let req: Request = req.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        expect_success(resp).await
    }
}

async fn expect_success(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let code = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { code, body })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

fn favorite_ids(rows: Vec<FavoriteRow>) -> FavoriteSet {
    rows.into_iter().map(|r| r.poem_id).collect()
}

impl PoemBackend for SupabaseClient {
    async fn fetch_poems(&self) -> Result<Vec<Poem>, ApiError> {
        let req = self
            .authorize(Request::get(&self.poems_url))
            .query([("select", "*"), ("order", "created_at.desc")]);
        decode(self.send(req).await?).await
    }

    async fn insert_poem(&self, poem: &NewPoem) -> Result<Poem, ApiError> {
        let req = self
            .authorize(Request::post(&self.poems_url))
            .header("Prefer", "return=representation");
        let rows: Vec<Poem> = decode(self.send_json(req, &[poem]).await?).await?;
        rows.into_iter().next().ok_or(ApiError::EmptyResponse)
    }

    async fn fetch_favorites(&self, anonymous_id: &str) -> Result<FavoriteSet, ApiError> {
        let owner = format!("eq.{anonymous_id}");
        let req = self
            .authorize(Request::get(&self.favorites_url))
            .query([("select", "poem_id"), ("anonymous_id", owner.as_str())]);
        let rows: Vec<FavoriteRow> = decode(self.send(req).await?).await?;
        Ok(favorite_ids(rows))
    }

    async fn add_favorite(&self, poem_id: &str, anonymous_id: &str) -> Result<(), ApiError> {
        let req = self.authorize(Request::post(&self.favorites_url));
        self.send_json(req, &[FavoriteInsert { poem_id, anonymous_id }]).await?;
        Ok(())
    }

    async fn remove_favorite(&self, poem_id: &str, anonymous_id: &str) -> Result<(), ApiError> {
        let poem = format!("eq.{poem_id}");
        let owner = format!("eq.{anonymous_id}");
        let req = self
            .authorize(Request::delete(&self.favorites_url))
            .query([("poem_id", poem.as_str()), ("anonymous_id", owner.as_str())]);
        self.send(req).await?;
        Ok(())
    }

    async fn check_connection(&self) -> bool {
        let req = self
            .authorize(Request::get(&self.poems_url))
            .query([("select", "id"), ("limit", "1")]);
        self.send(req).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_rows_collapse_to_ids() {
        let rows: Vec<FavoriteRow> =
            serde_json::from_str(r#"[{"poem_id":"a"},{"poem_id":"b"},{"poem_id":"a"}]"#).unwrap();
        let ids = favorite_ids(rows);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("a") && ids.contains("b"));
    }

    #[test]
    fn client_targets_rest_tables() {
        let cfg = AppConfig::from_parts(Some("https://demo.supabase.co"), Some("anon")).unwrap();
        let client = SupabaseClient::new(&cfg, "user-1");
        assert_eq!(client.poems_url, "https://demo.supabase.co/rest/v1/poems");
        assert_eq!(client.favorites_url, "https://demo.supabase.co/rest/v1/favorites");
    }

    #[test]
    fn favorite_insert_body_shape() {
        let body = serde_json::to_string(&[FavoriteInsert { poem_id: "p1", anonymous_id: "u1" }]).unwrap();
        assert_eq!(body, r#"[{"poem_id":"p1","anonymous_id":"u1"}]"#);
    }
}
