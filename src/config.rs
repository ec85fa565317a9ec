//! Backend connection settings, baked in at build time.

use crate::error::ConfigError;

const URL_VAR: &str = "POETIC_SUPABASE_URL";
const ANON_KEY_VAR: &str = "POETIC_SUPABASE_ANON_KEY";

/// localStorage keys owned by the app.
pub mod storage_keys {
    pub const ANONYMOUS_ID: &str = "anonymous_user_id";
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Project URL without a trailing slash.
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl AppConfig {
    /// Reads `POETIC_SUPABASE_URL` / `POETIC_SUPABASE_ANON_KEY` as captured by the compiler.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_parts(option_env!("POETIC_SUPABASE_URL"), option_env!("POETIC_SUPABASE_ANON_KEY"))
    }

    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let present = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned);
        let url = present(url);
        let anon_key = present(anon_key);
        match (url, anon_key) {
            (Some(url), Some(anon_key)) => Ok(Self {
                supabase_url: url.trim_end_matches('/').to_owned(),
                supabase_anon_key: anon_key,
            }),
            (url, key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(URL_VAR);
                }
                if key.is_none() {
                    missing.push(ANON_KEY_VAR);
                }
                Err(ConfigError::Missing(missing))
            }
        }
    }

    /// PostgREST endpoint for `table`.
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.supabase_url, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_values_required() {
        assert_eq!(
            AppConfig::from_parts(None, Some("key")),
            Err(ConfigError::Missing(vec![URL_VAR]))
        );
        assert_eq!(
            AppConfig::from_parts(Some("  "), None),
            Err(ConfigError::Missing(vec![URL_VAR, ANON_KEY_VAR]))
        );
    }

    #[test]
    fn trailing_slash_trimmed() {
        let cfg = AppConfig::from_parts(Some("https://demo.supabase.co/"), Some("anon")).unwrap();
        assert_eq!(cfg.supabase_url, "https://demo.supabase.co");
        assert_eq!(cfg.rest_url("poems"), "https://demo.supabase.co/rest/v1/poems");
    }
}
