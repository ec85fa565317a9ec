pub mod backend;
pub mod haptics;
pub mod identity;

pub use backend::{PoemBackend, SupabaseClient};
pub use haptics::WebHaptics;
pub use identity::resolve_anonymous_id;
