pub mod browse;
pub mod pull;
pub mod swipe;
pub mod touch;

pub use browse::BrowseList;
pub use pull::PullToRefresh;
pub use swipe::{Settle, SwipeOutcome, SwipeRecognizer};
pub use touch::{first_touch, Surface};
