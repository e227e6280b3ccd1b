//! UI services for the application layer.

pub mod analytics_fetcher;
pub mod notifier;
pub mod short_link_requester;
pub mod theme_store;

pub use analytics_fetcher::{AnalyticsFetcher, AnalyticsView};
pub use notifier::{Notifier, Toast, ToastLevel};
pub use short_link_requester::{
    LinkProducedCallback, RequesterSettings, RequesterState, RequesterView, ShortLinkRequester,
};
pub use theme_store::ThemeStore;
