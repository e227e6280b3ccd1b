//! HTTP adapters for the remote shortening service.

mod api_client;

pub use api_client::HttpShortenerApi;
