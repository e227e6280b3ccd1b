#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use url_shortener_ui::domain::entities::Theme;
use url_shortener_ui::domain::ports::ClipboardService;
use url_shortener_ui::error::AppError;
use url_shortener_ui::infrastructure::http::HttpShortenerApi;
use url_shortener_ui::infrastructure::qr::PngQrEncoder;
use url_shortener_ui::state::AppState;
use url_shortener_ui::ui::{Page, PageDeps, PageOptions};

/// Canned responses served by the stub backend.
#[derive(Clone)]
pub struct StubResponses {
    pub shorten: (StatusCode, Value),
    pub summary: (StatusCode, Value),
}

impl Default for StubResponses {
    fn default() -> Self {
        Self {
            shorten: (StatusCode::OK, json!({ "shortUrl": "https://s.ly/abc123" })),
            summary: (
                StatusCode::OK,
                json!({ "Desktop": 45, "Mobile": 35, "Tablet": 20 }),
            ),
        }
    }
}

#[derive(Clone)]
struct StubState {
    responses: StubResponses,
    received: Arc<Mutex<Vec<Value>>>,
}

/// Running stub backend.
pub struct StubBackend {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<Value>>>,
}

impl StubBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Bodies posted to `/shortUrl`, in arrival order.
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    pub fn api(&self) -> HttpShortenerApi {
        HttpShortenerApi::new(&self.base_url(), None).unwrap()
    }
}

async fn shorten(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    state.received.lock().unwrap().push(body);
    let (status, body) = state.responses.shorten;
    (status, Json(body)).into_response()
}

async fn summary(State(state): State<StubState>) -> Response {
    let (status, body) = state.responses.summary;
    (status, Json(body)).into_response()
}

/// Spawns the stub on an ephemeral port.
pub async fn spawn_backend(responses: StubResponses) -> StubBackend {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        responses,
        received: received.clone(),
    };

    let app = Router::new()
        .route("/shortUrl", post(shorten))
        .route("/dashboard/summary", get(summary))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend { addr, received }
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// In-memory clipboard for page tests.
#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: Mutex<Option<String>>,
}

impl ClipboardService for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), AppError> {
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

pub fn instant_options() -> PageOptions {
    let mut options = PageOptions::default();
    options.requester.qr_reveal_delay = std::time::Duration::ZERO;
    options.analytics_animation_delay = std::time::Duration::ZERO;
    options
}

/// A page wired to the stub backend with the real QR encoder.
pub fn create_test_page(
    backend: &StubBackend,
    clipboard: Arc<dyn ClipboardService>,
    options: PageOptions,
) -> Page {
    colored::control::set_override(false);

    let api = Arc::new(backend.api());
    let (state, toasts) = AppState::new(Theme::Light);
    Page::new(
        state,
        toasts,
        PageDeps {
            link_api: api.clone(),
            analytics_api: api,
            qr_encoder: Arc::new(PngQrEncoder::default()),
            clipboard,
        },
        options,
    )
}
