//! HTTP server exposing the ranking engine.
//!
//! A thin wrapper over the same core library the CLI uses. Each request
//! runs the full load → tokenize → count → rank pipeline on its own; the
//! only shared state is the immutable configuration.
//!
//! Routes:
//! - `POST /v1/rankings` — rank an essay given a file path or inline text
//! - `GET /v1/health` — liveness check
//! - `GET /docs` — API documentation

use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use camino::Utf8PathBuf;
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use essay_rank_core::{Config, LoadError, RankReport, engine, rank};

/// Shared state for the server.
#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
}

/// Request payload for the rankings endpoint.
///
/// Exactly one of `path` and `text` must be provided.
#[derive(Debug, Deserialize)]
pub struct RankingRequest {
    /// Path of an essay file on the server's file system.
    pub path: Option<Utf8PathBuf>,
    /// Inline essay text.
    pub text: Option<String>,
    /// Number of top words to return. Defaults to the configured count.
    pub count: Option<i64>,
    /// Drop words shorter than this many characters.
    pub min_word_len: Option<usize>,
}

/// Error response carrying an HTTP status and a structured body.
#[derive(Debug)]
enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            Self::NotFound(m) => (StatusCode::NOT_FOUND, m),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<LoadError> for ApiError {
    fn from(err: LoadError) -> Self {
        match err {
            e @ LoadError::NotFound { .. } => Self::NotFound(e.to_string()),
            // Unreadable, undecodable, or oversized input is the caller's
            // problem: the path they supplied does not hold usable text.
            e => Self::BadRequest(e.to_string()),
        }
    }
}

/// Build the application router.
pub fn router(config: Config) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/v1/rankings", post(post_rankings))
        .route("/v1/health", get(get_health))
        .route("/docs", get(get_docs))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is terminated.
pub async fn serve(host: &str, port: u16, config: Config) -> anyhow::Result<()> {
    let app = router(config);
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated unexpectedly")?;

    Ok(())
}

/// Handler for `POST /v1/rankings`.
async fn post_rankings(
    State(state): State<AppState>,
    Json(payload): Json<RankingRequest>,
) -> Result<Json<RankReport>, ApiError> {
    let limit = match payload.count {
        Some(raw) => rank::validate_count(raw).map_err(|e| ApiError::BadRequest(e.to_string()))?,
        None => state.config.default_top_words,
    };
    let min_word_len = payload.min_word_len.or(state.config.min_word_len);

    let report = match (payload.path, payload.text) {
        (Some(_), Some(_)) => {
            return Err(ApiError::BadRequest(
                "provide either a path or inline text, not both".to_string(),
            ));
        }
        (None, None) => {
            return Err(ApiError::BadRequest(
                "provide a path or inline text".to_string(),
            ));
        }
        (Some(path), None) => {
            engine::rank_file(&path, limit, min_word_len, state.config.input_limit())?
        }
        (None, Some(text)) => {
            if let Some(max) = state.config.input_limit()
                && text.len() as u64 > max
            {
                return Err(ApiError::BadRequest(format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    text.len()
                )));
            }
            engine::rank_text(&text, limit, min_word_len)
        }
    };

    Ok(Json(report))
}

/// Handler for `GET /v1/health`.
async fn get_health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

/// Handler for `GET /docs`.
async fn get_docs() -> Html<&'static str> {
    Html(DOCS_HTML)
}

const DOCS_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>essay-rank API</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
  code, pre { background: #f4f4f4; border-radius: 4px; padding: 0.1rem 0.3rem; }
  pre { padding: 0.6rem; overflow-x: auto; }
  h2 { border-bottom: 1px solid #ddd; padding-bottom: 0.2rem; }
</style>
</head>
<body>
<h1>essay-rank API</h1>
<p>Rank the most frequent words in an essay. All responses are JSON.</p>

<h2>POST /v1/rankings</h2>
<p>Provide exactly one of <code>path</code> (a file on the server) or
<code>text</code> (inline content). <code>count</code> defaults to the
configured top-word count; <code>0</code> returns an empty list and a
negative value is rejected with <code>400</code>.</p>
<pre>{
  "text": "the cat sat on the mat the cat ran",
  "count": 2
}</pre>
<p>Response:</p>
<pre>{
  "words": [
    { "word": "the", "count": 3 },
    { "word": "cat", "count": 2 }
  ],
  "total_words": 9,
  "distinct_words": 6
}</pre>
<p>Errors: <code>404</code> when the path does not exist, <code>400</code>
for unreadable or oversized input and invalid counts, body
<code>{ "error": "..." }</code>.</p>

<h2>GET /v1/health</h2>
<p>Returns <code>{ "status": "healthy" }</code> while the server is running.</p>
</body>
</html>
"#;
