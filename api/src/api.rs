use crate::config::Config;
use crate::{AppError, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use axum_extra::routing::{RouterExt, TypedPath};
use http::{HeaderValue, Method};
use models::Notice;
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument};

/// Internal server state.
#[derive(Clone, Debug)]
pub struct AppState {
    notices: Arc<Vec<Notice>>,
}

impl AppState {
    /// Create a new `AppState` serving `notices` in the given order.
    pub fn new(notices: Vec<Notice>) -> Self {
        Self {
            notices: Arc::new(notices),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error: {}", self),
        )
            .into_response()
    }
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/notices")]
struct NoticesRoute;

#[instrument(skip_all)]
async fn get_notices(_: NoticesRoute, State(state): State<AppState>) -> Json<Vec<Notice>> {
    debug!("Returning {} notices", state.notices.len());
    Json(state.notices.as_ref().clone())
}

async fn api_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

fn cors(config: &Config) -> Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET]))
}

/// Build the application: the notices API plus the app's static files.
///
/// Paths that are neither API routes nor files in `dist` get `index.html`, so client side routes
/// survive a reload.
pub fn router(state: AppState, config: &Config) -> Result<Router> {
    let index = ServeFile::new(config.dist.join("index.html"));
    let app = ServeDir::new(&config.dist).fallback(index);

    let compression = CompressionLayer::new().gzip(true);
    let trace = TraceLayer::new_for_http();

    Ok(Router::new()
        .typed_get(get_notices)
        .route("/api/*rest", any(api_not_found))
        .fallback_service(app)
        .layer(
            ServiceBuilder::new()
                .layer(compression)
                .layer(trace)
                .layer(cors(config)?),
        )
        .with_state(state))
}

/// Start the web server.
#[instrument(skip_all)]
pub async fn run(state: AppState, config: &Config) -> Result<()> {
    let app = router(state, config)?;
    let listener = TcpListener::bind(config.listen).await?;

    info!("Listening on {}", config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
    use http::Request;
    use models::NoticeId;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn notice(id: i64, pinned: bool) -> Notice {
        Notice {
            id: NoticeId::Number(id),
            title: format!("notice {id}"),
            content: "본문".to_string(),
            pinned,
            created_at: "2025-10-01T09:00:00+09:00".to_string(),
        }
    }

    fn dist() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        dir
    }

    fn app(dist: &TempDir, notices: Vec<Notice>) -> Router {
        let config = Config {
            dist: dist.path().to_path_buf(),
            ..Config::default()
        };

        router(AppState::new(notices), &config).unwrap()
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_notices_in_order() {
        let dist = dist();
        let app = app(&dist, vec![notice(2, true), notice(1, false)]);
        let (status, body) = get(app, "/api/notices").await;

        assert_eq!(status, StatusCode::OK);

        let notices: Vec<Notice> = serde_json::from_str(&body).unwrap();
        assert_eq!(notices, vec![notice(2, true), notice(1, false)]);
    }

    #[tokio::test]
    async fn no_notices_is_an_empty_array() {
        let dist = dist();
        let (status, body) = get(app(&dist, vec![]), "/api/notices").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn client_routes_get_the_app() {
        let dist = dist();

        for uri in ["/", "/register", "/does/not/exist"] {
            let (status, body) = get(app(&dist, vec![]), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, "<html>app</html>", "{uri}");
        }
    }

    #[tokio::test]
    async fn static_files_are_served() {
        let dist = dist();
        let (status, body) = get(app(&dist, vec![]), "/app.js").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
    }

    #[tokio::test]
    async fn unknown_api_paths_are_not_found() {
        let dist = dist();
        let (status, _) = get(app(&dist, vec![]), "/api/registrations").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn dev_server_origin_is_allowed() {
        let dist = dist();
        let request = Request::get("/api/notices")
            .header(ORIGIN, "http://localhost:8080")
            .body(Body::empty())
            .unwrap();

        let response = app(&dist, vec![]).oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let config = Config {
            allowed_origins: vec!["http://bad\norigin".to_string()],
            ..Config::default()
        };

        assert!(router(AppState::new(vec![]), &config).is_err());
    }
}
