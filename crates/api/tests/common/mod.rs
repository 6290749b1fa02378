#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use drawboard_api::auth::jwt::{generate_access_token, JwtConfig};
use drawboard_api::config::ServerConfig;
use drawboard_api::router::build_app_router;
use drawboard_api::state::AppState;
use drawboard_api::sync::SyncFacade;
use drawboard_api::ws::WsManager;
use drawboard_core::authorization::Identity;
use drawboard_core::roles::UserRole;
use drawboard_db::models::board::BoardWithLayers;
use drawboard_db::models::user::User;
use drawboard_db::store::{MemoryStore, Store};
use drawboard_events::EventRouter;

pub const TEST_SECRET: &str = "test-secret";

/// Build a test `ServerConfig` with safe defaults and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
        database_url: None,
        strict_layer_check: false,
        seed_demo: false,
    }
}

/// A fully wired application over a fresh [`MemoryStore`] with one user
/// and one board owned by them.
pub struct TestApp {
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub user: User,
    pub identity: Identity,
    pub token: String,
    pub board: BoardWithLayers,
}

impl TestApp {
    pub fn router(&self) -> Router {
        build_app_router(self.state.clone(), &self.state.config)
    }

    pub fn sync(&self) -> &SyncFacade {
        &self.state.sync
    }

    pub fn board_id(&self) -> i64 {
        self.board.board.id
    }

    pub fn layer_id(&self) -> i64 {
        self.board.layers[0].id
    }

    /// `Authorization` header value for the test user.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Register another user and return their identity.
    pub async fn other_user(&self, email: &str) -> Identity {
        let user = self.store.upsert_user(email, UserRole::User).await.unwrap();
        Identity::new(user.id, user.role)
    }
}

pub async fn build_test_app() -> TestApp {
    build_test_app_with(test_config()).await
}

pub async fn build_test_app_with(config: ServerConfig) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let router = Arc::new(EventRouter::new());
    let sync = SyncFacade::new(store.clone(), router)
        .with_strict_layers(config.strict_layer_check);

    let user = store.upsert_user("alice@draw.app", UserRole::User).await.unwrap();
    let identity = Identity::new(user.id, user.role);
    let token = generate_access_token(user.id, user.role, &config.jwt).unwrap();
    let board = sync.create_board(Some(&identity), "Test Board").await.unwrap();

    let state = AppState {
        sync: Arc::new(sync),
        config: Arc::new(config),
        ws_manager: Arc::new(WsManager::new()),
    };

    TestApp {
        state,
        store,
        user,
        identity,
        token,
        board,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(bearer) = bearer {
        builder = builder.header(AUTHORIZATION, bearer);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
