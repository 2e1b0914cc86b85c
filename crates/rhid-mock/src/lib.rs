//! In-process stand-in for the RHID web service, shared by the
//! integration tests of `rhid-core` and `rhid-cli`.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

pub use axum::http::StatusCode;

pub const SESSION_COOKIE: &str = "ASP.NET_SessionId=mock-session";

/// One request received by the mock.
#[derive(Debug, Clone)]
pub struct Hit {
    pub method: &'static str,
    pub path: String,
    pub raw_query: Option<String>,
    pub authorization: Option<String>,
    pub cookie: Option<String>,
    pub body: Option<Value>,
}

/// Canned replies for each endpoint.
#[derive(Debug, Clone)]
pub struct Replies {
    pub login_page_status: StatusCode,
    pub login_status: StatusCode,
    pub login_body: Value,
    pub unlock_status: StatusCode,
    pub unlock_body: String,
}

impl Replies {
    pub fn ok(token: &str, unlock_body: &str) -> Self {
        Self {
            login_page_status: StatusCode::OK,
            login_status: StatusCode::OK,
            login_body: serde_json::json!({ "accessToken": token }),
            unlock_status: StatusCode::OK,
            unlock_body: unlock_body.to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    replies: Arc<Replies>,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl MockState {
    fn record(&self, method: &'static str, uri: &Uri, headers: &HeaderMap, body: Option<Value>) {
        let header_str = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        self.hits.lock().unwrap().push(Hit {
            method,
            path: uri.path().to_string(),
            raw_query: uri.query().map(str::to_string),
            authorization: header_str(header::AUTHORIZATION),
            cookie: header_str(header::COOKIE),
            body,
        });
    }
}

pub struct MockRhid {
    pub base_url: String,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl MockRhid {
    pub async fn start(replies: Replies) -> Self {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            replies: Arc::new(replies),
            hits: hits.clone(),
        };
        let app = Router::new()
            .route("/v2/", get(login_page))
            .route("/v2/login.svc/", post(login))
            .route("/v2/util.svc/desbloqueio_rep_violacao/", get(unlock))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/v2", addr),
            hits,
        }
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }
}

async fn login_page(State(st): State<MockState>, uri: Uri, headers: HeaderMap) -> Response {
    st.record("GET", &uri, &headers, None);
    (
        st.replies.login_page_status,
        [(header::SET_COOKIE, format!("{}; Path=/", SESSION_COOKIE))],
        "<html>login</html>",
    )
        .into_response()
}

async fn login(
    State(st): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    st.record("POST", &uri, &headers, Some(body));
    (st.replies.login_status, Json(st.replies.login_body.clone())).into_response()
}

async fn unlock(State(st): State<MockState>, uri: Uri, headers: HeaderMap) -> Response {
    st.record("GET", &uri, &headers, None);
    (st.replies.unlock_status, st.replies.unlock_body.clone()).into_response()
}
