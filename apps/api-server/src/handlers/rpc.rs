//! JSON-RPC dispatch handler.
//!
//! A single endpoint carries all three operations as named methods. Error
//! codes inside the JSON-RPC error object mirror the HTTP status the REST
//! surface would answer with (400/404/500); the HTTP status of the envelope
//! itself is always 200 once the body parsed.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use inkpost_core::DomainError;
use inkpost_core::domain::NewPost;
use inkpost_shared::dto::{CreatePostRequest, PostCreated, PostResponse};

use crate::state::AppState;

const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub id: Value,
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: Value,
}

impl RpcResponse {
    fn from_outcome(outcome: Result<Value, RpcError>, id: Value) -> Self {
        match outcome {
            Ok(result) => Self {
                jsonrpc: JSONRPC_VERSION,
                result: Some(result),
                error: None,
                id,
            },
            Err(error) => Self {
                jsonrpc: JSONRPC_VERSION,
                result: None,
                error: Some(error),
                id,
            },
        }
    }
}

/// POST /api
pub async fn dispatch(state: web::Data<AppState>, body: web::Json<RpcRequest>) -> HttpResponse {
    let req = body.into_inner();
    let id = req.id.clone();

    tracing::debug!(method = %req.method, "json-rpc call");

    // Absent is tolerated for loose clients; a wrong version is not.
    if let Some(version) = req.jsonrpc.as_deref()
        && version != JSONRPC_VERSION
    {
        let outcome = Err(RpcError {
            code: 400,
            message: format!("Unsupported JSON-RPC version: {version}"),
        });
        return HttpResponse::Ok().json(RpcResponse::from_outcome(outcome, id));
    }

    let outcome = match req.method.as_str() {
        "createPost" => create_post(&state, req.params).await,
        "listPosts" => list_posts(&state).await,
        "getPost" => get_post(&state, req.params).await,
        other => Err(RpcError {
            code: 404,
            message: format!("Method not found: {other}"),
        }),
    };

    HttpResponse::Ok().json(RpcResponse::from_outcome(outcome, id))
}

async fn create_post(state: &AppState, params: Value) -> Result<Value, RpcError> {
    // Positional-style clients wrap the params object in a one-element array.
    let params = match params {
        Value::Array(mut items) if !items.is_empty() => items.remove(0),
        other => other,
    };

    let req: CreatePostRequest = serde_json::from_value(params).map_err(|_| RpcError {
        code: 400,
        message: "Title, content, and author are required".to_string(),
    })?;

    let post = state
        .posts
        .create_post(NewPost::new(req.title, req.content, req.author))
        .await
        .map_err(to_rpc_error)?;

    to_result(PostCreated::from(post))
}

async fn list_posts(state: &AppState) -> Result<Value, RpcError> {
    let posts = state.posts.list_posts().await.map_err(to_rpc_error)?;

    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();
    to_result(body)
}

async fn get_post(state: &AppState, params: Value) -> Result<Value, RpcError> {
    let id = extract_id(params).ok_or_else(|| RpcError {
        code: 400,
        message: "Post ID is required".to_string(),
    })?;

    let post = state.posts.get_post(id).await.map_err(to_rpc_error)?;

    to_result(PostResponse::from(post))
}

/// `getPost` takes its id positionally, as `[id]` or a bare number.
fn extract_id(params: Value) -> Option<i64> {
    match params {
        Value::Array(items) => items.into_iter().next().and_then(|v| v.as_i64()),
        other => other.as_i64(),
    }
}

fn to_result<T: Serialize>(value: T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| RpcError {
        code: 500,
        message: e.to_string(),
    })
}

fn to_rpc_error(err: DomainError) -> RpcError {
    let code = match err {
        DomainError::Validation(_) => 400,
        DomainError::NotFound { .. } => 404,
        DomainError::Internal(_) => 500,
    };
    RpcError {
        code,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;
    use crate::test_support::test_state;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_state()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    macro_rules! rpc_call {
        ($app:expr, $body:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api")
                .set_json($body)
                .to_request();
            let resp = test::call_service($app, req).await;
            assert_eq!(resp.status(), 200);
            let body: Value = test::read_body_json(resp).await;
            body
        }};
    }

    #[actix_web::test]
    async fn create_post_echoes_the_fields_with_the_generated_id() {
        let app = app!();

        let body = rpc_call!(
            &app,
            json!({
                "jsonrpc": "2.0",
                "method": "createPost",
                "params": {"title": "Hello", "content": "World", "author": "Ana"},
                "id": 1
            })
        );

        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["id"], 1);
        assert_eq!(
            body["result"],
            json!({"id": 1, "title": "Hello", "content": "World", "author": "Ana"})
        );
    }

    #[actix_web::test]
    async fn create_post_accepts_positional_params() {
        let app = app!();

        let body = rpc_call!(
            &app,
            json!({
                "jsonrpc": "2.0",
                "method": "createPost",
                "params": [{"title": "Hello", "content": "World", "author": "Ana"}],
                "id": 2
            })
        );

        assert_eq!(body["result"]["id"], 1);
    }

    #[actix_web::test]
    async fn create_post_with_missing_field_errors_with_code_400() {
        let app = app!();

        let body = rpc_call!(
            &app,
            json!({
                "jsonrpc": "2.0",
                "method": "createPost",
                "params": {"title": "Hello", "author": "Ana"},
                "id": 3
            })
        );

        assert!(body.get("result").is_none());
        assert_eq!(body["error"]["code"], 400);
    }

    #[actix_web::test]
    async fn list_and_get_round_trip() {
        let app = app!();

        rpc_call!(
            &app,
            json!({
                "jsonrpc": "2.0",
                "method": "createPost",
                "params": {"title": "Hello", "content": "World", "author": "Ana"},
                "id": 1
            })
        );

        let listed = rpc_call!(
            &app,
            json!({"jsonrpc": "2.0", "method": "listPosts", "id": 2})
        );
        assert_eq!(listed["result"].as_array().unwrap().len(), 1);

        let fetched = rpc_call!(
            &app,
            json!({"jsonrpc": "2.0", "method": "getPost", "params": [1], "id": 3})
        );
        assert_eq!(fetched["result"]["title"], "Hello");
        assert!(fetched["result"]["created_at"].is_string());
    }

    #[actix_web::test]
    async fn get_post_for_an_unknown_id_errors_with_code_404() {
        let app = app!();

        let body = rpc_call!(
            &app,
            json!({"jsonrpc": "2.0", "method": "getPost", "params": [999], "id": 1})
        );

        assert_eq!(body["error"]["code"], 404);
    }

    #[actix_web::test]
    async fn get_post_without_an_id_errors_with_code_400() {
        let app = app!();

        let body = rpc_call!(
            &app,
            json!({"jsonrpc": "2.0", "method": "getPost", "id": 1})
        );

        assert_eq!(body["error"]["code"], 400);
        assert_eq!(body["error"]["message"], "Post ID is required");
    }

    #[actix_web::test]
    async fn store_failure_errors_with_code_500() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(crate::test_support::failing_store_state()))
                .configure(configure_routes),
        )
        .await;

        let body = rpc_call!(
            &app,
            json!({"jsonrpc": "2.0", "method": "listPosts", "id": 1})
        );

        assert!(body.get("result").is_none());
        assert_eq!(body["error"]["code"], 500);
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("posts")
        );
    }

    #[actix_web::test]
    async fn mismatched_version_errors_with_code_400() {
        let app = app!();

        let body = rpc_call!(
            &app,
            json!({"jsonrpc": "1.0", "method": "listPosts", "id": 7})
        );

        assert_eq!(body["id"], 7);
        assert_eq!(body["error"]["code"], 400);
    }

    #[actix_web::test]
    async fn unknown_method_errors_with_code_404() {
        let app = app!();

        let body = rpc_call!(
            &app,
            json!({"jsonrpc": "2.0", "method": "deletePost", "params": [1], "id": 1})
        );

        assert_eq!(body["error"]["code"], 404);
    }
}
