//! HttpSource and DataProvider against a local axum server

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rosterctl_core::{DataProvider, HttpSource, MemberId, MemberSource, RosterError};
use serde_json::{json, Value};

fn members_json() -> Value {
    json!([
        {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
        {"id": "2", "name": "Steve Jobs", "email": "steve@x.com", "role": "admin"},
        {"id": 3, "name": "Arvind Kumar", "email": "arvind@mailinator.com", "role": "member"}
    ])
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn router() -> Router {
    Router::new()
        .route("/members.json", get(|| async { Json(members_json()) }))
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
        .route("/not-a-list", get(|| async { Json(json!({"members": []})) }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!([]))
            }),
        )
}

#[tokio::test]
async fn test_fetch_members() {
    let addr = serve(router()).await;
    let source = HttpSource::new(format!("http://{addr}/members.json"));

    let members = source.fetch().await.unwrap();
    assert_eq!(members.len(), 3);
    assert_eq!(members[1].name, "Steve Jobs");
    assert_eq!(members[2].id, MemberId(3));
    assert!(members.iter().all(|m| !m.checked));
}

#[tokio::test]
async fn test_non_2xx_is_status_error() {
    let addr = serve(router()).await;
    let source = HttpSource::new(format!("http://{addr}/broken"));

    match source.fetch().await.unwrap_err() {
        RosterError::Status { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let addr = serve(router()).await;
    let source = HttpSource::new(format!("http://{addr}/not-a-list"));
    assert!(matches!(
        source.fetch().await.unwrap_err(),
        RosterError::Decode { .. }
    ));
}

#[tokio::test]
async fn test_timeout_is_http_error() {
    let addr = serve(router()).await;
    let source =
        HttpSource::with_timeout(format!("http://{addr}/slow"), Some(Duration::from_millis(200)))
            .unwrap();
    assert!(matches!(
        source.fetch().await.unwrap_err(),
        RosterError::Http { .. }
    ));
}

#[tokio::test]
async fn test_provider_network_error_leaves_list_empty() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpSource::new(format!("http://{addr}/members.json"));
    let provider = DataProvider::initialize(&source).await;
    assert!(provider.is_empty());
}

#[tokio::test]
async fn test_provider_server_error_leaves_list_empty() {
    let addr = serve(router()).await;
    let source = HttpSource::new(format!("http://{addr}/broken"));
    let provider = DataProvider::initialize(&source).await;
    assert!(provider.is_empty());
}

#[tokio::test]
async fn test_provider_success() {
    let addr = serve(router()).await;
    let source = HttpSource::new(format!("http://{addr}/members.json"));
    let provider = DataProvider::initialize(&source).await;
    assert_eq!(provider.len(), 3);
    assert_eq!(source.describe(), format!("http://{addr}/members.json"));
}
