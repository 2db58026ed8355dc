//! Full list → delete → invalidate workflow against a stateful fake API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::json;
use tokio::net::TcpListener;

use newsdesk::api::{FetchExecutor, MutationClient};
use newsdesk::config::ApiConfig;
use newsdesk::models::Post;
use newsdesk::query::{CollectionQuery, FilterSet};
use newsdesk::store::ViewModelStore;

type Posts = Arc<Mutex<Vec<serde_json::Value>>>;

fn seed_posts() -> Posts {
    Arc::new(Mutex::new(vec![
        json!({"_id": "a1", "title": "First", "source": "Eenadu"}),
        json!({"_id": "a2", "title": "Second", "source": "Eenadu"}),
    ]))
}

async fn list_posts(State(posts): State<Posts>) -> Json<serde_json::Value> {
    let posts = posts.lock();
    Json(json!({
        "status": "success",
        "posts": *posts,
        "totalPages": 1,
        "totalCount": posts.len(),
        "currentPage": 1
    }))
}

async fn delete_post(State(posts): State<Posts>, Path(id): Path<String>) -> Json<serde_json::Value> {
    let mut posts = posts.lock();
    let before = posts.len();
    posts.retain(|p| p["_id"] != id.as_str());
    if posts.len() == before {
        Json(json!({"error": "post not found"}))
    } else {
        Json(json!({"status": "success"}))
    }
}

#[tokio::test]
async fn deleting_a_post_and_invalidating_refreshes_the_list() {
    let posts = seed_posts();
    let router = Router::new()
        .route("/posts", get(list_posts))
        .route("/post/{id}", delete(delete_post))
        .with_state(posts);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = ApiConfig {
        base_url: format!("http://{}", addr),
        ..ApiConfig::default()
    };
    let store = ViewModelStore::new(
        FetchExecutor::<Post>::new(&config),
        CollectionQuery::new(config.page_size),
    );
    let mutations = MutationClient::new(&config);

    let filters = FilterSet::new().with("source", "Eenadu").with("category", "All");
    store.request(1, filters).await;
    let snapshot = store.snapshot();
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.result.as_ref().unwrap().items.len(), 2);

    mutations.delete_post("a1").await.unwrap();
    store.invalidate().await;

    let snapshot = store.snapshot();
    let result = snapshot.result.unwrap();
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].id, "a2");
    assert_eq!(result.total_count, 1);
}
