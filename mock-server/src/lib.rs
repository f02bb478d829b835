use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub name: String,
    pub text: String,
}

#[derive(Deserialize)]
pub struct NewComment {
    pub name: String,
    pub text: String,
}

#[derive(Deserialize)]
pub struct CommentUpdate {
    pub name: Option<String>,
    pub text: Option<String>,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    comments: BTreeMap<u64, Comment>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/comments", get(list_comments))
        .route("/comment", post(add_comment))
        .route("/comment/{id}", put(update_comment))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_comments(State(db): State<Db>) -> Json<Vec<Comment>> {
    let store = db.read().await;
    Json(store.comments.values().cloned().collect())
}

async fn add_comment(
    State(db): State<Db>,
    Json(input): Json<NewComment>,
) -> (StatusCode, Json<Comment>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let comment = Comment {
        id: store.next_id,
        name: input.name,
        text: input.text,
    };
    store.comments.insert(comment.id, comment.clone());
    tracing::info!(id = comment.id, "comment added");
    (StatusCode::CREATED, Json(comment))
}

async fn update_comment(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<CommentUpdate>,
) -> Result<Json<Comment>, StatusCode> {
    let mut store = db.write().await;
    let comment = store.comments.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        comment.name = name;
    }
    if let Some(text) = input.text {
        comment.text = text;
    }
    tracing::info!(id, "comment updated");
    Ok(Json(comment.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_serializes_to_json() {
        let comment = Comment {
            id: 1,
            name: "name1".to_string(),
            text: "comment1".to_string(),
        };
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "name1", "text": "comment1"}));
    }

    #[test]
    fn new_comment_rejects_missing_text() {
        let result: Result<NewComment, _> = serde_json::from_str(r#"{"name":"n"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_comment_accepts_empty_strings() {
        let input: NewComment = serde_json::from_str(r#"{"name":"","text":""}"#).unwrap();
        assert!(input.name.is_empty());
        assert!(input.text.is_empty());
    }

    #[test]
    fn comment_update_all_fields_optional() {
        let input: CommentUpdate = serde_json::from_str("{}").unwrap();
        assert!(input.name.is_none());
        assert!(input.text.is_none());
    }

    #[test]
    fn comment_update_partial_fields() {
        let input: CommentUpdate = serde_json::from_str(r#"{"text":"new text"}"#).unwrap();
        assert!(input.name.is_none());
        assert_eq!(input.text.as_deref(), Some("new text"));
    }
}
