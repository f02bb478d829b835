//! Wire DTOs for the comment API.
//!
//! # Design
//! These types are defined independently from the mock-server crate; the
//! integration tests catch any schema drift between the two.

use serde::{Deserialize, Serialize};

/// A comment as returned by `GET /comments`.
///
/// All three fields are required; a record missing any of them is rejected
/// rather than defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub name: String,
    pub text: String,
}

impl Comment {
    pub fn new(id: u64, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Request payload for `POST /comment`.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment<'a> {
    pub name: &'a str,
    pub text: &'a str,
}

/// Request payload for `PUT /comment/{id}`. Fields left as `None` are omitted
/// from the JSON entirely, so the server only touches what was supplied.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommentUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
}
