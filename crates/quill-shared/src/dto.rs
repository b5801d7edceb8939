//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are optional on the wire so that a missing field reaches
//! the validators and is reported with the same message as a blank one.

use serde::{Deserialize, Deserializer, Serialize};

/// Keeps `null` apart from an absent field: absent is `None`, `null` is
/// `Some(None)`. Use with `#[serde(default)]`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Request to create an author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// Request to change an author. Absent fields are left untouched;
/// `"phone_number": null` clears the phone number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAuthorRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<Option<String>>,
}

/// An author as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: i32,
    pub name: String,
    pub phone_number: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
}

/// Request to change a post. Absent fields are left untouched;
/// `"summary": null` clears the summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<Option<String>>,
    #[serde(default)]
    pub category: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub category: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Query string for `GET /api/posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListQuery {
    pub category: Option<String>,
}
