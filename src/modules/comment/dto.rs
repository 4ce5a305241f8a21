use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;
use crate::{modules::comment::model::Comment, utils::uri};

/// `null` reads as an empty string, the same as an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CommentRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub uri_encoded: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Nickname is required"))]
    pub nickname: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// Page identity supplied on the query string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommentIdentityParams {
    pub uri: String,
    pub uri_encoded: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommentListParams {
    pub uri: String,
    pub uri_encoded: String,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

pub struct NewComment {
    pub uri: String,
    pub uri_encoded: String,
    pub nickname: String,
    pub email: String,
    pub title: String,
    pub content: String,
    pub inserted_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct PaginatedComments {
    pub comments: Vec<Comment>,
    pub page: i64,
    pub page_size: i64,
}

impl CommentRequest {
    /// Order in which failing fields are reported.
    pub const REQUIRED_FIELDS: [&'static str; 3] = ["nickname", "email", "content"];

    /// Replaces the body's identity with the query string's, even when the
    /// query string leaves a field empty.
    pub fn with_identity(self, identity: CommentIdentityParams) -> Self {
        Self {
            uri: identity.uri,
            uri_encoded: identity.uri_encoded,
            ..self
        }
    }
    pub fn has_identity(&self) -> bool {
        !self.uri.is_empty() || !self.uri_encoded.is_empty()
    }
    pub fn into_new_comment(self, inserted_at: DateTime<Utc>) -> NewComment {
        NewComment {
            uri: uri::resolve(&self.uri, &self.uri_encoded, false),
            uri_encoded: uri::resolve(&self.uri, &self.uri_encoded, true),
            nickname: self.nickname,
            email: self.email,
            title: self.title,
            content: self.content,
            inserted_at,
        }
    }
}
