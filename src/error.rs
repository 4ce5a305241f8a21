use axum::{
    http::{StatusCode, header::CONTENT_TYPE, request::Parts},
    response::{IntoResponse, Response},
    extract::{
        FromRequest,
        FromRequestParts,
        Query,
        Request,
    },
    body::Bytes,
    Json,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    error::Error,
};
use validator::ValidationErrors;

#[derive(Debug, PartialEq)]
pub enum ErrorMessage {
    InvalidJson,
    UriRequired,
    FailedCreateComment,
    MethodNotAllowed,
    RouteNotFound(String, String),
}
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
/// An error rendered as `{"error": message}`, or as an empty JSON-typed
/// body when there is no message.
#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub message: Option<String>,
}

impl ErrorMessage {
    fn get_message(&self) -> String {
        match self {
            ErrorMessage::InvalidJson => "Invalid JSON".to_string(),
            ErrorMessage::UriRequired => "uri or uri_encoded is required".to_string(),
            ErrorMessage::FailedCreateComment => "Failed to create comment".to_string(),
            ErrorMessage::MethodNotAllowed => "Method not allowed".to_string(),
            ErrorMessage::RouteNotFound(method, path) => format!("Route {} {} does not exist", method, path),
        }
    }
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.get_message())
    }
}

impl HttpError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError {
            status: StatusCode::BAD_REQUEST,
            message: Some(message.into()),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError {
            status: StatusCode::NOT_FOUND,
            message: Some(message.into()),
        }
    }
    pub fn not_found_empty() -> Self {
        HttpError {
            status: StatusCode::NOT_FOUND,
            message: None,
        }
    }
    pub fn method_not_allowed() -> Self {
        HttpError {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: Some(ErrorMessage::MethodNotAllowed.to_string()),
        }
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "HttpError: message: {}, status: {}",
            self.message.as_deref().unwrap_or_default(), self.status
        )
    }
}

impl Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self.message {
            Some(message) => (self.status, Json(ErrorResponse { error: message })).into_response(),
            None => (self.status, [(CONTENT_TYPE, "application/json")]).into_response(),
        }
    }
}

pub struct FieldError;

impl FieldError {
    /// Reports the message of the first failing field, checked in `order`.
    pub fn first_error(errors: ValidationErrors, order: &[&str]) -> HttpError {
        let field_errors = errors.field_errors();
        let message = order
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .chain(field_errors.values())
            .flat_map(|messages| messages.iter())
            .map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string())
            })
            .next()
            .unwrap_or_else(|| "Validation Errors".to_string());
        HttpError::bad_request(message)
    }
}

/// JSON body extractor that ignores `Content-Type` and reports any
/// unreadable or malformed body as `400 Invalid JSON`.
pub struct JsonParser<T>(pub T);
impl<S, T> FromRequest<S> for JsonParser<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await
            .map_err(|_| HttpError::bad_request(ErrorMessage::InvalidJson.to_string()))?;
        // Only the first value is read, anything after it is ignored.
        match serde_json::Deserializer::from_slice(&bytes).into_iter::<T>().next() {
            Some(Ok(value)) => Ok(Self(value)),
            _ => Err(HttpError::bad_request(ErrorMessage::InvalidJson.to_string())),
        }
    }
}

/// Query string extractor for string-valued parameters. A repeated key
/// keeps its first value.
pub struct QueryParser<T>(pub T);
impl<S, T> FromRequestParts<S> for QueryParser<T>
where
    T: DeserializeOwned + Send + Sync,
    S: Send + Sync,
{
    type Rejection = HttpError;
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
        let mut params = Map::new();
        for (key, value) in pairs {
            params.entry(key).or_insert(Value::String(value));
        }
        match serde_json::from_value::<T>(Value::Object(params)) {
            Ok(value) => Ok(Self(value)),
            Err(err) => Err(HttpError::bad_request(format!("Failed to deserialize query string: {}", err))),
        }
    }
}
