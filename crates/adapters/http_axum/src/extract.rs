//! Request body extraction.
//!
//! Bodies are accepted without a `Content-Type` check. Anything that is not a
//! JSON object is rejected with `Not a JSON` before any typed decoding.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A request body that parsed as a JSON object.
#[derive(Debug)]
pub struct JsonObject(pub Map<String, Value>);

impl JsonObject {
    /// Parse raw bytes, requiring a top-level object.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAJson`] for empty, malformed or non-object bodies.
    pub fn parse(bytes: &[u8]) -> Result<Self, ApiError> {
        match serde_json::from_slice(bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            _ => Err(ApiError::NotAJson),
        }
    }

    /// Decode the object into a typed request. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBody`] when a known key holds a value of the
    /// wrong type.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(Value::Object(self.0)).map_err(ApiError::InvalidBody)
    }
}

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::NotAJson)?;
        Self::parse(&bytes)
    }
}
