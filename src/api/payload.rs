//! Request extractors for post routes.

use std::collections::HashMap;

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::header,
    Form, Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Post ID from the `{id}` path segment.
#[derive(Debug, Clone, Copy, Deserialize, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct PostId(pub u64);

/// Submitted post fields, from a JSON object or a URL-encoded form.
///
/// Values are left untyped so the validator can report wrong types instead of
/// the request failing to deserialize.
#[derive(Debug, Clone)]
pub struct PostPayload(pub Map<String, Value>);

impl<S> FromRequest<S> for PostPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| {
                content_type.starts_with("application/x-www-form-urlencoded")
            });

        if is_form {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state).await?;
            return Ok(Self(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, Value::String(value)))
                    .collect(),
            ));
        }

        match Json::<Value>::from_request(req, state).await? {
            Json(Value::Object(fields)) => Ok(Self(fields)),
            Json(_) => Err(AppError::BadRequest(
                "Request body must be a JSON object".to_string(),
            )),
        }
    }
}
