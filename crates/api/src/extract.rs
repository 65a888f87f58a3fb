use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::json::read_json;

/// Extractor that decodes exactly one JSON value from the request body.
///
/// Unlike `axum::Json`, it does not look at `Content-Type`, it rejects
/// trailing content after the first value, and its rejections are rendered
/// as the standard error envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleJson<T>(pub T);

impl<T, S> FromRequest<S> for SingleJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let value = read_json(req.into_body()).await?;
        Ok(SingleJson(value))
    }
}
