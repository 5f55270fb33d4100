//! Request extractors whose rejections are reported as [`ApiError`]s, so
//! malformed requests get the same JSON error body as failed validation.

use axum::async_trait;
use axum::body::{Body, Bytes};
use axum::extract::{Form, FromRequest, FromRequestParts, Path};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::Request;
use percent_encoding::percent_decode;
use serde::de::DeserializeOwned;

use crate::routes::ApiError;

/// `application/x-www-form-urlencoded` body. Percent-encoded bytes must
/// decode to valid UTF-8; axum's `Form` would otherwise replace them with
/// U+FFFD and the mangled text would be stored.
pub struct FormFields<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, Body> for FormFields<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();
        let content_type = req.headers().get(CONTENT_TYPE).cloned();

        let bytes = Bytes::from_request(req, state).await?;
        if percent_decode(&bytes).decode_utf8().is_err() {
            return Err(ApiError::MalformedRequest(
                "Form fields must be valid UTF-8".into(),
            ));
        }

        let mut replayed = Request::builder().method(method);
        if let Some(content_type) = content_type {
            replayed = replayed.header(CONTENT_TYPE, content_type);
        }
        let replayed = replayed
            .body(Body::from(bytes))
            .map_err(|e| ApiError::MalformedRequest(e.to_string()))?;

        let Form(value) = Form::<T>::from_request(replayed, state).await?;
        Ok(Self(value))
    }
}

/// Path parameters, e.g. the integer id of `/newsletters/:id`.
pub struct PathParam<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
