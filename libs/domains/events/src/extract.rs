//! Request extractors with domain-shaped rejections.

use crate::error::DomainError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;

/// Extractor for ObjectId path parameters.
///
/// Parses the single path parameter as a 24-character hex ObjectId and
/// rejects malformed values with a 400 before the handler body runs.
///
/// # Example
/// ```ignore
/// async fn get_event(ObjectIdPath(id): ObjectIdPath) -> String {
///     format!("Event ID: {}", id)
/// }
/// ```
pub struct ObjectIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match ObjectId::parse_str(&id) {
            Ok(oid) => Ok(ObjectIdPath(oid)),
            Err(_) => Err(DomainError::InvalidId(id).into_response()),
        }
    }
}

/// JSON body extractor whose rejection is always a 400.
///
/// axum's `Json` answers 422 for well-formed JSON of the wrong shape;
/// this API treats every undecodable body the same way (400, JSON error
/// body), so the rejection is rewritten through [`DomainError`].
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                Err(DomainError::InvalidBody(rejection.body_text()).into_response())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_object_id_parsing() {
        assert!(ObjectId::parse_str("652f1a2b3c4d5e6f78901234").is_ok());
        assert!(ObjectId::parse_str("not-an-object-id").is_err());
        assert!(ObjectId::parse_str("652f1a2b").is_err());
    }
}
