//! JSON body extractor that runs `validator` rules before the handler sees the value.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use eventhub_core::error::AppError;

use crate::error::ApiError;

/// A deserialized and validated JSON body.
///
/// Malformed JSON and failed rules are both reported as validation errors
/// using the standard error body.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("Invalid {field}"),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::validation(describe(&errors)))?;

        Ok(Self(value))
    }
}
