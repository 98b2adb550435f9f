use crate::form::FormFields;
use async_trait::async_trait;
use folio_http_client::Client;
use http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use typed_builder::TypedBuilder;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint answered, but not with a success status
    #[error("endpoint responded with {status}")]
    Rejected {
        status: StatusCode,
        reason: Option<String>,
    },

    /// The endpoint could not be reached, or its response could not be read
    #[error(transparent)]
    Network(#[from] folio_http_client::Error),
}

/// Anything that can deliver the form contents to the relay endpoint
#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn submit(&self, fields: &FormFields) -> Result<(), ApiError>;
}

#[async_trait]
impl<T> ContactApi for Arc<T>
where
    T: ContactApi + ?Sized,
{
    async fn submit(&self, fields: &FormFields) -> Result<(), ApiError> {
        (**self).submit(fields).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Posts the form as JSON to the relay endpoint
#[derive(Clone, TypedBuilder)]
pub struct HttpContactApi {
    #[builder(setter(into))]
    endpoint: String,

    #[builder(default)]
    client: Client,
}

#[async_trait]
impl ContactApi for HttpContactApi {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn submit(&self, fields: &FormFields) -> Result<(), ApiError> {
        let response = self.client.post_json(self.endpoint.as_str(), fields).await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let reason = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(error) => {
                debug!(?error, "error response without a readable body");
                None
            }
        };

        Err(ApiError::Rejected { status, reason })
    }
}
