use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use url::Url;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{ActivityCollection, ErrorBody, MutationReply};

/// The backend REST API the board talks to.
#[async_trait]
pub trait ActivitiesApi: Send + Sync {
    async fn list_activities(&self) -> Result<ActivityCollection, ApiError>;
    async fn signup(&self, activity: &str, email: &str) -> Result<MutationReply, ApiError>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<MutationReply, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpActivitiesApi {
    client: Client,
    base_url: Url,
    host_header: Option<String>,
}

impl HttpActivitiesApi {
    pub fn new(base_url: Url, host_header: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            host_header,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.api_host_header.clone())
    }

    /// `{base}/activities[/{name}/{tail}]`, with `name` kept as one segment
    /// even when it contains `/` or spaces.
    fn activities_url(&self, activity: Option<(&str, &str)>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("activities");
            if let Some((name, tail)) = activity {
                segments.push(name).push(tail);
            }
        }
        Ok(url)
    }

    fn with_host(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.host_header {
            Some(host) => req.header("Host", host),
            None => req,
        }
    }
}

/// Turns a non-2xx response into `ApiError::Status`, keeping `detail` when the
/// body carries one.
async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let detail = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.detail_text());
    Err(ApiError::Status { status, detail })
}

#[async_trait]
impl ActivitiesApi for HttpActivitiesApi {
    async fn list_activities(&self) -> Result<ActivityCollection, ApiError> {
        let url = self.activities_url(None)?;
        let resp = self.with_host(self.client.get(url)).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json::<ActivityCollection>().await?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MutationReply, ApiError> {
        let url = self.activities_url(Some((activity, "signup")))?;
        let resp = self
            .with_host(self.client.post(url).query(&[("email", email)]))
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(resp.json::<MutationReply>().await?)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MutationReply, ApiError> {
        let url = self.activities_url(Some((activity, "participants")))?;
        let resp = self
            .with_host(self.client.delete(url).query(&[("email", email)]))
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(resp.json::<MutationReply>().await?)
    }
}
