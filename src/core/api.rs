use crate::config::{ApiConfig, SharedConfig};
use crate::domain::model::{
    Assessment, GeneratedResume, JobSearchRequest, MilitaryTranslation, ResumeData,
    TranslationRequest,
};
use crate::utils::error::Result;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// One-shot wrappers over the four platform APIs.
#[derive(Debug, Clone)]
pub struct CareerClient {
    config: SharedConfig,
    client: Client,
}

impl CareerClient {
    pub fn new(config: SharedConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Job listings come back loosely shaped; callers pick the view they need.
    pub async fn fetch_job_listings(
        &self,
        query: &str,
        location: &str,
    ) -> Result<serde_json::Value> {
        let body = JobSearchRequest {
            query: query.to_string(),
            location: location.to_string(),
        };
        self.call(&self.config.apis.jobs, "search", Method::POST, Some(&body))
            .await
    }

    pub async fn fetch_skills_assessment(&self) -> Result<Assessment> {
        self.call(
            &self.config.apis.skills,
            "assessment",
            Method::GET,
            None::<&()>,
        )
        .await
    }

    pub async fn generate_resume(&self, data: &ResumeData) -> Result<GeneratedResume> {
        self.call(&self.config.apis.resume, "generate", Method::POST, Some(data))
            .await
    }

    pub async fn fetch_military_translation(&self, mos: &str) -> Result<MilitaryTranslation> {
        let body = TranslationRequest {
            mos: mos.to_string(),
        };
        self.call(
            &self.config.apis.military,
            "translate",
            Method::POST,
            Some(&body),
        )
        .await
    }

    async fn call<T, B>(
        &self,
        api: &ApiConfig,
        route: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint_url(api, route)?;
        tracing::debug!("Making {} request to: {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .bearer_auth(&api.key)
            .timeout(api.timeout());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        let response = response.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}
