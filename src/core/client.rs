use crate::domain::model::{is_truthy, CreateRobotResponse, Direction, MoveCommand, MoveResponse};
use crate::domain::ports::{ConfigProvider, RobotApi};
use crate::utils::error::{Result, RobotError};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// Fixed payload of the escape call; the external API demands exactly this.
const ESCAPE_SALARY: u32 = 60_000;

/// HTTP implementation of [`RobotApi`]: one reqwest client plus a bounded
/// immediate-retry wrapper around every call.
pub struct HttpRobotClient {
    client: Client,
    base_url: Url,
    retry_max: u32,
}

impl HttpRobotClient {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut base_url = Url::parse(config.base_url())?;

        // Paths are joined onto the base, so it must end with a slash or
        // Url::join would replace its last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if config.insecure() {
            tracing::warn!("⚠️ TLS certificate verification disabled (--insecure)");
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            retry_max: config.retry_max(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// One API call with bounded immediate retry.
    ///
    /// HTTP 200 decodes and returns. HTTP 410 means the robot is out of
    /// energy, a terminal condition that is never retried. Any other
    /// status, and any transport error, consumes one attempt. The status
    /// and body of the last failed attempt are threaded through the loop
    /// as explicit values so the exhaustion error can report them.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&serde_json::Value>,
    ) -> Result<T> {
        let mut last_status: Option<StatusCode> = None;
        let mut last_body = String::new();

        for attempt in 1..=self.retry_max {
            let mut request = self.client.request(method.clone(), url.clone());
            if let Some(body) = body {
                request = request.json(body);
            }

            tracing::debug!("{} {} (attempt {}/{})", method, url, attempt, self.retry_max);

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    tracing::debug!("API response status: {}", status);

                    if status == StatusCode::OK {
                        return Ok(response.json::<T>().await?);
                    }
                    if status == StatusCode::GONE {
                        return Err(RobotError::OutOfEnergy);
                    }

                    last_status = Some(status);
                    last_body = response.text().await.unwrap_or_default();
                    tracing::warn!(
                        "Attempt {}/{} failed: HTTP {}",
                        attempt,
                        self.retry_max,
                        status
                    );
                }
                Err(e) => {
                    last_status = e.status();
                    last_body = e.to_string();
                    tracing::warn!("Attempt {}/{} failed: {}", attempt, self.retry_max, e);
                }
            }
        }

        Err(RobotError::RetriesExhausted {
            attempts: self.retry_max,
            status: last_status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "transport error".to_string()),
            body: last_body,
        })
    }
}

#[async_trait]
impl RobotApi for HttpRobotClient {
    async fn create_robot(&self, email: &str) -> Result<String> {
        let body = serde_json::json!({ "email": email });
        let response: CreateRobotResponse = self
            .request(Method::POST, self.base_url.clone(), Some(&body))
            .await?;
        Ok(response.id)
    }

    async fn move_robot(&self, id: &str, direction: Direction, distance: u32) -> Result<u32> {
        let url = self.endpoint(&format!("{}/move", id))?;
        let body = serde_json::to_value(MoveCommand {
            direction,
            distance,
        })?;
        let response: MoveResponse = self.request(Method::PUT, url, Some(&body)).await?;
        Ok(response.distance)
    }

    async fn escape(&self, id: &str) -> Result<bool> {
        let url = self.endpoint(&format!("{}/escape", id))?;
        let body = serde_json::json!({ "salary": ESCAPE_SALARY });
        let response: serde_json::Value = self.request(Method::PUT, url, Some(&body)).await?;
        Ok(response.get("success").map(is_truthy).unwrap_or(false))
    }
}
