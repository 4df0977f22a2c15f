use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

/// Header carrying the portal's key for the billing API.
const API_KEY_HEADER: &str = "APIKey";

/// Thin client for the external billing API, built on reqwest. Every
/// operation the portal performs against persisted state goes through here.
pub struct NodeApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NodeApiClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/api/Node/{}", base, path)
    }

    pub(super) async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let resp = self
            .http
            .get(self.endpoint(path))
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        Ok(resp)
    }

    pub(super) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        let resp = self
            .http
            .post(self.endpoint(path))
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;
        Ok(resp)
    }

    pub(super) async fn delete(&self, path: &str) -> Result<reqwest::Response> {
        let resp = self
            .http
            .delete(self.endpoint(path))
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        Ok(resp)
    }

    /// Reads the response body, surfacing the backend's own `message`/`error`
    /// field verbatim on a non-success status and falling back to the given
    /// static message. Success bodies that are not JSON come back as `Null`.
    pub(super) async fn read_json(
        resp: reqwest::Response,
        context: &str,
        fallback: &str,
    ) -> Result<Value> {
        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) => text,
            Err(err) => format!("<failed to read response body: {err}>"),
        };
        let parsed = serde_json::from_str::<Value>(&body).ok();

        if status.is_success() {
            return Ok(parsed.unwrap_or(Value::Null));
        }

        let message = parsed
            .as_ref()
            .and_then(backend_message)
            .unwrap_or_else(|| fallback.to_string());

        error!(
            status = %status,
            response_body = %body,
            context = %context,
            "node api request failed"
        );

        anyhow::bail!("{message}")
    }
}

fn backend_message(value: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key)?.as_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_joins_base_url_with_and_without_trailing_slash() {
        let client = NodeApiClient::new("https://api.example.com/".to_string(), "k".to_string());
        assert_eq!(
            client.endpoint("plans"),
            "https://api.example.com/api/Node/plans"
        );

        let client = NodeApiClient::new("https://api.example.com".to_string(), "k".to_string());
        assert_eq!(
            client.endpoint("plan/2"),
            "https://api.example.com/api/Node/plan/2"
        );
    }

    #[test]
    fn backend_message_prefers_message_over_error() {
        let value = json!({"message": "first", "error": "second"});
        assert_eq!(backend_message(&value), Some("first".to_string()));

        let value = json!({"error": "only"});
        assert_eq!(backend_message(&value), Some("only".to_string()));

        assert_eq!(backend_message(&json!({"status": 500})), None);
    }
}
