//! HTTP access to the grades endpoint.

use tracing::{debug, instrument};

use crate::config::RosterConfig;
use crate::error::RosterError;
use crate::roster::Student;

/// Read-only client for the roster endpoint. Scores are never sent back.
#[derive(Debug, Clone)]
pub struct GradesClient {
    client: reqwest::Client,
    config: RosterConfig,
}

impl GradesClient {
    pub fn new(config: RosterConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// GET the roster. Any non-success status is an error carrying the
    /// response body, or the status reason when the body is empty.
    #[instrument(skip(self), fields(url = %self.config.grades_url))]
    pub async fn fetch_grades(&self) -> Result<Vec<Student>, RosterError> {
        let response = self.client.get(&self.config.grades_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown status").to_string()
            } else {
                body
            };
            return Err(RosterError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let students: Vec<Student> = serde_json::from_str(&body)?;
        debug!(count = students.len(), "roster fetched");
        Ok(students)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GradesClient {
        GradesClient::new(RosterConfig::with_base_url(&server.uri()))
    }

    #[tokio::test]
    async fn fetches_roster() {
        let server = MockServer::start().await;

        let body = serde_json::json!([
            {"id": 1, "name": "Ada", "score": 70},
            {"id": 2, "name": "Grace", "score": 80.5}
        ]);

        Mock::given(method("GET"))
            .and(path("/api/v1/grades"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let students = client_for(&server).fetch_grades().await.unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "Ada");
        assert_eq!(students[0].score, 70.0);
        assert_eq!(students[1].id, 2);
        assert_eq!(students[1].score, 80.5);
    }

    #[tokio::test]
    async fn server_error_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/grades"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database offline"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_grades().await.unwrap_err();
        match err {
            RosterError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database offline");
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_error_body_falls_back_to_reason() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/grades"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_grades().await.unwrap_err();
        assert!(matches!(
            err,
            RosterError::Status { status: 404, ref message } if message == "Not Found"
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/grades"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"students": []})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_grades().await.unwrap_err();
        assert!(matches!(err, RosterError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        // nothing listens on port 1
        let client = GradesClient::new(RosterConfig::with_base_url("http://127.0.0.1:1"));

        let err = client.fetch_grades().await.unwrap_err();
        assert!(matches!(err, RosterError::Network(_)), "got {:?}", err);
    }
}
