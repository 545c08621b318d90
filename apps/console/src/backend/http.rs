use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};

use crate::backend::decode::{decode_parse_resume, decode_recommendations, transport_message};
use crate::backend::{BackendError, MatchBackend};
use crate::models::{JobResult, ParsedResume, RecommendRequest, ResumeUpload};

/// `reqwest` client for the scoring backend.
///
/// Built without a request timeout: a hung backend is reported by the
/// transport itself, and each flow stays in flight until then.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a request and returns the status and body text. Body decoding is
    /// left to the caller because error bodies are still meaningful.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(u16, String), BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Transport(transport_message(&e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(transport_message(&e)))?;
        if !status.is_success() {
            warn!("Backend returned {}: {}", status, body);
        }
        Ok((status.as_u16(), body))
    }
}

#[async_trait]
impl MatchBackend for HttpBackend {
    async fn parse_resume(&self, upload: ResumeUpload) -> Result<ParsedResume, BackendError> {
        debug!(
            file_name = %upload.file_name,
            size = upload.bytes.len(),
            "POST /parse_resume"
        );
        let form = Form::new().part("resume", resume_part(upload));
        let (status, body) = self
            .send(self.client.post(self.url("/parse_resume")).multipart(form))
            .await?;
        decode_parse_resume(status, &body)
    }

    async fn recommend(&self, request: &RecommendRequest) -> Result<Vec<JobResult>, BackendError> {
        debug!(weights = ?request.weights, "POST /recommend");
        let (status, body) = self
            .send(self.client.post(self.url("/recommend")).json(request))
            .await?;
        decode_recommendations(status, &body)
    }
}

/// Multipart part carrying the original file name and, when the browser sent
/// a valid one, the original content type.
fn resume_part(upload: ResumeUpload) -> Part {
    let ResumeUpload {
        file_name,
        content_type,
        bytes,
    } = upload;
    let base = || Part::bytes(bytes.to_vec()).file_name(file_name.clone());
    match content_type.as_deref() {
        Some(mime) => base().mime_str(mime).unwrap_or_else(|_| base()),
        None => base(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PreferenceSet;
    use axum::{extract::Multipart, http::StatusCode, routing::post, Json, Router};
    use bytes::Bytes;
    use serde_json::{json, Value};
    use std::collections::BTreeMap;

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn request() -> RecommendRequest {
        RecommendRequest {
            preferences: PreferenceSet {
                skills: vec!["Rust".to_string()],
                ..Default::default()
            },
            weights: BTreeMap::from([("skills".to_string(), 70), ("title".to_string(), 30)]),
        }
    }

    #[tokio::test]
    async fn test_recommend_sends_payload_and_decodes_jobs() {
        let router = Router::new().route(
            "/recommend",
            post(|Json(body): Json<Value>| async move {
                Json(json!([{
                    "job_id": "j1",
                    "job_title": body["preferences"]["skills"][0],
                    "match_score": body["weights"]["skills"],
                }]))
            }),
        );
        let backend = HttpBackend::new(spawn_backend(router).await).unwrap();

        let jobs = backend.recommend(&request()).await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_title, json!("Rust"));
        assert_eq!(jobs[0].score(), 70.0);
    }

    #[tokio::test]
    async fn test_recommend_surfaces_server_error_message() {
        let router = Router::new().route(
            "/recommend",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "scoring unavailable" })),
                )
            }),
        );
        let backend = HttpBackend::new(spawn_backend(router).await).unwrap();

        let err = backend.recommend(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "scoring unavailable");
    }

    #[tokio::test]
    async fn test_parse_resume_sends_file_field() {
        let router = Router::new().route(
            "/parse_resume",
            post(|mut multipart: Multipart| async move {
                let field = multipart.next_field().await.unwrap().unwrap();
                let name = field.name().unwrap_or_default().to_string();
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content = field.text().await.unwrap();
                Json(json!({
                    "skills": [name, file_name, content],
                    "titles": [],
                }))
            }),
        );
        let backend = HttpBackend::new(spawn_backend(router).await).unwrap();

        let parsed = backend
            .parse_resume(ResumeUpload {
                file_name: "cv.txt".to_string(),
                content_type: Some("text/plain".to_string()),
                bytes: Bytes::from_static(b"Rust developer"),
            })
            .await
            .unwrap();
        assert_eq!(parsed.skills, json!(["resume", "cv.txt", "Rust developer"]));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = HttpBackend::new(format!("http://{addr}/")).unwrap();
        let err = backend.recommend(&request()).await.unwrap_err();
        assert!(matches!(err, BackendError::Transport(_)), "got {err:?}");
        assert!(!err.to_string().is_empty());
    }
}
