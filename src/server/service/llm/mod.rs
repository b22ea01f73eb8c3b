//! Client for the external LLM service.
//!
//! Streaming calls return a session id immediately and relay the upstream body to the
//! requesting user's notification room on a spawned task. Non-streaming calls are plain JSON
//! request/response with a 60 second timeout.

pub mod stream;

use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::server::{
    error::AppError,
    gateway::hub::NotificationHub,
    service::llm::stream::{fail_stream, relay, StreamFormat, StreamOutcome, StreamTarget},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub const CHAT_STREAM_PATH: &str = "/api/llm/chat/stream";
pub const CV_PARSE_PATH: &str = "/api/llm/parse-cv";
pub const GENERATE_DOCUMENT_PATH: &str = "/api/llm/generate-document";
pub const INTERVIEW_PREP_PATH: &str = "/api/llm/interview-prep";
pub const DISCOVER_SCHOLARSHIPS_PATH: &str = "/api/llm/scholarships/discover";

/// Response of the scholarship discovery endpoint.
///
/// Candidates stay untyped so one malformed entry does not reject the whole batch.
#[derive(Deserialize, Debug, Clone)]
pub struct DiscoveryResponse {
    #[serde(default)]
    pub scholarships: Vec<Value>,
    #[serde(default)]
    pub count: u32,
}

#[derive(Clone)]
pub struct LlmService {
    client: reqwest::Client,
    base_url: String,
    api_secret: String,
    hub: NotificationHub,
}

impl LlmService {
    /// Creates a new LlmService.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `base_url` - LLM service origin without trailing slash
    /// - `api_secret` - Sent as a bearer token on every call
    /// - `hub` - Notification hub streamed results are relayed to
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        api_secret: String,
        hub: NotificationHub,
    ) -> Self {
        Self {
            client,
            base_url,
            api_secret,
            hub,
        }
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_secret)
    }

    /// Sends a JSON request and decodes the JSON response.
    ///
    /// # Returns
    /// - `Ok(T)` - Decoded response body
    /// - `Err(AppError::ReqwestErr)` - Connection failure, timeout, non-2xx status or
    ///   undecodable body
    pub async fn request<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!("Calling LLM service at {}{}", self.base_url, path);

        let result: Result<T, reqwest::Error> = async {
            self.post(path)
                .timeout(REQUEST_TIMEOUT)
                .json(body)
                .send()
                .await?
                .error_for_status()?
                .json::<T>()
                .await
        }
        .await;

        result.map_err(|e| {
            tracing::error!("LLM service request to {} failed: {}", path, e);
            e.into()
        })
    }

    /// Asks the LLM service for `count` new scholarship candidates.
    pub async fn discover_scholarships(&self, count: u32) -> Result<DiscoveryResponse, AppError> {
        tracing::info!("Discovering {} scholarships from LLM service", count);

        let response: DiscoveryResponse = self
            .request(DISCOVER_SCHOLARSHIPS_PATH, &json!({ "count": count }))
            .await?;

        tracing::info!("Discovered {} scholarships", response.count);
        Ok(response)
    }

    /// Forwards a WebSocket `interview:message` payload and returns the service's answer as-is.
    pub async fn interview_message(&self, payload: &Value) -> Result<Value, AppError> {
        self.request(INTERVIEW_PREP_PATH, payload).await
    }

    /// Starts a chat stream for `user_id`.
    ///
    /// # Returns
    /// - `String` - Session id tagging the `chat:chunk` and `chat:error` events
    pub fn start_chat(&self, user_id: String, message: String, context: Option<Value>) -> String {
        let body = json!({ "message": message, "context": context });
        let metadata = json!({ "context": context });

        self.spawn_stream(user_id, CHAT_STREAM_PATH, body, StreamFormat::Sse, metadata)
    }

    pub fn start_cv_parse(&self, user_id: String, cv_content: String) -> String {
        let body = json!({ "cv_content": cv_content, "stream": true });
        let metadata = json!({ "type": "cv-parse" });

        self.spawn_stream(user_id, CV_PARSE_PATH, body, StreamFormat::Raw, metadata)
    }

    /// Starts a document generation stream.
    ///
    /// Besides the chat events, a `document:generation-complete` event with the session id as
    /// `documentId` follows the terminal event.
    pub fn start_document_generation(
        &self,
        user_id: String,
        document_type: String,
        data: Value,
    ) -> String {
        let session_id = new_session_id();
        let body = json!({ "document_type": document_type, "data": data, "stream": true });
        let target = StreamTarget {
            user_id,
            session_id: session_id.clone(),
            metadata: Some(json!({ "type": "document-generation", "documentType": document_type })),
        };

        let service = self.clone();
        tokio::spawn(async move {
            let outcome = service
                .stream(GENERATE_DOCUMENT_PATH, &body, StreamFormat::Raw, &target)
                .await;

            let (success, extra) = match outcome {
                StreamOutcome::Completed(content) => (true, json!({ "content": content })),
                StreamOutcome::Failed(error) => (false, json!({ "error": error })),
            };
            service
                .hub
                .emit_document_generation_complete(
                    &target.user_id,
                    &target.session_id,
                    &document_type,
                    success,
                    Some(extra),
                )
                .await;
        });

        session_id
    }

    pub fn start_interview_prep(
        &self,
        user_id: String,
        question: String,
        context: Option<Value>,
    ) -> String {
        let body = json!({ "question": question, "context": context, "stream": true });

        let mut metadata = Map::new();
        metadata.insert("type".to_string(), json!("interview-prep"));
        if let Some(Value::Object(context)) = context {
            metadata.extend(context);
        }

        self.spawn_stream(
            user_id,
            INTERVIEW_PREP_PATH,
            body,
            StreamFormat::Raw,
            Value::Object(metadata),
        )
    }

    fn spawn_stream(
        &self,
        user_id: String,
        path: &'static str,
        body: Value,
        format: StreamFormat,
        metadata: Value,
    ) -> String {
        let session_id = new_session_id();
        let target = StreamTarget {
            user_id,
            session_id: session_id.clone(),
            metadata: Some(metadata),
        };

        tracing::info!(
            "Starting {} stream {} for user {}",
            path,
            session_id,
            target.user_id
        );

        let service = self.clone();
        tokio::spawn(async move {
            service.stream(path, &body, format, &target).await;
        });

        session_id
    }

    /// Opens the upstream stream and relays it; every failure becomes a `chat:error` event.
    async fn stream(
        &self,
        path: &str,
        body: &Value,
        format: StreamFormat,
        target: &StreamTarget,
    ) -> StreamOutcome {
        let response = match self.post(path).json(body).send().await {
            Ok(response) => response,
            Err(e) => return fail_stream(&self.hub, target, e.to_string()).await,
        };

        let status = response.status();
        if !status.is_success() {
            return fail_stream(
                &self.hub,
                target,
                format!("LLM service responded with status {}", status),
            )
            .await;
        }

        relay(&self.hub, target, format, response.bytes_stream()).await
    }
}

fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
