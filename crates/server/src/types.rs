use lexibridge::Translation;
use serde::{Deserialize, Serialize};

/// Query parameters for the webhook verification handshake.
#[derive(Debug, Deserialize, Default)]
pub struct ChallengeParams {
    pub challenge: Option<String>,
}

/// One entry in the health check's capability listing.
#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub methods: &'static [&'static str],
    pub description: &'static str,
}

/// The response body for the health check endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

/// The response body for a successfully processed webhook.
#[derive(Serialize)]
pub struct WebhookSuccess {
    pub status: &'static str,
    pub word: String,
    pub translations: Translation,
}
