// src/api/client.rs
//
// Typed client for the collection service. One method per endpoint, no side
// effects beyond the network call. Everything that can be tested without a
// socket (query pairs, path encoding, error classification) lives in pure
// functions.

use std::time::Duration;

use crate::config::consts::{api_base, HTTP_TIMEOUT_SECS};
use crate::config::options::Criteria;

use super::error::ApiError;
use super::types::{CardUpdate, JobAck, JobStatus, PlayerCounts, PlayerDetail, PlayerSummary};

/// Operations against the remote service. The GUI, CLI, reconciler and
/// monitor all go through this trait; tests substitute a scripted impl.
pub trait Gateway: Send + Sync {
    fn list_players(&self, criteria: &Criteria) -> Result<Vec<PlayerSummary>, ApiError>;
    fn get_player(&self, slug: &str) -> Result<PlayerDetail, ApiError>;
    fn set_card_membership(&self, card_slug: &str, in_club: bool) -> Result<(), ApiError>;
    fn start_scrape(&self) -> Result<JobAck, ApiError>;
    fn scrape_status(&self) -> Result<JobStatus, ApiError>;
    fn player_counts(&self) -> Result<PlayerCounts, ApiError>;
}

pub struct HttpGateway {
    agent: ureq::Agent,
    base: String,
}

impl HttpGateway {
    pub fn new(base: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build();
        let base = s!(base.into().trim_end_matches('/'));
        Self { agent, base }
    }

    /// Base URL from `PP_API_BASE`, else the local default.
    pub fn from_env() -> Self {
        Self::new(api_base())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        join!(&self.base, path)
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let mut req = self.agent.get(&self.url(path));
        for (k, v) in query {
            req = req.query(k, v);
        }
        let resp = req.call().map_err(classify)?;
        decode(resp)
    }
}

impl Gateway for HttpGateway {
    fn list_players(&self, criteria: &Criteria) -> Result<Vec<PlayerSummary>, ApiError> {
        self.get_json("/players", &criteria.query_pairs())
    }

    fn get_player(&self, slug: &str) -> Result<PlayerDetail, ApiError> {
        let path = join!("/players/", &encode_path_segment(slug));
        match self.agent.get(&self.url(&path)).call() {
            Ok(resp) => decode(resp),
            Err(ureq::Error::Status(404, _)) => Err(ApiError::NotFound { slug: s!(slug) }),
            Err(e) => Err(classify(e)),
        }
    }

    fn set_card_membership(&self, card_slug: &str, in_club: bool) -> Result<(), ApiError> {
        // Card slugs may contain '/' and must stay a single path segment
        let path = join!("/cards/", &encode_path_segment(card_slug), "/club");
        self.agent
            .request("PATCH", &self.url(&path))
            .send_json(CardUpdate { in_club })
            .map_err(classify)?;
        Ok(())
    }

    fn start_scrape(&self) -> Result<JobAck, ApiError> {
        let resp = self.agent.post(&self.url("/scrape")).call().map_err(classify)?;
        decode(resp)
    }

    fn scrape_status(&self) -> Result<JobStatus, ApiError> {
        self.get_json("/scrape/status", &[])
    }

    fn player_counts(&self) -> Result<PlayerCounts, ApiError> {
        self.get_json("/players/counts", &[])
    }
}

fn classify(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(status, resp) => {
            let body = resp.into_string().unwrap_or_default();
            ApiError::Application { status, body }
        }
        ureq::Error::Transport(t) => ApiError::Transport(t.to_string()),
    }
}

fn decode<T: serde::de::DeserializeOwned>(resp: ureq::Response) -> Result<T, ApiError> {
    let body = resp
        .into_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Percent-encode a value for embedding as a single URL path segment.
/// Unreserved characters (RFC 3986) pass through; everything else —
/// notably '/' in card slugs — is escaped.
pub fn encode_path_segment(raw: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(raw.len());
    for &b in raw.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0x0F) as usize] as char);
            }
        }
    }
    out
}
