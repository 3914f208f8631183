//! REST client for the review platform
//!
//! One blocking-style call at a time: every request is awaited to completion
//! before the next is issued. Large venues take minutes to walk; the tool
//! favors predictability over throughput.

use super::types::{Edge, Group, Note, Profile};
use super::{Platform, PlatformError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("chairscope/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Page size for note listings; the platform caps a page at 1000 records.
const NOTES_PAGE_LIMIT: usize = 1000;

/// Profile search batch size, matching the platform's accepted request size.
const PROFILE_SEARCH_BATCH: usize = 100;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct GroupsResponse {
    #[serde(default)]
    groups: Vec<Group>,
}

#[derive(Debug, Deserialize)]
struct EdgesResponse {
    #[serde(default)]
    edges: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
struct NotesResponse {
    #[serde(default)]
    notes: Vec<Note>,
    #[serde(default)]
    count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ProfilesResponse {
    #[serde(default)]
    profiles: Vec<Profile>,
}

/// Authenticated review-platform API client
pub struct PlatformClient {
    http_client: reqwest::Client,
    base_url: String,
    token: String,
}

impl PlatformClient {
    /// Authenticate and return a ready client. Login failure is fatal to the
    /// run; there is nothing useful to do without a token.
    pub async fn login(
        base_url: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, PlatformError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        let base_url = base_url.trim_end_matches('/').to_string();
        let body = serde_json::json!({ "id": username, "password": password });

        let response = http_client
            .post(format!("{}/login", base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 400 || status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(PlatformError::Auth(format!(
                "login rejected for user {}",
                username
            )));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PlatformError::Api(status.as_u16(), error_text));
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| PlatformError::Parse(e.to_string()))?;

        tracing::info!(base_url = %base_url, user = %username, "Authenticated with review platform");

        Ok(Self {
            http_client,
            base_url,
            token: login.token,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, PlatformError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PlatformError::Api(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| PlatformError::Parse(e.to_string()))
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, PlatformError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PlatformError::Api(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| PlatformError::Parse(e.to_string()))
    }
}

#[async_trait]
impl Platform for PlatformClient {
    async fn get_group(&self, id: &str) -> Result<Group, PlatformError> {
        tracing::debug!(group = %id, "Fetching group");

        let response: GroupsResponse = match self
            .get_json("groups", &[("id", id.to_string())])
            .await
        {
            Ok(response) => response,
            Err(PlatformError::Api(404, _)) => {
                return Err(PlatformError::GroupNotFound(id.to_string()))
            }
            Err(e) => return Err(e),
        };

        response
            .groups
            .into_iter()
            .next()
            .ok_or_else(|| PlatformError::GroupNotFound(id.to_string()))
    }

    async fn get_edges(
        &self,
        invitation: &str,
        head: Option<&str>,
        tail: Option<&str>,
    ) -> Result<Vec<Edge>, PlatformError> {
        let mut query = vec![("invitation", invitation.to_string())];
        if let Some(head) = head {
            query.push(("head", head.to_string()));
        }
        if let Some(tail) = tail {
            query.push(("tail", tail.to_string()));
        }

        // A 404 here means "no edges of this invitation", not a failure.
        let response: EdgesResponse = match self.get_json("edges", &query).await {
            Ok(response) => response,
            Err(PlatformError::Api(404, _)) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        tracing::debug!(
            invitation = %invitation,
            edges = response.edges.len(),
            "Fetched edges"
        );

        Ok(response.edges)
    }

    async fn list_notes(
        &self,
        invitation: &str,
        details: Option<&str>,
    ) -> Result<Vec<Note>, PlatformError> {
        let mut notes = Vec::new();
        let mut offset = 0usize;

        loop {
            let mut query = vec![
                ("invitation", invitation.to_string()),
                ("offset", offset.to_string()),
                ("limit", NOTES_PAGE_LIMIT.to_string()),
            ];
            if let Some(details) = details {
                query.push(("details", details.to_string()));
            }

            let page: NotesResponse = self.get_json("notes", &query).await?;
            let fetched = page.notes.len();
            notes.extend(page.notes);

            tracing::debug!(
                invitation = %invitation,
                offset = offset,
                fetched = fetched,
                total = ?page.count,
                "Fetched notes page"
            );

            if fetched < NOTES_PAGE_LIMIT {
                break;
            }
            offset += NOTES_PAGE_LIMIT;
        }

        tracing::info!(invitation = %invitation, notes = notes.len(), "Listed notes");
        Ok(notes)
    }

    async fn search_profiles(&self, ids: &[String]) -> Result<Vec<Profile>, PlatformError> {
        let mut profiles = Vec::new();

        for batch in ids.chunks(PROFILE_SEARCH_BATCH) {
            let body = serde_json::json!({ "ids": batch });
            let response: ProfilesResponse = self.post_json("profiles/search", &body).await?;
            profiles.extend(response.profiles);
        }

        tracing::debug!(
            requested = ids.len(),
            resolved = profiles.len(),
            "Searched profiles"
        );

        Ok(profiles)
    }
}
