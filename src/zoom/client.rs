use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::{Credentials, ZoomConfig};

use super::auth::JwtSigner;
use super::error::ZoomError;
use super::types::{Meeting, MeetingListResponse, MeetingListType, UserListResponse, ZoomUser};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const PAGE_SIZE: &str = "300";

pub struct ZoomApiClient {
    http: Client,
    base_url: String,
    signer: JwtSigner,
}

impl ZoomApiClient {
    pub fn new(credentials: &Credentials, config: &ZoomConfig) -> Result<Self, ZoomError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        info!("Initialized Zoom client for {}", base_url);

        Ok(Self {
            http,
            base_url,
            signer: JwtSigner::new(
                &credentials.api_key,
                &credentials.api_secret,
                config.token_ttl_seconds,
            ),
        })
    }

    /// Lists the account's user directory.
    pub async fn list_users(&self) -> Result<Vec<ZoomUser>, ZoomError> {
        let response: UserListResponse = self
            .get_json("/users", &[("page_size", PAGE_SIZE)])
            .await?;
        Ok(response.users)
    }

    /// Resolves a user by email, case-insensitively.
    pub async fn find_user_by_email(&self, email: &str) -> Result<ZoomUser, ZoomError> {
        let users = self.list_users().await?;
        users
            .into_iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .ok_or_else(|| ZoomError::UserNotFound(email.to_string()))
    }

    /// Lists a user's meetings of the given kind.
    pub async fn list_meetings(
        &self,
        user_id: &str,
        kind: MeetingListType,
    ) -> Result<Vec<Meeting>, ZoomError> {
        let path = format!("/users/{user_id}/meetings");
        let response: MeetingListResponse = self
            .get_json(
                &path,
                &[("type", kind.as_query_param()), ("page_size", PAGE_SIZE)],
            )
            .await?;
        Ok(response.meetings)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ZoomError> {
        let token = self.signer.token()?;
        let url = format!("{}{}", self.base_url, path);

        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Zoom API request failed with status {}: {}", status, body);
            return Err(ZoomError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
