use std::collections::HashSet;
use std::time::Duration;

use log::{error, info};
use reqwest::Client;

use crate::error::ClientError;
use crate::types::{FollowReport, List, Status};

pub const DEFAULT_DOMAIN: &str = "mastodon.social";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin client over the handful of Mastodon REST endpoints this tool uses.
///
/// Credentials are immutable after construction and every request carries
/// the same `Authorization: Bearer` header. Each call is a single
/// request-response cycle, there is no local state between calls.
pub struct MastodonClient {
    token: String,
    base_url: String,
    http: Client,
}

impl MastodonClient {
    pub fn new(token: &str, domain: &str, timeout: Duration) -> Result<Self, ClientError> {
        Self::with_base_url(token, &format!("https://{domain}"), timeout)
    }

    /// Build a client against an explicit base URL. Tests point this at a
    /// local server instead of a live instance.
    pub fn with_base_url(
        token: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            token: token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Follow a single account. Non-2xx answers are reported as errors,
    /// never silently dropped.
    pub async fn follow(&self, account_id: &str) -> Result<(), ClientError> {
        let endpoint = format!("/api/v1/accounts/{account_id}/follow");
        let response = self
            .http
            .post(format!("{}{}", self.base_url, endpoint))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::remote(endpoint, status));
        }
        let body = response.text().await?;
        info!("followed {account_id}: {body}");
        Ok(())
    }

    /// Fetch the hashtag timeline and return the deduplicated set of
    /// account ids that posted under it.
    pub async fn accounts_by_hashtag(
        &self,
        hashtag: &str,
    ) -> Result<HashSet<String>, ClientError> {
        let endpoint = format!("/api/v1/timelines/tag/{hashtag}");
        let response = self
            .http
            .get(format!("{}{}", self.base_url, endpoint))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::remote(endpoint, status));
        }
        let statuses: Vec<Status> = response.json().await?;
        Ok(account_ids_of(&statuses))
    }

    /// Fetch the authenticated user's lists, in server order.
    pub async fn get_lists(&self) -> Result<Vec<List>, ClientError> {
        let endpoint = "/api/v1/lists";
        let response = self
            .http
            .get(format!("{}{}", self.base_url, endpoint))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::remote(endpoint, status));
        }
        Ok(response.json().await?)
    }

    /// Add a batch of accounts to a list with a single request.
    pub async fn add_accounts_to_list(
        &self,
        list_id: &str,
        account_ids: &[String],
    ) -> Result<(), ClientError> {
        let endpoint = format!("/api/v1/lists/{list_id}/accounts");
        let response = self
            .http
            .post(format!("{}{}", self.base_url, endpoint))
            .bearer_auth(&self.token)
            .form(&account_ids_form(account_ids))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("adding accounts to list {list_id} failed: {body}");
            return Err(ClientError::remote(endpoint, status));
        }
        info!("added {} accounts to list {list_id}", account_ids.len());
        Ok(())
    }

    /// Follow every account posting under a hashtag, one request per
    /// account, sequentially. Per-account failures are collected in the
    /// report and the loop keeps going; only the timeline fetch aborts.
    pub async fn run_hashtag_follow(&self, hashtag: &str) -> Result<FollowReport, ClientError> {
        let accounts = self.accounts_by_hashtag(hashtag).await?;
        let mut report = FollowReport::default();
        for account_id in accounts {
            match self.follow(&account_id).await {
                Ok(()) => report.followed.push(account_id),
                Err(err) => {
                    error!("could not follow {account_id}: {err}");
                    report.failed.push((account_id, err.to_string()));
                }
            }
        }
        Ok(report)
    }

    /// Collect the hashtag's accounts into a list with one batched add.
    /// Returns how many accounts were sent.
    pub async fn run_hashtag_follow_list(
        &self,
        hashtag: &str,
        list_id: &str,
    ) -> Result<usize, ClientError> {
        let accounts: Vec<String> = self.accounts_by_hashtag(hashtag).await?.into_iter().collect();
        self.add_accounts_to_list(list_id, &accounts).await?;
        Ok(accounts.len())
    }
}

/// Extract the posting account of each status, deduplicated. The same
/// account usually shows up several times in one hashtag timeline.
pub fn account_ids_of(statuses: &[Status]) -> HashSet<String> {
    statuses.iter().map(|s| s.account.id.clone()).collect()
}

/// Form pairs for the list-membership endpoint. Mastodon expects array
/// parameters as a repeated `account_ids[]` key.
pub fn account_ids_form(account_ids: &[String]) -> Vec<(&'static str, &str)> {
    account_ids
        .iter()
        .map(|id| ("account_ids[]", id.as_str()))
        .collect()
}
