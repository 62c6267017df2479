//! Low-level HTTP client: `NodeHttp`.
//!
//! One method per node endpoint. Returns wire types; decoding into domain
//! records happens in [`crate::decode`] and the sub-clients.

use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::AccountAddress;
use crate::transaction::wire::{
    AccountView, LedgerInfoView, PendingTransactionView, TransactionView,
    UserTransactionRequest,
};
use crate::view::ViewRequest;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for an Aptos node (or faucet) REST API.
#[derive(Clone)]
pub struct NodeHttp {
    base_url: String,
    client: Client,
    read_policy: RetryPolicy,
}

impl NodeHttp {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            read_policy: RetryPolicy::Reads,
        }
    }

    /// Retry policy for read endpoints. Submissions are never retried.
    pub fn with_read_policy(mut self, policy: RetryPolicy) -> Self {
        self.read_policy = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Views ────────────────────────────────────────────────────────────

    /// `POST /view`: one JSON value per declared return of the function.
    pub async fn view(&self, request: &ViewRequest) -> Result<Vec<serde_json::Value>, HttpError> {
        let url = format!("{}/view", self.base_url);
        self.post(&url, request, self.read_policy.clone()).await
    }

    // ── Ledger ───────────────────────────────────────────────────────────

    /// `GET /`: chain ID and current ledger version.
    pub async fn get_ledger_info(&self) -> Result<LedgerInfoView, HttpError> {
        self.get(&self.base_url, self.read_policy.clone()).await
    }

    // ── Accounts ─────────────────────────────────────────────────────────

    pub async fn get_account(&self, address: &AccountAddress) -> Result<AccountView, HttpError> {
        let url = format!("{}/accounts/{}", self.base_url, address.to_hex_literal());
        self.get(&url, self.read_policy.clone()).await
    }

    /// `None` on a 404: the account holds no resource of that type, or the
    /// account itself does not exist yet.
    pub async fn get_account_resource(
        &self,
        address: &AccountAddress,
        resource_type: &str,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        let url = format!(
            "{}/accounts/{}/resource/{}",
            self.base_url,
            address.to_hex_literal(),
            urlencoding::encode(resource_type)
        );
        match self.get(&url, self.read_policy.clone()).await {
            Ok(resource) => Ok(Some(resource)),
            Err(HttpError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Events of the handle with `creation_number` under `address`.
    pub async fn get_events(
        &self,
        address: &AccountAddress,
        creation_number: u64,
        start: Option<u64>,
        limit: Option<u16>,
    ) -> Result<Vec<serde_json::Value>, HttpError> {
        let url = format!(
            "{}/accounts/{}/events/{}",
            self.base_url,
            address.to_hex_literal(),
            creation_number
        );
        self.get(&with_paging(url, start, limit), self.read_policy.clone())
            .await
    }

    /// Events of the handle in `field` of resource `handle_struct`.
    pub async fn get_events_by_handle(
        &self,
        address: &AccountAddress,
        handle_struct: &str,
        field: &str,
        start: Option<u64>,
        limit: Option<u16>,
    ) -> Result<Vec<serde_json::Value>, HttpError> {
        let url = format!(
            "{}/accounts/{}/events/{}/{}",
            self.base_url,
            address.to_hex_literal(),
            urlencoding::encode(handle_struct),
            field
        );
        self.get(&with_paging(url, start, limit), self.read_policy.clone())
            .await
    }

    // ── Transactions ─────────────────────────────────────────────────────

    /// `POST /transactions/encode_submission`: hex signing message for an
    /// unsigned request.
    pub async fn encode_submission(
        &self,
        request: &UserTransactionRequest,
    ) -> Result<String, HttpError> {
        let url = format!("{}/transactions/encode_submission", self.base_url);
        self.post(&url, request, self.read_policy.clone()).await
    }

    pub async fn submit_transaction(
        &self,
        request: &UserTransactionRequest,
    ) -> Result<PendingTransactionView, HttpError> {
        let url = format!("{}/transactions", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    pub async fn get_transaction_by_hash(&self, hash: &str) -> Result<TransactionView, HttpError> {
        let url = format!("{}/transactions/by_hash/{}", self.base_url, hash);
        self.get(&url, self.read_policy.clone()).await
    }

    // ── Faucet ───────────────────────────────────────────────────────────

    /// `POST /mint` on a faucet. Returns the hashes of the funding
    /// transactions.
    pub async fn mint(
        &self,
        address: &AccountAddress,
        amount: u64,
    ) -> Result<Vec<String>, HttpError> {
        let url = format!(
            "{}/mint?amount={}&address={}",
            self.base_url,
            amount,
            urlencoding::encode(&address.to_hex())
        );
        self.request_with_retry(reqwest::Method::POST, &url, None::<&()>, RetryPolicy::None)
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let Some(config) = retry.config() else {
            return self.do_request(&method, url, body).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) if !is_retryable(&e, &config) => return Err(e),
                Err(e) if attempt == config.retries => last_error = Some(e),
                Err(e) => {
                    let delay = config.backoff(attempt, retry_after(&e));
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "node busy, retrying {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                    last_error = Some(e);
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await.unwrap_or_default();
        tracing::trace!(status = status_code, url, "node returned error body: {}", body_text);

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

fn with_paging(url: String, start: Option<u64>, limit: Option<u16>) -> String {
    let mut params = Vec::new();
    if let Some(s) = start {
        params.push(format!("start={}", s));
    }
    if let Some(l) = limit {
        params.push(format!("limit={}", l));
    }
    if params.is_empty() {
        url
    } else {
        format!("{}?{}", url, params.join("&"))
    }
}

fn is_retryable(error: &HttpError, config: &RetryConfig) -> bool {
    match error {
        HttpError::ServerError { status, .. } => config.retries_status(*status),
        HttpError::RateLimited { .. } => config.retries_status(429),
        HttpError::Timeout => true,
        HttpError::Reqwest(re) => re.is_connect() || re.is_timeout(),
        _ => false,
    }
}

fn retry_after(error: &HttpError) -> Option<Duration> {
    match error {
        HttpError::RateLimited {
            retry_after_ms: Some(ms),
        } => Some(Duration::from_millis(*ms)),
        _ => None,
    }
}
