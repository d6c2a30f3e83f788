//! Outbound network helpers: the startup connectivity probe and the
//! post-navigation reachability check.
//!
//! Both run on a `tokio` runtime owned by [`NetworkService`]; the window
//! thread never blocks on them.

use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;
use url::Url;

use crate::types::errors::ProbeError;

fn parse_web_url(url: &str) -> Result<Url, ProbeError> {
    let parsed = Url::parse(url).map_err(|_| ProbeError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(ProbeError::InvalidUrl(url.to_string())),
    }
}

/// Sends a GET to `url` and returns the response status. The body is dropped.
pub async fn probe(client: &reqwest::Client, url: &str) -> Result<u16, ProbeError> {
    let target = parse_web_url(url)?;
    let response = client
        .get(target)
        .send()
        .await
        .map_err(|e| ProbeError::NetworkError(e.to_string()))?;
    Ok(response.status().as_u16())
}

/// Checks that `url` answers at all. Any HTTP status counts as reachable;
/// only transport failures (DNS, connect, TLS) are errors.
pub async fn check_reachable(client: &reqwest::Client, url: &str) -> Result<(), ProbeError> {
    let target = parse_web_url(url)?;
    client
        .head(target)
        .send()
        .await
        .map(|_| ())
        .map_err(|e| ProbeError::NetworkError(e.to_string()))
}

/// Spawns the fire-and-forget probe. The outcome is only logged.
pub fn spawn_probe(
    handle: &tokio::runtime::Handle,
    client: reqwest::Client,
    url: String,
) -> JoinHandle<()> {
    handle.spawn(async move {
        match probe(&client, &url).await {
            Ok(status) => log::debug!("[PROBE] {} -> {}", url, status),
            Err(e) => log::debug!("[PROBE] {} failed: {}", url, e),
        }
    })
}

/// Owns the runtime and HTTP client used for background requests.
pub struct NetworkService {
    runtime: Runtime,
    client: reqwest::Client,
}

impl NetworkService {
    pub fn new() -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fooscreen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProbeError::NetworkError(e.to_string()))?;
        Self::with_client(client)
    }

    /// Uses a caller-configured client, e.g. one without proxy lookup.
    pub fn with_client(client: reqwest::Client) -> Result<Self, ProbeError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| ProbeError::NetworkError(format!("tokio runtime init failed: {}", e)))?;
        Ok(Self { runtime, client })
    }

    pub fn spawn_probe(&self, url: &str) -> JoinHandle<()> {
        spawn_probe(self.runtime.handle(), self.client.clone(), url.to_string())
    }

    /// Runs [`check_reachable`] in the background and calls `on_failure`
    /// with the URL if the host cannot be reached.
    pub fn spawn_reachability_check<F>(&self, url: &str, on_failure: F) -> JoinHandle<()>
    where
        F: FnOnce(String) + Send + 'static,
    {
        let client = self.client.clone();
        let url = url.to_string();
        self.runtime.spawn(async move {
            if let Err(e) = check_reachable(&client, &url).await {
                log::warn!("[NAV] {} unreachable: {}", url, e);
                on_failure(url);
            }
        })
    }

    pub fn handle(&self) -> &tokio::runtime::Handle {
        self.runtime.handle()
    }
}
