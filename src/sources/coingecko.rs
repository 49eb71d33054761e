//! Live BTC/USD price polling via CoinGecko.

use crate::services::PriceHistory;
use crate::types::PriceSample;
use anyhow::anyhow;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, warn};

const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";
const COINGECKO_PRO_API_URL: &str = "https://pro-api.coingecko.com/api/v3";
const COIN_ID: &str = "bitcoin";
const FETCH_ATTEMPTS: u32 = 3;

#[derive(Debug, Deserialize)]
struct SimplePrice {
    usd: Option<f64>,
}

/// CoinGecko REST poller feeding the price history.
pub struct CoinGeckoFeed {
    client: Client,
    api_key: Option<String>,
    history: Arc<PriceHistory>,
    interval_secs: u64,
}

impl CoinGeckoFeed {
    pub fn new(api_key: Option<String>, history: Arc<PriceHistory>, interval_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Tidewatch/1.0 (BTC/USD Market Analysis)")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            history,
            interval_secs,
        }
    }

    fn base_url(&self) -> &str {
        if self.api_key.is_some() {
            COINGECKO_PRO_API_URL
        } else {
            COINGECKO_API_URL
        }
    }

    async fn fetch_price(&self) -> anyhow::Result<f64> {
        let url = format!(
            "{}/simple/price?ids={}&vs_currencies=usd",
            self.base_url(),
            COIN_ID
        );

        let mut request = self.client.get(&url);
        if let Some(ref key) = self.api_key {
            request = request.header("x-cg-pro-api-key", key);
        }

        let response: HashMap<String, SimplePrice> =
            request.send().await?.error_for_status()?.json().await?;

        response
            .get(COIN_ID)
            .and_then(|p| p.usd)
            .ok_or_else(|| anyhow!("no usd price for {COIN_ID} in response"))
    }

    /// Fetch with exponential backoff between attempts.
    async fn fetch_with_retry(&self) -> anyhow::Result<f64> {
        let mut backoff_secs = 1u64;
        let mut last_err = None;

        for attempt in 1..=FETCH_ATTEMPTS {
            match self.fetch_price().await {
                Ok(price) => return Ok(price),
                Err(e) => {
                    warn!("CoinGecko fetch attempt {attempt}/{FETCH_ATTEMPTS} failed: {e}");
                    last_err = Some(e);
                    if attempt < FETCH_ATTEMPTS {
                        tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(self.interval_secs.max(1));
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| anyhow!("fetch failed")))
    }

    /// Run the polling loop forever.
    ///
    /// On persistent fetch failure the last known price is repeated so the
    /// downstream pipeline keeps ticking rather than starving.
    pub async fn run(self) {
        info!(
            "Starting CoinGecko price polling (interval {}s)",
            self.interval_secs
        );
        let mut interval =
            tokio::time::interval(tokio::time::Duration::from_secs(self.interval_secs.max(1)));

        loop {
            interval.tick().await;

            let timestamp = chrono::Utc::now().timestamp();
            match self.fetch_with_retry().await {
                Ok(price) => {
                    self.history.append(PriceSample::new(timestamp, price));
                }
                Err(e) => match self.history.latest() {
                    Some(last) => {
                        warn!("CoinGecko unavailable, repeating last price {:.2}: {e}", last.price);
                        self.history.append(PriceSample::new(timestamp, last.price));
                    }
                    None => {
                        error!("CoinGecko unavailable and no prior price to fall back on: {e}");
                    }
                },
            }
        }
    }
}
