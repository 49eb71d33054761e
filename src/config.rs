use std::env;

/// Which producer feeds the price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceFeed {
    /// Synthetic random-walk ticks.
    Simulator,
    /// Live BTC/USD polling from CoinGecko.
    CoinGecko,
}

impl PriceFeed {
    fn from_env_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "coingecko" | "live" => Self::CoinGecko,
            _ => Self::Simulator,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Maximum number of price samples retained.
    pub max_history: usize,
    /// Seconds between producer ticks.
    pub tick_interval_secs: u64,
    /// Price producer selection.
    pub price_feed: PriceFeed,
    /// CoinGecko API key (optional, for pro tier).
    pub coingecko_api_key: Option<String>,
    /// SMA short window.
    pub sma_period: usize,
    /// SMA long window.
    pub sma_long_period: usize,
    /// RSI window.
    pub rsi_period: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        Self {
            host,
            port,
            max_history: env::var("MAX_HISTORY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),
            tick_interval_secs: env::var("TICK_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            price_feed: env::var("PRICE_FEED")
                .map(|v| PriceFeed::from_env_str(&v))
                .unwrap_or(PriceFeed::Simulator),
            coingecko_api_key: env::var("COINGECKO_API_KEY").ok(),
            sma_period: env::var("SMA_PERIOD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            sma_long_period: env::var("SMA_LONG_PERIOD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            rsi_period: env::var("RSI_PERIOD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(14),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_history: 200,
            tick_interval_secs: 5,
            price_feed: PriceFeed::Simulator,
            coingecko_api_key: None,
            sma_period: 10,
            sma_long_period: 30,
            rsi_period: 14,
        }
    }
}
