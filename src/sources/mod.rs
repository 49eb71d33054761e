//! Price producers feeding the history store.

pub mod coingecko;
pub mod simulator;

pub use coingecko::CoinGeckoFeed;
pub use simulator::PriceSimulator;
