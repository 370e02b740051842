//! tsetmc-rs: typed client for the Tehran Stock Exchange (TSETMC) market data endpoints.
//!
//! - [`MarketWatch`]: the all-symbols price feed, kept current from incremental deltas.
//! - [`MarketMap`]: the market map feed, same incremental model.
//! - [`Symbol`]: one-shot reads for a single instrument (info, order book, history, ...).
//! - [`group`]: static reference data.
//!
//! ```no_run
//! # use tsetmc_rs::{MapType, MarketMap, MarketWatch, TsClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), tsetmc_rs::TsError> {
//! let client = TsClient::builder()
//!     .timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//!
//! let mut watch = MarketWatch::new(&client);
//! let prices = watch.refresh_price_view().await?;
//!
//! let mut map = MarketMap::new(&client);
//! let tiles = map.refresh_map_view(MapType::MarketValue).await?;
//! println!("{} prices, {} tiles", prices.len(), tiles.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod group;
pub mod map;
pub mod symbol;
pub mod watch;

pub use crate::core::{TsClient, TsClientBuilder, TsError};
pub use group::GroupStaticRow;
pub use map::{MapRow, MapType, MarketMap};
pub use symbol::Symbol;
pub use watch::{MarketWatch, WatchCursor, WatchPriceRow};
