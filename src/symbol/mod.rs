//! Per-symbol pages and API calls.
//!
//! Every method is a single request mapped into a record; nothing is kept between calls.

mod api;
mod model;
mod wire;

pub use model::{
    SymbolBestLimits, SymbolClosingPriceInfo, SymbolDailyPriceRow, SymbolGroupRow, SymbolInfo,
    SymbolIntradayPriceRow, SymbolNotification, SymbolOptionData, SymbolOrderBook,
    SymbolOrderBookRow, SymbolPriceData, SymbolPriceOverview, SymbolRelatedCompanyRow,
    SymbolShareholderChartRow, SymbolShareholderDetails, SymbolShareholderPortfolioRow,
    SymbolTradeRow, SymbolTradersType, SymbolTradersTypeHistoryRow, SymbolTradersTypeInfo,
    SymbolTradersTypeSubInfo,
};

use crate::core::{TsClient, TsError};

/// A handle on one instrument, identified by its TSETMC `insCode`.
///
/// # Example
///
/// ```no_run
/// # use tsetmc_rs::{Symbol, TsClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TsClient::default();
/// let symbol = Symbol::new(&client, "35425587644337450");
///
/// let info = symbol.info().await?;
/// let overview = symbol.price_overview().await?;
/// println!("{} last traded at {}", info.short_name, overview.price_data.last);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Symbol {
    client: TsClient,
    symbol_id: String,
}

impl Symbol {
    /// Creates a new `Symbol` for a given `insCode`.
    pub fn new(client: &TsClient, symbol_id: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol_id: symbol_id.into(),
        }
    }

    pub fn symbol_id(&self) -> &str {
        &self.symbol_id
    }

    /// Price, order book, trader types and peer group from the overview tab.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn price_overview(&self) -> Result<SymbolPriceOverview, TsError> {
        api::price_overview(&self.client, &self.symbol_id).await
    }

    /// Per-minute OHLCV of the current session.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn intraday_price_chart(&self) -> Result<Vec<SymbolIntradayPriceRow>, TsError> {
        api::intraday_price_chart(&self.client, &self.symbol_id).await
    }

    /// EPS, group P/E, allowed price range, float and other instrument data.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn info(&self) -> Result<SymbolInfo, TsError> {
        api::info(&self.client, &self.symbol_id).await
    }

    /// Today's legal/real trader breakdown.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn traders_type(&self) -> Result<SymbolTradersType, TsError> {
        api::traders_type(&self.client, &self.symbol_id).await
    }

    /// The best-limits order book.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn orderbook(&self) -> Result<SymbolBestLimits, TsError> {
        api::orderbook(&self.client, &self.symbol_id).await
    }

    /// Closing price, trading state and totals of the latest session.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn closing_price_info(&self) -> Result<SymbolClosingPriceInfo, TsError> {
        api::closing_price_info(&self.client, &self.symbol_id).await
    }

    /// Full daily price history.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn daily_history(&self) -> Result<Vec<SymbolDailyPriceRow>, TsError> {
        api::daily_history(&self.client, &self.symbol_id).await
    }

    /// Daily legal/real trader breakdown history.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn traders_type_history(&self) -> Result<Vec<SymbolTradersTypeHistoryRow>, TsError> {
        api::traders_type_history(&self.client, &self.symbol_id).await
    }

    /// Every trade of the latest session, in execution order.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn intraday_trades(&self) -> Result<Vec<SymbolTradeRow>, TsError> {
        api::intraday_trades(&self.client, &self.symbol_id).await
    }

    /// CODAL disclosure headlines for the symbol.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn notifications(&self) -> Result<Vec<SymbolNotification>, TsError> {
        api::notifications(&self.client, &self.symbol_id).await
    }

    /// Companies in the same industry group.
    ///
    /// With `group_code` unset, the group is looked up through [`Symbol::info`] first, which
    /// costs one extra request.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error from either request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn related_companies(
        &self,
        group_code: Option<&str>,
    ) -> Result<Vec<SymbolRelatedCompanyRow>, TsError> {
        let group_code = match group_code {
            Some(code) => code.to_string(),
            None => self.info().await?.group_code,
        };
        api::related_companies(&self.client, &group_code).await
    }

    /// Contract terms, for option instruments.
    ///
    /// With `isin` unset, the ISIN is taken from [`Symbol::info`] first.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error, or a decode error if the instrument is not an
    /// option.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn option_data(&self, isin: Option<&str>) -> Result<SymbolOptionData, TsError> {
        let isin = match isin {
            Some(isin) => isin.to_string(),
            None => self.info().await?.isin,
        };
        api::option_data(&self.client, &isin).await
    }

    /// Holding history and portfolio of one major shareholder of this symbol's company.
    ///
    /// `shareholder_id` and `company_isin` are the identifiers listed on the symbol's
    /// shareholders tab.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol_id)))]
    pub async fn shareholder_details(
        &self,
        shareholder_id: &str,
        company_isin: &str,
    ) -> Result<SymbolShareholderDetails, TsError> {
        api::shareholder_details(&self.client, shareholder_id, company_isin).await
    }
}
