use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::api::{DashboardApi, TradingDealsApi};
use crate::config::Config;
use crate::error::ApiError;
use crate::models::{DashboardStats, Deal, NewDeal, TradingDeal};
use crate::trading::payload::{TradingDealPayload, TradingDealUpdate};

const TRADING_ENDPOINT: &str = "trading deals";
const DEALS_ENDPOINT: &str = "deals";
const STATS_ENDPOINT: &str = "stats";

#[derive(Debug, Deserialize)]
struct DealsEnvelope<T> {
    #[serde(default = "Vec::new")]
    deals: Vec<T>,
}

/// Client for the three remote endpoints. No retries, no timeouts: a failed
/// call is reported once and the caller decides what to show.
pub struct HttpApi {
    client: Client,
    trading_deals_url: String,
    deals_url: String,
    stats_url: String,
}

impl HttpApi {
    pub fn new(cfg: &Config) -> Self {
        Self {
            client: Client::new(),
            trading_deals_url: cfg.trading_deals_url.clone(),
            deals_url: cfg.deals_url.clone(),
            stats_url: cfg.stats_url.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, endpoint: &'static str) -> Result<T> {
        debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {endpoint} endpoint"))?;

        ensure_success(resp, endpoint)?
            .json()
            .await
            .with_context(|| format!("Failed to parse {endpoint} response"))
    }
}

fn ensure_success(resp: Response, endpoint: &'static str) -> Result<Response> {
    check_status(resp.status(), endpoint)?;
    Ok(resp)
}

/// Anything outside 2xx is a failure; the body is never read.
fn check_status(status: StatusCode, endpoint: &'static str) -> Result<()> {
    if !status.is_success() {
        return Err(ApiError {
            endpoint,
            status: status.as_u16(),
        }
        .into());
    }
    Ok(())
}

#[async_trait]
impl TradingDealsApi for HttpApi {
    async fn list_trading_deals(&self) -> Result<Vec<TradingDeal>> {
        let data: DealsEnvelope<TradingDeal> =
            self.get_json(&self.trading_deals_url, TRADING_ENDPOINT).await?;
        Ok(data.deals)
    }

    async fn create_trading_deal(&self, payload: &TradingDealPayload) -> Result<()> {
        debug!("POST {} ({})", self.trading_deals_url, payload.manual_buy.platform());
        let resp = self
            .client
            .post(&self.trading_deals_url)
            .json(payload)
            .send()
            .await
            .context("Failed to send new trading deal")?;
        ensure_success(resp, TRADING_ENDPOINT)?;
        Ok(())
    }

    async fn update_trading_deal(&self, id: i64, payload: &TradingDealPayload) -> Result<()> {
        debug!("PUT {} (id={})", self.trading_deals_url, id);
        let resp = self
            .client
            .put(&self.trading_deals_url)
            .json(&TradingDealUpdate { id, payload })
            .send()
            .await
            .with_context(|| format!("Failed to send update for trading deal {id}"))?;
        ensure_success(resp, TRADING_ENDPOINT)?;
        Ok(())
    }
}

#[async_trait]
impl DashboardApi for HttpApi {
    async fn list_deals(&self) -> Result<Vec<Deal>> {
        let data: DealsEnvelope<Deal> = self.get_json(&self.deals_url, DEALS_ENDPOINT).await?;
        Ok(data.deals)
    }

    async fn create_deal(&self, deal: &NewDeal) -> Result<()> {
        debug!("POST {} (client={})", self.deals_url, deal.client_name);
        let resp = self
            .client
            .post(&self.deals_url)
            .json(deal)
            .send()
            .await
            .context("Failed to send new deal")?;
        ensure_success(resp, DEALS_ENDPOINT)?;
        Ok(())
    }

    async fn fetch_stats(&self) -> Result<DashboardStats> {
        self.get_json(&self.stats_url, STATS_ENDPOINT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_deals_is_empty() {
        let data: DealsEnvelope<Deal> = serde_json::from_str("{}").unwrap();
        assert!(data.deals.is_empty());
    }

    #[test]
    fn client_takes_urls_from_config() {
        let mut cfg = Config::from_env();
        cfg.trading_deals_url = "http://localhost:9/trading".into();
        cfg.stats_url = "http://localhost:9/stats".into();
        let api = HttpApi::new(&cfg);
        assert_eq!(api.trading_deals_url, "http://localhost:9/trading");
        assert_eq!(api.stats_url, "http://localhost:9/stats");
        assert_eq!(api.deals_url, cfg.deals_url);
    }

    #[test]
    fn non_2xx_maps_to_api_error() {
        assert!(check_status(StatusCode::OK, TRADING_ENDPOINT).is_ok());
        assert!(check_status(StatusCode::CREATED, DEALS_ENDPOINT).is_ok());

        let err = check_status(StatusCode::NOT_FOUND, TRADING_ENDPOINT).unwrap_err();
        let api = err.downcast_ref::<ApiError>().unwrap();
        assert_eq!(api.status, 404);
        assert_eq!(api.endpoint, "trading deals");

        let err = check_status(StatusCode::INTERNAL_SERVER_ERROR, STATS_ENDPOINT).unwrap_err();
        assert_eq!(err.to_string(), "stats endpoint answered 500");
    }

    #[test]
    fn redirect_is_not_success() {
        let err = check_status(StatusCode::FOUND, DEALS_ENDPOINT).unwrap_err();
        assert_eq!(err.downcast_ref::<ApiError>().unwrap().status, 302);
    }
}
