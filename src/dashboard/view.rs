use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::api::DashboardApi;
use crate::config::today_in;
use crate::dashboard::form::DealForm;
use crate::error::SubmitError;
use crate::models::{DashboardStats, Deal};

/// Number of rows in the recent-activity table.
pub const RECENT_ROWS: usize = 4;

/// Dashboard state: generic deals, the statistics block and the add-deal form.
pub struct DashboardView {
    api: Arc<dyn DashboardApi>,
    timezone: Tz,
    deals: Vec<Deal>,
    stats: DashboardStats,
    is_loading: bool,
    pub form: DealForm,
}

impl DashboardView {
    pub fn new(api: Arc<dyn DashboardApi>, timezone: Tz) -> Self {
        Self {
            api,
            timezone,
            deals: Vec::new(),
            stats: DashboardStats::default(),
            is_loading: true,
            form: DealForm::default(),
        }
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// First rows of the listing, in the order the endpoint returned them.
    pub fn recent(&self) -> &[Deal] {
        &self.deals[..self.deals.len().min(RECENT_ROWS)]
    }

    /// Fetch deals and statistics together. Either side may fail without
    /// affecting the other; a failed side keeps its previous value.
    pub async fn load(&mut self) {
        let (deals, stats) = tokio::join!(self.api.list_deals(), self.api.fetch_stats());
        self.apply_deals(deals);
        self.apply_stats(stats);
        self.is_loading = false;
    }

    pub async fn load_deals(&mut self) {
        let deals = self.api.list_deals().await;
        self.apply_deals(deals);
    }

    pub async fn load_stats(&mut self) {
        let stats = self.api.fetch_stats().await;
        self.apply_stats(stats);
    }

    /// Post the form, then reload deals followed by statistics and clear
    /// the form. Nothing changes locally when validation or the post fails.
    pub async fn add_deal(&mut self) -> Result<(), SubmitError> {
        let body = match self.form.to_new_deal(today_in(self.timezone)) {
            Ok(b) => b,
            Err(e) => {
                warn!("Deal not submitted: {}", e);
                return Err(e);
            }
        };

        if let Err(e) = self.api.create_deal(&body).await {
            error!("Failed to add deal: {:#}", e);
            return Err(SubmitError::Api(e));
        }
        info!("Added deal for {}", body.client_name);

        self.load_deals().await;
        self.load_stats().await;
        self.form = DealForm::default();
        Ok(())
    }

    fn apply_deals(&mut self, result: anyhow::Result<Vec<Deal>>) {
        match result {
            Ok(deals) => {
                info!("Loaded {} deals", deals.len());
                self.deals = deals;
            }
            Err(e) => error!("Failed to load deals: {:#}", e),
        }
    }

    fn apply_stats(&mut self, result: anyhow::Result<DashboardStats>) {
        match result {
            Ok(stats) => self.stats = stats,
            Err(e) => error!("Failed to load stats: {:#}", e),
        }
    }
}
