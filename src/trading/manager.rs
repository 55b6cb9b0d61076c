use anyhow::{bail, Result};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::api::TradingDealsApi;
use crate::config::today_in;
use crate::error::SubmitError;
use crate::models::TradingDeal;
use crate::trading::calculator::DerivedFields;
use crate::trading::form::{FormField, FormMode, TradingDealForm};

/// State of the trading-deals view: the loaded list, the dialog and the
/// form inside it.
///
/// Every successful write is followed by a full reload; the list only ever
/// shows what the endpoint returned.
pub struct TradingDealManager {
    api: Arc<dyn TradingDealsApi>,
    timezone: Tz,
    deals: Vec<TradingDeal>,
    is_loading: bool,
    dialog_open: bool,
    form: TradingDealForm,
}

impl TradingDealManager {
    pub fn new(api: Arc<dyn TradingDealsApi>, timezone: Tz) -> Self {
        let today = today_in(timezone);
        Self {
            api,
            timezone,
            deals: Vec::new(),
            is_loading: true,
            dialog_open: false,
            form: TradingDealForm::blank(today),
        }
    }

    pub fn deals(&self) -> &[TradingDeal] {
        &self.deals
    }

    /// True until the first load has settled, successfully or not.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn form(&self) -> &TradingDealForm {
        &self.form
    }

    /// Replace the list with the endpoint's current contents. A failure is
    /// logged and leaves the previous list in place.
    pub async fn load(&mut self) {
        match self.api.list_trading_deals().await {
            Ok(deals) => {
                info!("Loaded {} trading deals", deals.len());
                self.deals = deals;
            }
            Err(e) => {
                error!("Failed to load trading deals: {:#}", e);
            }
        }
        self.is_loading = false;
    }

    /// Open the dialog for a new deal with fresh defaults.
    pub fn open_create(&mut self) {
        self.reset_form();
        self.dialog_open = true;
    }

    /// Open the dialog on a listed deal, copying its stored values in.
    pub fn edit(&mut self, id: i64) -> Result<()> {
        let Some(deal) = self.deals.iter().find(|d| d.id == id) else {
            bail!("no loaded trading deal with id {id}");
        };
        self.form = TradingDealForm::from_deal(deal);
        self.dialog_open = true;
        Ok(())
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<()> {
        self.form.set(field, value)
    }

    /// Derived values for whatever is currently typed in.
    pub fn preview(&self) -> DerivedFields {
        self.form.preview()
    }

    /// Validate, send, then reload. On any failure the dialog and form stay
    /// exactly as they were.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let payload = match self.form.to_payload() {
            Ok(p) => p,
            Err(e) => {
                warn!("Trading deal not submitted: {}", e);
                return Err(e);
            }
        };

        let result = match self.form.mode {
            FormMode::Creating => self.api.create_trading_deal(&payload).await,
            FormMode::Editing(id) => self.api.update_trading_deal(id, &payload).await,
        };
        if let Err(e) = result {
            error!("Failed to save trading deal: {:#}", e);
            return Err(SubmitError::Api(e));
        }

        match self.form.mode {
            FormMode::Creating => info!("Created trading deal for {}", payload.trader_name),
            FormMode::Editing(id) => info!("Updated trading deal {}", id),
        }

        self.load().await;
        self.dialog_open = false;
        self.reset_form();
        Ok(())
    }

    fn reset_form(&mut self) {
        self.form = TradingDealForm::blank(today_in(self.timezone));
    }
}
