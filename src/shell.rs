//! Sidebar navigation: which section is on screen and how it renders.

use anyhow::{bail, Result};
use chrono_tz::Tz;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::api::{DashboardApi, TradingDealsApi};
use crate::config::today_in;
use crate::dashboard::{report, DashboardView};
use crate::trading::{table, TradingDealManager};

const LOADING: &str = "Loading…";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Deals,
    Schedule,
    Reports,
    Salary,
    Knowledge,
    Finance,
    Wallets,
    Accounting,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 9] = [
        Section::Dashboard,
        Section::Deals,
        Section::Schedule,
        Section::Reports,
        Section::Salary,
        Section::Knowledge,
        Section::Finance,
        Section::Wallets,
        Section::Accounting,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Deals => "deals",
            Section::Schedule => "schedule",
            Section::Reports => "reports",
            Section::Salary => "salary",
            Section::Knowledge => "knowledge",
            Section::Finance => "finance",
            Section::Wallets => "wallets",
            Section::Accounting => "accounting",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Deals => "Deals",
            Section::Schedule => "Schedule",
            Section::Reports => "Reports",
            Section::Salary => "Salary",
            Section::Knowledge => "Knowledge base",
            Section::Finance => "Finance",
            Section::Wallets => "Wallets",
            Section::Accounting => "Accounting",
        }
    }

    pub fn from_id(id: &str) -> Result<Section> {
        let id = id.trim().to_lowercase();
        match Self::ALL.into_iter().find(|s| s.id() == id) {
            Some(s) => Ok(s),
            None => {
                let known: Vec<&str> = Self::ALL.iter().map(|s| s.id()).collect();
                bail!("unknown section '{}', expected one of: {}", id, known.join(", "))
            }
        }
    }

    pub fn has_content(&self) -> bool {
        matches!(self, Section::Dashboard | Section::Deals)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The console shell. Owns both views; only the active one is loaded.
pub struct Shell {
    active: Section,
    timezone: Tz,
    dashboard: DashboardView,
    trading: TradingDealManager,
}

impl Shell {
    pub fn new(
        dashboard_api: Arc<dyn DashboardApi>,
        trading_api: Arc<dyn TradingDealsApi>,
        timezone: Tz,
    ) -> Self {
        Self {
            active: Section::default(),
            timezone,
            dashboard: DashboardView::new(dashboard_api, timezone),
            trading: TradingDealManager::new(trading_api, timezone),
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn select(&mut self, section: Section) {
        self.active = section;
    }

    /// Load whatever the active section shows.
    pub async fn enter(&mut self) {
        if !self.active.has_content() {
            debug!("Section {} has nothing to load", self.active);
            return;
        }
        match self.active {
            Section::Dashboard => self.dashboard.load().await,
            Section::Deals => self.trading.load().await,
            _ => {}
        }
    }

    pub fn dashboard(&self) -> &DashboardView {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut DashboardView {
        &mut self.dashboard
    }

    pub fn trading(&self) -> &TradingDealManager {
        &self.trading
    }

    pub fn trading_mut(&mut self) -> &mut TradingDealManager {
        &mut self.trading
    }

    pub fn header(&self) -> String {
        format!(
            "{}  |  {}",
            self.active.label(),
            today_in(self.timezone).format("%d.%m.%Y")
        )
    }

    /// Header plus the active view. A view whose first load has not
    /// settled shows a loading line instead of its (still empty) contents.
    pub fn render(&self) -> String {
        let body = match self.active {
            Section::Dashboard if self.dashboard.is_loading() => LOADING.to_string(),
            Section::Deals if self.trading.is_loading() => LOADING.to_string(),
            Section::Dashboard => report::render_summary(&self.dashboard),
            Section::Deals => table::render_deals(self.trading.deals()),
            _ => "This section is empty.".to_string(),
        };
        format!("{}\n\n{}", self.header(), body)
    }
}
