pub mod deal;
pub mod platform;
pub mod stats;
pub mod trading_deal;

pub use deal::{Deal, DealStatus, NewDeal};
pub use platform::Platform;
pub use stats::{DashboardStats, SeriesPoint};
pub use trading_deal::TradingDeal;
