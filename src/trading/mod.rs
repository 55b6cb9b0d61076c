pub mod calculator;
pub mod form;
pub mod manager;
pub mod payload;
pub mod table;

pub use calculator::{calculate, CalcInputs, DerivedFields, RubUsdRelation};
pub use form::{FormField, FormMode, TradingDealForm};
pub use manager::TradingDealManager;
pub use payload::{ManualBuy, TradingDealPayload};
