pub mod form;
pub mod report;
pub mod view;

pub use form::{DealField, DealForm};
pub use view::DashboardView;
