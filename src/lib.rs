pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod models;
pub mod shell;
#[cfg(test)]
pub mod test_helpers;
pub mod trading;
