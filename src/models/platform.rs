use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading venue. Decides which buy-side field is typed in by hand and which
/// one is reconstructed from the ruble amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    #[serde(rename = "PL")]
    Pl,
    Bliss,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Pl => "PL",
            Platform::Bliss => "Bliss",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Platform> {
        match s.trim().to_lowercase().as_str() {
            "pl" => Some(Platform::Pl),
            "bliss" => Some(Platform::Bliss),
            _ => None,
        }
    }

    /// Name of the buy-side field entered manually on this platform.
    pub fn manual_buy_field(&self) -> &'static str {
        match self {
            Platform::Pl => "buy_rate",
            Platform::Bliss => "buy_usd",
        }
    }
}
