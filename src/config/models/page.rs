//! Page-load parameters

use super::*;
use crate::services::pricing::{LicenseMode, Schedule};
use serde::{Deserialize, Serialize};

/// Values the server renders into the upgrade page.
///
/// Prices are per seat, in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_annual_price")]
    pub annual_price: f64,
    #[serde(default = "default_monthly_price")]
    pub monthly_price: f64,
    /// Discount percentage in [0, 100]
    #[serde(default)]
    pub percent_off: f64,
    /// Current organization membership
    #[serde(default)]
    pub seat_count: u32,
    /// Radio option checked when the page loads
    #[serde(default = "default_license_management")]
    pub license_management: LicenseMode,
    #[serde(default = "default_schedule")]
    pub schedule: Schedule,
}

fn default_license_management() -> LicenseMode {
    LicenseMode::Automatic
}

fn default_schedule() -> Schedule {
    Schedule::Annual
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            annual_price: default_annual_price(),
            monthly_price: default_monthly_price(),
            percent_off: 0.0,
            seat_count: 0,
            license_management: default_license_management(),
            schedule: default_schedule(),
        }
    }
}
