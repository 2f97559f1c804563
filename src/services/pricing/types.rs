//! Type definitions for the quote engine

use crate::utils::error::BillingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the organization's seat count is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseMode {
    /// Seat count follows membership
    Automatic,
    /// Seat count fixed by the customer
    Manual,
    /// Billed by invoice outside the payment widget
    Invoiced,
}

impl LicenseMode {
    pub const ALL: [LicenseMode; 3] = [Self::Automatic, Self::Manual, Self::Invoiced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "automatic",
            Self::Manual => "manual",
            Self::Invoiced => "invoiced",
        }
    }

    /// Element id of the panel shown for this mode
    pub fn section_id(&self) -> String {
        format!("license-{}-section", self.as_str())
    }

    /// Element id of the license-count input inside the panel
    pub fn input_id(&self) -> String {
        format!("{}_license_count", self.as_str())
    }
}

impl fmt::Display for LicenseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseMode {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "automatic" => Ok(Self::Automatic),
            "manual" => Ok(Self::Manual),
            "invoiced" => Ok(Self::Invoiced),
            other => Err(BillingError::validation(format!(
                "Unknown license management mode: {}",
                other
            ))),
        }
    }
}

/// Billing cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    Annual,
    Monthly,
}

impl Schedule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Monthly => "monthly",
        }
    }

    /// Length of one billing period
    pub fn months_per_period(&self) -> u32 {
        match self {
            Self::Annual => 12,
            Self::Monthly => 1,
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Schedule {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annual" => Ok(Self::Annual),
            "monthly" => Ok(Self::Monthly),
            other => Err(BillingError::validation(format!(
                "Unknown billing schedule: {}",
                other
            ))),
        }
    }
}

/// Base prices and the discount, fixed for the page session.
///
/// Amounts are cents. They stay `f64` because per-month amortization
/// produces fractional cents that are only rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub annual_rate_per_seat: f64,
    pub monthly_rate_per_seat: f64,
    /// Percentage in [0, 100]
    pub percent_off: f64,
}

impl PriceQuote {
    pub fn effective_annual(&self) -> f64 {
        super::calculator::compute_effective_rate(self.annual_rate_per_seat, self.percent_off)
    }

    pub fn effective_monthly(&self) -> f64 {
        super::calculator::compute_effective_rate(self.monthly_rate_per_seat, self.percent_off)
    }

    pub fn effective_rate(&self, schedule: Schedule) -> f64 {
        match schedule {
            Schedule::Annual => self.effective_annual(),
            Schedule::Monthly => self.effective_monthly(),
        }
    }
}

/// The user's choices at one input event. Rebuilt, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSelection {
    pub license_mode: LicenseMode,
    pub schedule: Schedule,
    pub seat_count: u32,
}

/// Charge in cents, never negative
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct ChargeAmount(f64);

impl ChargeAmount {
    pub fn from_cents(cents: f64) -> Self {
        Self(cents.max(0.0))
    }

    pub fn cents(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for ChargeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::calculator::format_money(self.0))
    }
}

/// Visibility of one license panel and its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisibility {
    pub visible: bool,
    pub enabled: bool,
}

/// Which license panel is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    active: LicenseMode,
}

impl PanelState {
    pub(super) fn new(active: LicenseMode) -> Self {
        Self { active }
    }

    pub fn active(&self) -> LicenseMode {
        self.active
    }

    pub fn visibility(&self, mode: LicenseMode) -> PanelVisibility {
        let on = mode == self.active;
        PanelVisibility {
            visible: on,
            enabled: on,
        }
    }

    /// All three panels, in display order
    pub fn panels(&self) -> impl Iterator<Item = (LicenseMode, PanelVisibility)> {
        let state = *self;
        LicenseMode::ALL
            .into_iter()
            .map(move |mode| (mode, state.visibility(mode)))
    }
}

/// Price strings written into the page at load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceDisplay {
    pub autopay_annual_price: String,
    pub autopay_annual_price_per_month: String,
    pub autopay_monthly_price: String,
    pub invoice_annual_price: String,
    pub invoice_annual_price_per_month: String,
}

impl PriceDisplay {
    /// `(element id, text)` pairs
    pub fn targets(&self) -> [(&'static str, &str); 5] {
        [
            ("autopay_annual_price", &self.autopay_annual_price),
            (
                "autopay_annual_price_per_month",
                &self.autopay_annual_price_per_month,
            ),
            ("autopay_monthly_price", &self.autopay_monthly_price),
            ("invoice_annual_price", &self.invoice_annual_price),
            (
                "invoice_annual_price_per_month",
                &self.invoice_annual_price_per_month,
            ),
        ]
    }
}
