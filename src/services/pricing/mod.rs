//! Billing quote engine
//!
//! Computes what the upgrade page displays: discounted per-seat rates,
//! the charge for the current schedule, and which license panel is active.

mod calculator;
pub mod plan;
mod service;
mod types;


pub use calculator::{compute_charge, compute_effective_rate, format_money, select_panel};
pub use plan::{PlanParameters, compute_plan_parameters};
pub use service::QuoteEngine;
pub use types::{
    BillingSelection, ChargeAmount, LicenseMode, PanelState, PanelVisibility, PriceDisplay,
    PriceQuote, Schedule,
};
