//! Pure price arithmetic

use super::types::{LicenseMode, PanelState};

/// Render cents as a dollar string.
///
/// Whole-dollar amounts get no decimals, anything else gets exactly two.
/// The value is first nudged up to whole cents so that floating point
/// drift like `199.9999999` shows as `2` rather than `1.99`.
pub fn format_money(cents: f64) -> String {
    // `+ 0.0` turns -0.0 into 0.0
    let cents = (cents - 0.001).ceil() + 0.0;
    let precision = if cents % 100.0 == 0.0 { 0 } else { 2 };
    format!("{:.*}", precision, cents / 100.0)
}

/// Per-seat rate after the discount
pub fn compute_effective_rate(base_rate: f64, percent_off: f64) -> f64 {
    base_rate * (1.0 - percent_off / 100.0)
}

pub fn compute_charge(seat_count: u32, effective_rate: f64) -> f64 {
    f64::from(seat_count) * effective_rate
}

/// The panel for `license_mode` is shown and enabled, the rest hidden and disabled.
pub fn select_panel(license_mode: LicenseMode) -> PanelState {
    PanelState::new(license_mode)
}
