//! Quote engine: the page's price table and charge recomputation

use super::calculator::{compute_charge, format_money, select_panel};
use super::types::{
    BillingSelection, ChargeAmount, LicenseMode, PanelState, PriceDisplay, PriceQuote, Schedule,
};
use crate::config::PageParams;
use crate::utils::error::{BillingError, Result};
use tracing::{debug, info};

/// Price table built once per page load.
///
/// The seat count reflects current membership and is not user-editable,
/// so it is fixed here together with the quote.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    quote: PriceQuote,
    seat_count: u32,
}

impl QuoteEngine {
    /// Build the engine from server-supplied page parameters
    pub fn new(params: &PageParams) -> Result<Self> {
        Self::from_quote(
            PriceQuote {
                annual_rate_per_seat: params.annual_price,
                monthly_rate_per_seat: params.monthly_price,
                percent_off: params.percent_off,
            },
            params.seat_count,
        )
    }

    pub fn from_quote(quote: PriceQuote, seat_count: u32) -> Result<Self> {
        if !(0.0..=100.0).contains(&quote.percent_off) {
            return Err(BillingError::validation(format!(
                "percent_off must be between 0 and 100, got {}",
                quote.percent_off
            )));
        }
        for (name, price) in [
            ("annual_price", quote.annual_rate_per_seat),
            ("monthly_price", quote.monthly_rate_per_seat),
        ] {
            if !price.is_finite() || price < 0.0 {
                return Err(BillingError::validation(format!(
                    "{} must be a non-negative amount, got {}",
                    name, price
                )));
            }
        }

        info!(
            seat_count,
            percent_off = quote.percent_off,
            "Quote engine initialized"
        );
        Ok(Self { quote, seat_count })
    }

    pub fn quote(&self) -> &PriceQuote {
        &self.quote
    }

    pub fn seat_count(&self) -> u32 {
        self.seat_count
    }

    /// Snapshot of the user's choices for one input event
    pub fn selection(&self, license_mode: LicenseMode, schedule: Schedule) -> BillingSelection {
        BillingSelection {
            license_mode,
            schedule,
            seat_count: self.seat_count,
        }
    }

    /// Charge for a selection, using its schedule's discounted rate
    pub fn charge_for(&self, selection: &BillingSelection) -> ChargeAmount {
        let rate = self.quote.effective_rate(selection.schedule);
        ChargeAmount::from_cents(compute_charge(selection.seat_count, rate))
    }

    /// Charge to display after the schedule radio changes
    pub fn on_schedule_change(&self, schedule: Schedule) -> ChargeAmount {
        let rate = self.quote.effective_rate(schedule);
        let charge = ChargeAmount::from_cents(compute_charge(self.seat_count, rate));
        debug!(%schedule, cents = charge.cents(), "Recomputed charge");
        charge
    }

    /// Panel state after the license-management radio changes
    pub fn on_license_mode_change(&self, license_mode: LicenseMode) -> PanelState {
        debug!(%license_mode, "Switching license panel");
        select_panel(license_mode)
    }

    /// Formatted per-seat prices shown at page load
    pub fn price_display(&self) -> PriceDisplay {
        let annual = self.quote.effective_annual();
        let monthly = self.quote.effective_monthly();
        PriceDisplay {
            autopay_annual_price: format_money(annual),
            autopay_annual_price_per_month: format_money(annual / 12.0),
            autopay_monthly_price: format_money(monthly),
            invoice_annual_price: format_money(annual),
            invoice_annual_price_per_month: format_money(annual / 12.0),
        }
    }
}
