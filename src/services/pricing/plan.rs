//! Server-side plan parameters derived at upgrade time
//!
//! The page only displays a quote; what is actually billed is an integer
//! price per license and a billing cycle anchored at the upgrade instant.

use super::types::Schedule;
use crate::utils::error::{BillingError, Result};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use serde::Serialize;

/// Annual list price per license, in cents
pub const ANNUAL_PRICE_PER_LICENSE: u64 = 8000;

/// Monthly list price per license, in cents
pub const MONTHLY_PRICE_PER_LICENSE: u64 = 800;

/// Smallest license count accepted for invoiced billing
pub const MIN_INVOICED_LICENSES: u32 = 30;

pub const DEFAULT_INVOICE_DAYS_UNTIL_DUE: u32 = 30;

// February is always 28 so that cycles anchored on the 29th stay stable.
const MAX_DAY_FOR_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Billing record created when an organization upgrades
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanParameters {
    pub billing_cycle_anchor: DateTime<Utc>,
    pub next_invoice_date: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    /// Cents, after discount, rounded down
    pub price_per_license: u64,
}

/// List price per license for a schedule
pub fn list_price_per_license(schedule: Schedule) -> u64 {
    match schedule {
        Schedule::Annual => ANNUAL_PRICE_PER_LICENSE,
        Schedule::Monthly => MONTHLY_PRICE_PER_LICENSE,
    }
}

/// Calendar month addition with the day clamped to the target month.
///
/// Historical billing periods are recomputed from the anchor with this
/// function, so its results must never change.
pub fn add_months(dt: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>> {
    let mut year = dt.year();
    let mut month = dt.month() + months;
    while month > 12 {
        year += 1;
        month -= 12;
    }
    let day = dt.day().min(MAX_DAY_FOR_MONTH[(month - 1) as usize]);

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        BillingError::internal(format!("Date out of range: {}-{}-{}", year, month, day))
    })?;
    Ok(Utc.from_utc_datetime(&date.and_time(dt.time())))
}

/// Integer price per license after a percentage discount.
///
/// There are no fractional cents on an invoice, so the result is rounded
/// down; the small epsilon keeps exact results like 1200 from landing on 1199.
pub fn discounted_price_per_license(list_price: u64, discount: Option<f64>) -> Result<u64> {
    match discount {
        None => Ok(list_price),
        Some(d) if (0.0..=100.0).contains(&d) => {
            Ok((list_price as f64 * (1.0 - d / 100.0) + 0.00001).floor() as u64)
        }
        Some(d) => Err(BillingError::validation(format!(
            "Discount must be between 0 and 100, got {}",
            d
        ))),
    }
}

pub fn compute_plan_parameters(
    automanage_licenses: bool,
    schedule: Schedule,
    discount: Option<f64>,
    now: DateTime<Utc>,
) -> Result<PlanParameters> {
    // Invoices are stored with one second resolution
    let billing_cycle_anchor = now.with_nanosecond(0).unwrap_or(now);
    let period_end = add_months(billing_cycle_anchor, schedule.months_per_period())?;
    let price_per_license =
        discounted_price_per_license(list_price_per_license(schedule), discount)?;

    let next_invoice_date = if automanage_licenses {
        add_months(billing_cycle_anchor, 1)?
    } else {
        period_end
    };

    Ok(PlanParameters {
        billing_cycle_anchor,
        next_invoice_date,
        period_end,
        price_per_license,
    })
}

/// First period boundary strictly after `event_time`
pub fn start_of_next_billing_cycle(
    billing_cycle_anchor: DateTime<Utc>,
    schedule: Schedule,
    event_time: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    next_boundary_after(
        billing_cycle_anchor,
        schedule.months_per_period(),
        event_time,
    )
}

/// Invoice date following `current`. Automanaged plans are invoiced monthly
/// for added licenses regardless of schedule.
pub fn next_invoice_date(
    billing_cycle_anchor: DateTime<Utc>,
    schedule: Schedule,
    automanage_licenses: bool,
    current: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    let months = if automanage_licenses {
        1
    } else {
        schedule.months_per_period()
    };
    next_boundary_after(billing_cycle_anchor, months, current)
}

fn next_boundary_after(
    anchor: DateTime<Utc>,
    months_per_period: u32,
    after: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    let mut periods = 1;
    let mut dt = anchor;
    while dt <= after {
        dt = add_months(anchor, months_per_period * periods)?;
        periods += 1;
    }
    Ok(dt)
}

/// Renewal amount normalized to one year, in cents
pub fn annualized_revenue_cents(price_per_license: u64, licenses: u64, schedule: Schedule) -> u64 {
    let renewal = price_per_license * licenses;
    match schedule {
        Schedule::Annual => renewal,
        Schedule::Monthly => renewal * 12,
    }
}

/// Lower bound for the invoiced license input
pub fn min_invoiced_licenses(seat_count: u32) -> u32 {
    seat_count.max(MIN_INVOICED_LICENSES)
}
