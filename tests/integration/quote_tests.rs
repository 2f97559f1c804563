//! Quote engine scenarios as the upgrade page sees them

#[cfg(test)]
mod tests {
    use seatbill::config::PageParams;
    use seatbill::services::pricing::{LicenseMode, QuoteEngine, Schedule};
    use seatbill::{BillingError, format_money};

    fn engine(percent_off: f64, seat_count: u32) -> QuoteEngine {
        QuoteEngine::new(&PageParams {
            annual_price: 8000.0,
            monthly_price: 800.0,
            percent_off,
            seat_count,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_discounted_annual_and_monthly_charges() {
        let engine = engine(20.0, 10);

        assert_eq!(engine.on_schedule_change(Schedule::Annual).to_string(), "640");
        assert_eq!(engine.on_schedule_change(Schedule::Monthly).to_string(), "64");
    }

    #[test]
    fn test_price_display_rounds_up_per_month() {
        let display = engine(20.0, 10).price_display();

        assert_eq!(display.autopay_annual_price, "64");
        assert_eq!(display.autopay_annual_price_per_month, "5.34");
        assert_eq!(display.autopay_monthly_price, "6.40");
        assert_eq!(display.invoice_annual_price, "64");
        assert_eq!(display.invoice_annual_price_per_month, "5.34");
    }

    #[test]
    fn test_full_discount_is_free() {
        let engine = engine(100.0, 25);

        assert_eq!(engine.on_schedule_change(Schedule::Annual).to_string(), "0");
        assert_eq!(engine.on_schedule_change(Schedule::Monthly).to_string(), "0");
    }

    #[test]
    fn test_zero_seats_charge_nothing() {
        let engine = engine(0.0, 0);
        assert_eq!(engine.on_schedule_change(Schedule::Annual).cents(), 0.0);
    }

    #[test]
    fn test_out_of_range_discount_rejected() {
        let result = QuoteEngine::new(&PageParams {
            percent_off: 120.0,
            ..Default::default()
        });
        assert!(matches!(result, Err(BillingError::Validation(_))));
    }

    #[test]
    fn test_exactly_one_panel_active_for_every_mode() {
        let engine = engine(0.0, 5);
        for mode in LicenseMode::ALL {
            let state = engine.on_license_mode_change(mode);
            let visible: Vec<_> = state
                .panels()
                .filter(|(_, v)| v.visible && v.enabled)
                .map(|(m, _)| m)
                .collect();
            assert_eq!(visible, vec![mode]);
        }
    }

    #[test]
    fn test_format_money_whole_dollars_have_no_decimals() {
        for dollars in [0u32, 1, 12, 640, 10_000] {
            let cents = f64::from(dollars) * 100.0;
            assert_eq!(format_money(cents), dollars.to_string());
        }
    }
}
