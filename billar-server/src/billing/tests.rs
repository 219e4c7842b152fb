use super::*;

fn hall_rate() -> Rate {
    // 15 Bs/h in 5-minute fractions with a 30-minute minimum
    Rate::new(15.0, 5, 30).unwrap()
}

fn minutes(m: i64) -> Decimal {
    Decimal::from(m)
}

// ========================================================================
// Rate validation
// ========================================================================

#[test]
fn test_zero_fraction_is_configuration_error() {
    let err = Rate::new(15.0, 0, 30).unwrap_err();
    assert!(matches!(err, BillingError::Configuration(_)));
}

#[test]
fn test_negative_minimum_is_configuration_error() {
    assert!(matches!(
        Rate::new(15.0, 5, -1),
        Err(BillingError::Configuration(_))
    ));
}

#[test]
fn test_bad_rate_is_configuration_error() {
    assert!(Rate::new(-1.0, 5, 30).is_err());
    assert!(Rate::new(f64::NAN, 5, 30).is_err());
    assert!(Rate::new(f64::INFINITY, 5, 30).is_err());
}

#[test]
fn test_rate_above_max_amount_is_rejected() {
    // 1e30 is finite but outside Decimal's range
    assert!(matches!(
        Rate::new(1e30, 5, 30),
        Err(BillingError::Configuration(_))
    ));
    assert!(Rate::new(MAX_AMOUNT + 1.0, 5, 30).is_err());
    assert!(Rate::new(MAX_AMOUNT, 5, 30).is_ok());
}

#[test]
fn test_charge_for_huge_minutes_does_not_panic() {
    let rate = Rate::new(MAX_AMOUNT, 1, 0).unwrap();
    assert!(rate.charge_for(i64::MAX) > Decimal::from(1_000_000));
    assert_eq!(rate.charge_for(60), Decimal::from(1_000_000));
}

#[test]
fn test_configuration_error_maps_to_config_code() {
    let app: AppError = BillingError::Configuration("x".into()).into();
    assert_eq!(app.code, shared::error::ErrorCode::ConfigError);
}

#[test]
fn test_rate_from_config() {
    let config = RateConfig {
        branch_id: 1,
        price_per_hour: 15.0,
        fraction_minutes: 5,
        minimum_minutes: 30,
        updated_at: 0,
    };
    let rate = Rate::try_from(&config).unwrap();
    assert_eq!(rate, hall_rate());
    assert_eq!(rate.fraction_minutes(), 5);
    assert_eq!(rate.minimum_minutes(), 30);
}

// ========================================================================
// Calculation
// ========================================================================

#[test]
fn test_thirty_two_minutes_bills_thirty_five() {
    let billed = hall_rate().bill(minutes(32));
    assert_eq!(billed.minutes, 35);
    assert_eq!(billed.charge, Decimal::new(875, 2));
    assert_eq!(billed.charge_f64(), 8.75);
}

#[test]
fn test_short_stay_bills_minimum() {
    let billed = hall_rate().bill(minutes(3));
    assert_eq!(billed.minutes, 30);
    assert_eq!(billed.charge_f64(), 7.5);
}

#[test]
fn test_zero_elapsed_bills_minimum() {
    let billed = hall_rate().bill(Decimal::ZERO);
    assert_eq!(billed.minutes, 30);
    assert_eq!(billed.charge_f64(), 7.5);
}

#[test]
fn test_negative_elapsed_is_clamped() {
    let billed = hall_rate().bill(minutes(-20));
    assert_eq!(billed, hall_rate().bill(Decimal::ZERO));
}

#[test]
fn test_exact_multiple_bills_exactly() {
    assert_eq!(hall_rate().bill(minutes(40)).minutes, 40);
    assert_eq!(hall_rate().bill(minutes(30)).minutes, 30);
    assert_eq!(hall_rate().bill(minutes(60)).charge_f64(), 15.0);
}

#[test]
fn test_one_minute_past_block_rolls_over() {
    assert_eq!(hall_rate().bill(minutes(41)).minutes, 45);
    // Even a fraction of a minute starts a new block
    assert_eq!(hall_rate().bill(Decimal::new(4001, 2)).minutes, 45);
}

#[test]
fn test_fractional_elapsed() {
    let billed = hall_rate().bill(Decimal::new(325, 1)); // 32.5
    assert_eq!(billed.minutes, 35);
}

#[test]
fn test_zero_minimum() {
    let rate = Rate::new(12.0, 15, 0).unwrap();
    assert_eq!(rate.bill(Decimal::ZERO).minutes, 0);
    assert_eq!(rate.bill(minutes(1)).minutes, 15);
    assert_eq!(rate.bill(minutes(1)).charge_f64(), 3.0);
}

#[test]
fn test_minimum_not_multiple_of_fraction() {
    // 7-minute minimum in 5-minute blocks still rounds up to 10
    let rate = Rate::new(60.0, 5, 7).unwrap();
    assert_eq!(rate.bill(Decimal::ZERO).minutes, 10);
}

#[test]
fn test_charge_rounds_to_cents() {
    // 10 Bs/h for 5 minutes = 0.8333.. -> 0.83
    let rate = Rate::new(10.0, 5, 0).unwrap();
    assert_eq!(rate.bill(minutes(5)).charge_f64(), 0.83);
    // 10 Bs/h for 1 minute = 0.1666.. -> 0.17
    let rate = Rate::new(10.0, 1, 0).unwrap();
    assert_eq!(rate.bill(minutes(1)).charge_f64(), 0.17);
}

#[test]
fn test_free_rate() {
    let rate = Rate::new(0.0, 5, 30).unwrap();
    let billed = rate.bill(minutes(95));
    assert_eq!(billed.minutes, 95);
    assert_eq!(billed.charge, Decimal::ZERO);
}

#[test]
fn test_billed_minutes_invariants_hold_across_range() {
    let rates = [(15.0, 5, 30), (20.0, 15, 60), (9.5, 1, 0), (30.0, 7, 10)];
    for (per_hour, fraction, minimum) in rates {
        let rate = Rate::new(per_hour, fraction, minimum).unwrap();
        for tenth in 0..=3000 {
            let elapsed = Decimal::new(tenth, 1);
            let billed = rate.bill(elapsed);
            assert!(billed.minutes >= minimum, "below minimum at {elapsed}");
            assert_eq!(billed.minutes % fraction, 0, "not a block multiple at {elapsed}");
            assert!(Decimal::from(billed.minutes) >= elapsed);
            let ceiling = elapsed.max(Decimal::from(minimum)) + Decimal::from(fraction);
            assert!(Decimal::from(billed.minutes) < ceiling);
        }
    }
}

// ========================================================================
// Timestamps
// ========================================================================

#[test]
fn test_elapsed_minutes_from_millis() {
    assert_eq!(elapsed_minutes(0, 32 * 60_000), minutes(32));
    assert_eq!(elapsed_minutes(0, 90_000), Decimal::new(15, 1));
    assert_eq!(elapsed_minutes(10_000, 0), Decimal::ZERO);
}

#[test]
fn test_bill_span() {
    let start = 1_700_000_000_000;
    let billed = hall_rate().bill_span(start, start + 32 * 60_000 + 15_000);
    assert_eq!(billed.minutes, 35);
    assert_eq!(billed.charge_f64(), 8.75);
}
