use approx::assert_relative_eq;
use simplecharts::core::{MIN_AXIS_CEILING, ValueScale, round_max};

#[test]
fn round_max_matches_reference_table() {
    assert_eq!(round_max(10.0), 20.0);
    assert_eq!(round_max(9.0), 10.0);
    assert_eq!(round_max(9000.0), 10000.0);
    assert_eq!(round_max(0.01), 0.02);
    assert_eq!(round_max(0.003), 0.004);
}

#[test]
fn round_max_forces_even_leading_digit() {
    assert_eq!(round_max(2.0), 4.0);
    assert_eq!(round_max(5.0), 6.0);
    assert_eq!(round_max(8.0), 10.0);
    assert_eq!(round_max(1234.0), 2000.0);
    assert_eq!(round_max(35.0), 40.0);
}

#[test]
fn round_max_falls_back_for_non_positive_input() {
    assert_eq!(round_max(0.0), MIN_AXIS_CEILING);
    assert_eq!(round_max(-42.0), MIN_AXIS_CEILING);
}

#[test]
fn value_scale_maps_zero_to_bottom_and_max_to_top() {
    let scale = ValueScale::new(4.0, 480.0).expect("valid scale");
    assert_relative_eq!(scale.value_to_y(0.0), 480.0);
    assert_relative_eq!(scale.value_to_y(4.0), 0.0);
    assert_relative_eq!(scale.value_to_height(1.0), 120.0);
}

#[test]
fn value_scale_inverts_negative_values() {
    let scale = ValueScale::new(10.0, 100.0).expect("valid scale");
    assert_relative_eq!(scale.value_to_height(-5.0), -50.0);
    assert_relative_eq!(scale.value_to_y(-5.0), 150.0);
}

#[test]
fn middle_gridline_uses_floor_for_whole_ceilings() {
    let whole = ValueScale::new(10.0, 480.0).expect("valid scale");
    assert_eq!(whole.middle_value(), 5.0);

    let fractional = ValueScale::new(0.02, 480.0).expect("valid scale");
    assert_relative_eq!(fractional.middle_value(), 0.01);

    let gridlines = whole.gridlines();
    assert_eq!(gridlines[0], (480.0, 0.0));
    assert_eq!(gridlines[1], (240.0, 5.0));
    assert_eq!(gridlines[2], (0.0, 10.0));
}

#[test]
fn value_scale_rejects_degenerate_input() {
    assert!(ValueScale::new(0.0, 480.0).is_err());
    assert!(ValueScale::new(f64::NAN, 480.0).is_err());
    assert!(ValueScale::new(10.0, 0.0).is_err());
}

#[test]
fn round_max_picks_digit_at_small_magnitudes() {
    assert_eq!(round_max(2e-11), 4e-11);
    assert_eq!(round_max(8e-11), 1e-10);
    assert_eq!(round_max(6e-8), 8e-8);
    assert_eq!(round_max(1e-309), 2e-309);
    assert!(round_max(5e-324) > 5e-324);
}

#[test]
fn round_max_saturates_past_f64_range() {
    assert_eq!(round_max(1.5e308), f64::MAX);
    assert_eq!(round_max(f64::MAX), f64::MAX);

    let scale = ValueScale::from_observed_max(1.5e308, 480.0).expect("finite ceiling");
    let height = scale.value_to_height(1.5e308);
    assert!(height.is_finite() && height > 0.0 && height < 480.0, "{height}");
}
