use approx::assert_abs_diff_eq;
use chart_scales::core::{BandScale, DomainValue, InnerSize, LinearScale, Margins, TimeScale, Viewport};
use chrono::{Duration, TimeZone, Utc};

#[test]
fn linear_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.map(original);
    let recovered = scale.invert(px);

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn linear_reversed_range_maps_high_values_up() {
    let scale = LinearScale::new((0.0, 4.0), (50.0, 0.0)).expect("valid scale");

    assert_eq!(scale.map(0.0), 50.0);
    assert_eq!(scale.map(4.0), 0.0);
    assert_abs_diff_eq!(scale.map(1.0), 37.5, epsilon = 1e-12);
}

#[test]
fn linear_collapsed_domain_maps_to_midpoint() {
    let scale = LinearScale::new((7.0, 7.0), (0.0, 200.0)).expect("valid scale");

    assert!(scale.is_degenerate());
    assert_eq!(scale.map(7.0), 100.0);
    assert_eq!(scale.map(-1e9), 100.0);
    assert_eq!(scale.invert(13.0), 7.0);
}

#[test]
fn linear_rejects_non_finite_bounds() {
    assert!(LinearScale::new((0.0, f64::NAN), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (f64::INFINITY, 1.0)).is_err());
}

#[test]
fn time_round_trip_within_a_millisecond() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = start + Duration::days(30);
    let scale = TimeScale::new((start, end), (0.0, 1200.0)).expect("valid scale");

    let original = start + Duration::hours(100);
    let px = scale.map(original);
    let recovered = scale.invert(px).expect("in range");

    assert!((recovered - original).num_milliseconds().abs() <= 1);
    assert_eq!(scale.map(start), 0.0);
    assert_eq!(scale.map(end), 1200.0);
}

#[test]
fn time_collapsed_domain_maps_to_midpoint() {
    let day = Utc.with_ymd_and_hms(2024, 5, 5, 12, 0, 0).unwrap();
    let scale = TimeScale::new((day, day), (0.0, 80.0)).expect("valid scale");

    assert!(scale.is_degenerate());
    assert_eq!(scale.map(day + Duration::days(3)), 40.0);
    assert_eq!(scale.invert(10.0), Some(day));
}

#[test]
fn band_positions_follow_key_order() {
    let bands = BandScale::new(
        ["a", "b", "c", "d"].map(DomainValue::category),
        (0.0, 400.0),
        0.5,
    )
    .expect("valid bands");

    assert_eq!(bands.len(), 4);
    assert_abs_diff_eq!(bands.step(), 100.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bands.band_width(), 50.0, epsilon = 1e-12);
    for (index, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
        let start = bands.map(&DomainValue::category(key)).expect("known key");
        assert_abs_diff_eq!(start, 25.0 + 100.0 * index as f64, epsilon = 1e-9);
    }
}

#[test]
fn band_duplicate_keys_collapse_onto_first_occurrence() {
    let bands = BandScale::new(
        ["b", "a", "b"].map(DomainValue::category),
        (0.0, 100.0),
        0.0,
    )
    .expect("valid bands");

    assert_eq!(bands.len(), 2);
    assert_eq!(bands.map(&"b".into()), Some(0.0));
    assert_eq!(bands.map(&"a".into()), Some(50.0));
}

#[test]
fn band_unknown_key_is_unmapped() {
    let bands = BandScale::new([DomainValue::category("a")], (0.0, 10.0), 0.1).expect("bands");

    assert_eq!(bands.map(&"z".into()), None);
    assert_eq!(bands.map(&DomainValue::number(1.0)), None);
}

#[test]
fn band_reversed_range_reverses_slot_order() {
    let bands = BandScale::new(
        ["a", "b"].map(DomainValue::category),
        (100.0, 0.0),
        0.0,
    )
    .expect("valid bands");

    assert_eq!(bands.map(&"a".into()), Some(50.0));
    assert_eq!(bands.map(&"b".into()), Some(0.0));
}

#[test]
fn band_full_padding_leaves_zero_width() {
    let bands = BandScale::new(["a", "b"].map(DomainValue::category), (0.0, 10.0), 1.0)
        .expect("valid bands");

    assert_eq!(bands.band_width(), 0.0);
    assert_eq!(bands.map(&"a".into()), Some(2.5));
}

#[test]
fn band_empty_domain_has_zero_step() {
    let bands =
        BandScale::new(std::iter::empty::<DomainValue>(), (0.0, 10.0), 0.5).expect("bands");

    assert!(bands.is_empty());
    assert_eq!(bands.step(), 0.0);
}

#[test]
fn band_rejects_out_of_range_padding() {
    assert!(BandScale::new([DomainValue::category("a")], (0.0, 10.0), -0.5).is_err());
    assert!(BandScale::new([DomainValue::category("a")], (0.0, 10.0), 2.0).is_err());
}

#[test]
fn inner_size_subtracts_margins() {
    let inner = InnerSize::from_viewport(
        Viewport::new(800, 600),
        Margins::new(20.0, 10.0, 30.0, 40.0),
    )
    .expect("valid inner size");

    assert_eq!(inner.width, 750.0);
    assert_eq!(inner.height, 550.0);
}

#[test]
fn inner_size_rejects_margins_wider_than_viewport() {
    let result = InnerSize::from_viewport(Viewport::new(100, 100), Margins::uniform(60.0));
    assert!(result.is_err());
    assert!(InnerSize::new(0.0, 10.0).is_err());
    assert!(InnerSize::new(10.0, f64::NAN).is_err());
}

#[test]
fn linear_maps_finite_domain_wider_than_f64_span() {
    let scale = LinearScale::new((-1e308, 1e308), (0.0, 100.0)).expect("valid scale");

    assert_eq!(scale.map(-1e308), 0.0);
    assert_eq!(scale.map(1e308), 100.0);
    assert_abs_diff_eq!(scale.map(0.0), 50.0, epsilon = 1e-9);
    assert_eq!(scale.invert(0.0), -1e308);
    assert_eq!(scale.invert(100.0), 1e308);
}
