use chart_scales::core::{
    Accessors, Axis, BandScale, Datum, DomainValue, FamilyProbe, InnerSize, MappingFamily,
    ScaleOptions, ScaleRequest, Series, ValueTypeProbe, derive_scales,
};
use proptest::prelude::*;

fn single_stack(points: &[(f64, f64)]) -> Vec<Series> {
    vec![Series::new(
        "s",
        points.iter().map(|&(x, y)| Datum::new(x, y)).collect(),
    )]
}

fn tolerance(extent: f64) -> f64 {
    1e-9 * extent.max(1.0)
}

proptest! {
    #[test]
    fn mapped_values_stay_inside_drawing_area(
        points in prop::collection::vec((-1_000_000.0f64..1_000_000.0, -1_000_000.0f64..1_000_000.0), 1..40),
        width in 1.0f64..2000.0,
        height in 1.0f64..2000.0,
        grouped in any::<bool>()
    ) {
        let data = single_stack(&points);
        let accessors = Accessors::standard();
        let options = ScaleOptions::default().with_grouped_bars(grouped);
        let inner = InnerSize::new(width, height).expect("valid inner size");

        let scales = derive_scales(&ScaleRequest::new(&data, &accessors, &options, inner))
            .expect("derive");

        for &(x, y) in &points {
            let px = scales.x_mapping().map(&x.into()).expect("x maps");
            let py = scales.y_mapping().map(&y.into()).expect("y maps");
            prop_assert!(px >= -tolerance(width) && px <= width + tolerance(width));
            prop_assert!(py >= -tolerance(height) && py <= height + tolerance(height));
        }
    }

    #[test]
    fn intercepts_anchor_at_zero_or_domain_floor(
        points in prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 1..40),
        width in 1.0f64..2000.0,
        height in 1.0f64..2000.0
    ) {
        let data = single_stack(&points);
        let accessors = Accessors::standard();
        let options = ScaleOptions::default();
        let inner = InnerSize::new(width, height).expect("valid inner size");

        let scales = derive_scales(&ScaleRequest::new(&data, &accessors, &options, inner))
            .expect("derive");

        let x = scales.x_mapping().as_linear().expect("linear x");
        let (x_min, _) = x.domain();
        let expected_x = if x_min <= 0.0 { x.map(0.0) } else { x.map(x_min) };
        prop_assert_eq!(scales.x_intercept(), expected_x);

        let y = scales.y_mapping().as_linear().expect("linear y");
        let (y_min, _) = y.domain();
        prop_assert!(y_min <= 0.0);
        prop_assert_eq!(scales.y_intercept(), y.map(0.0));
    }

    #[test]
    fn bands_cover_range_without_overlap(
        count in 1usize..30,
        padding in 0.0f64..=1.0,
        width in 1.0f64..2000.0
    ) {
        let keys = (0..count).map(|i| DomainValue::category(format!("k{i}")));
        let bands = BandScale::new(keys, (0.0, width), padding).expect("valid bands");
        let step = width / count as f64;
        let expected_width = step * (1.0 - padding);
        let eps = tolerance(width);

        prop_assert!((bands.band_width() - expected_width).abs() <= eps);

        let starts: Vec<f64> = (0..count)
            .map(|i| bands.map(&DomainValue::category(format!("k{i}"))).expect("known key"))
            .collect();
        for start in &starts {
            prop_assert!(*start >= -eps);
            prop_assert!(start + bands.band_width() <= width + eps);
        }
        for pair in starts.windows(2) {
            prop_assert!(pair[0] + bands.band_width() <= pair[1] + eps);
            prop_assert!((pair[1] - pair[0] - step).abs() <= eps);
        }
    }

    #[test]
    fn family_depends_only_on_first_value(
        first in -1e12f64..1e12,
        label in "[a-z]{1,8}"
    ) {
        let probe = ValueTypeProbe;

        prop_assert_eq!(probe.probe(Axis::X, &DomainValue::number(first)), MappingFamily::Linear);
        prop_assert_eq!(probe.probe(Axis::Y, &DomainValue::number(first)), MappingFamily::Linear);
        prop_assert_eq!(probe.probe(Axis::X, &DomainValue::category(label.clone())), MappingFamily::Ordinal);
        prop_assert_eq!(probe.probe(Axis::Y, &DomainValue::category(label)), MappingFamily::Ordinal);
    }
}
