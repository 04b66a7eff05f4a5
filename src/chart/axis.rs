use std::ops::Range;

/// Headroom above the largest value on unit-interval charts.
const UNIT_HEADROOM: f64 = 1.1;

/// Fraction of the data span added on each side when autoscaling.
const AUTOSCALE_MARGIN: f64 = 0.05;

/// Largest finite value, ignoring missing (`NaN`) entries.
pub fn finite_max(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .reduce(f64::max)
}

fn finite_min(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .reduce(f64::min)
}

/// Y range for a probability-like metric: `0 .. max(1.1, 1.1 * max)`.
///
/// Falls back to `0 .. 1.1` when either series is empty. This keeps the
/// charts visually comparable; it says nothing about the data being valid.
pub fn unit_interval_range(experiment: &[f64], theory: &[f64]) -> Range<f64> {
    if experiment.is_empty() || theory.is_empty() {
        return 0.0..UNIT_HEADROOM;
    }
    let top = [finite_max(experiment), finite_max(theory)]
        .into_iter()
        .flatten()
        .map(|m| m * UNIT_HEADROOM)
        .fold(UNIT_HEADROOM, f64::max);
    0.0..top
}

/// Range covering every finite value in `series`, padded by 5% per side.
///
/// A single distinct value gets ±0.5 around it; no data gives `0..1`.
pub fn autoscale_range(series: &[&[f64]]) -> Range<f64> {
    let lo = series.iter().filter_map(|s| finite_min(s)).reduce(f64::min);
    let hi = series.iter().filter_map(|s| finite_max(s)).reduce(f64::max);

    match (lo, hi) {
        (Some(lo), Some(hi)) if hi > lo => {
            let pad = (hi - lo) * AUTOSCALE_MARGIN;
            (lo - pad)..(hi + pad)
        }
        (Some(v), Some(_)) => (v - 0.5)..(v + 0.5),
        _ => 0.0..1.0,
    }
}

/// Y range for one chart, honouring its unit-interval flag.
pub fn y_range(unit_interval: bool, experiment: &[f64], theory: &[f64]) -> Range<f64> {
    if unit_interval {
        unit_interval_range(experiment, theory)
    } else {
        autoscale_range(&[experiment, theory])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn unit_interval_floor_is_at_least_1_1() {
        let r = unit_interval_range(&[0.2, 0.5], &[0.1, 0.4]);
        assert_eq!(r.start, 0.0);
        assert!(approx(r.end, 1.1));
    }

    #[test]
    fn unit_interval_grows_with_data() {
        let r = unit_interval_range(&[0.2, 1.5], &[0.1, 2.0]);
        assert_eq!(r.start, 0.0);
        assert!(approx(r.end, 2.2));
        assert!(r.end >= 1.1 * 1.5);
    }

    #[test]
    fn unit_interval_with_empty_series_defaults() {
        let r = unit_interval_range(&[], &[5.0]);
        assert_eq!(r, 0.0..1.1);
    }

    #[test]
    fn unit_interval_ignores_missing_values() {
        let r = unit_interval_range(&[f64::NAN, 1.2], &[0.3]);
        assert!(approx(r.end, 1.32));
    }

    #[test]
    fn autoscale_pads_both_sides() {
        let r = autoscale_range(&[&[10.0, 20.0], &[12.0, 30.0]]);
        assert!(approx(r.start, 9.0));
        assert!(approx(r.end, 31.0));
    }

    #[test]
    fn autoscale_does_not_pin_zero() {
        let r = y_range(false, &[3.0, 4.0], &[3.5, 4.5]);
        assert!(r.start > 0.0);
        assert!(r.end < 1.1 * 4.5 + 1.0);
    }

    #[test]
    fn autoscale_degenerate_inputs() {
        assert_eq!(autoscale_range(&[&[2.0, 2.0]]), 1.5..2.5);
        assert_eq!(autoscale_range(&[&[], &[f64::NAN]]), 0.0..1.0);
    }

    #[test]
    fn flag_selects_rule() {
        let exp = [0.45, 0.3];
        let theory = [0.5, 0.35];
        assert_eq!(y_range(true, &exp, &theory).start, 0.0);
        assert!(y_range(false, &exp, &theory).start > 0.2);
    }
}
