use textfit::engine::{best_fit, exceeds, TOLERANCE};
use textfit::{ConfigError, FitConfig, Rect, ScrollSize};

fn config(min: u16, max: u16, step: u16) -> FitConfig {
    FitConfig::new().min_size(min).max_size(max).step(step)
}

// ============================================================================
// Search Scenarios
// ============================================================================

#[test]
fn test_threshold_in_range() {
    // overflows at 20 and above, so 19 is the largest fit
    let result = best_fit(config(8, 32, 1), |size| size >= 20);
    assert_eq!(result, 19);
}

#[test]
fn test_nothing_overflows() {
    let result = best_fit(config(8, 32, 1), |_| false);
    assert_eq!(result, 32, "upper bound when everything fits");
}

#[test]
fn test_everything_overflows() {
    let result = best_fit(config(8, 32, 1), |_| true);
    assert_eq!(result, 8, "floor even when min_size itself overflows");
}

#[test]
fn test_exact_threshold_sweep() {
    // for every threshold inside the range, the result lands one below it
    for threshold in 9..=32u16 {
        let result = best_fit(config(8, 32, 1), |size| size >= threshold);
        assert_eq!(result, threshold - 1, "threshold {threshold}");
    }
}

#[test]
fn test_result_always_in_bounds() {
    for threshold in 0..=40u16 {
        let result = best_fit(config(8, 32, 1), |size| size >= threshold);
        assert!((8..=32).contains(&result), "threshold {threshold} gave {result}");
    }
}

#[test]
fn test_single_candidate_range() {
    assert_eq!(best_fit(config(10, 10, 1), |_| false), 10);
    assert_eq!(best_fit(config(10, 10, 1), |_| true), 10);
}

#[test]
fn test_coarse_step() {
    // step 2 lands within one step of the true threshold (21)
    let result = best_fit(config(8, 32, 2), |size| size >= 21);
    assert_eq!(result, 20);
}

#[test]
fn test_probe_count_is_logarithmic() {
    let mut probes = 0;
    best_fit(config(8, 32, 1), |size| {
        probes += 1;
        size >= 20
    });
    assert!(probes <= 6, "25 candidates took {probes} probes");
}

#[test]
fn test_min_size_zero_all_overflowing() {
    // high = mid - step must not underflow below zero
    let result = best_fit(config(0, 4, 1), |_| true);
    assert_eq!(result, 0);
}

// ============================================================================
// Overflow Policy
// ============================================================================

#[test]
fn test_tolerance_on_width() {
    let content = Rect::from_size(100, 50);
    assert!(!exceeds(ScrollSize::new(100, 10), content));
    assert!(
        !exceeds(ScrollSize::new(100 + TOLERANCE, 10), content),
        "within tolerance still fits"
    );
    assert!(exceeds(ScrollSize::new(100 + TOLERANCE + 1, 10), content));
}

#[test]
fn test_tolerance_on_height() {
    let content = Rect::from_size(100, 50);
    assert!(!exceeds(ScrollSize::new(10, 50 + TOLERANCE), content));
    assert!(exceeds(ScrollSize::new(10, 50 + TOLERANCE + 1), content));
}

#[test]
fn test_either_dimension_rejects() {
    let content = Rect::from_size(100, 50);
    assert!(exceeds(ScrollSize::new(200, 10), content), "width alone");
    assert!(exceeds(ScrollSize::new(10, 200), content), "height alone");
    assert!(exceeds(ScrollSize::new(200, 200), content), "both");
}

// ============================================================================
// Configuration Validation
// ============================================================================

#[test]
fn test_default_config() {
    let cfg = FitConfig::default();
    assert_eq!((cfg.min_size, cfg.max_size, cfg.step), (8, 32, 1));
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_inverted_bounds_rejected() {
    let err = config(20, 10, 1).validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvertedBounds { min: 20, max: 10 }));
}

#[test]
fn test_zero_step_rejected() {
    let err = config(8, 32, 0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::ZeroStep));
}
