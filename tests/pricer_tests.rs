
use approx::assert_abs_diff_eq;
use bsm_heatmap::{bsm_price, norm_cdf, price, PricingError, PricingInputs};
use statrs::distribution::{ContinuousCDF, Normal};
use test_utils::{atm_one_year, random_inputs, relative_parity_error};

/// Standard textbook values for an at-the-money one-year option.
#[test]
fn test_reference_atm_prices() {
    let result = price(&atm_one_year()).expect("pricing failed");

    assert_abs_diff_eq!(result.call, 10.4506, epsilon = 1e-3);
    assert_abs_diff_eq!(result.put, 5.5735, epsilon = 1e-3);
    assert!(result.call > result.put, "positive rate should favour the call");
}

/// Put-call parity on the reference scenario within an absolute 1e-6.
#[test]
fn test_put_call_parity_reference() {
    let inputs = atm_one_year();
    let result = price(&inputs).unwrap();
    let expected = inputs.spot - inputs.strike * (-inputs.rate * inputs.time).exp();
    assert_abs_diff_eq!(result.call - result.put, expected, epsilon = 1e-6);
}

/// Parity across a seeded random sample of the practical domain, including
/// exact zero volatility, subnormal volatility and expired options.
#[test]
fn test_put_call_parity_random_domain() {
    for inputs in random_inputs(5_000, 7) {
        let result = price(&inputs).unwrap();
        assert!(result.call >= 0.0 && result.put >= 0.0, "{:?}", inputs);
        let err = relative_parity_error(&inputs, result.call, result.put);
        assert!(err < 1e-10, "parity error {:e} for {:?}", err, inputs);
    }
}

#[test]
fn test_expiry_returns_intrinsic_for_any_rate_and_vol() {
    for (r, sigma) in [(0.0, 0.0), (0.05, 0.2), (-0.01, 1.5), (0.9, 5.0)] {
        assert_eq!(bsm_price(100.0, 90.0, r, 0.0, sigma).unwrap(), (10.0, 0.0));
        assert_eq!(bsm_price(90.0, 100.0, r, 0.0, sigma).unwrap(), (0.0, 10.0));
    }
}

/// Zero volatility with time remaining falls back to discounted intrinsic value
/// rather than dividing by zero.
#[test]
fn test_zero_volatility_is_finite_and_discounted() {
    let r: f64 = 0.05;
    let t: f64 = 2.0;
    let discounted_strike = 100.0 * (-r * t).exp();

    let (call, put) = bsm_price(100.0, 100.0, r, t, 0.0).unwrap();
    assert_abs_diff_eq!(call, 100.0 - discounted_strike, epsilon = 1e-12);
    assert_eq!(put, 0.0);

    let (call, put) = bsm_price(80.0, 100.0, r, t, 0.0).unwrap();
    assert_eq!(call, 0.0);
    assert_abs_diff_eq!(put, discounted_strike - 80.0, epsilon = 1e-12);

    // Approaching zero volatility from above converges to the same value
    let (near_call, _) = bsm_price(100.0, 100.0, r, t, 1e-9).unwrap();
    assert_abs_diff_eq!(near_call, 100.0 - discounted_strike, epsilon = 1e-6);
}

/// A positive volatility small enough to overflow `d1` still prices to the
/// zero-volatility limit and keeps parity.
#[test]
fn test_tiny_positive_volatility_keeps_parity() {
    let inputs = PricingInputs::new(90.0, 100.0, 0.05, 1.0, 1e-310);
    let result = price(&inputs).unwrap();
    assert_eq!(result.call, 0.0);
    assert_abs_diff_eq!(result.put, 100.0 * (-0.05_f64).exp() - 90.0, epsilon = 1e-12);
    assert!(relative_parity_error(&inputs, result.call, result.put) < 1e-14);

    // Normal-range sigma, but ln(S/K) and r*t are large with opposite signs
    let inputs = PricingInputs::new(1e-4, 1e9, 1.0, 50.0, 1e-308);
    let result = price(&inputs).unwrap();
    let discounted_strike = 1e9 * (-50.0_f64).exp();
    assert_abs_diff_eq!(result.call, 1e-4 - discounted_strike, epsilon = 1e-18);
    assert_eq!(result.put, 0.0);
    assert!(relative_parity_error(&inputs, result.call, result.put) < 1e-14);

    for sigma in [5e-324, 1e-320, 1e-310, 1e-300, 1e-200] {
        for (s, k, r) in [(90.0, 100.0, 0.05), (110.0, 100.0, -0.02), (100.0, 100.0, 0.0)] {
            let inputs = PricingInputs::new(s, k, r, 2.0, sigma);
            let result = price(&inputs).unwrap();
            let err = relative_parity_error(&inputs, result.call, result.put);
            assert!(err < 1e-14, "parity error {:e} for {:?}", err, inputs);
        }
    }
}

#[test]
fn test_monotone_in_spot() {
    let mut prev: Option<(f64, f64)> = None;
    for i in 0..400 {
        let spot = 20.0 + 0.5 * i as f64;
        let (call, put) = bsm_price(spot, 100.0, 0.03, 0.75, 0.35).unwrap();
        if let Some((prev_call, prev_put)) = prev {
            assert!(call >= prev_call, "call decreased at S={}", spot);
            assert!(put <= prev_put, "put increased at S={}", spot);
        }
        prev = Some((call, put));
    }
}

#[test]
fn test_call_increases_with_volatility() {
    let low = bsm_price(100.0, 110.0, 0.02, 0.5, 0.1).unwrap();
    let high = bsm_price(100.0, 110.0, 0.02, 0.5, 0.4).unwrap();
    assert!(high.0 > low.0);
    assert!(high.1 > low.1);
}

#[test]
fn test_negative_rate_accepted() {
    let result = price(&PricingInputs::new(100.0, 100.0, -0.005, 1.0, 0.2)).unwrap();
    assert!(result.put > result.call, "negative rate should favour the put");
}

/// Repeated evaluation is bit-identical.
#[test]
fn test_idempotent() {
    let inputs = PricingInputs::new(123.45, 117.0, 0.031, 0.83, 0.47);
    let first = price(&inputs).unwrap();
    for _ in 0..100 {
        let again = price(&inputs).unwrap();
        assert_eq!(first.call.to_bits(), again.call.to_bits());
        assert_eq!(first.put.to_bits(), again.put.to_bits());
    }
}

#[test]
fn test_invalid_inputs_rejected() {
    let cases = [
        ("spot", PricingInputs::new(0.0, 100.0, 0.05, 1.0, 0.2)),
        ("spot", PricingInputs::new(-5.0, 100.0, 0.05, 1.0, 0.2)),
        ("strike", PricingInputs::new(100.0, 0.0, 0.05, 1.0, 0.2)),
        ("time", PricingInputs::new(100.0, 100.0, 0.05, -1.0, 0.2)),
        ("sigma", PricingInputs::new(100.0, 100.0, 0.05, 1.0, -0.2)),
        ("rate", PricingInputs::new(100.0, 100.0, f64::INFINITY, 1.0, 0.2)),
        ("spot", PricingInputs::new(f64::NAN, 100.0, 0.05, 1.0, 0.2)),
    ];
    for (field, inputs) in cases {
        match price(&inputs) {
            Err(PricingError::InvalidInput { field: got, .. }) => assert_eq!(got, field),
            other => panic!("expected InvalidInput for {}, got {:?}", field, other),
        }
    }
}

/// Extreme corners of the practical domain stay finite and non-negative.
#[test]
fn test_extreme_domain_is_finite() {
    let spots = [1e-4, 1.0, 1e9];
    let strikes = [1e-4, 1.0, 1e9];
    let sigmas = [0.0, 1e-6, 5.0];
    let times = [0.0, 1e-8, 50.0];
    for &s in &spots {
        for &k in &strikes {
            for &sigma in &sigmas {
                for &t in &times {
                    let inputs = PricingInputs::new(s, k, 0.05, t, sigma);
                    let result = price(&inputs).unwrap();
                    assert!(result.call.is_finite() && result.put.is_finite(), "{:?}", inputs);
                    assert!(result.call >= 0.0 && result.put >= 0.0, "{:?}", inputs);
                    assert!(result.call <= s * (1.0 + 1e-12), "call above spot for {:?}", inputs);
                }
            }
        }
    }
}

/// Cross-check the CDF against statrs over the practical range.
#[test]
fn test_norm_cdf_matches_statrs() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    for i in 0..=2000 {
        let x = -10.0 + 0.01 * i as f64;
        let diff = (norm_cdf(x) - normal.cdf(x)).abs();
        assert!(diff < 1e-12, "cdf mismatch {:e} at x={}", diff, x);
    }
}
