// Closed-form Black-Scholes-Merton prices for European calls and puts. This is
// the single pricing routine behind both the point quote and the sensitivity
// grid.

use crate::error::PricingError;
use crate::models::types::{PricingInputs, PricingResult};

/// Standard normal cumulative distribution function.
///
/// Written as `0.5 * erfc(-x / sqrt(2))` so the lower tail keeps full relative
/// precision instead of cancelling against 1.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// Price a European call and put under Black-Scholes-Merton assumptions.
///
/// Branches:
/// - `time == 0`: intrinsic values `max(S - K, 0)` and `max(K - S, 0)`.
/// - `sigma == 0` with `time > 0`: discounted intrinsic values against
///   `K * e^(-r t)`. A `sigma * sqrt(t)` that underflows to zero, or a
///   log-moneyness that cannot be formed, takes the same branch.
/// - `sigma * sqrt(t)` overflowing to infinity: the infinite-volatility limit,
///   call `S` and put `K * e^(-r t)`.
/// - otherwise the usual `d1`/`d2` formula.
///
/// # Errors
///
/// [`PricingError::InvalidInput`] when the inputs fail
/// [`PricingInputs::validate`], or when an extreme but finite combination
/// (e.g. a huge negative `r * t`) overflows the discount factor.
///
/// # Example
///
/// ```rust
/// use bsm_heatmap::{price, PricingInputs};
///
/// let result = price(&PricingInputs::new(100.0, 100.0, 0.05, 1.0, 0.2))?;
/// assert!((result.call - 10.4506).abs() < 1e-3);
/// assert!((result.put - 5.5735).abs() < 1e-3);
/// # Ok::<(), bsm_heatmap::PricingError>(())
/// ```
pub fn price(inputs: &PricingInputs) -> Result<PricingResult, PricingError> {
    inputs.validate()?;
    let PricingInputs {
        spot: s,
        strike: k,
        rate: r,
        time: t,
        sigma,
    } = *inputs;

    if t == 0.0 {
        return Ok(PricingResult::new((s - k).max(0.0), (k - s).max(0.0)));
    }

    let discounted_strike = k * inputs.discount_factor();
    if !discounted_strike.is_finite() {
        return Err(PricingError::invalid_input(
            "rate",
            r,
            "discount factor overflows for this maturity",
        ));
    }

    let sqrt_t = t.sqrt();
    let sig_sqrt_t = sigma * sqrt_t;
    // sigma * sqrt(t) can underflow to zero for subnormal sigma
    if sig_sqrt_t == 0.0 {
        return Ok(PricingResult::new(
            (s - discounted_strike).max(0.0),
            (discounted_strike - s).max(0.0),
        ));
    }
    if sig_sqrt_t.is_infinite() {
        return Ok(PricingResult::new(s, discounted_strike));
    }

    // ln(S/K) + r*t is summed before dividing so a tiny sigma drives d1 to a
    // single signed infinity. Dividing each term separately gives -inf + inf.
    // The split also keeps sigma^2 from overflowing for very large sigma.
    let log_forward_moneyness = (s / k).ln() + r * t;
    let d1 = log_forward_moneyness / sig_sqrt_t + 0.5 * sig_sqrt_t;
    if d1.is_nan() {
        // ln(S/K) and r*t are infinite with opposite signs
        return Ok(PricingResult::new(
            (s - discounted_strike).max(0.0),
            (discounted_strike - s).max(0.0),
        ));
    }
    let d2 = d1 - sig_sqrt_t;

    let call = s * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
    let put = discounted_strike * norm_cdf(-d2) - s * norm_cdf(-d1);

    Ok(PricingResult::new(call, put))
}

/// Positional form of [`price`] returning `(call, put)`.
#[allow(non_snake_case)]
pub fn bsm_price(S: f64, K: f64, r: f64, t: f64, sigma: f64) -> Result<(f64, f64), PricingError> {
    price(&PricingInputs::new(S, K, r, t, sigma)).map(Into::into)
}
