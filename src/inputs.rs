//! Front-end style parameter collection.
//!
//! Interactive callers collect the risk-free rate as a percentage and enforce
//! small minimums on prices. [`RawInputs`] carries those values and converts
//! them into the decimal [`PricingInputs`] the pricer works with. Whether a
//! negative rate is accepted is a [`RatePolicy`] of the caller, not a constraint
//! of the model.

use tracing::debug;

use crate::error::PricingError;
use crate::models::PricingInputs;

/// Smallest spot or strike accepted from a user.
pub const MIN_PRICE_INPUT: f64 = 0.0001;

/// Largest rate accepted from a user, in percent.
pub const MAX_RATE_PCT: f64 = 100.0;

/// How a negative percentage rate is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RatePolicy {
    /// Pass negative rates through (EUR/JPY style regimes)
    #[default]
    AllowNegative,
    /// Clamp negative rates to zero
    FloorAtZero,
}

/// User-facing inputs with the rate expressed in percent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawInputs {
    /// Current stock price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Risk-free rate in percent, e.g. 1.5 for 1.5%
    pub rate_pct: f64,
    /// Time until maturity in years
    pub time: f64,
    /// Volatility as a decimal
    pub sigma: f64,
    pub rate_policy: RatePolicy,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            rate_pct: 1.5,
            time: 1.0,
            sigma: 0.2,
            rate_policy: RatePolicy::default(),
        }
    }
}

impl RawInputs {
    /// Rate as a decimal after applying the policy and range checks.
    pub fn rate_decimal(&self) -> Result<f64, PricingError> {
        if !self.rate_pct.is_finite() {
            return Err(PricingError::invalid_input(
                "rate_pct",
                self.rate_pct,
                "must be finite",
            ));
        }
        if self.rate_pct > MAX_RATE_PCT {
            return Err(PricingError::invalid_input(
                "rate_pct",
                self.rate_pct,
                "must be <= 100",
            ));
        }
        let pct = match self.rate_policy {
            RatePolicy::FloorAtZero if self.rate_pct < 0.0 => {
                debug!(rate_pct = self.rate_pct, "flooring negative rate at zero");
                0.0
            }
            _ => self.rate_pct,
        };
        Ok(pct / 100.0)
    }

    /// Validate user-level constraints and convert to decimal pricing inputs.
    pub fn to_pricing_inputs(&self) -> Result<PricingInputs, PricingError> {
        if self.spot.is_nan() || self.spot < MIN_PRICE_INPUT {
            return Err(PricingError::invalid_input(
                "spot",
                self.spot,
                "must be >= 0.0001",
            ));
        }
        if self.strike.is_nan() || self.strike < MIN_PRICE_INPUT {
            return Err(PricingError::invalid_input(
                "strike",
                self.strike,
                "must be >= 0.0001",
            ));
        }
        let inputs = PricingInputs::new(
            self.spot,
            self.strike,
            self.rate_decimal()?,
            self.time,
            self.sigma,
        );
        inputs.validate()?;
        Ok(inputs)
    }
}

impl TryFrom<&RawInputs> for PricingInputs {
    type Error = PricingError;

    fn try_from(raw: &RawInputs) -> Result<Self, Self::Error> {
        raw.to_pricing_inputs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rate_converted_to_decimal() {
        let raw = RawInputs {
            rate_pct: 5.0,
            ..RawInputs::default()
        };
        let inputs = raw.to_pricing_inputs().unwrap();
        assert!((inputs.rate - 0.05).abs() < 1e-15);
        assert_eq!(inputs.spot, 100.0);
    }

    #[test]
    fn test_rate_policy() {
        let negative = RawInputs {
            rate_pct: -0.5,
            ..RawInputs::default()
        };
        assert!((negative.rate_decimal().unwrap() + 0.005).abs() < 1e-15);

        let floored = RawInputs {
            rate_policy: RatePolicy::FloorAtZero,
            ..negative
        };
        assert_eq!(floored.rate_decimal().unwrap(), 0.0);
    }

    #[test]
    fn test_user_constraints() {
        let tiny_spot = RawInputs {
            spot: 0.00001,
            ..RawInputs::default()
        };
        assert_eq!(tiny_spot.to_pricing_inputs().unwrap_err().field(), "spot");

        let high_rate = RawInputs {
            rate_pct: 150.0,
            ..RawInputs::default()
        };
        assert_eq!(high_rate.to_pricing_inputs().unwrap_err().field(), "rate_pct");

        let negative_vol = RawInputs {
            sigma: -0.1,
            ..RawInputs::default()
        };
        assert_eq!(negative_vol.to_pricing_inputs().unwrap_err().field(), "sigma");
    }
}
