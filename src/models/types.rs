use crate::error::PricingError;

/// Parameters of a single Black-Scholes-Merton evaluation.
///
/// All fields are plain decimals: `rate` is 0.05 for 5%, `sigma` is 0.2 for 20%.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Underlying asset price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Continuously-compounded annual risk-free rate (r)
    pub rate: f64,
    /// Time to maturity in years (t)
    pub time: f64,
    /// Annualized volatility (sigma)
    pub sigma: f64,
}

impl PricingInputs {
    pub fn new(spot: f64, strike: f64, rate: f64, time: f64, sigma: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            time,
            sigma,
        }
    }

    /// Checks the domain of the closed-form model.
    ///
    /// Every field must be finite, `spot` and `strike` strictly positive, and
    /// `time` and `sigma` non-negative. Any finite `rate` is accepted, including
    /// negative rates.
    pub fn validate(&self) -> Result<(), PricingError> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("rate", self.rate),
            ("time", self.time),
            ("sigma", self.sigma),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PricingError::invalid_input(name, value, "must be finite"));
            }
        }
        if self.spot <= 0.0 {
            return Err(PricingError::invalid_input("spot", self.spot, "must be > 0"));
        }
        if self.strike <= 0.0 {
            return Err(PricingError::invalid_input(
                "strike",
                self.strike,
                "must be > 0",
            ));
        }
        if self.time < 0.0 {
            return Err(PricingError::invalid_input("time", self.time, "must be >= 0"));
        }
        if self.sigma < 0.0 {
            return Err(PricingError::invalid_input(
                "sigma",
                self.sigma,
                "must be >= 0",
            ));
        }
        Ok(())
    }

    /// Copy of these inputs with a different underlying price.
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Copy of these inputs with a different volatility.
    pub fn with_sigma(self, sigma: f64) -> Self {
        Self { sigma, ..self }
    }

    /// Discount factor `e^(-r t)`.
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time).exp()
    }
}

/// Call and put prices for one set of [`PricingInputs`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// European call price
    pub call: f64,
    /// European put price
    pub put: f64,
}

impl PricingResult {
    /// Builds a result, clamping round-off below zero.
    ///
    /// NaN is passed through rather than clamped, so a bad branch in the
    /// pricer shows up in the output instead of as a price of zero.
    pub(crate) fn new(call: f64, put: f64) -> Self {
        debug_assert!(!call.is_nan() && !put.is_nan(), "NaN option price");
        Self {
            call: clamp_round_off(call),
            put: clamp_round_off(put),
        }
    }
}

fn clamp_round_off(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

impl From<PricingResult> for (f64, f64) {
    fn from(result: PricingResult) -> Self {
        (result.call, result.put)
    }
}
