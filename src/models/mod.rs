pub mod bs;
pub mod types;

pub use bs::{bsm_price, norm_cdf, price};
pub use types::{PricingInputs, PricingResult};
