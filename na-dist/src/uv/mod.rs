//! Univariate distributions.

pub use self::lognormal::LogNormal;
pub use self::normal::{standard_normal_quantile, Normal};

pub mod lognormal;
pub mod normal;

use nac::{Error, Result};

/// Tail probabilities `(lower, upper)` of a central interval holding
/// `level` of the mass.
fn interval_bounds(level: f64) -> Result<(f64, f64)> {
  if !(level > 0.0 && level < 1.0) {
    return Err(Error::invalid("level", format!("must lie in (0, 1), got {}", level)));
  }
  let tail = (1.0 - level) / 2.0;
  Ok((tail, 1.0 - tail))
}
