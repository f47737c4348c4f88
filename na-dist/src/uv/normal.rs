
use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc_inv;

use nac::{Error, Result};

/// Inverse CDF of `N(0, 1)`.
///
/// `p <= 0` gives `-inf`, `p >= 1` gives `+inf` and NaN stays NaN.
pub fn standard_normal_quantile(p: f64) -> f64 {
  if p.is_nan() {
    return f64::NAN;
  }
  -SQRT_2 * erfc_inv(2.0 * p)
}

/// A scalar Gaussian. Immutable; `scale` is the standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
  location: f64,
  scale: f64,
}

impl Normal {
  pub fn new(location: f64, scale: f64) -> Result<Normal> {
    if !location.is_finite() {
      return Err(Error::invalid("location", format!("must be finite, got {}", location)));
    }
    if !(scale > 0.0) || !scale.is_finite() {
      return Err(Error::invalid("scale", format!("must be finite and > 0, got {}", scale)));
    }

    Ok(Normal {
      location: location,
      scale: scale,
    })
  }

  pub fn location(&self) -> f64 { self.location }
  pub fn scale(&self) -> f64 { self.scale }
  pub fn variance(&self) -> f64 { self.scale * self.scale }

  /// The `x` with `P(X <= x) = p`. See `standard_normal_quantile` for
  /// what happens outside `(0, 1)`.
  pub fn quantile(&self, p: f64) -> f64 {
    self.location + self.scale * standard_normal_quantile(p)
  }

  /// Central interval containing `level` of the probability mass.
  pub fn interval(&self, level: f64) -> Result<(f64, f64)> {
    let (lo, hi) = super::interval_bounds(level)?;
    Ok((self.quantile(lo), self.quantile(hi)))
  }
}
