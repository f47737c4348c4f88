
use nac::Result;

use super::Normal;

/// `exp(X)` for `X ~ N(location, scale)`. All of its quantiles are
/// those of the underlying `Normal`, pushed through `exp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormal {
  normal: Normal,
}

impl LogNormal {
  pub fn new(location: f64, scale: f64) -> Result<LogNormal> {
    Normal::new(location, scale).map(LogNormal::from)
  }

  pub fn location(&self) -> f64 { self.normal.location() }
  pub fn scale(&self) -> f64 { self.normal.scale() }
  /// The distribution of `ln(X)`.
  pub fn normal(&self) -> &Normal { &self.normal }

  /// `p <= 0` maps to `0`, `p >= 1` to `+inf`.
  pub fn quantile(&self, p: f64) -> f64 {
    self.normal.quantile(p).exp()
  }

  pub fn interval(&self, level: f64) -> Result<(f64, f64)> {
    let (lo, hi) = self.normal.interval(level)?;
    Ok((lo.exp(), hi.exp()))
  }
}

impl From<Normal> for LogNormal {
  fn from(normal: Normal) -> LogNormal {
    LogNormal { normal: normal }
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use approx::assert_relative_eq;
  use nac::Error;
  use proptest::prelude::*;

  #[test]
  fn new() {
    for &(loc, scale) in &[(0.0, 1.0), (-10.0, 2.0)] {
      let ln = LogNormal::new(loc, scale).unwrap();
      assert_eq!(ln.location(), loc);
      assert_eq!(ln.scale(), scale);
    }
  }

  #[test]
  fn new_errs() {
    for &(loc, scale) in &[(10.0, 0.0), (10.0, -2.0)] {
      match LogNormal::new(loc, scale) {
        Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "scale"),
        other => panic!("({}, {}) gave {:?}", loc, scale, other),
      }
    }
  }

  #[test]
  fn median() {
    let ln = LogNormal::new(0.0, 1.0).unwrap();
    assert!((ln.quantile(0.5) - 1.0).abs() <= 1e-8);
  }

  #[test]
  fn upper_quantile_and_interval() {
    let ln = LogNormal::new(1.0, 0.5).unwrap();
    assert_relative_eq!(ln.quantile(0.975),
                        (1.0 + 0.5 * 1.959963984540054f64).exp(),
                        max_relative = 1e-9);

    let (lo, hi) = ln.interval(0.9).unwrap();
    assert!(lo > 0.0 && lo < 1.0f64.exp() && hi > 1.0f64.exp());
    assert_relative_eq!(lo * hi, 2.0f64.exp(), max_relative = 1e-9);
  }

  #[test]
  fn quantile_boundaries() {
    let ln = LogNormal::new(0.0, 1.0).unwrap();
    assert_eq!(ln.quantile(0.0), 0.0);
    assert_eq!(ln.quantile(1.0), f64::INFINITY);
  }

  proptest! {
    #[test]
    fn median_is_exp_location(loc in -20f64..20.0, scale in 1e-6f64..1e3) {
      let ln = LogNormal::new(loc, scale).unwrap();
      prop_assert!((ln.quantile(0.5) - loc.exp()).abs() <= 1e-8);
    }
  }
}
