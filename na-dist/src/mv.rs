//! Multivariate distributions.

use nd::{arr1, arr2, Array1, Array2, ArrayView1, ArrayView2};

use nac::{check_dim, Error, Result};

use crate::uv;

/// Variance of `Normal::diffuse`.
pub const DIFFUSE_VARIANCE: f64 = 1e12;

/// Largest `|c_ij - c_ji|` accepted, relative to the largest entry.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A Gaussian over an `n`-vector. Used as the filter's belief state;
/// `location.len() == n`, `covariance` is `n x n`, finite, symmetric and
/// has a non-negative diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
  location: Array1<f64>,
  covariance: Array2<f64>,
}

impl Normal {
  pub fn new(location: Array1<f64>, covariance: Array2<f64>) -> Result<Normal> {
    let n = location.len();
    check_dim("belief covariance", (n, n), covariance.dim())?;

    if location.iter().any(|v| !v.is_finite() ) {
      return Err(Error::invalid("location", format!("entries must be finite, got {}", location)));
    }
    if covariance.iter().any(|v| !v.is_finite() ) {
      return Err(Error::invalid("covariance", format!("entries must be finite, got {}", covariance)));
    }
    for i in 0..n {
      if covariance[[i, i]] < 0.0 {
        return Err(Error::invalid("covariance",
                                  format!("variance {} is negative: {}", i, covariance[[i, i]])));
      }
    }
    let largest = covariance.iter().fold(0.0f64, |m, v| m.max(v.abs()) );
    let tol = SYMMETRY_TOLERANCE * largest;
    for i in 0..n {
      for j in i + 1..n {
        if (covariance[[i, j]] - covariance[[j, i]]).abs() > tol {
          return Err(Error::invalid("covariance",
                                    format!("not symmetric at ({}, {}): {} vs {}",
                                            i, j, covariance[[i, j]], covariance[[j, i]])));
        }
      }
    }

    Ok(Normal {
      location: location,
      covariance: covariance,
    })
  }

  /// A one dimensional belief with the given mean and variance.
  pub fn univariate(location: f64, variance: f64) -> Result<Normal> {
    Normal::new(arr1(&[location]), arr2(&[[variance]]))
  }

  /// Zero mean with `DIFFUSE_VARIANCE * I`: next to no knowledge of the
  /// state.
  pub fn diffuse(dim: usize) -> Normal {
    Normal {
      location: Array1::zeros(dim),
      covariance: Array2::<f64>::eye(dim) * DIFFUSE_VARIANCE,
    }
  }

  pub fn dim(&self) -> usize { self.location.len() }
  pub fn location(&self) -> ArrayView1<f64> { self.location.view() }
  pub fn covariance(&self) -> ArrayView2<f64> { self.covariance.view() }

  /// The scalar distribution of component `i`.
  pub fn marginal(&self, i: usize) -> Result<uv::Normal> {
    if i >= self.dim() {
      return Err(Error::invalid("i", format!("index {} out of range for a {} dimensional normal",
                                             i, self.dim())));
    }
    uv::Normal::new(self.location[i], self.covariance[[i, i]].sqrt())
  }

  pub fn into_parts(self) -> (Array1<f64>, Array2<f64>) {
    (self.location, self.covariance)
  }
}
