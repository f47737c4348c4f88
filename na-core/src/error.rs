
use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  /// A parameter lies outside the domain the operation is defined on.
  #[error("invalid parameter `{name}`: {reason}")]
  InvalidParameter {
    name: &'static str,
    reason: String,
  },
  /// Shapes are `(rows, cols)`; vectors report `(len, 1)`.
  #[error("dimension mismatch in {what}: expected {expected:?}, found {found:?}")]
  DimensionMismatch {
    what: &'static str,
    expected: (usize, usize),
    found: (usize, usize),
  },
  #[error("innovation covariance is singular; the Kalman gain is undefined")]
  SingularInnovationCovariance,
}

impl Error {
  pub fn invalid<T>(name: &'static str, reason: T) -> Error
    where T: Into<String>,
  {
    Error::InvalidParameter {
      name: name,
      reason: reason.into(),
    }
  }

  pub fn mismatch(what: &'static str,
                  expected: (usize, usize),
                  found: (usize, usize)) -> Error
  {
    Error::DimensionMismatch {
      what: what,
      expected: expected,
      found: found,
    }
  }
}

/// Fails with `DimensionMismatch` unless `found == expected`.
pub fn check_dim(what: &'static str,
                 expected: (usize, usize),
                 found: (usize, usize)) -> Result<()> {
  if expected == found {
    Ok(())
  } else {
    Err(Error::mismatch(what, expected, found))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn check_dim_reports_both_shapes() {
    assert!(check_dim("x", (2, 1), (2, 1)).is_ok());
    match check_dim("x", (2, 2), (2, 3)) {
      Err(Error::DimensionMismatch { what, expected, found }) => {
        assert_eq!(what, "x");
        assert_eq!(expected, (2, 2));
        assert_eq!(found, (2, 3));
      },
      other => panic!("unexpected {:?}", other),
    }
  }

  #[test]
  fn display() {
    let e = Error::invalid("scale", "must be > 0, got -1");
    assert_eq!(e.to_string(), "invalid parameter `scale`: must be > 0, got -1");
  }
}
