//! Linear-Gaussian filtering. The belief is a `State` (a multivariate
//! normal) and one step of the dynamics is described by a `System`.

pub use self::kf::*;

pub mod kf;
