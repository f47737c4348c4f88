extern crate ndarray as nd;
extern crate num_traits;
extern crate thiserror;

#[cfg(test)]
extern crate approx;

pub use crate::error::Error;
pub use crate::inverse::*;

pub mod error;
pub mod inverse;
