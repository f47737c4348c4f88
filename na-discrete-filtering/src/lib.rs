extern crate log;
extern crate ndarray as nd;
extern crate na_core as nac;
extern crate na_dist;
extern crate nla_factorize as nla;

#[cfg(test)]
extern crate approx;
#[cfg(test)]
extern crate proptest;

pub use nac::{Error, Result};

pub mod kalman;
