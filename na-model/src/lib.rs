//! Online models built on the discrete filters.

extern crate log;
extern crate ndarray as nd;
extern crate na_core as nac;
extern crate na_dist;
extern crate na_discrete_filtering as na_df;

#[cfg(test)]
extern crate approx;
#[cfg(test)]
extern crate env_logger;
#[cfg(test)]
extern crate proptest;
#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate rand_distr;

pub use nac::{Error, Result};
pub use crate::stochastic::{Init, Stochastic};

pub mod stochastic;
