//! Distributions used to describe beliefs and forecasts: scalar
//! `uv::Normal`/`uv::LogNormal` and the multivariate `mv::Normal`
//! that the Kalman filter carries around as its state.

extern crate ndarray as nd;
extern crate na_core as nac;
extern crate statrs;

#[cfg(test)]
extern crate approx;
#[cfg(test)]
extern crate proptest;

pub use nac::{Error, Result};

pub mod mv;
pub mod uv;
