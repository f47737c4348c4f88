//! A level that wanders as a random walk and is only seen through noisy
//! observations. Each `update` is one predict/correct cycle of a scalar
//! Kalman filter; `forecast` rolls the belief forward without data.

use std::convert::TryFrom;

use log::{debug, warn};
use nd::{arr2, aview1, ArrayView1, ArrayView2};

use nac::{Error, Result};
use na_df::kalman::{self, State, System};
use na_dist::mv;
use na_dist::uv::Normal;

/// Prior variance used by `Stochastic::new`: wide enough that the first
/// observation all but determines the level.
pub const DIFFUSE_PRIOR_VARIANCE: f64 = mv::DIFFUSE_VARIANCE;

/// The prior a model starts from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Init {
  pub prior_location: f64,
  /// Zero is allowed, meaning the level is known exactly.
  pub prior_variance: f64,
}
impl Default for Init {
  fn default() -> Self {
    Init {
      prior_location: 0.0,
      prior_variance: DIFFUSE_PRIOR_VARIANCE,
    }
  }
}

/// Owns the belief over the current level. The belief only changes
/// through `update`.
#[derive(Debug, Clone, PartialEq)]
pub struct Stochastic {
  belief: State,
}

impl Stochastic {
  /// Starts from the diffuse prior `N(0, 1e12)`.
  pub fn new() -> Stochastic {
    Stochastic {
      belief: State::diffuse(1),
    }
  }

  pub fn with_init(init: Init) -> Result<Stochastic> {
    if !init.prior_location.is_finite() {
      return Err(Error::invalid("prior_location",
                                format!("must be finite, got {}", init.prior_location)));
    }
    check_variance("prior_variance", init.prior_variance)?;

    Ok(Stochastic {
      belief: State::univariate(init.prior_location, init.prior_variance)?,
    })
  }

  pub fn dim(&self) -> usize { self.belief.dim() }
  pub fn location(&self) -> ArrayView1<f64> { self.belief.location() }
  pub fn covariance(&self) -> ArrayView2<f64> { self.belief.covariance() }
  /// A copy of the current belief.
  pub fn state(&self) -> State { self.belief.clone() }

  /// Random walk plus noise: the level drifts by variance `walk` per
  /// step and is observed with variance `noise`.
  pub fn system(&self, noise: f64, walk: f64) -> Result<System> {
    check_variance("noise", noise)?;
    check_variance("walk", walk)?;

    System::new(arr2(&[[1.0]]),
                arr2(&[[1.0]]),
                arr2(&[[1.0]]),
                arr2(&[[walk]]),
                arr2(&[[noise]]))
  }

  /// One filter step with the observed `value`. On error the belief is
  /// left as it was.
  pub fn update(&mut self, noise: f64, walk: f64, value: f64) -> Result<()> {
    if !value.is_finite() {
      return Err(Error::invalid("value", format!("must be finite, got {}", value)));
    }
    let system = self.system(noise, walk)?;

    let predicted = kalman::predict(&self.belief, &system)?;
    let posterior = match kalman::update(&predicted, &system, aview1(&[value])) {
      Ok(posterior) => posterior,
      Err(e) => {
        warn!("stochastic update rejected (noise = {}, walk = {}, value = {}): {}",
              noise, walk, value, e);
        return Err(e);
      },
    };

    debug!("stochastic update: value = {}, location = {}, covariance = {}",
           value, posterior.location(), posterior.covariance());
    self.belief = posterior;
    Ok(())
  }

  /// Predictive distributions of the next `n` observations. Each step
  /// starts from the previous step's prediction, so the uncertainty
  /// compounds. Does not touch the stored belief.
  pub fn forecast(&self, noise: f64, walk: f64, n: i64) -> Result<Vec<Normal>> {
    let steps = usize::try_from(n)
      .map_err(|_| Error::invalid("n", format!("forecast horizon must be >= 0, got {}", n)) )?;
    let system = self.system(noise, walk)?;

    let mut state = self.belief.clone();
    let mut out = Vec::with_capacity(steps);
    for _ in 0..steps {
      state = kalman::predict(&state, &system)?;
      let observed = kalman::observe(&state, &system)?;
      out.push(observed.marginal(0)?);
    }

    debug!("stochastic forecast: {} steps from location = {}", steps, self.belief.location());
    Ok(out)
  }
}

impl Default for Stochastic {
  fn default() -> Self { Stochastic::new() }
}

fn check_variance(name: &'static str, v: f64) -> Result<()> {
  if v.is_finite() && v >= 0.0 {
    Ok(())
  } else {
    Err(Error::invalid(name, format!("must be a finite variance >= 0, got {}", v)))
  }
}
