//! The plain Kalman filter: `predict`, `observe` and `update` are pure
//! functions from a belief and a system to a new belief.

use log::trace;
use nd::{Array2, ArrayView1, ArrayView2};

use nac::{check_dim, Error, Operator, Result};
use nla::Inverse;

pub use na_dist::mv::Normal as State;

/// One step of `x_{t+1} = A x_t + B u_t + w`, `y_t = C x_t + v`, with
/// `w ~ N(0, Q)` and `v ~ N(0, R)`.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
  /// A, `n x n`
  transition: Array2<f64>,
  /// B, `n x m`
  control: Array2<f64>,
  /// C, `k x n`
  observation: Array2<f64>,
  /// Q, `n x n`
  process_noise: Array2<f64>,
  /// R, `k x k`
  observation_noise: Array2<f64>,
}

impl System {
  /// The state dimension is taken from `transition`; every other matrix
  /// must agree with it.
  pub fn new(transition: Array2<f64>,
             control: Array2<f64>,
             observation: Array2<f64>,
             process_noise: Array2<f64>,
             observation_noise: Array2<f64>) -> Result<System>
  {
    let n = transition.nrows();
    let k = observation.nrows();
    check_dim("transition", (n, n), transition.dim())?;
    check_dim("control", (n, control.ncols()), control.dim())?;
    check_dim("observation", (k, n), observation.dim())?;
    check_dim("process noise", (n, n), process_noise.dim())?;
    check_dim("observation noise", (k, k), observation_noise.dim())?;

    Ok(System {
      transition: transition,
      control: control,
      observation: observation,
      process_noise: process_noise,
      observation_noise: observation_noise,
    })
  }

  pub fn state_dim(&self) -> usize { self.transition.nrows() }
  pub fn control_dim(&self) -> usize { self.control.ncols() }
  pub fn observation_dim(&self) -> usize { self.observation.nrows() }

  pub fn transition(&self) -> ArrayView2<f64> { self.transition.view() }
  pub fn control(&self) -> ArrayView2<f64> { self.control.view() }
  pub fn observation(&self) -> ArrayView2<f64> { self.observation.view() }
  pub fn process_noise(&self) -> ArrayView2<f64> { self.process_noise.view() }
  pub fn observation_noise(&self) -> ArrayView2<f64> { self.observation_noise.view() }

  fn check_state(&self, state: &State) -> Result<()> {
    check_dim("state", (self.state_dim(), 1), (state.dim(), 1))
  }
}

/// A-priori belief: `(A x, A P A^T + Q)`. Control inputs are not applied.
pub fn predict(state: &State, system: &System) -> Result<State> {
  system.check_state(state)?;

  let a = &system.transition;
  let x = a.eval(state.location())?;
  let p = a.dot(&state.covariance()).dot(&a.t()) + &system.process_noise;

  trace!("kalman predict: x = {}, P = {}", x, p);
  State::new(x, p)
}

/// The predictive distribution of the next observation,
/// `(C x, C P C^T + R)`. Leaves `state` alone.
pub fn observe(state: &State, system: &System) -> Result<State> {
  system.check_state(state)?;

  let c = &system.observation;
  let y = c.eval(state.location())?;
  let s = c.dot(&state.covariance()).dot(&c.t()) + &system.observation_noise;

  trace!("kalman observe: y = {}, S = {}", y, s);
  State::new(y, s)
}

/// A-posteriori belief after seeing `observed`. The covariance is
/// computed in Joseph form.
///
/// Fails with `SingularInnovationCovariance` when `C P C^T + R` cannot be
/// inverted; there is no pseudo-inverse fallback.
pub fn update(state: &State, system: &System,
              observed: ArrayView1<f64>) -> Result<State> {
  system.check_state(state)?;
  check_dim("observed value", (system.observation_dim(), 1), (observed.len(), 1))?;

  let n = system.state_dim();
  let c = &system.observation;
  let p = state.covariance();

  let innovation = &observed - &c.eval(state.location())?;
  let p_ct = p.dot(&c.t());
  let s = c.dot(&p_ct) + &system.observation_noise;
  let s_inv = s.inv()
    .map_err(|_| Error::SingularInnovationCovariance )?;
  let gain = p_ct.dot(&s_inv);

  let x = &state.location() + &gain.dot(&innovation);
  // Joseph form: (I - K C) P (I - K C)^T + K R K^T. Stays PSD and keeps
  // its precision when 1 - K rounds to zero under a wide prior.
  let i_kc = Array2::<f64>::eye(n) - gain.dot(c);
  let cov = i_kc.dot(&p).dot(&i_kc.t())
    + gain.dot(&system.observation_noise).dot(&gain.t());
  // re-symmetrize so round-off can't accumulate over many steps
  let cov = (&cov + &cov.t()) * 0.5;

  trace!("kalman update: innovation = {}, K = {}", innovation, gain);
  State::new(x, cov)
}
