
extern crate ndarray as nd;
extern crate num_traits;
extern crate thiserror;

use nd::prelude::*;
use nd::linalg::general_mat_vec_mul;
use nd::{Data, LinalgScalar};

use num_traits::{One, Zero};

pub use crate::error::{check_dim, Error, Result};

pub mod error;

/// A linear map applied to state vectors: the transition and
/// observation matrices of a filter are both used this way.
pub trait Operator<E> {
  fn operator_input_dim(&self) -> usize;
  fn operator_output_dim(&self) -> usize;
  /// Writes `self · x` into `out`. Both lengths are checked first.
  fn eval_at(&self, x: ArrayView1<E>,
             out: ArrayViewMut1<E>) -> Result<()>;

  fn eval(&self, x: ArrayView1<E>) -> Result<Array1<E>>
    where E: Clone + Zero,
  {
    let mut out = Array1::zeros(self.operator_output_dim());
    self.eval_at(x, out.view_mut())?;
    Ok(out)
  }
}

impl<D, E> Operator<E> for ArrayBase<D, Ix2>
  where D: Data<Elem = E>,
        E: LinalgScalar,
{
  fn operator_input_dim(&self) -> usize { self.ncols() }
  fn operator_output_dim(&self) -> usize { self.nrows() }
  fn eval_at(&self, x: ArrayView1<E>,
             mut out: ArrayViewMut1<E>) -> Result<()> {
    check_dim("operator input", (self.operator_input_dim(), 1), (x.len(), 1))?;
    check_dim("operator output", (self.operator_output_dim(), 1), (out.len(), 1))?;
    general_mat_vec_mul(One::one(),
                        self, &x, Zero::zero(),
                        &mut out);

    Ok(())
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use nd::{arr1, arr2};

  #[test]
  fn operator_eval() {
    let a = arr2(&[
      [1.0, 2.0],
      [0.0, -1.0],
      [3.0, 0.5],
    ]);
    let y = a.eval(arr1(&[2.0, 4.0]).view()).unwrap();
    assert_eq!(y, arr1(&[10.0, -4.0, 8.0]));
  }

  #[test]
  fn operator_rejects_wrong_input() {
    let a = arr2(&[[1.0, 2.0]]);
    let r = a.eval(arr1(&[1.0, 2.0, 3.0]).view());
    assert_eq!(r, Err(Error::mismatch("operator input", (2, 1), (3, 1))));
  }
}
