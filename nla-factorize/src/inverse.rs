
use nd::{Array, ArrayBase, Data, Ix2};
use num_traits::{Float, NumCast, One, Zero};

use crate::error::Error;

pub trait Inverse {
  type Output: Sized;
  /// Gauss-Jordan elimination with partial pivoting. Fails with
  /// `Singular` when the best pivot of a column is not larger than
  /// `n * eps * max|a_ij|`.
  fn inv(&self) -> Result<Self::Output, Error>;
}

impl<S> Inverse for ArrayBase<S, Ix2>
  where S: Data,
        S::Elem: Float,
{
  type Output = Array<S::Elem, Ix2>;

  fn inv(&self) -> Result<Self::Output, Error> {
    let (rows, cols) = self.dim();
    if rows != cols {
      return Err(Error::NotSquare { rows: rows, cols: cols });
    }
    let n = rows;

    let mut a = self.to_owned();
    let mut r: Array<S::Elem, Ix2> = Array::eye(n);

    let zero: S::Elem = Zero::zero();
    let largest = a.iter()
      .fold(zero, |m, &v| m.max(v.abs()));
    let n_e: S::Elem = <S::Elem as NumCast>::from(n)
      .unwrap_or_else(One::one);
    let tol = n_e * <S::Elem as Float>::epsilon() * largest;

    for k in 0..n {
      let mut p = k;
      let mut best = a[[k, k]].abs();
      for i in k + 1..n {
        let v = a[[i, k]].abs();
        if v > best {
          best = v;
          p = i;
        }
      }
      // also catches NaN
      if !(best > tol) {
        return Err(Error::Singular { column: k });
      }

      if p != k {
        for j in 0..n {
          a.swap([k, j], [p, j]);
          r.swap([k, j], [p, j]);
        }
      }

      let pivot = a[[k, k]];
      a.row_mut(k).mapv_inplace(|v| v / pivot );
      r.row_mut(k).mapv_inplace(|v| v / pivot );

      for i in 0..n {
        if i == k { continue; }
        let f = a[[i, k]];
        if f.is_zero() { continue; }

        for j in 0..n {
          a[[i, j]] = a[[i, j]] - f * a[[k, j]];
          r[[i, j]] = r[[i, j]] - f * r[[k, j]];
        }
      }
    }

    Ok(r)
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use approx::assert_abs_diff_eq;
  use nd::{arr2, Array2};

  #[test]
  fn inverse_3x3() {
    let a = arr2(&[
      [4.0, 7.0, 2.0],
      [3.0, 6.0, 1.0],
      [2.0, 5.0, 3.0],
    ]);
    let b = a.inv().expect("inversion failed");
    let eye: Array2<f64> = Array2::eye(3);
    assert_abs_diff_eq!(a.dot(&b), eye, epsilon = 1e-12);
    assert_abs_diff_eq!(b.dot(&a), eye, epsilon = 1e-12);
  }

  #[test]
  fn inverse_needs_pivoting() {
    let a = arr2(&[
      [0.0, 1.0],
      [2.0, 0.0],
    ]);
    let expected = arr2(&[
      [0.0, 0.5],
      [1.0, 0.0],
    ]);
    assert_eq!(a.inv(), Ok(expected));
  }

  #[test]
  fn inverse_scalar() {
    let a = arr2(&[[4.0f32]]);
    assert_eq!(a.inv(), Ok(arr2(&[[0.25f32]])));
  }

  #[test]
  fn singular() {
    let zero = arr2(&[[0.0]]);
    assert_eq!(zero.inv(), Err(Error::Singular { column: 0 }));

    let rank_one = arr2(&[
      [1.0, 2.0],
      [2.0, 4.0],
    ]);
    assert_eq!(rank_one.inv(), Err(Error::Singular { column: 1 }));

    let nan = arr2(&[[f64::NAN]]);
    assert!(nan.inv().is_err());
  }

  #[test]
  fn not_square() {
    let a = arr2(&[[1.0, 2.0, 3.0]]);
    assert_eq!(a.inv(), Err(Error::NotSquare { rows: 1, cols: 3 }));
  }
}
