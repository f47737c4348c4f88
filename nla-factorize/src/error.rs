
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error("expected a square matrix, found {rows}x{cols}")]
  NotSquare { rows: usize, cols: usize },
  /// No usable pivot was left in `column`.
  #[error("matrix is singular to working precision (column {column})")]
  Singular { column: usize },
}
