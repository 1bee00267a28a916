use crate::core::errors::{ArrayError, ShapeError};

/// Row and column counts of an initialized array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Shape {
        Shape { rows, cols }
    }

    /// Only for shapes that passed [`Shape::valid_numel`].
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    pub fn transposed(&self) -> Shape {
        Shape::new(self.cols, self.rows)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    pub(crate) fn as_tuple(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    // Row-major, no validation.
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        col + row * self.cols
    }

    // --- Validation ---

    pub(crate) fn valid_index(&self, row: usize, col: usize) -> Result<usize, ArrayError> {
        if row >= self.rows || col >= self.cols {
            return Err(ArrayError::Bound {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(self.offset(row, col))
    }

    pub fn valid_numel(&self) -> Result<usize, ShapeError> {
        self.rows.checked_mul(self.cols).ok_or(ShapeError::Overflow {
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub(crate) fn valid_data_len(&self, data_len: usize) -> Result<(), ShapeError> {
        let size = self.valid_numel()?;
        if data_len != size {
            return Err(ShapeError::DataLength { data_len, size });
        }

        Ok(())
    }

    pub(crate) fn valid_elementwise(&self, rhs: &Shape) -> Result<(), ShapeError> {
        if self != rhs {
            return Err(ShapeError::Elementwise {
                lhs: self.as_tuple(),
                rhs: rhs.as_tuple(),
            });
        }

        Ok(())
    }

    /// `self` on the left of a product, `rhs` on the right.
    pub(crate) fn valid_inner(&self, rhs: &Shape) -> Result<(), ShapeError> {
        valid_inner_len(self.cols, rhs.rows)
    }

    pub(crate) fn valid_vector(&self) -> Result<(), ShapeError> {
        if !self.is_vector() {
            return Err(ShapeError::NotVector {
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(())
    }
}

pub(crate) fn valid_inner_len(n1: usize, n2: usize) -> Result<(), ShapeError> {
    if n1 != n2 {
        return Err(ShapeError::Inner { n1, n2 });
    }

    Ok(())
}
