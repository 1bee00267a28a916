use thiserror::Error;

/// The three failure categories, without their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Bound,
    Init,
    Shape,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("Index ({row}, {col}) is out of bounds for shape ({rows}, {cols}).")]
    Bound {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Operation performed on an uninitialized array.")]
    Init,

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl ArrayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::Bound { .. } => ErrorKind::Bound,
            ArrayError::Init => ErrorKind::Init,
            ArrayError::Shape(_) => ErrorKind::Shape,
        }
    }
}

// --- Shape ---

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Shapes {lhs:?} and {rhs:?} differ. Elementwise operations need equal shapes.")]
    Elementwise {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("Inner dimensions differ, n1 ({n1}) != n2 ({n2}).")]
    Inner { n1: usize, n2: usize },

    #[error("Shape ({rows}, {cols}) is not a vector. One of the dimensions must be 1.")]
    NotVector { rows: usize, cols: usize },

    #[error("Data length ({data_len}) does not match size of array ({size}).")]
    DataLength { data_len: usize, size: usize },

    #[error("Shape ({rows}, {cols}) has more elements than `usize` can count.")]
    Overflow { rows: usize, cols: usize },
}
