mod display;
mod errors;
mod matrix;
mod ops;
mod shape;
mod table;
mod vector;

pub use errors::{ArrayError, ErrorKind, ShapeError};
pub use matrix::Matrix;
pub use shape::Shape;
pub use table::Table;
pub use vector::Vector;
