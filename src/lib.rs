/*!
Dense row-major tables, matrices and vectors with shape-checked arithmetic.

```text
Table<T>   rows x cols, uninitialized or initialized
Matrix<T>  Table + 2-index access, matrix/vector products
Vector<T>  Table with rows == 1 or cols == 1, 1-index access, dot product
```

Every operation other than construction and assignment returns a [`Res`],
failing with one of the three [`ArrayError`] kinds.
*/

mod core;
pub use crate::core::{ArrayError, ErrorKind, Matrix, Shape, ShapeError, Table, Vector};
pub type Res<U> = Result<U, ArrayError>;
