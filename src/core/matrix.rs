use num_traits::{One, Zero};
use std::ops::{Add, Index, IndexMut, Sub};

use crate::{
    core::{errors::ArrayError, shape::Shape, table::Table, vector::Vector},
    Res,
};

/// A [`Table`] with 2-index access and matrix products.
///
/// Any shape is a valid matrix, including `1 x n` and `n x 1`.
#[derive(PartialEq)]
pub struct Matrix<T> {
    pub(crate) table: Table<T>,
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Matrix {
            table: self.table.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.table.clone_from(&source.table);
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix::empty()
    }
}

impl<T> From<Table<T>> for Matrix<T> {
    fn from(table: Table<T>) -> Self {
        Matrix { table }
    }
}

impl<T> From<Vector<T>> for Matrix<T> {
    fn from(vector: Vector<T>) -> Self {
        Matrix {
            table: vector.into_table(),
        }
    }
}

impl<T> Matrix<T> {
    pub fn empty() -> Matrix<T> {
        Matrix {
            table: Table::empty(),
        }
    }

    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Res<Matrix<T>> {
        Ok(Table::from_vec(data, rows, cols)?.into())
    }

    pub fn as_table(&self) -> &Table<T> {
        &self.table
    }

    pub fn into_table(self) -> Table<T> {
        self.table
    }

    // --- Attributes ---

    pub fn is_initialized(&self) -> bool {
        self.table.is_initialized()
    }

    pub fn shape(&self) -> Res<Shape> {
        self.table.shape()
    }

    pub fn rows(&self) -> Res<usize> {
        self.table.rows()
    }

    pub fn cols(&self) -> Res<usize> {
        self.table.cols()
    }

    pub fn numel(&self) -> Res<usize> {
        self.table.numel()
    }

    pub fn data(&self) -> Res<&[T]> {
        self.table.data()
    }

    pub fn is_square(&self) -> Res<bool> {
        Ok(self.table.shape()?.is_square())
    }

    // --- Elements ---

    pub fn get(&self, row: usize, col: usize) -> Res<&T> {
        self.table.get(row, col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Res<&mut T> {
        self.table.get_mut(row, col)
    }

    /// Reads `data[col + row * cols]` without checking `row` and `col`
    /// against the shape. An overflowing `col` lands in a later row.
    ///
    /// # Panics
    ///
    /// If the matrix is uninitialized or the flat offset is past the end.
    pub fn get_unchecked(&self, row: usize, col: usize) -> &T {
        match &self.table.storage {
            Some(storage) => &storage.data[storage.shape.offset(row, col)],
            None => panic!("{}", ArrayError::Init),
        }
    }

    /// Mutable form of [`Matrix::get_unchecked`].
    pub fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        match &mut self.table.storage {
            Some(storage) => {
                let offset = storage.shape.offset(row, col);
                &mut storage.data[offset]
            }
            None => panic!("{}", ArrayError::Init),
        }
    }
}

impl<T: Copy> Matrix<T> {
    pub fn new(data: &[T], rows: usize, cols: usize) -> Res<Matrix<T>> {
        Ok(Table::new(data, rows, cols)?.into())
    }

    pub fn same(element: T, rows: usize, cols: usize) -> Res<Matrix<T>> {
        Ok(Table::same(element, rows, cols)?.into())
    }

    pub fn zeroes(rows: usize, cols: usize) -> Res<Matrix<T>>
    where
        T: Zero,
    {
        Ok(Table::zeroes(rows, cols)?.into())
    }

    pub fn ones(rows: usize, cols: usize) -> Res<Matrix<T>>
    where
        T: One,
    {
        Ok(Table::ones(rows, cols)?.into())
    }

    pub fn eye(size: usize) -> Res<Matrix<T>>
    where
        T: Zero + One,
    {
        let shape = Shape::new(size, size);
        let numel = shape.valid_numel()?;

        let diagonal = size + 1;
        let data = (0..numel)
            .map(|elem| {
                if elem % diagonal == 0 {
                    T::one()
                } else {
                    T::zero()
                }
            })
            .collect();

        Ok(Table::init(data, shape).into())
    }

    pub fn row(&self, row: usize) -> Res<Vector<T>> {
        let storage = self.table.storage()?;
        let Shape { rows, cols } = storage.shape;

        if row >= rows {
            return Err(ArrayError::Bound {
                row,
                col: 0,
                rows,
                cols,
            });
        }

        let start = row * cols;
        let data = storage.data[start..start + cols].to_vec();

        Ok(Vector::init(Table::init(data, Shape::new(1, cols))))
    }

    pub fn column(&self, col: usize) -> Res<Vector<T>> {
        let storage = self.table.storage()?;
        let Shape { rows, cols } = storage.shape;

        if col >= cols {
            return Err(ArrayError::Bound {
                row: 0,
                col,
                rows,
                cols,
            });
        }

        let data = (0..rows).map(|row| storage.data[col + row * cols]).collect();

        Ok(Vector::init(Table::init(data, Shape::new(rows, 1))))
    }

    // --- Mutation ---

    pub fn transpose(&mut self) -> Res<&mut Self> {
        self.table.transpose()?;
        Ok(self)
    }

    pub fn transposed(&self) -> Res<Matrix<T>> {
        Ok(self.table.transposed()?.into())
    }

    pub fn add_in_place(&mut self, rhs: &Matrix<T>) -> Res<&mut Self>
    where
        T: Add<Output = T>,
    {
        self.table.add_in_place(&rhs.table)?;
        Ok(self)
    }

    pub fn sub_in_place(&mut self, rhs: &Matrix<T>) -> Res<&mut Self>
    where
        T: Sub<Output = T>,
    {
        self.table.sub_in_place(&rhs.table)?;
        Ok(self)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get_unchecked(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.get_unchecked_mut(row, col)
    }
}
