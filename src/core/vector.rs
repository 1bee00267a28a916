use num_traits::{Float, One, Zero};
use std::ops::{Add, Index, IndexMut, Sub};

use crate::{
    core::{errors::ArrayError, matrix::Matrix, shape::Shape, table::Table},
    Res,
};

/// A [`Table`] with a single row or a single column, indexed by its flat
/// position.
#[derive(PartialEq)]
pub struct Vector<T> {
    pub(crate) table: Table<T>,
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Vector {
            table: self.table.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.table.clone_from(&source.table);
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Vector::empty()
    }
}

/// Narrows a table into a vector. An uninitialized table stays
/// uninitialized; an initialized one must have a dimension of size 1.
impl<T> TryFrom<Table<T>> for Vector<T> {
    type Error = ArrayError;

    fn try_from(table: Table<T>) -> Res<Vector<T>> {
        if let Some(storage) = &table.storage {
            storage.shape.valid_vector()?;
        }

        Ok(Vector { table })
    }
}

impl<T> TryFrom<Matrix<T>> for Vector<T> {
    type Error = ArrayError;

    fn try_from(matrix: Matrix<T>) -> Res<Vector<T>> {
        Vector::try_from(matrix.into_table())
    }
}

// Row vectors index along the columns, everything else along the rows.
fn position(shape: &Shape, index: usize) -> (usize, usize) {
    if shape.rows == 1 {
        (0, index)
    } else {
        (index, 0)
    }
}

impl<T> Vector<T> {
    // Callers guarantee the table is a vector.
    pub(crate) fn init(table: Table<T>) -> Vector<T> {
        Vector { table }
    }

    pub fn empty() -> Vector<T> {
        Vector {
            table: Table::empty(),
        }
    }

    /// Column vector owning `data`.
    pub fn from_vec(data: Vec<T>) -> Vector<T> {
        let shape = Shape::new(data.len(), 1);
        Vector::init(Table::init(data, shape))
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

    pub fn len(&self) -> Res<usize> {
        self.table.numel()
    }

    pub fn is_empty(&self) -> Res<bool> {
        Ok(self.len()? == 0)
    }

    pub fn is_row(&self) -> Res<bool> {
        Ok(self.table.rows()? == 1)
    }

    pub fn is_column(&self) -> Res<bool> {
        Ok(self.table.cols()? == 1)
    }

    pub fn data(&self) -> Res<&[T]> {
        self.table.data()
    }

    // --- Elements ---

    pub fn get(&self, index: usize) -> Res<&T> {
        let (row, col) = position(&self.table.shape()?, index);
        self.table.get(row, col)
    }

    pub fn get_mut(&mut self, index: usize) -> Res<&mut T> {
        let (row, col) = position(&self.table.shape()?, index);
        self.table.get_mut(row, col)
    }

    /// Reads the flat buffer without validating `index`.
    ///
    /// # Panics
    ///
    /// If the vector is uninitialized or `index` is past the end.
    pub fn get_unchecked(&self, index: usize) -> &T {
        match &self.table.storage {
            Some(storage) => &storage.data[index],
            None => panic!("{}", ArrayError::Init),
        }
    }

    /// Mutable form of [`Vector::get_unchecked`].
    pub fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        match &mut self.table.storage {
            Some(storage) => &mut storage.data[index],
            None => panic!("{}", ArrayError::Init),
        }
    }
}

impl<T: Copy> Vector<T> {
    /// Column vector copied from `data`.
    pub fn new(data: &[T]) -> Vector<T> {
        Vector::from_vec(data.to_vec())
    }

    /// Row vector copied from `data`.
    pub fn new_row(data: &[T]) -> Vector<T> {
        let shape = Shape::new(1, data.len());
        Vector::init(Table::init(data.to_vec(), shape))
    }

    // `len x 1` and `1 x len` never overflow the element count.
    pub fn same(element: T, len: usize) -> Vector<T> {
        Vector::init(Table::init(vec![element; len], Shape::new(len, 1)))
    }

    pub fn same_row(element: T, len: usize) -> Vector<T> {
        Vector::init(Table::init(vec![element; len], Shape::new(1, len)))
    }

    pub fn zeroes(len: usize) -> Vector<T>
    where
        T: Zero,
    {
        Vector::same(T::zero(), len)
    }

    pub fn zeroes_row(len: usize) -> Vector<T>
    where
        T: Zero,
    {
        Vector::same_row(T::zero(), len)
    }

    pub fn ones(len: usize) -> Vector<T>
    where
        T: One,
    {
        Vector::same(T::one(), len)
    }

    pub fn ones_row(len: usize) -> Vector<T>
    where
        T: One,
    {
        Vector::same_row(T::one(), len)
    }

    // --- Mutation ---

    /// Turns a column into a row and back.
    pub fn transpose(&mut self) -> Res<&mut Self> {
        self.table.transpose()?;
        Ok(self)
    }

    pub fn transposed(&self) -> Res<Vector<T>> {
        Ok(Vector::init(self.table.transposed()?))
    }

    pub fn add_in_place(&mut self, rhs: &Vector<T>) -> Res<&mut Self>
    where
        T: Add<Output = T>,
    {
        self.table.add_in_place(&rhs.table)?;
        Ok(self)
    }

    pub fn sub_in_place(&mut self, rhs: &Vector<T>) -> Res<&mut Self>
    where
        T: Sub<Output = T>,
    {
        self.table.sub_in_place(&rhs.table)?;
        Ok(self)
    }
}

// --- Operations for floats ---

impl<F: Float> Vector<F> {
    pub fn norm(&self) -> Res<F> {
        Ok(self.dot(self)?.sqrt())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get_unchecked(index)
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_unchecked_mut(index)
    }
}
