use num_traits::{One, Zero};
use std::ops::{Add, Sub};

use crate::{
    core::{errors::ArrayError, shape::Shape},
    Res,
};

/// Dense row-major 2-D array.
///
/// A table is either uninitialized, holding no storage at all, or initialized
/// with exactly `rows * cols` elements it owns exclusively. `Clone` always
/// deep-copies and `clone_from` is assignment: it replaces both the state and
/// the contents of the destination, writing into the existing buffer when it
/// already has room.
#[derive(PartialEq)]
pub struct Table<T> {
    pub(crate) storage: Option<Storage<T>>,
}

#[derive(PartialEq)]
pub(crate) struct Storage<T> {
    pub(crate) data: Vec<T>,
    pub(crate) shape: Shape,
}

impl<T: Clone> Clone for Storage<T> {
    fn clone(&self) -> Self {
        Storage {
            data: self.data.clone(),
            shape: self.shape,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.shape = source.shape;
    }
}

impl<T: Clone> Clone for Table<T> {
    fn clone(&self) -> Self {
        Table {
            storage: self.storage.clone(),
        }
    }

    // `Option::clone_from` keeps the allocation when both sides are `Some`.
    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from(&source.storage);
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table::empty()
    }
}

impl<T> Table<T> {
    // --- Init ---

    pub fn empty() -> Table<T> {
        Table { storage: None }
    }

    // Callers guarantee `data.len() == shape.numel()`.
    pub(crate) fn init(data: Vec<T>, shape: Shape) -> Table<T> {
        debug_assert_eq!(data.len(), shape.numel());
        Table {
            storage: Some(Storage { data, shape }),
        }
    }

    /// Takes ownership of `data` without copying it.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Res<Table<T>> {
        let shape = Shape::new(rows, cols);
        shape.valid_data_len(data.len())?;

        Ok(Table::init(data, shape))
    }

    // --- State ---

    pub fn is_initialized(&self) -> bool {
        self.storage.is_some()
    }

    pub(crate) fn storage(&self) -> Res<&Storage<T>> {
        self.storage.as_ref().ok_or(ArrayError::Init)
    }

    pub(crate) fn storage_mut(&mut self) -> Res<&mut Storage<T>> {
        self.storage.as_mut().ok_or(ArrayError::Init)
    }

    // --- Attributes ---

    pub fn shape(&self) -> Res<Shape> {
        Ok(self.storage()?.shape)
    }

    pub fn rows(&self) -> Res<usize> {
        Ok(self.storage()?.shape.rows)
    }

    pub fn cols(&self) -> Res<usize> {
        Ok(self.storage()?.shape.cols)
    }

    pub fn numel(&self) -> Res<usize> {
        Ok(self.storage()?.data.len())
    }

    pub fn data(&self) -> Res<&[T]> {
        Ok(&self.storage()?.data)
    }

    pub fn into_data(self) -> Res<Vec<T>> {
        self.storage.map(|storage| storage.data).ok_or(ArrayError::Init)
    }

    // --- Elements ---

    pub fn get(&self, row: usize, col: usize) -> Res<&T> {
        let storage = self.storage()?;
        let offset = storage.shape.valid_index(row, col)?;

        Ok(&storage.data[offset])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Res<&mut T> {
        let storage = self.storage_mut()?;
        let offset = storage.shape.valid_index(row, col)?;

        Ok(&mut storage.data[offset])
    }
}

impl<T: Copy> Table<T> {
    pub fn new(data: &[T], rows: usize, cols: usize) -> Res<Table<T>> {
        let shape = Shape::new(rows, cols);
        shape.valid_data_len(data.len())?;

        Ok(Table::init(data.to_vec(), shape))
    }

    pub fn same(element: T, rows: usize, cols: usize) -> Res<Table<T>> {
        let shape = Shape::new(rows, cols);
        let numel = shape.valid_numel()?;

        Ok(Table::init(vec![element; numel], shape))
    }

    pub fn zeroes(rows: usize, cols: usize) -> Res<Table<T>>
    where
        T: Zero,
    {
        Table::same(T::zero(), rows, cols)
    }

    pub fn ones(rows: usize, cols: usize) -> Res<Table<T>>
    where
        T: One,
    {
        Table::same(T::one(), rows, cols)
    }

    // --- Maps and Zips ---

    pub fn unary_map<R>(&self, f: impl Fn(T) -> R) -> Res<Table<R>> {
        let storage = self.storage()?;
        let data = storage.data.iter().map(|&elem| f(elem)).collect();

        Ok(Table::init(data, storage.shape))
    }

    pub fn zip<R>(&self, rhs: &Table<T>, f: impl Fn(T, T) -> R) -> Res<Table<R>> {
        let (lhs, rhs) = (self.storage()?, rhs.storage()?);
        lhs.shape.valid_elementwise(&rhs.shape)?;

        let data = lhs
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&l, &r)| f(l, r))
            .collect();

        Ok(Table::init(data, lhs.shape))
    }

    /// Validates both operands before touching `self`.
    pub fn zip_in_place(&mut self, rhs: &Table<T>, f: impl Fn(T, T) -> T) -> Res<&mut Self> {
        let rhs = rhs.storage()?;
        let lhs = self.storage_mut()?;
        lhs.shape.valid_elementwise(&rhs.shape)?;

        for (l, &r) in lhs.data.iter_mut().zip(rhs.data.iter()) {
            *l = f(*l, r);
        }

        Ok(self)
    }

    pub fn add_in_place(&mut self, rhs: &Table<T>) -> Res<&mut Self>
    where
        T: Add<Output = T>,
    {
        self.zip_in_place(rhs, |l, r| l + r)
    }

    pub fn sub_in_place(&mut self, rhs: &Table<T>) -> Res<&mut Self>
    where
        T: Sub<Output = T>,
    {
        self.zip_in_place(rhs, |l, r| l - r)
    }

    // --- Transpose ---

    pub fn transpose(&mut self) -> Res<&mut Self> {
        let storage = self.storage_mut()?;
        let Shape { rows, cols } = storage.shape;

        let data = &storage.data;
        let transposed: Vec<T> = (0..cols)
            .flat_map(move |col| (0..rows).map(move |row| data[col + row * cols]))
            .collect();

        storage.data = transposed;
        storage.shape = storage.shape.transposed();

        Ok(self)
    }

    pub fn transposed(&self) -> Res<Table<T>> {
        let mut table = self.clone();
        table.transpose()?;

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::Table;
    use crate::{ArrayError, ErrorKind, Shape, ShapeError};

    #[test]
    fn empty_is_uninitialized() {
        let table = Table::<i32>::empty();
        assert!(!table.is_initialized());
        assert_eq!(table.shape(), Err(ArrayError::Init));
        assert_eq!(table.data().map(|d| d.len()), Err(ArrayError::Init));
        assert!(Table::<i32>::default() == table);
    }

    #[test]
    fn zero_filled() -> anyhow::Result<()> {
        let table = Table::<f64>::zeroes(2, 3)?;
        assert_eq!(table.shape()?, Shape::new(2, 3));
        assert!(table.data()?.iter().all(|&x| x == 0.0));

        let degenerate = Table::<u8>::zeroes(0, 4)?;
        assert!(degenerate.is_initialized());
        assert_eq!(degenerate.numel()?, 0);

        Ok(())
    }

    #[test]
    fn overflowing_shape_rejected() {
        let half = 1 << (usize::BITS - 1);
        let overflow = Some(ArrayError::Shape(ShapeError::Overflow {
            rows: half,
            cols: 2,
        }));

        assert_eq!(Table::<u8>::zeroes(half, 2).err(), overflow);
        assert_eq!(Table::<u8>::new(&[], half, 2).err(), overflow);
        assert_eq!(Table::<u8>::from_vec(vec![], half, 2).err(), overflow);
        assert_eq!(
            Table::same(1_u8, usize::MAX, usize::MAX).map_err(|e| e.kind()).err(),
            Some(ErrorKind::Shape)
        );
    }

    #[test]
    fn from_buffer_copies() -> anyhow::Result<()> {
        let mut source = vec![1, 2, 3, 4, 5, 6];
        let table = Table::new(&source, 2, 3)?;
        source[0] = 100;

        assert_eq!(table.data()?, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(*table.get(1, 0)?, 4);

        Ok(())
    }

    #[test]
    fn from_buffer_wrong_length() {
        let err = Table::new(&[1, 2, 3], 2, 2).err();
        assert_eq!(
            err,
            Some(ArrayError::Shape(ShapeError::DataLength {
                data_len: 3,
                size: 4
            }))
        );
    }

    #[test]
    fn clone_is_deep() -> anyhow::Result<()> {
        let a = Table::new(&[1, 2, 3, 4], 2, 2)?;
        let mut b = a.clone();
        *b.get_mut(0, 0)? = 9;

        assert_eq!(*a.get(0, 0)?, 1);
        assert_ne!(a.data()?.as_ptr(), b.data()?.as_ptr());

        Ok(())
    }

    #[test]
    fn assignment_changes_state() -> anyhow::Result<()> {
        let source = Table::new(&[1, 2, 3], 1, 3)?;
        let mut target = Table::empty();

        target.clone_from(&source);
        assert_eq!(target.shape()?, Shape::new(1, 3));
        assert_eq!(target.data()?, &[1, 2, 3]);

        target.clone_from(&Table::empty());
        assert!(!target.is_initialized());

        Ok(())
    }

    #[test]
    fn assignment_reuses_buffer() -> anyhow::Result<()> {
        let mut target = Table::new(&[0, 0, 0, 0], 2, 2)?;
        let before = target.data()?.as_ptr();

        target.clone_from(&Table::new(&[5, 6, 7, 8], 4, 1)?);
        assert_eq!(target.data()?.as_ptr(), before);
        assert_eq!(target.shape()?, Shape::new(4, 1));
        assert_eq!(target.data()?, &[5, 6, 7, 8]);

        // shrinking keeps the allocation too
        target.clone_from(&Table::new(&[9], 1, 1)?);
        assert_eq!(target.data()?.as_ptr(), before);
        assert_eq!(target.data()?, &[9]);

        Ok(())
    }

    #[test]
    fn checked_access() -> anyhow::Result<()> {
        let mut table = Table::<i32>::zeroes(2, 2)?;
        *table.get_mut(1, 1)? = 7;

        assert_eq!(table.data()?, &[0, 0, 0, 7]);
        assert_eq!(table.get(2, 0).map_err(|e| e.kind()), Err(ErrorKind::Bound));
        assert_eq!(table.get(0, 2).map_err(|e| e.kind()), Err(ErrorKind::Bound));
        assert_eq!(
            Table::<i32>::empty().get(0, 0).map_err(|e| e.kind()),
            Err(ErrorKind::Init)
        );

        Ok(())
    }

    #[test]
    fn in_place_ops() -> anyhow::Result<()> {
        let mut a = Table::new(&[1, 2, 3, 4], 2, 2)?;
        let b = Table::new(&[10, 20, 30, 40], 2, 2)?;

        a.add_in_place(&b)?;
        assert_eq!(a.data()?, &[11, 22, 33, 44]);

        a.sub_in_place(&b)?.sub_in_place(&b)?;
        assert_eq!(a.data()?, &[-9, -18, -27, -36]);

        Ok(())
    }

    #[test]
    fn in_place_failure_leaves_operand() -> anyhow::Result<()> {
        let mut a = Table::new(&[1, 2, 3, 4], 2, 2)?;
        let before = a.clone();

        let wrong_shape = Table::new(&[1, 2, 3, 4], 1, 4)?;
        assert_eq!(
            a.add_in_place(&wrong_shape).map_err(|e| e.kind()).err(),
            Some(ErrorKind::Shape)
        );
        assert_eq!(
            a.add_in_place(&Table::empty()).map_err(|e| e.kind()).err(),
            Some(ErrorKind::Init)
        );
        assert!(a == before);

        Ok(())
    }

    #[test]
    fn transpose_rectangular() -> anyhow::Result<()> {
        let mut table = Table::new(&[1, 2, 3, 4, 5, 6], 2, 3)?;
        table.transpose()?;

        assert_eq!(table.shape()?, Shape::new(3, 2));
        assert_eq!(table.data()?, &[1, 4, 2, 5, 3, 6]);

        Ok(())
    }

    #[test]
    fn transposed_copy() -> anyhow::Result<()> {
        let table = Table::new(&[1, 2, 3], 1, 3)?;
        let transposed = table.transposed()?;

        assert_eq!(table.shape()?, Shape::new(1, 3));
        assert_eq!(transposed.shape()?, Shape::new(3, 1));
        assert_eq!(transposed.data()?, &[1, 2, 3]);
        assert_eq!(
            Table::<i32>::empty().transposed().err(),
            Some(ArrayError::Init)
        );

        Ok(())
    }

    #[test]
    fn maps() -> anyhow::Result<()> {
        let a = Table::new(&[1, 2, 3, 4], 2, 2)?;
        let b = Table::ones(2, 2)?;

        let doubled = a.unary_map(|x| x as f64 * 2.0)?;
        assert_eq!(doubled.data()?, &[2.0, 4.0, 6.0, 8.0]);

        let gt = a.zip(&b, |l, r| l > r)?;
        assert_eq!(gt.data()?, &[false, true, true, true]);

        Ok(())
    }

    #[test]
    fn from_vec_takes_ownership() -> anyhow::Result<()> {
        let table = Table::from_vec(vec![1.5, 2.5], 2, 1)?;
        assert_eq!(table.into_data()?, vec![1.5, 2.5]);
        assert!(Table::from_vec(vec![1, 2], 2, 2).is_err());

        Ok(())
    }
}
