use std::ops::{Add, Sub};

use crate::{
    core::{matrix::Matrix, table::Table, vector::Vector},
    Res,
};

impl<T: Copy> Matrix<T> {
    pub fn zip<R>(&self, rhs: &Matrix<T>, f: impl Fn(T, T) -> R) -> Res<Matrix<R>> {
        Ok(self.table.zip(&rhs.table, f)?.into())
    }
}

impl<T: Copy> Vector<T> {
    pub fn zip<R>(&self, rhs: &Vector<T>, f: impl Fn(T, T) -> R) -> Res<Vector<R>> {
        Ok(Vector::init(self.table.zip(&rhs.table, f)?))
    }
}

// --- Elementwise binary operations ---

macro_rules! binary_ops {
    ($type:ident, $trait:ident, $method:ident, $op:tt) => {
        impl<T> $trait for $type<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Res<$type<T>>;
            fn $method(self, rhs: $type<T>) -> Self::Output {
                self.zip(&rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait for &$type<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Res<$type<T>>;
            fn $method(self, rhs: &$type<T>) -> Self::Output {
                self.zip(rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait<$type<T>> for &$type<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Res<$type<T>>;
            fn $method(self, rhs: $type<T>) -> Self::Output {
                self.zip(&rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait<&$type<T>> for $type<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Res<$type<T>>;
            fn $method(self, rhs: &$type<T>) -> Self::Output {
                self.zip(rhs, |l, r| l $op r)
            }
        }
    };
}

binary_ops!(Table, Add, add, +);
binary_ops!(Table, Sub, sub, -);
binary_ops!(Matrix, Add, add, +);
binary_ops!(Matrix, Sub, sub, -);
binary_ops!(Vector, Add, add, +);
binary_ops!(Vector, Sub, sub, -);
