use num_traits::Zero;
use std::ops::Mul;

use crate::{
    core::{
        matrix::Matrix,
        shape::{valid_inner_len, Shape},
        table::Table,
        vector::Vector,
    },
    Res,
};

/// Naive row-by-column product of two row-major buffers.
fn product<T>(lhs: &[T], lhs_shape: Shape, rhs: &[T], rhs_shape: Shape) -> Res<Table<T>>
where
    T: Copy + Zero + Mul<Output = T>,
{
    lhs_shape.valid_inner(&rhs_shape)?;

    let (m, n, l) = (lhs_shape.rows, lhs_shape.cols, rhs_shape.cols);
    let shape = Shape::new(m, l);
    let mut data = Vec::with_capacity(shape.valid_numel()?);

    for row in 0..m {
        let lhs_row = &lhs[row * n..(row + 1) * n];

        for col in 0..l {
            let prodsum = lhs_row
                .iter()
                .enumerate()
                .fold(T::zero(), |acc, (k, &elem)| acc + elem * rhs[col + k * l]);

            data.push(prodsum);
        }
    }

    Ok(Table::init(data, shape))
}

impl<T> Matrix<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    /// `(m x n) @ (n x l) -> (m x l)`
    pub fn matmul(&self, rhs: &Matrix<T>) -> Res<Matrix<T>> {
        let (lhs, rhs) = (self.table.storage()?, rhs.table.storage()?);
        Ok(product(&lhs.data, lhs.shape, &rhs.data, rhs.shape)?.into())
    }

    /// `(m x n) @ n -> m`, as a column vector. The orientation of `rhs` is
    /// ignored.
    pub fn matvec(&self, rhs: &Vector<T>) -> Res<Vector<T>> {
        let (lhs, rhs) = (self.table.storage()?, rhs.table.storage()?);
        let column = Shape::new(rhs.data.len(), 1);

        Ok(Vector::init(product(&lhs.data, lhs.shape, &rhs.data, column)?))
    }
}

impl<T> Vector<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    /// `n @ (n x l) -> l`, as a row vector. The orientation of `self` is
    /// ignored.
    pub fn vecmat(&self, rhs: &Matrix<T>) -> Res<Vector<T>> {
        let (lhs, rhs) = (self.table.storage()?, rhs.table.storage()?);
        let row = Shape::new(1, lhs.data.len());

        Ok(Vector::init(product(&lhs.data, row, &rhs.data, rhs.shape)?))
    }

    pub fn dot(&self, rhs: &Vector<T>) -> Res<T> {
        let (lhs, rhs) = (self.table.storage()?, rhs.table.storage()?);
        valid_inner_len(lhs.data.len(), rhs.data.len())?;

        Ok(lhs
            .data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::zero(), |acc, (&l, &r)| acc + l * r))
    }
}

// --- Products ---

macro_rules! product_ops {
    ($lhs:ident, $rhs:ident, $output:ty, $method:ident) => {
        impl<T> Mul<$rhs<T>> for $lhs<T>
        where
            T: Copy + Zero + Mul<Output = T>,
        {
            type Output = Res<$output>;
            fn mul(self, rhs: $rhs<T>) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<T> Mul<&$rhs<T>> for &$lhs<T>
        where
            T: Copy + Zero + Mul<Output = T>,
        {
            type Output = Res<$output>;
            fn mul(self, rhs: &$rhs<T>) -> Self::Output {
                self.$method(rhs)
            }
        }

        impl<T> Mul<$rhs<T>> for &$lhs<T>
        where
            T: Copy + Zero + Mul<Output = T>,
        {
            type Output = Res<$output>;
            fn mul(self, rhs: $rhs<T>) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<T> Mul<&$rhs<T>> for $lhs<T>
        where
            T: Copy + Zero + Mul<Output = T>,
        {
            type Output = Res<$output>;
            fn mul(self, rhs: &$rhs<T>) -> Self::Output {
                self.$method(rhs)
            }
        }
    };
}

product_ops!(Matrix, Matrix, Matrix<T>, matmul);
product_ops!(Matrix, Vector, Vector<T>, matvec);
product_ops!(Vector, Matrix, Vector<T>, vecmat);
product_ops!(Vector, Vector, T, dot);
