use std::ops::Mul;

use crate::{
    core::{matrix::Matrix, table::Table, vector::Vector},
    Res,
};

impl<T> Table<T>
where
    T: Copy + Mul<Output = T>,
{
    pub fn scale<S: Into<T>>(&self, scalar: S) -> Res<Table<T>> {
        let scalar = scalar.into();
        self.unary_map(|elem| elem * scalar)
    }
}

impl<T> Matrix<T>
where
    T: Copy + Mul<Output = T>,
{
    pub fn scale<S: Into<T>>(&self, scalar: S) -> Res<Matrix<T>> {
        Ok(self.table.scale(scalar)?.into())
    }
}

impl<T> Vector<T>
where
    T: Copy + Mul<Output = T>,
{
    pub fn scale<S: Into<T>>(&self, scalar: S) -> Res<Vector<T>> {
        Ok(Vector::init(self.table.scale(scalar)?))
    }
}

// --- Array * scalar ---

macro_rules! scalar_rhs_ops {
    ($type:ident) => {
        impl<T> Mul<T> for $type<T>
        where
            T: Copy + Mul<Output = T>,
        {
            type Output = Res<$type<T>>;
            fn mul(self, rhs: T) -> Self::Output {
                self.scale(rhs)
            }
        }

        impl<T> Mul<T> for &$type<T>
        where
            T: Copy + Mul<Output = T>,
        {
            type Output = Res<$type<T>>;
            fn mul(self, rhs: T) -> Self::Output {
                self.scale(rhs)
            }
        }
    };
}

scalar_rhs_ops!(Matrix);
scalar_rhs_ops!(Vector);

// --- Scalar * array, per primitive to bypass the orphan rule ---

macro_rules! scalar_lhs_ops {
    ($($scalar:ty),*) => {
        $(
            impl Mul<Matrix<$scalar>> for $scalar {
                type Output = Res<Matrix<$scalar>>;
                fn mul(self, rhs: Matrix<$scalar>) -> Self::Output {
                    rhs.scale(self)
                }
            }

            impl Mul<&Matrix<$scalar>> for $scalar {
                type Output = Res<Matrix<$scalar>>;
                fn mul(self, rhs: &Matrix<$scalar>) -> Self::Output {
                    rhs.scale(self)
                }
            }

            impl Mul<Vector<$scalar>> for $scalar {
                type Output = Res<Vector<$scalar>>;
                fn mul(self, rhs: Vector<$scalar>) -> Self::Output {
                    rhs.scale(self)
                }
            }

            impl Mul<&Vector<$scalar>> for $scalar {
                type Output = Res<Vector<$scalar>>;
                fn mul(self, rhs: &Vector<$scalar>) -> Self::Output {
                    rhs.scale(self)
                }
            }
        )*
    };
}

scalar_lhs_ops!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
