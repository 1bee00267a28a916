mod elem_ops;
mod matmul;
mod scalar;
