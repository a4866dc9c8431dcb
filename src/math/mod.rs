//! Numerical primitives: polynomial evaluation and least-squares solving.

mod ols;
mod poly;

pub use ols::{solve_least_squares, LsSolution};
pub use poly::{eval, vandermonde};
