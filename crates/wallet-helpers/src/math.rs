//! Small numeric and function-composition utilities.

use std::f64::consts::LN_2;
use std::ops::Add;

pub fn log2(x: f64) -> f64 {
    x.ln() / LN_2
}

pub fn add<T: Add<Output = T>>(x: T, y: T) -> T {
    x + y
}

/// `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| f(g(x))
}
