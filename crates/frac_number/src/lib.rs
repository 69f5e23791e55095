#![deny(unused_imports)]

//! An exact, non-negative rational number that is always in lowest terms.

mod cmp;
mod convert;
mod error;
mod fmt;
mod op;
mod parse;

use frac_error::RenderError;


pub use error::{NumberError, NumberErrorKind};
pub use op::scalar_mul;

// `denom` is always greater than 0.
// `gcd(numer, denom)` is always 1, so if `numer` is 0, `denom` is 1.
// Every constructor and every `_mut` method keeps this invariant,
// so `PartialEq` and `Hash` can look at the fields directly.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Rational {
    numer: u64,
    denom: u64,
}

impl Rational {
    /// Panics if `denom` is 0. Use `try_new` if `denom` comes from an untrusted source.
    pub fn new(numer: u64, denom: u64) -> Self {
        match Rational::try_new(numer, denom) {
            Ok(r) => r,
            Err(e) => panic!("{}", e.render_error()),
        }
    }

    pub fn try_new(numer: u64, denom: u64) -> Result<Self, NumberError> {
        if denom == 0 {
            return Err(NumberError::divide_by_zero(numer));
        }

        let mut result = Rational { numer, denom };
        result.normalize_mut();

        Ok(result)
    }

    pub const fn from_u64(n: u64) -> Self {
        Rational { numer: n, denom: 1 }
    }

    pub const fn zero() -> Self {
        Rational::from_u64(0)
    }

    pub const fn one() -> Self {
        Rational::from_u64(1)
    }

    pub fn numer(&self) -> u64 {
        self.numer
    }

    pub fn denom(&self) -> u64 {
        self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// (numer, denom)
    pub fn into_parts(self) -> (u64, u64) {
        (self.numer, self.denom)
    }

    // It's idempotent: calling it on a normalized value doesn't do anything.
    pub(crate) fn normalize_mut(&mut self) {
        debug_assert!(self.denom != 0);

        // gcd(0, d) = d, so 0/d becomes 0/1
        let g = gcd(self.numer, self.denom);

        if g > 1 {
            self.numer /= g;
            self.denom /= g;
        }
    }

    #[cfg(test)]
    pub(crate) fn from_raw_parts(numer: u64, denom: u64) -> Self {
        Rational { numer, denom }
    }
}

impl From<u64> for Rational {
    fn from(n: u64) -> Self {
        Rational::from_u64(n)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

// Josef Stein's binary GCD algorithm
// gcd(0, v) == v, gcd(u, 0) == u
pub fn gcd(mut u: u64, mut v: u64) -> u64 {
    if u == 0 {
        return v;
    }

    else if v == 0 {
        return u;
    }

    let shift = (u | v).trailing_zeros();
    u >>= u.trailing_zeros();

    loop {
        v >>= v.trailing_zeros();

        if u > v {
            std::mem::swap(&mut u, &mut v);
        }

        // both are odd, so `v - u` is even
        v -= u;

        if v == 0 {
            return u << shift;
        }
    }
}
