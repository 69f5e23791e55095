use crate::{NumberError, Rational, gcd};
use frac_error::RenderError;
use std::ops::{Mul, MulAssign};

impl Rational {
    /// Panics if the result doesn't fit in `Rational`.
    pub fn mul_u64_mut(&mut self, coeff: u64) {
        if let Err(e) = self.checked_mul_u64_mut(coeff) {
            panic!("{}", e.render_error());
        }
    }

    /// Panics if the result doesn't fit in `Rational`.
    pub fn mul_rat_mut(&mut self, other: &Rational) {
        if let Err(e) = self.checked_mul_rat_mut(other) {
            panic!("{}", e.render_error());
        }
    }

    pub fn checked_mul_u64_mut(&mut self, coeff: u64) -> Result<(), NumberError> {
        self.checked_mul_rat_mut(&Rational::from_u64(coeff))
    }

    /// `self` is not modified when it returns an error.
    pub fn checked_mul_rat_mut(&mut self, other: &Rational) -> Result<(), NumberError> {
        // both operands are in lowest terms, so cancelling the cross factors
        // first gives a result that's already in lowest terms
        let g1 = gcd(self.numer, other.denom);
        let g2 = gcd(other.numer, self.denom);

        let numer = (self.numer / g1) as u128 * (other.numer / g2) as u128;
        let denom = (self.denom / g2) as u128 * (other.denom / g1) as u128;

        match (u64::try_from(numer), u64::try_from(denom)) {
            (Ok(n), Ok(d)) => {
                self.numer = n;
                self.denom = d;
                self.normalize_mut();

                Ok(())
            },
            _ => Err(NumberError::overflow(numer, denom)),
        }
    }

    // The methods below never touch the fields. They copy `self` and call the `_mut` ones.

    pub fn mul_u64(&self, coeff: u64) -> Rational {
        let mut result = *self;
        result.mul_u64_mut(coeff);

        result
    }

    pub fn mul_rat(&self, other: &Rational) -> Rational {
        let mut result = *self;
        result.mul_rat_mut(other);

        result
    }

    pub fn checked_mul_u64(&self, coeff: u64) -> Result<Rational, NumberError> {
        let mut result = *self;
        result.checked_mul_u64_mut(coeff)?;

        Ok(result)
    }

    pub fn checked_mul_rat(&self, other: &Rational) -> Result<Rational, NumberError> {
        let mut result = *self;
        result.checked_mul_rat_mut(other)?;

        Ok(result)
    }
}

/// `scalar_mul(c, r)` is always equal to `r.mul_u64(c)`.
pub fn scalar_mul(coeff: u64, r: &Rational) -> Rational {
    r.mul_u64(coeff)
}

/// Panics on overflow. Use `checked_mul_*` to get an error instead.
impl MulAssign<u64> for Rational {
    fn mul_assign(&mut self, coeff: u64) {
        self.mul_u64_mut(coeff);
    }
}

/// Panics on overflow. Use `checked_mul_*` to get an error instead.
impl MulAssign<Rational> for Rational {
    fn mul_assign(&mut self, other: Rational) {
        self.mul_rat_mut(&other);
    }
}

/// Panics on overflow. Use `checked_mul_*` to get an error instead.
impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, other: &Rational) {
        self.mul_rat_mut(other);
    }
}

/// Panics on overflow. Use `checked_mul_*` to get an error instead.
impl Mul<u64> for Rational {
    type Output = Rational;

    fn mul(self, coeff: u64) -> Rational {
        self.mul_u64(coeff)
    }
}

/// Panics on overflow. Use `checked_mul_*` to get an error instead.
impl Mul<Rational> for u64 {
    type Output = Rational;

    fn mul(self, r: Rational) -> Rational {
        scalar_mul(self, &r)
    }
}

/// Panics on overflow. Use `checked_mul_*` to get an error instead.
impl Mul<Rational> for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Rational {
        self.mul_rat(&other)
    }
}
