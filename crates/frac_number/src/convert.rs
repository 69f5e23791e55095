use crate::Rational;
use hmath::{BigInt, Ratio};

impl Rational {
    /// `hmath::Ratio` is arbitrary precision, so it's lossless.
    pub fn into_hmath_ratio(&self) -> Ratio {
        Ratio::from_denom_and_numer(
            BigInt::from(self.denom),
            BigInt::from(self.numer),
        )
    }
}

impl From<Rational> for Ratio {
    fn from(r: Rational) -> Ratio {
        r.into_hmath_ratio()
    }
}
