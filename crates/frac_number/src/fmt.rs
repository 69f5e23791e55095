use crate::Rational;
use std::fmt;

impl Rational {
    /// `7/4` -> `1.75`, `3/1` -> `3`
    ///
    /// At most `max_frac_digits` digits are printed after the decimal point.
    /// If there are more, the result ends with `...` (`1/3` -> `0.333...` with 3 digits).
    pub fn to_decimal_string(&self, max_frac_digits: usize) -> String {
        let integer = self.numer / self.denom;
        let mut rem = self.numer % self.denom;

        if rem == 0 {
            return integer.to_string();
        }

        let mut frac = String::with_capacity(max_frac_digits);

        while rem != 0 && frac.len() < max_frac_digits {
            // `rem < denom`, so `rem * 10` may not fit in u64
            let r = rem as u128 * 10;
            frac.push(char::from(b'0' + (r / self.denom as u128) as u8));
            rem = (r % self.denom as u128) as u64;
        }

        let ellipsis = if rem == 0 { "" } else { "..." };

        if frac.is_empty() {
            format!("{integer}{ellipsis}")
        }

        else {
            format!("{integer}.{frac}{ellipsis}")
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}/{}", self.numer, self.denom)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Rational({}/{})", self.numer, self.denom)
    }
}
