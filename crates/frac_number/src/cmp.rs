use crate::Rational;
use std::cmp::Ordering;

// `lt_rat` and `eq_rat` are the only primitives. Every other
// comparison, including `Ord`, is derived from the two.
impl Rational {
    pub fn lt_rat(&self, other: &Rational) -> bool {
        // denoms are always positive, so cross-multiplying doesn't flip the order
        // u64 * u64 always fits in u128
        (self.numer as u128) * (other.denom as u128) < (other.numer as u128) * (self.denom as u128)
    }

    pub fn eq_rat(&self, other: &Rational) -> bool {
        // both sides are in lowest terms
        self.numer == other.numer && self.denom == other.denom
    }

    pub fn gt_rat(&self, other: &Rational) -> bool {
        other.lt_rat(self)
    }

    pub fn leq_rat(&self, other: &Rational) -> bool {
        self.lt_rat(other) || self.eq_rat(other)
    }

    pub fn geq_rat(&self, other: &Rational) -> bool {
        self.gt_rat(other) || self.eq_rat(other)
    }

    pub fn neq_rat(&self, other: &Rational) -> bool {
        !self.eq_rat(other)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.lt_rat(other) {
            Ordering::Less
        }

        else if self.eq_rat(other) {
            Ordering::Equal
        }

        else {
            Ordering::Greater
        }
    }
}
