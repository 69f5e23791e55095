use crate::{NumberError, Rational};
use std::str::FromStr;

enum ParseState {
    Numer,
    Denom,
}

impl Rational {
    /// It accepts `3`, `1/3` and ` 1 / 3 `. Zero denominators are rejected.
    pub fn from_string(s: &[u8]) -> Result<Self, NumberError> {
        let s = trim_ascii_whitespace(s);

        if s.is_empty() {
            return Err(NumberError::empty_input());
        }

        let mut numer = Vec::with_capacity(s.len());
        let mut denom = vec![];
        let mut curr_state = ParseState::Numer;

        for c in s.iter() {
            match curr_state {
                ParseState::Numer => {
                    if *c == b'/' {
                        curr_state = ParseState::Denom;
                    }

                    else {
                        numer.push(*c);
                    }
                },
                ParseState::Denom => {
                    denom.push(*c);
                },
            }
        }

        let numer = trim_ascii_whitespace(&numer);

        match curr_state {
            ParseState::Numer => Ok(Rational::from_u64(parse_u64(numer)?)),
            ParseState::Denom => {
                if numer.is_empty() {
                    return Err(NumberError::invalid_char('/'));
                }

                let denom = trim_ascii_whitespace(&denom);

                if denom.is_empty() {
                    return Err(NumberError::missing_denominator());
                }

                Rational::try_new(parse_u64(numer)?, parse_u64(denom)?)
            },
        }
    }
}

impl FromStr for Rational {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, NumberError> {
        Rational::from_string(s.as_bytes())
    }
}

fn parse_u64(digits: &[u8]) -> Result<u64, NumberError> {
    let mut result = 0u64;
    let mut too_big = false;

    for c in String::from_utf8_lossy(digits).chars() {
        match c.to_digit(10) {
            Some(d) => match result.checked_mul(10).and_then(|n| n.checked_add(d as u64)) {
                Some(n) => {
                    result = n;
                },
                None => {
                    too_big = true;
                },
            },

            // `1 2` is not a number
            _ => {
                return Err(NumberError::invalid_char(c));
            },
        }
    }

    if too_big {
        Err(NumberError::too_big(digits))
    }

    else {
        Ok(result)
    }
}

fn trim_ascii_whitespace(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|c| !c.is_ascii_whitespace()).unwrap_or(s.len());
    let end = s.iter().rposition(|c| !c.is_ascii_whitespace()).map(|i| i + 1).unwrap_or(start);

    &s[start..end.max(start)]
}
