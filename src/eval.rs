//! Evaluates a tiny expression language over rationals.
//!
//! ```text
//! expr    := product (cmp product)?
//! product := number ('*' number)*
//! number  := digits ('/' digits)?
//! cmp     := '==' | '!=' | '<' | '<=' | '>' | '>='
//! ```

use frac_number::Rational;
use log::debug;
use std::fmt;

mod error;
mod lex;

#[cfg(test)]
mod tests;

pub use error::{EvalError, EvalErrorKind};
use lex::{CmpOp, Token, lex};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Rational(Rational),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Value::Rational(n) => write!(fmt, "{n}"),
            Value::Bool(b) => write!(fmt, "{b}"),
        }
    }
}

pub fn eval_expr(input: &[u8]) -> Result<Value, EvalError> {
    let tokens = lex(input)?;
    debug!("eval_expr: tokens: {tokens:?}");

    if tokens.is_empty() {
        return Err(EvalError::empty_expr());
    }

    let mut cursor = 0;
    let lhs = eval_product(&tokens, &mut cursor)?;

    match tokens.get(cursor) {
        None => Ok(Value::Rational(lhs)),
        Some(Token::Cmp(op)) => {
            cursor += 1;
            let rhs = eval_product(&tokens, &mut cursor)?;

            // `1 < 2 < 3` is not allowed
            if let Some(token) = tokens.get(cursor) {
                return Err(EvalError::unexpected_token(token));
            }

            Ok(Value::Bool(op.apply(&lhs, &rhs)))
        },
        Some(token) => Err(EvalError::unexpected_token(token)),
    }
}

fn eval_product(tokens: &[Token], cursor: &mut usize) -> Result<Rational, EvalError> {
    let mut result = expect_number(tokens, cursor)?;

    while let Some(Token::Mul) = tokens.get(*cursor) {
        *cursor += 1;
        let rhs = expect_number(tokens, cursor)?;

        // an overflow is an error here, not a panic
        result.checked_mul_rat_mut(&rhs)?;
    }

    Ok(result)
}

fn expect_number(tokens: &[Token], cursor: &mut usize) -> Result<Rational, EvalError> {
    match tokens.get(*cursor) {
        Some(Token::Number(n)) => {
            *cursor += 1;
            Ok(*n)
        },
        Some(token) => Err(EvalError::unexpected_token(token)),
        None => Err(EvalError::unexpected_end()),
    }
}

impl CmpOp {
    pub fn apply(&self, lhs: &Rational, rhs: &Rational) -> bool {
        match self {
            CmpOp::Eq => lhs.eq_rat(rhs),
            CmpOp::Neq => lhs.neq_rat(rhs),
            CmpOp::Lt => lhs.lt_rat(rhs),
            CmpOp::Leq => lhs.leq_rat(rhs),
            CmpOp::Gt => lhs.gt_rat(rhs),
            CmpOp::Geq => lhs.geq_rat(rhs),
        }
    }
}
