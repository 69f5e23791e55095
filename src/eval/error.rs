use super::lex::Token;
use frac_error::RenderError;
use frac_number::NumberError;

#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    EmptyExpr,
    UnexpectedChar(char),
    UnexpectedEnd,

    /// rendered token
    UnexpectedToken(String),
    Number(NumberError),
}

impl EvalError {
    pub fn empty_expr() -> Self {
        EvalError { kind: EvalErrorKind::EmptyExpr }
    }

    pub fn unexpected_char(c: char) -> Self {
        EvalError { kind: EvalErrorKind::UnexpectedChar(c) }
    }

    pub fn unexpected_end() -> Self {
        EvalError { kind: EvalErrorKind::UnexpectedEnd }
    }

    pub(crate) fn unexpected_token(token: &Token) -> Self {
        EvalError { kind: EvalErrorKind::UnexpectedToken(token.to_string()) }
    }
}

impl From<NumberError> for EvalError {
    fn from(e: NumberError) -> Self {
        EvalError { kind: EvalErrorKind::Number(e) }
    }
}

impl RenderError for EvalError {
    fn kind_name(&self) -> String {
        match &self.kind {
            EvalErrorKind::EmptyExpr => String::from("empty expression"),
            EvalErrorKind::UnexpectedChar(_) => String::from("unexpected character"),
            EvalErrorKind::UnexpectedEnd => String::from("unexpected end of expression"),
            EvalErrorKind::UnexpectedToken(_) => String::from("unexpected token"),
            EvalErrorKind::Number(e) => e.kind_name(),
        }
    }

    fn message(&self) -> String {
        match &self.kind {
            EvalErrorKind::EmptyExpr => String::from("There's nothing to evaluate."),
            EvalErrorKind::UnexpectedChar(c) => format!("Got `{c}` while reading an expression."),
            EvalErrorKind::UnexpectedEnd => String::from("Expected a number, but the expression ended."),
            EvalErrorKind::UnexpectedToken(t) => format!("Got `{t}`, which cannot come here."),
            EvalErrorKind::Number(e) => e.message(),
        }
    }

    fn help(&self) -> String {
        match &self.kind {
            EvalErrorKind::Number(e) => e.help(),
            EvalErrorKind::UnexpectedChar(_)
            | EvalErrorKind::UnexpectedToken(_) => String::from("An expression looks like `1/3 * 2` or `1/3 < 1/2`."),
            _ => String::new(),
        }
    }
}
