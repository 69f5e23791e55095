use frac_error::RenderError;

#[derive(Clone, Debug, PartialEq)]
pub struct NumberError {
    pub kind: NumberErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NumberErrorKind {
    /// `numer / 0`
    DivideByZero { numer: u64 },

    /// the exact result in lowest terms doesn't fit in u64
    /// `numer` and `denom` are the reduced result
    Overflow { numer: u128, denom: u128 },

    EmptyInput,
    InvalidChar(char),

    /// `3/`
    MissingDenominator,

    /// a literal that doesn't fit in u64
    TooBig(String),
}

impl NumberError {
    pub fn divide_by_zero(numer: u64) -> Self {
        NumberError { kind: NumberErrorKind::DivideByZero { numer } }
    }

    pub fn overflow(numer: u128, denom: u128) -> Self {
        NumberError { kind: NumberErrorKind::Overflow { numer, denom } }
    }

    pub fn empty_input() -> Self {
        NumberError { kind: NumberErrorKind::EmptyInput }
    }

    pub fn invalid_char(c: char) -> Self {
        NumberError { kind: NumberErrorKind::InvalidChar(c) }
    }

    pub fn missing_denominator() -> Self {
        NumberError { kind: NumberErrorKind::MissingDenominator }
    }

    pub fn too_big(literal: &[u8]) -> Self {
        NumberError { kind: NumberErrorKind::TooBig(String::from_utf8_lossy(literal).to_string()) }
    }
}

impl RenderError for NumberError {
    fn kind_name(&self) -> String {
        match &self.kind {
            NumberErrorKind::DivideByZero { .. } => "divide by zero",
            NumberErrorKind::Overflow { .. } => "overflow",
            NumberErrorKind::EmptyInput => "empty input",
            NumberErrorKind::InvalidChar(_) => "invalid character",
            NumberErrorKind::MissingDenominator => "missing denominator",
            NumberErrorKind::TooBig(_) => "number too big",
        }.to_string()
    }

    fn message(&self) -> String {
        match &self.kind {
            NumberErrorKind::DivideByZero { numer } => format!("`{numer}/0` has a zero denominator."),
            NumberErrorKind::Overflow { numer, denom } => format!(
                "`{numer}/{denom}` cannot be represented: both parts must be at most {}.",
                u64::MAX,
            ),
            NumberErrorKind::EmptyInput => String::from("Expected a number, got nothing."),
            NumberErrorKind::InvalidChar(c) => format!("Unexpected character `{c}` in a number."),
            NumberErrorKind::MissingDenominator => String::from("A `/` must be followed by a denominator."),
            NumberErrorKind::TooBig(n) => format!("`{n}` is bigger than {}.", u64::MAX),
        }
    }

    fn help(&self) -> String {
        match &self.kind {
            NumberErrorKind::InvalidChar(_)
            | NumberErrorKind::EmptyInput => String::from("A number looks like `3` or `1/3`."),
            _ => String::new(),
        }
    }
}

impl std::fmt::Display for NumberError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}: {}", self.kind_name(), self.message())
    }
}

impl std::error::Error for NumberError {}
