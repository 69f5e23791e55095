use super::EvalError;
use frac_number::Rational;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(Rational),
    Mul,
    Cmp(CmpOp),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CmpOp {
    Eq,
    Neq,
    Lt,
    Leq,
    Gt,
    Geq,
}

enum LexState {
    Init,

    // digits and `/`s
    // whitespace around `/` is skipped: `1 / 3` is `1/3`
    Number,
}

pub fn lex(input: &[u8]) -> Result<Vec<Token>, EvalError> {
    let mut tokens = vec![];
    let mut curr_state = LexState::Init;
    let mut buffer = vec![];
    let mut index = 0;

    while index < input.len() {
        let c = input[index];

        match curr_state {
            LexState::Init => match c {
                b'0'..=b'9' | b'/' => {
                    buffer.push(c);
                    curr_state = LexState::Number;
                },
                b'*' => {
                    tokens.push(Token::Mul);
                },
                b'=' | b'!' | b'<' | b'>' => {
                    let followed_by_eq = input.get(index + 1) == Some(&b'=');

                    let op = match (c, followed_by_eq) {
                        (b'=', true) => CmpOp::Eq,
                        (b'!', true) => CmpOp::Neq,
                        (b'<', true) => CmpOp::Leq,
                        (b'>', true) => CmpOp::Geq,
                        (b'<', false) => CmpOp::Lt,
                        (b'>', false) => CmpOp::Gt,

                        // a lone `=` or `!`
                        _ => {
                            return Err(EvalError::unexpected_char(c as char));
                        },
                    };

                    if followed_by_eq {
                        index += 1;
                    }

                    tokens.push(Token::Cmp(op));
                },
                c if c.is_ascii_whitespace() => {},
                _ => {
                    return Err(EvalError::unexpected_char(char_at(input, index)));
                },
            },
            LexState::Number => match c {
                b'0'..=b'9' | b'/' => {
                    buffer.push(c);
                },
                c if c.is_ascii_whitespace() && continues_number(input, index, &buffer) => {},
                _ => {
                    tokens.push(Token::Number(Rational::from_string(&buffer)?));
                    buffer.clear();
                    curr_state = LexState::Init;

                    // `c` is not consumed
                    continue;
                },
            },
        }

        index += 1;
    }

    if let LexState::Number = curr_state {
        tokens.push(Token::Number(Rational::from_string(&buffer)?));
    }

    Ok(tokens)
}

// `1 / 3`, `1 /3` and `1/ 3` are single numbers, but `1 3` is not
fn continues_number(input: &[u8], index: usize, buffer: &[u8]) -> bool {
    let next = input[index..].iter().find(|c| !c.is_ascii_whitespace());

    match (buffer.last(), next) {
        (_, Some(b'/')) => true,
        (Some(b'/'), Some(b'0'..=b'9')) => true,
        _ => false,
    }
}

// `input` may not be valid utf-8
fn char_at(input: &[u8], index: usize) -> char {
    String::from_utf8_lossy(&input[index..]).chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl fmt::Display for Token {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Token::Number(n) => write!(fmt, "{n}"),
            Token::Mul => write!(fmt, "*"),
            Token::Cmp(op) => write!(fmt, "{op}"),
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            CmpOp::Eq => "==",
            CmpOp::Neq => "!=",
            CmpOp::Lt => "<",
            CmpOp::Leq => "<=",
            CmpOp::Gt => ">",
            CmpOp::Geq => ">=",
        };

        write!(fmt, "{s}")
    }
}
