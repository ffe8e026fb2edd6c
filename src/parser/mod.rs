//! Parser: maps each [`Token`](crate::lexer::Token) onto an [`OpKind`].

mod op;

pub use op::*;

use std::error::Error;
use std::fmt::Display;

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::lexer::Token;
use crate::location::Location;

static KEYWORDS: Lazy<HashMap<&'static str, OpKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("+", OpKind::Add);
    m.insert("-", OpKind::Sub);
    m.insert("=", OpKind::Eq);
    m.insert(">", OpKind::Gt);
    m.insert(">=", OpKind::Ge);
    m.insert("<", OpKind::Lt);
    m.insert("<=", OpKind::Le);
    m.insert("dump", OpKind::Dump);
    m.insert("clone", OpKind::Clone);
    m.insert("if", OpKind::If { jump: None });
    m.insert("else", OpKind::Else { jump: None });
    m.insert("end", OpKind::End { jump: None });
    m.insert("while", OpKind::While);
    m.insert("do", OpKind::Do { jump: None });
    m.insert("mem", OpKind::Mem);
    m.insert("load", OpKind::Load);
    m.insert("save", OpKind::Save);
    m.insert("syscall1", OpKind::Syscall1);
    m.insert("syscall3", OpKind::Syscall3);
    m
});

/// A token that is neither a keyword nor a valid integer literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub loc: Location,
    pub text: String,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: '{}' is neither a keyword nor an integer", self.loc, self.text)
    }
}

impl Error for ParseError {}

/// Map a single token onto an operation. The first unrecognized, non-integer
/// token is a terminal [`ParseError`] — the parser does not attempt recovery.
fn parse_token(token: Token) -> Result<Op, ParseError> {
    if let Some(kind) = KEYWORDS.get(token.value.as_str()) {
        return Ok(Op::new(kind.clone(), token.loc));
    }

    match token.value.parse::<i64>() {
        Ok(value) => Ok(Op::new(OpKind::Push(value), token.loc)),
        Err(_) => Err(ParseError {
            loc: token.loc,
            text: token.value,
        }),
    }
}

/// Lower a token stream into a [`Program`]. Stops at the first unparsable
/// token.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    tokens.into_iter().map(parse_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn token(value: &str) -> Token {
        Token::new(Rc::from("t.stax"), 0, 0, value.to_owned())
    }

    #[test]
    fn maps_every_keyword() {
        let pairs = [
            ("+", OpKind::Add),
            ("-", OpKind::Sub),
            ("=", OpKind::Eq),
            (">", OpKind::Gt),
            (">=", OpKind::Ge),
            ("<", OpKind::Lt),
            ("<=", OpKind::Le),
            ("dump", OpKind::Dump),
            ("clone", OpKind::Clone),
            ("while", OpKind::While),
            ("mem", OpKind::Mem),
            ("load", OpKind::Load),
            ("save", OpKind::Save),
            ("syscall1", OpKind::Syscall1),
            ("syscall3", OpKind::Syscall3),
        ];

        for (text, expected) in pairs {
            let op = parse_token(token(text)).unwrap();
            assert_eq!(op.kind, expected);
        }
    }

    #[test]
    fn parses_signed_integer_literal() {
        let op = parse_token(token("-42")).unwrap();
        assert_eq!(op.kind, OpKind::Push(-42));
    }

    #[test]
    fn rejects_garbage_token() {
        let err = parse_token(token("dumpster")).unwrap_err();
        assert_eq!(err.text, "dumpster");
    }

    #[test]
    fn stops_at_first_bad_token() {
        let tokens = vec![token("1"), token("+"), token("not-a-number"), token("2")];
        let err = parse(tokens).unwrap_err();
        assert_eq!(err.text, "not-a-number");
    }
}
