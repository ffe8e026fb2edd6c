//! Lexer for stax source files.
//!
//! Converts a source file into an ordered sequence of [`Token`]s. Lexing never
//! fails: an unrecognized character run is still emitted as a token and left
//! for the parser to reject.

mod token;

pub use token::*;

use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;

/// Read `path` and lex it into a token stream.
pub fn lex_file(path: &Path) -> io::Result<Vec<Token>> {
    let content = fs::read_to_string(path)?;
    let file: Rc<str> = Rc::from(path.to_string_lossy().as_ref());

    Ok(lex_str(&file, &content))
}

/// Lex `content`, attributing every token to `file`.
pub fn lex_str(file: &Rc<str>, content: &str) -> Vec<Token> {
    let mut tokens = vec![];

    for (row, line) in content.lines().enumerate() {
        let without_comment = strip_comment(line);
        lex_line(file, row, without_comment, &mut tokens);
    }

    tokens
}

/// Everything before the first `#` on a line; `#` starts a comment running to
/// end-of-line.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Split a single (comment-free) line into maximal non-whitespace runs.
fn lex_line(file: &Rc<str>, row: usize, line: &str, tokens: &mut Vec<Token>) {
    let mut col = 0;
    let chars: Vec<char> = line.chars().collect();

    while col < chars.len() {
        if chars[col].is_whitespace() {
            col += 1;
            continue;
        }

        let start = col;
        while col < chars.len() && !chars[col].is_whitespace() {
            col += 1;
        }

        let value: String = chars[start..col].iter().collect();
        tokens.push(Token::new(file.clone(), row, start, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(file: &str, content: &str) -> Vec<Token> {
        lex_str(&Rc::from(file), content)
    }

    #[test]
    fn splits_whitespace_separated_tokens() {
        let tokens = toks("t.stax", "34 35 +  dump");

        assert_eq!(
            tokens.iter().map(|t| t.value.as_str()).collect::<Vec<_>>(),
            vec!["34", "35", "+", "dump"]
        );
    }

    #[test]
    fn tracks_row_and_col() {
        let tokens = toks("t.stax", "1 2 <\n  if 10 dump end");

        assert_eq!(tokens[0].loc.row, 0);
        assert_eq!(tokens[0].loc.col, 0);
        assert_eq!(tokens[2].loc.col, 4);
        assert_eq!(tokens[3].loc.row, 1);
        assert_eq!(tokens[3].loc.col, 2);
    }

    #[test]
    fn strips_comments_to_end_of_line() {
        let tokens = toks("t.stax", "34 35 + # this adds two numbers\ndump");

        assert_eq!(
            tokens.iter().map(|t| t.value.as_str()).collect::<Vec<_>>(),
            vec!["34", "35", "+", "dump"]
        );
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(toks("t.stax", "").is_empty());
        assert!(toks("t.stax", "   \n\t\n").is_empty());
    }

    #[test]
    fn render_round_trips_token_values() {
        // lex . render (joining tokens with single spaces, omitting comments)
        // reproduces the same token sequence (property P2).
        let original = "5 while clone 0 > do clone dump 1 - end";
        let tokens = toks("t.stax", original);

        let rendered = tokens
            .iter()
            .map(|t| t.value.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let reparsed = toks("t.stax", &rendered);

        assert_eq!(
            tokens.iter().map(|t| &t.value).collect::<Vec<_>>(),
            reparsed.iter().map(|t| &t.value).collect::<Vec<_>>()
        );
    }
}
