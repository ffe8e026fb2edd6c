use std::fmt::Display;
use std::rc::Rc;

/// A position in a source file, 0-based in both `row` and `col`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: Rc<str>,
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(file: Rc<str>, row: usize, col: usize) -> Self {
        Self { file, row, col }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.row, self.col)
    }
}
