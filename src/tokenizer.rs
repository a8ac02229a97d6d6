use crate::scanner::Scanner;
use std::fmt;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A lexeme of an RPN expression. Offsets point into the tokenized source.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum RpnToken {
    /// `-?[0-9]+`, the value is only parsed once the evaluator gets to it
    Operand { from: usize, len: usize },
    Operator { at: usize, op: Operator },
    Unknown { at: usize, lexeme: char },
}

pub struct RpnTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
    failed: bool,
}

impl<I: Iterator<Item = char>> RpnTokenizer<I> {
    pub fn new(source: I) -> Self {
        RpnTokenizer {
            src: Scanner::new(source),
            failed: false,
        }
    }

    fn get_token(&mut self) -> Option<RpnToken> {
        self.src.scan_blanks();
        let at = self.src.offset();
        // numbers go first so a '-' glued to a digit is a sign, not subtraction
        if let Some(num) = self.src.scan_number() {
            return Some(RpnToken::Operand {
                from: at,
                len: num.len(),
            });
        }
        if let Some(op) = self.src.scan_math_op().and_then(Operator::from_char) {
            return Some(RpnToken::Operator { at, op });
        }
        let lexeme = self.src.next()?;
        self.src.extract();
        Some(RpnToken::Unknown { at, lexeme })
    }
}

impl<I: Iterator<Item = char>> Iterator for RpnTokenizer<I> {
    type Item = RpnToken;

    // Tokenizing stops after the first unknown lexeme
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let token = self.get_token();
        if let Some(RpnToken::Unknown { .. }) = token {
            self.failed = true;
        }
        token
    }
}
