use crate::error::RpnError;
use crate::tokenizer::{RpnToken, RpnTokenizer};

/// A tokenized expression, tokens are kept in source order.
#[derive(PartialEq, Debug, Clone)]
pub struct RpnExpr<'a> {
    pub src: &'a str,
    pub tokens: Vec<RpnToken>,
}

impl<'a> RpnExpr<'a> {
    // Text of an operand token
    pub fn lexeme(&self, from: usize, len: usize) -> Option<&'a str> {
        self.src.get(from..from + len)
    }
}

pub struct RpnParser;

impl RpnParser {
    pub fn parse_str(expr: &str) -> Result<RpnExpr<'_>, RpnError> {
        let tokens = Self::parse(&mut RpnTokenizer::new(expr.chars()))?;
        Ok(RpnExpr { src: expr, tokens })
    }

    pub fn parse(lex: &mut impl Iterator<Item = RpnToken>) -> Result<Vec<RpnToken>, RpnError> {
        let mut out = Vec::new();
        for token in lex {
            match token {
                RpnToken::Unknown { at, lexeme } => {
                    return Err(RpnError::UnexpectedChar { at, found: lexeme })
                }
                token => out.push(token),
            }
        }
        log::trace!("tokenized {} lexemes", out.len());
        Ok(out)
    }
}
