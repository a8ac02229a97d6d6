pub mod bits;
mod error;
mod parser;
mod rpneval;
mod scanner;
mod tokenizer;

pub use crate::error::RpnError;
pub use crate::parser::{RpnExpr, RpnParser};
pub use crate::rpneval::eval;
pub use crate::tokenizer::{Operator, RpnToken, RpnTokenizer};

/// Integer type of RPN operands and results.
#[cfg(not(feature = "int64"))]
pub type Int = i32;
#[cfg(feature = "int64")]
pub type Int = i64;

/// Evaluates a blank separated reverse polish notation expression,
/// eg: `"2 -2 *"` evaluates to `-4`.
///
/// Any malformed input yields `None`.
pub fn parse(input: &str) -> Option<Int> {
    match try_parse(input) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("rejecting {:?}: {}", input, err);
            None
        }
    }
}

/// Like [`parse`] but reports why the expression was rejected.
pub fn try_parse(input: &str) -> Result<Int, RpnError> {
    eval(&RpnParser::parse_str(input)?)
}
