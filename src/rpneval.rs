use crate::error::RpnError;
use crate::parser::RpnExpr;
use crate::tokenizer::{Operator, RpnToken};
use crate::Int;

impl Operator {
    // Checked so that overflow and division by zero become errors, not panics
    fn apply(self, at: usize, l: Int, r: Int) -> Result<Int, RpnError> {
        let result = match self {
            Operator::Add => l.checked_add(r),
            Operator::Sub => l.checked_sub(r),
            Operator::Mul => l.checked_mul(r),
            Operator::Div if r == 0 => return Err(RpnError::DivisionByZero { at }),
            // truncates toward zero
            Operator::Div => l.checked_div(r),
        };
        result.ok_or(RpnError::Overflow { at, op: self })
    }
}

/// Runs a tokenized expression through the operand stack.
pub fn eval(rpn: &RpnExpr<'_>) -> Result<Int, RpnError> {
    let mut operands: Vec<Int> = Vec::new();

    for token in rpn.tokens.iter() {
        log::trace!("{:?} stack={:?}", token, operands);
        match *token {
            RpnToken::Operand { from, len } => {
                let lexeme = rpn.lexeme(from, len).unwrap_or_default();
                let num = lexeme
                    .parse::<Int>()
                    .map_err(|_| RpnError::OperandOutOfRange {
                        at: from,
                        lexeme: lexeme.to_string(),
                    })?;
                operands.push(num);
            }
            RpnToken::Operator { at, op } => {
                let r = operands.pop().ok_or(RpnError::MissingOperands { at, op })?;
                let l = operands.pop().ok_or(RpnError::MissingOperands { at, op })?;
                operands.push(op.apply(at, l, r)?);
            }
            RpnToken::Unknown { at, lexeme } => {
                return Err(RpnError::UnexpectedChar { at, found: lexeme })
            }
        }
    }

    match operands.len() {
        0 => Err(RpnError::Empty),
        1 => operands.pop().ok_or(RpnError::Empty),
        n => Err(RpnError::LeftoverOperands(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::eval;
    use crate::error::RpnError;
    use crate::parser::RpnParser;
    use crate::tokenizer::Operator;
    use crate::Int;
    use test_log::test;

    fn eval_str(expr: &str) -> Result<Int, RpnError> {
        eval(&RpnParser::parse_str(expr)?)
    }

    #[test]
    fn test_eval1() {
        assert_eq!(eval_str("3 4 2 * 1 5 - / +"), Ok(1));
    }

    #[test]
    fn test_eval2() {
        // pop order: first pop is the right hand side
        assert_eq!(eval_str("10 3 -"), Ok(7));
        assert_eq!(eval_str("3 10 -"), Ok(-7));
        assert_eq!(eval_str("7 2 /"), Ok(3));
        assert_eq!(eval_str("-7 2 /"), Ok(-3));
    }

    #[test]
    fn test_eval_single_operand() {
        assert_eq!(eval_str("42"), Ok(42));
        assert_eq!(eval_str("  -0 "), Ok(0));
    }

    #[test]
    fn missing_operands() {
        assert_eq!(
            eval_str("+"),
            Err(RpnError::MissingOperands { at: 0, op: Operator::Add })
        );
        assert_eq!(
            eval_str("1 *"),
            Err(RpnError::MissingOperands { at: 2, op: Operator::Mul })
        );
    }

    #[test]
    fn structural_errors() {
        assert_eq!(eval_str(""), Err(RpnError::Empty));
        assert_eq!(eval_str("1 1 1 +"), Err(RpnError::LeftoverOperands(2)));
    }

    #[test]
    fn arithmetic_errors() {
        assert_eq!(eval_str("1 0 /"), Err(RpnError::DivisionByZero { at: 4 }));
        let min_div = format!("{} -1 /", Int::MIN);
        assert!(matches!(
            eval_str(&min_div),
            Err(RpnError::Overflow { op: Operator::Div, .. })
        ));
        let max_add = format!("{} 1 +", Int::MAX);
        assert!(matches!(
            eval_str(&max_add),
            Err(RpnError::Overflow { op: Operator::Add, .. })
        ));
    }

    #[test]
    fn operand_out_of_range() {
        let too_big = format!("{}", Int::MAX as i128 + 1);
        assert_eq!(
            eval_str(&too_big),
            Err(RpnError::OperandOutOfRange {
                at: 0,
                lexeme: too_big.clone(),
            })
        );
        let min = format!("{}", Int::MIN);
        assert_eq!(eval_str(&min), Ok(Int::MIN));
    }
}
