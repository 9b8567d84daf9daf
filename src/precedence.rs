//! Operator precedence table for binary and logical operators.
//!
//! Higher ranks bind tighter. Operators sharing a rank group left to right.
//!
//! | rank | operators |
//! |------|-----------|
//! | 0    | `\|\|` |
//! | 1    | `&&` |
//! | 2    | `\|` |
//! | 3    | `^` |
//! | 4    | `&` |
//! | 5    | `==` `===` `!=` `!==` |
//! | 6    | `<` `>` `<=` `>=` `in` `instanceof` |
//! | 7    | `<<` `>>` `>>>` |
//! | 8    | `+` `-` |
//! | 9    | `*` `/` `%` |
//! | 10   | `**` |

use crate::ast::{BinaryOperator, LogicalOperator};
use crate::error::{ErrorKind, ParensError, Result};

impl LogicalOperator {
    pub fn precedence(self) -> u8 {
        match self {
            LogicalOperator::Or => 0,
            LogicalOperator::And => 1,
        }
    }
}

impl BinaryOperator {
    pub fn precedence(self) -> u8 {
        use BinaryOperator::*;
        match self {
            BitOr => 2,
            BitXor => 3,
            BitAnd => 4,
            Equal | StrictEqual | NotEqual | StrictNotEqual => 5,
            Less | Greater | LessEqual | GreaterEqual | In | InstanceOf => 6,
            ShiftLeft | ShiftRight | UnsignedShiftRight => 7,
            Add | Subtract => 8,
            Multiply | Divide | Modulo => 9,
            Exponent => 10,
        }
    }
}

/// Look up the rank of a raw operator token
///
/// Tokens outside the table are an error; no default rank is ever assumed.
pub fn of_token(token: &str) -> Result<u8> {
    if let Ok(op) = token.parse::<LogicalOperator>() {
        return Ok(op.precedence());
    }
    if let Ok(op) = token.parse::<BinaryOperator>() {
        return Ok(op.precedence());
    }
    Err(
        ParensError::new(ErrorKind::UnknownOperator, format!("no precedence for `{}`", token))
            .with_note("only binary and logical operators have a precedence rank"),
    )
}
