//! Operator tokens carried by expression nodes
//!
//! Every operator set is closed by the grammar. Each enum parses from its
//! source token and serializes back to it, so Babel JSON such as
//! `"operator": "instanceof"` maps straight onto a variant.

use crate::error::{ErrorKind, ParensError};
use std::fmt;
use std::str::FromStr;

macro_rules! operator_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $($variant:ident => $token:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every operator of this kind, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The source token for this operator
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ParensError;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                match token {
                    $($token => Ok($name::$variant),)+
                    _ => Err(ParensError::new(
                        ErrorKind::UnknownOperator,
                        format!("unknown {} operator `{}`", $what, token),
                    )),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParensError;

            fn try_from(token: String) -> Result<Self, Self::Error> {
                token.parse()
            }
        }

        impl From<$name> for String {
            fn from(op: $name) -> Self {
                op.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

operator_enum! {
    /// Operators of a `BinaryExpression`
    BinaryOperator, "binary" {
        BitOr => "|",
        BitXor => "^",
        BitAnd => "&",
        Equal => "==",
        StrictEqual => "===",
        NotEqual => "!=",
        StrictNotEqual => "!==",
        Less => "<",
        Greater => ">",
        LessEqual => "<=",
        GreaterEqual => ">=",
        In => "in",
        InstanceOf => "instanceof",
        ShiftLeft => "<<",
        ShiftRight => ">>",
        UnsignedShiftRight => ">>>",
        Add => "+",
        Subtract => "-",
        Multiply => "*",
        Divide => "/",
        Modulo => "%",
        Exponent => "**",
    }
}

operator_enum! {
    /// Operators of a `LogicalExpression`
    LogicalOperator, "logical" {
        Or => "||",
        And => "&&",
    }
}

operator_enum! {
    /// Prefix operators of a `UnaryExpression`
    UnaryOperator, "unary" {
        Minus => "-",
        Plus => "+",
        Not => "!",
        BitNot => "~",
        TypeOf => "typeof",
        Void => "void",
        Delete => "delete",
    }
}

operator_enum! {
    /// Operators of an `UpdateExpression`
    UpdateOperator, "update" {
        Increment => "++",
        Decrement => "--",
    }
}

operator_enum! {
    /// Operators of an `AssignmentExpression`
    AssignmentOperator, "assignment" {
        Assign => "=",
        AddAssign => "+=",
        SubtractAssign => "-=",
        MultiplyAssign => "*=",
        DivideAssign => "/=",
        ModuloAssign => "%=",
        ExponentAssign => "**=",
        ShiftLeftAssign => "<<=",
        ShiftRightAssign => ">>=",
        UnsignedShiftRightAssign => ">>>=",
        BitOrAssign => "|=",
        BitXorAssign => "^=",
        BitAndAssign => "&=",
    }
}

impl UnaryOperator {
    /// Keyword operators need a space before their argument
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            UnaryOperator::TypeOf | UnaryOperator::Void | UnaryOperator::Delete
        )
    }
}
