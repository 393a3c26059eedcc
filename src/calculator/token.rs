use std::fmt;

use crate::variant::Variant;

/// The kind of an expression token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionTokenType {
    LeftBrace,
    RightBrace,
    LeftSquareBrace,
    RightSquareBrace,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Power,
    Equal,
    NotEqual,
    More,
    Less,
    EqualMore,
    EqualLess,
    ShiftLeft,
    ShiftRight,
    And,
    Or,
    Xor,
    Is,
    In,
    NotIn,
    Element,
    Null,
    Not,
    Like,
    NotLike,
    IsNull,
    IsNotNull,
    Comma,
    /// Unary minus, emitted after its operand.
    Unary,
    /// A function call. The preceding token holds the argument count.
    Function,
    Variable,
    Constant,
}

impl ExpressionTokenType {
    /// Looks up the operator or keyword spelled by `text`.
    ///
    /// Keywords are matched case-insensitively.
    ///
    /// # Example
    /// ```
    /// use formulary::calculator::token::ExpressionTokenType;
    ///
    /// assert_eq!(ExpressionTokenType::from_operator("<>"), Some(ExpressionTokenType::NotEqual));
    /// assert_eq!(ExpressionTokenType::from_operator("and"), Some(ExpressionTokenType::And));
    /// assert_eq!(ExpressionTokenType::from_operator("&"), None);
    /// ```
    #[must_use]
    pub fn from_operator(text: &str) -> Option<Self> {
        let kind = match text.to_uppercase().as_str() {
            "(" => Self::LeftBrace,
            ")" => Self::RightBrace,
            "[" => Self::LeftSquareBrace,
            "]" => Self::RightSquareBrace,
            "+" => Self::Plus,
            "-" => Self::Minus,
            "*" => Self::Star,
            "/" => Self::Slash,
            "%" => Self::Percent,
            "^" => Self::Power,
            "=" => Self::Equal,
            "<>" | "!=" => Self::NotEqual,
            ">" => Self::More,
            "<" => Self::Less,
            ">=" => Self::EqualMore,
            "<=" => Self::EqualLess,
            "<<" => Self::ShiftLeft,
            ">>" => Self::ShiftRight,
            "AND" => Self::And,
            "OR" => Self::Or,
            "XOR" => Self::Xor,
            "NOT" => Self::Not,
            "IS" => Self::Is,
            "IN" => Self::In,
            "NULL" => Self::Null,
            "LIKE" => Self::Like,
            "," => Self::Comma,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns how the operator is written in source text.
    ///
    /// Operand kinds have no fixed spelling and return an empty string.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::LeftBrace => "(",
            Self::RightBrace => ")",
            Self::LeftSquareBrace => "[",
            Self::RightSquareBrace => "]",
            Self::Plus => "+",
            Self::Minus | Self::Unary => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Power => "^",
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::More => ">",
            Self::Less => "<",
            Self::EqualMore => ">=",
            Self::EqualLess => "<=",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Is => "IS",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Element => "[]",
            Self::Null => "NULL",
            Self::Not => "NOT",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
            Self::Comma => ",",
            Self::Function | Self::Variable | Self::Constant => "",
        }
    }
}

impl fmt::Display for ExpressionTokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A token of a parsed expression.
///
/// Operators carry [`Variant::Null`] as value. Constants carry the constant,
/// variables and functions carry their name as a string.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionToken {
    pub kind:   ExpressionTokenType,
    pub value:  Variant,
    pub line:   usize,
    pub column: usize,
}

impl ExpressionToken {
    #[must_use]
    pub const fn new(kind: ExpressionTokenType, value: Variant, line: usize, column: usize) -> Self {
        Self { kind,
               value,
               line,
               column }
    }

    /// Creates a token that carries no value.
    #[must_use]
    pub const fn operator(kind: ExpressionTokenType, line: usize, column: usize) -> Self {
        Self::new(kind, Variant::Null, line, column)
    }

    /// Returns the name of a variable or function token.
    #[must_use]
    pub fn name(&self) -> &str {
        self.value.as_str().unwrap_or_default()
    }

    /// Returns the token as it would appear in source text.
    #[must_use]
    pub fn text(&self) -> String {
        match self.kind {
            ExpressionTokenType::Constant
            | ExpressionTokenType::Variable
            | ExpressionTokenType::Function => self.value.to_string(),
            kind => kind.symbol().to_string(),
        }
    }
}

impl fmt::Display for ExpressionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ExpressionTokenType::Constant
            | ExpressionTokenType::Variable
            | ExpressionTokenType::Function => write!(f, "{}({})", self.kind, self.value),
            kind => write!(f, "{kind}"),
        }
    }
}
