use std::fmt;

/// The kind of a raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A character no state recognized.
    Unknown,
    /// The end of the input.
    Eof,
    /// A line break, used by line oriented tokenizers.
    Eol,
    /// A number with a fractional part or an exponent.
    Float,
    /// A whole decimal number.
    Integer,
    /// A hexadecimal number such as `0x1F`.
    HexDecimal,
    /// Any number, when numbers are unified.
    Number,
    /// An operator or punctuation character sequence.
    Symbol,
    /// A quoted string.
    Quoted,
    /// An identifier or plain word.
    Word,
    /// A reserved word.
    Keyword,
    /// A run of whitespace characters.
    Whitespace,
    /// A comment.
    Comment,
    /// A token with a meaning defined by a custom state.
    Special,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "Unknown",
            Self::Eof => "Eof",
            Self::Eol => "Eol",
            Self::Float => "Float",
            Self::Integer => "Integer",
            Self::HexDecimal => "HexDecimal",
            Self::Number => "Number",
            Self::Symbol => "Symbol",
            Self::Quoted => "Quoted",
            Self::Word => "Word",
            Self::Keyword => "Keyword",
            Self::Whitespace => "Whitespace",
            Self::Comment => "Comment",
            Self::Special => "Special",
        };
        f.write_str(name)
    }
}

/// A raw token produced by a tokenizer.
///
/// `line` and `column` point at the first character of the token. The value
/// of an `Eof` token is empty and its position lies just past the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind:   TokenType,
    /// The text of the token.
    pub value:  String,
    /// The source line of the first character.
    pub line:   usize,
    /// The source column of the first character.
    pub column: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenType, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               value: value.into(),
               line,
               column }
    }

    /// Tests whether the token has the given kind and text.
    ///
    /// Positions are ignored, which makes this convenient for comparing
    /// token streams.
    #[must_use]
    pub fn is(&self, kind: TokenType, value: &str) -> bool {
        self.kind == kind && self.value == value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
