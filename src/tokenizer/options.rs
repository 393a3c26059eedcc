/// Switches that control how a [`Tokenizer`](super::Tokenizer) post-processes
/// the tokens its states produce.
///
/// The value is immutable once handed to a tokenizer. Build it with the
/// consuming setters:
///
/// ```
/// use formulary::tokenizer::TokenizerOptions;
///
/// let options = TokenizerOptions::new().skip_whitespaces(true)
///                                      .skip_eof(true);
/// assert!(options.skips_whitespaces());
/// assert!(!options.decodes_strings());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct TokenizerOptions {
    skip_unknown:      bool,
    skip_whitespaces:  bool,
    skip_comments:     bool,
    skip_eof:          bool,
    merge_whitespaces: bool,
    unify_numbers:     bool,
    decode_strings:    bool,
}

impl TokenizerOptions {
    /// Creates options with every switch turned off.
    #[must_use]
    pub const fn new() -> Self {
        Self { skip_unknown:      false,
               skip_whitespaces:  false,
               skip_comments:     false,
               skip_eof:          false,
               merge_whitespaces: false,
               unify_numbers:     false,
               decode_strings:    false, }
    }

    /// Drops tokens no state recognized.
    #[must_use]
    pub const fn skip_unknown(mut self, value: bool) -> Self {
        self.skip_unknown = value;
        self
    }

    /// Drops whitespace tokens.
    #[must_use]
    pub const fn skip_whitespaces(mut self, value: bool) -> Self {
        self.skip_whitespaces = value;
        self
    }

    /// Drops comment tokens.
    #[must_use]
    pub const fn skip_comments(mut self, value: bool) -> Self {
        self.skip_comments = value;
        self
    }

    /// Suppresses the trailing `Eof` token.
    #[must_use]
    pub const fn skip_eof(mut self, value: bool) -> Self {
        self.skip_eof = value;
        self
    }

    /// Replaces the text of every whitespace token with a single space.
    #[must_use]
    pub const fn merge_whitespaces(mut self, value: bool) -> Self {
        self.merge_whitespaces = value;
        self
    }

    /// Reports integers, floats, and hexadecimals as `Number` tokens.
    #[must_use]
    pub const fn unify_numbers(mut self, value: bool) -> Self {
        self.unify_numbers = value;
        self
    }

    /// Decodes quoted strings through the quote state.
    #[must_use]
    pub const fn decode_strings(mut self, value: bool) -> Self {
        self.decode_strings = value;
        self
    }

    #[must_use]
    pub const fn skips_unknown(&self) -> bool {
        self.skip_unknown
    }

    #[must_use]
    pub const fn skips_whitespaces(&self) -> bool {
        self.skip_whitespaces
    }

    #[must_use]
    pub const fn skips_comments(&self) -> bool {
        self.skip_comments
    }

    #[must_use]
    pub const fn skips_eof(&self) -> bool {
        self.skip_eof
    }

    #[must_use]
    pub const fn merges_whitespaces(&self) -> bool {
        self.merge_whitespaces
    }

    #[must_use]
    pub const fn unifies_numbers(&self) -> bool {
        self.unify_numbers
    }

    #[must_use]
    pub const fn decodes_strings(&self) -> bool {
        self.decode_strings
    }
}
