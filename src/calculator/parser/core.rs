use tracing::debug;

use crate::{
    calculator::{
        parser::{binary::parse_expression, lexical::complete_lexical_analysis},
        token::{ExpressionToken, ExpressionTokenType},
    },
    error::SyntaxError,
    tokenizer::{Token, TokenType, Tokenizer, TokenizerOptions},
    variant::Variant,
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Maximum nesting of groups, calls, indexes, and `NOT` operators.
pub const MAX_DEPTH: usize = 256;

/// Parses expressions into result tokens in reverse Polish order.
///
/// The parser keeps the source text together with every list derived from
/// it:
/// - the raw tokens produced by the expression tokenizer;
/// - the initial expression tokens after lexical analysis;
/// - the result tokens, ready for evaluation;
/// - the names of all variables, in order of first appearance.
///
/// # Example
/// ```
/// use formulary::calculator::{parser::ExpressionParser, token::ExpressionTokenType};
///
/// let mut parser = ExpressionParser::new();
/// parser.parse_string("a + b * a").unwrap();
///
/// let kinds: Vec<ExpressionTokenType> = parser.result_tokens().iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![ExpressionTokenType::Variable,
///                 ExpressionTokenType::Variable,
///                 ExpressionTokenType::Variable,
///                 ExpressionTokenType::Star,
///                 ExpressionTokenType::Plus]);
/// assert_eq!(parser.variable_names(), ["a", "b"]);
/// ```
#[derive(Debug)]
pub struct ExpressionParser {
    tokenizer:       Tokenizer,
    expression:      String,
    original_tokens: Vec<Token>,
    initial_tokens:  Vec<ExpressionToken>,
    result_tokens:   Vec<ExpressionToken>,
    variable_names:  Vec<String>,
}

impl ExpressionParser {
    #[must_use]
    pub fn new() -> Self {
        let options = TokenizerOptions::new().skip_whitespaces(true)
                                             .skip_comments(true)
                                             .decode_strings(true);
        Self { tokenizer:       Tokenizer::expression().with_options(options),
               expression:      String::new(),
               original_tokens: Vec::new(),
               initial_tokens:  Vec::new(),
               result_tokens:   Vec::new(),
               variable_names:  Vec::new(), }
    }

    /// Returns the parsed source text.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Returns the raw tokens of the expression.
    #[must_use]
    pub fn original_tokens(&self) -> &[Token] {
        &self.original_tokens
    }

    /// Returns the expression tokens in source order.
    #[must_use]
    pub fn initial_tokens(&self) -> &[ExpressionToken] {
        &self.initial_tokens
    }

    /// Returns the expression tokens in evaluation order.
    #[must_use]
    pub fn result_tokens(&self) -> &[ExpressionToken] {
        &self.result_tokens
    }

    /// Returns the distinct variable names, in order of first appearance.
    #[must_use]
    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    /// Parses `expression`, replacing everything derived from the previous
    /// one.
    ///
    /// Surrounding whitespace is ignored. An empty expression parses to an
    /// empty token list.
    ///
    /// On failure the source text is kept and all derived lists are empty.
    pub fn parse_string(&mut self, expression: &str) -> ParseResult<()> {
        self.clear();
        self.expression = expression.trim().to_string();

        let tokens = if self.expression.is_empty() {
            Vec::new()
        } else {
            self.tokenizer.tokenize(&self.expression)
        };
        self.perform_parsing(tokens)
    }

    /// Parses a token list produced by some tokenizer.
    ///
    /// The source text becomes the concatenated token values.
    pub fn parse_tokens(&mut self, tokens: &[Token]) -> ParseResult<()> {
        self.clear();
        self.expression = tokens.iter().map(|token| token.value.as_str()).collect();
        self.perform_parsing(tokens.to_vec())
    }

    /// Forgets the source text and everything derived from it.
    pub fn clear(&mut self) {
        self.expression.clear();
        self.original_tokens.clear();
        self.initial_tokens.clear();
        self.result_tokens.clear();
        self.variable_names.clear();
    }

    fn perform_parsing(&mut self, tokens: Vec<Token>) -> ParseResult<()> {
        let end = end_position(&tokens);
        let initial = complete_lexical_analysis(&tokens)?;

        let (result, names) = if initial.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            let mut stream = TokenStream::new(&initial, end);
            parse_expression(&mut stream)?;
            if let Some(token) = stream.current() {
                return Err(SyntaxError::ErrorNear { token:  token.text(),
                                                    line:   token.line,
                                                    column: token.column, });
            }
            stream.finish()
        };

        debug!(expression = %self.expression,
               tokens = result.len(),
               variables = ?names,
               "parsed expression");

        self.original_tokens = tokens;
        self.initial_tokens = initial;
        self.result_tokens = result;
        self.variable_names = names;
        Ok(())
    }
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the position just past the last token.
///
/// An `Eof` token marks it exactly. Without one, the end of the last token is
/// used.
fn end_position(tokens: &[Token]) -> (usize, usize) {
    if let Some(eof) = tokens.iter().find(|token| token.kind == TokenType::Eof) {
        return (eof.line, eof.column);
    }
    tokens.last()
          .map_or((1, 0), |last| (last.line, last.column + last.value.chars().count()))
}

/// A cursor over the initial tokens that collects the result tokens.
#[derive(Debug)]
pub struct TokenStream<'a> {
    tokens:         &'a [ExpressionToken],
    position:       usize,
    end:            (usize, usize),
    depth:          usize,
    result:         Vec<ExpressionToken>,
    variable_names: Vec<String>,
}

impl<'a> TokenStream<'a> {
    /// Creates a cursor at the first token.
    ///
    /// `end` is the position reported when the input ends too early.
    #[must_use]
    pub const fn new(tokens: &'a [ExpressionToken], end: (usize, usize)) -> Self {
        Self { tokens,
               position: 0,
               end,
               depth: 0,
               result: Vec::new(),
               variable_names: Vec::new() }
    }

    /// Returns the token under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&'a ExpressionToken> {
        self.tokens.get(self.position)
    }

    /// Returns the kind of the token `offset` places after the cursor.
    #[must_use]
    pub fn peek_kind(&self, offset: usize) -> Option<ExpressionTokenType> {
        self.tokens.get(self.position + offset).map(|token| token.kind)
    }

    pub const fn advance(&mut self) {
        self.position += 1;
    }

    /// Returns the current token, or `UNEXPECTED_END` at the end of input.
    pub fn expect_more(&self) -> ParseResult<&'a ExpressionToken> {
        let (line, column) = self.end;
        self.current()
            .ok_or(SyntaxError::UnexpectedEnd { line, column })
    }

    /// Skips the given token kinds if they follow the cursor in this order.
    pub fn match_kinds(&mut self, kinds: &[ExpressionTokenType]) -> bool {
        let matches = kinds.iter()
                           .enumerate()
                           .all(|(offset, kind)| self.peek_kind(offset) == Some(*kind));
        if matches {
            self.position += kinds.len();
        }
        matches
    }

    /// Returns the position where the input ended.
    #[must_use]
    pub const fn end(&self) -> (usize, usize) {
        self.end
    }

    pub fn emit(&mut self, kind: ExpressionTokenType, value: Variant, line: usize, column: usize) {
        self.result.push(ExpressionToken::new(kind, value, line, column));
    }

    /// Emits an operator at the position of `token`.
    pub fn emit_operator(&mut self, kind: ExpressionTokenType, token: &ExpressionToken) {
        self.emit(kind, Variant::Null, token.line, token.column);
    }

    /// Records a variable name unless it was seen before.
    pub fn add_variable_name(&mut self, name: &str) {
        if !self.variable_names.iter().any(|known| known == name) {
            self.variable_names.push(name.to_string());
        }
    }

    /// Enters a nested construct that starts at `token`.
    ///
    /// # Errors
    /// Returns `NESTING_TOO_DEEP` once more than [`MAX_DEPTH`] constructs are
    /// open.
    pub fn enter(&mut self, token: &ExpressionToken) -> ParseResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(SyntaxError::NestingTooDeep { limit:  MAX_DEPTH,
                                                     line:   token.line,
                                                     column: token.column, });
        }
        self.depth += 1;
        Ok(())
    }

    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the result tokens and variable names.
    #[must_use]
    pub fn finish(self) -> (Vec<ExpressionToken>, Vec<String>) {
        (self.result, self.variable_names)
    }
}
