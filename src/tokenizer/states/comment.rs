use crate::{
    io::scanner::Scanner,
    tokenizer::{Token, TokenType, Tokenizer, TokenizerState},
};

/// Reads a comment that runs to the end of the line, such as `# note`.
///
/// The line break itself is not part of the comment.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericCommentState;

impl TokenizerState for GenericCommentState {
    fn next_token(&self, scanner: &mut dyn Scanner, _tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let mut value = String::new();
        read_to_line_end(scanner, &mut value);
        Token::new(TokenType::Comment, value, line, column)
    }
}

/// Reads `/* block */` comments and, unless disabled, `// line` comments.
///
/// A `/` that does not start a comment is read by the symbol state.
#[derive(Debug, Clone, Copy)]
pub struct CppCommentState {
    line_comments: bool,
}

impl CppCommentState {
    /// Recognizes both block and line comments.
    #[must_use]
    pub const fn new() -> Self {
        Self { line_comments: true }
    }

    /// Recognizes block comments only, as in C.
    #[must_use]
    pub const fn block_only() -> Self {
        Self { line_comments: false }
    }
}

impl Default for CppCommentState {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenizerState for CppCommentState {
    fn next_token(&self, scanner: &mut dyn Scanner, tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());

        if scanner.peek() != Some('/') {
            return tokenizer.read_symbol(scanner);
        }
        scanner.read();

        match scanner.peek() {
            Some('*') => {
                scanner.read();
                let mut value = String::from("/*");
                let mut previous = '\0';
                while let Some(ch) = scanner.read() {
                    value.push(ch);
                    if previous == '*' && ch == '/' {
                        break;
                    }
                    previous = ch;
                }
                Token::new(TokenType::Comment, value, line, column)
            },
            Some('/') if self.line_comments => {
                let mut value = String::from("/");
                read_to_line_end(scanner, &mut value);
                Token::new(TokenType::Comment, value, line, column)
            },
            _ => {
                scanner.unread();
                tokenizer.read_symbol(scanner)
            },
        }
    }
}

fn read_to_line_end(scanner: &mut dyn Scanner, value: &mut String) {
    while let Some(ch) = scanner.peek()
          && ch != '\n'
          && ch != '\r'
    {
        scanner.read();
        value.push(ch);
    }
}
