use std::collections::BTreeMap;

use crate::{
    io::scanner::Scanner,
    tokenizer::{SymbolState, Token, TokenType, Tokenizer, TokenizerState},
};

/// A node of the symbol trie.
///
/// `kind` is set when the path from the root to this node spells a complete
/// symbol.
#[derive(Debug, Clone, Default)]
struct SymbolNode {
    children: BTreeMap<char, SymbolNode>,
    kind:     Option<TokenType>,
}

/// Reads the longest registered symbol at the scanner position.
///
/// Every single character is a symbol on its own, so the state always
/// consumes at least one character. Multi-character symbols are registered
/// with [`SymbolState::add`].
///
/// # Example
/// ```
/// use formulary::{
///     io::scanner::{Scanner, StringScanner},
///     tokenizer::{SymbolState, TokenType, Tokenizer, TokenizerOptions, TokenizerState,
///                 states::GenericSymbolState},
/// };
///
/// let mut state = GenericSymbolState::new();
/// state.add("<=", TokenType::Symbol);
/// state.add("<=>", TokenType::Special);
///
/// let tokenizer = Tokenizer::new(TokenizerOptions::new());
/// let mut scanner = StringScanner::new("<=<");
///
/// let token = state.next_token(&mut scanner, &tokenizer);
/// assert!(token.is(TokenType::Symbol, "<="));
/// assert_eq!(scanner.peek(), Some('<'));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenericSymbolState {
    root: SymbolNode,
}

impl GenericSymbolState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with the given symbols registered as `Symbol` tokens.
    #[must_use]
    pub fn with_symbols(symbols: &[&str]) -> Self {
        let mut state = Self::new();
        for symbol in symbols {
            state.add(symbol, TokenType::Symbol);
        }
        state
    }
}

impl SymbolState for GenericSymbolState {
    fn add(&mut self, value: &str, kind: TokenType) {
        let mut chars = value.chars();
        let Some(first) = chars.next() else {
            return;
        };

        let mut node = self.root
                           .children
                           .entry(first)
                           .or_insert_with(|| SymbolNode { children: BTreeMap::new(),
                                                           kind:     Some(TokenType::Symbol), });
        for ch in chars {
            node = node.children.entry(ch).or_default();
        }
        node.kind = Some(kind);
    }
}

impl TokenizerState for GenericSymbolState {
    fn next_token(&self, scanner: &mut dyn Scanner, _tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let Some(first) = scanner.read() else {
            return Token::new(TokenType::Symbol, "", line, column);
        };
        let Some(mut node) = self.root.children.get(&first) else {
            return Token::new(TokenType::Symbol, first, line, column);
        };

        let mut text = String::from(first);
        let mut read = 1;
        let mut longest = (1, node.kind.unwrap_or(TokenType::Symbol));

        while let Some(ch) = scanner.peek()
              && let Some(child) = node.children.get(&ch)
        {
            scanner.read();
            text.push(ch);
            read += 1;
            node = child;
            if let Some(kind) = child.kind {
                longest = (read, kind);
            }
        }

        let (length, kind) = longest;
        scanner.unread_many(read - length);
        Token::new(kind, text.chars().take(length).collect::<String>(), line, column)
    }
}
