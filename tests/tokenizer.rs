use formulary::{
    error::TokenizerError,
    io::scanner::Scanner,
    tokenizer::{
        CsvOptions, StateRole, Token, TokenType, Tokenizer, TokenizerOptions, TokenizerState,
        states::{CppCommentState, GenericWhitespaceState},
    },
};
use pretty_assertions::assert_eq;

fn kinds(tokens: &[Token]) -> Vec<TokenType> {
    tokens.iter().map(|t| t.kind).collect()
}

/// Reads `$name` placeholders.
struct PlaceholderState;

impl TokenizerState for PlaceholderState {
    fn next_token(&self, scanner: &mut dyn Scanner, _tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let mut value = String::new();
        if let Some(ch) = scanner.read() {
            value.push(ch);
        }
        while let Some(ch) = scanner.peek()
              && ch.is_ascii_alphanumeric()
        {
            scanner.read();
            value.push(ch);
        }
        Token::new(TokenType::Special, value, line, column)
    }
}

fn placeholder_tokenizer(options: TokenizerOptions) -> Tokenizer {
    let mut tokenizer = Tokenizer::new(options).with_word_state(PlaceholderState)
                                               .with_whitespace_state(GenericWhitespaceState::new());
    tokenizer.set_character_state('$', '$', StateRole::Word).unwrap();
    tokenizer.set_character_state(' ', ' ', StateRole::Whitespace).unwrap();
    tokenizer
}

#[test]
fn generic_tokenizer_reports_positions() {
    let tokens = Tokenizer::generic().tokenize("ab 12 \n'x y'");

    let positions: Vec<(TokenType, &str, usize, usize)> =
        tokens.iter().map(|t| (t.kind, t.value.as_str(), t.line, t.column)).collect();
    assert_eq!(positions,
               vec![(TokenType::Word, "ab", 1, 1),
                    (TokenType::Whitespace, " ", 1, 3),
                    (TokenType::Integer, "12", 1, 4),
                    (TokenType::Whitespace, " \n", 1, 6),
                    (TokenType::Quoted, "'x y'", 2, 1),
                    (TokenType::Eof, "", 2, 6)]);
}

#[test]
fn options_filter_and_rewrite_tokens() {
    let options = TokenizerOptions::new().skip_eof(true)
                                         .merge_whitespaces(true)
                                         .unify_numbers(true)
                                         .decode_strings(true);
    let tokens = Tokenizer::generic().with_options(options).tokenize("1.5  \t'x y' # note");

    assert_eq!(kinds(&tokens),
               vec![TokenType::Number,
                    TokenType::Whitespace,
                    TokenType::Quoted,
                    TokenType::Whitespace,
                    TokenType::Comment]);
    assert_eq!(tokens[1].value, " ");
    assert_eq!(tokens[2].value, "x y");
}

#[test]
fn custom_states_plug_into_the_character_map() {
    let tokens = placeholder_tokenizer(TokenizerOptions::new().skip_eof(true)).tokenize("$a1 ? $b");

    assert_eq!(kinds(&tokens),
               vec![TokenType::Special,
                    TokenType::Whitespace,
                    TokenType::Unknown,
                    TokenType::Whitespace,
                    TokenType::Special]);
    assert_eq!(tokens[0].value, "$a1");
    assert_eq!(tokens[2].value, "?");
}

#[test]
fn unknown_characters_can_be_skipped() {
    let options = TokenizerOptions::new().skip_eof(true)
                                         .skip_unknown(true)
                                         .skip_whitespaces(true);
    let values = placeholder_tokenizer(options).tokenize_to_strings("$a ?! $b");

    assert_eq!(values, vec!["$a", "$b"]);
}

fn slash_comment_tokenizer(state: CppCommentState) -> Tokenizer {
    let options = TokenizerOptions::new().skip_eof(true).skip_whitespaces(true);
    let mut tokenizer = Tokenizer::generic().with_options(options).with_comment_state(state);
    tokenizer.set_character_state('/', '/', StateRole::Comment).unwrap();
    tokenizer
}

#[test]
fn block_only_comments_leave_double_slashes_to_symbols() {
    let tokens = slash_comment_tokenizer(CppCommentState::block_only()).tokenize("a /* x */ // b");

    assert_eq!(kinds(&tokens),
               vec![TokenType::Word,
                    TokenType::Comment,
                    TokenType::Symbol,
                    TokenType::Symbol,
                    TokenType::Word]);
    assert_eq!(tokens[1].value, "/* x */");
    assert_eq!(tokens[2].value, "/");
}

#[test]
fn cpp_comments_read_both_styles() {
    let values = slash_comment_tokenizer(CppCommentState::new()).tokenize_to_strings("a /* x */ 1 / 2 // b");

    assert_eq!(values, vec!["a", "/* x */", "1", "/", "2", "// b"]);
}

#[test]
fn reversed_intervals_are_rejected() {
    let mut tokenizer = Tokenizer::generic();
    let err = tokenizer.set_character_state('z', 'a', StateRole::Word).unwrap_err();

    assert_eq!(err, TokenizerError::InvalidInterval { start: 'z', end: 'a' });
}

#[test]
fn csv_with_custom_separator() {
    let options = CsvOptions::new().field_separators(&[';']).quote_symbols(&['\'']);
    let tokenizer = Tokenizer::csv(&options).unwrap();
    let tokens = tokenizer.tokenize("a;'b;c'\r\nd");

    assert_eq!(kinds(&tokens),
               vec![TokenType::Word,
                    TokenType::Symbol,
                    TokenType::Quoted,
                    TokenType::Eol,
                    TokenType::Word,
                    TokenType::Eof]);
    assert_eq!(tokens[2].value, "'b;c'");
    assert_eq!(tokens[4].line, 2);
}

#[test]
fn csv_rejects_conflicting_options() {
    let options = CsvOptions::new().field_separators(&[',', '"']);
    assert!(Tokenizer::csv(&options).is_err());
}

#[test]
fn expression_tokenizer_splits_operators() {
    let values = Tokenizer::expression().with_options(TokenizerOptions::new().skip_eof(true)
                                                                          .skip_whitespaces(true))
                                         .tokenize_to_strings("a<>b<<2 >= -x_1");

    assert_eq!(values, vec!["a", "<>", "b", "<<", "2", ">=", "-", "x_1"]);
}

#[test]
fn words_reach_beyond_the_basic_multilingual_plane() {
    let options = TokenizerOptions::new().skip_eof(true);

    let values = Tokenizer::generic().with_options(options).tokenize_to_strings("na😀ve 𝔵");
    assert_eq!(values, vec!["na😀ve", " ", "𝔵"]);

    let values = Tokenizer::expression().with_options(options).tokenize_to_strings("x😀y+1");
    assert_eq!(values, vec!["x😀y", "+", "1"]);
}
