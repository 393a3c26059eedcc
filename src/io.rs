/// Character cursors with line and column tracking.
///
/// The scanner is the leaf of the tokenizing pipeline. It hands characters to
/// tokenizer states one at a time, supports bounded lookahead through `peek`
/// and `unread`, and reports where in the source each character came from.
pub mod scanner;
