/// The enumerated type of all errors the toolchain reports.
///
/// Discriminants are stable and follow declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The input file could not be opened or mapped.
    FileNotFound = 0,

    /// An output file could not be created or written.
    CouldNotCreateFile = 1,

    /// The text accumulated for a token matched none of the candidate literals.
    TokenExpectedNotFound = 2,

    /// A token in the token stream was not one of the expected token types.
    ExpectedTokenNotInSet = 3,

    /// A required set of branches matched nothing at the current rune.
    ScannedTokenNotInSet = 4,

    /// A required single rune was not found at the current position.
    RuneExpectedNotFound = 5,

    /// Reserved for tree-building layers above tokenization.
    NodeNotInSet = 6,
}
