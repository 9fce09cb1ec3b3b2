use std::fmt;

use super::{Scanner, TokenType};
use crate::toolchain::diagnostics::Error;

/// Invoked when its rule matches. The matched rune is still unconsumed, so the handler decides
/// how to consume it: skip it, accept it with a nested [Scanner::expect], or match a literal.
pub type Handler = fn(&mut Scanner<'_>) -> Result<(), Error>;

/// Dispatch on a single rune.
#[derive(Clone, Copy)]
pub struct Branch {
    pub rune: char,
    pub handler: Option<Handler>,
}

impl Branch {
    /// A branch that accepts `rune` into the current token.
    pub const fn new(rune: char) -> Branch {
        Branch { rune, handler: None }
    }

    pub const fn with(rune: char, handler: Handler) -> Branch {
        Branch { rune, handler: Some(handler) }
    }
}

impl fmt::Debug for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch")
            .field("rune", &self.rune)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Dispatch on an inclusive range of runes.
#[derive(Clone, Copy)]
pub struct BranchRange {
    pub start: char,
    pub end: char,
    pub handler: Option<Handler>,
}

impl BranchRange {
    pub const fn new(start: char, end: char) -> BranchRange {
        assert!(start as u32 <= end as u32, "BranchRange start must not exceed end");
        BranchRange { start, end, handler: None }
    }

    pub const fn with(start: char, end: char, handler: Handler) -> BranchRange {
        assert!(start as u32 <= end as u32, "BranchRange start must not exceed end");
        BranchRange { start, end, handler: Some(handler) }
    }

    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

impl fmt::Debug for BranchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BranchRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Cardinality and polarity of one [Scanner::expect] call.
///
/// The default is a single required match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// No match is not an error.
    pub optional: bool,

    /// Keep matching until the rule stops matching.
    pub multiple: bool,

    /// Match any rune the rule does *not* cover.
    pub invert: bool,
}

impl ScanOptions {
    pub const fn new() -> ScanOptions {
        ScanOptions { optional: false, multiple: false, invert: false }
    }

    pub const fn optional(self) -> ScanOptions {
        ScanOptions { optional: true, ..self }
    }

    pub const fn multiple(self) -> ScanOptions {
        ScanOptions { multiple: true, ..self }
    }

    pub const fn invert(self) -> ScanOptions {
        ScanOptions { invert: true, ..self }
    }
}

/// The full rule set for one scanning step.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpectRune<'r> {
    pub branches: &'r [Branch],
    pub ranges: &'r [BranchRange],
    pub options: ScanOptions,
}

impl<'r> ExpectRune<'r> {
    pub const fn branches(branches: &'r [Branch]) -> ExpectRune<'r> {
        ExpectRune { branches, ranges: &[], options: ScanOptions::new() }
    }

    pub const fn ranges(ranges: &'r [BranchRange]) -> ExpectRune<'r> {
        ExpectRune { branches: &[], ranges, options: ScanOptions::new() }
    }

    pub const fn with_ranges(self, ranges: &'r [BranchRange]) -> ExpectRune<'r> {
        ExpectRune { ranges, ..self }
    }

    pub const fn with_options(self, options: ScanOptions) -> ExpectRune<'r> {
        ExpectRune { options, ..self }
    }

    /// Finds the rule matching `c`. The outer `Option` is whether `c` matched at all, the inner
    /// one is the handler of the matching rule.
    ///
    /// Single-rune branches are searched before ranges, each in declaration order, and the first
    /// hit wins. An inverted rule matches only runes that hit nothing, and has no handler.
    pub fn select(&self, c: char) -> Option<Option<Handler>> {
        let hit = self
            .branches
            .iter()
            .find(|branch| branch.rune == c)
            .map(|branch| branch.handler)
            .or_else(|| {
                self.ranges.iter().find(|range| range.contains(c)).map(|range| range.handler)
            });
        match (hit, self.options.invert) {
            (Some(handler), false) => Some(handler),
            (None, true) => Some(None),
            _ => None,
        }
    }

    /// The rune this rule requires, when it is exactly one plain single-rune branch.
    pub fn single_rune(&self) -> Option<char> {
        match (self.branches, self.ranges.is_empty(), self.options.invert) {
            ([branch], true, false) => Some(branch.rune),
            _ => None,
        }
    }
}

/// Binds a literal to a token type. An empty literal is a catch-all matching any text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub literal: &'static str,
    pub id: TokenType,
}

impl Match {
    pub const fn new(literal: &'static str, id: TokenType) -> Match {
        Match { literal, id }
    }

    /// Matches whatever text was accumulated, for tokens like strings and numbers.
    pub const fn any(id: TokenType) -> Match {
        Match { literal: "", id }
    }

    pub fn is_catch_all(&self) -> bool {
        self.literal.is_empty()
    }
}
