//! Rule-driven rune scanning with caret-style error reporting.
//!
//! `runelex` is a small lexical-scanning engine. A scanner definition is a plain function that
//! declares its lexical rules as tables of [Branch](toolchain::scanner::Branch) and
//! [BranchRange](toolchain::scanner::BranchRange) values and hands them to the engine one step at
//! a time. The engine consumes the input rune by rune and emits positioned tokens, or an
//! [Error](toolchain::diagnostics::Error) that renders the offending line with a caret underline.
//!

#[macro_use]
extern crate static_assertions;

#[doc(hidden)]
pub use const_format;

pub mod toolchain;
