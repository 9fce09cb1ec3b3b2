//! The scanning toolchain: input acquisition, the scanning engine, diagnostics, and the reference
//! scanner definitions built on top of the engine.

pub mod diagnostics;
pub mod json;
pub mod scanner;
pub mod source;
