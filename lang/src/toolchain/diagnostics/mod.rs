//! Tools for the production and delivery of error feedback from the toolchain.
//!
//! Every failure in the toolchain is an [Error] value carrying an [ErrorCode], the underlying
//! [Cause], and enough source context (line text, line number, column span) to render itself
//! without re-scanning. Rendering is the fixed three-line caret format:
//!
//! ```text
//! Error Line:1 expected '"', found end of input
//! {"a
//!    ^
//! ```
//!
//! Errors are delivered to the user through a [DiagnosticConsumer].
//!

pub mod diagnostic_emitter;
pub mod diagnostic_kind;

pub use diagnostic_emitter::console_diagnostic_consumer;
pub use diagnostic_emitter::Cause;
pub use diagnostic_emitter::DiagnosticConsumer;
pub use diagnostic_emitter::Error;
pub use diagnostic_emitter::Found;
pub use diagnostic_emitter::NullDiagnosticConsumer;
pub use diagnostic_emitter::StreamDiagnosticConsumer;
pub use diagnostic_kind::ErrorCode;
