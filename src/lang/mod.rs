/*!
# Rust Language Module

This Rust module describes a YOLOL program the way the external parser hands
it over: lines of statements, expressions, identifiers and the diagnostics
attached to them.

*/

#[macro_use]
mod error;
mod ident;
mod line;

pub use error::Error;
pub use error::ErrorCode;
pub use error::InternalError;
pub use error::Severity;
pub use ident::Ident;
pub use ident::FIELD_SIGIL;
pub use line::Line;

pub mod ast;
