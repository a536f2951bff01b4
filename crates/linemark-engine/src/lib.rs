//! Line-at-a-time Markdown to HTML conversion.
//!
//! Every input line is classified independently against an ordered set of
//! recognizers ([`classify`]) and transformed by exactly one kind-specific
//! function ([`transform`]); [`convert`] drives the whole pipeline. There is
//! no cross-line state: each line produces one HTML fragment, and the
//! fragment count always equals the input line count.

pub mod classify;
pub mod convert;
pub mod io;
pub mod kinds;

pub use classify::{SyntaxKind, classify};
pub use convert::{convert, transform};
