// jsqueeze-lexer/src/lib.rs
//! Single-pass JavaScript minification transducer.
//!
//! The scanner never builds tokens or an AST. It walks the input once, strips
//! comments, copies string and regex literals verbatim, and drops every space
//! or line feed whose removal cannot fuse two neighbouring tokens.
//!
//! ```
//! let out = jsqueeze_lexer::minify("var r = /abc/; // trailing").unwrap();
//! assert_eq!(out, "var r=/abc/;");
//! ```
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod classes;
pub mod comment;
pub mod cursor;
pub mod error;
pub mod literal;
pub mod regex_start;
pub mod transducer;
pub mod whitespace;

pub use error::MinifyError;
pub use transducer::{minify, minify_bytes, minify_bytes_with_options, minify_with_options, MinifyOptions};
