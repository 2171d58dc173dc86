//! Regular expressions built from small, named pieces.
//!
//! # Example
//!
//! ```rust
//! use cursive_re::{any_of, compile, in_range, one_or_more, text, zero_or_more};
//!
//! let label = one_or_more(any_of(in_range('a', 'z') + in_range('0', '9') + text("-")));
//! let domain = label.clone() + zero_or_more(text(".") + label);
//!
//! assert_eq!(domain.to_string(), r"[a-z0-9\-]+(?:\.[a-z0-9\-]+)*");
//!
//! let re = compile(&domain).unwrap();
//! assert_eq!(re.find("@google.com").unwrap().as_str(), "google.com");
//! ```

mod compile;
mod error;
pub mod expr;

pub use compile::{Flags, compile, compile_pattern};
pub use error::BuildError;
pub use expr::build::{
    alternative, any_of, anything, beginning_of_line, end_of_line, group, group_with, in_range,
    literal, maybe, named_group, non_capturing, none_of, one_or_more, repeated, sequence, text,
    try_in_range, zero_or_more,
};
pub use expr::{Atom, Escaped, Expr, GroupKind, Repeat};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
