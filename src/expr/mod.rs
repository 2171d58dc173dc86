//! Composable regular expression builder.
//!
//! An [`Expr`] is an immutable tree. Leaves are built with the free functions
//! in [`build`], composite nodes with `+` (sequence) and `|` (alternative),
//! and the tree renders to `regex` syntax through [`std::fmt::Display`].
//!
//! # Rendering
//!
//! | Constructor                 | Renders as                         |
//! |-----------------------------|------------------------------------|
//! | `beginning_of_line()`       | `^`                                |
//! | `end_of_line()`             | `$`                                |
//! | `anything()`                | `.`                                |
//! | `literal(s)`                | `s`, verbatim                      |
//! | `text(s)`                   | `s` with metacharacters escaped    |
//! | `any_of(e)`                 | `[e]`                              |
//! | `none_of(e)`                | `[^e]`                             |
//! | `in_range(lo, hi)`          | `lo-hi`                            |
//! | `zero_or_more(e)`           | `e*`                               |
//! | `one_or_more(e)`            | `e+`                               |
//! | `maybe(e)`                  | `e?`                               |
//! | `repeated(e, r)`            | `e{n}`, `e{n,}`, `e{n,m}`, `e{n,m}?` |
//! | `a \| b`                    | `a\|b`                             |
//! | `a + b`                     | `ab`                               |
//! | `group(e)`                  | `(e)`                              |
//! | `named_group(e, n)`         | `(?P<n>e)`                         |
//! | `non_capturing(e)`          | `(?:e)`                            |
//!
//! Quantifier operands and alternative branches are wrapped in `(?:…)`
//! unless they already render as a single unit (see [`Atom`]).

pub mod ast;
pub mod build;
pub mod escape;
mod render;

pub use ast::{Atom, Escaped, Expr, GroupKind, Repeat};
