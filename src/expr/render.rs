//! Rendering of expression trees to `regex` syntax.
//!
//! Each node writes its children first and then its own template, so a tree
//! of N nodes renders in one pass.

use std::fmt;

use itertools::Itertools;

use super::ast::{Atom, Expr, GroupKind, Repeat};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::BeginningOfLine => f.write_str("^"),
            Expr::EndOfLine => f.write_str("$"),
            Expr::Anything => f.write_str("."),
            Expr::Literal(raw) => f.write_str(raw),
            Expr::Text(escaped) => f.write_str(escaped.as_str()),
            Expr::AnyOf(inner) => write!(f, "[{inner}]"),
            Expr::NoneOf(inner) => write!(f, "[^{inner}]"),
            Expr::InRange(lo, hi) => write!(f, "{lo}-{hi}"),
            Expr::ZeroOrMore(atom) => write!(f, "{atom}*"),
            Expr::OneOrMore(atom) => write!(f, "{atom}+"),
            Expr::Maybe(atom) => write!(f, "{atom}?"),
            Expr::Repeated(atom, repeat) => write!(f, "{atom}{repeat}"),
            Expr::Alternative(branches) => write!(f, "{}", branches.iter().format("|")),
            Expr::Sequence(items) => {
                // An alternative next to other items would swallow them.
                let shield = items.len() > 1;
                for item in items {
                    match item {
                        Expr::Alternative(_) if shield => write!(f, "(?:{item})")?,
                        _ => write!(f, "{item}")?,
                    }
                }
                Ok(())
            }
            Expr::Group(inner, kind) => match kind {
                GroupKind::Capture => write!(f, "({inner})"),
                GroupKind::Named(name) => write!(f, "(?P<{name}>{inner})"),
                GroupKind::NonCapturing => write!(f, "(?:{inner})"),
            },
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_expr(), f)
    }
}

/// The quantifier suffix: `{n}`, `{n,}` or `{n,m}`, plus `?` when lazy.
impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.exactly {
            return write!(f, "{{{n}}}");
        }
        match self.at_most {
            Some(hi) => write!(f, "{{{},{hi}}}", self.at_least)?,
            None => write!(f, "{{{},}}", self.at_least)?,
        }
        if !self.greedy {
            f.write_str("?")?;
        }
        Ok(())
    }
}
