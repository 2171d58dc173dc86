//! Constructors and composition operators for [`Expr`].
//!
//! Anything that takes an expression also takes plain text: `&str`,
//! `String` and `char` convert into [`Expr::Text`].

use std::ops::{Add, BitOr};

use crate::error::BuildError;

use super::ast::{Atom, Escaped, Expr, GroupKind, Repeat};

impl From<&str> for Expr {
    fn from(raw: &str) -> Self {
        text(raw)
    }
}

impl From<String> for Expr {
    fn from(raw: String) -> Self {
        text(raw)
    }
}

impl From<char> for Expr {
    fn from(ch: char) -> Self {
        text(ch.encode_utf8(&mut [0; 4]))
    }
}

/// `^`
pub fn beginning_of_line() -> Expr {
    Expr::BeginningOfLine
}

/// `$`
pub fn end_of_line() -> Expr {
    Expr::EndOfLine
}

/// `.`
pub fn anything() -> Expr {
    Expr::Anything
}

/// Raw pattern syntax, inserted as is. The caller is responsible for it
/// being valid where it ends up.
pub fn literal(raw: impl Into<String>) -> Expr {
    Expr::Literal(raw.into())
}

/// Matches `raw` exactly.
pub fn text(raw: impl AsRef<str>) -> Expr {
    Expr::Text(Escaped::new(raw.as_ref()))
}

/// Matches one character from the class body `e`.
///
/// Plain text is escaped; expressions such as [`in_range`] are used as is.
pub fn any_of(e: impl Into<Expr>) -> Expr {
    Expr::AnyOf(Box::new(e.into()))
}

/// Matches one character not in the class body `e`.
pub fn none_of(e: impl Into<Expr>) -> Expr {
    Expr::NoneOf(Box::new(e.into()))
}

/// Class range fragment. Only meaningful inside [`any_of`] or [`none_of`].
pub fn in_range(lo: char, hi: char) -> Expr {
    Expr::InRange(lo, hi)
}

/// [`in_range`] for bounds held as strings, each of which must be exactly
/// one character.
pub fn try_in_range(lo: &str, hi: &str) -> Result<Expr, BuildError> {
    Ok(in_range(single_char("lower", lo)?, single_char("upper", hi)?))
}

fn single_char(bound: &'static str, value: &str) -> Result<char, BuildError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(BuildError::NotSingleChar {
            bound,
            value: value.to_string(),
        }),
    }
}

pub fn zero_or_more(e: impl Into<Expr>) -> Expr {
    Expr::ZeroOrMore(Atom::groupify(e.into()))
}

pub fn one_or_more(e: impl Into<Expr>) -> Expr {
    Expr::OneOrMore(Atom::groupify(e.into()))
}

pub fn maybe(e: impl Into<Expr>) -> Expr {
    Expr::Maybe(Atom::groupify(e.into()))
}

/// Counted repetition, e.g. `repeated(text("a"), Repeat::between(2, 5))`.
pub fn repeated(e: impl Into<Expr>, repeat: Repeat) -> Expr {
    Expr::Repeated(Atom::groupify(e.into()), repeat)
}

/// Capturing group.
pub fn group(e: impl Into<Expr>) -> Expr {
    group_with(e, None, true)
}

/// Named capturing group, `(?P<name>e)`.
pub fn named_group(e: impl Into<Expr>, name: &str) -> Expr {
    group_with(e, Some(name), true)
}

/// Non-capturing group, `(?:e)`.
pub fn non_capturing(e: impl Into<Expr>) -> Expr {
    group_with(e, None, false)
}

/// General group constructor. See [`GroupKind::new`] for how `name` and
/// `capture` combine.
pub fn group_with(e: impl Into<Expr>, name: Option<&str>, capture: bool) -> Expr {
    Expr::Group(Box::new(e.into()), GroupKind::new(name, capture))
}

/// Matches any one of `exprs`, trying them in order.
///
/// Nested alternatives are flattened into this one.
pub fn alternative<I>(exprs: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    let mut branches = Vec::new();
    for e in exprs {
        push_branch(&mut branches, e.into());
    }
    Expr::Alternative(branches)
}

/// Matches each of `exprs` in turn.
///
/// Nested sequences are flattened into this one.
pub fn sequence<I>(exprs: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    let mut items = Vec::new();
    for e in exprs {
        push_item(&mut items, e.into());
    }
    Expr::Sequence(items)
}

fn push_branch(branches: &mut Vec<Atom>, e: Expr) {
    match e {
        Expr::Alternative(more) => branches.extend(more),
        e => branches.push(Atom::groupify(e)),
    }
}

fn push_item(items: &mut Vec<Expr>, e: Expr) {
    match e {
        Expr::Sequence(more) => items.extend(more),
        e => items.push(e),
    }
}

impl Expr {
    /// `self` followed by `other`. Same as `self + other`.
    pub fn concat(self, other: impl Into<Expr>) -> Expr {
        let mut items = match self {
            Expr::Sequence(items) => items,
            e => vec![e],
        };
        push_item(&mut items, other.into());
        Expr::Sequence(items)
    }

    /// `self` or else `other`. Same as `self | other`.
    pub fn either(self, other: impl Into<Expr>) -> Expr {
        let mut branches = match self {
            Expr::Alternative(branches) => branches,
            e => vec![Atom::groupify(e)],
        };
        push_branch(&mut branches, other.into());
        Expr::Alternative(branches)
    }
}

impl<R: Into<Expr>> Add<R> for Expr {
    type Output = Expr;

    fn add(self, other: R) -> Expr {
        self.concat(other)
    }
}

impl<R: Into<Expr>> BitOr<R> for Expr {
    type Output = Expr;

    fn bitor(self, other: R) -> Expr {
        self.either(other)
    }
}
