//! Expression tree types.

use super::escape::escape;

/// A node of a regular expression tree.
///
/// Trees are immutable once built. Reusing a node in several places means
/// cloning it; rendering never depends on where a node sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    BeginningOfLine,
    EndOfLine,
    Anything,
    /// Raw regex syntax, inserted without escaping.
    Literal(String),
    /// Plain text, escaped when the node was built.
    Text(Escaped),
    /// Positive character class around the child.
    AnyOf(Box<Expr>),
    /// Negated character class around the child.
    NoneOf(Box<Expr>),
    /// Class range fragment, `lo-hi`. Bounds are not checked for order.
    InRange(char, char),
    ZeroOrMore(Atom),
    OneOrMore(Atom),
    Maybe(Atom),
    Repeated(Atom, Repeat),
    /// Ordered branches, never directly containing another alternative.
    Alternative(Vec<Atom>),
    /// Ordered items, never directly containing another sequence. An
    /// alternative among several items renders inside `(?:…)`.
    Sequence(Vec<Expr>),
    Group(Box<Expr>, GroupKind),
}

impl Expr {
    /// Whether a quantifier can follow this node's rendering without
    /// changing what the quantifier applies to.
    ///
    /// Alternatives are excluded: `|` binds looser than any quantifier or
    /// concatenation, so `a|b` must be grouped before it is repeated.
    pub fn is_group_like(&self) -> bool {
        matches!(self, Expr::Group(..) | Expr::AnyOf(_) | Expr::NoneOf(_))
    }

    /// Render the tree to a pattern string.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Text with every regex metacharacter already escaped.
///
/// The only way to build one is from raw text, so escaped text is never
/// escaped twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Escaped(String);

impl Escaped {
    pub fn new(raw: &str) -> Self {
        Self(escape(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An expression that renders as a single unit, safe to quantify.
///
/// Built by [`Atom::groupify`], which wraps anything that is not group-like
/// in a non-capturing group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom(Box<Expr>);

impl Atom {
    pub fn groupify(expr: Expr) -> Self {
        if expr.is_group_like() {
            Self(Box::new(expr))
        } else {
            Self(Box::new(Expr::Group(Box::new(expr), GroupKind::NonCapturing)))
        }
    }

    pub fn as_expr(&self) -> &Expr {
        &self.0
    }

    pub fn into_expr(self) -> Expr {
        *self.0
    }
}

/// How a [`Expr::Group`] captures.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// `(e)`
    Capture,
    /// `(?P<name>e)`
    Named(String),
    /// `(?:e)`
    NonCapturing,
}

impl GroupKind {
    /// Resolve a name and capture flag into a kind.
    ///
    /// `capture == false` takes precedence: the name is dropped.
    pub fn new(name: Option<&str>, capture: bool) -> Self {
        match (capture, name) {
            (false, _) => GroupKind::NonCapturing,
            (true, Some(name)) => GroupKind::Named(name.to_string()),
            (true, None) => GroupKind::Capture,
        }
    }
}

/// Bounds of a counted repetition.
///
/// When `exactly` is set the other fields are ignored, including `greedy`.
/// Otherwise the repetition spans `at_least..=at_most` (unbounded when
/// `at_most` is `None`) and is lazy when `greedy` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Repeat {
    pub exactly: Option<usize>,
    pub at_least: usize,
    pub at_most: Option<usize>,
    pub greedy: bool,
}

impl Default for Repeat {
    fn default() -> Self {
        Self {
            exactly: None,
            at_least: 0,
            at_most: None,
            greedy: true,
        }
    }
}

impl Repeat {
    pub fn exactly(n: usize) -> Self {
        Self {
            exactly: Some(n),
            ..Self::default()
        }
    }

    pub fn at_least(n: usize) -> Self {
        Self {
            at_least: n,
            ..Self::default()
        }
    }

    pub fn at_most(n: usize) -> Self {
        Self {
            at_most: Some(n),
            ..Self::default()
        }
    }

    pub fn between(lo: usize, hi: usize) -> Self {
        Self {
            at_least: lo,
            at_most: Some(hi),
            ..Self::default()
        }
    }

    /// Match as few repetitions as possible.
    pub fn lazy(self) -> Self {
        Self {
            greedy: false,
            ..self
        }
    }
}
