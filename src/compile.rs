//! Hand-off of rendered expressions to the `regex` engine.

use bitflags::bitflags;
use regex::{Regex, RegexBuilder};

use crate::expr::Expr;

bitflags! {
    /// Engine options applied when compiling a pattern.
    ///
    /// The builder never looks at these; they only change how `regex`
    /// interprets the rendered string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// Case-insensitive matching.
        const IGNORECASE = 1 << 0;
        /// `^` and `$` match at line boundaries.
        const MULTILINE = 1 << 1;
        /// `.` also matches `\n`.
        const DOTALL = 1 << 2;
        /// Whitespace and `#` comments in the pattern are ignored. Escaped
        /// text still matches its own whitespace.
        const VERBOSE = 1 << 3;
        /// Quantifiers are lazy by default and `?` makes them greedy.
        const SWAP_GREED = 1 << 4;
        /// `\r\n` counts as a line terminator for `^`, `$` and `.`.
        const CRLF = 1 << 5;
    }
}

/// Render `root` and compile it with `flags`.
///
/// Errors come straight from `regex`, e.g. for a reversed [`in_range`] or a
/// group name the engine rejects.
///
/// [`in_range`]: crate::in_range
pub fn compile_pattern(root: &Expr, flags: Flags) -> Result<Regex, regex::Error> {
    let pattern = root.render();
    tracing::debug!(%pattern, ?flags, "compiling pattern");

    RegexBuilder::new(&pattern)
        .case_insensitive(flags.contains(Flags::IGNORECASE))
        .multi_line(flags.contains(Flags::MULTILINE))
        .dot_matches_new_line(flags.contains(Flags::DOTALL))
        .ignore_whitespace(flags.contains(Flags::VERBOSE))
        .swap_greed(flags.contains(Flags::SWAP_GREED))
        .crlf(flags.contains(Flags::CRLF))
        .build()
        .inspect_err(|err| tracing::trace!(%pattern, %err, "pattern rejected"))
}

/// [`compile_pattern`] with no flags.
pub fn compile(root: &Expr) -> Result<Regex, regex::Error> {
    compile_pattern(root, Flags::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::build::*;

    fn domain() -> Expr {
        let label = one_or_more(any_of(in_range('a', 'z') + in_range('0', '9') + text("-")));
        label.clone() + zero_or_more(text(".") + label)
    }

    #[test]
    fn escaped_text_matches_only_itself() -> anyhow::Result<()> {
        let re = compile(&(beginning_of_line() + text("a.b") + end_of_line()))?;
        assert!(re.is_match("a.b"));
        assert!(!re.is_match("axb"));
        Ok(())
    }

    #[test]
    fn domain_matches_whole_host() -> anyhow::Result<()> {
        assert_eq!(domain().render(), r"[a-z0-9\-]+(?:\.[a-z0-9\-]+)*");

        let re = compile(&(beginning_of_line() + domain() + end_of_line()))?;
        assert!(re.is_match("google.com"));
        assert!(!re.is_match("google..com"));
        assert!(!re.is_match(".com"));
        Ok(())
    }

    #[test]
    fn flags_reach_the_engine() -> anyhow::Result<()> {
        let re = compile_pattern(&text("Hello"), Flags::IGNORECASE)?;
        assert!(re.is_match("hELLO"));

        let anchored = beginning_of_line() + text("b") + end_of_line();
        assert!(!compile(&anchored)?.is_match("a\nb\nc"));
        assert!(compile_pattern(&anchored, Flags::MULTILINE)?.is_match("a\nb\nc"));

        assert!(!compile(&anything())?.is_match("\n"));
        assert!(compile_pattern(&anything(), Flags::DOTALL)?.is_match("\n"));
        Ok(())
    }

    #[test]
    fn verbose_keeps_escaped_whitespace() -> anyhow::Result<()> {
        let spaced = beginning_of_line() + text("a b\t#c") + end_of_line();
        let re = compile_pattern(&spaced, Flags::VERBOSE)?;
        assert!(re.is_match("a b\t#c"));
        assert!(!re.is_match("ab"));
        assert!(!re.is_match("ab\t"));

        let class = compile_pattern(&one_or_more(any_of(" -")), Flags::VERBOSE)?;
        assert_eq!(class.find("x - y").map(|m| m.as_str()), Some(" - "));
        Ok(())
    }

    #[test]
    fn swap_greed_makes_quantifiers_lazy() -> anyhow::Result<()> {
        let run = one_or_more(text("a"));
        assert_eq!(compile(&run)?.find("aaa").map(|m| m.as_str()), Some("aaa"));
        let lazy = compile_pattern(&run, Flags::SWAP_GREED)?;
        assert_eq!(lazy.find("aaa").map(|m| m.as_str()), Some("a"));
        Ok(())
    }

    #[test]
    fn crlf_treats_carriage_return_as_line_end() -> anyhow::Result<()> {
        let line = beginning_of_line() + text("b") + end_of_line();
        let haystack = "a\r\nb\r\nc";
        assert!(!compile_pattern(&line, Flags::MULTILINE)?.is_match(haystack));
        assert!(compile_pattern(&line, Flags::MULTILINE | Flags::CRLF)?.is_match(haystack));
        Ok(())
    }

    #[test]
    fn every_flag_compiles_common_patterns() -> anyhow::Result<()> {
        for expr in [anything(), none_of("/"), domain()] {
            compile_pattern(&expr, Flags::all())?;
        }
        Ok(())
    }

    #[test]
    fn reversed_range_is_an_engine_error() {
        let err = compile(&any_of(in_range('z', 'a'))).unwrap_err();
        assert!(matches!(err, regex::Error::Syntax(_)));
    }

    #[test]
    fn bad_group_name_is_an_engine_error() {
        assert!(compile(&named_group(text("a"), "not a name")).is_err());
    }

    #[test]
    fn alternation_keeps_its_scope_inside_sequences() -> anyhow::Result<()> {
        let pets = text("cat") | text("dog");
        let re = compile(&(beginning_of_line() + pets + text("s") + end_of_line()))?;
        assert!(re.is_match("cats"));
        assert!(re.is_match("dogs"));
        assert!(!re.is_match("cat"));
        Ok(())
    }

    #[test]
    fn quantified_alternation_repeats_every_branch() -> anyhow::Result<()> {
        let runs = one_or_more(text("ab") | text("c"));
        let re = compile(&(beginning_of_line() + runs + end_of_line()))?;
        assert!(re.is_match("abcab"));
        assert!(!re.is_match("abb"));
        Ok(())
    }
}
