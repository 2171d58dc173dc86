use thiserror::Error;

/// A constructor was given arguments it cannot build an expression from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A range bound was not exactly one character.
    #[error("{bound} bound of a range must be a single character, got {value:?}")]
    NotSingleChar { bound: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_bound() {
        let err = BuildError::NotSingleChar {
            bound: "upper",
            value: "yz".into(),
        };
        assert_eq!(
            err.to_string(),
            "upper bound of a range must be a single character, got \"yz\""
        );
    }
}
