//! Error types surfaced by the public API.

use thiserror::Error;

/// Errors surfaced while rebuilding a path string from a template.
///
/// Compilation and matching never error (a template that fails to match
/// simply yields `None`), so building is the only fallible operation: it
/// requires a binding for every parameter segment in the template.
///
/// # Examples
/// ```
/// use route_template::{BuildError, Match, Template};
///
/// let template = Template::compile("/users/:id");
/// let err = template
///     .build(&Match::default())
///     .expect_err("no binding for `id` was supplied");
/// assert_eq!(err, BuildError::MissingParameter { name: "id".into() });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The supplied [`Match`](crate::Match) has no value for a parameter
    /// segment named by the template.
    #[error("no value bound for parameter `{name}`")]
    MissingParameter {
        /// Name of the parameter segment that lacked a binding.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_missing_parameter() {
        let err = BuildError::MissingParameter {
            name: "shelf".into(),
        };
        assert_eq!(err.to_string(), "no value bound for parameter `shelf`");
    }

    #[test]
    fn formats_the_anonymous_parameter() {
        let err = BuildError::MissingParameter {
            name: String::new(),
        };
        assert_eq!(err.to_string(), "no value bound for parameter ``");
    }
}
