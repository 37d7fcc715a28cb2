//! The slash-delimited units that make up a compiled template.

use std::fmt;

/// One slash-delimited unit of a compiled template.
///
/// A segment either matches an exact piece of text or binds whatever text
/// appears at its position under a parameter name. The two behaviours are
/// mutually exclusive by construction.
///
/// # Examples
/// ```
/// use route_template::{Segment, Template};
///
/// let template = Template::compile("shelves/:shelf");
/// assert_eq!(
///     template.segments(),
///     &[
///         Segment::Literal("shelves".into()),
///         Segment::Parameter("shelf".into()),
///     ],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches the contained text exactly. The text may be empty: a leading
    /// slash in a template compiles to an empty literal that only matches an
    /// empty path component.
    Literal(String),
    /// Binds the path component at this position under the contained name.
    /// The empty string is a valid, anonymous parameter name (template token
    /// `:`).
    Parameter(String),
}

impl Segment {
    /// Whether this segment binds a named value rather than matching text.
    ///
    /// # Examples
    /// ```
    /// use route_template::Segment;
    ///
    /// assert!(Segment::Parameter("id".into()).is_parameter());
    /// assert!(!Segment::Literal("users".into()).is_parameter());
    /// ```
    #[must_use]
    pub const fn is_parameter(&self) -> bool {
        matches!(self, Self::Parameter(_))
    }
}

impl fmt::Display for Segment {
    /// Render the segment in template-source form: literals verbatim,
    /// parameters with their leading `:`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Parameter(name) => write!(f, ":{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_is_not_a_parameter() {
        assert!(!Segment::Literal("users".into()).is_parameter());
    }

    #[test]
    fn parameter_reports_itself() {
        assert!(Segment::Parameter(String::new()).is_parameter());
    }

    #[test]
    fn displays_parameter_with_leading_colon() {
        assert_eq!(Segment::Parameter("id".into()).to_string(), ":id");
    }

    #[test]
    fn displays_empty_literal_as_empty_string() {
        assert_eq!(Segment::Literal(String::new()).to_string(), "");
    }
}
