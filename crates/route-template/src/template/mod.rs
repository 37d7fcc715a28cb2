//! Template compilation and the compiled representation.
//!
//! A [`Template`] is compiled once from its source string and then reused
//! for any number of [`match_path`](Template::match_path) and
//! [`build`](Template::build) calls. Compilation is total: every input
//! string is a valid template, so there is no error path here.

mod builder;
mod matcher;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::segment::Segment;

pub use matcher::Match;

/// A compiled path template.
///
/// Templates are slash-delimited. A segment starting with `:` binds the path
/// component at its position as a named parameter; any other segment matches
/// its text exactly. A final segment of exactly `*` is a trailing wildcard
/// that captures everything after the fixed segments.
///
/// The compiled form is immutable and holds no interior state, so one
/// `Template` can serve concurrent matchers without synchronisation.
///
/// # Examples
/// ```
/// use route_template::Template;
///
/// let template = Template::compile("/shelves/:shelf/books/:book");
/// let matched = template
///     .match_path("/shelves/fiction/books/dune")
///     .expect("path should match the template");
/// assert_eq!(matched.param("shelf"), Some("fiction"));
/// assert_eq!(matched.param("book"), Some("dune"));
/// assert!(template.match_path("/shelves/fiction").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
    trailing_wildcard: bool,
}

impl Template {
    /// Compile a template string.
    ///
    /// Splitting follows plain split-on-`/` semantics: a leading slash
    /// yields a leading empty literal, and consecutive slashes yield empty
    /// literals that match empty path components. Only a whole token of `:`
    /// (optionally followed by a name) is a parameter — a colon mid-token
    /// has no special meaning. Only the final token may be a wildcard; a
    /// `*` anywhere else is an ordinary literal.
    ///
    /// Every string compiles; there is no rejection path.
    ///
    /// # Examples
    /// ```
    /// use route_template::Template;
    ///
    /// let wildcard_only = Template::compile("*");
    /// assert!(wildcard_only.segments().is_empty());
    /// assert!(wildcard_only.has_trailing_wildcard());
    /// ```
    #[must_use]
    pub fn compile(template: &str) -> Self {
        let mut tokens: Vec<&str> = template.split('/').collect();

        let trailing_wildcard = tokens.last() == Some(&"*");
        if trailing_wildcard {
            tokens.pop();
        }

        let segments = tokens
            .into_iter()
            .map(|token| match token.strip_prefix(':') {
                Some(name) => Segment::Parameter(name.to_string()),
                None => Segment::Literal(token.to_string()),
            })
            .collect();

        Self {
            segments,
            trailing_wildcard,
        }
    }

    /// The fixed segments of the template, in order.
    ///
    /// The trailing wildcard is not a segment; it is reported by
    /// [`has_trailing_wildcard`](Self::has_trailing_wildcard).
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the template ended with a standalone `*` segment.
    #[must_use]
    pub const fn has_trailing_wildcard(&self) -> bool {
        self.trailing_wildcard
    }
}

impl fmt::Display for Template {
    /// Render the template back to its source string.
    ///
    /// Compilation loses nothing, so this is an exact inverse:
    /// `Template::compile(t).to_string() == t` for every template string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                f.write_str("/")?;
            }
            first = false;
            write!(f, "{segment}")?;
        }
        if self.trailing_wildcard {
            if !first {
                f.write_str("/")?;
            }
            f.write_str("*")?;
        }
        Ok(())
    }
}

impl FromStr for Template {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::compile(s))
    }
}

impl From<&str> for Template {
    fn from(template: &str) -> Self {
        Self::compile(template)
    }
}
