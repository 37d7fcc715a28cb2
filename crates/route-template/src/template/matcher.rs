//! Matching concrete paths against a compiled template.

use std::collections::HashMap;

use crate::segment::Segment;
use crate::template::Template;

/// The outcome of a successful [`Template::match_path`] call.
///
/// The fields are public so a `Match` can also be assembled by hand and fed
/// to [`Template::build`] to construct a concrete path.
///
/// # Examples
/// ```
/// use route_template::{Match, Template};
///
/// let template = Template::compile("/users/:user/files/*");
/// let mut values = Match::default();
/// values.params.insert("user".into(), "mara".into());
/// values.trailing = "docs/report.txt".into();
/// assert_eq!(
///     template.build(&values).expect("all parameters are bound"),
///     "/users/mara/files/docs/report.txt",
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Match {
    /// Values bound by the template's parameter segments, keyed by parameter
    /// name. Values may be empty strings; duplicate parameter names in a
    /// template resolve last-write-wins.
    pub params: HashMap<String, String>,
    /// Everything the trailing wildcard consumed after the boundary slash.
    /// Empty when the template has no wildcard or nothing followed the
    /// boundary.
    pub trailing: String,
}

impl Match {
    /// Look up a bound parameter value by name.
    ///
    /// # Examples
    /// ```
    /// use route_template::Template;
    ///
    /// let matched = Template::compile(":name")
    ///     .match_path("tycho")
    ///     .expect("single parameter should match a single token");
    /// assert_eq!(matched.param("name"), Some("tycho"));
    /// assert_eq!(matched.param("other"), None);
    /// ```
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

impl Template {
    /// Match a concrete path against this template.
    ///
    /// The path is split on `/` with the same semantics as compilation and
    /// walked in lockstep with the template's segments: literals must
    /// compare equal character for character (case-sensitively), parameters
    /// bind whatever token sits at their position, including the empty
    /// token. Without a wildcard the token count must equal the segment
    /// count exactly; with one, at least one token must remain past the
    /// fixed segments and the remainder is rejoined with `/` as
    /// [`Match::trailing`].
    ///
    /// Returns `None` on the first mismatch; a partially-bound `Match` is
    /// never observable.
    ///
    /// # Examples
    /// ```
    /// use route_template::Template;
    ///
    /// let template = Template::compile("/shelves/:shelf/*");
    /// let matched = template
    ///     .match_path("/shelves/fiction/frank-herbert/dune")
    ///     .expect("path should match the template");
    /// assert_eq!(matched.param("shelf"), Some("fiction"));
    /// assert_eq!(matched.trailing, "frank-herbert/dune");
    ///
    /// // The wildcard needs its boundary slash to be present.
    /// assert!(template.match_path("/shelves/fiction").is_none());
    /// ```
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<Match> {
        let mut tokens = path.split('/');
        let mut params = HashMap::new();

        for segment in &self.segments {
            let token = tokens.next()?;
            match segment {
                Segment::Literal(text) => {
                    if token != text {
                        return None;
                    }
                }
                Segment::Parameter(name) => {
                    params.insert(name.clone(), token.to_string());
                }
            }
        }

        let trailing = if self.trailing_wildcard {
            // At least one token must remain: the wildcard consumes the
            // boundary separator plus whatever follows it.
            let mut trailing = tokens.next()?.to_string();
            for token in tokens {
                trailing.push('/');
                trailing.push_str(token);
            }
            trailing
        } else {
            if tokens.next().is_some() {
                return None;
            }
            String::new()
        };

        Some(Match { params, trailing })
    }
}
