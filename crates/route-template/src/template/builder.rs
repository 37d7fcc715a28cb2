//! Rebuilding concrete paths from a template and bound values.

use crate::errors::BuildError;
use crate::segment::Segment;
use crate::template::{Match, Template};

impl Template {
    /// Reconstruct a concrete path from this template and a set of bound
    /// values — the inverse of [`match_path`](Self::match_path).
    ///
    /// Each literal segment contributes its own text and each parameter
    /// segment contributes the value bound under its name; the pieces are
    /// joined with `/`. When the template carries a trailing wildcard,
    /// [`Match::trailing`] participates in the join as one final element,
    /// so the boundary slash is emitted even when the trailing value is
    /// empty. Whenever `match_path` succeeded, feeding its result back in
    /// here returns the original path exactly.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingParameter`] when `values` has no binding
    /// for one of the template's parameter segments. Extra bindings are
    /// ignored.
    ///
    /// # Examples
    /// ```
    /// use route_template::{Match, Template};
    ///
    /// let template = Template::compile("/shelves/:shelf/books/:book");
    /// let mut values = Match::default();
    /// values.params.insert("shelf".into(), "fiction".into());
    /// values.params.insert("book".into(), "dune".into());
    /// assert_eq!(
    ///     template.build(&values).expect("all parameters are bound"),
    ///     "/shelves/fiction/books/dune",
    /// );
    /// ```
    pub fn build(&self, values: &Match) -> Result<String, BuildError> {
        let mut path = String::new();
        let mut first = true;

        for segment in &self.segments {
            if !first {
                path.push('/');
            }
            first = false;
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Parameter(name) => {
                    let value = values.params.get(name).ok_or_else(|| {
                        BuildError::MissingParameter { name: name.clone() }
                    })?;
                    path.push_str(value);
                }
            }
        }

        if self.trailing_wildcard {
            if !first {
                path.push('/');
            }
            path.push_str(&values.trailing);
        }

        Ok(path)
    }
}
