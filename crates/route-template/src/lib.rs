//! Compile URL path templates and match request paths against them.
//!
//! A template such as `/shelves/:shelf/books/:book` is compiled once into a
//! [`Template`] and then reused: [`Template::match_path`] extracts parameter
//! bindings (and a trailing remainder when the template ends in `*`) from a
//! concrete path, and [`Template::build`] reconstructs a path from a
//! [`Match`]. Matching is exact and case-sensitive — no percent-decoding,
//! query strings, or multi-pattern dispatch; those belong to the router
//! embedding this crate.
//!
//! # Examples
//! ```
//! use route_template::Template;
//!
//! let template = Template::compile("/users/:user/files/*");
//! let matched = template
//!     .match_path("/users/mara/files/docs/report.txt")
//!     .expect("path should match the template");
//! assert_eq!(matched.param("user"), Some("mara"));
//! assert_eq!(matched.trailing, "docs/report.txt");
//!
//! let rebuilt = template.build(&matched).expect("match satisfies template");
//! assert_eq!(rebuilt, "/users/mara/files/docs/report.txt");
//! ```

mod errors;
mod segment;
mod template;

pub use errors::BuildError;
pub use segment::Segment;
pub use template::{Match, Template};
