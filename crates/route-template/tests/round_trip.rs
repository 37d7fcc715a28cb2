//! The round-trip law: whenever a path matches a template, building from the
//! resulting `Match` reproduces that path exactly.

#![expect(clippy::expect_used, reason = "tests assert the happy path loudly")]

use rstest::rstest;
use route_template::{BuildError, Match, Template};

#[rstest]
#[case("foo", "foo")]
#[case(":foo", "bar")]
#[case("/:foo", "/bar")]
#[case("/:foo/bar/:baz", "/foo/bar/baz")]
#[case("/:foo/:bar/:baz", "///")]
#[case("/:foo/bar/:baz/*", "/foo/bar/baz/a/b/c")]
#[case("/:foo/bar/:baz/*", "/foo/bar/baz/")]
#[case("/:foo/:bar/:baz/*", "////")]
#[case("/:foo/:bar/:baz/*", "/////")]
#[case("/:/*", "/anonymous/rest")]
#[case("*", "")]
#[case("*", "/")]
#[case("/*", "/")]
#[case("*", "/a/b/c")]
#[case("*", "a/b/c")]
#[case("/shelves/:shelf/books/:book", "/shelves/123/books/")]
#[case("/shelves/:shelf/books/:book", "/shelves//books/")]
#[case("/users/:user/files/*", "/users/foo/files////")]
fn build_inverts_match(#[case] template: &str, #[case] path: &str) {
    let compiled = Template::compile(template);
    let matched = compiled
        .match_path(path)
        .expect("round-trip cases are all matchable");
    let rebuilt = compiled
        .build(&matched)
        .expect("a successful match always satisfies its own template");
    assert_eq!(rebuilt, path);
}

#[test]
fn anonymous_parameter_binds_the_empty_key() {
    let template = Template::compile("/:/*");
    let matched = template
        .match_path("/value/rest")
        .expect("anonymous parameter should bind");
    assert_eq!(matched.param(""), Some("value"));
}

#[test]
fn build_reports_the_first_unbound_parameter() {
    let template = Template::compile("/shelves/:shelf/books/:book");
    let mut values = Match::default();
    values.params.insert("shelf".into(), "fiction".into());

    assert_eq!(
        template.build(&values),
        Err(BuildError::MissingParameter {
            name: "book".into()
        }),
    );
}

#[test]
fn hand_built_match_produces_a_matchable_path() {
    let template = Template::compile("/users/:user/files/*");
    let mut values = Match::default();
    values.params.insert("user".into(), "mara".into());
    values.trailing = "a/b".into();

    let path = template
        .build(&values)
        .expect("all template parameters are bound");
    assert_eq!(path, "/users/mara/files/a/b");
    assert_eq!(
        template
            .match_path(&path)
            .expect("a built path should match its template"),
        values,
    );
}
