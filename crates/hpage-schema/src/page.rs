//! # Page Pipeline
//!
//! Runs a whole content file through the schema:
//! split → parse → validate → project. The prose body is returned
//! untouched next to the model.

use serde::Serialize;

use hpage_core::{split_document, HpageError};

use crate::parse::parse;
use crate::validate::validate;
use crate::view::{to_view_model, RenderModel};

/// A validated home page: render model plus the opaque prose body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub model: RenderModel,
    pub body: String,
}

/// Load a home page from the full text of a content file.
///
/// Line numbers in syntax errors refer to the whole file, not just the
/// front-matter block.
///
/// # Errors
///
/// Returns [`HpageError::Malformed`] when the front matter cannot be split
/// or parsed, and [`HpageError::Validation`] when it breaks an invariant.
pub fn load_page(source: &str) -> Result<Page, HpageError> {
    let document = split_document(source)?;
    if !document.has_front_matter() {
        tracing::debug!("no front matter found; treating whole source as body");
    }

    let content = parse(document.front_matter())
        .map_err(|e| e.shift_lines(document.front_matter_line() - 1))?;
    let validated = validate(content)?;

    Ok(Page {
        model: to_view_model(&validated),
        body: document.body().to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpage_core::Location;

    #[test]
    fn loads_page_and_keeps_body() {
        let page = load_page("---\nlayout: home\n---\n\n## Why?\n\nBecause.\n").unwrap();
        assert_eq!(page.body, "\n## Why?\n\nBecause.\n");
        assert!(page.model.features.is_empty());
    }

    #[test]
    fn missing_front_matter_fails_on_layout() {
        let err = load_page("# No front matter here\n").unwrap_err();
        match err {
            HpageError::Validation(e) => assert_eq!(e.field, "layout"),
            other => panic!("expected validation error, got: {other}"),
        }
    }

    #[test]
    fn unterminated_front_matter_is_malformed() {
        let err = load_page("---\nlayout: home\n").unwrap_err();
        assert!(matches!(err, HpageError::Malformed(_)), "got: {err}");
    }

    #[test]
    fn syntax_error_line_is_relative_to_file() {
        let source = "---\nlayout: home\nhero: {name: [\n---\nbody\n";
        let block_err = parse("layout: home\nhero: {name: [\n").unwrap_err();
        let file_err = match load_page(source).unwrap_err() {
            HpageError::Malformed(e) => e,
            other => panic!("expected malformed error, got: {other}"),
        };
        assert!(matches!(file_err.location, Location::Position { .. }));
        assert_eq!(file_err.line(), block_err.line().map(|line| line + 1));
    }

    #[test]
    fn non_string_tags_fail_validation_at_their_path() {
        let err = load_page("---\nlayout: 1\n---\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid field 'layout': unrecognized layout '1' (expected one of: home)"
        );

        let source = "---\nlayout: home\nhero:\n  actions:\n    - theme: 7\n      link: /go\n---\n";
        match load_page(source).unwrap_err() {
            HpageError::Validation(e) => assert_eq!(e.field, "hero.actions[0].theme"),
            other => panic!("expected validation error, got: {other}"),
        }
    }

    #[test]
    fn shape_error_keeps_its_field_path() {
        let source = "---\nlayout: home\nfeatures:\n  - title: {a: b}\n---\n";
        match load_page(source).unwrap_err() {
            HpageError::Malformed(e) => {
                assert!(e.to_string().starts_with("malformed input at 'features[0].title': "));
            }
            other => panic!("expected malformed error, got: {other}"),
        }
    }

    #[test]
    fn validation_error_propagates() {
        let err = load_page("---\nlayout: landing\n---\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid field 'layout': unrecognized layout 'landing' (expected one of: home)"
        );
    }
}
