//! # Document Splitting
//!
//! A content file is a front-matter block fenced by `---` lines followed
//! by free-form prose. [`split_document`] separates the two without
//! interpreting either: the block goes to the schema parser, the body is
//! carried through to the renderer byte for byte.

use crate::error::MalformedInputError;

/// Line that opens and closes a front-matter block.
pub const FENCE: &str = "---";

const BOM: char = '\u{feff}';

/// A content file split into its front-matter block and prose body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    front_matter: &'a str,
    body: &'a str,
    front_matter_line: usize,
    fenced: bool,
}

impl<'a> Document<'a> {
    fn body_only(source: &'a str) -> Self {
        Self {
            front_matter: "",
            body: source,
            front_matter_line: 1,
            fenced: false,
        }
    }

    /// The text between the fences, excluding the fence lines.
    pub fn front_matter(&self) -> &'a str {
        self.front_matter
    }

    /// Everything after the closing fence, untouched.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// 1-based line in the source where the front-matter text begins.
    pub fn front_matter_line(&self) -> usize {
        self.front_matter_line
    }

    /// True when the source opened with a fence.
    pub fn has_front_matter(&self) -> bool {
        self.fenced
    }
}

/// Split `source` into front matter and body.
///
/// A source whose first line is not a fence has no front matter; the whole
/// source becomes the body. A leading byte-order mark is skipped. Fence
/// lines may carry trailing whitespace and CRLF endings.
///
/// # Errors
///
/// Returns a [`MalformedInputError`] at line 1 when the opening fence is
/// never closed.
pub fn split_document(source: &str) -> Result<Document<'_>, MalformedInputError> {
    let source = source.strip_prefix(BOM).unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok(Document::body_only(source));
    };
    if !is_fence(first) {
        return Ok(Document::body_only(source));
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        if is_fence(line) {
            return Ok(Document {
                front_matter: &source[block_start..offset],
                body: &source[offset + line.len()..],
                front_matter_line: 2,
                fenced: true,
            });
        }
        offset += line.len();
    }

    Err(MalformedInputError::at_position(
        1,
        1,
        "front matter opened with '---' is never closed",
    ))
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Location;

    #[test]
    fn splits_block_and_body() {
        let doc = split_document("---\nlayout: home\n---\n\n# Welcome\n").unwrap();
        assert!(doc.has_front_matter());
        assert_eq!(doc.front_matter(), "layout: home\n");
        assert_eq!(doc.body(), "\n# Welcome\n");
        assert_eq!(doc.front_matter_line(), 2);
    }

    #[test]
    fn body_is_untouched() {
        let body = "Some *prose*\n---\nwith a thematic break\n";
        let source = format!("---\nlayout: home\n---\n{body}");
        let doc = split_document(&source).unwrap();
        assert_eq!(doc.body(), body);
    }

    #[test]
    fn no_fence_means_body_only() {
        let doc = split_document("# Just prose\n").unwrap();
        assert!(!doc.has_front_matter());
        assert_eq!(doc.front_matter(), "");
        assert_eq!(doc.body(), "# Just prose\n");
    }

    #[test]
    fn empty_source() {
        let doc = split_document("").unwrap();
        assert!(!doc.has_front_matter());
        assert_eq!(doc.body(), "");
    }

    #[test]
    fn empty_block() {
        let doc = split_document("---\n---\nbody").unwrap();
        assert!(doc.has_front_matter());
        assert_eq!(doc.front_matter(), "");
        assert_eq!(doc.body(), "body");
    }

    #[test]
    fn closing_fence_at_eof_without_newline() {
        let doc = split_document("---\nlayout: home\n---").unwrap();
        assert_eq!(doc.front_matter(), "layout: home\n");
        assert_eq!(doc.body(), "");
    }

    #[test]
    fn crlf_and_trailing_whitespace_fences() {
        let doc = split_document("--- \r\nlayout: home\r\n---\r\nbody\r\n").unwrap();
        assert_eq!(doc.front_matter(), "layout: home\r\n");
        assert_eq!(doc.body(), "body\r\n");
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        let doc = split_document("\u{feff}---\nlayout: home\n---\n").unwrap();
        assert!(doc.has_front_matter());
        assert_eq!(doc.front_matter(), "layout: home\n");
    }

    #[test]
    fn unterminated_block_is_malformed_at_line_one() {
        let err = split_document("---\nlayout: home\nhero:\n").unwrap_err();
        assert_eq!(err.location, Location::Position { line: 1, column: 1 });
    }

    #[test]
    fn longer_dash_runs_are_not_fences() {
        let doc = split_document("----\nlayout: home\n").unwrap();
        assert!(!doc.has_front_matter());
    }
}
