//! Structural extraction of an icon's inner markup.
//!
//! The SVG is parsed with `roxmltree` and the inner markup is sliced from the
//! original text using node ranges, so attribute order, whitespace and
//! self-closing tags are reproduced exactly. Inputs that do not have the
//! expected shape fail with a [`MarkupError`] instead of producing garbled
//! output.

use roxmltree::{Document, Node};

use crate::error::MarkupError;

/// Returns the root `<svg>` element of a parsed document.
fn svg_root<'a, 'input>(doc: &'a Document<'input>) -> Result<Node<'a, 'input>, MarkupError> {
    let root = doc.root_element();
    let name = root.tag_name().name();
    if name != "svg" {
        return Err(MarkupError::UnexpectedRoot(name.to_string()));
    }
    Ok(root)
}

/// Returns the source text of `nodes`, from the start of the first to the
/// end of the last.
fn span<'a, 'input: 'a>(
    svg: &'input str,
    mut nodes: impl Iterator<Item = Node<'a, 'input>>,
) -> Result<&'input str, MarkupError> {
    let first = nodes.next().ok_or(MarkupError::Empty)?;
    let last = nodes.last().unwrap_or(first);
    Ok(&svg[first.range().start..last.range().end])
}

/// Returns everything between the root `<svg>` opening and closing tags,
/// with surrounding whitespace trimmed.
pub fn root_children(svg: &str) -> Result<&str, MarkupError> {
    let doc = Document::parse(svg)?;
    let root = svg_root(&doc)?;
    non_blank(span(svg, root.children())?.trim())
}

/// Returns everything after the root-level `<title>` element up to the root
/// closing tag. The title itself is dropped.
pub fn children_after_title(svg: &str) -> Result<&str, MarkupError> {
    let doc = Document::parse(svg)?;
    let root = svg_root(&doc)?;
    let title = root
        .children()
        .find(|node| node.has_tag_name("title"))
        .ok_or(MarkupError::MissingTitle)?;

    let end = title
        .next_siblings()
        .last()
        .map_or(title.range().end, |node| node.range().end);
    non_blank(&svg[title.range().end..end])
}

fn non_blank(markup: &str) -> Result<&str, MarkupError> {
    if markup.trim().is_empty() {
        return Err(MarkupError::Empty);
    }
    Ok(markup)
}

/// Doubles the leading indentation of every line.
///
/// Each pair of leading spaces becomes four; an odd trailing space is kept.
pub fn reindent(markup: &str) -> String {
    markup
        .split('\n')
        .map(|line| {
            let body = line.trim_start_matches(' ');
            let indent = line.len() - body.len();
            format!("{}{}{}", "    ".repeat(indent / 2), " ".repeat(indent % 2), body)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LUCIDE_CHECK: &str = "<svg\n  xmlns=\"http://www.w3.org/2000/svg\"\n  width=\"24\"\n  height=\"24\"\n  viewBox=\"0 0 24 24\"\n  fill=\"none\"\n  stroke=\"currentColor\"\n  stroke-width=\"2\"\n  stroke-linecap=\"round\"\n  stroke-linejoin=\"round\"\n>\n  <circle cx=\"12\" cy=\"12\" r=\"10\" />\n  <path d=\"m9 12 2 2 4-4\" />\n</svg>\n";

    const SIMPLE_GITHUB: &str = r#"<svg role="img" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><title>GitHub</title><path d="M12 .297c-6.63 0-12 5.373-12 12"/></svg>"#;

    #[test]
    fn root_children_strips_root_tags() {
        let inner = root_children(LUCIDE_CHECK).unwrap();
        assert_eq!(
            inner,
            "<circle cx=\"12\" cy=\"12\" r=\"10\" />\n  <path d=\"m9 12 2 2 4-4\" />"
        );
    }

    #[test]
    fn root_children_matches_fixed_header_slicing() {
        // Upstream Lucide files share a 203 byte header (including the first
        // child's indentation).
        let end = LUCIDE_CHECK.find("\n</svg>").unwrap();
        let sliced = LUCIDE_CHECK[203..end].replace("  ", "    ");
        assert_eq!(reindent(root_children(LUCIDE_CHECK).unwrap()), sliced);
    }

    #[test]
    fn root_children_keeps_nested_structure() {
        let svg = "<svg>\n  <g>\n    <path d=\"M0 0\" />\n  </g>\n</svg>";
        assert_eq!(
            reindent(root_children(svg).unwrap()),
            "<g>\n        <path d=\"M0 0\" />\n    </g>"
        );
    }

    #[test]
    fn root_children_rejects_other_roots() {
        let err = root_children("<html><p/></html>").unwrap_err();
        assert!(matches!(err, MarkupError::UnexpectedRoot(name) if name == "html"));
    }

    #[test]
    fn root_children_rejects_malformed_xml() {
        let err = root_children("<svg><path></svg>").unwrap_err();
        assert!(matches!(err, MarkupError::Parse(_)));
    }

    #[test]
    fn root_children_rejects_empty_svg() {
        assert!(matches!(root_children("<svg>\n</svg>"), Err(MarkupError::Empty)));
        assert!(matches!(root_children("<svg/>"), Err(MarkupError::Empty)));
    }

    #[test]
    fn root_children_accepts_text_content() {
        assert_eq!(root_children("<svg viewBox=\"0 0 24 24\">ABC</svg>").unwrap(), "ABC");
    }

    #[test]
    fn children_after_title_drops_title() {
        let inner = children_after_title(SIMPLE_GITHUB).unwrap();
        assert_eq!(inner, r#"<path d="M12 .297c-6.63 0-12 5.373-12 12"/>"#);
    }

    #[test]
    fn children_after_title_matches_index_slicing() {
        let start = SIMPLE_GITHUB.find("</title>").unwrap() + 8;
        let end = SIMPLE_GITHUB.find("</svg>").unwrap();
        assert_eq!(children_after_title(SIMPLE_GITHUB).unwrap(), &SIMPLE_GITHUB[start..end]);
    }

    #[test]
    fn children_after_title_keeps_multiple_siblings() {
        let svg = r#"<svg><title>X</title><path d="A"/><path d="B"/></svg>"#;
        assert_eq!(children_after_title(svg).unwrap(), r#"<path d="A"/><path d="B"/>"#);
    }

    #[test]
    fn children_after_title_requires_title() {
        let err = children_after_title(r#"<svg><path d="A"/></svg>"#).unwrap_err();
        assert!(matches!(err, MarkupError::MissingTitle));
    }

    #[test]
    fn children_after_title_ignores_nested_titles() {
        let svg = r#"<svg><g><title>X</title></g><path d="A"/></svg>"#;
        assert!(matches!(children_after_title(svg), Err(MarkupError::MissingTitle)));
    }

    #[test]
    fn children_after_title_rejects_title_only() {
        let svg = r#"<svg><title>X</title></svg>"#;
        assert!(matches!(children_after_title(svg), Err(MarkupError::Empty)));
    }

    #[test]
    fn reindent_doubles_leading_spaces() {
        assert_eq!(reindent("<a/>\n  <b/>\n    <c/>"), "<a/>\n    <b/>\n        <c/>");
        assert_eq!(reindent("   <odd/>"), "     <odd/>");
        assert_eq!(reindent("<a  b/>"), "<a  b/>");
    }
}
