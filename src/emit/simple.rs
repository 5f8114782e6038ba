//! Template for the Simple Icons brand set.

use super::IconTemplate;
use super::markup::children_after_title;
use crate::error::MarkupError;

/// Simple Icons: single-path filled brand logos with a `<title>` element.
///
/// Exports are named `Brand<Name>`. The title is dropped and the remaining
/// markup is used as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simple;

impl IconTemplate for Simple {
    fn wrapper_name(&self) -> &'static str {
        "SimpleIcon"
    }

    fn wrapper_definition(&self) -> &'static str {
        r#"const SimpleIcon: Icon = props => <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" {...props} />"#
    }

    fn export_name(&self, icon_name: &str) -> String {
        format!("Brand{icon_name}")
    }

    fn inner_markup(&self, svg: &str) -> Result<String, MarkupError> {
        children_after_title(svg).map(str::to_string)
    }
}
