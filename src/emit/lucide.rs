//! Template for the Lucide icon set.

use super::markup::{reindent, root_children};
use super::IconTemplate;
use crate::error::MarkupError;

/// Lucide icons: stroked outlines on a 24x24 grid.
///
/// Exports are named `<Name>Icon`. The inner markup is everything inside the
/// root `<svg>`, re-indented to sit inside the wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lucide;

impl IconTemplate for Lucide {
    fn wrapper_name(&self) -> &'static str {
        "LucideIcon"
    }

    fn wrapper_definition(&self) -> &'static str {
        concat!(
            "const LucideIcon: Icon = props => (\n",
            r#" <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" strokeWidth="2" strokeLinecap="round" strokeLinejoin="round" {...props} />"#,
            "\n)",
        )
    }

    fn export_name(&self, icon_name: &str) -> String {
        format!("{icon_name}Icon")
    }

    fn inner_markup(&self, svg: &str) -> Result<String, MarkupError> {
        root_children(svg).map(reindent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::render_document;
    use crate::icon::Icon;

    const CIRCLE_CHECK: &str = "<svg\n  xmlns=\"http://www.w3.org/2000/svg\"\n  width=\"24\"\n  height=\"24\"\n  viewBox=\"0 0 24 24\"\n  fill=\"none\"\n  stroke=\"currentColor\"\n  stroke-width=\"2\"\n  stroke-linecap=\"round\"\n  stroke-linejoin=\"round\"\n>\n  <circle cx=\"12\" cy=\"12\" r=\"10\" />\n  <path d=\"m9 12 2 2 4-4\" />\n</svg>\n";

    #[test]
    fn export_name_appends_icon() {
        assert_eq!(Lucide.export_name("ArrowUp"), "ArrowUpIcon");
    }

    #[test]
    fn renders_lucide_document() {
        let icon = Icon::new("circle-check.svg", "CircleCheck", CIRCLE_CHECK);
        let document = render_document(&Lucide, std::slice::from_ref(&icon)).unwrap();

        let expected = format!(
            concat!(
                "\nconst LucideIcon: Icon = props => (\n",
                " <svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" strokeWidth=\"2\" strokeLinecap=\"round\" strokeLinejoin=\"round\" {{...props}} />\n",
                ")\n",
                "\n/** ![](data:image/svg+xml;base64,{}) */\n",
                "export const CircleCheckIcon: Icon = props => (\n",
                "  <LucideIcon {{...props}}>\n",
                "    <circle cx=\"12\" cy=\"12\" r=\"10\" />\n",
                "    <path d=\"m9 12 2 2 4-4\" />\n",
                "  </LucideIcon>\n",
                ")\n",
                "\n",
            ),
            icon.preview
        );
        assert_eq!(document, expected);
    }
}
