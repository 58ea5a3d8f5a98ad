//! Navigation tree markup.
//!
//! Every level is a `<ul role="navigation">`. Branches render as an
//! accordion header followed by a region holding the nested level; a
//! collapsed region stays in the markup without the `expanded` class so
//! styles can animate its height.

use docpage_core::navigation::{NavRow, NavigationTree, Position, resolve_path};

use super::escape::{escape_attr, escape_text, slugify};

/// How one navigation instance is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct NavOptions<'a> {
    /// Element id of the root list; nested ids derive from it.
    pub id: &'a str,
    /// Accessible label of the root list.
    pub aria_label: &'a str,
    /// Scroll position reflected in the root's `position-*` class.
    pub position: Position,
    /// Measured max width, emitted as an inline style when known.
    pub max_width: Option<f64>,
}

/// Renders `tree` and all its subtrees.
#[must_use]
pub fn render_navigation(tree: &NavigationTree<'_>, options: &NavOptions<'_>) -> String {
    let mut lines = Vec::new();

    let mut attrs = format!(
        "<ul id=\"{}\" role=\"navigation\" aria-label=\"{}\" class=\"nav-tree position-{}\"",
        escape_attr(options.id),
        escape_attr(options.aria_label),
        options.position
    );
    if let Some(width) = options.max_width {
        attrs.push_str(&format!(" style=\"max-width: {width}px\""));
    }
    attrs.push('>');
    lines.push(attrs);

    push_rows(&mut lines, &tree.rows(), tree.lang(), options.id);
    lines.push("</ul>".to_string());
    lines.join("\n")
}

fn push_rows(lines: &mut Vec<String>, rows: &[NavRow<'_>], lang: &str, id_prefix: &str) {
    for row in rows {
        match row {
            NavRow::Link {
                path,
                title,
                active,
            } => {
                lines.push(format!(
                    "<li><a href=\"{}\" class=\"{}\" title=\"{}\">{}</a></li>",
                    escape_attr(&resolve_path(lang, path)),
                    class_list(&[("nav-link", true), ("active", *active)]),
                    escape_attr(title),
                    escape_text(title)
                ));
            }
            NavRow::External { href, title } => {
                lines.push(format!(
                    "<li><a href=\"{}\" class=\"nav-link external\" title=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}<span class=\"icon icon-external-link\" aria-hidden=\"true\"></span></a></li>",
                    escape_attr(href),
                    escape_attr(title),
                    escape_text(title)
                ));
            }
            NavRow::Branch {
                path,
                title,
                has_content,
                active,
                expanded,
                children,
            } => {
                let header_id = format!("{id_prefix}-{}", slugify(path));
                let panel_id = format!("{header_id}-panel");
                let chevron = if *expanded { "chevron-down" } else { "chevron-right" };

                lines.push("<li>".to_string());
                lines.push(format!(
                    "<a href=\"{}\" id=\"{}\" class=\"{}\" aria-disabled=\"{active}\" aria-controls=\"{}\" aria-expanded=\"{expanded}\">{}<span class=\"icon icon-{chevron}\" aria-hidden=\"true\"></span></a>",
                    escape_attr(&resolve_path(lang, path)),
                    escape_attr(&header_id),
                    class_list(&[
                        ("accordion-toggle", true),
                        ("has-no-content", !*has_content),
                        ("active", *active),
                    ]),
                    escape_attr(&panel_id),
                    escape_text(title)
                ));
                lines.push(format!(
                    "<div id=\"{}\" role=\"region\" class=\"{}\">",
                    escape_attr(&panel_id),
                    class_list(&[("accordion", true), ("expanded", *expanded)])
                ));
                lines.push(format!(
                    "<ul role=\"navigation\" aria-label=\"{}\" aria-labelledby=\"{}\" class=\"nav-tree\">",
                    escape_attr(&format!("{title} subnavigation")),
                    escape_attr(&header_id)
                ));
                push_rows(lines, children, lang, id_prefix);
                lines.push("</ul>".to_string());
                lines.push("</div>".to_string());
                lines.push("</li>".to_string());
            }
        }
    }
}

fn class_list(classes: &[(&str, bool)]) -> String {
    classes
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpage_core::navigation::NavigationContext;

    fn context() -> NavigationContext {
        serde_yaml::from_str(
            r"
key: docs
title: Docs
children:
  - path: /docs/intro
    title: Intro & Setup
  - path: /docs/guides
    title: Guides
    children:
      - path: /docs/guides/first
        title: First
  - path: /docs/api
    title: API
    has_content: true
    children:
      - path: /docs/api/v1
        title: V1
  - path: /docs/forum
    title: Forum
    external_href: https://forum.example.org
    children:
      - path: /docs/forum/hidden
        title: Hidden
",
        )
        .unwrap()
    }

    fn options(position: Position, max_width: Option<f64>) -> NavOptions<'static> {
        NavOptions {
            id: "side-nav",
            aria_label: "Docs subnavigation",
            position,
            max_width,
        }
    }

    #[test]
    fn test_root_attributes() {
        let ctx = context();
        let arena = ctx.arena();
        let tree = NavigationTree::root(&arena, ctx.root_path(), "en", "/en/docs/intro");
        let html = render_navigation(&tree, &options(Position::Fixed, Some(260.0)));
        assert!(html.starts_with(
            "<ul id=\"side-nav\" role=\"navigation\" aria-label=\"Docs subnavigation\" class=\"nav-tree position-fixed\" style=\"max-width: 260px\">"
        ));
        assert!(html.ends_with("</ul>"));
    }

    #[test]
    fn test_leaf_links_once_each_with_active_class() {
        let ctx = context();
        let arena = ctx.arena();
        let tree = NavigationTree::root(&arena, ctx.root_path(), "en", "/en/docs/intro");
        let html = render_navigation(&tree, &options(Position::Top, None));

        assert!(html.contains(
            "<li><a href=\"/en/docs/intro\" class=\"nav-link active\" title=\"Intro &amp; Setup\">Intro &amp; Setup</a></li>"
        ));
        assert_eq!(html.matches("href=\"/en/docs/guides/first\"").count(), 1);
        assert!(html.contains("class=\"nav-link\" title=\"First\">First</a>"));
        assert!(!html.contains("style="));
    }

    #[test]
    fn test_branch_header_and_region() {
        let ctx = context();
        let arena = ctx.arena();
        let tree = NavigationTree::root(&arena, ctx.root_path(), "en", "/en/docs/guides/first");
        let html = render_navigation(&tree, &options(Position::Top, None));

        assert!(html.contains(
            "<a href=\"/en/docs/guides\" id=\"side-nav-docs-guides\" class=\"accordion-toggle has-no-content active\" aria-disabled=\"true\" aria-controls=\"side-nav-docs-guides-panel\" aria-expanded=\"true\">Guides<span class=\"icon icon-chevron-down\" aria-hidden=\"true\"></span></a>"
        ));
        assert!(html.contains(
            "<div id=\"side-nav-docs-guides-panel\" role=\"region\" class=\"accordion expanded\">"
        ));
        assert!(html.contains(
            "<ul role=\"navigation\" aria-label=\"Guides subnavigation\" aria-labelledby=\"side-nav-docs-guides\" class=\"nav-tree\">"
        ));
    }

    #[test]
    fn test_collapsed_branch_stays_in_markup() {
        let ctx = context();
        let arena = ctx.arena();
        let tree = NavigationTree::root(&arena, ctx.root_path(), "en", "/en/docs/intro");
        let html = render_navigation(&tree, &options(Position::Top, None));

        assert!(html.contains(
            "<a href=\"/en/docs/api\" id=\"side-nav-docs-api\" class=\"accordion-toggle\" aria-disabled=\"false\" aria-controls=\"side-nav-docs-api-panel\" aria-expanded=\"false\">API<span class=\"icon icon-chevron-right\" aria-hidden=\"true\"></span></a>"
        ));
        assert!(html.contains("<div id=\"side-nav-docs-api-panel\" role=\"region\" class=\"accordion\">"));
        assert!(html.contains("href=\"/en/docs/api/v1\""));
    }

    #[test]
    fn test_external_row_ignores_children() {
        let ctx = context();
        let arena = ctx.arena();
        let tree = NavigationTree::root(&arena, ctx.root_path(), "en", "/en/docs/intro");
        let html = render_navigation(&tree, &options(Position::Top, None));

        assert!(html.contains(
            "<a href=\"https://forum.example.org\" class=\"nav-link external\" title=\"Forum\" target=\"_blank\" rel=\"noopener noreferrer\">Forum<span class=\"icon icon-external-link\" aria-hidden=\"true\"></span></a>"
        ));
        assert!(!html.contains("Hidden"));
    }

    #[test]
    fn test_toggle_reflected_in_markup() {
        let ctx = context();
        let arena = ctx.arena();
        let mut tree = NavigationTree::root(&arena, ctx.root_path(), "", "/docs/intro");
        tree.toggle("/docs/guides");
        let html = render_navigation(&tree, &options(Position::Top, None));
        assert!(html.contains("<div id=\"side-nav-docs-guides-panel\" role=\"region\" class=\"accordion expanded\">"));
        assert!(html.contains("href=\"/docs/guides/first\""));
    }
}
