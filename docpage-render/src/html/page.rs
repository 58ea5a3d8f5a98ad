//! Article page layout.
//!
//! Assembles the sidebar, the two mobile inline navigation panels, the
//! article body, the "last updated" note and the report-issue link into a
//! complete HTML document.

use docpage_core::config::SiteStrings;
use docpage_core::page::{MobilePanel, PageState, PanelIcon};

use super::escape::{escape_attr, escape_text};

/// Pre-rendered navigation for the three instances on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHtml {
    /// Desktop sidebar tree.
    pub sidebar: String,
    /// Mobile panel above the article.
    pub mobile_top: String,
    /// Mobile panel below the article.
    pub mobile_bottom: String,
}

impl NavigationHtml {
    fn mobile(&self, panel: MobilePanel) -> &str {
        match panel {
            MobilePanel::Top => &self.mobile_top,
            MobilePanel::Bottom => &self.mobile_bottom,
        }
    }
}

/// Everything the layout needs, already resolved.
#[derive(Debug, Clone)]
pub struct ArticleView<'a> {
    /// Document title.
    pub title: &'a str,
    /// Language tag for the `<html>` element; omitted when empty.
    pub lang: &'a str,
    /// Rendered article body.
    pub body_html: &'a str,
    /// Navigation markup; `None` renders the full-width `no-nav` layout.
    pub navigation: Option<&'a NavigationHtml>,
    /// Page state driving sidebar height, position class and panel flags.
    pub state: &'a PageState,
    /// Formatted "last updated" text.
    pub last_updated: Option<&'a str>,
    /// Report-issue URL; the link is omitted when `None`.
    pub issue_href: Option<&'a str>,
    /// Labels.
    pub strings: &'a SiteStrings,
}

/// Renders the complete page.
#[must_use]
pub fn render_article(view: &ArticleView<'_>) -> String {
    let mut sections = Vec::new();

    sections.push("<!DOCTYPE html>".to_string());
    if view.lang.is_empty() {
        sections.push("<html>".to_string());
    } else {
        sections.push(format!("<html lang=\"{}\">", escape_attr(view.lang)));
    }
    sections.push("<head>".to_string());
    sections.push("<meta charset=\"utf-8\">".to_string());
    sections.push(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
    );
    sections.push(format!("<title>{}</title>", escape_text(view.title)));
    sections.push("<meta name=\"description\" content=\"\">".to_string());
    sections.push("</head>".to_string());
    sections.push("<body>".to_string());
    sections.push("<div class=\"page-content\">".to_string());

    if let Some(navigation) = view.navigation {
        sections.push(format!(
            "<aside class=\"side-navigation position-{}\" style=\"min-height: {}rem\">",
            view.state.position(),
            view.state.sidebar_min_height_rem()
        ));
        sections.push(navigation.sidebar.clone());
        sections.push("</aside>".to_string());
        sections.push("<main class=\"main-content\">".to_string());
        push_mobile_panel(&mut sections, navigation, view.state, MobilePanel::Top);
    } else {
        sections.push("<main class=\"main-content no-nav\">".to_string());
    }

    sections.push("<article class=\"markdown-content\">".to_string());
    sections.push(view.body_html.to_string());
    sections.push("</article>".to_string());

    sections.push("<div class=\"article-meta\">".to_string());
    if let Some(last_updated) = view.last_updated {
        sections.push(format!(
            "<div class=\"last-updated\"><p><small><em>{}: {}</em></small></p></div>",
            escape_text(&view.strings.last_updated),
            escape_text(last_updated)
        ));
    }
    if let Some(href) = view.issue_href {
        sections.push(format!(
            "<a class=\"report-an-issue\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"><span class=\"icon icon-github\" aria-hidden=\"true\"></span><p>{}</p></a>",
            escape_attr(href),
            escape_text(&view.strings.report_an_issue)
        ));
    }
    sections.push("</div>".to_string());

    if let Some(navigation) = view.navigation {
        push_mobile_panel(&mut sections, navigation, view.state, MobilePanel::Bottom);
    }

    sections.push("</main>".to_string());
    sections.push("</div>".to_string());
    sections.push("</body>".to_string());
    sections.push("</html>".to_string());

    sections.join("\n")
}

fn push_mobile_panel(
    sections: &mut Vec<String>,
    navigation: &NavigationHtml,
    state: &PageState,
    panel: MobilePanel,
) {
    let open = if state.is_open(panel) { " open" } else { "" };
    let icon = match state.panel_icon(panel) {
        PanelIcon::Ellipsis => "ellipsis-h",
        PanelIcon::ChevronUp => "chevron-up",
    };

    sections.push(format!(
        "<div class=\"mobile-inline-navigation{open}\" data-panel=\"{}\">",
        panel.as_str()
    ));
    sections.push("<div>".to_string());
    sections.push(navigation.mobile(panel).to_string());
    sections.push("</div>".to_string());
    sections.push(format!(
        "<a href=\"#\" class=\"mobile-navigation-toggle\" aria-hidden=\"true\" data-toggle=\"{}\"><span class=\"icon icon-{icon}\"></span></a>",
        panel.as_str()
    ));
    sections.push("</div>".to_string());
}
