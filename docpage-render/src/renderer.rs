//! Page rendering entry point.

use docpage_core::config::SiteConfig;
use docpage_core::navigation::{NavigationTree, Position};
use docpage_core::page::{Location, PageContext, PageState};
use tracing::{debug, warn};

use crate::content::{CommonMarkRenderer, ComponentRegistry, MarkdownRenderer, render_content};
use crate::html::{ArticleView, NavOptions, NavigationHtml, render_article, render_navigation};
use crate::issue::report_issue_href;

/// Element id of the desktop sidebar navigation.
pub const SIDEBAR_NAV_ID: &str = "side-navigation";

/// Renders article pages for one site.
///
/// Holds the site configuration, the component registry and the markdown
/// renderer; each call renders one page from immutable inputs.
#[derive(Debug)]
pub struct PageRenderer<M = CommonMarkRenderer> {
    config: SiteConfig,
    components: ComponentRegistry,
    markdown: M,
}

impl PageRenderer {
    /// Renderer using the default CommonMark renderer.
    #[must_use]
    pub fn new(config: SiteConfig, components: ComponentRegistry) -> Self {
        Self::with_markdown(config, components, CommonMarkRenderer::default())
    }
}

impl<M: MarkdownRenderer> PageRenderer<M> {
    /// Renderer with a custom markdown renderer.
    #[must_use]
    pub const fn with_markdown(config: SiteConfig, components: ComponentRegistry, markdown: M) -> Self {
        Self {
            config,
            components,
            markdown,
        }
    }

    /// Site configuration.
    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Registered components.
    #[must_use]
    pub const fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    /// Fresh page state using the configured thresholds.
    #[must_use]
    pub const fn initial_state(&self) -> PageState {
        PageState::new(self.config.thresholds())
    }

    /// Renders `page` at `location` in its initial state.
    #[must_use]
    pub fn render(&self, page: &PageContext, location: &Location) -> String {
        self.render_with_state(page, location, &self.initial_state())
    }

    /// Renders `page` at `location` reflecting `state`.
    ///
    /// A malformed repository drops the report-issue link instead of
    /// failing the page.
    #[must_use]
    pub fn render_with_state(
        &self,
        page: &PageContext,
        location: &Location,
        state: &PageState,
    ) -> String {
        let body_html = render_content(&page.content, &self.markdown, &self.components);
        let navigation = Self::navigation_html(page, location, state);
        let issue_href = self.issue_href(location);
        let last_updated = page.last_updated_label(&self.config.date_format);

        debug!(
            title = %page.page_title,
            location = %location,
            navigation = navigation.is_some(),
            issue_link = issue_href.is_some(),
            "page rendered"
        );

        render_article(&ArticleView {
            title: &page.page_title,
            lang: &page.lang,
            body_html: &body_html,
            navigation: navigation.as_ref(),
            state,
            last_updated: last_updated.as_deref(),
            issue_href: issue_href.as_deref(),
            strings: &self.config.strings,
        })
    }

    fn issue_href(&self, location: &Location) -> Option<String> {
        let repository = self.config.repository()?;
        match report_issue_href(repository, location) {
            Ok(href) => Some(href),
            Err(e) => {
                warn!(error = %e, "report-issue link omitted");
                None
            }
        }
    }

    fn navigation_html(
        page: &PageContext,
        location: &Location,
        state: &PageState,
    ) -> Option<NavigationHtml> {
        if !page.has_navigation() {
            return None;
        }

        let context = &page.navigation_context;
        let arena = context.arena();
        let root_path = context.root_path();
        let aria_label = format!("{} subnavigation", context.title);
        let current = location.pathname.as_str();

        let sidebar = NavigationTree::root(&arena, root_path.clone(), &page.lang, current);
        let mobile = NavigationTree::root(&arena, root_path, &page.lang, current).with_auto_scroll(false);

        let sidebar_html = render_navigation(
            &sidebar,
            &NavOptions {
                id: SIDEBAR_NAV_ID,
                aria_label: &aria_label,
                position: state.position(),
                max_width: state.max_width(),
            },
        );
        let mobile_html = |id: &str| {
            render_navigation(
                &mobile,
                &NavOptions {
                    id,
                    aria_label: &aria_label,
                    position: Position::Top,
                    max_width: None,
                },
            )
        };

        Some(NavigationHtml {
            sidebar: sidebar_html,
            mobile_top: mobile_html("mobile-navigation-top"),
            mobile_bottom: mobile_html("mobile-navigation-bottom"),
        })
    }
}
