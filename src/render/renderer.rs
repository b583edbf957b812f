//! Landing page renderer.

use minijinja::{context, Environment};

use super::filters::register_filters;
use super::page::{LandingPage, ToggleView};
use crate::error::Error;
use crate::theme::{ColorMode, ThemeResolver};

const PAGE_TEMPLATE_NAME: &str = "page.html";
const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

/// Renders the landing page for the resolver's current theme.
///
/// The root element's classes, the toggle label and the storage key all come
/// from the [`ThemeResolver`], so the page always matches the resolved mode.
///
/// # Example
///
/// ```rust
/// use modern_gui::{LandingPage, PageRenderer, ResolutionContext, ThemeResolver};
///
/// let mut resolver = ThemeResolver::new(ResolutionContext::degraded());
/// resolver.toggle();
///
/// let renderer = PageRenderer::new().unwrap();
/// let html = renderer.render(&LandingPage::default(), &resolver).unwrap();
/// assert!(html.contains(r#"class="dark""#));
/// ```
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Creates a renderer with the built-in page template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to compile.
    pub fn new() -> Result<Self, Error> {
        let mut env = Self::environment();
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Creates a renderer with a custom page template.
    ///
    /// The template sees the same context as the built-in one: `page`,
    /// `toggle`, `labels`, `icons`, `is_dark`, `root_class` and
    /// `storage_key`. HTML auto-escaping stays on.
    pub fn with_template(source: &str) -> Result<Self, Error> {
        let mut env = Self::environment();
        env.add_template_owned(PAGE_TEMPLATE_NAME, source.to_string())?;
        Ok(Self { env })
    }

    fn environment() -> Environment<'static> {
        let mut env = Environment::new();
        register_filters(&mut env);
        env
    }

    /// Renders the page for the resolver's current state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, page: &LandingPage, resolver: &ThemeResolver) -> Result<String, Error> {
        let mode = resolver.current();
        let tmpl = self.env.get_template(PAGE_TEMPLATE_NAME)?;
        let html = tmpl.render(context! {
            page => page,
            toggle => ToggleView::for_mode(mode),
            labels => context! {
                light => ToggleView::for_mode(ColorMode::Light).label,
                dark => ToggleView::for_mode(ColorMode::Dark).label,
            },
            icons => context! {
                light => ToggleView::for_mode(ColorMode::Light).icon,
                dark => ToggleView::for_mode(ColorMode::Dark).icon,
            },
            is_dark => mode.is_dark(),
            root_class => resolver.root().class_attr(),
            storage_key => resolver.key(),
        })?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Feature;
    use crate::theme::{FixedAmbient, MemoryStore, ResolutionContext};

    fn resolver(prefers_dark: bool) -> ThemeResolver {
        ThemeResolver::new(ResolutionContext::full(
            MemoryStore::new(),
            FixedAmbient(prefers_dark),
        ))
    }

    #[test]
    fn test_render_light_page() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render(&LandingPage::default(), &resolver(false))
            .unwrap();

        assert!(html.contains(r#"class="""#));
        assert!(html.contains(">Claro</span>"));
        assert!(html.contains(r#"aria-pressed="false""#));
        assert!(html.contains(r#"data-theme-key="theme""#));
    }

    #[test]
    fn test_render_dark_page() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render(&LandingPage::default(), &resolver(true))
            .unwrap();

        assert!(html.contains(r#"<html lang="pt-BR" class="dark""#));
        assert!(html.contains(">Escuro</span>"));
        assert!(html.contains(r#"aria-pressed="true""#));
    }

    #[test]
    fn test_render_lists_features_and_nav() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render(&LandingPage::default(), &resolver(false))
            .unwrap();

        for feature in &LandingPage::default().features {
            assert!(html.contains(&feature.title));
        }
        assert!(html.contains(r##"href="#pricing""##));
    }

    #[test]
    fn test_render_escapes_content() {
        let page = LandingPage {
            features: vec![Feature::new("<script>", "a & b")],
            ..LandingPage::default()
        };
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render(&page, &resolver(false)).unwrap();

        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_client_script_syncs_state_on_load() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render(&LandingPage::default(), &resolver(false))
            .unwrap();

        let head = &html[..html.find("</head>").unwrap()];
        assert!(head.contains(r#"window.localStorage.setItem(key, dark ? "dark" : "light")"#));

        let body = &html[html.find("<body").unwrap()..];
        assert!(body.contains(r#"apply(root.classList.contains("dark"));"#));
        assert!(body.contains(r#"button.setAttribute("aria-pressed", dark ? "true" : "false");"#));
        assert!(body.contains(r#"label.textContent = dark ? "Escuro" : "Claro";"#));
        assert!(body.contains(r#"window.localStorage.setItem(key, dark ? "dark" : "light")"#));
    }

    #[test]
    fn test_custom_template() {
        let renderer =
            PageRenderer::with_template("{{ page.brand }}:{{ root_class }}:{{ toggle.icon }}")
                .unwrap();
        let html = renderer
            .render(&LandingPage::default(), &resolver(true))
            .unwrap();
        assert_eq!(html, "Modern GUI:dark:moon");
    }

    #[test]
    fn test_custom_template_syntax_error() {
        assert!(PageRenderer::with_template("{% if %}").is_err());
    }
}
