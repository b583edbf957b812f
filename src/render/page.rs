//! Landing page content and the toggle's view model.

use serde::{Deserialize, Serialize};

use crate::theme::ColorMode;

/// A navigation link in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// One card in the feature grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub desc: String,
}

impl Feature {
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
        }
    }
}

/// The hero banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub badge: String,
    pub title: String,
    pub lead: String,
    pub primary: NavLink,
    pub secondary: NavLink,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            badge: "Novo • UI moderna pronta para produção".into(),
            title: "Construa interfaces bonitas com velocidade".into(),
            lead: "Comece com uma base sólida de componentes e estilos. \
                   Tema claro/escuro, responsivo e acessível."
                .into(),
            primary: NavLink::new("Começar agora", "#features"),
            secondary: NavLink::new("Ver código", "#"),
        }
    }
}

/// Everything the landing page displays apart from the theme.
///
/// Every field has a default, so a configuration file only needs to name
/// what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingPage {
    pub lang: String,
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub sign_in: NavLink,
    pub hero: Hero,
    pub features_title: String,
    pub features: Vec<Feature>,
    pub footer: String,
}

impl Default for LandingPage {
    fn default() -> Self {
        Self {
            lang: "pt-BR".into(),
            brand: "Modern GUI".into(),
            nav: vec![
                NavLink::new("Recursos", "#features"),
                NavLink::new("Preços", "#pricing"),
                NavLink::new("FAQ", "#faq"),
            ],
            sign_in: NavLink::new("Entrar", "#"),
            hero: Hero::default(),
            features_title: "Recursos".into(),
            features: vec![
                Feature::new("Tema dinâmico", "Claro/Escuro com um clique."),
                Feature::new("Responsivo", "Design que se adapta a qualquer tela."),
                Feature::new("Acessível", "Melhores práticas de acessibilidade incluídas."),
                Feature::new("Developer-first", "Stack moderno com Rust + MiniJinja."),
            ],
            footer: "Feito com Rust + Tailwind.".into(),
        }
    }
}

/// What the theme toggle button shows for a given mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleView {
    pub label: &'static str,
    pub icon: &'static str,
    pub aria_label: &'static str,
}

impl ToggleView {
    pub fn for_mode(mode: ColorMode) -> Self {
        let (label, icon) = match mode {
            ColorMode::Light => ("Claro", "sun"),
            ColorMode::Dark => ("Escuro", "moon"),
        };
        Self {
            label,
            icon,
            aria_label: "Alternar tema",
        }
    }
}
