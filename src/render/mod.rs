//! Static rendering of the landing page.
//!
//! - [`LandingPage`]: Page content (navigation, hero, features, footer)
//! - [`ToggleView`]: Label and icon the theme toggle shows per mode
//! - [`PageRenderer`]: MiniJinja renderer driven by a [`crate::ThemeResolver`]

mod filters;
mod page;
mod renderer;

pub use page::{Feature, Hero, LandingPage, NavLink, ToggleView};
pub use renderer::PageRenderer;
