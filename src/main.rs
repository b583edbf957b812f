use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::Style;
use log::debug;

use modern_gui::{ColorMode, Config, PageRenderer, ResolutionContext, ThemeResolver, ToggleView};

#[derive(Parser)]
#[command(name = "modern-gui")]
#[command(version)]
#[command(about = "Render the Modern GUI landing page and manage its theme preference", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Preference store file (overrides the configuration)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Resolve as a non-interactive renderer: always light, nothing persisted
    #[arg(long, global = true)]
    headless: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Show the resolved theme")]
    Show,
    #[command(about = "Switch between light and dark and remember the choice")]
    Toggle,
    #[command(about = "Choose a theme explicitly")]
    Set {
        #[arg(value_parser = parse_mode)]
        mode: ColorMode,
    },
    #[command(about = "Render the landing page as HTML")]
    Render {
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn parse_mode(s: &str) -> Result<ColorMode, String> {
    s.parse::<ColorMode>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(store) = cli.store {
        config.preference.store = Some(store);
    }

    let store_path = config.store_path();
    debug!("preference store: {:?}", store_path);
    let context = ResolutionContext::detect(store_path.as_deref(), !cli.headless);
    let mut resolver = ThemeResolver::with_key(context, config.preference.key.clone());

    match cli.command {
        Commands::Show => print_mode(&resolver),
        Commands::Toggle => {
            resolver.toggle();
            print_mode(&resolver);
        }
        Commands::Set { mode } => {
            resolver.apply(mode);
            print_mode(&resolver);
        }
        Commands::Render { out } => {
            let renderer = PageRenderer::new()?;
            let html = renderer.render(&config.page, &resolver)?;
            match out {
                Some(path) => std::fs::write(&path, html)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{}", html),
            }
        }
    }

    Ok(())
}

fn print_mode(resolver: &ThemeResolver) {
    let mode = resolver.current();
    let view = ToggleView::for_mode(mode);
    let style = match mode {
        ColorMode::Light => Style::new().yellow().bold(),
        ColorMode::Dark => Style::new().blue().bold(),
    };
    println!(
        "{} ({}) {}",
        style.apply_to(mode),
        view.label,
        Style::new().dim().apply_to(format!(
            "[{}, {} context]",
            resolver.source().as_str(),
            resolver.context().kind()
        ))
    );
}
