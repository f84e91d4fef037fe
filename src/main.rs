mod app;
mod config;
mod input;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use swatch::{validate_color, CanonicalColor, ColorInput, Translate};

#[derive(Debug, Parser)]
#[command(name = "swatch", version, about = "Terminal color swatch picker")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive picker (default).
    Pick,
    /// Normalize one color expression and print the canonical form.
    Check {
        color: String,
        /// Emit json instead of the plain readout.
        #[arg(long)]
        json: bool,
        /// Treat the color as fully opaque.
        #[arg(long)]
        no_alpha: bool,
    },
    /// List configured palettes.
    List,
    /// Print one palette's colors as truecolor chips.
    Show {
        /// Palette name as shown by `list` (defaults to material).
        name: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command.unwrap_or(Command::Pick) {
        Command::Pick => {
            let mut terminal = tui::TerminalGuard::enter(cfg.ui.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, cli.config.clone());
            let picked = app.run(terminal.terminal_mut())?;
            drop(terminal);

            if let Some(sel) = picked {
                println!("{} {}", sel.name, sel.color);
            }
        }
        Command::Check {
            color,
            json,
            no_alpha,
        } => {
            let tr = cfg.locale.lexicon();
            let input = ColorInput::from(color.as_str());
            let canonical = validate_color(&input, no_alpha || cfg.ui.disable_alpha, &tr);
            if json {
                println!("{}", serde_json::to_string_pretty(&canonical)?);
            } else {
                print_canonical(&canonical);
            }
            if canonical.error {
                std::process::exit(1);
            }
        }
        Command::List => {
            for (name, palette) in config::palettes(&cfg) {
                println!("{}  ({} colors)", name, palette.len());
            }
        }
        Command::Show { name } => {
            let tr = cfg.locale.lexicon();
            let wanted = name.as_deref().unwrap_or("material");
            let palettes = config::palettes(&cfg);
            let Some((_, palette)) = palettes.iter().find(|(n, _)| n == wanted) else {
                anyhow::bail!("no palette named {wanted}");
            };
            for (key, input) in palette.iter() {
                let c = validate_color(input, cfg.ui.disable_alpha, &tr);
                let [r, g, b] = c.rgb;
                println!(
                    "\x1b[48;2;{r};{g};{b}m    \x1b[0m  {:<12} {}",
                    tr.translate(key),
                    c.css
                );
            }
        }
    }

    Ok(())
}

fn print_canonical(c: &CanonicalColor) {
    println!("name   {}", c.name);
    println!("css    {}", c.css);
    println!("rgb    {} {} {}", c.rgb[0], c.rgb[1], c.rgb[2]);
    println!("hsl    {:.0} {:.0}% {:.0}%", c.hsl[0], c.hsl[1], c.hsl[2]);
    println!("alpha  {:.3}", c.alpha);
    if c.error {
        println!("error  unparsable input");
    }
}
