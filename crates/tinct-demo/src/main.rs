//! Demo of tinct styling in the current terminal.
//!
//! Prints basic colors, backgrounds, attributes, mixed styles and RGB
//! colors next to their named counterparts. Pass `--tier` to see how a
//! lower tier renders the same output.

use anyhow::Result;
use clap::Parser;
use tinct::{detect_tier, ColorTier, StyleBuilder};

const RULE_WIDTH: usize = 78;

/// Show what tinct styling looks like in this terminal.
#[derive(Parser)]
#[command(name = "tinct-demo")]
#[command(version)]
struct Cli {
    /// Color tier to render at: none, ansi16, ansi256 or truecolor
    /// (detected from the environment when omitted)
    #[arg(short, long)]
    tier: Option<ColorTier>,
}

fn rule() {
    println!("{}", "-".repeat(RULE_WIDTH));
}

fn section(title: &str, rows: Vec<(StyleBuilder, &str)>) {
    rule();
    println!("{}:", title);
    for (style, text) in rows {
        println!("{}", style.paint(text));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let tier = cli.tier.unwrap_or_else(detect_tier);
    let s = StyleBuilder::new().tier(tier);

    println!("Color tier: {}", tier);
    println!(
        "Terminal type: {}",
        std::env::var("TERM").unwrap_or_else(|_| "unknown".to_string())
    );

    section(
        "Basic colors",
        vec![
            (s.clone().black(), "Black color"),
            (s.clone().red(), "Red color"),
            (s.clone().green(), "Green color"),
            (s.clone().yellow(), "Yellow color"),
            (s.clone().blue(), "Blue color"),
            (s.clone().magenta(), "Magenta color"),
            (s.clone().cyan(), "Cyan color"),
            (s.clone().white(), "White color"),
            (s.clone().bright_black(), "Light grey color"),
            (s.clone().black().dim(), "Dark grey color"),
            (s.clone().bright_red(), "Light red color"),
            (s.clone().bright_green(), "Light green color"),
            (s.clone().bright_yellow(), "Light yellow color"),
            (s.clone().bright_blue(), "Light blue color"),
            (s.clone().bright_magenta(), "Light magenta color"),
            (s.clone().bright_cyan(), "Light cyan color"),
        ],
    );

    section(
        "Highlights",
        vec![
            (s.clone().on().black(), "On black color"),
            (s.clone().on().red(), "On red color"),
            (s.clone().on().green(), "On green color"),
            (s.clone().on().yellow(), "On yellow color"),
            (s.clone().on().blue(), "On blue color"),
            (s.clone().on().magenta(), "On magenta color"),
            (s.clone().on().cyan(), "On cyan color"),
            (s.clone().black().on().white(), "On white color"),
            (s.clone().on().bright_white(), "On light grey color"),
            (s.clone().on().grey(), "On dark grey color"),
            (s.clone().on().bright_red(), "On light red color"),
            (s.clone().on().bright_green(), "On light green color"),
            (s.clone().on().bright_yellow(), "On light yellow color"),
            (s.clone().on().bright_blue(), "On light blue color"),
            (s.clone().on().bright_magenta(), "On light magenta color"),
            (s.clone().on().bright_cyan(), "On light cyan color"),
        ],
    );

    section(
        "Attributes",
        vec![
            (s.clone().black().bold(), "Bold black color"),
            (s.clone().red().dim(), "Dim red color"),
            (s.clone().green().underline(), "Underline green color"),
            (s.clone().blue().inverse(), "Reversed blue color"),
            (
                s.clone().cyan().bold().underline().inverse(),
                "Bold underline inverse cyan color",
            ),
            (s.clone().white().dim(), "Dim white color"),
            (s.clone().hidden(), "Hidden (you can't see it, eh?)"),
            (s.clone().strike(), "Striked"),
            (s.clone().italic(), "Italic"),
            (s.clone().double_underline(), "Double underline"),
            (s.clone().overline(), "Overline"),
            (s.clone().blink().rgb(255, 105, 180), "Blink hot pink color"),
        ],
    );

    section(
        "Mixing",
        vec![
            (
                s.clone().red().on().black().underline(),
                "Underline red on black color",
            ),
            (s.clone().green().on().red().inverse(), "Reversed green on red color"),
        ],
    );

    section(
        "RGB",
        vec![
            (s.clone().rgb(255, 0, 0), "Pure red text (255, 0, 0)"),
            (s.clone().red(), "Default red for comparison"),
            (s.clone().rgb(0, 255, 0), "Pure green text (0, 255, 0)"),
            (s.clone().green(), "Default green for comparison"),
            (s.clone().rgb(0, 0, 255), "Pure blue text (0, 0, 255)"),
            (s.clone().blue(), "Default blue for comparison"),
            (s.clone().rgb(255, 255, 0), "Pure yellow text (255, 255, 0)"),
            (s.clone().yellow(), "Default yellow for comparison"),
            (s.clone().rgb(0, 255, 255), "Pure cyan text (0, 255, 255)"),
            (s.clone().cyan(), "Default cyan for comparison"),
            (s.clone().rgb(255, 0, 255), "Pure magenta text (255, 0, 255)"),
            (s.clone().magenta(), "Default magenta for comparison"),
            (s.clone().rgb(255, 182, 193), "Light pink (255, 182, 193)"),
            (s.clone().rgb(255, 105, 180), "Hot pink (255, 105, 180)"),
        ],
    );

    rule();
    println!("Named colors:");
    for name in ["rebeccapurple", "tomato", "steelblue", "goldenrod", "#14283c"] {
        println!("{}", s.clone().named(name)?.paint(name));
    }

    Ok(())
}
