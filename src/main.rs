use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use roadeye::predict::{DownRoad, PredictionInput, RoadColor};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a config file interactively
    Init,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Bead road: whitespace-delimited outcome letters B/P/T, oldest first
    /// (e.g. "B P B B T P")
    #[arg(short, long, value_name = "OUTCOMES")]
    bead: Option<String>,

    /// Banker card ranks from the previous round (e.g. "4 6")
    #[arg(long, value_name = "RANKS")]
    banker_cards: Option<String>,

    /// Player card ranks from the previous round (e.g. "9 1")
    #[arg(long, value_name = "RANKS")]
    player_cards: Option<String>,

    /// Current big eye road symbol
    #[arg(long, value_enum)]
    big_eye: Option<RoadColor>,

    /// Current small road symbol
    #[arg(long, value_enum)]
    small_road: Option<RoadColor>,

    /// Current cockroach road symbol
    #[arg(long, value_enum)]
    cockroach: Option<RoadColor>,
}

#[derive(Parser, Debug)]
#[command(name = "roadeye")]
#[command(about = "Baccarat next-outcome recommendation CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (parsed input summary and score breakdown)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/roadeye/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(flatten)]
    input: InputArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.map(PathBuf::from);

    if let Some(Commands::Init) = cli.command {
        if let Err(e) = roadeye::config::run_init_wizard(config_path) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match roadeye::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate weights at startup
    let weights = config.weights.unwrap_or_default();
    if let Err(errors) = roadeye::predict::validate_weights(&weights) {
        eprintln!("Weight config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    let labels = config.labels.unwrap_or_default();

    // Parse text inputs; unrecognized tokens are dropped, not fatal
    let bead = roadeye::parse::parse_bead_road(cli.input.bead.as_deref().unwrap_or(""));
    let banker_cards = roadeye::parse::parse_cards(cli.input.banker_cards.as_deref().unwrap_or(""));
    let player_cards = roadeye::parse::parse_cards(cli.input.player_cards.as_deref().unwrap_or(""));

    if cli.verbose {
        eprintln!(
            "Parsed {} outcomes ({} tokens discarded)",
            bead.values.len(),
            bead.discarded
        );
        eprintln!(
            "Parsed {} banker cards, {} player cards ({} tokens discarded)",
            banker_cards.values.len(),
            player_cards.values.len(),
            banker_cards.discarded + player_cards.discarded
        );
    }

    // The bead road is the one required input; prompt instead of predicting
    if bead.values.is_empty() {
        eprintln!("Bead road is empty.");
        eprintln!("Provide at least one outcome, oldest first:");
        eprintln!("  roadeye --bead \"B P B B T\"");
        std::process::exit(EXIT_INPUT);
    }

    let input = PredictionInput {
        bead_road: bead.values,
        banker_cards: banker_cards.values,
        player_cards: player_cards.values,
        down_road: DownRoad {
            big_eye: cli.input.big_eye.into_iter().collect(),
            small_road: cli.input.small_road.into_iter().collect(),
            cockroach: cli.input.cockroach.into_iter().collect(),
        },
    };

    let prediction = roadeye::predict::predict_next(&input, &weights);

    let use_colors = roadeye::output::should_use_colors();
    println!(
        "{}",
        roadeye::output::format_prediction(&prediction, &labels, use_colors)
    );
    if cli.verbose {
        println!("{}", roadeye::output::format_breakdown(&prediction.raw, &weights));
    }

    std::process::exit(EXIT_SUCCESS);
}
