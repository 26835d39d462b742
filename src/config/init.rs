use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, Config, SideLabels};
use crate::predict::{validate_weights, Weights};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

fn prompt_weight(message: &str, default: f64) -> Result<f64> {
    loop {
        let input = prompt_with_default(message, &default.to_string())?;
        match input.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => break Ok(v),
            Ok(_) => println!("  Invalid: must be non-negative. Try again."),
            Err(_) => println!("  Invalid: must be a non-negative number. Try again."),
        }
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("Roadeye Configuration Wizard");
    println!("============================");
    println!();

    // 1. Weights
    let defaults = Weights::default();
    let configure_weights = prompt_yes_no("Configure signal weights? (n accepts defaults)", true)?;

    let weights = if configure_weights {
        println!();
        typewriter("Three signals feed each prediction, combined by weight:");
        typewriter("  pattern      -- streak bias over the last 10 bead-road outcomes");
        typewriter("  card_points  -- which hand scored higher in the previous round");
        typewriter("  down_road    -- latest big eye / small road / cockroach symbols");
        typewriter("Weights must be non-negative and sum to 1.0.");

        loop {
            println!();
            let weights = Weights {
                pattern: prompt_weight("Pattern weight", defaults.pattern)?,
                card_points: prompt_weight("Card-points weight", defaults.card_points)?,
                down_road: prompt_weight("Down-road weight", defaults.down_road)?,
            };
            match validate_weights(&weights) {
                Ok(()) => break weights,
                Err(errors) => {
                    for error in errors {
                        println!("  Invalid: {}", error);
                    }
                    println!("  Try again.");
                }
            }
        }
    } else {
        defaults
    };

    // 2. Side labels
    println!();
    typewriter("Side labels are the words printed for each recommendation.");
    typewriter("Change them to match your table display, e.g. 莊 / 閒.");
    let label_defaults = SideLabels::default();
    let labels = SideLabels {
        banker: prompt_with_default("Banker label", &label_defaults.banker)?,
        player: prompt_with_default("Player label", &label_defaults.player)?,
    };

    // 3. Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    // Check if file already exists
    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 4. Write config
    let config = Config {
        weights: Some(weights),
        labels: Some(labels),
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    // Create parent directories
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `roadeye --bead \"B P B\"` to get started.");

    Ok(())
}
