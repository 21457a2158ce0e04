use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use unitconv::convert::{evaluate, ConversionRequest};
use unitconv::input::parse_expression;
use unitconv::settings::Settings;
use unitconv::units::{units_for, QuantityKind};

const DEFAULT_CONFIG_FILE: &str = "unitconv.toml";

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Unit conversion for area, energy, pressure, speed, volume, mass, temperature and number bases", long_about = None)]
struct Cli {
    /// Settings file (default: ./unitconv.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log each conversion step
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List quantity kinds
    Kinds,

    /// List the units of a kind
    Units {
        /// Quantity kind (e.g., "pressure")
        kind: String,
    },

    /// Convert a value between two units of a kind
    Convert {
        /// Quantity kind (e.g., "area")
        kind: String,

        /// Value as typed (e.g., "2.5", "-40", "ff")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit id (default: configured for the kind)
        from: Option<String>,

        /// Target unit id (default: configured for the kind)
        to: Option<String>,

        /// Exchange source and target units
        #[arg(long)]
        swap: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a free-text conversion (e.g., "2.5 hectare to acre")
    Eval {
        expression: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the settings file
    CheckConfig,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Kinds => list_kinds(&settings),
        Commands::Units { kind } => list_units(&kind),
        Commands::Convert {
            kind,
            value,
            from,
            to,
            swap,
            json,
        } => convert_value(&settings, &kind, &value, from, to, swap, json),
        Commands::Eval { expression, json } => eval_expression(&settings, &expression, json),
        Commands::CheckConfig => check_config(&settings),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings, Box<dyn std::error::Error>> {
    let settings = match path {
        Some(path) => Settings::load_from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Settings::load_from_file(DEFAULT_CONFIG_FILE)?
        }
        None => Settings::empty(),
    };

    let validation = settings.validate();
    if validation.has_issues() {
        log::warn!("settings issues:\n{}", validation);
    }

    Ok(settings)
}

fn list_kinds(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    for kind in QuantityKind::ALL {
        let pair = settings.default_pair(kind);
        let marker = if kind == settings.initial_kind { "*" } else { " " };
        println!(
            "{} {:<12} {} -> {}",
            marker,
            kind.as_str(),
            pair.from,
            pair.to
        );
    }
    Ok(())
}

fn list_units(kind: &str) -> Result<(), Box<dyn std::error::Error>> {
    let kind: QuantityKind = kind.parse()?;

    println!("Units ({}):", kind);
    for unit in units_for(kind) {
        match unit.factor {
            Some(factor) => println!("  - {:<18} {} [x{}]", unit.id, unit.label, factor),
            None => println!("  - {:<18} {}", unit.id, unit.label),
        }
    }
    Ok(())
}

fn convert_value(
    settings: &Settings,
    kind: &str,
    value: &str,
    from: Option<String>,
    to: Option<String>,
    swap: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind: QuantityKind = kind.parse()?;
    let pair = settings.default_pair(kind);

    let mut request = ConversionRequest::new(
        kind,
        from.unwrap_or(pair.from),
        to.unwrap_or(pair.to),
        value,
    );
    if swap {
        request = request.swapped();
    }

    print_result(&request, json)
}

fn eval_expression(
    settings: &Settings,
    expression: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let expr = parse_expression(expression)?;

    let to_unit = match expr.to_unit {
        Some(to) => to.to_string(),
        None => {
            // Pick whichever default side differs from the source
            let pair = settings.default_pair(expr.kind);
            if pair.to != expr.from_unit {
                pair.to
            } else {
                pair.from
            }
        }
    };

    let request = ConversionRequest::new(expr.kind, expr.from_unit, to_unit, expr.raw_value);
    print_result(&request, json)
}

fn print_result(request: &ConversionRequest, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = evaluate(request)?;

    if json {
        let output = serde_json::json!({
            "request": request,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match result {
        Some(conversion) => println!(
            "{} {} = {} {}",
            request.raw_input.trim(),
            request.from_unit,
            conversion.formatted,
            request.to_unit
        ),
        None => println!("(no input)"),
    }
    Ok(())
}

fn check_config(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let validation = settings.validate();

    if validation.has_issues() {
        eprint!("{}", validation);
    }

    if !validation.is_valid() {
        return Err(format!("{} error(s) in settings", validation.errors.len()).into());
    }

    println!("Settings OK (initial kind: {})", settings.initial_kind);
    Ok(())
}
