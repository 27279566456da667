use clap::{Args, Parser, Subcommand, ValueEnum};
use pacecalc::calc::{Derivation, Layout};
use pacecalc::config::CalculatorConfig;
use pacecalc::parser;
use pacecalc::units::{Quantity, Unit};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pacecalc")]
#[command(about = "Pace, speed, distance and time calculator", long_about = None)]
struct Cli {
    /// Log parser and derivation decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the missing one of distance, time and velocity
    Derive(DeriveArgs),

    /// Parse a single field and print its normalized value
    Parse {
        kind: ParseKind,

        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-render a quantity in another unit (e.g. "5 km" "mi")
    Convert {
        text: String,

        unit: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ParseKind {
    Duration,
    Distance,
    Speed,
    Pace,
}

impl ParseKind {
    fn parse(self, text: &str) -> Option<Quantity> {
        match self {
            ParseKind::Duration => parser::parse_duration(text),
            ParseKind::Distance => parser::parse_distance(text),
            ParseKind::Speed => parser::parse_speed(text),
            ParseKind::Pace => parser::parse_pace(text),
        }
    }

    fn name(self) -> &'static str {
        match self {
            ParseKind::Duration => "duration",
            ParseKind::Distance => "distance",
            ParseKind::Speed => "speed",
            ParseKind::Pace => "pace",
        }
    }
}

#[derive(Args)]
struct DeriveArgs {
    /// TOML file with modes and output units
    #[arg(short, long)]
    config: Option<String>,

    /// Field to derive: velocity, distance or time
    #[arg(short, long)]
    mode: Option<String>,

    /// Velocity as pace or speed
    #[arg(long)]
    velocity_mode: Option<String>,

    /// Distance (e.g. "10k", "26.2 mi")
    #[arg(short, long)]
    distance: Option<String>,

    /// Time (e.g. "50:00", "1h 5m")
    #[arg(short, long)]
    time: Option<String>,

    /// Pace or speed (e.g. "5:00/km", "12 km/h")
    #[arg(long)]
    velocity: Option<String>,

    /// Output distance unit (meter, kilometer, yard, mile)
    #[arg(long)]
    distance_unit: Option<String>,

    /// Output time unit (second, hms)
    #[arg(long)]
    time_unit: Option<String>,

    /// Output speed unit (meterspersecond, kph, mph)
    #[arg(long)]
    speed_unit: Option<String>,

    /// Distance unit pace is shown per (meter, kilometer, yard, mile)
    #[arg(long)]
    pace_unit: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Derive(args) => match derive_fields(args) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Parse { kind, text, json } => match parse_field(kind, &text, json) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Convert { text, unit } => match convert_quantity(&text, &unit) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn derive_fields(args: DeriveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => CalculatorConfig::load_from_file(path)?,
        None => CalculatorConfig::default(),
    };
    let mut config = config.with_modes(args.mode.as_deref(), args.velocity_mode.as_deref())?;

    if let Some(unit) = &args.distance_unit {
        config.units.distance = unit.parse()?;
    }
    if let Some(unit) = &args.time_unit {
        config.units.time = unit.parse()?;
    }
    if let Some(unit) = &args.speed_unit {
        config.units.speed = unit.parse()?;
    }
    if let Some(unit) = &args.pace_unit {
        config.units.pace = unit.parse()?;
    }

    let layout = config.layout();
    let derivation = config.derive(
        args.distance.as_deref(),
        args.time.as_deref(),
        args.velocity.as_deref(),
    );

    if args.json {
        let output = json!({
            "distance": derivation.distance,
            "time": derivation.time,
            "velocity": derivation.velocity,
            "read_only": layout.read_only,
            "operator": layout.operator,
            "operands": layout.operands,
            "base": derivation.base,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_derivation(&layout, &derivation);
    }

    Ok(())
}

fn print_derivation(layout: &Layout, derivation: &Derivation) {
    println!("{}", layout);
    for operand in layout.operands {
        let field = operand.field();
        let marker = if layout.is_read_only(field) { " (derived)" } else { "" };
        let value = derivation.get(field);
        let value = if value.is_empty() { "-" } else { value };
        println!("  {:<8} {}{}", operand.to_string(), value, marker);
    }
}

/// Returns whether the text parsed
fn parse_field(kind: ParseKind, text: &str, json: bool) -> Result<bool, Box<dyn std::error::Error>> {
    let parsed = kind.parse(text);

    if json {
        let output = match parsed {
            Some(q) => json!({
                "kind": kind.name(),
                "magnitude": q.magnitude(),
                "unit": q.dimension().base_unit().symbol(),
            }),
            None => json!({ "kind": kind.name(), "magnitude": null }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match parsed {
            Some(q) => println!("{}", q),
            None => println!("unparseable"),
        }
    }

    Ok(parsed.is_some())
}

fn convert_quantity(text: &str, unit: &str) -> Result<(), Box<dyn std::error::Error>> {
    let unit: Unit = unit.parse()?;
    let quantity = Quantity::parse(text)?;
    println!("{}", quantity.to(unit)?);
    Ok(())
}
