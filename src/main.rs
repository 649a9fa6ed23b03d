use clap::{Parser, Subcommand};
use runehud::{commands, config};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "runehud")]
#[command(about = "Terminal combat HUD", long_about = "Terminal combat HUD\n\nIf no command is specified, the interactive demo starts.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the combat HUD demo
    Demo {
        /// Force ASCII glyphs
        #[arg(short, long)]
        ascii: bool,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("selection_bg: {:?}", cfg.display.selection_bg);
    println!("record_fg: {:?}", cfg.display.record_fg);
    println!();
    println!("[bars.glyphs]");
    let glyphs = &cfg.bars.glyphs;
    println!("filled: {}  empty: {}  filled_ascii: {}  empty_ascii: {}",
        glyphs.filled, glyphs.empty, glyphs.filled_ascii, glyphs.empty_ascii);
    println!();
    println!("[bars.thresholds]");
    let thresholds = &cfg.bars.thresholds;
    for (name, table) in [
        ("health", &thresholds.health),
        ("mana", &thresholds.mana),
        ("experience", &thresholds.experience),
        ("stamina", &thresholds.stamina),
        ("custom", &thresholds.custom),
    ] {
        let bands: Vec<String> = table
            .entries()
            .iter()
            .map(|t| format!("{}%={:?}", t.percent, t.color))
            .collect();
        println!("{}: [{}]", name, bands.join(", "));
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn main() {
    let mut config = config::read();
    let cli = Cli::parse();

    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let result = match cli.command {
        Some(Commands::Config) => {
            handle_config_command(&config);
            Ok(())
        }
        Some(Commands::Demo { ascii }) => {
            if ascii {
                config.display.use_unicode = false;
            }
            commands::demo::run(&config)
        }
        None => commands::demo::run(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
