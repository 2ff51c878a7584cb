//! Command-line interface for brew
//! This binary loads a token stream as the lexer produced it, rewrites it, and prints the result.
//!
//! Usage:
//!   brew `<path>` [--input `<format>`] [--format `<format>`] [--stop-after `<pass>`]
//!                 [--no-verify] [--show-locations] [--config `<file>`]   - Rewrite a token stream
//!   brew --list-passes                                                 - List the rewrite passes

use brew_config::{BrewConfig, ConfigError, Loader, OutputFormat};
use brew_rewriter::brew::loader::{InputFormat, TokenLoader};
use brew_rewriter::brew::rewriting::{Pass, Rewriter};
use brew_rewriter::brew::token::{to_json, to_notation, to_tag_line, TokenStream};
use brew_rewriter::brew::transforms::stages::FullRewrite;
use brew_rewriter::brew::transforms::Transform;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

/// Looked up in the working directory when no --config is given.
const USER_CONFIG: &str = "brew.toml";

fn main() {
    let matches = Command::new("brew")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rewrite a lexer token stream into the form the parser expects")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the token stream (.json for JSON, anything else for notation)")
                .required_unless_present("list-passes")
                .index(1),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Input format, overriding the file extension")
                .value_parser(["notation", "json"]),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(OutputFormat::ALL.map(OutputFormat::name)),
        )
        .arg(
            Arg::new("stop-after")
                .long("stop-after")
                .help("Stop after the named pass (see --list-passes)")
                .value_parser(Pass::ORDER.map(Pass::name)),
        )
        .arg(
            Arg::new("no-verify")
                .long("no-verify")
                .help("Skip the balance check after a full rewrite")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show-locations")
                .long("show-locations")
                .help("Append each token's location in tags output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-passes")
                .long("list-passes")
                .help("List the rewrite passes in the order they run")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-passes") {
        handle_list_passes_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config);

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("A token stream path is required");
        std::process::exit(1);
    };
    let input = matches.get_one::<String>("input").map(String::as_str);
    handle_rewrite_command(path, input, &config);
}

/// Defaults, then the user file, then command-line flags.
fn load_config(matches: &ArgMatches) -> Result<BrewConfig, ConfigError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(USER_CONFIG),
    };
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(pass) = matches.get_one::<String>("stop-after") {
        loader = loader.set_override("rewrite.stop_after", pass.as_str())?;
    }
    if matches.get_flag("no-verify") {
        loader = loader.set_override("rewrite.verify_balance", false)?;
    }
    if matches.get_flag("show-locations") {
        loader = loader.set_override("output.show_locations", true)?;
    }
    loader.build()
}

/// RUST_LOG wins over the configured filter.
fn init_logging(config: &BrewConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the rewrite command
fn handle_rewrite_command(path: &str, input: Option<&str>, config: &BrewConfig) {
    let mut loader = TokenLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });
    if let Some(input) = input {
        let format = input.parse::<InputFormat>().unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });
        loader = loader.with_format(format);
    }

    let rewriter = build_rewriter(config).unwrap_or_else(|e| {
        eprintln!("{}", e);
        eprintln!("\nAvailable passes:");
        for pass in Pass::ORDER {
            eprintln!("  {}", pass);
        }
        std::process::exit(1);
    });
    tracing::info!(
        path,
        format = %loader.format(),
        passes = rewriter.passes().len(),
        "rewriting"
    );

    let transform = Transform::<TokenStream, TokenStream>::from_fn(Ok)
        .then(FullRewrite::with_rewriter(rewriter));
    let tokens = loader.with(&transform).unwrap_or_else(|e| {
        eprintln!("Rewrite error: {}", e);
        std::process::exit(1);
    });

    println!("{}", render(&tokens, config));
}

fn build_rewriter(config: &BrewConfig) -> Result<Rewriter, String> {
    let mut rewriter = Rewriter::new().verify_balance(config.rewrite.verify_balance);
    if let Some(name) = &config.rewrite.stop_after {
        let pass = name.parse::<Pass>().map_err(|e| e.to_string())?;
        rewriter = rewriter.stop_after(pass);
    }
    Ok(rewriter)
}

fn render(tokens: &TokenStream, config: &BrewConfig) -> String {
    match config.output.format {
        OutputFormat::Tags => to_tag_line(tokens, config.output.show_locations),
        OutputFormat::Notation => to_notation(tokens),
        OutputFormat::Json => to_json(tokens).unwrap_or_else(|e| {
            eprintln!("Error formatting tokens: {}", e);
            std::process::exit(1);
        }),
    }
}

/// Handle the list-passes command
fn handle_list_passes_command() {
    println!("Rewrite passes, in the order they run:\n");
    for pass in Pass::ORDER {
        println!("  {}", pass.name());
        println!("    {}", pass.description());
        println!();
    }
}
