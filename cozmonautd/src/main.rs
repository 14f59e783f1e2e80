//! # Cozmonaut Daemon
//!
//! Main entry point.

use cozmonautd::{parse_args, ConfigError, LogOutput, Runtime, RuntimeConfig};
use services_logger::LogLevel;
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("cozmonautd");

    let config = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            print_usage(program);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program);
            process::exit(1);
        }
    };

    if config.output == LogOutput::Tracing {
        install_subscriber(&config);
    }

    let mut runtime = Runtime::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to create runtime: {}", e);
        process::exit(1);
    });

    if let Err(e) = runtime.run() {
        eprintln!("Runtime error: {}", e);
        process::exit(1);
    }
}

fn install_subscriber(config: &RuntimeConfig) {
    let directive = match config.min_level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error | LogLevel::Fatal => "error",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -l, --log-level <LEVEL>  trace (default), debug, info, warn, error, fatal");
    eprintln!("  -o, --output <OUTPUT>    stdout (default) or tracing");
    eprintln!("  --no-hello               Skip calling each service's hello procedure");
    eprintln!("  -h, --help               Show this help message");
}
