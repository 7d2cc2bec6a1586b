//! Command-line interface for sigil
//! Converts sigil configuration files into TOML (or JSON) for consumption
//! by other tools.
//!
//! Usage:
//!   sigil `<path>`                      - Convert a file and print TOML to stdout
//!   sigil `<path>` --output `<file>`    - Write the converted output to a file
//!   sigil `<path>` --format json        - Emit JSON instead of TOML

use std::fs;

use clap::{Arg, Command};

use sigil_cfg::{SigilConfig, export};

fn main() {
    let matches = Command::new("sigil")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting sigil configuration files to TOML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the sigil file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write output to a file instead of stdout"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: toml)")
                .default_value("toml"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let format = matches.get_one::<String>("format").unwrap();
    let output = matches.get_one::<String>("output");

    handle_convert_command(path, format, output.map(|s| s.as_str()));
}

/// Handle the convert command
fn handle_convert_command(path: &str, format: &str, output: Option<&str>) {
    let config = SigilConfig::from_file(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let rendered = match format {
        "toml" => config.to_toml(),
        "json" => export::export_document_to_json(config.document()).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: toml, json");
            std::process::exit(1);
        }
    };

    match output {
        Some(dest) => {
            if let Err(e) = fs::write(dest, &rendered) {
                let err = sigil_cfg::SigilError::file_error(
                    format!("Failed to write file: {}", e),
                    dest.to_string(),
                );
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
            println!("Converted {} to {}", path, dest);
        }
        None => println!("{}", rendered),
    }
}
