use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the targets accepted by src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const READ_TARGETS: &[&str] = &["markdown", "plain", "ir-json", "styles"];
const WRITE_TARGETS: &[&str] = &["ops", "requests"];

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("slidemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown and Google Slides styled text")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-presets")
                .long("list-presets")
                .help("List bullet glyph presets")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a slidemark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("read")
                .about("Read a text container as Markdown")
                .arg(
                    Arg::new("input")
                        .help("Container JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output representation")
                        .value_parser(clap::builder::PossibleValuesParser::new(READ_TARGETS))
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("write")
                .about("Convert Markdown to Slides operations or requests")
                .arg(
                    Arg::new("input")
                        .help("Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output representation")
                        .value_parser(clap::builder::PossibleValuesParser::new(WRITE_TARGETS))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("object-id")
                        .long("object-id")
                        .help("Object id of the target shape (required for requests)"),
                )
                .arg(
                    Arg::new("start-index")
                        .long("start-index")
                        .help("Index of the first inserted character"),
                )
                .arg(
                    Arg::new("container")
                        .long("container")
                        .help("Current container JSON, to decide whether text is cleared")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("append")
                        .long("append")
                        .help("Keep existing text and insert after it")
                        .action(ArgAction::SetTrue),
                )
                .arg(output_arg()),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "slidemark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "slidemark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "slidemark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
