// Command-line interface for slidemark
//
// This binary converts between Markdown and Google Slides text containers. It never talks to the
// Slides API: containers are read from JSON files holding a shape's `text` object (as returned by
// presentations.get), and writes produce the operations or batchUpdate requests a caller sends.
//
// Usage:
//  slidemark read <container.json> [--to markdown|plain|ir-json|styles] [-o <file>]
//  slidemark write <input.md> [--to ops|requests] [--object-id <id>] [--start-index <n>]
//                  [--container <container.json>] [--append] [-o <file>]
//  slidemark --list-presets                  - List bullet glyph presets
//
// Extra Parameters:
//
// Configuration keys can be overridden using --extra-<key> <value>.
// Example:
//  slidemark write notes.md --to requests --object-id box1 --extra-styled false

use clap::{Arg, ArgAction, Command, ValueHint};
use slidemark::native::{BulletGlyphPreset, TextContent, TextElement};
use slidemark::{
    markdown_to_operations_best_effort, write_markdown_requests, MarkdownOptions, TextContainer,
    WriteOptions,
};
use slidemark_config::{FallbackSetting, Loader, NumberingSetting, SlidemarkConfig};
use std::collections::HashMap;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const READ_TARGETS: &[&str] = &["markdown", "plain", "ir-json", "styles"];
const WRITE_TARGETS: &[&str] = &["ops", "requests"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("slidemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown and Google Slides styled text")
        .long_about(
            "slidemark converts Google Slides text containers to Markdown and Markdown to\n\
            the requests that write it back.\n\n\
            Commands:\n  \
            - read:  Render a container's text (JSON) as Markdown, plain text, IR or styles\n  \
            - write: Turn Markdown into insert/bullet operations or batchUpdate requests\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration keys.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            slidemark read shape.json                          # Markdown to stdout\n  \
            slidemark read shape.json --to styles              # Distinct rich styles as JSON\n  \
            slidemark write notes.md                           # Operations as JSON\n  \
            slidemark write notes.md --to requests --object-id box1",
        )
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
                .value_name("PATH")
                .help("Path to a slidemark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("read")
                .about("Read a text container as Markdown")
                .long_about(
                    "Read the `text` object of a shape or table cell, as JSON.\n\n\
                    The file may hold the text object ({\"textElements\": [...]}) or a bare\n\
                    array of text elements.\n\n\
                    Targets:\n  \
                    - markdown: Markdown (default)\n  \
                    - plain:    Text without styling\n  \
                    - ir-json:  Intermediate representation\n  \
                    - styles:   Distinct rich styles, in order of appearance",
                )
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
                        .default_value("markdown")
                        .value_parser(clap::builder::PossibleValuesParser::new(READ_TARGETS))
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("write")
                .about("Convert Markdown to Slides operations or requests")
                .long_about(
                    "Convert a Markdown file into styled text inserts and bullet requests.\n\n\
                    Targets:\n  \
                    - ops:      Executor-agnostic operations (default)\n  \
                    - requests: batchUpdate request bodies for --object-id\n\n\
                    With --container, existing text is deleted first unless --append is given;\n\
                    when appending, indices start after the container's text.",
                )
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
                        .default_value("ops")
                        .value_parser(clap::builder::PossibleValuesParser::new(WRITE_TARGETS))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("object-id")
                        .long("object-id")
                        .value_name("ID")
                        .help("Object id of the target shape (required for requests)"),
                )
                .arg(
                    Arg::new("start-index")
                        .long("start-index")
                        .value_name("N")
                        .help("Index of the first inserted character")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("container")
                        .long("container")
                        .value_name("PATH")
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
        )
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = build_cli().get_matches_from(&cleaned_args);

    init_tracing();

    if matches.get_flag("list-presets") {
        handle_list_presets_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    for key in extra_params.keys() {
        eprintln!("Warning: ignoring unknown parameter --extra-{key}");
    }

    match matches.subcommand() {
        Some(("read", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches
                .get_one::<String>("to")
                .expect("to has a default");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_read_command(input, to, output, &config);
        }
        Some(("write", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let request = WriteRequest {
                to: sub_matches
                    .get_one::<String>("to")
                    .expect("to has a default"),
                object_id: sub_matches.get_one::<String>("object-id").map(|s| s.as_str()),
                start_index: sub_matches.get_one::<usize>("start-index").copied(),
                container: sub_matches.get_one::<String>("container").map(|s| s.as_str()),
                append: sub_matches.get_flag("append"),
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_write_command(input, &request, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Diagnostics go to stderr so converted output stays clean on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the read command
fn handle_read_command(input: &str, to: &str, output: Option<&str>, config: &SlidemarkConfig) {
    let content = load_container(input);
    debug!(input, to, elements = content.text_elements.len(), "read");

    let text = match to {
        "markdown" => {
            let options = MarkdownOptions::from(&config.read);
            let markdown = content.read_markdown_with(&options).unwrap_or_else(|e| {
                eprintln!("Conversion error: {e}");
                std::process::exit(1);
            });
            format!("{markdown}\n")
        }
        "plain" => content.plain_text(),
        "ir-json" => to_json(&content.to_ir(), config),
        "styles" => to_json(
            &content.styles(config.read.skip_whitespace_styles),
            config,
        ),
        other => {
            eprintln!("Error: unknown read target '{other}'");
            std::process::exit(1);
        }
    };

    write_output(output, &text);
}

struct WriteRequest<'a> {
    to: &'a str,
    object_id: Option<&'a str>,
    start_index: Option<usize>,
    container: Option<&'a str>,
    append: bool,
}

/// Handle the write command
fn handle_write_command(
    input: &str,
    request: &WriteRequest<'_>,
    output: Option<&str>,
    config: &SlidemarkConfig,
) {
    let markdown = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let container = request.container.map(load_container).unwrap_or_default();

    let mut options = WriteOptions::from(&config.write);
    if request.append {
        if let Some(last) = container.text_elements.last() {
            options.start_index = last.end_index;
        }
    }
    if let Some(start_index) = request.start_index {
        options.start_index = start_index;
    }

    let text = match request.to {
        "ops" => {
            let ops = markdown_to_operations_best_effort(&markdown, &options).unwrap_or_else(|e| {
                eprintln!("Conversion error: {e}");
                std::process::exit(1);
            });
            to_json(&ops, config)
        }
        "requests" => {
            let Some(object_id) = request.object_id else {
                eprintln!("Error: --object-id is required with --to requests");
                std::process::exit(1);
            };
            let requests = write_markdown_requests(
                &container,
                object_id,
                &markdown,
                &options,
                request.append,
                config.write.styled,
            )
            .unwrap_or_else(|e| {
                eprintln!("Conversion error: {e}");
                std::process::exit(1);
            });
            to_json(&serde_json::json!({ "requests": requests }), config)
        }
        other => {
            eprintln!("Error: unknown write target '{other}'");
            std::process::exit(1);
        }
    };

    write_output(output, &text);
}

/// Handle the list-presets command
fn handle_list_presets_command() {
    println!("Bulleted presets:");
    for preset in BulletGlyphPreset::ALL.iter().filter(|p| !p.is_numbered()) {
        println!("  {}", preset_name(preset));
    }
    println!("\nNumbered presets:");
    for preset in BulletGlyphPreset::ALL.iter().filter(|p| p.is_numbered()) {
        println!("  {}", preset_name(preset));
    }
}

fn preset_name(preset: &BulletGlyphPreset) -> String {
    serde_json::to_value(preset)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{preset:?}"))
}

fn load_container(path: &str) -> TextContent {
    let raw = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    parse_container(&raw).unwrap_or_else(|e| {
        eprintln!("Error decoding container '{path}': {e}");
        std::process::exit(1);
    })
}

/// Accepts a text object or a bare array of text elements.
fn parse_container(raw: &str) -> Result<TextContent, serde_json::Error> {
    if raw.trim_start().starts_with('[') {
        let text_elements: Vec<TextElement> = serde_json::from_str(raw)?;
        Ok(TextContent { text_elements })
    } else {
        serde_json::from_str(raw)
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, config: &SlidemarkConfig) -> String {
    let result = if config.output.pretty_json {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    let mut json = result.unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    json.push('\n');
    json
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> SlidemarkConfig {
    let loader = Loader::new().with_optional_file("slidemark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(
    config: &mut SlidemarkConfig,
    extra_params: &mut HashMap<String, String>,
) {
    if let Some(raw) = take_override(extra_params, &["bullet-preset", "bullet_preset"]) {
        config.write.bullet_preset = parse_preset_arg("bullet-preset", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["numbered-preset", "numbered_preset"]) {
        config.write.numbered_preset = parse_preset_arg("numbered-preset", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["fallback"]) {
        config.write.fallback = match raw.as_str() {
            "propagate" => FallbackSetting::Propagate,
            "plain-text" | "plain" => FallbackSetting::PlainText,
            other => {
                eprintln!("Invalid value '{other}' for --extra-fallback (propagate, plain-text)");
                std::process::exit(1);
            }
        };
    }
    if let Some(raw) = take_override(extra_params, &["styled"]) {
        config.write.styled = parse_bool_arg("styled", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["numbering"]) {
        config.read.numbering = match raw.as_str() {
            "uniform" => NumberingSetting::Uniform,
            "glyph" => NumberingSetting::Glyph,
            other => {
                eprintln!("Invalid value '{other}' for --extra-numbering (uniform, glyph)");
                std::process::exit(1);
            }
        };
    }
    if let Some(raw) = take_override(
        extra_params,
        &["skip-whitespace-styles", "skip_whitespace_styles"],
    ) {
        config.read.skip_whitespace_styles = parse_bool_arg("skip-whitespace-styles", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["pretty-json", "pretty_json", "pretty"]) {
        config.output.pretty_json = parse_bool_arg("pretty-json", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn parse_preset_arg(flag: &str, raw: &str) -> BulletGlyphPreset {
    let name = raw.to_uppercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(name)).unwrap_or_else(|_| {
        eprintln!("Invalid preset '{raw}' for --extra-{flag}. Use --list-presets to see all.");
        std::process::exit(1);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let args = args(&["slidemark", "read", "shape.json"]);
        let (cleaned, extra) = parse_extra_args(&args);

        assert_eq!(cleaned, args);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_parse_extra_args_value_and_flag() {
        let (cleaned, extra) = parse_extra_args(&args(&[
            "slidemark",
            "write",
            "notes.md",
            "--extra-numbered-preset",
            "NUMBERED_DIGIT_NESTED",
            "--to",
            "requests",
            "--extra-pretty",
        ]));

        assert_eq!(
            cleaned,
            args(&["slidemark", "write", "notes.md", "--to", "requests"])
        );
        assert_eq!(extra.len(), 2);
        assert_eq!(
            extra.get("numbered-preset"),
            Some(&"NUMBERED_DIGIT_NESTED".to_string())
        );
        assert_eq!(extra.get("pretty"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_allows_extras_alias() {
        let (cleaned, extra) = parse_extra_args(&args(&[
            "slidemark",
            "read",
            "s.json",
            "--extras-numbering",
            "glyph",
        ]));
        assert_eq!(cleaned, args(&["slidemark", "read", "s.json"]));
        assert_eq!(extra.get("numbering"), Some(&"glyph".to_string()));
    }

    #[test]
    fn apply_config_overrides_updates_known_keys() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("styled".to_string(), "false".to_string());
        extras.insert("numbering".to_string(), "glyph".to_string());
        extras.insert("bullet-preset".to_string(), "bullet-checkbox".to_string());
        extras.insert("fallback".to_string(), "plain-text".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert!(!config.write.styled);
        assert_eq!(config.read.numbering, NumberingSetting::Glyph);
        assert_eq!(config.write.bullet_preset, BulletGlyphPreset::BulletCheckbox);
        assert_eq!(config.write.fallback, FallbackSetting::PlainText);
        assert!(extras.is_empty());
    }

    #[test]
    fn apply_config_overrides_leaves_unknown_keys() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("theme".to_string(), "dark".to_string());

        apply_config_overrides(&mut config, &mut extras);
        assert_eq!(extras.len(), 1);
    }

    #[test]
    fn parse_container_accepts_both_shapes() {
        let object = r#"{"textElements": [{"endIndex": 3, "textRun": {"content": "hi\n"}}]}"#;
        let array = r#"[{"endIndex": 3, "textRun": {"content": "hi\n"}}]"#;
        assert_eq!(
            parse_container(object).unwrap(),
            parse_container(array).unwrap()
        );
    }

    #[test]
    fn preset_names_round_trip() {
        for preset in BulletGlyphPreset::ALL {
            assert_eq!(parse_preset_arg("p", &preset_name(&preset)), preset);
        }
    }
}
