//! `container-iso` — classify container type aliases and validate container serials.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and install the logger ([`logger`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Collect inputs from arguments and/or `--file`.
//! 4. Classify types or parse serials with the `container_iso` library.
//! 5. Apply policy verdicts and render the requested report ([`report`]).
//! 6. Exit `0` (clean) or `1` (at least one [`Verdict::Error`] or failed lookup).

mod cli;
mod config;
mod logger;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::json;

use cli::{Cli, Command, LookupTarget, ReportFormat};
use config::{load_config, Config};
use container_iso::iso::aliases::names_for;
use container_iso::models::{SerialRecord, TypeRecord, Verdict};
use container_iso::{calculate_check_digit, ContainerTypeHelper, IsoCode};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(&cwd, cli.config.as_deref())?;

    let ok = match cli.command {
        Command::Classify {
            ref inputs,
            ref size,
            ref file,
        } => {
            let inputs = collect_inputs(inputs, file.as_deref())?;
            let size = size.as_deref().unwrap_or(&config.defaults.size);
            let records = classify_all(&config, &inputs, size);

            match cli.report {
                ReportFormat::Terminal => report::terminal::render_types(&records, cli.quiet),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
            }
            !records.iter().any(|r| r.verdict == Verdict::Error)
        }
        Command::Serial {
            ref serials,
            ref file,
        } => {
            let serials = collect_inputs(serials, file.as_deref())?;
            let records = check_serials(&config, &serials);

            match cli.report {
                ReportFormat::Terminal => report::terminal::render_serials(&records, cli.quiet),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
            }
            !records.iter().any(|r| r.verdict == Verdict::Error)
        }
        Command::CheckDigit { ref code } => {
            let code = code.trim();
            let digit = calculate_check_digit(code)
                .with_context(|| format!("cannot compute check digit for {:?}", code))?;
            match cli.report {
                ReportFormat::Terminal => println!("{}", digit),
                ReportFormat::Json => {
                    let out = json!({ "code": code, "check_digit": digit });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
            }
            true
        }
        Command::Lookup { ref target } => lookup(target, cli.report)?,
        Command::Codes => {
            match cli.report {
                ReportFormat::Terminal => report::terminal::render_codes(),
                ReportFormat::Json => {
                    let codes: Vec<_> = IsoCode::ALL
                        .iter()
                        .map(|c| {
                            json!({
                                "code": c,
                                "label": c.label(),
                                "names": names_for(*c).collect::<Vec<_>>(),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&codes)?);
                }
            }
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}

/// Positional inputs followed by the non-empty lines of `file`.
fn collect_inputs(args: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut inputs = args.to_vec();

    if let Some(path) = file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        inputs.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from),
        );
    }

    if inputs.is_empty() {
        bail!("no input given; pass values as arguments or use --file");
    }

    Ok(inputs)
}

fn classify_all(config: &Config, inputs: &[String], size: &str) -> Vec<TypeRecord> {
    inputs
        .iter()
        .map(|input| {
            let helper = ContainerTypeHelper::new(input.as_str());
            let iso_code = helper.convert_iso();
            TypeRecord {
                input: input.clone(),
                size: size.to_string(),
                iso_code,
                tos_code: helper.convert_tos(),
                full_iso: helper.full_iso(size),
                high_cube: helper.is_high_cube(),
                dimensions: helper.dimensions(size),
                verdict: config.type_verdict(iso_code),
            }
        })
        .collect()
}

fn check_serials(config: &Config, serials: &[String]) -> Vec<SerialRecord> {
    serials
        .iter()
        .map(|serial| {
            let parsed = ContainerTypeHelper::new("")
                .with_serial(serial.as_str())
                .parsed_serial();
            let expected_check_digit = parsed
                .as_ref()
                .and_then(|p| p.expected_check_digit().ok());
            SerialRecord {
                input: serial.clone(),
                verdict: config.serial_verdict(parsed.as_ref()),
                parsed,
                expected_check_digit,
            }
        })
        .collect()
}

/// Returns `false` when the lookup finds nothing.
fn lookup(target: &LookupTarget, format: ReportFormat) -> Result<bool> {
    let (query, found) = match target {
        LookupTarget::Name { name } => (
            name.as_str(),
            container_iso::name_to_code(name).map(|c| c.to_string()),
        ),
        LookupTarget::Code { code } => (
            code.as_str(),
            container_iso::code_to_name(code).map(String::from),
        ),
    };

    match format {
        ReportFormat::Terminal => match &found {
            Some(value) => println!("{}", value),
            None => eprintln!("no match for {:?}", query),
        },
        ReportFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "query": query, "result": found }))?
        ),
    }

    Ok(found.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_inputs_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("types.txt");
        std::fs::write(&path, "reefer\n\n  flt  \n").unwrap();

        let inputs = collect_inputs(&["hc".to_string()], Some(&path)).unwrap();
        assert_eq!(inputs, vec!["hc", "reefer", "flt"]);
    }

    #[test]
    fn test_collect_inputs_empty() {
        assert!(collect_inputs(&[], None).is_err());
    }

    #[test]
    fn test_classify_all() {
        let records = classify_all(
            &Config::default(),
            &["flt".to_string(), "banana-box".to_string()],
            "40",
        );
        assert_eq!(records[0].full_iso, "40FR");
        assert_eq!(records[0].dimensions.map(|d| d.cbm), Some(76));
        assert_eq!(records[0].verdict, Verdict::Pass);
        assert_eq!(records[1].full_iso, "40XX");
        assert_eq!(records[1].tos_code, "BANANA-BOX");
        assert_eq!(records[1].verdict, Verdict::Warn);
    }

    #[test]
    fn test_check_serials() {
        let records = check_serials(
            &Config::default(),
            &[
                "TCLU7024574".to_string(),
                "MSCU1234560".to_string(),
                "HELLO-WORLD".to_string(),
            ],
        );
        assert_eq!(records[0].verdict, Verdict::Pass);
        assert_eq!(records[1].expected_check_digit, Some(6));
        assert_eq!(records[1].verdict, Verdict::Error);
        assert!(records[2].parsed.is_none());
        assert_eq!(records[2].expected_check_digit, None);
    }
}
