use crate::convert::{Conversion, FileConversion, TokenList};
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonCompound<'a> {
    tokens: &'a [String],
    output: &'a str,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_conversions(
    conversions: &[Conversion],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(conversions),
        OutputFormat::Text => {
            for conversion in conversions {
                if colored_output {
                    println!(
                        "{} {} {}",
                        conversion.input.dimmed(),
                        "→".dimmed(),
                        conversion.output.green().bold()
                    );
                } else {
                    println!("{}", conversion.output);
                }
            }
            Ok(())
        }
    }
}

pub fn print_tokens(lists: &[TokenList], colored_output: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(lists),
        OutputFormat::Text => {
            for list in lists {
                if colored_output {
                    let tokens = list
                        .tokens
                        .iter()
                        .map(|t| t.cyan().to_string())
                        .collect::<Vec<_>>()
                        .join(&" · ".dimmed().to_string());
                    println!("{} {} {}", list.input.dimmed(), "→".dimmed(), tokens);
                } else {
                    println!("{}", list.tokens.join(" "));
                }
            }
            Ok(())
        }
    }
}

pub fn print_compound(
    tokens: &[String],
    output: &str,
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&JsonCompound { tokens, output }),
        OutputFormat::Text => {
            if colored_output {
                println!("{}", output.green().bold());
            } else {
                println!("{}", output);
            }
            Ok(())
        }
    }
}

pub fn print_files(
    results: &[FileConversion],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(results),
        OutputFormat::Text => {
            let with_headers = results.len() > 1;
            for result in results {
                if with_headers {
                    let file_name = result.file.display().to_string();
                    if colored_output {
                        println!("{}", file_name.bold().underline());
                    } else {
                        println!("==> {} <==", file_name);
                    }
                }
                print!("{}", result.output);
            }
            Ok(())
        }
    }
}
