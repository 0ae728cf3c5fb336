//! Rendering of command results and entry lists
//!
//! - pretty: colored message plus a table
//! - compact: tab-separated lines, one per entry
//! - json: one JSON document per invocation

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::OutputFormat;
use crate::core::command::CommandResult;
use crate::core::field::Tag;
use crate::core::qanda::QAndA;

#[derive(Tabled)]
struct QAndARow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Question")]
    question: String,
    #[tabled(rename = "Answer")]
    answer: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Contact")]
    contact: String,
}

#[derive(Serialize)]
struct Listing<'a> {
    message: &'a str,
    entries: &'a [QAndA],
}

/// Print the outcome of a command
pub fn print_result(result: &CommandResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Compact => println!("{}", result.message),
        OutputFormat::Pretty => println!("{} {}", "✓".green(), result.message),
    }
    Ok(())
}

/// Print the outcome of a command followed by the entries it left displayed
pub fn print_listing(result: &CommandResult, qandas: &[QAndA], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let listing = Listing {
                message: &result.message,
                entries: qandas,
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Compact => {
            for (i, qanda) in qandas.iter().enumerate() {
                println!("{}", compact_line(i + 1, qanda));
            }
        }
        OutputFormat::Pretty => {
            println!("{}", result.message.bold());
            if qandas.is_empty() {
                println!("{}", "No entries to show.".dimmed());
            } else {
                println!("{}", render_table(qandas));
            }
        }
    }
    Ok(())
}

/// Table of entries numbered from 1
pub fn render_table(qandas: &[QAndA]) -> String {
    let rows = qandas.iter().enumerate().map(|(i, qanda)| QAndARow {
        index: i + 1,
        question: qanda.question().to_string(),
        answer: qanda.answer().to_string(),
        tags: format_tags(qanda.tags().iter()),
        contact: format_contact(qanda),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn compact_line(index: usize, qanda: &QAndA) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        index,
        qanda.question(),
        qanda.answer(),
        format_tags(qanda.tags().iter())
    )
}

pub fn format_tags<'a>(tags: impl Iterator<Item = &'a Tag>) -> String {
    let joined: Vec<&str> = tags.map(Tag::as_str).collect();
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.join(", ")
    }
}

/// Contact details, leaving out placeholder values
pub fn format_contact(qanda: &QAndA) -> String {
    let mut parts = Vec::new();
    if !qanda.phone().is_placeholder() {
        parts.push(qanda.phone().as_str());
    }
    if !qanda.email().is_placeholder() {
        parts.push(qanda.email().as_str());
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" / ")
    }
}
