//! Stats command - Show question bank statistics

use std::collections::BTreeMap;

use clap::Args;
use serde::Serialize;

use super::utils::AppContext;
use crate::config::OutputFormat;
use crate::core::medmoriser::Medmoriser;
use crate::storage::MedmoriserStorage;

/// Stats command arguments
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// How many of the most used tags to show
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_entries: usize,
    pub untagged_entries: usize,
    pub with_contact: usize,
    pub question_sets: usize,
    pub entries_in_sets: usize,
    /// Most used tags first, ties by name
    pub top_tags: Vec<(String, usize)>,
}

impl Stats {
    pub fn collect(medmoriser: &Medmoriser, top: usize) -> Self {
        let qandas = medmoriser.qandas();

        let mut tag_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for tag in qandas.iter().flat_map(|q| q.tags()) {
            *tag_counts.entry(tag.as_str()).or_default() += 1;
        }
        let mut top_tags: Vec<(String, usize)> = tag_counts
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        top_tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_tags.truncate(top);

        Self {
            total_entries: qandas.len(),
            untagged_entries: qandas.iter().filter(|q| q.tags().is_empty()).count(),
            with_contact: qandas
                .iter()
                .filter(|q| !q.phone().is_placeholder() || !q.email().is_placeholder())
                .count(),
            question_sets: medmoriser.question_sets().len(),
            entries_in_sets: medmoriser.question_sets().iter().map(|s| s.len()).sum(),
            top_tags,
        }
    }
}

fn percent(part: usize, total: usize) -> usize {
    if total > 0 {
        part * 100 / total
    } else {
        0
    }
}

/// Execute stats command
pub fn run(args: StatsArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let model = ctx.load_model()?;
    let stats = Stats::collect(model.medmoriser(), args.top);

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let total = stats.total_entries;
    println!("Question Bank Statistics\n");
    println!("  Total entries:    {total}");
    println!(
        "  ├── Untagged:     {} ({}%)",
        stats.untagged_entries,
        percent(stats.untagged_entries, total)
    );
    println!(
        "  ├── With contact: {} ({}%)",
        stats.with_contact,
        percent(stats.with_contact, total)
    );
    println!(
        "  └── In sets:      {} ({}%)",
        stats.entries_in_sets,
        percent(stats.entries_in_sets, total)
    );
    println!("  Question sets:    {}", stats.question_sets);

    if !stats.top_tags.is_empty() {
        println!("\nTop tags:");
        for (tag, count) in &stats.top_tags {
            println!("  {tag} ({count} entries)");
        }
    }

    println!("\nData file: {}", ctx.storage.path().display());
    Ok(())
}
