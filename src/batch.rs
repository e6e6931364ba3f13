//! Grouping, sequence-gap warnings, and the sequential commit driver.

use crate::classify::ClassifiedItem;
use crate::glob::ExcludeMatcher;
use crate::vcs::{ChangeEntry, Vcs};

use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Runtime configuration, built once from the CLI and passed explicitly.
pub struct Config {
    /// Report intended actions without mutating anything.
    pub preview: bool,
    /// Optional glob filtering paths out before grouping and ordering.
    pub exclude: Option<ExcludeMatcher>,
}

/// First sequence number required to be contiguous. Unnumbered files
/// (sequence 0) never participate in gap checks.
const GAP_START_BOUND: u64 = 1;

/// Classify, filter, and order a change set into the commit batch.
///
/// Paths that do not fit `name[.number].extension` are dropped silently;
/// excluded paths are dropped before grouping. The result is sorted in
/// commit order.
pub fn collect_items(
    entries: &[ChangeEntry],
    exclude: Option<&ExcludeMatcher>,
) -> Vec<ClassifiedItem> {
    let mut items: Vec<ClassifiedItem> = entries
        .iter()
        .filter_map(|entry| ClassifiedItem::classify(&entry.path))
        .filter(|item| exclude.map_or(true, |matcher| !matcher.matches(&item.file)))
        .collect();
    items.sort();
    items
}

/// Detect holes in each `(base, extension)` group's numeric sequence.
///
/// For every group, integers absent from `[GAP_START_BOUND, max]` are
/// reported as the filenames they would have had. Advisory only; the batch
/// proceeds regardless.
pub fn sequence_gaps(items: &[ClassifiedItem]) -> Vec<(String, Vec<String>)> {
    let mut groups: BTreeMap<(String, String), Vec<u64>> = BTreeMap::new();
    for item in items {
        groups
            .entry((item.base.clone(), item.extension.clone()))
            .or_default()
            .push(item.sequence);
    }

    let mut gaps = Vec::new();
    for ((base, extension), numbers) in groups {
        let max = numbers.iter().copied().max().unwrap_or(0);
        let missing: Vec<String> = (GAP_START_BOUND..=max)
            .filter(|n| !numbers.contains(n))
            .map(|n| format!("{}.{}{}", base, n, extension))
            .collect();
        if !missing.is_empty() {
            gaps.push((format!("{}{}", base, extension), missing));
        }
    }
    gaps
}

/// Run one batch against the repository at `root`.
///
/// Strictly sequential: each item is renamed (when needed), staged, and
/// committed as its own transaction before the next item is touched. The
/// first failing step aborts the remainder of the batch; commits already
/// made stand.
pub fn run(vcs: &dyn Vcs, root: &Path, config: &Config) -> Result<()> {
    let entries = vcs
        .status()
        .context("Error retrieving version-control status")?;
    let items = collect_items(&entries, config.exclude.as_ref());

    if items.is_empty() {
        println!("No uncommitted files matching criteria to process.");
        return Ok(());
    }

    for (group, missing) in sequence_gaps(&items) {
        eprintln!(
            "{} missing files in sequence for {} pattern: {}",
            "Warning:".yellow().bold(),
            group,
            missing.join(", ")
        );
    }

    if config.preview {
        println!("Preview mode: the files will be committed in the following order:");
        for (index, item) in items.iter().enumerate() {
            let target = item.target();
            if item.needs_rename() {
                println!("{}. Rename {} -> {} and commit", index + 1, item.file, target);
            } else {
                println!("{}. Commit {}", index + 1, item.file);
            }
        }
        return Ok(());
    }

    for (index, item) in items.iter().enumerate() {
        let target = item.target();
        if item.needs_rename() {
            println!(
                "{}. Renaming {} to {} and committing...",
                index + 1,
                item.file,
                target
            );
            fs::rename(root.join(&item.file), root.join(&target))
                .with_context(|| format!("Failed to rename {} to {}", item.file, target))?;
        } else {
            println!("{}. Committing {}...", index + 1, item.file);
        }
        vcs.stage(&target)?;
        vcs.commit(&format!("Add {}", target))?;
    }

    println!("All matching uncommitted files have been committed and renamed in order.");
    Ok(())
}
