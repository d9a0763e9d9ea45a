//! Conversion driver: file I/O around the pure parse/aggregate/render
//! stages.
//!
//! The input file is opened before the output directory is created, so a
//! missing or unreadable hosts file never leaves an empty directory
//! behind. Malformed lines are warned about and skipped rather than
//! aborting the run; zone files already written stay on disk if a later
//! write fails.

use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};
use colored::Colorize;
use hosts2bind::aggregate::{build_tables, TableEvent};
use hosts2bind::parse::{parse_line, HostLine};
use hosts2bind::summary::{render as render_summary, summarize};
use zonefile_core::{ensure_output_dir, write_zone, Manifest};

use crate::cli::{Cli, OutputFormat};

pub fn run_convert(cli: Cli) -> Result<()> {
    let file = File::open(&cli.hosts_file)
        .with_context(|| format!("failed to open hosts file {}", cli.hosts_file.display()))?;

    let lines = read_host_lines(BufReader::new(file), &cli)?;

    let verbose = cli.verbose;
    let tables = build_tables(&lines, |event| match event {
        TableEvent::ReverseZoneAdded(zone) => {
            if verbose {
                println!("Added reverse {zone}");
            }
        }
        TableEvent::ForwardZoneAdded(zone) => {
            if verbose {
                println!("Added forward {zone}");
            }
        }
        TableEvent::ReverseOverwritten {
            zone,
            octet,
            previous,
            replacement,
        } => {
            eprintln!(
                "warning: {octet} in {zone} remapped from {previous} to {replacement}; last entry wins"
            );
        }
        TableEvent::ForwardOverwritten {
            zone,
            name,
            previous,
            replacement,
        } => {
            eprintln!(
                "warning: {name}.{zone} remapped from {previous} to {replacement}; last entry wins"
            );
        }
    });
    let summary = summarize(&tables);

    ensure_output_dir(&cli.output)?;
    if verbose {
        println!("Creating output in {}", cli.output.display());
    }

    let mut manifest = Manifest::default();
    for zone in tables.into_zones() {
        if verbose {
            println!("Writing file {}...", zone.name);
        }
        write_zone(&cli.output, &zone)
            .with_context(|| format!("failed to write zone {}", zone.name))?;
        manifest.push(zone.name);
    }
    manifest
        .write(&cli.output)
        .with_context(|| format!("failed to write manifest in {}", cli.output.display()))?;

    match cli.format {
        OutputFormat::Text => println!("{}", render_summary(summary).cyan()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

/// Read and parse the hosts file, warning about malformed lines.
fn read_host_lines(reader: impl BufRead, cli: &Cli) -> Result<Vec<HostLine>> {
    let mut lines = Vec::new();
    for (index, raw) in reader.lines().enumerate() {
        let raw = raw.with_context(|| {
            format!("failed to read hosts file {}", cli.hosts_file.display())
        })?;
        match parse_line(&raw) {
            Ok(Some(line)) => lines.push(line),
            Ok(None) => {}
            Err(err) => eprintln!("warning: line {}: {err}; skipping", index + 1),
        }
    }
    Ok(lines)
}
