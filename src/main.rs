// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shortlist CLI entrypoint.
//!
//! Parses a saved listing page, runs entity detection, applies the requested
//! selection, and prints the export (JSON by default, CSV with `--csv`) to
//! stdout or `--out`.
//!
//! With `--state <file>` the selection persists between runs, keyed by
//! normalized title, so a later run against a changed page re-selects the
//! surviving entries.

use std::error::Error;
use std::fmt::Write as _;
use std::fs;

use shortlist::engine::SelectionContext;
use shortlist::format::parse_document;
use shortlist::model::dom::Document;
use shortlist::store::{JsonFileStore, KeyValueStore, MemoryStore};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <page.html> [--all | --range <a> <b>] [--csv] [--list] [--out <file>] [--state <file>]\n\nPrints the selected titles of the detected entries as JSON (default) or CSV (--csv).\n\n--all            select every detected entry\n--range <a> <b>  select the inclusive index range (either order)\n--list           print the detected entries with selection markers instead of exporting\n--out <file>     write the export to <file> instead of stdout\n--state <file>   persist the selection (by normalized title) in a JSON state file"
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    page: Option<String>,
    all: bool,
    range: Option<(usize, usize)>,
    csv: bool,
    list: bool,
    out: Option<String>,
    state: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--all" => {
                if options.all {
                    return Err(());
                }
                options.all = true;
            }
            "--range" => {
                if options.range.is_some() {
                    return Err(());
                }
                let a: usize = args.next().ok_or(())?.parse().map_err(|_| ())?;
                let b: usize = args.next().ok_or(())?.parse().map_err(|_| ())?;
                options.range = Some((a, b));
            }
            "--csv" => {
                if options.csv {
                    return Err(());
                }
                options.csv = true;
            }
            "--list" => {
                if options.list {
                    return Err(());
                }
                options.list = true;
            }
            "--out" => {
                if options.out.is_some() {
                    return Err(());
                }
                options.out = Some(args.next().ok_or(())?);
            }
            "--state" => {
                if options.state.is_some() {
                    return Err(());
                }
                options.state = Some(args.next().ok_or(())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.page.is_some() {
                    return Err(());
                }
                options.page = Some(arg);
            }
        }
    }

    if options.page.is_none() {
        return Err(());
    }

    if options.all && options.range.is_some() {
        return Err(());
    }

    Ok(options)
}

/// Builds the engine context for one invocation: store per `--state`,
/// rescan, then the requested `--all`/`--range` selection.
fn build_context(doc: &Document, options: &CliOptions) -> SelectionContext<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match options.state.as_deref() {
        Some(path) => Box::new(JsonFileStore::open(path)),
        None => Box::new(MemoryStore::new()),
    };
    let mut ctx = SelectionContext::new(store);
    ctx.rescan(doc);

    if options.all {
        ctx.select_all();
    } else if let Some((a, b)) = options.range {
        ctx.apply_range(a, b, true);
    }
    ctx
}

/// The bytes the invocation emits: the entry listing for `--list`,
/// otherwise the CSV or JSON export.
fn render_output<S: KeyValueStore>(
    ctx: &SelectionContext<S>,
    doc: &Document,
    options: &CliOptions,
) -> String {
    if options.list {
        let mut out = String::new();
        for (index, entity) in ctx.entities().iter().enumerate() {
            let marker = if ctx.selection().selected(index) { 'x' } else { ' ' };
            let _ = writeln!(out, "[{marker}] {index:>3}  {}", entity.title());
        }
        out
    } else if options.csv {
        ctx.export_csv(doc)
    } else {
        ctx.export_json(doc)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "shortlist".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let page = options.page.as_deref().unwrap_or_default();
        let html = fs::read_to_string(page)?;
        let doc = parse_document(&html);

        let ctx = build_context(&doc, &options);
        let output = render_output(&ctx, &doc, &options);

        match options.out.as_deref() {
            Some(path) => fs::write(path, &output)?,
            None => {
                print!("{output}");
                if !output.ends_with('\n') {
                    println!();
                }
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("shortlist: {err}");
        std::process::exit(1);
    }
}
