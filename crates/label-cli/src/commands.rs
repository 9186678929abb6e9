use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{info, info_span};

use label_core::{ProcessingOptions, build_frequency_map, run_two_pass};
use label_ingest::{read_product_records, read_product_records_from_reader};
use label_map::ResolverOptions;
use label_model::{MetadataVocabulary, ProductRecord};
use label_output::{OutputFormat, write_outputs};

use crate::cli::{FrequencyArgs, OutputFormatArg, ParseArgs, VocabularyArgs};
use crate::summary::apply_table_style;
use crate::types::ParseResult;

const STDIN_PATH: &str = "-";

pub fn run_parse(args: &ParseArgs) -> Result<ParseResult> {
    let span = info_span!("parse", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let options = ProcessingOptions::new()
        .with_resolver(
            ResolverOptions::default()
                .with_threshold(args.threshold)
                .with_min_occurrences(args.min_occurrences),
        )
        .with_vocabulary(load_vocabulary(&args.vocabulary)?);
    let records = load_records(&args.input)?;
    let output = run_two_pass(&records, &options).context("build care-label parser")?;

    let (output_dir, written) = if args.dry_run {
        info!("dry run, skipping output files");
        (None, Vec::new())
    } else {
        let dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("output"));
        let written = write_outputs(&output.products, &dir, &format_outputs(args.format))
            .with_context(|| format!("write outputs to {}", dir.display()))?;
        (Some(dir), written)
    };

    info!(
        products = output.products.len(),
        files = written.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "parse complete"
    );
    Ok(ParseResult {
        input: args.input.clone(),
        output_dir,
        written,
        output,
        top: args.top,
    })
}

pub fn run_frequencies(args: &FrequencyArgs) -> Result<()> {
    let vocabulary = load_vocabulary(&args.vocabulary)?;
    let records = load_records(&args.input)?;
    let frequencies =
        build_frequency_map(&records, &vocabulary).context("build care-label parser")?;

    let mut table = Table::new();
    table.set_header(vec!["Fiber name", "Count"]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    let ranked = frequencies
        .most_frequent()
        .into_iter()
        .filter(|(_, count)| *count >= args.min)
        .take(args.limit.unwrap_or(usize::MAX));
    for (name, count) in ranked {
        let name = if name.is_empty() { "(empty)" } else { name };
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    println!("{table}");
    println!(
        "{} distinct names, {} mentions",
        frequencies.len(),
        frequencies.total()
    );
    Ok(())
}

fn load_records(input: &Path) -> Result<Vec<ProductRecord>> {
    if input == Path::new(STDIN_PATH) {
        return read_product_records_from_reader(io::stdin().lock())
            .context("read product records from stdin");
    }
    read_product_records(input)
        .with_context(|| format!("read product records from {}", input.display()))
}

fn load_vocabulary(args: &VocabularyArgs) -> Result<MetadataVocabulary> {
    let Some(path) = &args.vocabulary else {
        return Ok(MetadataVocabulary::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read vocabulary {}", path.display()))?;
    MetadataVocabulary::from_json_str(&json)
        .with_context(|| format!("parse vocabulary {}", path.display()))
}

fn format_outputs(format: OutputFormatArg) -> Vec<OutputFormat> {
    match format {
        OutputFormatArg::Csv => vec![OutputFormat::Csv],
        OutputFormatArg::Json => vec![OutputFormat::Json],
        OutputFormatArg::Both => vec![OutputFormat::Csv, OutputFormat::Json],
    }
}
