//! Word Hashing Benchmarking Tool
//!
//! Measures the preprocessing pipeline on a file of text pairs, giving
//! realistic throughput numbers for production-like training sets.
//!
//! ## What It Benchmarks
//!
//! 1. **Chain**: The stateless units only (tokenize → lowercase → punctuation
//!    → stopwords → n-gram), both sides of every record
//! 2. **Fit**: Vocabulary construction over the whole file
//! 3. **Transform**: Word hashing of the whole file through the fitted vocabulary
//!
//! ## Input Format
//!
//! One record per line, tab-separated: `left<TAB>right` or
//! `left<TAB>right<TAB>label`. All lines must share the same shape. Lines with
//! any other field count are skipped with a warning.
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/prep_bench /path/to/pairs.tsv
//!
//! # Keep stopwords
//! ./target/release/prep_bench /path/to/pairs.tsv keep
//!
//! # With pipeline logs
//! RUST_LOG=wordhash_core=debug ./target/release/prep_bench /path/to/pairs.tsv
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Transform ===
//! --------------------------------
//! Mode        : Transform
//! Elapsed     : 0.452 s
//! Throughput  : 0.180 GiB/s
//! Records     : 1_000_000
//! Records/sec : 2_212_389
//! --------------------------------
//! ```

use std::env;
use std::error::Error;
use std::fs;
use std::time::{Duration, Instant};

use memchr::memchr_iter;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use wordhash_core::{Pipeline, PipelineConfig, RawRecord};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: prep_bench <path> [keep]");
        std::process::exit(1);
    }

    let path = &args[1];

    let config = match args.get(2).map(String::as_str) {
        Some("keep") => PipelineConfig::keep_stopwords(),
        _ => PipelineConfig::triletter(),
    };

    println!("Loading file...");
    let input = fs::read_to_string(path)?;
    let records = parse_records(&input);

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Records:   {}", fmt_count(records.len() as u64));
    println!("Stopwords: {}\n", config.stopwords);

    let mut pipeline = Pipeline::with_config(config)?;

    bench_chain(&pipeline, &records, input.len());
    bench_fit(&mut pipeline, &records, input.len())?;
    bench_transform(&pipeline, &records, input.len())?;

    println!("{}", pipeline.stats());

    Ok(())
}

fn parse_records(input: &str) -> Vec<RawRecord<String>> {
    let mut records = Vec::new();
    let mut start = 0usize;
    let bytes = input.as_bytes();

    let ends = memchr_iter(b'\n', bytes).chain(std::iter::once(bytes.len()));
    for (line_no, end) in ends.enumerate() {
        let line = input[start..end].trim_end_matches('\r');
        start = end + 1;

        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        match fields.as_slice() {
            [left, right] => records.push(RawRecord::pair(*left, *right)),
            [left, right, label] => {
                records.push(RawRecord::labeled(*left, *right, (*label).to_owned()))
            }
            _ => warn!(line = line_no + 1, fields = fields.len(), "skipping line"),
        }
    }

    records
}

fn bench_chain(pipeline: &Pipeline, records: &[RawRecord<String>], input_bytes: usize) {
    println!("=== Chain ===");

    let run = || {
        let chain = pipeline.stateless_units();
        let mut grams = 0u64;
        for record in records {
            grams += chain.apply(record.left()).len() as u64;
            grams += chain.apply(record.right()).len() as u64;
        }
        std::hint::black_box(grams)
    };

    warmup(|| {
        run();
    });

    let mut grams = 0u64;
    let elapsed = measure(|| {
        grams = run();
    });

    print_perf("Chain", input_bytes, elapsed, records.len() as u64);
    println!("N-grams     : {}\n", fmt_count(grams));
}

fn bench_fit(
    pipeline: &mut Pipeline,
    records: &[RawRecord<String>],
    input_bytes: usize,
) -> Result<(), Box<dyn Error>> {
    println!("=== Fit ===");

    pipeline.fit(records)?;

    let elapsed = measure(|| {
        let _ = std::hint::black_box(pipeline.fit(records).is_ok());
    });

    print_perf("Fit", input_bytes, elapsed, records.len() as u64);
    Ok(())
}

fn bench_transform(
    pipeline: &Pipeline,
    records: &[RawRecord<String>],
    input_bytes: usize,
) -> Result<(), Box<dyn Error>> {
    println!("=== Transform ===");

    let out = pipeline.transform(records)?;
    let nnz: u64 = out
        .iter()
        .map(|(left, right, _)| (left.nnz() + right.nnz()) as u64)
        .sum();

    warmup(|| {
        let _ = std::hint::black_box(pipeline.transform(records).map(|o| o.len()).ok());
    });

    let elapsed = measure(|| {
        let _ = std::hint::black_box(pipeline.transform(records).map(|o| o.len()).ok());
    });

    print_perf("Transform", input_bytes, elapsed, records.len() as u64);
    println!("Dim         : {}", fmt_count(out.dim_triletter() as u64));
    println!("Non-zeros   : {}\n", fmt_count(nnz));
    Ok(())
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, records: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if records > 0 {
        println!("Records     : {}", fmt_count(records));
        println!("Records/sec : {}", fmt_count((records as f64 / secs) as u64));
    }

    println!("--------------------------------");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordhash_core::Arity;

    #[test]
    fn parses_pairs_and_skips_bad_lines() {
        let records = parse_records("a\tb\r\n\nonly-one\nc\td\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].arity(), Arity::Pair);
        assert_eq!(records[1].right(), "d");
    }

    #[test]
    fn parses_labels() {
        let records = parse_records("q\tdoc\t1\nq\tother\t0");
        assert_eq!(records[1].label().map(String::as_str), Some("0"));
    }

    #[test]
    fn count_grouping() {
        assert_eq!(fmt_count(1_234_567), "1_234_567");
        assert_eq!(fmt_count(12), "12");
    }
}
