use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "setkit workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Set vs std HashSet benchmarks and write a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "set_benchmark";
const COLLECTIONS: &[&str] = &["Set", "HashSet"];

/// ops/s per operation, per collection.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = project_root();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(&root, quick)?;
            }
            generate_report(&root)?;
        }
    }

    Ok(())
}

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn run_benchmarks(root: &Path, quick: bool) -> Result<()> {
    println!("Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.current_dir(root)
        .env("CARGO_INCREMENTAL", "0")
        .args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1"]);
        cmd.arg("--noplot");
        cmd.args(["--sample-size", "10"]);
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run cargo bench for {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH} failed with {status}");
    }

    println!("Finished {BENCH} in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report(root: &Path) -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = root.join("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(&criterion_dir, &mut results);

    let report_path = root.join("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let mut file = fs::File::create(&report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# Set vs HashSet Benchmark Report")?;
    writeln!(file)?;

    write!(file, "| Operation |")?;
    for collection in COLLECTIONS {
        write!(file, " {collection} (Ops/s) |")?;
    }
    writeln!(file, " Set vs HashSet |")?;

    write!(file, "|---|")?;
    for _ in COLLECTIONS {
        write!(file, "---|")?;
    }
    writeln!(file, "---|")?;

    for (operation, by_collection) in &results {
        write!(file, "| {operation} |")?;
        for collection in COLLECTIONS {
            match by_collection.get(*collection) {
                Some(ops) => write!(file, " {} |", format_ops(*ops))?,
                None => write!(file, " N/A |")?,
            }
        }
        match (by_collection.get("Set"), by_collection.get("HashSet")) {
            (Some(ours), Some(std)) if *std > 0.0 => writeln!(file, " **{:.2}x** |", ours / std)?,
            _ => writeln!(file, " - |")?,
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks criterion output for `<bench>/new/estimates.json`, where `<bench>`
/// is named `<Collection>_<operation>`.
fn collect_results(dir: &Path, results: &mut Results) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(sample_dir) = path.parent() else {
            continue;
        };
        if sample_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_name) = sample_dir
            .parent()
            .and_then(Path::file_name)
            .and_then(|s| s.to_str())
        else {
            continue;
        };
        let Some((collection, operation)) = bench_name.split_once('_') else {
            continue;
        };
        if !COLLECTIONS.contains(&collection) {
            continue;
        }

        // Throughput comes from the sibling benchmark.json
        let elements = read_json(&sample_dir.join("benchmark.json"))
            .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64());

        let time_ns = read_json(&path)
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64())
            .unwrap_or(0.0);
        if time_ns <= 0.0 {
            continue;
        }

        let metric = elements.unwrap_or(1.0) * 1e9 / time_ns;
        results
            .entry(operation.to_string())
            .or_default()
            .insert(collection.to_string(), metric);
    }
}

fn read_json(path: &Path) -> Option<serde_json::Value> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}
