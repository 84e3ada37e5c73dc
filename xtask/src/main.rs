use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Backstop workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the check-overhead benchmarks and summarize the results
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCHES: &[&str] = &["checks_benchmark", "guards_benchmark"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running check-overhead benchmarks...");

    for bench in BENCHES {
        println!("\n>>> Benchmarking: {}", bench);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");

        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .context(format!("Failed to run bench {}", bench))?;

        if !status.success() {
            eprintln!("Warning: Benchmark failed for {}", bench);
        } else {
            println!("Finished {} in {:.2?}", bench, start.elapsed());
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: BTreeMap<String, f64> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Check Overhead Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Time/op | Ops/s |")?;
    writeln!(file, "|---|---|---|")?;

    for (workload, time_ns) in &results {
        let ops = if *time_ns > 0.0 { 1e9 / time_ns } else { 0.0 };
        let ops_str = if ops > 1_000_000.0 {
            format!("{:.2}M", ops / 1_000_000.0)
        } else if ops > 1_000.0 {
            format!("{:.2}K", ops / 1_000.0)
        } else {
            format!("{:.0}", ops)
        };
        writeln!(file, "| {} | {:.1} ns | {} |", workload, time_ns, ops_str)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn collect_results(dir: &Path, results: &mut BTreeMap<String, f64>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results);
        } else if path.file_name().and_then(|s| s.to_str()) == Some("estimates.json") {
            // Structure: .../workload/{new,base}/estimates.json
            let Some(baseline_dir) = path.parent() else {
                continue;
            };
            if baseline_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
                continue;
            }
            let Some(workload_name) = baseline_dir
                .parent()
                .and_then(|d| d.file_name())
                .and_then(|s| s.to_str())
            else {
                continue;
            };
            if workload_name == "report" {
                continue;
            }

            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) {
                    if let Some(mean) = json.get("mean").and_then(|m| m.get("point_estimate")) {
                        let time_ns = mean.as_f64().unwrap_or(0.0);
                        if time_ns > 0.0 {
                            results.insert(workload_name.to_string(), time_ns);
                        }
                    }
                }
            }
        }
    }
}
