use mutgen::discover;
use mutgen::mutants;
use mutgen::operators::OperatorSet;
use mutgen::output;
use mutgen::state;

use std::collections::BTreeMap;
use std::process;
use std::time::Instant;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mutgen", version, about = "Mutant generation for JavaScript and TypeScript")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate mutants from a source file
    Generate {
        /// Source file to mutate
        file: Utf8PathBuf,
        /// Dialect override (javascript, typescript, tsx); default: by extension
        #[arg(long)]
        dialect: Option<String>,
        /// Restrict generation to the named operators (repeatable)
        #[arg(long = "operator")]
        operators: Vec<String>,
        /// Write each mutant's full mutated source into this directory
        #[arg(short, long)]
        out: Option<Utf8PathBuf>,
        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
        /// Exit code only, no output
        #[arg(short, long)]
        quiet: bool,
    },
    /// Show details for a generated mutant by ref
    Show {
        /// Mutant ref (e.g. @m1 or m1)
        #[arg(name = "ref")]
        mutant_ref: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Summary of the last generation run
    Status {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Generate {
            file,
            dialect,
            operators,
            out,
            json,
            quiet,
        } => cmd_generate(file, dialect, operators, out, json, quiet),
        Commands::Show { mutant_ref, json } => cmd_show(mutant_ref, json),
        Commands::Status { json } => cmd_status(json),
    };

    process::exit(exit_code);
}

fn cmd_generate(
    file: Utf8PathBuf,
    dialect: Option<String>,
    operator_names: Vec<String>,
    out: Option<Utf8PathBuf>,
    json_mode: bool,
    quiet: bool,
) -> i32 {
    if !file.exists() {
        output::print_error(&format!(
            "Source file not found: {}. Check the path and try again.",
            file
        ));
        return 2;
    }

    let dialect = match dialect.as_deref() {
        Some(name) => match mutgen::Dialect::from_name(name) {
            Some(d) => d,
            None => {
                output::print_error(&format!(
                    "Unknown dialect: {}. Supported: javascript, typescript, tsx",
                    name
                ));
                return 2;
            }
        },
        None => match mutgen::detect_dialect(&file) {
            Some(d) => d,
            None => {
                output::print_error(&format!(
                    "Unsupported file type: {}. Supported: .js, .mjs, .cjs, .jsx, .ts, .mts, .cts, .tsx",
                    file
                ));
                return 2;
            }
        },
    };

    let mut operators = OperatorSet::all();
    if !operator_names.is_empty() {
        let known = operators.names();
        for name in &operator_names {
            if !known.iter().any(|k| k == name) {
                output::print_error(&format!(
                    "Unknown operator: {}. Available: {}",
                    name,
                    known.join(", ")
                ));
                return 2;
            }
        }
        operators.retain_named(&operator_names);
    }

    let source = match std::fs::read_to_string(&file) {
        Ok(s) => s,
        Err(e) => {
            output::print_error(&format!("Failed to read {}: {}", file, e));
            return 3;
        }
    };

    let start = Instant::now();
    let discovery = match discover::discover(&file, &source, dialect, &operators) {
        Ok(d) => d,
        Err(e) => {
            output::print_error(&format!("Failed to generate mutants: {}", e));
            return 3;
        }
    };
    let duration_ms = start.elapsed().as_millis() as u64;

    // Write mutant files first so each ref can record where it landed.
    let saved_paths: Vec<Option<String>> = match &out {
        Some(dir) => mutants::save_all(&discovery.mutants, dir)
            .iter()
            .enumerate()
            .map(|(i, res)| match res {
                Ok(path) => Some(path.to_string()),
                Err(e) => {
                    if !quiet {
                        output::print_error(&format!("Failed to save mutant m{}: {}", i + 1, e));
                    }
                    None
                }
            })
            .collect(),
        None => vec![None; discovery.mutants.len()],
    };

    let mut by_operator: BTreeMap<String, usize> = BTreeMap::new();
    for m in &discovery.mutants {
        *by_operator.entry(m.operator.clone()).or_insert(0) += 1;
    }

    let mutant_records: Vec<state::MutantRecord> = discovery
        .mutants
        .iter()
        .zip(saved_paths)
        .enumerate()
        .map(|(i, (m, saved))| state::MutantRecord::new(m, format!("m{}", i + 1), saved))
        .collect();

    let record = state::GenerationRecord {
        file: file.to_string(),
        dialect: dialect.name().to_string(),
        total: discovery.mutants.len(),
        skipped: discovery.skipped.len(),
        by_operator,
        duration_ms,
        out_dir: out.map(|d| d.to_string()),
        mutants: mutant_records,
        skipped_sites: discovery.skipped,
    };

    state::save_last_run(&record);

    if quiet {
        return 0;
    }

    if json_mode {
        println!("{}", serde_json::to_string(&record).unwrap());
    } else {
        output::print_generation_result(&record);
    }

    0
}

fn cmd_show(mutant_ref: String, json_mode: bool) -> i32 {
    let ref_id = mutant_ref.trim_start_matches('@');

    let last_run = match state::load_last_run() {
        Some(r) => r,
        None => {
            output::print_error("No previous generation found. Run `mutgen generate` first.");
            return 2;
        }
    };

    let mutant = last_run.mutants.iter().find(|m| m.ref_id == ref_id);
    match mutant {
        Some(m) => {
            if json_mode {
                println!("{}", serde_json::to_string(m).unwrap());
            } else {
                output::print_mutant_detail(m);
            }
            0
        }
        None => {
            let valid: Vec<_> = last_run
                .mutants
                .iter()
                .map(|m| format!("@{}", m.ref_id))
                .collect();
            output::print_error(&format!(
                "Mutant @{} not found. Valid refs: {}",
                ref_id,
                valid.join(", ")
            ));
            2
        }
    }
}

fn cmd_status(json_mode: bool) -> i32 {
    match state::load_last_run() {
        Some(record) => {
            if json_mode {
                println!("{}", serde_json::to_string(&record).unwrap());
            } else {
                output::print_status(&record);
            }
            0
        }
        None => {
            output::print_error("No previous generation found. Run `mutgen generate` first.");
            2
        }
    }
}
