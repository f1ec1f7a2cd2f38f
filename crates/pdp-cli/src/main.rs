//! PDP CLI
//!
//! CLI tool for splitting URLs and classifying hosts against a Public Suffix List.

mod list;
mod output;

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use pdp_core::{DomainParser, ParseFlags};

use crate::list::load_rule_table;
use crate::output::{format_json, format_text};

#[derive(Parser)]
#[command(name = "pdp-cli")]
#[command(about = "Public Suffix List based URL parser")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse URLs or hosts (reads stdin lines when none are given)
    Parse {
        /// Public Suffix List file
        #[arg(short, long, default_value = "public_suffix_list.dat")]
        list: PathBuf,

        /// URLs or hosts to parse
        inputs: Vec<String>,

        /// Print one JSON object per input
        #[arg(long)]
        json: bool,

        /// Fail on hosts that are themselves a public suffix
        #[arg(long)]
        strict: bool,

        /// Keep the host's original casing in the domain parts
        #[arg(long)]
        preserve_case: bool,

        /// Ignore the PRIVATE DOMAINS section of the list
        #[arg(long)]
        icann_only: bool,
    },

    /// Dump rule table info
    Info {
        /// Public Suffix List file
        #[arg(short, long, default_value = "public_suffix_list.dat")]
        list: PathBuf,

        /// Ignore the PRIVATE DOMAINS section of the list
        #[arg(long)]
        icann_only: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let result = match cli.command {
        Commands::Parse {
            list,
            inputs,
            json,
            strict,
            preserve_case,
            icann_only,
        } => {
            let mut flags = ParseFlags::empty();
            flags.set(ParseFlags::REJECT_PUBLIC_SUFFIX, strict);
            flags.set(ParseFlags::PRESERVE_CASE, preserve_case);
            cmd_parse(&list, &inputs, json, flags, !icann_only)
        }
        Commands::Info { list, icann_only } => cmd_info(&list, !icann_only),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_parse(
    list: &Path,
    inputs: &[String],
    json: bool,
    flags: ParseFlags,
    include_private: bool,
) -> Result<(), String> {
    let (table, _) = load_rule_table(list, include_private)?;
    let parser = DomainParser::new(Arc::new(table)).with_flags(flags);

    let inputs: Vec<String> = if inputs.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to read stdin: {}", e))?
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    } else {
        inputs.to_vec()
    };

    let mut invalid = 0usize;
    let mut rejected = 0usize;
    for input in &inputs {
        match parser.parse(input) {
            Ok(parsed) => {
                let line = if json {
                    format_json(input, &parsed)?
                } else {
                    format_text(input, &parsed)
                };
                println!("{}", line);
            }
            Err(e) if e.is_invalid_input() => {
                eprintln!("{}: skipped: {}", input, e);
                invalid += 1;
            }
            Err(e) => {
                eprintln!("{}: {}", input, e);
                rejected += 1;
            }
        }
    }

    if invalid + rejected > 0 {
        return Err(format!(
            "{} of {} inputs failed ({} malformed, {} without a registrable domain)",
            invalid + rejected,
            inputs.len(),
            invalid,
            rejected
        ));
    }

    Ok(())
}

fn cmd_info(list: &Path, include_private: bool) -> Result<(), String> {
    let (table, stats) = load_rule_table(list, include_private)?;

    println!("List: {}", list.display());
    println!("  Lines:       {}", stats.lines);
    println!(
        "  Rules:       {} -> {} (dedupe removed {})",
        stats.rules_before, stats.rules_after, stats.rules_deduped
    );
    println!("  TLDs:        {}", table.labels().count());
    println!("  Nodes:       {}", stats.nodes);
    println!("  Depth:       {}", stats.depth);

    Ok(())
}
