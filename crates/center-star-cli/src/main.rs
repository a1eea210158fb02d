#![doc = include_str!("../README.md")]

use std::path::PathBuf;

use center_star::{CenterStar, ReportScheme, ScoringScheme};
use clap::Parser;

mod fasta;
mod report;
mod utils;

/// Center-star multiple sequence alignment of protein sequences.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the input FASTA file, or to a directory of `.fasta` files.
    #[arg(short('i'), long)]
    inp_path: PathBuf,

    /// Score for a match when building pairwise alignments.
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    match_score: i32,

    /// Score for a mismatch when building pairwise alignments.
    #[arg(long, default_value = "-1", allow_hyphen_values = true)]
    mismatch_score: i32,

    /// Penalty for a gap when building pairwise alignments.
    #[arg(long, default_value = "-2", allow_hyphen_values = true)]
    gap_penalty: i32,

    /// Score for a match in the reported sum-of-pairs score.
    #[arg(long("match"), default_value = "1", allow_hyphen_values = true)]
    match_: i32,

    /// Score for a substitution in the reported sum-of-pairs score.
    #[arg(long, default_value = "-1", allow_hyphen_values = true)]
    substitution: i32,

    /// Score for a gap in the reported sum-of-pairs score.
    #[arg(long, default_value = "-2", allow_hyphen_values = true)]
    gap: i32,

    /// The format of the rendered alignment.
    #[arg(short('f'), long, default_value = "clustal")]
    format: report::Format,

    /// Path to the output file. The alignment is printed if this is omitted.
    #[arg(short('o'), long)]
    out_path: Option<PathBuf>,

    /// Path to a JSON summary of the alignment.
    #[arg(short('r'), long)]
    report_path: Option<PathBuf>,

    /// Directory for the log files.
    #[arg(long, default_value = "logs")]
    logs_dir: PathBuf,

    /// Also log the steps of the alignment engine.
    #[arg(short('v'), long)]
    verbose: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let max_level = if args.verbose {
        ftlog::LevelFilter::Trace
    } else {
        ftlog::LevelFilter::Info
    };
    // We need the `_guard` in scope to ensure proper logging.
    let log_name = utils::log_name(&args.inp_path);
    let (_guard, log_path) = utils::configure_logger(&args.logs_dir, &log_name, max_level)?;
    println!("Log file: {log_path:?}");

    ftlog::info!("{args:?}");

    let sequences = fasta::read(&args.inp_path)?;
    ftlog::info!("Read {} sequences from {:?}", sequences.len(), args.inp_path);

    let scoring = ScoringScheme::new(args.match_score, args.mismatch_score, args.gap_penalty);
    let report = ReportScheme::new(args.match_, args.substitution, args.gap);

    let msa = CenterStar::new(sequences, scoring, report).map_err(|e| e.to_string())?;
    ftlog::info!(
        "Aligned {} sequences around {} with width {}",
        msa.alignment().len(),
        msa.center_name(),
        msa.alignment().width()
    );
    ftlog::info!("Score: {}, statistics: {:?}", msa.score(), msa.statistics());

    let rendered = args.format.render(&msa);
    if let Some(out_path) = &args.out_path {
        ftlog::info!("Writing {:?} alignment to {out_path:?}", args.format);
        std::fs::write(out_path, rendered).map_err(|e| format!("Failed to write {out_path:?}: {e}"))?;
    } else {
        print!("{rendered}");
    }

    if let Some(report_path) = &args.report_path {
        ftlog::info!("Writing summary to {report_path:?}");
        report::write_summary(&msa.summary(), report_path)?;
    }

    Ok(())
}
