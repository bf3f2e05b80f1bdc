//! # Orfind CLI - Circular Genome ORF Finder
//!
//! A command-line interface for finding and screening open reading frames in
//! circular genomes.
//!
//! ## Usage
//!
//! ```bash
//! # Every longest ORF on both strands, as JSON
//! orfind -i plasmid.fasta -o orfs.json
//!
//! # Small single-pass membrane protein candidates
//! orfind -i genome.fasta --min-codons 50 --max-codons 80 --peaks 2 -f faa
//!
//! # Alternative starts, all overlapping ORFs, read from stdin
//! cat genome.fasta | orfind -p all --ctg -f sco
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input FASTA file (default: stdin)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-f, --format <FORMAT>`: Output format: json, sco, faa (default: json)
//! - `-p, --policy <POLICY>`: Scan policy: longest or all (default: longest)
//! - `-c, --context <BASES>`: Upstream/downstream context size (default: 100)
//! - `--ctg`: Accept CTG as a start codon
//! - `--min-codons`, `--max-codons`: Codon count bounds
//! - `--window`, `--smoothing`, `--peak-radius`, `--min-height`: Hydropathy settings
//! - `--peaks <N>`: Keep ORFs with exactly N hydrophobic peaks
//! - `--motif <BASES>`: Keep ORFs with the motif in the -15..-5 upstream region
//! - `-q, --quiet`: Only log errors
//! - `-v, --verbose`: Log per-frame scan details

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::{LevelFilter, info};
use orfind_core::OrfAnalyzer;
use orfind_core::config::{CodonRange, HydropathyConfig, OrfindConfig};
use orfind_core::output::write_all_results;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn build_cli() -> Command {
    Command::new("orfind")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Open reading frame finder for circular genomes")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Input FASTA file (default: stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["json", "sco", "faa"])
                .default_value("json"),
        )
        .arg(
            Arg::new("policy")
                .short('p')
                .long("policy")
                .value_name("POLICY")
                .help("Scan policy: longest non-overlapping or all overlapping")
                .value_parser(["longest", "all"])
                .default_value("longest"),
        )
        .arg(
            Arg::new("context")
                .short('c')
                .long("context")
                .value_name("BASES")
                .help("Bases of upstream and downstream context per ORF")
                .value_parser(value_parser!(usize))
                .default_value("100"),
        )
        .arg(
            Arg::new("ctg")
                .long("ctg")
                .action(ArgAction::SetTrue)
                .help("Accept CTG as a start codon"),
        )
        .arg(
            Arg::new("min-codons")
                .long("min-codons")
                .value_name("N")
                .help("Minimum ORF length in codons")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("max-codons")
                .long("max-codons")
                .value_name("N")
                .help("Maximum ORF length in codons")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("window")
                .long("window")
                .value_name("RADIUS")
                .help("Hydropathy smoothing window radius")
                .value_parser(value_parser!(usize))
                .default_value("9"),
        )
        .arg(
            Arg::new("smoothing")
                .long("smoothing")
                .value_name("WEIGHTS")
                .help("Hydropathy window weighting")
                .value_parser(["flat", "triangular"])
                .default_value("triangular"),
        )
        .arg(
            Arg::new("peak-radius")
                .long("peak-radius")
                .value_name("RADIUS")
                .help("Peak finder radius")
                .value_parser(value_parser!(usize))
                .default_value("9"),
        )
        .arg(
            Arg::new("min-height")
                .long("min-height")
                .value_name("SCORE")
                .help("Minimum smoothed hydropathy of a peak")
                .value_parser(value_parser!(f64))
                .default_value("1.5"),
        )
        .arg(
            Arg::new("peaks")
                .long("peaks")
                .value_name("N")
                .help("Keep ORFs with exactly N hydrophobic peaks")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("motif")
                .long("motif")
                .value_name("BASES")
                .help("Keep ORFs with this motif 15 to 5 bases upstream"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet")
                .help("Verbose logging"),
        )
}

fn required_str<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str, Box<dyn Error>> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| format!("missing --{}", id).into())
}

fn required_usize(matches: &ArgMatches, id: &str) -> Result<usize, Box<dyn Error>> {
    matches
        .get_one::<usize>(id)
        .copied()
        .ok_or_else(|| format!("missing --{}", id).into())
}

/// Translate parsed arguments into an analysis configuration.
fn config_from_matches(matches: &ArgMatches) -> Result<OrfindConfig, Box<dyn Error>> {
    let min_codons = matches.get_one::<usize>("min-codons").copied();
    let max_codons = matches.get_one::<usize>("max-codons").copied();
    let codon_range = match (min_codons, max_codons) {
        (None, None) => None,
        (min, max) => Some(CodonRange::new(
            min.unwrap_or(0),
            max.unwrap_or(usize::MAX),
        )),
    };

    let config = OrfindConfig {
        policy: required_str(matches, "policy")?.parse()?,
        alternative_starts: matches.get_flag("ctg"),
        context_size: required_usize(matches, "context")?,
        codon_range,
        hydropathy: HydropathyConfig {
            window_radius: required_usize(matches, "window")?,
            smoothing: required_str(matches, "smoothing")?.parse()?,
            peak_radius: required_usize(matches, "peak-radius")?,
            min_height: matches
                .get_one::<f64>("min-height")
                .copied()
                .ok_or("missing --min-height")?,
        },
        required_peaks: matches.get_one::<usize>("peaks").copied(),
        upstream_motif: matches
            .get_one::<String>("motif")
            .map(|motif| motif.to_ascii_uppercase()),
        output_format: required_str(matches, "format")?.parse()?,
        quiet: matches.get_flag("quiet"),
    };
    config.validate()?;
    Ok(config)
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}

/// Main entry point for the Orfind CLI application.
///
/// Parses command-line arguments, analyzes every input record and writes
/// the results in the requested format.
fn main() -> Result<(), Box<dyn Error>> {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("quiet"), matches.get_flag("verbose"));

    let config = config_from_matches(&matches)?;
    let format = config.output_format;
    let analyzer = OrfAnalyzer::new(config);

    let results = if let Some(input_file) = matches.get_one::<String>("input") {
        analyzer.analyze_fasta_file(input_file)?
    } else {
        analyzer.analyze_fasta(io::stdin().lock())?
    };

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    write_all_results(&mut writer, &results, format)?;
    writer.flush()?;

    info!(
        "Analysis complete! Found {} ORFs in {} sequences.",
        results.iter().map(|r| r.orfs.len()).sum::<usize>(),
        results.len()
    );

    Ok(())
}
