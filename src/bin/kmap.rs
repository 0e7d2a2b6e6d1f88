//! Karnaugh Map Minimizer - Command Line Interface
//!
//! Builds a 4-variable map from term lists or a PLA file and solves, verifies or
//! prints it.

use clap::{Parser, ValueEnum};
use kmap_logic::pla::{PlaReader, PlaType, PlaWriter};
use kmap_logic::{
    expression_from_selection, parse_term_list, verify, KMap, KmapConfig, Minimizable, Mode,
    PosSeparator, SopExpr,
};
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, ValueEnum)]
enum Command {
    /// Minimize the map and print the expression with its groups (default)
    Solve,
    /// Check an SOP expression against the map
    Verify,
    /// Render a hand-picked group of cells as a single term
    Group,
    /// Print the truth table and the Karnaugh grid
    Table,
    /// Write the map back out as a PLA
    Echo,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Sum of products over the 1s
    Sop,
    /// Product of sums over the 0s
    Pos,
}

impl From<ModeArg> for Mode {
    fn from(val: ModeArg) -> Self {
        match val {
            ModeArg::Sop => Mode::Sop,
            ModeArg::Pos => Mode::Pos,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeparatorArg {
    /// (A + B) · C
    Dot,
    /// (A + B) * C
    Star,
}

impl From<SeparatorArg> for PosSeparator {
    fn from(val: SeparatorArg) -> Self {
        match val {
            SeparatorArg::Dot => PosSeparator::MiddleDot,
            SeparatorArg::Star => PosSeparator::Asterisk,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputType {
    /// ON-set only
    F,
    /// ON-set and don't-care set
    Fd,
    /// ON-set and OFF-set
    Fr,
    /// ON-set, don't-care set, and OFF-set
    Fdr,
}

impl From<OutputType> for PlaType {
    fn from(val: OutputType) -> Self {
        match val {
            OutputType::F => PlaType::F,
            OutputType::Fd => PlaType::FD,
            OutputType::Fr => PlaType::FR,
            OutputType::Fdr => PlaType::FDR,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kmap")]
#[command(about = "Four-variable Karnaugh map minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Input PLA file (instead of term lists)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Operation to execute
    #[arg(short = 'D', long = "do", value_enum, default_value = "solve")]
    command: Command,

    /// Comma-separated cells where the function is 1
    #[arg(short = 'm', long, conflicts_with_all = ["maxterms", "input"])]
    minterms: Option<String>,

    /// Comma-separated cells where the function is 0; every other cell is 1
    #[arg(short = 'M', long, conflicts_with = "input")]
    maxterms: Option<String>,

    /// Comma-separated don't-care cells
    #[arg(short = 'd', long = "dont-cares", conflicts_with = "input")]
    dont_cares: Option<String>,

    /// Expression form
    #[arg(long, value_enum, default_value = "sop")]
    mode: ModeArg,

    /// SOP expression to check (for `--do verify`)
    #[arg(short = 'e', long = "expr")]
    expression: Option<String>,

    /// Comma-separated cells forming a group (for `--do group`)
    #[arg(short = 'c', long)]
    cells: Option<String>,

    /// Separator between POS sum terms
    #[arg(long, value_enum, default_value = "dot")]
    separator: SeparatorArg,

    /// PLA output format (for `--do echo`)
    #[arg(short = 'o', long = "output", value_enum, default_value = "fd")]
    output_format: OutputType,

    /// Provide execution summary
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Output file for `--do echo` (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, err);
    process::exit(1);
}

fn parse_terms(list: Option<&str>, what: &str) -> Vec<u8> {
    match list.map(parse_term_list).transpose() {
        Ok(terms) => terms.unwrap_or_default(),
        Err(e) => fail(&format!("Invalid {}", what), e),
    }
}

fn load_map(args: &Args) -> KMap {
    if let Some(ref path) = args.input {
        return match KMap::from_pla_file(path) {
            Ok(map) => map,
            Err(e) => fail(&format!("Error reading PLA file '{}'", path.display()), e),
        };
    }

    let dont_cares = parse_terms(args.dont_cares.as_deref(), "don't-care list");
    let map = match args.maxterms.as_deref() {
        Some(list) => KMap::from_maxterms(&parse_terms(Some(list), "maxterm list"), &dont_cares),
        None => KMap::from_minterms(
            &parse_terms(args.minterms.as_deref(), "minterm list"),
            &dont_cares,
        ),
    };
    map.unwrap_or_else(|e| fail("Invalid map", e))
}

fn main() {
    let args = Args::parse();

    let level = if args.summary {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };
    if let Err(e) = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not initialise logging: {}", e);
    }

    let map = load_map(&args);
    let mode = Mode::from(args.mode);
    let config = KmapConfig {
        pos_separator: args.separator.into(),
        ..KmapConfig::default()
    };

    if args.summary {
        eprintln!(
            "Input map: {} ones, {} zeros, {} don't-cares",
            map.minterms().len(),
            map.maxterms().len(),
            map.dont_cares().len()
        );
        eprintln!();
    }

    match args.command {
        Command::Solve => {
            let solution = map.minimize_with_config(mode, &config);
            print!("{}", solution);
        }
        Command::Verify => {
            let Some(ref text) = args.expression else {
                fail("Missing argument", "--do verify needs --expr");
            };
            let expr = SopExpr::parse(text).unwrap_or_else(|e| fail("Invalid expression", e));
            let report = verify(&expr, &map);

            println!("Expression: {}", expr);
            println!("Minterms: {:?}", report.minterms);
            println!("Maxterms: {:?}", report.maxterms);
            if report.matches() {
                println!("Matches the map");
            } else {
                println!("Missing ones: {:?}", report.missing_ones);
                println!("Extra ones: {:?}", report.extra_ones);
                process::exit(1);
            }
        }
        Command::Group => {
            let Some(ref list) = args.cells else {
                fail("Missing argument", "--do group needs --cells");
            };
            let cells = parse_terms(Some(list), "cell list");
            match expression_from_selection(&map, &cells, mode) {
                Ok(term) => println!("{}", term),
                Err(e) => fail("Invalid group", e),
            }
        }
        Command::Table => {
            println!("{}", map.truth_table());
            println!("{}", map.grid());
        }
        Command::Echo => {
            let output_type = PlaType::from(args.output_format);
            let result = match args.output_file {
                Some(ref path) => map.to_pla_file(path, output_type),
                None => map.write_pla(&mut io::stdout().lock(), output_type),
            };
            if let Err(e) = result {
                fail("Error writing PLA", e);
            }
            if args.summary {
                if let Some(ref path) = args.output_file {
                    eprintln!("Wrote output to: {}", path.display());
                }
            }
        }
    }

    if args.summary {
        eprintln!("Done.");
    }
}
