use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::info;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use boolcanon::bdd::Robdd;
use boolcanon::bdd_io::BDDGraph;
use boolcanon::builder::DecisionTree;
use boolcanon::config::{Config, DEFAULT_MAX_VARIABLES};
use boolcanon::minimize::Minimizer;
use boolcanon::observer::LogObserver;
use boolcanon::pla_io::write_solution;
use boolcanon::TruthTable;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "FILE")]
    /// The input truth table (or stdin if not provided or '-')
    input: Option<PathBuf>,

    #[clap(short, long, value_parser, value_name = "FILE")]
    /// The file to write the minimized truth table to (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(short, long, value_parser, value_name = "FILE")]
    /// Also write the reduced BDD in dot (GraphViz) format
    dot: Option<PathBuf>,

    #[clap(long, requires = "dot")]
    /// Write the unreduced decision tree instead of the reduced BDD
    tree: bool,

    #[clap(long, requires = "dot")]
    /// Skip minimization and only write the dot output
    no_minimize: bool,

    #[clap(short, long)]
    /// Print the number of terms, literals and BDD nodes to stderr
    summary: bool,

    #[clap(long, value_name = "N", env = "BOOLCANON_MAX_VARS", default_value_t = DEFAULT_MAX_VARIABLES)]
    /// Reject truth tables with more than N variables
    max_vars: usize,

    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    verbose: u8,

    #[clap(short, long, conflicts_with = "verbose")]
    /// Disable logging
    quiet: bool,
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    // a logger can only be installed once; failing to do so is not fatal
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn read_table(input: Option<&Path>) -> anyhow::Result<TruthTable> {
    let table = match input {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            TruthTable::parse(&mut BufReader::new(file))
                .with_context(|| format!("cannot read {}", path.display()))?
        }
        _ => {
            TruthTable::parse(&mut io::stdin().lock()).context("cannot read stdin")?
        }
    };

    Ok(table)
}

// renders the diagram to memory so that it can be built alongside the minimizer
fn render_diagram(table: &TruthTable, config: Config, tree: bool) -> anyhow::Result<(Vec<u8>, usize)> {
    let mut buffer = Vec::new();

    let node_count = if tree {
        let tree = DecisionTree::from_table(table, config)?;
        BDDGraph::from_tree(&tree, &table.vars).render_dot(&mut buffer)?;
        tree.nodes().len()
    } else {
        let robdd = Robdd::from_table(table, config)?;
        BDDGraph::from_robdd(&robdd).render_dot(&mut buffer)?;
        robdd.node_count()
    };

    Ok((buffer, node_count))
}

fn create_writer(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    Ok(writer)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_from(argfile::expand_args_from(
        wild::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?);

    init_logging(&args);

    let table = read_table(args.input.as_deref())?;
    let config = Config::with_max_variables(args.max_vars);

    info!(
        "{} variables, {} care and {} don't-care patterns",
        table.num_vars(),
        table.care.len(),
        table.dont_care.len()
    );

    // the two pipelines only share the table
    let (solution, diagram) = rayon::join(
        || {
            (!args.no_minimize)
                .then(|| Minimizer::with_observer(config, LogObserver).minimize(&table))
        },
        || {
            args.dot
                .as_ref()
                .map(|_| render_diagram(&table, config, args.tree))
        },
    );

    if let Some(solution) = solution {
        let solution = solution.context("minimization failed")?;

        let mut writer = create_writer(args.output.as_deref())?;
        write_solution(&mut writer, &table, &solution)?;
        writer.flush()?;

        if args.summary {
            eprintln!("Total number of terms: {}", solution.len());
            eprintln!("Total number of literals: {}", solution.literal_count());
        }
    }

    if let (Some(path), Some(diagram)) = (args.dot.as_deref(), diagram) {
        let (buffer, node_count) = diagram.context("bdd construction failed")?;

        let mut writer = create_writer(Some(path))?;
        writer.write_all(&buffer)?;
        writer.flush()?;

        if args.summary {
            eprintln!("Total number of BDD nodes: {node_count}");
        }
    }

    Ok(())
}
