mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use texplot_core::model::Mode;

#[derive(Parser)]
#[command(
    name = "texplot",
    version,
    about = "Turn benchmark result reports into pgfplots bar graph data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Gather the results of a whole run and emit plot data
    Graph(GraphArgs),
    /// Interpret the tables of a single report file (without plotting)
    Parse {
        /// Path to the .tex report file
        input_file: PathBuf,

        /// Series label for the subject variant
        #[arg(short, long, default_value = "subject")]
        label: String,

        /// How to interpret the report tables: baseline or comparative
        #[arg(short, long, value_enum, default_value = "baseline")]
        mode: ModeArg,

        /// Output format: table (default) or json
        #[arg(short, long, value_enum, default_value = "table")]
        output: ParseOutput,
    },
}

#[derive(Args)]
struct GraphArgs {
    /// The output folder in which to search for experiment results
    #[arg(long)]
    dir: PathBuf,

    /// Run format for folder and file names: "{model}-{format}"
    #[arg(long)]
    format: String,

    /// The algorithm types to search results for
    #[arg(long, value_enum, num_args = 1.., required = true)]
    types: Vec<Algorithm>,

    /// Model names (from the model order file) to gather results for
    #[arg(long, num_args = 1.., required_unless_present = "all_models")]
    models: Vec<String>,

    /// Gather results for every model in the model order file
    #[arg(long, conflicts_with = "models")]
    all_models: bool,

    /// Algorithm type whose runs (and all later ones) carry a control
    #[arg(long, value_enum, default_value = "z3pdr")]
    control: Algorithm,

    /// File listing the model catalog in plotting order, one name per line
    #[arg(long, value_name = "FILE", default_value = "model_order.txt")]
    model_order: PathBuf,

    /// Output format: coords (default) or figure
    #[arg(short, long, value_enum, default_value = "coords")]
    output: GraphOutput,

    /// Print intermediate pipeline stages to stderr
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Pebbling,
    Z3pdr,
    Bmc,
}

impl Algorithm {
    fn label(self) -> &'static str {
        match self {
            Algorithm::Pebbling => "pebbling",
            Algorithm::Z3pdr => "z3pdr",
            Algorithm::Bmc => "bmc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GraphOutput {
    Coords,
    Figure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Baseline,
    Comparative,
}

impl ModeArg {
    fn to_mode(self) -> Mode {
        match self {
            ModeArg::Baseline => Mode::Baseline,
            ModeArg::Comparative => Mode::Comparative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ParseOutput {
    Table,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Graph(args) => commands::graph::run(args),
        Commands::Parse {
            input_file,
            label,
            mode,
            output,
        } => commands::parse::run(input_file, &label, mode.to_mode(), output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
