use std::path::PathBuf;

use clap::{Parser, Subcommand};
use resxkit_cli::{
    CollectMode, Config,
    commands::{run_collect_command, run_merge_hints_command, run_sort_command, run_status_command},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to ./resxkit.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fail on `data` elements without a `name` instead of skipping them
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List source strings that are missing from the target or flagged `!EDIT`.
    New {
        /// The neutral-language .resx file
        #[arg(short, long)]
        source: PathBuf,
        /// The translated .resx file
        #[arg(short, long)]
        target: PathBuf,
        /// Print a JSON report instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// List source strings whose translation exists but is empty.
    Empty {
        /// The neutral-language .resx file
        #[arg(short, long)]
        source: PathBuf,
        /// The translated .resx file
        #[arg(short, long)]
        target: PathBuf,
        /// Print a JSON report instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// Overwrite translations with the preferred values of a hints file.
    MergeHints {
        /// The .resx file to update
        #[arg(short, long)]
        input: PathBuf,
        /// The hints file
        #[arg(long)]
        hints: PathBuf,
        /// Where to write the result (defaults to the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Sort entries before writing
        #[arg(long)]
        sort: bool,
    },

    /// Reorder entries canonically: strings by name, then file references.
    Sort {
        /// The .resx file to sort
        #[arg(short, long)]
        input: PathBuf,
        /// Where to write the result (defaults to the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Count new and empty strings for every culture.
    Status {
        /// The neutral-language .resx file (overrides `source` in the config)
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Culture to check, repeatable (overrides `cultures` in the config)
        #[arg(short, long = "culture")]
        cultures: Vec<String>,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let mut config = Config::resolve(args.config.as_deref())?;
    config.strict |= args.strict;
    let options = config.load_options();

    match args.commands {
        Commands::New {
            source,
            target,
            json,
        } => run_collect_command(&source, &target, CollectMode::New, &options, json),
        Commands::Empty {
            source,
            target,
            json,
        } => run_collect_command(&source, &target, CollectMode::Empty, &options, json),
        Commands::MergeHints {
            input,
            hints,
            output,
            sort,
        } => run_merge_hints_command(
            &input,
            &hints,
            output.as_deref(),
            sort || config.sort_on_write,
            &options,
        )
        .map(|_| ()),
        Commands::Sort { input, output } => {
            run_sort_command(&input, output.as_deref(), &options)
        }
        Commands::Status {
            source,
            cultures,
            json,
        } => {
            if source.is_some() {
                config.source = source;
            }
            if !cultures.is_empty() {
                config.cultures = cultures;
            }
            run_status_command(&config, json)
        }
    }
}
