use ckconv::config::Config;
use ckconv::conv;
use ckconv::display::{self, Converted, DisplayOptions, Notation};
use ckconv::input::{self, Triple};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "ckconv")]
#[command(about = "Creation Kit Unit Converter", long_about = None)]
#[command(disable_version_flag = true)]
#[command(after_help = "INPUT:\n  \
    Conversions can be written as '<UNIT> <VALUE> <OUTPUT_UNIT>', '<VALUE> <UNIT> <OUTPUT_UNIT>'\n  \
    or '<VALUE><UNIT> <OUTPUT_UNIT>'. Piped input is appended to the arguments.\n  \
    Negative joined values need '--' before them: ckconv -- -1.5ft m\n  \
    Use '-qn' (quiet, no color) when calling from scripts.")]
struct Cli {
    /// Conversions to perform
    #[arg(value_name = "UNIT VALUE OUTPUT_UNIT", allow_negative_numbers = true)]
    inputs: Vec<String>,

    /// Show the current version number and exit
    #[arg(short = 'v', long)]
    version: bool,

    /// Use full unit names instead of symbols when possible
    #[arg(short = 'f', long = "full-name", visible_alias = "full-names")]
    full_name: bool,

    /// Number of digits to print after the decimal point
    #[arg(short, long, value_name = "DIGITS")]
    precision: Option<usize>,

    /// Align the '=' of each output line to this column
    #[arg(short, long = "align-to", visible_alias = "align", value_name = "COLUMN")]
    align_to: Option<usize>,

    /// List recognized units; optionally only those of a system or of a unit's system
    #[arg(
        short = 'u',
        long = "units",
        visible_alias = "list-units",
        value_name = "NAME",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    units: Option<String>,

    /// Print the location of the executable and exit
    #[arg(short = 'w', long = "where")]
    where_: bool,

    /// Print only output values
    #[arg(short, long)]
    quiet: bool,

    /// Don't use color escape sequences
    #[arg(short = 'n', long = "no-color")]
    no_color: bool,

    /// Print numbers in fixed-point notation
    #[arg(short = 'F', long, visible_alias = "standard", conflicts_with_all = ["scientific", "hex"])]
    fixed: bool,

    /// Print numbers in scientific notation
    #[arg(short = 'S', long, visible_alias = "sci", conflicts_with_all = ["fixed", "hex"])]
    scientific: bool,

    /// Print numbers in hexadecimal floating point
    #[arg(short = 'H', long, visible_alias = "hexadecimal", conflicts_with_all = ["fixed", "scientific"])]
    hex: bool,

    /// Print each conversion as a JSON object
    #[arg(short, long)]
    json: bool,

    /// Config file (default: $CKCONV_CONFIG, then ckconv.toml beside the executable)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    /// Command-line flags layered over the config file
    fn display_options(&self, config: &Config) -> DisplayOptions {
        let mut options = config.display_options();

        options.quiet |= self.quiet;
        options.full_names |= self.full_name;
        if self.precision.is_some() {
            options.number.precision = self.precision;
        }
        if self.align_to.is_some() {
            options.align_to = self.align_to;
        }
        if self.fixed {
            options.number.notation = Notation::Fixed;
        } else if self.scientific {
            options.number.notation = Notation::Scientific;
        } else if self.hex {
            options.number.notation = Notation::Hex;
        }
        if self.no_color || !std::io::stdout().is_terminal() {
            options.palette.enabled = false;
        }

        options
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::discover(cli.config.as_deref())?;
    let options = cli.display_options(&config);

    if cli.version {
        if !options.quiet {
            print!("ckconv v");
        }
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Some(query) = &cli.units {
        let system = display::system_for_query(query);
        debug!(query = %query, system = %system, "listing units");
        print!("{}", display::render_units(system, &options.palette));
        return Ok(());
    }

    if cli.where_ {
        println!("{}", std::env::current_exe()?.display());
        return Ok(());
    }

    let mut tokens = cli.inputs.clone();
    let piped = input::read_piped_tokens()?;
    debug!(arguments = tokens.len(), piped = piped.len(), "collected input tokens");
    tokens.extend(piped);

    let triples = input::normalize_tokens(&tokens)?;
    if triples.is_empty() {
        return Err("No valid conversions specified!".into());
    }
    debug!(count = triples.len(), "normalized conversions");

    for triple in &triples {
        match convert_triple(triple) {
            Ok(converted) if cli.json => {
                println!("{}", serde_json::to_string(&converted.record(&options))?)
            }
            Ok(converted) => println!("{}", converted.render(&options)),
            Err(e) => {
                debug!(conversion = %triple, error = %e, "conversion failed");
                eprintln!("{} {}", options.palette.error_tag(), e);
            }
        }
    }

    Ok(())
}

fn convert_triple(triple: &Triple) -> Result<Converted, conv::ConvError> {
    let (input_unit, input_value, output_unit) = input::to_convertible(triple)?;
    let output_value = conv::convert(&input_unit, input_value, &output_unit)?;
    Ok(Converted::new(input_unit, input_value, output_unit, output_value))
}
