use std::io;
use std::path::PathBuf;
use std::process;

use fastagen::input::{self, Prompter};
use fastagen::logger;
use fastagen::record;

use log::{debug, error};
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "fastagen", about = "Generate a random DNA sequence with an embedded name and save it as FASTA")]
struct Opt {
    /// Sequence length; asked for interactively when omitted
    #[structopt(short, long, allow_hyphen_values = true)]
    length: Option<i64>,

    /// Round a length that is not divisible by 3 down to the nearest multiple
    #[structopt(short, long)]
    adjust_length: bool,

    /// Sequence ID, also used as the output file name
    #[structopt(short, long)]
    id: Option<String>,

    /// Sequence description (letters and spaces only)
    #[structopt(short, long)]
    description: Option<String>,

    /// Name inserted into the sequence at a random position
    #[structopt(short, long)]
    marker: Option<String>,

    /// Directory the record is written to
    #[structopt(short, long, parse(from_os_str), default_value = ".")]
    output_dir: PathBuf,

    /// Sequence characters per line
    #[structopt(short = "w", long, default_value = "60")]
    line_width: usize,

    /// Seed for a reproducible sequence
    #[structopt(short, long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn run(opt: Opt) -> fastagen::Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let length = match opt.length {
        Some(n) => input::check_length(n, opt.adjust_length)?,
        None => prompter.ask_length()?,
    };
    let id = match opt.id {
        Some(ref raw) => input::sanitize_id(raw)?,
        None => prompter.ask_id()?,
    };
    let description = match opt.description {
        Some(ref raw) => input::validate_description(raw)?,
        None => prompter.ask_description()?,
    };
    let marker = match opt.marker {
        Some(ref raw) => raw.trim().to_string(),
        None => prompter.ask_marker()?,
    };

    let mut rng = match opt.seed {
        Some(s) => {
            debug!("Using seed {}", s);
            StdRng::seed_from_u64(s)
        }
        None => StdRng::from_entropy(),
    };

    let synthesis = fastagen::synthesize(length, &marker, &mut rng)?;

    let path = record::record_path(&opt.output_dir, &id);
    record::save_record(&path, &id, &description, synthesis.marked.as_str(), opt.line_width)?;

    println!("\nThe sequence was saved to the file {}", path.display());
    println!("Sequence statistics:");
    println!("{}", synthesis.report);
    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    if let Err(e) = logger::init_logger(logger::level_from_verbosity(opt.verbose)) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(opt) {
        error!("{}", e);
        process::exit(1);
    }
}
