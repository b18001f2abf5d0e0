//! # svg2symbol CLI
//!
//! Usage:
//!   svg2symbol icon.svg                 # print the converted document
//!   svg2symbol icon.svg out.svg         # write it, print "Done: out.svg"
//!   cat icon.svg | svg2symbol -
//!   svg2symbol icon.svg --options symbol.json

use std::path::PathBuf;
use std::process;

use clap::Parser;
use svg2symbol::{ConvertError, ConvertOptions};

#[derive(Debug, Parser)]
#[command(
    name = "svg2symbol",
    version,
    about = "Convert an exported SVG icon to the 960-unit symbol format"
)]
struct Cli {
    /// Source SVG file, or `-` to read stdin
    input: PathBuf,

    /// Output file. The document goes to stdout when omitted.
    output: Option<PathBuf>,

    /// JSON file overriding gridSize, yOffset, defaultSourceWidth, size or fill
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ConvertError> {
    let options = match &cli.options {
        Some(path) => ConvertOptions::load(path)?,
        None => ConvertOptions::default(),
    };

    let document = svg2symbol::convert_file(&cli.input, cli.output.as_deref(), &options)?;

    match &cli.output {
        Some(path) => println!("Done: {}", path.display()),
        None => print!("{}", document),
    }
    Ok(())
}
