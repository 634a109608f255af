//! OxiBWT CLI - Burrows-Wheeler compression front end
//!
//! A Pure Rust driver for the BWT and MTF transforms. Reads a whole
//! byte stream from a file or stdin, applies the selected transform,
//! and writes the result to a file or stdout. The transforms themselves
//! never touch the filesystem; all wiring lives here.

use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "oxibwt")]
#[command(
    author,
    version,
    about = "Burrows-Wheeler compression front end - Pure Rust BWT + MTF"
)]
#[command(long_about = "
OxiBWT applies the reversible transforms that precede entropy coding in
block-sorting compressors: the Burrows-Wheeler Transform and Move-to-Front
coding. The compress output is the MTF byte stream, ready for a downstream
entropy coder.

Input is read from a file when given, otherwise from stdin; output goes to
-o/--output when given, otherwise to stdout.

Examples:
  oxibwt compress input.txt -o input.bwm
  oxibwt expand input.bwm -o input.txt
  oxibwt bwt input.txt | oxibwt mtf -o input.bwm
  cat input.bwm | oxibwt unmtf | oxibwt unbwt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the full forward pipeline: BWT, then MTF
    #[command(alias = "c")]
    Compress {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply the full inverse pipeline: inverse MTF, then inverse BWT
    #[command(alias = "x")]
    Expand {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply the Burrows-Wheeler Transform alone (serialized form)
    Bwt {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Invert a serialized Burrows-Wheeler Transform
    Unbwt {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply Move-to-Front coding alone
    Mtf {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Invert Move-to-Front coding
    Unmtf {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress { input, output } => {
            run(input.as_deref(), output.as_deref(), |data| {
                Ok(oxibwt::compress(data))
            })
        }
        Commands::Expand { input, output } => {
            run(input.as_deref(), output.as_deref(), oxibwt::decompress)
        }
        Commands::Bwt { input, output } => run(input.as_deref(), output.as_deref(), |data| {
            Ok(oxibwt::bwt::encode(data))
        }),
        Commands::Unbwt { input, output } => {
            run(input.as_deref(), output.as_deref(), oxibwt::bwt::decode)
        }
        Commands::Mtf { input, output } => run(input.as_deref(), output.as_deref(), |data| {
            Ok(oxibwt::mtf::transform(data))
        }),
        Commands::Unmtf { input, output } => run(input.as_deref(), output.as_deref(), |data| {
            Ok(oxibwt::mtf::inverse_transform(data))
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Read the whole input, apply one transform, write the whole output.
/// The suffix sort needs random access to the full block, so there is
/// no streaming mode.
fn run<F>(
    input: Option<&Path>,
    output: Option<&Path>,
    op: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&[u8]) -> oxibwt::Result<Vec<u8>>,
{
    let data = read_input(input)?;
    let transformed = op(&data)?;
    write_output(output, &transformed)?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(p) => std::fs::read(p),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> std::io::Result<()> {
    match path {
        Some(p) => std::fs::write(p, data),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()
        }
    }
}
