use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{warn, LevelFilter};

use fastimage::{ForwardOnly, ImageMetadata};

/// Detects the format of an image and prints its dimensions and pixel format.
#[derive(Parser, Debug)]
#[command(name = "fastimage analyzer", version)]
struct Args {
    /// Input file name, or `-` for standard input.
    input: PathBuf,

    /// Where the input comes from.
    #[arg(short, long, value_enum, default_value_t = SourceKind::Auto)]
    source: SourceKind,

    /// Log more details; repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum SourceKind {
    /// `-` is standard input, anything else is a file.
    Auto,
    /// A seekable file.
    File,
    /// Standard input, read strictly forward.
    Stdin
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let from_stdin = match args.source {
        SourceKind::Auto => args.input.as_os_str() == "-",
        SourceKind::File => false,
        SourceKind::Stdin => true
    };

    let result = if from_stdin {
        let stdin = io::stdin();
        fastimage::probe(&mut ForwardOnly::new(stdin.lock()))
    } else {
        let f = match File::open(&args.input) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Cannot open {}: {}", args.input.display(), e);
                return ExitCode::FAILURE;
            }
        };
        fastimage::probe(&mut BufReader::new(f))
    };

    let md = result.unwrap_or_else(|e| {
        warn!("cannot read image metadata from {}: {}", args.input.display(), e);
        ImageMetadata::error()
    });
    print_metadata(&md);

    ExitCode::SUCCESS
}

fn print_metadata(md: &ImageMetadata) {
    println!("format: {}", md.format);
    println!("width: {}", md.width);
    println!("height: {}", md.height);
    if md.is_indexed() {
        println!(
            "palette: {} bits, palette element {} bits {} channels",
            md.palette_depth, md.bits_per_pixel, md.channels
        );
    } else {
        println!("bits per pixel: {}, {} channel", md.bits_per_pixel, md.channels);
    }
}
