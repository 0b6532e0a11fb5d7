use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use lzss::{
    compress_file, compress_files, container_path, decompress_file, self_test, CodecConfig,
    CodecStats, Error,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lzss")]
#[command(about = "Compress and decompress files with a 4 KiB-window LZSS coder")]
#[command(version)]
#[command(group(
    ArgGroup::new("mode").required(true).args(["compress", "decompress", "self_test"])
))]
struct Args {
    /// Compress each INPUT into INPUT.lzss
    #[arg(short = 'c', long, value_name = "INPUT", num_args = 1..)]
    compress: Vec<PathBuf>,

    /// Decompress the container INPUT into OUTPUT
    #[arg(short = 'd', long, value_names = ["INPUT", "OUTPUT"], num_args = 2)]
    decompress: Vec<PathBuf>,

    /// Check packing and round-trip a file (or a built-in sample) in memory
    #[arg(long, value_name = "INPUT", num_args = 0..=1)]
    self_test: Option<Option<PathBuf>>,

    /// Container path when compressing a single input
    #[arg(short, long, requires = "compress")]
    output: Option<PathBuf>,

    /// Number of threads for multiple inputs (0 = auto, 1 = sequential)
    #[arg(short = 't', long, default_value = "0")]
    threads: usize,

    /// Decode each container in memory before writing it
    #[arg(long)]
    verify: bool,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,
}

/// Exit codes
const EXIT_OK: u8 = 0;
const EXIT_MISMATCH: u8 = 1;
const EXIT_ERROR: u8 = 2;

/// Sample used by --self-test when no file is given
const SELF_TEST_SAMPLE: &[u8] = b"ababababab \
    It was the best of times, it was the worst of times, it was the age of wisdom, \
    it was the age of foolishness, it was the epoch of belief, it was the epoch of incredulity.";

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage problems print the usage and leave everything untouched
            let _ = e.print();
            return ExitCode::from(EXIT_OK);
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("LZSS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "info" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(args: &Args) -> Result<u8, Error> {
    let config = CodecConfig { verify: args.verify, num_threads: args.threads, ..Default::default() };

    if let Some(sample) = &args.self_test {
        return run_self_test(sample.as_ref(), args.verbose);
    }

    if let [input, output] = args.decompress.as_slice() {
        let start = Instant::now();
        let stats = decompress_file(input, output, &config)?;
        if args.verbose {
            print_stats("Decompression complete:", &stats, start);
        }
        return Ok(EXIT_OK);
    }

    match (args.compress.as_slice(), &args.output) {
        ([input], output) => {
            let output = output.clone().unwrap_or_else(|| container_path(input, &config.suffix));
            let start = Instant::now();
            let stats = compress_file(input, &output, &config)?;
            if args.verbose {
                print_stats("Compression complete:", &stats, start);
            }
            Ok(EXIT_OK)
        }
        (_, Some(_)) => {
            let _ = Args::command()
                .error(ErrorKind::ArgumentConflict, "--output takes a single compress input")
                .print();
            Ok(EXIT_OK)
        }
        (inputs, None) => run_batch(inputs, &config, args.verbose),
    }
}

fn run_batch(inputs: &[PathBuf], config: &CodecConfig, verbose: bool) -> Result<u8, Error> {
    let start = Instant::now();
    let results = compress_files(inputs, config);

    let mut total = CodecStats::default();
    let mut failed = 0;
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(stats) => {
                total.input_bytes += stats.input_bytes;
                total.output_bytes += stats.output_bytes;
                total.literals += stats.literals;
                total.references += stats.references;
                total.header_bytes += stats.header_bytes;
            }
            Err(e) => {
                eprintln!("Error: {}: {}", input.display(), e);
                failed += 1;
            }
        }
    }

    if verbose {
        eprintln!("Files:              {} ({} failed)", inputs.len(), failed);
        print_stats("Compression complete:", &total, start);
    }

    Ok(if failed == 0 { EXIT_OK } else { EXIT_ERROR })
}

fn run_self_test(sample: Option<&PathBuf>, verbose: bool) -> Result<u8, Error> {
    let data = match sample {
        Some(path) => std::fs::read(path).map_err(Error::InputRead)?,
        None => SELF_TEST_SAMPLE.to_vec(),
    };

    let start = Instant::now();
    match self_test(&data) {
        Ok(stats) => {
            eprintln!("Self-test: ok");
            if verbose {
                print_stats("Round trip complete:", &stats, start);
            }
            Ok(EXIT_OK)
        }
        Err(e @ (Error::RoundTripMismatch { .. } | Error::Internal(_))) => {
            eprintln!("Self-test: FAILED ({})", e);
            Ok(EXIT_MISMATCH)
        }
        Err(e) => Err(e),
    }
}

fn print_stats(title: &str, stats: &CodecStats, start: Instant) {
    let elapsed = start.elapsed();
    eprintln!("{}", title);
    eprintln!("  Input bytes:      {}", stats.input_bytes);
    eprintln!("  Output bytes:     {}", stats.output_bytes);
    eprintln!("  Ratio:            {:.3}", stats.ratio());
    eprintln!("  Literals:         {}", stats.literals);
    eprintln!("  References:       {}", stats.references);
    eprintln!("  Header bytes:     {}", stats.header_bytes);
    eprintln!("  Time:             {:.2?}", elapsed);
    eprintln!(
        "  Throughput:       {:.1} MB/s",
        stats.input_bytes as f64 / elapsed.as_secs_f64() / 1_000_000.0
    );
}
