use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use rhuff::{compress_file, decompress_file, logger, output_path, Config};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    // Command to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path of the input file
    #[arg(short, long)]
    input: PathBuf,

    /// Path of the output file, derived from the configured directories when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file overriding the output directories
    #[arg(short, long, env = "RHUFF_CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    Compress,
    Decompress,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose)?;

    let config = match &args.config {
        Some(path) => Config::new(path)?,
        None => Config::default(),
    };

    let command = args.command.unwrap_or(Commands::Compress);
    let target_dir = match command {
        Commands::Compress => &config.compressed_dir,
        Commands::Decompress => &config.decompressed_dir,
    };
    let path_output = match args.output {
        Some(path) => path,
        None => output_path(&args.input, target_dir, config.extension.as_deref())?,
    };

    let stats = match command {
        Commands::Compress => compress_file(&args.input, &path_output)
            .with_context(|| format!("Error compressing {}", args.input.display()))?,
        Commands::Decompress => decompress_file(&args.input, &path_output)
            .with_context(|| format!("Error decompressing {}", args.input.display()))?,
    };

    println!(
        "{} -> {} ({} bytes -> {} bytes)",
        args.input.display(),
        path_output.display(),
        stats.input_len,
        stats.output_len
    );
    Ok(())
}
