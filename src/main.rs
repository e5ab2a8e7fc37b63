use std::path::PathBuf;

use clap::Parser;

use srcrun::discovery::{self, ExtensionFilter};
use srcrun::runner;

#[derive(Parser)]
#[command(
    name = "srcrun",
    about = "Run a command on all C/C++ source files in the given directories"
)]
struct Cli {
    /// Directories to search in
    #[arg(long = "dirs", required = true, num_args = 1.., value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// Show which directories are searched and which are skipped
    #[arg(short, long)]
    verbose: bool,

    /// Command to which to pass found files, after `--`
    #[arg(last = true, required = true, value_name = "COMMAND")]
    command: Vec<String>,
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let filter = ExtensionFilter::c_family();

    if cli.verbose {
        for dir in &cli.dirs {
            if dir.is_dir() {
                eprintln!("[srcrun] searching {}", dir.display());
            } else {
                // A missing root contributes no files but does not fail the run.
                eprintln!("[srcrun] skipping {} (not a directory)", dir.display());
            }
        }
    }

    let files: Vec<PathBuf> = discovery::discover(&cli.dirs, &filter).collect();

    if files.is_empty() {
        println!("No files found");
        return Ok(1);
    }

    let exit_code = runner::invoke(&cli.command, &files)?;
    println!("Processed {} files", files.len());

    Ok(exit_code)
}

fn main() {
    let cli = Cli::parse();
    let exit_code = run(&cli).unwrap_or_else(|e| {
        eprintln!("[srcrun] error: {e:#}");
        1
    });
    std::process::exit(exit_code);
}
