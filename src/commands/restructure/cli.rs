use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "subsort")]
#[command(version)]
#[command(
    about = "Unzip a batch of student submissions into one directory per student",
    long_about = None
)]
pub struct Cli {
    /// Directory containing the submission archive (takes precedence over --dir)
    pub work_dir: Option<PathBuf>,

    /// Specify a directory to work in (default: current dir)
    #[arg(short = 'd', long = "dir", value_name = "DIRECTORY")]
    pub dir: Option<PathBuf>,

    /// Use this archive instead of searching the working directory
    #[arg(short = 'a', long = "archive", value_name = "ARCHIVE")]
    pub archive: Option<PathBuf>,

    /// Specify a directory to output unzipped files to (default: './submissions')
    #[arg(short = 'o', long = "output-dir", value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Create directories named after students csXXXXXX identifier instead of their name
    #[arg(short = 'c', long = "cs-identifier")]
    pub cs_identifier: bool,

    /// Delete IDE and VCS leftovers (.vscode, .idea, .gitignore) after extraction
    #[arg(short = 'r', long = "remove-unwanted")]
    pub remove_unwanted: bool,

    /// JSON config file with mode, remove_unwanted and target_root
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON on stdout
    #[arg(long = "json")]
    pub json: bool,

    /// Log every extracted entry
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Working directory used for archive discovery.
    pub fn working_dir(&self) -> PathBuf {
        self.work_dir
            .clone()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
