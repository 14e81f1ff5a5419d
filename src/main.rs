use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use taskdeck::ops::view::StatusFilter;

#[derive(Parser)]
#[command(
    name = "td",
    about = concat!("[>] taskdeck v", env!("CARGO_PKG_VERSION"), " - manage your tasks in the terminal"),
    version
)]
struct Cli {
    /// Start with this status filter active
    #[arg(long, value_enum, default_value_t = FilterArg::All)]
    filter: FilterArg,

    /// Config file path (default: ./taskdeck.toml when present)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Pending,
    Completed,
}

impl From<FilterArg> for StatusFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => StatusFilter::All,
            FilterArg::Pending => StatusFilter::Pending,
            FilterArg::Completed => StatusFilter::Completed,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = taskdeck::tui::run(cli.filter.into(), cli.config.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
