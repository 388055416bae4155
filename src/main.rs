use clap::Parser;
use ghosty::cli::{self, Cli};
use ghosty::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    cli::run(cli)
}
