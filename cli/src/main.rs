use std::error::Error as _;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use csr_graph_cli::{logging, run, Cli, CliError, Settings};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("csr-graph: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<(), CliError> {
    let settings = Settings::load(cli.config.as_deref())?;
    logging::init_logging(cli.log_filter(&settings))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(cli, &settings, &mut out)?;
    out.flush()?;
    Ok(())
}
