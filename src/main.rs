use clap::Parser;
use proof_gauge::catalog::Catalog;
use proof_gauge::cli::Cli;
use proof_gauge::summary::Summary;
use proof_gauge::{Error, render};

fn run(cli: &Cli) -> Result<(), Error> {
    let system = Catalog::builtin().lookup(&cli.system)?;
    let summary = Summary::new(system, cli.tx_rate)?;
    if cli.json {
        println!("{}", render::json(&summary)?);
    } else {
        print!("{}", render::human(&summary));
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
