// src/bin/cli.rs
use catalog_prep::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    Ok(cli::run()?)
}
