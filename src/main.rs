use anyhow::Context;
use clap::Parser;
use img_variants::cli::Args;
use img_variants::{asset_dir_for_exe, run, ImageCrateCodec, RunConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let _args = Args::parse();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            img_variants::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let config = RunConfig::production(asset_dir_for_exe(&exe))?;

    run(&config, &ImageCrateCodec)?;

    Ok(())
}
