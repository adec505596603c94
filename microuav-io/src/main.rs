#![cfg(feature = "loader")]

use clap::Parser;
use env_logger::Env;
use log::error;
use microuav_core::{MAX_UPSCALE, parse_actions};
use microuav_io::{LoadError, MapArgs, open_simulator, record_session};
use std::path::PathBuf;
use std::process::ExitCode;

/// Replays an action script over a map and writes every observation to disk.
#[derive(Parser, Debug)]
#[command(name = "microuav-record", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    map: MapArgs,

    /// Actions as WASD keys or digits (0=up 1=right 2=down 3=left)
    #[arg(long, default_value = "")]
    actions: String,

    /// Output directory for frames and trajectory.json
    #[arg(long, default_value = "frames")]
    out: PathBuf,

    /// Upscale factor for the observation panel
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_UPSCALE)))]
    scale: u32,
}

fn run(cli: &Cli) -> Result<(), LoadError> {
    let actions = parse_actions(&cli.actions)?;
    let mut simulator = open_simulator(&cli.map)?;
    let trajectory = record_session(&mut simulator, &actions, &cli.out, cli.scale)?;
    if let Some(last) = trajectory.steps.last() {
        println!("final position: ({}, {})", last.position.x, last.position.y);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(scale: &str) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(["microuav-record", "--map", "m.png", "--scale", scale])
    }

    #[test]
    fn scale_is_bounded() {
        assert_eq!(parse("64").unwrap().scale, MAX_UPSCALE);
        assert!(parse("0").is_err());
        assert!(parse("40000000").is_err());
    }

    #[test]
    fn scale_defaults_to_four() {
        let cli = Cli::try_parse_from(["microuav-record", "--map", "m.png"]).unwrap();
        assert_eq!(cli.scale, 4);
    }
}
