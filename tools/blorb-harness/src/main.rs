//! blorb-harness: headless driver for the arena simulation.
//!
//! Usage:
//!   blorb-harness --frames 3600 --seed 7
//!   blorb-harness --config arena.json --policy orbit

mod game_loop;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use blorb_core::config::ArenaConfig;
use blorb_core::constants::FRAME_RATE;
use blorb_core::enums::EyeballPolicy;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let mut config = match parse_value(&args, "--config") {
        Some(path) => {
            let path = PathBuf::from(path);
            ArenaConfig::load(&path)
                .with_context(|| format!("loading config from {}", path.display()))?
        }
        None => ArenaConfig::default(),
    };
    if let Some(seed) = parse_value(&args, "--seed") {
        config.seed = seed.parse().context("--seed expects an integer")?;
    }
    if let Some(policy) = parse_value(&args, "--policy") {
        config.eyeball_policy = parse_policy(policy)?;
    }
    let frames = match parse_value(&args, "--frames") {
        Some(n) => n.parse().context("--frames expects an integer")?,
        None => FRAME_RATE * 60,
    };

    tracing::info!(seed = config.seed, frames, policy = ?config.eyeball_policy, "starting session");
    let snapshot = game_loop::run_session(config, frames).context("invalid arena config")?;

    let json = serde_json::to_string_pretty(&snapshot)?;
    println!("{json}");
    Ok(())
}

fn print_usage() {
    eprintln!(
        "blorb-harness: run a scripted arena session and print the final snapshot\n\
         \n\
           --frames <N>       Frames to simulate at 60 Hz (default: 3600)\n\
           --seed <N>         RNG seed (overrides the config file)\n\
           --config <path>    JSON arena config; missing fields keep defaults\n\
           --policy <name>    Eyeball movement: launch, chase or orbit\n"
    );
}

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_policy(name: &str) -> Result<EyeballPolicy> {
    Ok(match name.to_ascii_lowercase().as_str() {
        "launch" => EyeballPolicy::Launch,
        "chase" => EyeballPolicy::Chase,
        "orbit" => EyeballPolicy::Orbit,
        other => {
            print_usage();
            bail!("unknown eyeball policy: {other}")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_value_finds_flag() {
        let a = args(&["--seed", "9", "--frames", "10"]);
        assert_eq!(parse_value(&a, "--frames"), Some("10"));
        assert_eq!(parse_value(&a, "--config"), None);
        assert_eq!(parse_value(&args(&["--seed"]), "--seed"), None);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(parse_policy("Orbit").unwrap(), EyeballPolicy::Orbit);
        assert_eq!(parse_policy("chase").unwrap(), EyeballPolicy::Chase);
        assert!(parse_policy("wander").is_err());
    }
}
