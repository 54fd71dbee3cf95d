//! Command-line scheduler: tournament definition JSON in, scheduled tournament JSON out.
//! Run with: cargo run --bin schedule -- tournament.json
//! Input path comes from the first argument, else TOURNAMENT_FILE, else stdin.
//! Set PRETTY=0 for compact output; RUST_LOG controls logging (default info).

use std::io::{self, Read, Write};
use tournament_scheduler::{schedule_tournament, Tournament};

fn default_pretty() -> bool {
    true
}

fn input_path() -> Option<String> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TOURNAMENT_FILE").ok())
        .filter(|p| !p.trim().is_empty())
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(p) if p != "-" => std::fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let pretty = std::env::var("PRETTY")
        .ok()
        .map(|v| !matches!(v.trim(), "0" | "false" | "no"))
        .unwrap_or_else(default_pretty);
    let path = input_path();
    log::info!("Reading tournament from {}", path.as_deref().unwrap_or("stdin"));

    let raw = read_input(path.as_deref())?;
    let tournament: Tournament = serde_json::from_str(&raw)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let scheduled = schedule_tournament(tournament).map_err(|e| {
        log::error!("Scheduling failed: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let out = if pretty {
        serde_json::to_string_pretty(&scheduled)
    } else {
        serde_json::to_string(&scheduled)
    }
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
