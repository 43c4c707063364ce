//! Badguy engine headless runner.
//!
//! Loads a JSON level and an optional INI config, runs the simulation for a
//! fixed number of ticks and logs what became of every badguy.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level assets/levels/demo.json --ticks 600
//! RUST_LOG=debug cargo run --features lua -- --level demo.json --scripts dead.lua
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use badguy_engine::game::Simulation;
use badguy_engine::resources::gameconfig::GameConfig;
use badguy_engine::resources::level::LevelData;

/// Headless badguy simulation.
#[derive(Parser)]
#[command(version, about = "Runs a badguy level headless and reports the outcome.")]
struct Cli {
    /// JSON level to load.
    #[arg(long, value_name = "PATH")]
    level: PathBuf,

    /// INI file with badguy tuning and viewport settings.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Seconds per tick.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Lua file defining the dead-script functions.
    #[cfg(feature = "lua")]
    #[arg(long, value_name = "PATH")]
    scripts: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("Using default config: {}", e);
    }

    let level = match LevelData::from_file(&cli.level) {
        Ok(level) => level,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut sim = Simulation::new(config);
    if let Err(e) = sim.load_level(&level) {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    #[cfg(feature = "lua")]
    if let Err(e) = install_lua_host(&mut sim, cli.scripts.as_deref()) {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    info!("Running {} ticks of {:.4}s", cli.ticks, cli.dt);
    sim.run(cli.ticks, cli.dt);

    let mut summaries = sim.badguys();
    summaries.sort_by_key(|s| s.entity);
    info!("{} badguys left", summaries.len());
    for s in &summaries {
        info!(
            "  {:?} {} '{}' {:?} at ({:.1}, {:.1})",
            s.entity, s.kind, s.sprite, s.state, s.position.x, s.position.y
        );
    }
    ExitCode::SUCCESS
}

#[cfg(feature = "lua")]
fn install_lua_host(sim: &mut Simulation, scripts: Option<&std::path::Path>) -> mlua::Result<()> {
    use badguy_engine::resources::lua_host::LuaScriptHost;

    let host = LuaScriptHost::new()?;
    if let Some(path) = scripts {
        host.load_file(&path.to_string_lossy())?;
    }
    sim.world_mut().insert_non_send_resource(host);
    Ok(())
}
