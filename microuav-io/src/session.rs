use crate::args::MapArgs;
use crate::error::LoadError;
use crate::map_source::load_map;
use log::info;
use microuav_core::Simulator;

/// Resolves the config, loads (and resizes) the map, and builds the simulator.
pub fn open_simulator(args: &MapArgs) -> Result<Simulator, LoadError> {
    let config = args.resolve_config()?;
    let map = load_map(&args.map, config.resize_dims()?)?;
    let simulator = Simulator::configure(map, &config)?;
    let position = simulator.current_position();
    info!(
        "fov {}x{}, step {}, border {}, start ({}, {})",
        config.fov_width,
        config.fov_height,
        config.step_size,
        config.border_mode,
        position.x,
        position.y
    );
    Ok(simulator)
}
