use crate::error::LoadError;
use microuav_core::SimulatorConfig;
use std::fs;
use std::path::Path;

pub fn load_config(path: &Path) -> Result<SimulatorConfig, LoadError> {
    let json = fs::read_to_string(path)?;
    Ok(SimulatorConfig::from_json_str(&json)?)
}

pub fn save_config(config: &SimulatorConfig, path: &Path) -> Result<(), LoadError> {
    fs::write(path, config.to_json_string()?)?;
    Ok(())
}
