//! Init command implementation

use anyhow::Result;
use std::path::Path;

use cirqulofit::config::Config;

/// Write the default config to `config_path` (default: ~/.cirqulofit/config.toml)
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    Config::write_default(&path, force)?;
    println!("Created {}", path.display());
    println!("Next: cirqulofit register --name <name> --email <email> --password <password>");
    Ok(())
}
