use std::path::Path;

use edurec::Config;
use tracing::instrument;

use super::terminal::Colorize;

/// Write the default configuration to `path`, refusing to replace an existing
/// file.
#[instrument]
pub fn run(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!(
            "Configuration already exists at {} (remove it first to start over)",
            path.display()
        );
    }

    Config::default()
        .save(path)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", path.display()))?;

    println!("{}", format!("Created {}", path.display()).success());
    println!();
    println!("Settings:");
    println!("  sample_data = true          {}", "# start with the demonstration records".dim());
    println!("  pause_after_action = true   {}", "# wait for Enter after each menu action".dim());
    println!("  digits = 4                  {}", "# padding of STU0001-style references".dim());

    Ok(())
}
