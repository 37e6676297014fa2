use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::load_registry;

#[derive(Args)]
pub struct ListArgs {
    /// Path to the JSON type manifest
    #[arg(short, long)]
    manifest: PathBuf,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let registry = load_registry(&self.manifest)?;
        for module in registry.modules() {
            println!("{module}");
            for class in registry.classes(module).unwrap_or_default() {
                println!("  {class}");
            }
        }
        Ok(())
    }
}
