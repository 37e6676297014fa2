use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rosloader::TypeKind;

use super::load_resolver;

#[derive(Args)]
pub struct ResolveArgs {
    /// Type strings to resolve, e.g. std_msgs/msg/String
    #[arg(required = true)]
    type_strings: Vec<String>,

    /// Path to the JSON type manifest
    #[arg(short, long)]
    manifest: PathBuf,

    /// Resolve as service types instead of message types
    #[arg(short, long)]
    service: bool,

    /// Print the cache keys populated by the resolutions
    #[arg(long)]
    show_cache: bool,
}

impl ResolveArgs {
    pub fn run(self) -> Result<()> {
        let resolver = load_resolver(&self.manifest)?;
        let kind = if self.service {
            TypeKind::Service
        } else {
            TypeKind::Message
        };

        for type_string in &self.type_strings {
            let handle = resolver.resolve(kind, type_string)?;
            println!("{type_string} -> {}", handle.qualified_name());
        }

        if self.show_cache {
            let cache = match kind {
                TypeKind::Message => resolver.message_cache(),
                TypeKind::Service => resolver.service_cache(),
            };
            println!("{kind} cache:");
            for key in cache.keys() {
                println!("  {key}");
            }
        }
        Ok(())
    }
}
