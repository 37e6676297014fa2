use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Args;
use serde_json::Value;

use super::load_resolver;

#[derive(Args)]
pub struct InstanceArgs {
    /// Message or service type string
    type_string: String,

    /// Path to the JSON type manifest
    #[arg(short, long)]
    manifest: PathBuf,

    /// Print the request of a service type
    #[arg(long, conflicts_with = "response")]
    request: bool,

    /// Print the response of a service type
    #[arg(long)]
    response: bool,
}

impl InstanceArgs {
    pub fn run(self) -> Result<()> {
        let resolver = load_resolver(&self.manifest)?;
        let id = self.type_string.as_str();

        let instance = if self.request {
            resolver.get_service_request_instance(id)?
        } else if self.response {
            resolver.get_service_response_instance(id)?
        } else {
            resolver.get_message_instance(id)?
        };

        let value = instance
            .downcast::<Value>()
            .map_err(|_| anyhow!("{id} does not produce a JSON instance"))?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        Ok(())
    }
}
