use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use framework::json;
use speech::event::InvocationRequest;
use tracing::info;

use crate::handler;

#[derive(Args)]
pub struct Invoke {
    #[arg(long, help = "event json path")]
    event: PathBuf,
}

impl Invoke {
    pub async fn execute(&self) -> Result<()> {
        info!("load event, path={}", self.event.to_string_lossy());
        let request: InvocationRequest = json::load_file(&self.event).await?;

        let handler = handler().await?;
        let response = handler.handle(request).await?;
        println!("{}", json::to_json(&response)?);

        Ok(())
    }
}
