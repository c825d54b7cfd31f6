use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use speech::web;

use crate::handler;

#[derive(Args)]
pub struct Serve {
    #[arg(long, help = "bind address", default_value = "127.0.0.1:3000")]
    bind: String,
}

impl Serve {
    pub async fn execute(&self) -> Result<()> {
        let handler = Arc::new(handler().await?);

        let app = web::routes().with_state(handler);
        framework::web::server::start_http_server(app, &self.bind).await
    }
}
