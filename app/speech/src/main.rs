use std::sync::Arc;

use anyhow::Result;
use aws::polly::Polly;
use aws::s3::S3;
use clap::Parser;
use clap::Subcommand;
use command::invoke::Invoke;
use command::serve::Serve;
use lambda_runtime::LambdaEvent;
use lambda_runtime::service_fn;
use speech::config::Config;
use speech::event::InvocationRequest;
use speech::handler::SpeechHandler;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod command;

#[derive(Parser)]
#[command(author, version)]
#[command(about = "text to speech function")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "invoke handler once with event file")]
    Invoke(Invoke),
    #[command(about = "start local http server")]
    Serve(Serve),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.is_none())?;

    match cli.command {
        Some(Command::Invoke(command)) => command.execute().await,
        Some(Command::Serve(command)) => command.execute().await,
        None => run().await,
    }
}

fn init_tracing(runtime: bool) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?
        .add_directive("speech=debug".parse()?)
        .add_directive("bootstrap=debug".parse()?)
        .add_directive("framework=trace".parse()?);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_line_number(true);

    // function log sink timestamps each line itself and does not render colors
    if runtime {
        builder.with_ansi(false).without_time().init();
    } else {
        builder.with_thread_ids(true).init();
    }
    Ok(())
}

async fn handler() -> Result<SpeechHandler> {
    let config = Config::from_env()?;
    let sdk_config = aws::load_sdk_config().await;
    Ok(SpeechHandler::new(
        config,
        Arc::new(Polly::new(&sdk_config)),
        Arc::new(S3::new(&sdk_config)),
    ))
}

async fn run() -> Result<()> {
    let handler = handler().await?;
    let handler = &handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<InvocationRequest>| async move {
        handler
            .handle(event.payload)
            .await
            .map_err(lambda_runtime::Error::from)
    }))
    .await
    .map_err(|err| anyhow::anyhow!("function runtime failed, error={err}"))
}
