use aws_config::BehaviorVersion;
use aws_config::SdkConfig;
use tracing::info;

pub mod polly;
pub mod s3;

// region and credentials resolve from the standard provider chain (env, profile, container role)
pub async fn load_sdk_config() -> SdkConfig {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    info!("load aws config, region={:?}", config.region());
    config
}
