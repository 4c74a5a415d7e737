mod handler;
mod storage;

use aws_config::BehaviorVersion;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use relay_core::{Relay, RelayConfig};
use tracing_subscriber::EnvFilter;

use crate::handler::function_handler;
use crate::storage::S3ObjectStorage;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    // 設定が不正なら起動時に失敗させる
    let config = RelayConfig::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;

    tracing::info!(
        destination_bucket = %config.destination_bucket,
        transform = ?config.transform,
        "starting image relay"
    );

    // クライアントはコールドスタート時に一度だけ作成し、呼び出し間で使い回す
    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let storage = S3ObjectStorage::new(aws_sdk_s3::Client::new(&shared_config));
    let relay = Relay::new(config, storage.clone(), storage);

    run(service_fn(|event: LambdaEvent<S3Event>| {
        function_handler(event.payload, &relay)
    }))
    .await
}

/// CloudWatch 向けの JSON ログ（タイムスタンプは CloudWatch 側で付与される）
fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();
}
