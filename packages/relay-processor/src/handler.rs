use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::Error;

use relay_core::{
    InvocationResult, ObjectFetcher, ObjectStore, Relay, RelayError, decode_event_key,
};

/// S3 通知 1 件に対する Lambda ハンドラ
///
/// 失敗時は汎用の失敗結果をログに残し、エラー自体をランタイムへ返す。
pub async fn function_handler<F, S>(
    event: S3Event,
    relay: &Relay<F, S>,
) -> Result<InvocationResult, Error>
where
    F: ObjectFetcher,
    S: ObjectStore,
{
    match process_event(&event, relay).await {
        Ok(result) => Ok(result),
        Err(err) => {
            // 失敗のログはここで一度だけ出す
            let result = InvocationResult::from(&err);
            tracing::error!(
                result = ?result,
                stage = ?err.stage(),
                error = %err,
                "invocation failed"
            );
            Err(err.into())
        }
    }
}

pub async fn process_event<F, S>(
    event: &S3Event,
    relay: &Relay<F, S>,
) -> Result<InvocationResult, RelayError>
where
    F: ObjectFetcher,
    S: ObjectStore,
{
    let (bucket, key) = first_object(event)?;
    relay.handle(&bucket, &key).await
}

/// 先頭レコードのバケット名とデコード済みオブジェクトキーを返す
///
/// 2 件目以降のレコードは無視する
pub fn first_object(event: &S3Event) -> Result<(String, String), RelayError> {
    // レコードが 1 件もなければ処理できない
    let Some(record) = event.records.first() else {
        return Err(RelayError::InvalidEvent("event contains no records".to_string()));
    };

    if event.records.len() > 1 {
        tracing::warn!(
            ignored = event.records.len() - 1,
            "event carries several records, processing only the first"
        );
    }

    let bucket = record
        .s3
        .bucket
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| RelayError::InvalidEvent("record has no bucket name".to_string()))?;

    let raw_key = record
        .s3
        .object
        .key
        .as_deref()
        .ok_or_else(|| RelayError::InvalidEvent("record has no object key".to_string()))?;

    // 通知のキーは URL エンコードされている
    Ok((bucket.to_string(), decode_event_key(raw_key)?))
}
