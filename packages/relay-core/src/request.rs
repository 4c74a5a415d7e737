use serde::{Deserialize, Serialize};

use crate::constants::FAILURE_MESSAGE;
use crate::errors::RelayError;
use crate::transform::TransformKind;
use crate::validation::derive_output_key;

/// 1 回の呼び出しで扱う変換リクエスト（呼び出し中は不変）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    pub source_bucket: String,
    pub object_key: String,
    pub destination_bucket: String,
    pub transform: TransformKind,
}

impl TransformRequest {
    pub fn output_key(&self) -> String {
        derive_output_key(self.transform, &self.object_key)
    }
}

/// 呼び出し元プラットフォームへ返す結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResult {
    pub message: String,
    pub ok: bool,
}

impl InvocationResult {
    pub fn success(destination_bucket: &str) -> Self {
        Self {
            message: format!("Successful! Check {destination_bucket} S3 Bucket."),
            ok: true,
        }
    }

    pub fn failure() -> Self {
        Self {
            message: FAILURE_MESSAGE.to_string(),
            ok: false,
        }
    }
}

impl From<&RelayError> for InvocationResult {
    // 失敗の種類によらずメッセージは共通
    fn from(_: &RelayError) -> Self {
        Self::failure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_key() {
        let request = TransformRequest {
            source_bucket: "src".to_string(),
            object_key: "image.png".to_string(),
            destination_bucket: "dst".to_string(),
            transform: TransformKind::Grayscale,
        };
        assert_eq!(request.output_key(), "grayscale-image.png");
    }

    #[test]
    fn test_result_json_shape() {
        let json = serde_json::to_value(InvocationResult::success("dst")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "Successful! Check dst S3 Bucket.", "ok": true })
        );

        let json = serde_json::to_value(InvocationResult::failure()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "Failed! An Error Occurred.", "ok": false })
        );
    }

    #[test]
    fn test_every_error_maps_to_generic_failure() {
        let err = RelayError::Validation("key is empty".to_string());
        assert_eq!(InvocationResult::from(&err), InvocationResult::failure());
    }
}
