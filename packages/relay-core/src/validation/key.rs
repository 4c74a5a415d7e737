use crate::constants::MAX_KEY_LENGTH;
use crate::errors::RelayError;
use crate::transform::TransformKind;

/// S3 イベント通知に含まれるオブジェクトキーをデコードする
///
/// 通知のキーはフォームエンコードされており、スペースは `+`、
/// その他の予約文字は `%XX` で届く
pub fn decode_event_key(raw: &str) -> Result<String, RelayError> {
    // + を先にスペースへ戻す（%2B はデコード後に + になる）
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced)
        .map_err(|_| RelayError::Validation(format!("invalid URL encoding in key {raw:?}")))?;
    Ok(decoded.into_owned())
}

/// オブジェクトキーを検証する
pub fn validate_key(key: &str) -> Result<(), RelayError> {
    // 空文字チェック
    if key.is_empty() {
        return Err(RelayError::Validation("key is empty".to_string()));
    }

    // 長さチェック（1024 バイトまで）
    if key.len() > MAX_KEY_LENGTH {
        return Err(RelayError::Validation(format!(
            "key is too long ({} bytes, max {MAX_KEY_LENGTH})",
            key.len()
        )));
    }

    Ok(())
}

/// 出力キー（変換タグとソースキーをハイフンで連結）
pub fn derive_output_key(kind: TransformKind, object_key: &str) -> String {
    format!("{}-{}", kind.as_str(), object_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output_key() {
        assert_eq!(
            derive_output_key(TransformKind::Grayscale, "image.png"),
            "grayscale-image.png"
        );
        assert_eq!(
            derive_output_key(TransformKind::FlipVertical, "2024/01/photo.png"),
            "vertical-2024/01/photo.png"
        );
        // 無変換のときはタグが空になる
        assert_eq!(derive_output_key(TransformKind::Identity, "image.png"), "-image.png");
    }

    #[test]
    fn test_decode_event_key() {
        assert_eq!(decode_event_key("image.png").unwrap(), "image.png");
        assert_eq!(decode_event_key("my+photo.png").unwrap(), "my photo.png");
        assert_eq!(decode_event_key("a%2Bb%20c.png").unwrap(), "a+b c.png");
        assert_eq!(decode_event_key("%E5%86%99%E7%9C%9F.png").unwrap(), "写真.png");
    }

    #[test]
    fn test_decode_event_key_invalid_utf8() {
        assert!(decode_event_key("%FF%FE.png").is_err());
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("photo.png").is_ok());
        assert!(validate_key("folder/with spaces/photo.png").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key(&"a".repeat(MAX_KEY_LENGTH)).is_ok());
        assert!(validate_key(&"a".repeat(MAX_KEY_LENGTH + 1)).is_err());
    }
}
