use std::fmt;

use crate::errors::ConfigError;

/// 1 回の呼び出しで適用する画素変換
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformKind {
    Grayscale,
    Invert,
    FlipHorizontal,
    FlipVertical,
    /// 無変換（設定値が空または未設定のとき）
    #[default]
    Identity,
}

impl TransformKind {
    /// 設定値から TransformKind を作成
    ///
    /// 小文字のタグと完全一致した場合のみ受け付ける。
    /// 空文字は Identity、それ以外は起動時エラーとする。
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "grayscale" => Ok(Self::Grayscale),
            "invert" => Ok(Self::Invert),
            "horizontal" => Ok(Self::FlipHorizontal),
            "vertical" => Ok(Self::FlipVertical),
            "" => Ok(Self::Identity),
            _ => Err(ConfigError::UnknownTransform(value.to_string())),
        }
    }

    /// 出力キーの接頭辞に使うタグ
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Invert => "invert",
            Self::FlipHorizontal => "horizontal",
            Self::FlipVertical => "vertical",
            Self::Identity => "",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(TransformKind::parse("grayscale").unwrap(), TransformKind::Grayscale);
        assert_eq!(TransformKind::parse("invert").unwrap(), TransformKind::Invert);
        assert_eq!(TransformKind::parse("horizontal").unwrap(), TransformKind::FlipHorizontal);
        assert_eq!(TransformKind::parse("vertical").unwrap(), TransformKind::FlipVertical);
    }

    #[test]
    fn test_parse_empty_is_identity() {
        assert_eq!(TransformKind::parse("").unwrap(), TransformKind::Identity);
    }

    #[test]
    fn test_parse_unknown_is_rejected() {
        match TransformKind::parse("sepia") {
            Err(ConfigError::UnknownTransform(value)) => assert_eq!(value, "sepia"),
            other => panic!("expected UnknownTransform, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_is_exact_match() {
        // 大文字や前後の空白を含む値は別の値として扱う
        for value in ["Invert", "INVERT", " invert", "invert ", "   "] {
            match TransformKind::parse(value) {
                Err(ConfigError::UnknownTransform(v)) => assert_eq!(v, value),
                other => panic!("expected UnknownTransform for {value:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_tags_round_trip() {
        for kind in [
            TransformKind::Grayscale,
            TransformKind::Invert,
            TransformKind::FlipHorizontal,
            TransformKind::FlipVertical,
            TransformKind::Identity,
        ] {
            assert_eq!(TransformKind::parse(kind.as_str()).unwrap(), kind);
        }
        assert_eq!(TransformKind::Identity.to_string(), "");
    }
}
