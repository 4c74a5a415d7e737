/// デコード後の最大ピクセル数（1GP = 実質無制限、極端な攻撃のみ防止）
pub const MAX_PIXELS: u64 = 1_000_000_000;

/// オブジェクトキーの最大バイト数（S3 の上限）
pub const MAX_KEY_LENGTH: usize = 1024;

/// 出力オブジェクトの Content-Type
pub const OUTPUT_CONTENT_TYPE: &str = "image/png";

/// 失敗時に返すメッセージ
pub const FAILURE_MESSAGE: &str = "Failed! An Error Occurred.";
