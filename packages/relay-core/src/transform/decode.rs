use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

use crate::constants::MAX_PIXELS;
use crate::errors::TransformError;

/// デコード済みの画像と検出したフォーマット
#[derive(Debug, Clone)]
pub struct PixelImage {
    pub image: DynamicImage,
    pub format: Option<ImageFormat>,
}

impl PixelImage {
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image,
            format: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// 画像バイト列をデコードする
///
/// フォーマットは内容から推測する。デコードできない場合はエラーとし、代わりの画像は返さない
pub fn decode_image(input: &[u8]) -> Result<PixelImage, TransformError> {
    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| TransformError::Decode(format!("failed to guess format: {e}")))?;

    // 元画像フォーマットを記録（ログ用）
    let format = reader.format();

    let image = reader
        .decode()
        .map_err(|e| TransformError::Decode(e.to_string()))?;

    // メモリ枯渇を防ぐため総ピクセル数を確認
    validate_source_dimensions(image.width(), image.height())?;

    Ok(PixelImage { image, format })
}

fn validate_source_dimensions(width: u32, height: u32) -> Result<(), TransformError> {
    let total_pixels = width as u64 * height as u64;
    if total_pixels > MAX_PIXELS {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }
    Ok(())
}
