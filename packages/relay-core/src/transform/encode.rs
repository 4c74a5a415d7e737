use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

use crate::errors::TransformError;
use crate::transform::decode::PixelImage;

/// 画像を PNG にエンコードする
///
/// PNG は浮動小数点のカラータイプを持たないため、32bit float は 16bit に変換する
pub fn encode_png(img: &PixelImage) -> Result<Vec<u8>, TransformError> {
    let mut buf = Cursor::new(Vec::new());

    // 浮動小数点は 16bit に変換してから書き出す
    let result = match &img.image {
        DynamicImage::ImageRgb32F(_) => {
            DynamicImage::ImageRgb16(img.image.to_rgb16()).write_to(&mut buf, ImageFormat::Png)
        }
        DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba16(img.image.to_rgba16()).write_to(&mut buf, ImageFormat::Png)
        }
        other => other.write_to(&mut buf, ImageFormat::Png),
    };
    result.map_err(|e| TransformError::Encode(format!("PNG encode failed: {e}")))?;

    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::decode_image;
    use image::{Rgb32FImage, RgbaImage};

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png() {
        let img = PixelImage::new(DynamicImage::new_rgb8(10, 10));
        let data = encode_png(&img).unwrap();

        assert!(!data.is_empty());
        // PNG マジックナンバー確認
        assert_eq!(&data[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_encode_is_lossless() {
        let buf = RgbaImage::from_fn(6, 4, |x, y| image::Rgba([x as u8 * 40, y as u8 * 60, 7, 128]));
        let original = PixelImage::new(DynamicImage::ImageRgba8(buf));

        let decoded = decode_image(&encode_png(&original).unwrap()).unwrap();
        assert_eq!(decoded.image, original.image);
    }

    #[test]
    fn test_encode_float_image() {
        let img = PixelImage::new(DynamicImage::ImageRgb32F(Rgb32FImage::new(3, 3)));
        let data = encode_png(&img).unwrap();

        let decoded = decode_image(&data).unwrap();
        assert!(matches!(decoded.image, DynamicImage::ImageRgb16(_)));
        assert_eq!((decoded.width(), decoded.height()), (3, 3));
    }
}
