use image::{DynamicImage, ImageBuffer, Pixel, Primitive};

use crate::transform::decode::PixelImage;
use crate::transform::kind::TransformKind;

/// 輝度の重み（Rec. 601）
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// 画像に変換を適用する
///
/// どの変換でも寸法・カラータイプ・ビット深度は変わらず、アルファは変更しない
pub fn apply_transform(input: PixelImage, kind: TransformKind) -> PixelImage {
    let PixelImage { image, format } = input;

    let image = match kind {
        TransformKind::Grayscale => grayscale(image),
        TransformKind::Invert => invert(image),
        TransformKind::FlipHorizontal => image.fliph(),
        TransformKind::FlipVertical => image.flipv(),
        TransformKind::Identity => image,
    };

    PixelImage { image, format }
}

fn grayscale(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(mut buf) => {
            desaturate_buffer(&mut buf, f64::from, |y| y.round().clamp(0.0, 255.0) as u8);
            DynamicImage::ImageRgb8(buf)
        }
        DynamicImage::ImageRgba8(mut buf) => {
            desaturate_buffer(&mut buf, f64::from, |y| y.round().clamp(0.0, 255.0) as u8);
            DynamicImage::ImageRgba8(buf)
        }
        DynamicImage::ImageRgb16(mut buf) => {
            desaturate_buffer(&mut buf, f64::from, |y| y.round().clamp(0.0, 65535.0) as u16);
            DynamicImage::ImageRgb16(buf)
        }
        DynamicImage::ImageRgba16(mut buf) => {
            desaturate_buffer(&mut buf, f64::from, |y| y.round().clamp(0.0, 65535.0) as u16);
            DynamicImage::ImageRgba16(buf)
        }
        DynamicImage::ImageRgb32F(mut buf) => {
            desaturate_buffer(&mut buf, f64::from, |y| y as f32);
            DynamicImage::ImageRgb32F(buf)
        }
        DynamicImage::ImageRgba32F(mut buf) => {
            desaturate_buffer(&mut buf, f64::from, |y| y as f32);
            DynamicImage::ImageRgba32F(buf)
        }
        // 輝度のみの画像は既にグレースケール
        other => other,
    }
}

fn invert(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(mut buf) => {
            invert_buffer(&mut buf, 1);
            DynamicImage::ImageLuma8(buf)
        }
        DynamicImage::ImageLumaA8(mut buf) => {
            invert_buffer(&mut buf, 1);
            DynamicImage::ImageLumaA8(buf)
        }
        DynamicImage::ImageRgb8(mut buf) => {
            invert_buffer(&mut buf, 3);
            DynamicImage::ImageRgb8(buf)
        }
        DynamicImage::ImageRgba8(mut buf) => {
            invert_buffer(&mut buf, 3);
            DynamicImage::ImageRgba8(buf)
        }
        DynamicImage::ImageLuma16(mut buf) => {
            invert_buffer(&mut buf, 1);
            DynamicImage::ImageLuma16(buf)
        }
        DynamicImage::ImageLumaA16(mut buf) => {
            invert_buffer(&mut buf, 1);
            DynamicImage::ImageLumaA16(buf)
        }
        DynamicImage::ImageRgb16(mut buf) => {
            invert_buffer(&mut buf, 3);
            DynamicImage::ImageRgb16(buf)
        }
        DynamicImage::ImageRgba16(mut buf) => {
            invert_buffer(&mut buf, 3);
            DynamicImage::ImageRgba16(buf)
        }
        DynamicImage::ImageRgb32F(mut buf) => {
            invert_buffer(&mut buf, 3);
            DynamicImage::ImageRgb32F(buf)
        }
        DynamicImage::ImageRgba32F(mut buf) => {
            invert_buffer(&mut buf, 3);
            DynamicImage::ImageRgba32F(buf)
        }
        other => {
            let mut buf = other.to_rgba8();
            invert_buffer(&mut buf, 3);
            DynamicImage::ImageRgba8(buf)
        }
    }
}

/// 各ピクセルの先頭 `color_channels` 個のサンプルを `max - v` に置き換える
fn invert_buffer<P: Pixel>(buf: &mut ImageBuffer<P, Vec<P::Subpixel>>, color_channels: usize) {
    let max = <P::Subpixel as Primitive>::DEFAULT_MAX_VALUE;
    for pixel in buf.pixels_mut() {
        // アルファは末尾にあるので触れない
        for sample in &mut pixel.channels_mut()[..color_channels] {
            *sample = max - *sample;
        }
    }
}

/// RGB(A) ピクセルの輝度を 3 つのカラーチャンネルに書き戻す
fn desaturate_buffer<P: Pixel>(
    buf: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    to_f64: fn(P::Subpixel) -> f64,
    from_f64: fn(f64) -> P::Subpixel,
) {
    for pixel in buf.pixels_mut() {
        let channels = pixel.channels_mut();
        let luma = LUMA_R * to_f64(channels[0])
            + LUMA_G * to_f64(channels[1])
            + LUMA_B * to_f64(channels[2]);
        // 元の型に戻して丸める
        let y = from_f64(luma);
        channels[0] = y;
        channels[1] = y;
        channels[2] = y;
    }
}
