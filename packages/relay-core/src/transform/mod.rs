pub mod decode;
pub mod encode;
pub mod kind;
pub mod ops;

pub use decode::{PixelImage, decode_image};
pub use encode::encode_png;
pub use kind::TransformKind;
pub use ops::apply_transform;
