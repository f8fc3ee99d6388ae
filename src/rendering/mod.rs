pub mod codec;

pub use codec::{decode, encode_png, is_image_name, IMAGE_EXTENSIONS, MAX_DIMENSION};
