pub mod image_library;
pub mod processor;

pub use image_library::{ImageLibrary, ImageStore, RESERVED_PREFIXES};
pub use processor::{load_shadow_mask, process_bytes, ProcessorService};
