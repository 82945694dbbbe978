//! Domain types and directory walking for the SYSU-MM01 cross-modality
//! person re-identification dataset.

mod common;
pub mod camera;
pub mod identity;
pub mod image_key;
pub mod selector;
pub mod split;

pub use camera::{Camera, Modality};
pub use identity::PersonId;
pub use image_key::ImageKey;
pub use selector::{select_images, select_modality};
pub use split::{parse_id_list, read_id_file, SplitIds};
