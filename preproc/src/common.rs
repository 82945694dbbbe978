//! Common imports from external crates.

pub use anyhow::{Context, Result};
pub use indicatif::{ProgressBar, ProgressStyle};
pub use itertools::Itertools;
pub use log::{info, warn};
pub use serde::{Deserialize, Serialize};
pub use std::{
    fs,
    path::{Path, PathBuf},
};
pub use strum::{AsRefStr, EnumIter, IntoEnumIterator};
pub use sysu_dataset::{select_modality, ImageKey, Modality, SplitIds};
