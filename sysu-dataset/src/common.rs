pub use anyhow::{Context, Error, Result};
pub use itertools::Itertools;
pub use log::debug;
pub use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};
pub use strum::{AsRefStr, EnumIter, EnumString};
