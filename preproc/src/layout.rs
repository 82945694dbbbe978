//! Output directory layout and the already-processed guard.

use crate::common::*;

/// An output split directory under the output root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SplitDir {
    TrainRgb,
    GalleryRgb,
    TrainIr,
    QueryIr,
}

/// The identity list a split draws its images from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentitySet {
    /// Train and val identities.
    Training,
    Test,
}

/// The order splits are selected and copied in.
pub const PROCESS_ORDER: [SplitDir; 4] = [
    SplitDir::TrainRgb,
    SplitDir::TrainIr,
    SplitDir::GalleryRgb,
    SplitDir::QueryIr,
];

impl SplitDir {
    pub fn modality(&self) -> Modality {
        match self {
            Self::TrainRgb | Self::GalleryRgb => Modality::Rgb,
            Self::TrainIr | Self::QueryIr => Modality::Ir,
        }
    }

    pub fn identity_set(&self) -> IdentitySet {
        match self {
            Self::TrainRgb | Self::TrainIr => IdentitySet::Training,
            Self::GalleryRgb | Self::QueryIr => IdentitySet::Test,
        }
    }

    pub fn path<P>(&self, output_dir: P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        let name: &str = self.as_ref();
        output_dir.as_ref().join(name)
    }
}

/// Create the split directories. Existing directories are left untouched.
pub fn create_dirs<P>(output_dir: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let output_dir = output_dir.as_ref();
    SplitDir::iter().try_for_each(|split| -> Result<_> {
        let dir = split.path(output_dir);
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create directory '{}'", dir.display()))?;
        Ok(())
    })
}

/// Whether every split directory exists. File contents are not inspected.
pub fn is_processed<P>(output_dir: P) -> bool
where
    P: AsRef<Path>,
{
    let output_dir = output_dir.as_ref();
    SplitDir::iter().all(|split| split.path(output_dir).is_dir())
}
