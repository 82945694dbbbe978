//! Camera labels and the visible/infrared partition.

use crate::common::*;

/// A camera of the dataset. The label is also the directory name under the
/// dataset root.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Camera {
    #[strum(serialize = "cam1")]
    Cam1,
    #[strum(serialize = "cam2")]
    Cam2,
    #[strum(serialize = "cam3")]
    Cam3,
    #[strum(serialize = "cam4")]
    Cam4,
    #[strum(serialize = "cam5")]
    Cam5,
    #[strum(serialize = "cam6")]
    Cam6,
}

impl Camera {
    pub fn modality(&self) -> Modality {
        match self {
            Self::Cam3 | Self::Cam6 => Modality::Ir,
            Self::Cam1 | Self::Cam2 | Self::Cam4 | Self::Cam5 => Modality::Rgb,
        }
    }
}

/// Visible-light or infrared imaging.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Modality {
    Rgb,
    Ir,
}

pub const RGB_CAMERAS: &[Camera] = &[Camera::Cam1, Camera::Cam2, Camera::Cam4, Camera::Cam5];
pub const IR_CAMERAS: &[Camera] = &[Camera::Cam3, Camera::Cam6];

impl Modality {
    /// Cameras of this modality in the order they are walked.
    pub fn cameras(&self) -> &'static [Camera] {
        match self {
            Self::Rgb => RGB_CAMERAS,
            Self::Ir => IR_CAMERAS,
        }
    }
}
