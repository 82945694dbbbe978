//! Image file enumeration over the `<root>/<camera>/<identity>` tree.

use crate::{
    camera::{Camera, Modality},
    common::*,
    identity::PersonId,
};

/// List every entry under `<dataset_dir>/<camera>/<id>` for the given cameras
/// and identities.
///
/// Identities are walked in sorted order and cameras in the given order. A
/// camera/identity pair without a directory contributes nothing. Entries are
/// not filtered by extension or type. The returned list is sorted by path
/// string.
pub fn select_images<P>(
    dataset_dir: P,
    cameras: &[Camera],
    ids: &[PersonId],
) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
{
    let dataset_dir = dataset_dir.as_ref();
    let mut image_files = vec![];

    for id in ids.iter().sorted() {
        for camera in cameras {
            let camera: &str = camera.as_ref();
            let image_dir = dataset_dir.join(camera).join(id.as_str());
            if !image_dir.is_dir() {
                continue;
            }

            let entries: Vec<_> = fs::read_dir(&image_dir)
                .with_context(|| format!("failed to list directory '{}'", image_dir.display()))?
                .map(|entry| -> Result<_> {
                    let entry = entry.with_context(|| {
                        format!("failed to list directory '{}'", image_dir.display())
                    })?;
                    Ok(entry.path())
                })
                .try_collect()?;
            debug!("found {} entries in '{}'", entries.len(), image_dir.display());
            image_files.extend(entries);
        }
    }

    image_files.sort_by(|lhs, rhs| lhs.as_os_str().cmp(rhs.as_os_str()));
    Ok(image_files)
}

/// [select_images] over all cameras of a modality.
pub fn select_modality<P>(
    dataset_dir: P,
    modality: Modality,
    ids: &[PersonId],
) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
{
    select_images(dataset_dir, modality.cameras(), ids)
}
