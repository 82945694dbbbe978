//! The SYSU-MM01 preprocessing program.
//!
//! Copies the dataset images into the flat `train_rgb`, `train_ir`,
//! `gallery_rgb` and `query_ir` directories.

mod common;
pub mod config;
pub mod copier;
pub mod layout;
pub mod summary;

use crate::{
    common::*,
    config::Config,
    copier::copy_images,
    layout::{IdentitySet, PROCESS_ORDER},
    summary::{SplitReport, Summary},
};

/// The entry of the preprocessing program.
///
/// Returns `None` without touching any file when the output directories
/// already exist, unless `force` is set.
pub fn start(config: &Config, force: bool) -> Result<Option<Summary>> {
    let Config {
        dataset_dir,
        output_dir,
    } = config;

    if layout::is_processed(output_dir) {
        if !force {
            info!(
                "processed directories already exist in '{}'. skip preprocessing.",
                output_dir.display()
            );
            return Ok(None);
        }
        info!(
            "processed directories already exist in '{}'. rerun as requested.",
            output_dir.display()
        );
    }

    layout::create_dirs(output_dir)?;

    // load identity lists
    let split_ids = SplitIds::load(dataset_dir)?;
    let training_ids = split_ids.training();
    info!(
        "loaded {} training and {} test identities",
        training_ids.len(),
        split_ids.test.len()
    );

    // select images of every split
    let selections: Vec<_> = PROCESS_ORDER
        .iter()
        .map(|&split| -> Result<_> {
            let ids = match split.identity_set() {
                IdentitySet::Training => &training_ids,
                IdentitySet::Test => &split_ids.test,
            };
            let image_files = select_modality(dataset_dir, split.modality(), ids)?;
            Ok((split, ids.len(), image_files))
        })
        .try_collect()?;

    // copy images
    let reports: Vec<_> = selections
        .into_iter()
        .map(|(split, num_ids, image_files)| -> Result<_> {
            let stats = copy_images(&image_files, split.path(output_dir), split.as_ref())?;
            if stats.skipped > 0 {
                warn!("{}: skipped {} unexpected paths", split, stats.skipped);
            }
            Ok(SplitReport {
                split,
                num_ids,
                num_selected: image_files.len(),
                stats,
            })
        })
        .try_collect()?;

    info!(
        "preprocessing complete. processed data saved in '{}'",
        output_dir.display()
    );

    Ok(Some(Summary {
        output_dir: output_dir.clone(),
        reports,
    }))
}
