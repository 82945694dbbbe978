//! Copying selected images under flat names.

use crate::common::*;

const PROGRESS_TEMPLATE: &str =
    "{msg}: {percent:>3}% [{wide_bar}] {pos}/{len} [{elapsed_precise}<{eta_precise}]";

/// Outcome of copying one split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub copied: usize,
    /// Paths without a `cam<C>/<P>/<I>` segment.
    pub skipped: usize,
}

/// Copy each image to `<target_dir>/<pid>_c<camid>_<imgid>.jpg`.
///
/// Paths the ids cannot be extracted from are reported and skipped. Existing
/// destination files are overwritten. Any I/O failure aborts the copy.
pub fn copy_images<P>(image_files: &[PathBuf], target_dir: P, desc: &str) -> Result<CopyStats>
where
    P: AsRef<Path>,
{
    let target_dir = target_dir.as_ref();
    let bar = progress_bar(image_files.len(), desc);
    let mut stats = CopyStats::default();

    for image_file in image_files {
        match ImageKey::parse(image_file) {
            Some(key) => {
                let target_file = target_dir.join(key.file_name());
                fs::copy(image_file, &target_file).with_context(|| {
                    format!(
                        "failed to copy '{}' to '{}'",
                        image_file.display(),
                        target_file.display()
                    )
                })?;
                stats.copied += 1;
            }
            None => {
                bar.suspend(|| {
                    warn!("unexpected file path format: '{}'", image_file.display());
                });
                stats.skipped += 1;
            }
        }
        bar.inc(1);
    }

    bar.finish();
    Ok(stats)
}

fn progress_bar(len: usize, desc: &str) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    let style =
        ProgressStyle::with_template(PROGRESS_TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar.set_message(desc.to_owned());
    bar
}
