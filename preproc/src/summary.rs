//! Per-split report of a preprocessing run.

use crate::{common::*, copier::CopyStats, layout::SplitDir};
use prettytable::{cell, row, Table};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub split: SplitDir,
    /// Size of the identity list the split was selected from.
    pub num_ids: usize,
    pub num_selected: usize,
    pub stats: CopyStats,
}

/// The result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output_dir: PathBuf,
    /// Reports in processing order.
    pub reports: Vec<SplitReport>,
}

impl Summary {
    pub fn total_copied(&self) -> usize {
        self.reports.iter().map(|report| report.stats.copied).sum()
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row![
            "split", "modality", "identities", "selected", "copied", "skipped"
        ]);

        self.reports.iter().for_each(|report| {
            let SplitReport {
                split,
                num_ids,
                num_selected,
                stats: CopyStats { copied, skipped },
            } = *report;

            table.add_row(row![
                split,
                split.modality(),
                num_ids,
                num_selected,
                copied,
                skipped
            ]);
        });

        table
    }

    pub fn print_table(&self) {
        self.to_table().printstd();
    }
}
