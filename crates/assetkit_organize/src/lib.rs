//! Runner for the fixed website asset manifest.

use std::path::Path;

use anyhow::Context;
use assetkit_io_fs::{ReportOrganize, organize_assets};
use assetkit_manifest::manifest_default;
use log::{info, warn};

/// Organize `recursos/` into `public/assets/`, both under `dir_base`.
pub fn run_organize<P: AsRef<Path>>(dir_base: P) -> anyhow::Result<ReportOrganize> {
    let path_dir_base = dir_base.as_ref();
    let spec_manifest = manifest_default();
    organize_assets(&spec_manifest, path_dir_base).with_context(|| {
        format!(
            "Failed to organize assets under {}",
            path_dir_base.display()
        )
    })
}

/// Closing console lines: missing-source count, then the success banner.
pub fn log_run_summary(report: &ReportOrganize) {
    if report.missing_count() > 0 {
        warn!("{} explicit file(s) not found", report.missing_count());
    }

    info!("");
    info!("✅ All assets were organized successfully!");
    info!("🚀 Ready to deploy to Vercel.");
}
