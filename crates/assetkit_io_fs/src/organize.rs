//! Destination layout, explicit mapping and bulk-copy orchestration.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::report::{ReportOrganize, ReportOrganizeBuilder};
use crate::spec::{OrganizeError, SpecAssetManifest, SpecAssetMapping, SpecBulkCopyRule};
use crate::util::{
    TypeFilePattern, copy_file_with_metadata, list_dir_entries, metadata_if_present,
};

/// Run a whole manifest: destination layout, explicit mappings, then every
/// bulk-copy rule in order.
///
/// Manifest roots are resolved under `dir_base` first. Patterns and the
/// destination layout are validated before the filesystem is touched.
///
/// Returns [`ReportOrganize`] when the run completes; missing explicit
/// sources are recorded there. Returns [`OrganizeError`] for invalid input or
/// the first filesystem failure, with no rollback of earlier copies.
pub fn organize_assets<P>(
    spec_manifest: &SpecAssetManifest,
    dir_base: P,
) -> Result<ReportOrganize, OrganizeError>
where
    P: AsRef<Path>,
{
    validate_manifest(spec_manifest)?;
    let spec_resolved = spec_manifest.resolve_under(dir_base.as_ref());
    let mut builder_report = ReportOrganizeBuilder::default();

    info!("🔧 Creating folder layout...");
    ensure_destination_layout(
        &spec_resolved.path_dir_dst_root,
        &spec_resolved.folders,
        &mut builder_report,
    )?;
    info!("✓ Folders created!");

    info!("");
    info!("📋 Copying individual files...");
    copy_explicit_mapping(&spec_resolved.mappings, &mut builder_report)?;

    for spec_rule in &spec_resolved.rules_bulk {
        info!("");
        info!("📁 Copying {}...", spec_rule.label);
        bulk_copy_by_pattern(spec_rule, &mut builder_report)?;
    }

    let report = builder_report.build();
    debug!("{report}");
    Ok(report)
}

/// Check that every pattern compiles and every destination lands inside a
/// folder of the declared layout.
pub fn validate_manifest(spec_manifest: &SpecAssetManifest) -> Result<(), OrganizeError> {
    for spec_rule in &spec_manifest.rules_bulk {
        TypeFilePattern::compile(&spec_rule.pattern, spec_rule.rule_pattern)?;
    }

    let is_in_layout = |path_dir: &Path| {
        spec_manifest
            .folders
            .iter()
            .any(|folder| Path::new(folder).starts_with(path_dir))
    };

    for spec_mapping in &spec_manifest.mappings {
        let path_parent_dst = spec_mapping.path_dst.parent().unwrap_or(Path::new(""));
        if !is_in_layout(path_parent_dst) {
            return Err(OrganizeError::InvalidManifest(format!(
                "Mapping destination outside folder layout: {}",
                spec_mapping.path_dst.display()
            )));
        }
    }
    for spec_rule in &spec_manifest.rules_bulk {
        if !is_in_layout(spec_rule.path_dir_dst.as_path()) {
            return Err(OrganizeError::InvalidManifest(format!(
                "Bulk-copy destination outside folder layout: {}",
                spec_rule.path_dir_dst.display()
            )));
        }
    }
    Ok(())
}

/// Create each folder (and missing parents) under `dir_destination`.
///
/// Existing folders are left alone, so repeated runs are harmless.
pub fn ensure_destination_layout<P, S>(
    dir_destination: P,
    folders: &[S],
    builder_report: &mut ReportOrganizeBuilder,
) -> Result<(), OrganizeError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path_dir_dst_root = dir_destination.as_ref();
    for folder in folders {
        let path_dir = path_dir_dst_root.join(folder.as_ref());
        fs::create_dir_all(&path_dir).map_err(|e| OrganizeError::DestinationInitFailed {
            path: path_dir.clone(),
            message: e.to_string(),
        })?;
        debug!("Ensured {}", path_dir.display());
        builder_report.add_dir_ensured();
    }
    Ok(())
}

/// Copy each `(source, destination)` pair whose source exists.
///
/// Missing sources are reported and skipped. A source that cannot be
/// inspected (e.g. permission denied) or copied aborts the run.
pub fn copy_explicit_mapping(
    mappings: &[SpecAssetMapping],
    builder_report: &mut ReportOrganizeBuilder,
) -> Result<(), OrganizeError> {
    for spec_mapping in mappings {
        let meta_src = metadata_if_present(&spec_mapping.path_src).map_err(|e| {
            OrganizeError::CopyFailed {
                source: spec_mapping.path_src.clone(),
                destination: spec_mapping.path_dst.clone(),
                message: e.to_string(),
            }
        })?;
        if meta_src.is_none() {
            warn!("  ⚠ Not found: {}", spec_mapping.path_src.display());
            builder_report.add_missing(spec_mapping.path_src.clone());
            continue;
        }

        copy_file_with_metadata(&spec_mapping.path_src, &spec_mapping.path_dst).map_err(|e| {
            OrganizeError::CopyFailed {
                source: spec_mapping.path_src.clone(),
                destination: spec_mapping.path_dst.clone(),
                message: e.to_string(),
            }
        })?;
        builder_report.add_copied();
        info!(
            "  ✓ {}",
            spec_mapping
                .path_dst
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default()
        );
    }
    Ok(())
}

/// Copy every file directly under the rule's source folder whose name
/// matches the rule pattern, keeping the filename.
///
/// A missing source folder copies nothing; one that cannot be inspected
/// aborts the run. Files sharing a name overwrite whatever is already at the
/// destination.
pub fn bulk_copy_by_pattern(
    spec_rule: &SpecBulkCopyRule,
    builder_report: &mut ReportOrganizeBuilder,
) -> Result<(), OrganizeError> {
    let pattern = TypeFilePattern::compile(&spec_rule.pattern, spec_rule.rule_pattern)?;
    let meta_dir_src = metadata_if_present(&spec_rule.path_dir_src).map_err(|e| {
        OrganizeError::ReadDirFailed {
            path: spec_rule.path_dir_src.clone(),
            message: e.to_string(),
        }
    })?;
    if !meta_dir_src.is_some_and(|meta| meta.is_dir()) {
        debug!(
            "Bulk-copy source absent: {}",
            spec_rule.path_dir_src.display()
        );
        return Ok(());
    }

    for spec_entry in list_dir_entries(&spec_rule.path_dir_src)? {
        let c_name = spec_entry.name_entry.to_string_lossy();
        if !pattern.is_match(&c_name) {
            builder_report.add_scanned();
            continue;
        }
        builder_report.add_counts(&["cnt_scanned", "cnt_matched"], 1);

        if !spec_entry.if_is_file {
            builder_report.add_warning(format!(
                "Not a regular file, skipped: {}",
                spec_entry.path_entry.display()
            ));
            debug!("Skipped non-file {}", spec_entry.path_entry.display());
            continue;
        }

        let path_file_dst = spec_rule.path_dir_dst.join(&spec_entry.name_entry);
        copy_file_with_metadata(&spec_entry.path_entry, &path_file_dst).map_err(|e| {
            OrganizeError::CopyFailed {
                source: spec_entry.path_entry.clone(),
                destination: path_file_dst.clone(),
                message: e.to_string(),
            }
        })?;
        builder_report.add_copied();
        info!("  ✓ {c_name}");
    }
    Ok(())
}
