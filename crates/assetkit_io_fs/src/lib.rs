//! `assetkit_io_fs` v1:
//! Filesystem engine for organizing static site assets.
//!
//! - `organize` : destination layout, explicit mappings, bulk-copy passes
//! - `spec`     : manifest models, pattern modes, errors
//! - `report`   : run-time report model
//! - `util`     : pattern matching, directory listing, metadata-preserving copy

pub mod organize;
pub mod report;
pub mod spec;
mod util;

pub use organize::{
    bulk_copy_by_pattern, copy_explicit_mapping, ensure_destination_layout, organize_assets,
    validate_manifest,
};
pub use report::{ReportOrganize, ReportOrganizeBuilder};
pub use spec::{
    EnumCopyPatternMode, OrganizeError, SpecAssetManifest, SpecAssetMapping, SpecBulkCopyRule,
};
