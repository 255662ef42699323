use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use regex::Regex;

use crate::spec::{EnumCopyPatternMode, OrganizeError};

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

#[derive(Debug, Clone)]
pub(crate) enum TypeFilePattern {
    Literal(String),
    Glob(GlobMatcher),
    Regex(Regex),
}

impl TypeFilePattern {
    pub(crate) fn compile(
        pattern: &str,
        rule_pattern: EnumCopyPatternMode,
    ) -> Result<Self, OrganizeError> {
        match rule_pattern {
            EnumCopyPatternMode::Literal => Ok(Self::Literal(pattern.to_string())),
            EnumCopyPatternMode::Glob => {
                let matcher = Glob::new(pattern)
                    .map_err(|e| {
                        OrganizeError::InvalidPattern(format!(
                            "Invalid bulk-copy pattern `{pattern}`: {e}"
                        ))
                    })?
                    .compile_matcher();
                Ok(Self::Glob(matcher))
            }
            EnumCopyPatternMode::Regex => {
                let regex = Regex::new(pattern).map_err(|e| {
                    OrganizeError::InvalidPattern(format!(
                        "Invalid bulk-copy pattern `{pattern}`: {e}"
                    ))
                })?;
                Ok(Self::Regex(regex))
            }
        }
    }

    pub(crate) fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Literal(p) => value == p,
            Self::Glob(p) => p.is_match(value),
            Self::Regex(p) => p.is_match(value),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DirectoryListing

/// Stat `path`, following symlinks. `Ok(None)` when nothing is there (missing
/// entry, broken symlink, or a path component that is a plain file); any
/// other failure, e.g. permission denied, is returned.
pub(crate) fn metadata_if_present(path: &Path) -> Result<Option<fs::Metadata>, io::Error> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(e)
            if matches!(
                e.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SpecDirEntry {
    pub(crate) path_entry: PathBuf,
    pub(crate) name_entry: OsString,
    pub(crate) if_is_file: bool,
}

/// List direct children of `path_dir`, sorted by name.
///
/// Symlinks are followed when classifying, so a link to a regular file counts
/// as a file.
pub(crate) fn list_dir_entries(path_dir: &Path) -> Result<Vec<SpecDirEntry>, OrganizeError> {
    let map_err = |e: io::Error| OrganizeError::ReadDirFailed {
        path: path_dir.to_path_buf(),
        message: e.to_string(),
    };

    let mut l_entries = Vec::new();
    for entry_res in fs::read_dir(path_dir).map_err(map_err)? {
        let entry = entry_res.map_err(map_err)?;
        let path_entry = entry.path();
        let if_is_file = metadata_if_present(&path_entry)
            .map_err(map_err)?
            .is_some_and(|meta| meta.is_file());
        l_entries.push(SpecDirEntry {
            path_entry,
            name_entry: entry.file_name(),
            if_is_file,
        });
    }
    l_entries.sort_by(|a, b| a.name_entry.cmp(&b.name_entry));
    Ok(l_entries)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FileCopy

/// Copy bytes, then permissions, access/modification times and (Linux)
/// extended attributes. An existing destination file is replaced.
pub(crate) fn copy_file_with_metadata(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> Result<(), io::Error> {
    remove_readonly_destination(path_file_dst)?;
    fs::copy(path_file_src, path_file_dst)?;
    apply_metadata(path_file_src, path_file_dst)
}

// A read-only destination left by a previous run cannot be opened for writing.
fn remove_readonly_destination(path_file_dst: &Path) -> Result<(), io::Error> {
    match fs::symlink_metadata(path_file_dst) {
        Ok(meta_dst) if meta_dst.is_file() && meta_dst.permissions().readonly() => {
            fs::remove_file(path_file_dst)
        }
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn apply_metadata(path_file_src: &Path, path_file_dst: &Path) -> Result<(), io::Error> {
    use filetime::{FileTime, set_file_times};

    let stat_src = fs::metadata(path_file_src)?;

    // `fs::copy` already applied the source mode; user xattrs need the owner
    // write bit until they are in place.
    #[cfg(target_os = "linux")]
    {
        use std::os::unix::fs::PermissionsExt;

        let n_mode_src = stat_src.permissions().mode();
        if n_mode_src & 0o200 == 0 {
            fs::set_permissions(path_file_dst, fs::Permissions::from_mode(n_mode_src | 0o200))?;
        }
        copy_xattrs_linux(path_file_src, path_file_dst);
    }

    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(path_file_dst, file_time_access, file_time_modify)?;

    fs::set_permissions(path_file_dst, stat_src.permissions())?;
    Ok(())
}

#[cfg(target_os = "linux")]
fn copy_xattrs_linux(path_file_src: &Path, path_file_dst: &Path) {
    let iter_xattr_names = match xattr::list(path_file_src) {
        Ok(v) => v,
        Err(_) => return,
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        if let Err(e) = xattr::set(path_file_dst, &name, &raw_value) {
            log::debug!(
                "xattr {} not copied to {} ({e})",
                name.to_string_lossy(),
                path_file_dst.display()
            );
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{TypeFilePattern, copy_file_with_metadata, list_dir_entries, metadata_if_present};
    use crate::spec::{EnumCopyPatternMode, OrganizeError};

    #[test]
    fn pattern_glob_matches_extension_only() {
        let pattern = TypeFilePattern::compile("*.png", EnumCopyPatternMode::Glob).expect("glob");
        assert!(pattern.is_match("acme.png"));
        assert!(pattern.is_match("Empresa X.png"));
        assert!(!pattern.is_match("acme.gif"));
        assert!(!pattern.is_match("acme.PNG"));
    }

    #[test]
    fn pattern_regex_and_literal() {
        let pattern = TypeFilePattern::compile(r"^before_\d+\.jpeg$", EnumCopyPatternMode::Regex)
            .expect("regex");
        assert!(pattern.is_match("before_01.jpeg"));
        assert!(!pattern.is_match("after_01.jpeg"));

        let pattern =
            TypeFilePattern::compile("team.png", EnumCopyPatternMode::Literal).expect("literal");
        assert!(pattern.is_match("team.png"));
        assert!(!pattern.is_match("old-team.png"));
    }

    #[test]
    fn pattern_invalid_rejected() {
        let err = TypeFilePattern::compile("[", EnumCopyPatternMode::Glob).expect_err("bad glob");
        assert!(matches!(err, OrganizeError::InvalidPattern(_)));
        let err = TypeFilePattern::compile("(", EnumCopyPatternMode::Regex).expect_err("bad regex");
        assert!(matches!(err, OrganizeError::InvalidPattern(_)));
    }

    #[test]
    fn list_dir_entries_sorted_and_classified() {
        let tmp = tempfile::tempdir().expect("tempdir");
        std::fs::write(tmp.path().join("b.png"), "b").expect("write");
        std::fs::write(tmp.path().join("a.png"), "a").expect("write");
        std::fs::create_dir(tmp.path().join("c.png")).expect("mkdir");

        let l_entries = list_dir_entries(tmp.path()).expect("list");
        let l_names: Vec<_> = l_entries
            .iter()
            .map(|e| e.name_entry.to_string_lossy().to_string())
            .collect();
        assert_eq!(l_names, ["a.png", "b.png", "c.png"]);
        assert!(l_entries[0].if_is_file);
        assert!(!l_entries[2].if_is_file);
    }

    #[test]
    fn copy_file_overwrites_readonly_destination() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_src = tmp.path().join("src.png");
        let path_dst = tmp.path().join("dst.png");
        std::fs::write(&path_src, "new").expect("write src");
        std::fs::write(&path_dst, "old").expect("write dst");

        let mut perms = std::fs::metadata(&path_dst).expect("meta").permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&path_dst, perms).expect("set readonly");

        copy_file_with_metadata(&path_src, &path_dst).expect("copy");
        assert_eq!(std::fs::read(&path_dst).expect("read dst"), b"new");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn copy_file_preserves_linux_metadata() {
        use filetime::{FileTime, set_file_times};
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().expect("tempdir");
        let path_file_src = tmp.path().join("meta.png");
        let path_file_dst = tmp.path().join("copy.png");
        std::fs::write(&path_file_src, "meta").expect("write");

        std::fs::set_permissions(&path_file_src, std::fs::Permissions::from_mode(0o640))
            .expect("set permissions");
        set_file_times(
            &path_file_src,
            FileTime::from_unix_time(1_700_000_010, 0),
            FileTime::from_unix_time(1_700_000_020, 0),
        )
        .expect("set times");

        let c_xattr_name = "user.assetkit_test";
        let b_if_has_xattr = xattr::set(&path_file_src, c_xattr_name, b"meta_value").is_ok();

        copy_file_with_metadata(&path_file_src, &path_file_dst).expect("copy");

        let stat_src = std::fs::metadata(&path_file_src).expect("src metadata");
        let stat_dst = std::fs::metadata(&path_file_dst).expect("dst metadata");
        assert_eq!(
            stat_src.permissions().mode() & 0o777,
            stat_dst.permissions().mode() & 0o777
        );
        assert_eq!(
            FileTime::from_last_modification_time(&stat_src),
            FileTime::from_last_modification_time(&stat_dst)
        );

        if b_if_has_xattr {
            let raw_value_dst = xattr::get(&path_file_dst, c_xattr_name)
                .expect("get dst xattr")
                .expect("xattr exists");
            assert_eq!(raw_value_dst, b"meta_value");
        }
    }

    #[test]
    fn metadata_if_present_treats_missing_and_file_parent_as_absent() {
        let tmp = tempfile::tempdir().expect("tempdir");
        std::fs::write(tmp.path().join("plain.png"), "p").expect("write");

        assert!(
            metadata_if_present(&tmp.path().join("gone.png"))
                .expect("stat")
                .is_none()
        );
        assert!(
            metadata_if_present(&tmp.path().join("plain.png/inner.png"))
                .expect("stat")
                .is_none()
        );
        assert!(
            metadata_if_present(&tmp.path().join("plain.png"))
                .expect("stat")
                .is_some()
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn copy_file_keeps_xattrs_of_readonly_source() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().expect("tempdir");
        let path_file_src = tmp.path().join("locked.png");
        let path_file_dst = tmp.path().join("copy.png");
        std::fs::write(&path_file_src, "locked").expect("write");

        let c_xattr_name = "user.assetkit_test";
        let b_if_has_xattr = xattr::set(&path_file_src, c_xattr_name, b"kept").is_ok();
        std::fs::set_permissions(&path_file_src, std::fs::Permissions::from_mode(0o444))
            .expect("set readonly");

        copy_file_with_metadata(&path_file_src, &path_file_dst).expect("copy");

        let stat_dst = std::fs::metadata(&path_file_dst).expect("dst metadata");
        assert_eq!(stat_dst.permissions().mode() & 0o777, 0o444);
        if b_if_has_xattr {
            let raw_value_dst = xattr::get(&path_file_dst, c_xattr_name)
                .expect("get dst xattr")
                .expect("xattr exists");
            assert_eq!(raw_value_dst, b"kept");
        }
    }
}
