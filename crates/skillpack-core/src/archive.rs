//! Skill folder packaging.
//!
//! Zips a validated skill folder into `<folder-name>.zip` for sharing and
//! backups. Entry paths are recorded relative to the skill folder's parent,
//! so the folder name is the single top-level component inside the archive
//! and extraction recreates the folder as-is.
//!
//! Packaging is gated on [`validate_skill`]: an invalid skill is never
//! packaged. The archive is recreated from scratch on every run — an
//! existing archive at the destination is overwritten, never merged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::PackageError;
use crate::validate::validate_skill;

/// A successfully created skill archive.
#[derive(Debug)]
pub struct PackagedArchive {
    /// Where the archive was written.
    pub path: PathBuf,
    /// Entry names in the order they were written, e.g. `demo/SKILL.md`.
    pub entries: Vec<String>,
}

/// Package a skill folder into a zip archive.
///
/// The folder is resolved to an absolute path, pre-checked for `SKILL.md`,
/// and validated before any output is produced; the destination directory
/// is only created after validation passes. With no `output_dir` the
/// archive lands in the current working directory.
///
/// Failures are terminal for the invocation: an I/O error mid-write aborts
/// without cleaning up a partial archive file.
pub fn package_skill(
    skill_path: &Path,
    output_dir: Option<&Path>,
) -> Result<PackagedArchive, PackageError> {
    let skill_path = match skill_path.canonicalize() {
        Ok(p) => p,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(PackageError::NotFound {
                path: skill_path.to_path_buf(),
            })
        }
        Err(e) => return Err(PackageError::Io(e)),
    };

    if !skill_path.is_dir() {
        return Err(PackageError::NotADirectory { path: skill_path });
    }

    // Fast pre-filter; the validator repeats this check with its own message.
    if !skill_path.join("SKILL.md").exists() {
        return Err(PackageError::SkillMdMissing { path: skill_path });
    }

    validate_skill(&skill_path)?;

    let skill_name = skill_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| PackageError::NoFolderName {
            path: skill_path.clone(),
        })?;

    let output_path = match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            dir.canonicalize()?
        }
        None => std::env::current_dir()?,
    };

    let archive_path = output_path.join(format!("{skill_name}.zip"));
    tracing::debug!(archive = %archive_path.display(), "creating skill archive");

    let file = fs::File::create(&archive_path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = Vec::new();
    for entry in WalkDir::new(&skill_path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let arcname = entry
            .path()
            .strip_prefix(&skill_path)
            .map(|rel| arc_entry_name(&skill_name, rel))
            .unwrap_or_else(|_| skill_name.clone());

        zip.start_file(arcname.clone(), options)?;
        let mut src = fs::File::open(entry.path())?;
        io::copy(&mut src, &mut zip)?;

        tracing::debug!(entry = %arcname, "added archive entry");
        entries.push(arcname);
    }

    zip.finish()?;

    Ok(PackagedArchive {
        path: archive_path,
        entries,
    })
}

/// Archive entry name for a file, rooted at the skill folder's name and
/// using `/` separators regardless of platform.
fn arc_entry_name(skill_name: &str, rel: &Path) -> String {
    let mut parts = vec![skill_name.to_owned()];
    parts.extend(rel.components().map(|c| c.as_os_str().to_string_lossy().into_owned()));
    parts.join("/")
}
