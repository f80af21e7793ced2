//! Default output names used by the binaries.

use std::{ffi::{OsStr, OsString}, path::{Path, PathBuf}};

pub const COMPRESSED_SUFFIX: &str = "_compressed";
pub const DECOMPRESSED_SUFFIX: &str = "_decompressed";
pub const ARTIFACT_EXTENSION: &str = "huff";
pub const PROPERTIES_EXTENSION: &str = "properties";

fn with_suffix(path: &Path, suffix: &str, extension: Option<&OsStr>) -> PathBuf {
    let mut name = OsString::from(path.file_stem().unwrap_or_default());
    name.push(suffix);

    if let Some(extension) = extension {
        name.push(".");
        name.push(extension);
    }

    path.with_file_name(name)
}

/// `dir/name.ext` -> `dir/name_compressed.huff`
pub fn compressed_path(source: &Path) -> PathBuf {
    with_suffix(source, COMPRESSED_SUFFIX, Some(OsStr::new(ARTIFACT_EXTENSION)))
}

/// `dir/name.ext` -> `dir/name_decompressed.ext`
pub fn decompressed_path(source: &Path) -> PathBuf {
    with_suffix(source, DECOMPRESSED_SUFFIX, source.extension())
}

/// `dir/name_compressed.huff` -> `dir/name_compressed.huff.properties`
pub fn properties_path(artifact: &Path) -> PathBuf {
    let mut name = artifact.as_os_str().to_owned();
    name.push(".");
    name.push(PROPERTIES_EXTENSION);
    PathBuf::from(name)
}

#[test]
fn test_compressed_path() {
    assert_eq!(compressed_path(Path::new("texts/USConstitution.txt")), PathBuf::from("texts/USConstitution_compressed.huff"));
    assert_eq!(compressed_path(Path::new("README")), PathBuf::from("README_compressed.huff"));
    assert_eq!(compressed_path(Path::new("archive.tar.gz")), PathBuf::from("archive.tar_compressed.huff"));
}

#[test]
fn test_decompressed_path() {
    assert_eq!(decompressed_path(Path::new("texts/USConstitution.txt")), PathBuf::from("texts/USConstitution_decompressed.txt"));
    assert_eq!(decompressed_path(Path::new("README")), PathBuf::from("README_decompressed"));
}

#[test]
fn test_properties_path() {
    assert_eq!(properties_path(Path::new("out/a_compressed.huff")), PathBuf::from("out/a_compressed.huff.properties"));
}
