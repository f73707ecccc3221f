use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

/// Document extensions mdxlate translates
const DOCUMENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Sidecar category filenames whose labels get translated
const CATEGORY_FILE_NAMES: [&str; 2] = ["_category_.yml", "_category_.yaml"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Check if a path has a translatable document extension (.md/.mdx)
    pub fn is_document<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .map(|ext| {
                DOCUMENT_EXTENSIONS
                    .iter()
                    .any(|candidate| ext.to_string_lossy().eq_ignore_ascii_case(candidate))
            })
            .unwrap_or(false)
    }

    /// Find all Markdown/MDX documents under a directory
    pub fn find_documents<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if path.is_file() && Self::is_document(path) {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Find all `_category_` sidecar files under a directory
    pub fn find_category_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if path.is_file()
                && path
                    .file_name()
                    .map(|name| {
                        CATEGORY_FILE_NAMES
                            .iter()
                            .any(|candidate| name.to_string_lossy() == *candidate)
                    })
                    .unwrap_or(false)
            {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Compute the mirrored output path for an input file
    pub fn mirrored_output_path<P1, P2, P3>(input_root: P1, file: P2, output_root: P3) -> Result<PathBuf>
    where
        P1: AsRef<Path>,
        P2: AsRef<Path>,
        P3: AsRef<Path>,
    {
        let relative = file
            .as_ref()
            .strip_prefix(input_root.as_ref())
            .with_context(|| {
                format!(
                    "File {:?} is not under input directory {:?}",
                    file.as_ref(),
                    input_root.as_ref()
                )
            })?;
        Ok(output_root.as_ref().join(relative))
    }

    /// Check if any of the given substrings occurs in the path
    pub fn path_matches_any<P: AsRef<Path>>(path: P, substrings: &[String]) -> bool {
        let haystack = path.as_ref().to_string_lossy();
        substrings.iter().any(|fragment| !fragment.is_empty() && haystack.contains(fragment))
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Copy a file from one location to another, ensuring the target directory exists
    pub fn copy_file<P1: AsRef<Path>, P2: AsRef<Path>>(from: P1, to: P2) -> Result<()> {
        let from = from.as_ref();
        let to = to.as_ref();

        if !from.exists() {
            return Err(anyhow::anyhow!("Source file does not exist: {:?}", from));
        }

        // Ensure the target directory exists
        if let Some(parent) = to.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::copy(from, to)?;

        Ok(())
    }
}
