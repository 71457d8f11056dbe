use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::app_config::CatalogConfig;

// @module: File and directory utilities

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
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
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

    /// Find the translatable modules directly under `base_dir`
    ///
    /// A module is a directory holding the manifest marker file. Only
    /// modules whose i18n directory contains `<module>.pot` are returned,
    /// sorted by name.
    pub fn find_modules<P: AsRef<Path>>(
        base_dir: P,
        catalog: &CatalogConfig,
        locale: &str,
    ) -> Result<Vec<ModuleCatalog>> {
        let base_dir = base_dir.as_ref();
        let mut modules = Vec::new();

        for entry in WalkDir::new(base_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.context("Failed to read directory entry")?;
            let module_dir = entry.path();

            if !entry.file_type().is_dir() || !Self::file_exists(module_dir.join(&catalog.manifest_marker)) {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let i18n_dir = module_dir.join(&catalog.i18n_dir);
            let template_path = i18n_dir.join(format!("{}.pot", name));

            if Self::file_exists(&template_path) {
                modules.push(ModuleCatalog {
                    output_path: i18n_dir.join(format!("{}.po", locale)),
                    name,
                    template_path,
                });
            }
        }

        Ok(modules)
    }
}

/// A discovered module and the catalogs it translates between
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCatalog {
    /// Module (directory) name
    pub name: String,

    /// `<module>/i18n/<module>.pot`
    pub template_path: PathBuf,

    /// `<module>/i18n/<locale>.po`
    pub output_path: PathBuf,
}
