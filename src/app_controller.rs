use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::{FileManager, ModuleCatalog};
use crate::providers::{build_translator, Translator};
use crate::translation::{CatalogTranslator, MergeOptions, MergeStats};

// @module: Application controller for module catalog translation

/// Statistics of a whole run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Per-module statistics in processing order
    pub modules: Vec<(String, MergeStats)>,

    /// Sum over all modules
    pub totals: MergeStats,
}

impl RunSummary {
    fn add(&mut self, module: &str, stats: MergeStats) {
        self.totals.absorb(&stats);
        self.modules.push((module.to_string(), stats));
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Translation backend shared by every module
    translator: Arc<dyn Translator>,
    // @field: Whether to draw progress bars
    show_progress: bool,
}

impl Controller {
    // @method: Create a new controller with the backend selected in the configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let translator = build_translator(&config.translation, &config.source_language)?;
        Ok(Self::with_translator(config, translator))
    }

    /// Create a controller around an explicit backend
    pub fn with_translator(config: Config, translator: Arc<dyn Translator>) -> Self {
        Self {
            config,
            translator,
            show_progress: false,
        }
    }

    /// Draw a progress bar per module while translating
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find the modules under `base_dir`, failing when there is none
    pub fn discover(&self, base_dir: &Path) -> Result<Vec<ModuleCatalog>, AppError> {
        if !FileManager::dir_exists(base_dir) {
            return Err(AppError::NoModulesFound(base_dir.to_path_buf()));
        }

        let modules = FileManager::find_modules(base_dir, &self.config.catalog, &self.config.locale)?;
        if modules.is_empty() {
            return Err(AppError::NoModulesFound(base_dir.to_path_buf()));
        }
        Ok(modules)
    }

    /// Keep only the module called `name` when one is requested
    pub fn select(modules: Vec<ModuleCatalog>, name: Option<&str>) -> Result<Vec<ModuleCatalog>, AppError> {
        let Some(name) = name else {
            return Ok(modules);
        };

        let selected: Vec<ModuleCatalog> = modules.into_iter().filter(|m| m.name == name).collect();
        if selected.is_empty() {
            return Err(AppError::ModuleNotFound(name.to_string()));
        }
        Ok(selected)
    }

    /// Translate every module under `base_dir`, or only `module`
    ///
    /// Finding nothing to do is not an error: it is reported and an empty
    /// summary is returned. A missing template or an IO failure stops the
    /// whole run.
    pub async fn run(&self, base_dir: &Path, module: Option<&str>) -> Result<RunSummary, AppError> {
        let start_time = Instant::now();

        let modules = match self.discover(base_dir).and_then(|modules| {
            info!("Found {} translatable modules:", modules.len());
            for found in &modules {
                info!("- {}", found.name);
            }
            Self::select(modules, module)
        }) {
            Ok(modules) => modules,
            Err(e @ (AppError::NoModulesFound(_) | AppError::ModuleNotFound(_))) => {
                warn!("{}", e);
                return Ok(RunSummary::default());
            }
            Err(e) => return Err(e),
        };

        info!(
            "Translating with {} into {}",
            self.translator.name(),
            self.config.target_language
        );

        let mut summary = RunSummary::default();
        for module_catalog in &modules {
            let stats = self.translate_module(module_catalog).await?;
            summary.add(&module_catalog.name, stats);
        }

        info!(
            "All modules translated in {}: {} translated, {} untranslated",
            Self::format_duration(start_time.elapsed()),
            summary.totals.translated,
            summary.totals.untranslated()
        );

        Ok(summary)
    }

    /// Translate the template of one module into its catalog
    pub async fn translate_module(&self, module_catalog: &ModuleCatalog) -> Result<MergeStats, AppError> {
        info!("Translating module: {}", module_catalog.name);
        info!("Input file: {}", module_catalog.template_path.display());
        info!("Output file: {}", module_catalog.output_path.display());

        let catalog_translator = CatalogTranslator::new(
            Arc::clone(&self.translator),
            MergeOptions::from_config(&self.config),
        )
        .with_progress(self.progress_bar(&module_catalog.name));

        let stats = catalog_translator
            .translate_file(&module_catalog.template_path, &module_catalog.output_path)
            .await?;

        info!("Module {} done", module_catalog.name);
        Ok(stats)
    }

    fn progress_bar(&self, module: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} entries ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("#>-"));
        progress_bar.set_message(module.to_string());
        progress_bar
    }

    // Format duration in a human-readable format
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
