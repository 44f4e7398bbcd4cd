//! Where the build reads from and writes to.
//!
//! Defaults follow the project layout; a JSON file can override any of
//! them:
//! ```json
//! {
//!   "bias": "output/school_bias.csv",
//!   "charts_core": "/data/charts/core",
//!   "chart_extension": "png",
//!   "phase_windows": [
//!     { "start": 2012, "end": 2019 },
//!     { "start": 2020, "end": 2023 },
//!     { "start": 2024, "end": 2026 }
//!   ]
//! }
//! ```
//! Relative paths in the file are resolved against the data root.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::charts::ChartDirs;
use crate::error::{BuildError, Result};
use crate::phase::{DEFAULT_WINDOWS, WINDOW_COUNT, YearWindow, validate_windows};

/// Environment variable naming the data root.
pub const ROOT_ENV: &str = "CCR_ROOT";
/// Environment variable naming the web app directory.
pub const WEB_DIR_ENV: &str = "CCR_WEB_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub bias: PathBuf,
    pub donations: PathBuf,
    pub ranking: PathBuf,
    pub staffing: PathBuf,
    pub tweets: PathBuf,
    pub assessments: PathBuf,
}

impl SourcePaths {
    pub fn under(root: &Path) -> Self {
        SourcePaths {
            bias: root.join("output/school_bias.csv"),
            donations: root.join("output/fec_donations.csv"),
            ranking: root.join("data/fire_rankings.csv"),
            staffing: root.join("scrapers/dei/data/dei_staffing.csv"),
            tweets: root.join("data/tweets.csv"),
            assessments: root.join("data/assessments.csv"),
        }
    }
}

/// Overrides read from `--config`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub bias: Option<PathBuf>,
    pub donations: Option<PathBuf>,
    pub ranking: Option<PathBuf>,
    pub staffing: Option<PathBuf>,
    pub tweets: Option<PathBuf>,
    pub assessments: Option<PathBuf>,
    pub charts_core: Option<PathBuf>,
    pub charts_cultural: Option<PathBuf>,
    pub charts_hypothesis: Option<PathBuf>,
    pub chart_extension: Option<String>,
    pub phase_windows: Option<[YearWindow; WINDOW_COUNT]>,
}

impl ConfigFile {
    /// Loads overrides from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub root: PathBuf,
    pub web_dir: PathBuf,
    pub sources: SourcePaths,
    pub charts: ChartDirs,
    pub chart_extension: String,
    pub phase_windows: [YearWindow; WINDOW_COUNT],
}

impl BuildConfig {
    /// Default layout for a data root and web app directory.
    pub fn new(root: impl Into<PathBuf>, web_dir: impl Into<PathBuf>) -> Self {
        let root = root.into();
        BuildConfig {
            sources: SourcePaths::under(&root),
            charts: ChartDirs::under(&root),
            chart_extension: "png".to_string(),
            phase_windows: DEFAULT_WINDOWS,
            web_dir: web_dir.into(),
            root,
        }
    }

    /// Resolves the configuration from explicit arguments, then the
    /// environment, then defaults, and applies `config_file` on top.
    pub fn resolve(
        root: Option<PathBuf>,
        web_dir: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let root = root
            .or_else(|| std::env::var_os(ROOT_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        let web_dir = web_dir
            .or_else(|| std::env::var_os(WEB_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| root.join("webapp"));

        let mut config = BuildConfig::new(root, web_dir);
        if let Some(path) = config_file {
            config.apply(ConfigFile::load(path)?);
        }
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides, resolving relative paths against the data root.
    pub fn apply(&mut self, file: ConfigFile) {
        let root = self.root.clone();
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { root.join(p) };

        let targets = [
            (file.bias, &mut self.sources.bias),
            (file.donations, &mut self.sources.donations),
            (file.ranking, &mut self.sources.ranking),
            (file.staffing, &mut self.sources.staffing),
            (file.tweets, &mut self.sources.tweets),
            (file.assessments, &mut self.sources.assessments),
            (file.charts_core, &mut self.charts.core),
            (file.charts_cultural, &mut self.charts.cultural),
            (file.charts_hypothesis, &mut self.charts.hypothesis),
        ];
        for (value, target) in targets {
            if let Some(p) = value {
                *target = resolve(p);
            }
        }

        if let Some(ext) = file.chart_extension {
            self.chart_extension = ext.trim_start_matches('.').to_string();
        }
        if let Some(windows) = file.phase_windows {
            self.phase_windows = windows;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.chart_extension.is_empty() {
            return Err(BuildError::Config("chart_extension is empty".to_string()));
        }
        validate_windows(&self.phase_windows)
    }

    /// Directory receiving `schools.json` and `charts.json`.
    pub fn data_out_dir(&self) -> PathBuf {
        self.web_dir.join("public").join("data")
    }

    /// Directory receiving the copied chart images.
    pub fn charts_out_dir(&self) -> PathBuf {
        self.web_dir.join("public").join("charts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = BuildConfig::new("/ccr", "/ccr/webapp");
        assert_eq!(config.sources.bias, PathBuf::from("/ccr/output/school_bias.csv"));
        assert_eq!(
            config.sources.staffing,
            PathBuf::from("/ccr/scrapers/dei/data/dei_staffing.csv")
        );
        assert_eq!(config.charts.cultural, PathBuf::from("/ccr/charts/cultural"));
        assert_eq!(config.data_out_dir(), PathBuf::from("/ccr/webapp/public/data"));
        assert_eq!(config.charts_out_dir(), PathBuf::from("/ccr/webapp/public/charts"));
        assert_eq!(config.phase_windows, DEFAULT_WINDOWS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_apply_overrides() {
        let file: ConfigFile = serde_json::from_str(
            r#"{
                "bias": "alt/bias.csv",
                "tweets": "/abs/tweets.csv",
                "chart_extension": ".svg",
                "phase_windows": [
                    {"start": 2010, "end": 2014},
                    {"start": 2015, "end": 2019},
                    {"start": 2020, "end": 2025}
                ]
            }"#,
        )
        .unwrap();
        let mut config = BuildConfig::new("/ccr", "/web");
        config.apply(file);

        assert_eq!(config.sources.bias, PathBuf::from("/ccr/alt/bias.csv"));
        assert_eq!(config.sources.tweets, PathBuf::from("/abs/tweets.csv"));
        assert_eq!(config.sources.ranking, PathBuf::from("/ccr/data/fire_rankings.csv"));
        assert_eq!(config.chart_extension, "svg");
        assert_eq!(config.phase_windows[0], YearWindow::new(2010, 2014));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: std::result::Result<ConfigFile, _> =
            serde_json::from_str(r#"{"bais": "typo.csv"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_with_file_validates_windows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ccr.json");
        std::fs::write(
            &path,
            r#"{"phase_windows": [
                {"start": 2012, "end": 2021},
                {"start": 2020, "end": 2023},
                {"start": 2024, "end": 2026}
            ]}"#,
        )
        .unwrap();

        let err = BuildConfig::resolve(
            Some(dir.path().to_path_buf()),
            Some(dir.path().join("web")),
            Some(&path),
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::Config(_)));
    }

    #[test]
    fn test_resolve_explicit_dirs() {
        let config =
            BuildConfig::resolve(Some(PathBuf::from("/data")), Some(PathBuf::from("/site")), None)
                .unwrap();
        assert_eq!(config.root, PathBuf::from("/data"));
        assert_eq!(config.web_dir, PathBuf::from("/site"));
    }
}
