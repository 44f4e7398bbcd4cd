//! Chart image catalog and publishing.
//!
//! The catalog is a flat listing: no filtering by school and no link to the
//! records. Publishing copies each category directory verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCategory {
    Core,
    Cultural,
    Hypothesis,
}

impl ChartCategory {
    pub const ALL: [ChartCategory; 3] = [
        ChartCategory::Core,
        ChartCategory::Cultural,
        ChartCategory::Hypothesis,
    ];

    /// Key in `charts.json` and directory name under `charts/`.
    pub fn name(&self) -> &'static str {
        match self {
            ChartCategory::Core => "core",
            ChartCategory::Cultural => "cultural",
            ChartCategory::Hypothesis => "hypothesis",
        }
    }
}

/// Source directory for each chart category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDirs {
    pub core: PathBuf,
    pub cultural: PathBuf,
    pub hypothesis: PathBuf,
}

impl ChartDirs {
    /// `<root>/charts/<category>` for every category.
    pub fn under(root: &Path) -> Self {
        let charts = root.join("charts");
        ChartDirs {
            core: charts.join(ChartCategory::Core.name()),
            cultural: charts.join(ChartCategory::Cultural.name()),
            hypothesis: charts.join(ChartCategory::Hypothesis.name()),
        }
    }

    pub fn get(&self, category: ChartCategory) -> &Path {
        match category {
            ChartCategory::Core => &self.core,
            ChartCategory::Cultural => &self.cultural,
            ChartCategory::Hypothesis => &self.hypothesis,
        }
    }
}

/// Contents of `charts.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartCatalog {
    pub core: Vec<String>,
    pub cultural: Vec<String>,
    pub hypothesis: Vec<String>,
}

impl ChartCatalog {
    fn get_mut(&mut self, category: ChartCategory) -> &mut Vec<String> {
        match category {
            ChartCategory::Core => &mut self.core,
            ChartCategory::Cultural => &mut self.cultural,
            ChartCategory::Hypothesis => &mut self.hypothesis,
        }
    }

    pub fn total(&self) -> usize {
        self.core.len() + self.cultural.len() + self.hypothesis.len()
    }
}

/// Names of the files directly inside `dir` with extension `ext`, sorted.
///
/// A missing directory yields an empty list.
pub fn list_images(dir: &Path, ext: &str) -> Result<Vec<String>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "Chart directory not found");
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(ext) {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Lists every category.
#[tracing::instrument(skip(dirs))]
pub fn build_catalog(dirs: &ChartDirs, ext: &str) -> Result<ChartCatalog> {
    let mut catalog = ChartCatalog::default();
    for category in ChartCategory::ALL {
        *catalog.get_mut(category) = list_images(dirs.get(category), ext)?;
    }
    info!(
        core = catalog.core.len(),
        cultural = catalog.cultural.len(),
        hypothesis = catalog.hypothesis.len(),
        "Chart catalog built"
    );
    Ok(catalog)
}

/// Copies each existing category directory to `<dest>/<category>`,
/// replacing what was there. Returns the number of files copied.
#[tracing::instrument(skip(dirs), fields(dest = %dest.display()))]
pub fn publish_charts(dirs: &ChartDirs, dest: &Path) -> Result<usize> {
    let mut copied = 0;
    for category in ChartCategory::ALL {
        let src = dirs.get(category);
        if !src.is_dir() {
            continue;
        }
        let target = dest.join(category.name());
        if target.exists() {
            fs::remove_dir_all(&target)?;
        }
        let n = copy_tree(src, &target)?;
        info!(category = category.name(), files = n, dest = %target.display(), "Charts copied");
        copied += n;
    }
    Ok(copied)
}

fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    fs::create_dir_all(dst)?;
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let to = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_tree(&entry.path(), &to)?;
        } else {
            fs::copy(entry.path(), &to)?;
            copied += 1;
        }
    }
    Ok(copied)
}
