//! One build: registry → merges → phase means → catalog → outputs.

use anyhow::{Context, Result};
use tracing::info;

use crate::charts::{ChartCatalog, build_catalog, publish_charts};
use crate::config::BuildConfig;
use crate::output::{render, write_outputs};
use crate::phase::{PhaseSummary, aggregate_phases};
use crate::record::{SchoolIndex, SchoolRecord};
use crate::registry::RegistryEntry;
use crate::sources::{
    BiasSource, DonationSource, MergeSummary, RankingSource, StaffingSource, merge_source,
};

/// Everything a build computes, before anything is written.
#[derive(Debug, Clone)]
pub struct Consolidated {
    /// Records in registry order.
    pub records: Vec<SchoolRecord>,
    pub catalog: ChartCatalog,
    /// One entry per source file that was present.
    pub merges: Vec<MergeSummary>,
    pub phase: Option<PhaseSummary>,
}

/// What a completed build wrote.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub schools: usize,
    pub charts: usize,
    pub charts_copied: usize,
    pub merges: Vec<MergeSummary>,
    pub phase: Option<PhaseSummary>,
}

/// Seeds the index from `registry`, merges every source in a fixed order,
/// adds phase means and lists the charts.
#[tracing::instrument(skip_all, fields(root = %config.root.display(), schools = registry.len()))]
pub fn consolidate(config: &BuildConfig, registry: &[RegistryEntry]) -> Result<Consolidated> {
    let mut index = SchoolIndex::from_registry(registry)?;
    let paths = &config.sources;

    let merges = [
        merge_source::<BiasSource>(&paths.bias, &mut index)
            .with_context(|| format!("merging {}", paths.bias.display()))?,
        merge_source::<DonationSource>(&paths.donations, &mut index)
            .with_context(|| format!("merging {}", paths.donations.display()))?,
        merge_source::<RankingSource>(&paths.ranking, &mut index)
            .with_context(|| format!("merging {}", paths.ranking.display()))?,
        merge_source::<StaffingSource>(&paths.staffing, &mut index)
            .with_context(|| format!("merging {}", paths.staffing.display()))?,
    ]
    .into_iter()
    .flatten()
    .collect();

    let phase = aggregate_phases(
        &paths.tweets,
        &paths.assessments,
        &config.phase_windows,
        &mut index,
    )
    .context("aggregating phase scores")?;

    let catalog = build_catalog(&config.charts, &config.chart_extension)
        .context("listing chart directories")?;

    Ok(Consolidated {
        records: index.into_records(),
        catalog,
        merges,
        phase,
    })
}

/// Runs a full build and writes `schools.json`, `charts.json` and the chart
/// copies. Nothing is written unless consolidation and rendering succeed.
pub fn run(config: &BuildConfig, registry: &[RegistryEntry]) -> Result<BuildReport> {
    let consolidated = consolidate(config, registry)?;
    let rendered = render(&consolidated.records, &consolidated.catalog)
        .context("serializing outputs")?;

    let data_dir = config.data_out_dir();
    let (schools_path, charts_path) = write_outputs(&data_dir, &rendered)
        .with_context(|| format!("writing outputs to {}", data_dir.display()))?;

    let charts_dir = config.charts_out_dir();
    let charts_copied = publish_charts(&config.charts, &charts_dir)
        .with_context(|| format!("copying charts to {}", charts_dir.display()))?;

    info!(
        schools = consolidated.records.len(),
        path = %schools_path.display(),
        "Wrote schools"
    );
    info!(
        charts = consolidated.catalog.total(),
        path = %charts_path.display(),
        "Wrote chart catalog"
    );

    Ok(BuildReport {
        schools: consolidated.records.len(),
        charts: consolidated.catalog.total(),
        charts_copied,
        merges: consolidated.merges,
        phase: consolidated.phase,
    })
}
