use ccr_data::classify::{BiasLabel, Tier};
use ccr_data::config::BuildConfig;
use ccr_data::output::read_schools;
use ccr_data::pipeline::run;
use ccr_data::registry::master_schools;
use std::fs;
use std::path::Path;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn seed(root: &Path) -> BuildConfig {
    let config = BuildConfig::new(root, root.join("webapp"));
    let s = &config.sources;

    write(
        &s.bias,
        "school,mean_score,n_tweets\n\
         Harvard,-52.3456,1200\n\
         BYU,22.1,300\n\
         NotASchool,0,1\n",
    );
    write(
        &s.donations,
        "school,dem_pct,rep_pct,total_donations,n_contributions,fec_bias_score\n\
         Harvard,95.26,4.74,2500000.4,8000,-90.521\n",
    );
    write(
        &s.ranking,
        "handle,fire_rank,fire_score,fire_grade\n\
         UChicago,1,78.123,B\n",
    );
    write(&s.staffing, "handle,staff_count\nHarvard,31\nHillsdaleCollg,0\n");
    write(
        &s.tweets,
        "school,tweet_id,created_at\n\
         Harvard,1,2021-06-01\n\
         Harvard,2,2021-01-01\n\
         Harvard,3,2015-03-03T10:00:00Z\n\
         Harvard,4,garbage\n",
    );
    write(
        &s.assessments,
        "school,tweet_id,score\n\
         Harvard,1,10\n\
         Harvard,2,20\n\
         Harvard,3,-7.5\n\
         Harvard,4,99\n\
         Harvard,5,99\n",
    );

    write(&config.charts.core.join("02_fec.png"), "png");
    write(&config.charts.core.join("01_bias.png"), "png");
    write(&config.charts.core.join("README.md"), "not a chart");
    write(&config.charts.hypothesis.join("h1.png"), "png");

    config
}

#[test]
fn test_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let config = seed(dir.path());

    let report = run(&config, master_schools()).expect("build failed");

    assert_eq!(report.schools, master_schools().len());
    assert_eq!(report.charts, 3);
    assert_eq!(report.charts_copied, 4);
    assert_eq!(report.merges.len(), 4);
    assert_eq!(report.merges[0].unknown, 1);

    let records = read_schools(&config.data_out_dir().join("schools.json")).unwrap();
    let handles: Vec<_> = records.iter().map(|r| r.handle.as_str()).collect();
    let expected: Vec<_> = master_schools().iter().map(|e| e.handle).collect();
    assert_eq!(handles, expected);

    let harvard = records.iter().find(|r| r.handle == "Harvard").unwrap();
    assert_eq!(harvard.state, "MA");
    assert_eq!(harvard.tier, Tier::Top25);
    let bias = harvard.bias.as_ref().unwrap();
    assert_eq!(bias.bias_score, -52.35);
    assert_eq!(bias.tweet_count, 1200);
    assert_eq!(bias.bias_label, BiasLabel::StrongLiberal);
    let fec = harvard.donations.as_ref().unwrap();
    assert_eq!(fec.fec_dem_pct, Some(95.3));
    assert_eq!(fec.fec_rep_pct, Some(4.7));
    assert_eq!(fec.fec_total, 2_500_000);
    assert_eq!(fec.fec_bias_score, -90.52);
    assert_eq!(harvard.staffing.as_ref().unwrap().dei_staff, 31);
    assert_eq!(harvard.phases.phase1, Some(-7.5));
    assert_eq!(harvard.phases.phase2, Some(15.0));
    assert_eq!(harvard.phases.phase3, None);

    let byu = records.iter().find(|r| r.handle == "BYU").unwrap();
    assert_eq!(byu.tier, Tier::ConservativeHighlight);
    assert_eq!(byu.rank, 999);
    assert_eq!(byu.rank_display, "NR");
    assert_eq!(byu.bias.as_ref().unwrap().bias_label, BiasLabel::Conservative);

    let chicago = records.iter().find(|r| r.handle == "UChicago").unwrap();
    let fire = chicago.ranking.as_ref().unwrap();
    assert_eq!(fire.fire_score, 78.12);
    assert_eq!(fire.fire_grade, "B");
    assert!(chicago.bias.is_none());

    let hillsdale = records.iter().find(|r| r.handle == "HillsdaleCollg").unwrap();
    assert_eq!(hillsdale.staffing.as_ref().unwrap().dei_staff, 0);

    let mit = records.iter().find(|r| r.handle == "MIT").unwrap();
    assert!(mit.is_identity_only());
}

#[test]
fn test_absent_fields_are_omitted_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = seed(dir.path());
    run(&config, master_schools()).unwrap();

    let raw = fs::read_to_string(config.data_out_dir().join("schools.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let mit = value
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["handle"] == "MIT")
        .unwrap();

    assert!(mit.get("biasScore").is_none());
    assert!(mit.get("phase1").is_none());
    assert!(mit.get("deiStaff").is_none());
    assert_eq!(mit["tier"], "Top 25");
    assert!(!raw.contains("null"));
}

#[test]
fn test_chart_catalog_and_copies() {
    let dir = tempfile::tempdir().unwrap();
    let config = seed(dir.path());
    run(&config, master_schools()).unwrap();

    let raw = fs::read_to_string(config.data_out_dir().join("charts.json")).unwrap();
    let catalog: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(catalog["core"], serde_json::json!(["01_bias.png", "02_fec.png"]));
    assert_eq!(catalog["cultural"], serde_json::json!([]));
    assert_eq!(catalog["hypothesis"], serde_json::json!(["h1.png"]));

    let published = config.charts_out_dir();
    assert!(published.join("core/01_bias.png").exists());
    // publishing is a verbatim copy, not filtered like the catalog
    assert!(published.join("core/README.md").exists());
    assert!(!published.join("cultural").exists());
}

#[test]
fn test_no_sources_gives_identity_records() {
    let dir = tempfile::tempdir().unwrap();
    let config = BuildConfig::new(dir.path(), dir.path().join("webapp"));

    let report = run(&config, master_schools()).unwrap();

    assert!(report.merges.is_empty());
    assert!(report.phase.is_none());
    let records = read_schools(&config.data_out_dir().join("schools.json")).unwrap();
    assert_eq!(records.len(), master_schools().len());
    assert!(records.iter().all(|r| r.is_identity_only()));
}

#[test]
fn test_rebuild_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = seed(dir.path());
    let path = config.data_out_dir().join("schools.json");

    run(&config, master_schools()).unwrap();
    let first = fs::read(&path).unwrap();
    run(&config, master_schools()).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}
