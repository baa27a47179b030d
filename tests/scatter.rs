use kira_trialsdash::dataset::{TrialDataset, TrialRecord};
use kira_trialsdash::derive::{SENTINEL_YEAR, bubble_size};
use kira_trialsdash::palette::SCATTER_PALETTE;
use kira_trialsdash::views::{EnrollmentRange, build_scatter};

fn rec(title: &str, phase: &str, status: &str, enrollment: u64, start: &str, results: &str) -> TrialRecord {
    TrialRecord {
        phase: phase.to_string(),
        status: status.to_string(),
        enrollment,
        title: title.to_string(),
        start_date: start.to_string(),
        results_date: results.to_string(),
    }
}

fn dataset() -> TrialDataset {
    TrialDataset::new(vec![
        rec("A", "Phase 1", "Completed", 120, "January 2015", "March 3, 2018"),
        rec("B", "Phase 1", "Recruiting", 480, "May 2019", ""),
        rec("C", "Phase 2", "Completed", 250, "", ""),
        rec("D", "Phase 1", "Completed", 90, "2012", "2014"),
        rec("E", "Phase 1", "Completed", 300, "2013", "2016"),
    ])
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn point_range_without_matches_is_empty() {
    let ds = dataset();
    let range = EnrollmentRange::new(0.0, 0.0).unwrap();
    let rows = build_scatter(
        &ds,
        &names(&["Phase 1", "Phase 2"]),
        &names(&["Completed", "Recruiting"]),
        &range,
    );
    assert!(rows.is_empty());
}

#[test]
fn bounds_are_inclusive() {
    let ds = dataset();
    let range = EnrollmentRange::new(120.0, 480.0).unwrap();
    let rows = build_scatter(
        &ds,
        &names(&["Phase 1"]),
        &names(&["Completed", "Recruiting"]),
        &range,
    );
    let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "E", "B"]);
}

#[test]
fn empty_selections_yield_no_rows() {
    let ds = dataset();
    let range = EnrollmentRange::new(0.0, 10_000.0).unwrap();
    assert!(build_scatter(&ds, &[], &names(&["Completed"]), &range).is_empty());
    assert!(build_scatter(&ds, &names(&["Phase 1"]), &[], &range).is_empty());
}

#[test]
fn derived_columns() {
    let ds = dataset();
    let range = EnrollmentRange::new(0.0, 10_000.0).unwrap();
    let rows = build_scatter(
        &ds,
        &names(&["Phase 1", "Phase 2"]),
        &names(&["Completed", "Recruiting"]),
        &range,
    );

    let a = rows.iter().find(|r| r.title == "A").unwrap();
    assert_eq!(a.start_year, 2015);
    assert_eq!(a.results_year, 2018);
    assert_eq!(a.enrollment_size, bubble_size(120));
    assert_eq!(a.start_date, "January 2015");

    let c = rows.iter().find(|r| r.title == "C").unwrap();
    assert_eq!(c.start_year, SENTINEL_YEAR);
    assert_eq!(c.results_year, SENTINEL_YEAR);
}

#[test]
fn color_follows_selection_order() {
    let ds = dataset();
    let range = EnrollmentRange::new(0.0, 10_000.0).unwrap();
    let rows = build_scatter(
        &ds,
        &names(&["Phase 2", "Phase 1"]),
        &names(&["Completed"]),
        &range,
    );

    assert_eq!(rows[0].phase, "Phase 1");
    assert!(rows.iter().filter(|r| r.phase == "Phase 2").all(|r| r.color == SCATTER_PALETTE[0]));
    assert!(rows.iter().filter(|r| r.phase == "Phase 1").all(|r| r.color == SCATTER_PALETTE[1]));
}

#[test]
fn sorted_by_phase_with_stable_inner_order() {
    let ds = dataset();
    let range = EnrollmentRange::new(0.0, 10_000.0).unwrap();
    let rows = build_scatter(
        &ds,
        &names(&["Phase 2", "Phase 1"]),
        &names(&["Recruiting", "Completed"]),
        &range,
    );
    let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "A", "D", "E", "C"]);
}

#[test]
fn identical_inputs_identical_output() {
    let ds = dataset();
    let range = EnrollmentRange::new(100.0, 500.0).unwrap();
    let phases = names(&["Phase 1", "Phase 2"]);
    let statuses = names(&["Completed", "Recruiting"]);
    assert_eq!(
        build_scatter(&ds, &phases, &statuses, &range),
        build_scatter(&ds, &phases, &statuses, &range)
    );
}

#[test]
fn reversed_range_rejected() {
    assert!(EnrollmentRange::new(500.0, 100.0).is_err());
    assert!(EnrollmentRange::new(f64::INFINITY, 100.0).is_err());
}
