#[cfg(feature = "mt")]
mod mt_tests {
    use std::path::Path;
    use std::sync::Arc;

    use kira_trialsdash::dashboard::{Dashboard, ViewDefaults};
    use kira_trialsdash::input::load_trials;
    use kira_trialsdash::surface::RecordingSurface;
    use kira_trialsdash::views::{
        EnrollmentRange, HistogramBins, ViewKind, build_histogram, build_scatter, build_summary,
    };

    #[test]
    fn parallel_startup_matches_builders() {
        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/trials.csv"));
        let ds = Arc::new(load_trials(path).unwrap());
        let defaults = ViewDefaults::default();
        let d = Dashboard::new(ds.clone(), &defaults, RecordingSurface::new()).unwrap();

        let bins = HistogramBins::new(100.0, 500.0, 50.0).unwrap();
        let range = EnrollmentRange::new(100.0, 500.0).unwrap();
        assert_eq!(d.surface().histogram(), build_histogram(&ds, &ds.phases(), &bins).as_slice());
        assert_eq!(
            d.surface().scatter(),
            build_scatter(&ds, &ds.phases(), &ds.statuses(), &range).as_slice()
        );
        assert_eq!(d.surface().summary(), build_summary(&ds).as_slice());
        assert_eq!(d.surface().publish_count(ViewKind::Scatter), 1);
    }

    #[test]
    fn parallel_startup_reports_invalid_default() {
        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/trials.csv"));
        let ds = Arc::new(load_trials(path).unwrap());
        let defaults = ViewDefaults {
            bin_width: 1e-300,
            ..ViewDefaults::default()
        };
        assert!(Dashboard::new(ds, &defaults, RecordingSurface::new()).is_err());
    }
}
