use super::*;
use crate::chart::ChartSpec;

fn success(spec: &ChartSpec) -> JobSuccess {
    JobSuccess {
        id: spec.id(),
        kind: spec.kind(),
        metrics: spec.metrics().to_vec(),
        title: spec.title(),
        path: PathBuf::from(spec.id().file_name()),
        elapsed: Duration::from_millis(1),
    }
}

#[test]
fn totals_and_lookup() {
    let bar = ChartSpec::bar("t");
    let pie = ChartSpec::pie("t");
    let outcome = BatchOutcome {
        successes: vec![success(&bar)],
        failures: vec![JobFailure {
            id: pie.id(),
            error: PerfChartsError::EmptyDataset,
        }],
        cancelled: vec![ChartSpec::line("t").id()],
    };

    assert_eq!(outcome.total(), 3);
    assert!(!outcome.is_success());
    assert!(outcome.success(&bar.id()).is_some());
    assert!(outcome.failure(&pie.id()).is_some());
    assert!(outcome.success(&pie.id()).is_none());
}

#[test]
fn sort_orders_by_id() {
    let mut outcome = BatchOutcome {
        successes: vec![success(&ChartSpec::pie("b")), success(&ChartSpec::bar("a"))],
        failures: Vec::new(),
        cancelled: vec![ChartSpec::line("z").id(), ChartSpec::line("c").id()],
    };
    outcome.sort();

    let ids: Vec<&str> = outcome.successes.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a_bar", "b_pie"]);
    assert_eq!(outcome.cancelled[0].as_str(), "c_line");
}

#[test]
fn empty_outcome_is_success() {
    assert!(BatchOutcome::default().is_success());
}
