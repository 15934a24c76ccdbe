//! Generic driver that executes a `KatSuite` using a pluggable engine

use crate::suites::kat::engine::KatEngine;
use crate::suites::kat::error::KatError;
use crate::suites::kat::model::{Expectation, KatSuite};

/// Pass/fail tally for one suite
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    /// `(tgId, tcId, reason)` for every failed case
    pub failures: Vec<(u32, u32, String)>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.passed > 0
    }
}

/// Thin wrapper that walks suites and tallies results
pub struct Runner<'e, E: KatEngine> {
    engine: &'e E,
}

impl<'e, E: KatEngine> Runner<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    pub fn run_suite(&self, suite: &KatSuite) -> RunSummary {
        let mut summary = RunSummary::default();

        for group in &suite.test_groups {
            println!(
                "Running group {}: {} ({} cases)",
                group.tg_id,
                suite.algorithm,
                group.tests.len()
            );

            for case in &group.tests {
                let outcome = self.engine.run(group, case);

                let verdict = match (outcome, case.expected_result) {
                    (Ok(()), Expectation::Valid) => Ok(()),
                    // only a rejection by the primitive counts as an expected failure
                    (Err(KatError::Crypto(_)), Expectation::Fail) => Ok(()),
                    (Ok(()), Expectation::Fail) => Err("accepted but expected fail".to_string()),
                    (Err(e), _) => Err(e.to_string()),
                };

                match verdict {
                    Ok(()) => summary.passed += 1,
                    Err(reason) => {
                        eprintln!("Case {}/{} failed: {}", group.tg_id, case.tc_id, reason);
                        summary.failed += 1;
                        summary.failures.push((group.tg_id, case.tc_id, reason));
                    }
                }
            }
        }

        println!(
            "{}: {} passed, {} failed",
            suite.algorithm, summary.passed, summary.failed
        );
        summary
    }
}
