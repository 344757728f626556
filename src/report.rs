use std::path::Path;

use junit_report::{Duration, ReportBuilder, TestCaseBuilder, TestSuiteBuilder};
use num_format::{Locale, ToFormattedString};
use prettytable::{Cell, Row, Table};

use crate::{TbError, TbResult};

pub struct RunRecord {
    pub name: String,
    /// Ok carries the reported result line, Err the failure message.
    pub result: Result<String, String>,
    pub time_secs: f64,
    pub sim_time_ns: u64,
}

/// Collects per-script outcomes of a testbench run and renders them as a
/// summary table and a JUnit `results.xml`.
#[derive(Default)]
pub struct RunReport {
    runs: Vec<RunRecord>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, run: RunRecord) {
        self.runs.push(run);
    }

    pub fn passed(&self) -> bool {
        self.runs.iter().all(|r| r.result.is_ok())
    }

    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(
            ["test", "result", "time [s]", "sim time [ns]", "speed [ns/s]"]
                .iter()
                .map(|h| Cell::new(h))
                .collect(),
        ));
        for run in &self.runs {
            let result = match &run.result {
                Ok(_) => "passed",
                Err(_) => "failed",
            };
            let speed = if run.time_secs > 0.0 {
                format!("{:.0}", run.sim_time_ns as f64 / run.time_secs)
            } else {
                "-".to_string()
            };
            table.add_row(Row::new(vec![
                Cell::new(&run.name),
                Cell::new(result),
                Cell::new(&format!("{:.3}", run.time_secs)),
                Cell::new(&run.sim_time_ns.to_formatted_string(&Locale::en)),
                Cell::new(&speed),
            ]));
        }
        table
    }

    pub fn write_junit(&self, path: &Path, suite_name: &str) -> TbResult<()> {
        let mut test_cases = Vec::new();
        for run in &self.runs {
            let tc = match &run.result {
                Ok(_) => TestCaseBuilder::success(&run.name, Duration::seconds_f64(run.time_secs)),
                Err(e) => TestCaseBuilder::failure(
                    &run.name,
                    Duration::seconds_f64(run.time_secs),
                    "failure",
                    e,
                ),
            }
            .build();
            test_cases.push(tc);
        }

        let test_suite = TestSuiteBuilder::new(suite_name)
            .add_testcases(test_cases)
            .build();
        let report = ReportBuilder::new().add_testsuite(test_suite).build();
        let file = std::fs::File::create(path)?;
        report
            .write_xml(file)
            .map_err(|e| TbError::Report(format!("{:?}", e)))?;
        Ok(())
    }
}
