#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use covering_solver::solve;
use covering_solver::statistics::configure_statistic_logging;
use covering_solver::statistics::should_log_statistics;
use covering_solver::SolveOptions;
use helpers::small_matrix;

#[derive(Clone, Debug, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Statistic logging is configured once per process, so this is the only test in this binary.
#[test]
fn statistics_of_a_solve_are_logged_once_configured() {
    let buffer = SharedBuffer::default();
    assert!(!should_log_statistics());

    configure_statistic_logging(
        "stat:",
        Some("stat-end"),
        None,
        Some(Box::new(buffer.clone())),
    );
    let mut matrix = small_matrix();
    let _ = solve(&mut matrix, &SolveOptions::default()).unwrap();

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    let lines = output.lines().collect::<Vec<_>>();
    for statistic in ["num_nodes", "num_branches", "num_incumbents", "peak_depth"] {
        let prefix = format!("stat: exact_{statistic}=");
        assert!(lines.iter().any(|line| line.starts_with(&prefix)), "{statistic} missing");
    }
    assert_eq!(Some(&"stat-end"), lines.last());
}
