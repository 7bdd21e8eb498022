use crate::graph::ExecutionSummary;
use crate::rule::{ExecutionRecord, ExecutionStatus};

/// Rolls up the given executions. The latest run is the one with the greatest
/// `started_at`; on equal timestamps the later record wins.
pub(super) fn summarize<'a>(
    records: impl IntoIterator<Item = &'a ExecutionRecord>,
) -> ExecutionSummary {
    let mut summary = ExecutionSummary::default();
    let mut latest: Option<&ExecutionRecord> = None;

    for record in records {
        summary.total += 1;
        match record.status {
            ExecutionStatus::Success => summary.succeeded += 1,
            ExecutionStatus::Failed => summary.failed += 1,
            ExecutionStatus::Pending => summary.pending += 1,
        }
        if latest.is_none_or(|l| record.started_at >= l.started_at) {
            latest = Some(record);
        }
    }

    if let Some(record) = latest {
        summary.last_status = Some(record.status);
        summary.last_started_at = Some(record.started_at.clone());
    }
    summary
}
