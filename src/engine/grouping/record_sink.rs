use crate::engine::core::Record;

/// A sink that consumes the records of one grouping run and yields the output rows.
pub trait RecordSink {
    /// Called once per input record, in input order
    fn on_record(&mut self, record: &Record);

    /// Consumes the sink and produces the output rows
    fn into_rows(self) -> Vec<Record>
    where
        Self: Sized;
}

/// Collects records unchanged; used when no group-by field is configured.
#[derive(Debug, Default)]
pub struct PassthroughSink {
    rows: Vec<Record>,
}

impl PassthroughSink {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }
}

impl RecordSink for PassthroughSink {
    fn on_record(&mut self, record: &Record) {
        self.rows.push(record.clone());
    }

    fn into_rows(self) -> Vec<Record> {
        self.rows
    }
}
