use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("cron expression must have 5 or 6 fields, got {0}")]
    FieldCount(usize),

    #[error("invalid cron expression '{expr}': {source}")]
    Parse {
        expr: String,
        #[source]
        source: cron::error::Error,
    },
}
