use crate::common::*;

#[doc = "Line format of the log files: `[timestamp] [LEVEL] [file:line] message`."]
fn log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        &record.args()
    )
}

#[doc = r#"
    Installs the global logger.

    Logs go to `logs/kenya_sales_*.log`, rotated daily and kept for 10 days.
    Warnings and errors are duplicated to stderr so they do not mix with the report on stdout.
    The level comes from `RUST_LOG` when set, `info` otherwise.

    # Returns
    * `LoggerHandle` - must stay alive until the program ends
"#]
pub fn set_global_logger() -> anyhow::Result<LoggerHandle> {
    let level: String = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let handle: LoggerHandle = Logger::try_with_str(&level)?
        .log_to_file(
            FileSpec::default()
                .directory("logs")
                .basename("kenya_sales"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(log_format)
        .duplicate_to_stderr(Duplicate::Warn)
        .start()
        .context("[logger_utils->set_global_logger] Failed to start logger")?;

    Ok(handle)
}
