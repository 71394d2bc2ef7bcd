//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit detailed cache (de)serialization logs.
    pub print_serde: bool,
    /// Emit the metrics summary (last values of every derived column) after augmentation.
    pub print_metrics_summary: bool,
    /// Emit a log line when each chart window opens and closes.
    pub print_chart_events: bool,
    /// Emit every row dropped while decoding the provider response.
    pub print_dropped_rows: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_serde: false,
    print_metrics_summary: true,
    print_chart_events: true,
    print_dropped_rows: false,
};
