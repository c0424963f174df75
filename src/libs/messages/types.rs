#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,

    // === REPORT MESSAGES ===
    ReportHeader(String), // date
    WeekHeader,
    NoRecordsFound,

    // === STATUS MESSAGES ===
    StatusMode(String),    // current mode
    BreakReminder,

    // === MODE MESSAGES ===
    TrackingPaused,
    TrackingResumed,

    // === WATCHER MESSAGES ===
    WatcherStarted(u64), // poll interval in seconds
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherShuttingDown,
    WatcherTickFailed(String),
    WatcherClosedOpenInterval,
}
