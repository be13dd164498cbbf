//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log each outgoing trade submission with its request token.
    pub log_submissions: bool,

    /// Log when a stale in-flight response is dropped instead of applied.
    pub log_stale_drops: bool,

    /// Log the startup health probe attempts and outcome.
    pub log_health: bool,

    /// Log trade-log load/save activity.
    pub log_trade_log: bool,
}

pub const DF: LogFlags = LogFlags {
    log_submissions: true,
    log_stale_drops: true,
    log_health: true,
    log_trade_log: false,
};
