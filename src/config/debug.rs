//! Debugging feature flags.
//!
//! Toggle individual diagnostics here. Only UI interaction logging is on by
//! default; every flag is further gated by `cfg(debug_assertions)`, so release
//! builds stay quiet regardless.

pub struct DebugFlags {
    /// Emit per-record diagnostics while parsing the flux feed.
    pub print_feed_parsing: bool,
    /// Emit flux cache hit/miss/expiry events.
    pub print_cache_events: bool,
    /// Emit UI interaction logs (slider moves, shielding changes, refreshes).
    pub print_ui_interactions: bool,
    /// Emit a line every time the risk report is rebuilt.
    pub print_report_rebuilds: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_feed_parsing: false,
    print_cache_events: false,
    print_ui_interactions: true,
    print_report_rebuilds: false,
    print_state_serde: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ui_interactions_log_by_default() {
        let flags = DEBUG_FLAGS;
        let noisy = [
            flags.print_feed_parsing,
            flags.print_cache_events,
            flags.print_report_rebuilds,
            flags.print_state_serde,
        ];
        assert!(noisy.iter().all(|on| !on));
        assert!(flags.print_ui_interactions);
    }
}
