//! Command liveness tracking.
//!
//! Timestamps are [`core::time::Duration`] offsets from an arbitrary
//! startup epoch, injected by the caller on every call, so the monitor
//! carries no clock of its own and tests can drive time directly.

use core::time::Duration;

/// Maximum interval between valid commands before fail-safe engages.
pub const COMMAND_TIMEOUT: Duration = Duration::from_millis(1000);

/// Whether the actuators currently reflect commands or the safe posture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// A valid command arrived within the timeout window.
    Live,
    /// No recent valid command; the safe posture is in effect.
    Failsafe,
}

/// Tracks time since the last accepted command and decides when the safe
/// posture must be forced.
///
/// Starts in [`LinkState::Failsafe`]; the bridge applies the posture once at
/// startup before any datagram can arrive. [`record_command`] and [`check`]
/// are the only mutators and neither blocks.
///
/// [`record_command`]: FailsafeMonitor::record_command
/// [`check`]: FailsafeMonitor::check
#[derive(Debug)]
pub struct FailsafeMonitor {
    timeout: Duration,
    last_command: Duration,
    state: LinkState,
}

impl FailsafeMonitor {
    /// Create a monitor with the given timeout window.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            last_command: Duration::ZERO,
            state: LinkState::Failsafe,
        }
    }

    /// Note a valid command accepted at `now`.
    ///
    /// Re-arms the timeout window and returns the link to
    /// [`LinkState::Live`] from either state.
    pub fn record_command(&mut self, now: Duration) {
        self.last_command = now;
        self.state = LinkState::Live;
    }

    /// Run the periodic liveness check.
    ///
    /// Returns `true` exactly once per lapse, at the first call where more
    /// than the timeout has passed since the last accepted command; the
    /// caller must then force the safe posture. Further calls are no-ops
    /// until a command re-arms the monitor, so the check is safe to run
    /// every cycle.
    #[must_use]
    pub fn check(&mut self, now: Duration) -> bool {
        if self.state == LinkState::Live && now.saturating_sub(self.last_command) > self.timeout {
            self.state = LinkState::Failsafe;
            return true;
        }
        false
    }

    /// Current link state.
    #[must_use]
    pub const fn state(&self) -> LinkState {
        self.state
    }

    /// True while actuators reflect the most recent command.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self.state, LinkState::Live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_starts_in_failsafe_without_triggering() {
        let mut monitor = FailsafeMonitor::new(COMMAND_TIMEOUT);
        assert_eq!(monitor.state(), LinkState::Failsafe);
        // No command ever arrived; there is nothing to newly engage.
        assert!(!monitor.check(ms(0)));
        assert!(!monitor.check(ms(10_000)));
    }

    #[test]
    fn test_stays_live_within_window() {
        let mut monitor = FailsafeMonitor::new(COMMAND_TIMEOUT);
        monitor.record_command(ms(0));
        assert!(monitor.is_live());
        assert!(!monitor.check(ms(999)));
        assert!(monitor.is_live());
        // Exactly at the boundary the window has not yet been exceeded.
        assert!(!monitor.check(ms(1000)));
        assert!(monitor.is_live());
    }

    #[test]
    fn test_engages_exactly_once_after_timeout() {
        let mut monitor = FailsafeMonitor::new(COMMAND_TIMEOUT);
        monitor.record_command(ms(0));
        assert!(monitor.check(ms(1001)));
        assert_eq!(monitor.state(), LinkState::Failsafe);
        // Idempotent from here on.
        assert!(!monitor.check(ms(1001)));
        assert!(!monitor.check(ms(5000)));
    }

    #[test]
    fn test_command_rearms_from_failsafe() {
        let mut monitor = FailsafeMonitor::new(COMMAND_TIMEOUT);
        monitor.record_command(ms(0));
        assert!(monitor.check(ms(2000)));
        monitor.record_command(ms(3000));
        assert!(monitor.is_live());
        assert!(!monitor.check(ms(3999)));
        assert!(monitor.check(ms(4001)));
    }

    #[test]
    fn test_command_refresh_extends_window() {
        let mut monitor = FailsafeMonitor::new(COMMAND_TIMEOUT);
        monitor.record_command(ms(0));
        monitor.record_command(ms(900));
        assert!(!monitor.check(ms(1800)));
        assert!(monitor.check(ms(1901)));
    }

    #[test]
    fn test_clock_behind_last_command_does_not_underflow() {
        let mut monitor = FailsafeMonitor::new(COMMAND_TIMEOUT);
        monitor.record_command(ms(500));
        assert!(!monitor.check(ms(0)));
        assert!(monitor.is_live());
    }
}
