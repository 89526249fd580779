//! ControlBridge: connects a command source to an actuator sink.

use core::time::Duration;

use crate::failsafe::{FailsafeMonitor, COMMAND_TIMEOUT};
use crate::mixer::{mix, ActuatorPulses};
use crate::sink::ActuatorSink;
use crate::source::{CommandSource, SourceError};
use flight_proto::{decode, DecodeError};

/// Receive buffer size for one poll.
///
/// Larger than a packet, so an oversized datagram reports its truncated
/// length instead of reading as exactly 16 bytes.
pub const MAX_DATAGRAM_LEN: usize = 32;

/// What one control cycle did.
///
/// The bridge itself stays silent; the caller decides what to log. Dropped
/// datagrams and fail-safe engagement are expected operating conditions,
/// not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum StepEvent {
    /// A valid command was mixed and applied to the actuators.
    Command(ActuatorPulses),
    /// No datagram was waiting this cycle.
    Idle,
    /// A datagram arrived but was dropped; outputs and liveness unchanged.
    Dropped(DecodeError),
    /// The command link lapsed; the safe posture was just applied.
    Failsafe,
}

/// Drives the actuators from a datagram source, gated by the fail-safe
/// monitor.
///
/// One instance owns the whole receive path: poll → decode → mix → apply,
/// followed by the liveness check. All state lives here (no globals), so
/// the bridge is constructor-injected into the control loop and fully
/// testable on host.
pub struct ControlBridge<S, A> {
    source: S,
    sink: A,
    monitor: FailsafeMonitor,
}

impl<S: CommandSource, A: ActuatorSink> ControlBridge<S, A> {
    /// Create a bridge with the standard 1000 ms command timeout.
    pub fn new(source: S, sink: A) -> Self {
        Self::with_timeout(source, sink, COMMAND_TIMEOUT)
    }

    /// Create a bridge with a custom command timeout.
    pub fn with_timeout(source: S, sink: A, timeout: Duration) -> Self {
        Self {
            source,
            sink,
            monitor: FailsafeMonitor::new(timeout),
        }
    }

    /// Neutralize the outputs before the first datagram.
    ///
    /// Called exactly once at startup, independent of the check cadence:
    /// the monitor starts lapsed, so the periodic check alone would never
    /// write the initial posture.
    pub fn startup(&mut self) {
        self.sink.apply(&ActuatorPulses::FAILSAFE);
    }

    /// Run one control cycle at time `now`.
    ///
    /// Polls the source for at most one datagram. A valid packet is mixed,
    /// applied, and re-arms the fail-safe window; a malformed one is
    /// dropped with no state change. The liveness check runs last either
    /// way, forcing the safe posture exactly once when the window lapses.
    pub async fn step(&mut self, now: Duration) -> Result<StepEvent, SourceError> {
        let mut buf = [0u8; MAX_DATAGRAM_LEN];
        let event = match self.source.poll(&mut buf).await? {
            Some(len) => match decode(&buf[..len]) {
                Ok(command) => {
                    let pulses = mix(&command);
                    self.sink.apply(&pulses);
                    self.monitor.record_command(now);
                    StepEvent::Command(pulses)
                }
                Err(e) => StepEvent::Dropped(e),
            },
            None => StepEvent::Idle,
        };

        if self.monitor.check(now) {
            self.sink.apply(&ActuatorPulses::FAILSAFE);
            return Ok(StepEvent::Failsafe);
        }

        Ok(event)
    }

    /// Get a reference to the fail-safe monitor.
    pub fn monitor(&self) -> &FailsafeMonitor {
        &self.monitor
    }

    /// Get a reference to the command source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the command source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the actuator sink.
    pub fn sink(&self) -> &A {
        &self.sink
    }

    /// Get a mutable reference to the actuator sink.
    pub fn sink_mut(&mut self) -> &mut A {
        &mut self.sink
    }

    /// Decompose the bridge into its source and sink.
    pub fn into_parts(self) -> (S, A) {
        (self.source, self.sink)
    }
}
