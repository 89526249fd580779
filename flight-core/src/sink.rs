//! Actuator output trait.

use crate::mixer::{ActuatorChannel, ActuatorPulses};

/// Trait for the hardware layer that owns the PWM outputs.
///
/// Infallible within the core's failure model: hardware faults are out of
/// scope, so a write either lands or the whole system is dead anyway.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap
/// allocation.
pub trait ActuatorSink {
    /// Apply a pulse width to one channel for the next 20 ms period.
    fn set_pulse(&mut self, channel: ActuatorChannel, microseconds: u16);

    /// Apply a full pulse set, walking the channels in fixed order.
    fn apply(&mut self, pulses: &ActuatorPulses) {
        for channel in ActuatorChannel::ALL {
            self.set_pulse(channel, pulses.get(channel));
        }
    }
}
