//! Normalized control axes to per-channel pulse widths.
//!
//! Standard RC servo timing: a pulse between 1000 and 2000 µs repeated
//! every 20 ms, with 1500 µs as the mechanical center. The ESC uses the
//! same range but measures power from the 1000 µs floor instead of from
//! center.

use flight_proto::FlightCommand;

/// Servo center pulse width in microseconds.
pub const SERVO_NEUTRAL_US: u16 = 1500;

/// Servo deflection from center at full stick, in microseconds.
pub const SERVO_HALF_RANGE_US: u16 = 500;

/// ESC pulse width at zero throttle, in microseconds.
pub const ESC_MIN_US: u16 = 1000;

/// ESC pulse width span from idle to full throttle, in microseconds.
pub const ESC_RANGE_US: u16 = 1000;

/// Lower bound of every output pulse, in microseconds.
pub const PULSE_MIN_US: u16 = 1000;

/// Upper bound of every output pulse, in microseconds.
pub const PULSE_MAX_US: u16 = 2000;

/// The four physical output channels, in fixed application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorChannel {
    /// Aileron servo.
    RollServo,
    /// Elevator servo.
    PitchServo,
    /// Rudder servo.
    YawServo,
    /// Motor speed controller.
    ThrottleEsc,
}

impl ActuatorChannel {
    /// All channels in application order.
    pub const ALL: [Self; 4] = [
        Self::RollServo,
        Self::PitchServo,
        Self::YawServo,
        Self::ThrottleEsc,
    ];
}

/// One pulse width per output channel, in microseconds.
///
/// Every value lies in [[`PULSE_MIN_US`], [`PULSE_MAX_US`]]. Produced once
/// per accepted command (or fail-safe trigger) and handed straight to the
/// sink; never retained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorPulses {
    pub roll_servo: u16,
    pub pitch_servo: u16,
    pub yaw_servo: u16,
    pub throttle_esc: u16,
}

impl ActuatorPulses {
    /// The safe posture: surfaces centered, throttle cut.
    pub const FAILSAFE: Self = Self {
        roll_servo: SERVO_NEUTRAL_US,
        pitch_servo: SERVO_NEUTRAL_US,
        yaw_servo: SERVO_NEUTRAL_US,
        throttle_esc: ESC_MIN_US,
    };

    /// Pulse width for one channel.
    #[must_use]
    pub const fn get(&self, channel: ActuatorChannel) -> u16 {
        match channel {
            ActuatorChannel::RollServo => self.roll_servo,
            ActuatorChannel::PitchServo => self.pitch_servo,
            ActuatorChannel::YawServo => self.yaw_servo,
            ActuatorChannel::ThrottleEsc => self.throttle_esc,
        }
    }
}

/// Map a command to pulse widths.
///
/// Each axis is saturated to its domain first (roll/pitch/yaw to
/// [-1.0, 1.0], throttle to [0.0, 1.0]), then mapped linearly:
///
/// - servo = 1500 + axis × 500 µs
/// - esc = 1000 + throttle × 1000 µs
///
/// Fractional microseconds are truncated toward zero. Pure and
/// deterministic; the result is always inside the pulse range no matter how
/// far out of domain the input is.
#[must_use]
pub fn mix(command: &FlightCommand) -> ActuatorPulses {
    ActuatorPulses {
        roll_servo: servo_pulse(command.roll),
        pitch_servo: servo_pulse(command.pitch),
        yaw_servo: servo_pulse(command.yaw),
        throttle_esc: esc_pulse(command.throttle),
    }
}

#[inline]
fn servo_pulse(axis: f32) -> u16 {
    let axis = sanitize(axis).clamp(-1.0, 1.0);
    (SERVO_NEUTRAL_US as f32 + axis * SERVO_HALF_RANGE_US as f32) as u16
}

#[inline]
fn esc_pulse(throttle: f32) -> u16 {
    let throttle = sanitize(throttle).clamp(0.0, 1.0);
    (ESC_MIN_US as f32 + throttle * ESC_RANGE_US as f32) as u16
}

/// NaN cannot reach the mixer through `decode`; map it to the channel's
/// neutral input anyway so the pulse range invariant holds for any float.
#[inline]
fn sanitize(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}
