//! PWM actuator sink.
//!
//! Four outputs on two RP2040 PWM slices, one slice per GPIO pair:
//!
//! | Channel      | GPIO | Slice/output |
//! |--------------|------|--------------|
//! | Roll servo   | 0    | PWM0 A       |
//! | Pitch servo  | 1    | PWM0 B       |
//! | Yaw servo    | 2    | PWM1 A       |
//! | Throttle ESC | 3    | PWM1 B       |
//!
//! With the divider at 125 the counter ticks at 1 MHz, so compare values
//! are pulse widths in microseconds directly.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::traits::ToFixed;
use flight_core::{ActuatorChannel, ActuatorSink};

use crate::config::{PWM_CLOCK_DIVIDER, PWM_WRAP_US};

/// Slice configuration for the 50 Hz servo frame.
///
/// Compare registers start at zero: no pulses are emitted until the bridge
/// applies its startup posture, so servos hold position and ESCs stay
/// disarmed through boot.
#[must_use]
pub fn servo_pwm_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.divider = PWM_CLOCK_DIVIDER.to_fixed();
    config.top = PWM_WRAP_US;
    config
}

/// Drives the four actuator channels through two PWM slices.
pub struct PwmActuatorSink<'d> {
    roll_pitch: Pwm<'d>,
    yaw_throttle: Pwm<'d>,
    roll_pitch_config: PwmConfig,
    yaw_throttle_config: PwmConfig,
}

impl<'d> PwmActuatorSink<'d> {
    /// Take ownership of the two slices, each created with
    /// [`servo_pwm_config`] on its GPIO pair.
    pub fn new(roll_pitch: Pwm<'d>, yaw_throttle: Pwm<'d>) -> Self {
        Self {
            roll_pitch,
            yaw_throttle,
            roll_pitch_config: servo_pwm_config(),
            yaw_throttle_config: servo_pwm_config(),
        }
    }
}

impl ActuatorSink for PwmActuatorSink<'_> {
    fn set_pulse(&mut self, channel: ActuatorChannel, microseconds: u16) {
        match channel {
            ActuatorChannel::RollServo => {
                self.roll_pitch_config.compare_a = microseconds;
                self.roll_pitch.set_config(&self.roll_pitch_config);
            }
            ActuatorChannel::PitchServo => {
                self.roll_pitch_config.compare_b = microseconds;
                self.roll_pitch.set_config(&self.roll_pitch_config);
            }
            ActuatorChannel::YawServo => {
                self.yaw_throttle_config.compare_a = microseconds;
                self.yaw_throttle.set_config(&self.yaw_throttle_config);
            }
            ActuatorChannel::ThrottleEsc => {
                self.yaw_throttle_config.compare_b = microseconds;
                self.yaw_throttle.set_config(&self.yaw_throttle_config);
            }
        }
    }
}
