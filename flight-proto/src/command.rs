//! The decoded four-axis flight command.

/// One flight control update, as decoded from a single datagram.
///
/// Axis conventions follow the transmitter: roll/pitch/yaw are
/// signed-normalized (nominally [-1.0, 1.0]), throttle is
/// unsigned-normalized (nominally [0.0, 1.0]). The nominal domains are
/// enforced by the mixer's saturation, not here; a freshly decoded command
/// may carry any finite value.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlightCommand {
    /// Aileron axis, negative rolls left.
    pub roll: f32,
    /// Elevator axis, negative pitches down.
    pub pitch: f32,
    /// Rudder axis, negative yaws left.
    pub yaw: f32,
    /// Motor power, 0.0 is idle.
    pub throttle: f32,
}

impl FlightCommand {
    /// All surfaces centered, throttle at idle.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            throttle: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_is_all_zero() {
        let cmd = FlightCommand::neutral();
        assert_eq!(cmd.roll, 0.0);
        assert_eq!(cmd.pitch, 0.0);
        assert_eq!(cmd.yaw, 0.0);
        assert_eq!(cmd.throttle, 0.0);
    }
}
