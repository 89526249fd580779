//! Binary codec for the 16-byte command packet.
//!
//! Byte order is fixed little-endian on the wire, independent of the host.
//! Field order: roll, pitch, yaw, throttle.

use crate::command::FlightCommand;

/// Exact wire size of a command packet in bytes.
pub const PACKET_LEN: usize = 16;

/// Error type for packet decoding.
///
/// Neither kind is fatal; a failed datagram is simply dropped and the next
/// one is decoded on its own merits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Buffer length is not exactly [`PACKET_LEN`] bytes.
    WrongSize,
    /// One or more fields is a NaN bit pattern.
    InvalidValue,
}

/// Decode a raw datagram into a [`FlightCommand`].
///
/// Rejects any buffer whose length is not exactly 16 bytes before
/// interpreting a single byte, and rejects NaN in any field. Finite
/// out-of-range values are accepted; the mixer saturates them.
///
/// # Example
///
/// ```
/// use flight_proto::{decode, DecodeError};
///
/// assert_eq!(decode(&[0u8; 15]), Err(DecodeError::WrongSize));
/// // All-ones is a NaN bit pattern in every field.
/// assert_eq!(decode(&[0xFF; 16]), Err(DecodeError::InvalidValue));
/// ```
pub fn decode(buf: &[u8]) -> Result<FlightCommand, DecodeError> {
    if buf.len() != PACKET_LEN {
        return Err(DecodeError::WrongSize);
    }

    let command = FlightCommand {
        roll: read_f32(buf, 0),
        pitch: read_f32(buf, 4),
        yaw: read_f32(buf, 8),
        throttle: read_f32(buf, 12),
    };

    if command.roll.is_nan()
        || command.pitch.is_nan()
        || command.yaw.is_nan()
        || command.throttle.is_nan()
    {
        return Err(DecodeError::InvalidValue);
    }

    Ok(command)
}

/// Encode a [`FlightCommand`] into its wire representation.
///
/// Exact inverse of [`decode`]: same field order, same little-endian layout.
/// Used by the transmitter side and by tests; no validation is applied.
#[must_use]
pub fn encode(command: &FlightCommand) -> [u8; PACKET_LEN] {
    let mut buf = [0u8; PACKET_LEN];
    buf[0..4].copy_from_slice(&command.roll.to_le_bytes());
    buf[4..8].copy_from_slice(&command.pitch.to_le_bytes());
    buf[8..12].copy_from_slice(&command.yaw.to_le_bytes());
    buf[12..16].copy_from_slice(&command.throttle.to_le_bytes());
    buf
}

/// Read one little-endian f32 field at `offset`.
///
/// Callers guarantee `offset + 4 <= buf.len()`.
#[inline]
fn read_f32(buf: &[u8], offset: usize) -> f32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buf[offset..offset + 4]);
    f32::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packet(roll: f32, pitch: f32, yaw: f32, throttle: f32) -> [u8; PACKET_LEN] {
        encode(&FlightCommand {
            roll,
            pitch,
            yaw,
            throttle,
        })
    }

    #[test]
    fn test_decode_returns_exact_field_values() {
        let cmd = decode(&packet(0.25, -0.5, 1.0, 0.75)).unwrap();
        assert_eq!(cmd.roll, 0.25);
        assert_eq!(cmd.pitch, -0.5);
        assert_eq!(cmd.yaw, 1.0);
        assert_eq!(cmd.throttle, 0.75);
    }

    #[test]
    fn test_decode_field_order_is_roll_pitch_yaw_throttle() {
        let mut buf = [0u8; PACKET_LEN];
        buf[0..4].copy_from_slice(&1.0f32.to_le_bytes());
        buf[12..16].copy_from_slice(&0.5f32.to_le_bytes());
        let cmd = decode(&buf).unwrap();
        assert_eq!(cmd.roll, 1.0);
        assert_eq!(cmd.pitch, 0.0);
        assert_eq!(cmd.yaw, 0.0);
        assert_eq!(cmd.throttle, 0.5);
    }

    #[test]
    fn test_decode_all_zero_buffer_is_neutral() {
        assert_eq!(decode(&[0u8; 16]), Ok(FlightCommand::neutral()));
    }

    #[test]
    fn test_decode_rejects_short_and_long_buffers() {
        assert_eq!(decode(&[]), Err(DecodeError::WrongSize));
        assert_eq!(decode(&[0u8; 15]), Err(DecodeError::WrongSize));
        assert_eq!(decode(&[0u8; 17]), Err(DecodeError::WrongSize));
        assert_eq!(decode(&[0u8; 32]), Err(DecodeError::WrongSize));
    }

    #[test]
    fn test_decode_rejects_nan_in_each_field() {
        for field in 0..4 {
            let mut buf = [0u8; PACKET_LEN];
            let offset = field * 4;
            buf[offset..offset + 4].copy_from_slice(&f32::NAN.to_le_bytes());
            assert_eq!(
                decode(&buf),
                Err(DecodeError::InvalidValue),
                "NaN in field {field} must be rejected"
            );
        }
    }

    #[test]
    fn test_decode_all_ones_buffer_is_invalid_not_a_panic() {
        // 0xFFFFFFFF is a quiet NaN in every field.
        assert_eq!(decode(&[0xFF; 16]), Err(DecodeError::InvalidValue));
    }

    #[test]
    fn test_decode_accepts_out_of_range_finite_values() {
        let cmd = decode(&packet(1.0e30, -1.0e30, 5.0, -3.0)).unwrap();
        assert_eq!(cmd.roll, 1.0e30);
        assert_eq!(cmd.pitch, -1.0e30);
        assert_eq!(cmd.yaw, 5.0);
        assert_eq!(cmd.throttle, -3.0);
    }

    #[test]
    fn test_decode_accepts_infinities() {
        let cmd = decode(&packet(f32::INFINITY, f32::NEG_INFINITY, 0.0, 0.0)).unwrap();
        assert_eq!(cmd.roll, f32::INFINITY);
        assert_eq!(cmd.pitch, f32::NEG_INFINITY);
    }

    #[test]
    fn test_encode_decode_preserves_bit_patterns() {
        let original = FlightCommand {
            roll: -0.0,
            pitch: f32::MIN_POSITIVE,
            yaw: -1.0,
            throttle: 0.1,
        };
        let decoded = decode(&encode(&original)).unwrap();
        assert_eq!(decoded.roll.to_bits(), original.roll.to_bits());
        assert_eq!(decoded.pitch.to_bits(), original.pitch.to_bits());
        assert_eq!(decoded.yaw.to_bits(), original.yaw.to_bits());
        assert_eq!(decoded.throttle.to_bits(), original.throttle.to_bits());
    }

    #[test]
    fn test_encode_is_little_endian() {
        let buf = packet(1.0, 0.0, 0.0, 0.0);
        // 1.0f32 == 0x3F800000, little-endian on the wire.
        assert_eq!(&buf[0..4], &[0x00, 0x00, 0x80, 0x3F]);
    }
}
