//! Fixed configuration injected at initialization.
//!
//! The core crates are free of these values; everything hardware- or
//! network-specific is named here and nowhere else.

use embassy_time::Duration;

/// Access-point SSID the transmitter joins.
pub const WIFI_SSID: &str = "PicoW-RCPlane";

/// WPA2 passphrase for the access point.
pub const WIFI_PASSWORD: &str = "rcplane123";

/// 2.4 GHz channel for the access point.
pub const WIFI_CHANNEL: u8 = 5;

/// Receiver address on the self-hosted network, /24.
pub const AP_ADDRESS: [u8; 4] = [192, 168, 4, 1];

/// Well-known command port.
pub const UDP_PORT: u16 = 4444;

/// Upper bound on one datagram wait; sets the control loop cadence and how
/// often the liveness check runs while the link is quiet.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// PWM counter wrap: 20 000 ticks of 1 µs -> 20 ms frame, 50 Hz.
pub const PWM_WRAP_US: u16 = 20_000;

/// 125 MHz system clock / 125 -> 1 MHz counter, 1 µs per tick.
pub const PWM_CLOCK_DIVIDER: u8 = 125;
