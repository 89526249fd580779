//! UDP to servo/ESC RC plane receiver for the Raspberry Pi Pico W.
//!
//! This crate provides the embedded half of the receiver: the core decode,
//! mix, and fail-safe logic lives in [`flight_core`], and everything here
//! adapts it to the Pico W hardware.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico W (RP2040 + CYW43439) and:
//! 1. Raises a WPA2 access point and binds a UDP socket on port 4444
//! 2. Decodes each 16-byte command datagram (roll, pitch, yaw, throttle)
//! 3. Drives three servos and one ESC with 50 Hz pulse-width signals
//! 4. Forces surfaces neutral and throttle cut when commands stop for 1 s
//!
//! # Hardware Configuration
//!
//! | Function     | GPIO  | Description                    |
//! |--------------|-------|--------------------------------|
//! | Roll servo   | 0     | PWM0 A                         |
//! | Pitch servo  | 1     | PWM0 B                         |
//! | Yaw servo    | 2     | PWM1 A                         |
//! | Throttle ESC | 3     | PWM1 B                         |
//! | CYW43 radio  | 23-29 | On-board Wi-Fi (fixed wiring)  |
//!
//! # Architecture
//!
//! Embassy tasks: the radio driver and network stack run on their own
//! tasks; a single control task owns the [`ControlBridge`] and with it all
//! actuator and liveness state. One cycle per 10 ms poll window, one
//! datagram per cycle.
//!
//! # Modules
//!
//! - [`config`]: Fixed network/PWM constants
//! - [`net`]: CYW43 bring-up and access-point mode ([`start_access_point`])
//! - [`source`]: UDP command source ([`UdpCommandSource`])
//! - [`output`]: PWM actuator sink ([`PwmActuatorSink`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`flight_core`] for
//! convenience, so the binary only needs to depend on this crate.

#![no_std]

// Re-export core types for convenience
pub use flight_core::{
    decode, encode, mix, ActuatorChannel, ActuatorPulses, ActuatorSink, CommandSource,
    ControlBridge, DecodeError, FailsafeMonitor, FlightCommand, LinkState, SourceError, StepEvent,
    COMMAND_TIMEOUT, MAX_DATAGRAM_LEN, PACKET_LEN,
};

pub mod config;
pub mod net;
pub mod output;
pub mod source;

pub use net::{start_access_point, RadioPins};
pub use output::{servo_pwm_config, PwmActuatorSink};
pub use source::UdpCommandSource;
