//! Platform-agnostic actuator control for a UDP-commanded RC aircraft.
//!
//! This crate provides the core of the receiver without any
//! platform-specific dependencies: it maps decoded flight commands to servo
//! and ESC pulse widths and enforces the fail-safe that neutralizes the
//! aircraft when commands stop arriving. It can be used both in embedded
//! `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`mixer`]: Normalized axes to pulse widths ([`mix`], [`ActuatorPulses`])
//! - [`failsafe`]: Command liveness tracking ([`FailsafeMonitor`])
//! - [`source`]: Datagram source trait ([`CommandSource`])
//! - [`sink`]: Actuator output trait ([`ActuatorSink`])
//! - [`bridge`]: Orchestrates one control cycle ([`ControlBridge`])
//!
//! # Control cycle
//!
//! Each [`ControlBridge::step`] polls the source for at most one datagram,
//! decodes and mixes it, applies the pulses to the sink, and then runs the
//! liveness check. A malformed datagram is dropped without touching the
//! actuators or the liveness clock; 1000 ms without a valid command forces
//! the fixed fail-safe posture (surfaces neutral, throttle cut) exactly
//! once.
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod bridge;
pub mod failsafe;
pub mod mixer;
pub mod sink;
pub mod source;

// Re-export main types at crate root
pub use bridge::{ControlBridge, StepEvent, MAX_DATAGRAM_LEN};
pub use failsafe::{FailsafeMonitor, LinkState, COMMAND_TIMEOUT};
pub use flight_proto::{decode, encode, DecodeError, FlightCommand, PACKET_LEN};
pub use mixer::{mix, ActuatorChannel, ActuatorPulses};
pub use sink::ActuatorSink;
pub use source::{CommandSource, SourceError};
