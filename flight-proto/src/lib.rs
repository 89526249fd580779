//! Wire types and binary codec for the UDP flight command packet.
//!
//! The transmitter sends one datagram per control update. Each datagram is a
//! fixed 16-byte payload of four IEEE-754 single-precision floats in
//! little-endian byte order:
//!
//! ```text
//! offset  0..4   roll      [-1.0, 1.0]
//! offset  4..8   pitch     [-1.0, 1.0]
//! offset  8..12  yaw       [-1.0, 1.0]
//! offset 12..16  throttle  [ 0.0, 1.0]
//! ```
//!
//! [`decode`] enforces the structural contract only: the exact 16-byte
//! length and non-NaN fields. Out-of-range but finite axis values pass
//! through untouched; saturating them to their domains is the mixer's job,
//! so a transmitter bug can never be promoted into a decode failure.
//!
//! # Example
//!
//! ```
//! use flight_proto::{decode, encode, FlightCommand};
//!
//! // 16 zero bytes decode to the neutral command.
//! let cmd = decode(&[0u8; 16]).unwrap();
//! assert_eq!(cmd, FlightCommand::neutral());
//!
//! // encode is the exact inverse layout.
//! assert_eq!(encode(&cmd), [0u8; 16]);
//! ```
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

pub mod codec;
pub mod command;

pub use codec::{decode, encode, DecodeError, PACKET_LEN};
pub use command::FlightCommand;
