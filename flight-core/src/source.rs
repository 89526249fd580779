//! Command source trait and error types.

use core::future::Future;

/// Error type for datagram reception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceError {
    /// Transport-level receive fault.
    Io,
}

/// Async trait for command datagram sources.
///
/// This trait abstracts where raw command packets come from (UDP socket,
/// loopback test harness), so the control loop never touches the network
/// stack directly.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap
/// allocation.
pub trait CommandSource {
    /// Receive the next pending datagram into `buf`.
    ///
    /// Resolves to `Ok(Some(len))` with the delivered byte count when a
    /// datagram was waiting, or `Ok(None)` when the link is idle.
    /// Implementations must bound the wait (a poll interval, not an
    /// indefinite block) so the caller's liveness check keeps running, and
    /// must deliver at most one datagram per call; anything the transport
    /// queued beyond that is simply dropped.
    ///
    /// A datagram longer than `buf` may be truncated into it. The reported
    /// length still differs from the packet size, so such datagrams are
    /// rejected downstream.
    fn poll(&mut self, buf: &mut [u8]) -> impl Future<Output = Result<Option<usize>, SourceError>>;
}
