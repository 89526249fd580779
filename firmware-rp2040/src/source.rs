//! UDP command source.

use embassy_net::udp::{RecvError, UdpSocket};
use embassy_time::{with_timeout, Duration};
use flight_core::{CommandSource, SourceError};

/// Adapts an embassy-net UDP socket to [`CommandSource`].
///
/// Each poll waits at most `poll_interval` for one datagram; the timeout is
/// what paces the control loop and guarantees the liveness check runs while
/// the link is quiet. Datagrams the socket queues beyond one per poll age
/// out of its ring buffer on their own; there is no command queue here.
pub struct UdpCommandSource<'a> {
    socket: UdpSocket<'a>,
    poll_interval: Duration,
}

impl<'a> UdpCommandSource<'a> {
    /// Wrap a socket already bound to the command port.
    pub fn new(socket: UdpSocket<'a>, poll_interval: Duration) -> Self {
        Self {
            socket,
            poll_interval,
        }
    }
}

impl CommandSource for UdpCommandSource<'_> {
    async fn poll(&mut self, buf: &mut [u8]) -> Result<Option<usize>, SourceError> {
        match with_timeout(self.poll_interval, self.socket.recv_from(buf)).await {
            Ok(Ok((len, _peer))) => Ok(Some(len)),
            // A datagram larger than the caller's buffer; report the
            // truncated length so it is rejected as wrong-size downstream.
            Ok(Err(RecvError::Truncated)) => Ok(Some(buf.len())),
            Err(_timeout) => Ok(None),
        }
    }
}
