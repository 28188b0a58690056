// src/sink.rs
use std::io::{self, Write};
use std::net::{Shutdown, TcpStream};

/// A response output stream: the write capability plus explicit finalization.
///
/// `Write` carries the byte-acceptance contract. `close` is kept separate
/// from it so that only the owner of the response lifecycle can finalize the
/// stream; wrappers that must not close (the JSON writer's sink guard, for
/// one) implement `Write` alone and simply never gain the capability.
pub trait ResponseSink: Write {
    /// Finalizes the stream. Called at most once, by the lifecycle owner.
    fn close(&mut self) -> io::Result<()>;
}

impl ResponseSink for TcpStream {
    fn close(&mut self) -> io::Result<()> {
        self.shutdown(Shutdown::Write)
    }
}
