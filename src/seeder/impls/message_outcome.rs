use std::io;
use crate::seeder::enums::message_outcome::MessageOutcome;
use crate::seeder::seeder::{CLIENT_CLOSED, READ_TIMED_OUT};

impl From<io::Error> for MessageOutcome {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::UnexpectedEof
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe => MessageOutcome::CloseConnection(String::from(CLIENT_CLOSED)),
            io::ErrorKind::TimedOut => MessageOutcome::CloseConnection(String::from(READ_TIMED_OUT)),
            _ => MessageOutcome::CloseConnection(format!("Connection failure: {error}"))
        }
    }
}

impl MessageOutcome {
    /// Closes caused by the remote side simply going away.
    pub fn is_regular_close(&self) -> bool
    {
        matches!(self, MessageOutcome::CloseConnection(reason) if reason == CLIENT_CLOSED)
    }
}
