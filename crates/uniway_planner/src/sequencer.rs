use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Sequenced<T> {
    pub sequence: u64,
    pub value: T,
}

/// Tags requests with increasing sequence numbers and only publishes the
/// answer to the most recently issued one. Published values reach a single
/// consumer through a watch channel.
pub struct RouteSequencer<T> {
    issued: Mutex<u64>,
    sender: watch::Sender<Option<Sequenced<T>>>,
}

impl<T> RouteSequencer<T> {
    pub fn new() -> (Self, watch::Receiver<Option<Sequenced<T>>>) {
        let (sender, receiver) = watch::channel(None);

        (
            RouteSequencer {
                issued: Mutex::new(0),
                sender,
            },
            receiver,
        )
    }

    pub fn issue(&self) -> u64 {
        let mut issued = self.issued.lock();
        *issued += 1;
        *issued
    }

    pub fn latest(&self) -> u64 {
        *self.issued.lock()
    }

    /// Returns `false` and drops `value` when a newer request was issued
    /// after `sequence`.
    pub fn publish(&self, sequence: u64, value: T) -> bool {
        // Held across the send so no request can be issued in between
        let issued = self.issued.lock();

        if sequence != *issued {
            debug!(sequence, latest = *issued, "Discarding stale route response");
            return false;
        }

        self.sender.send_replace(Some(Sequenced { sequence, value }));
        true
    }
}
