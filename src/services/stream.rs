//! Multicast value streams drained on the UI thread
//!
//! A [`Subject`] fans each emission out to every live subscriber over an
//! mpsc channel. Subscribers hold a [`StreamSource`] and drain it with
//! `try_recv` from the event loop, so emissions are processed in order, one
//! at a time, without blocking.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// A single message on a stream
#[derive(Debug, Clone, PartialEq)]
pub enum StreamMessage<T> {
    Next(T),
    Error(String),
    Complete,
}

/// Producer side of a stream with any number of subscribers
pub struct Subject<T> {
    subscribers: Vec<Sender<StreamMessage<T>>>,
    closed: bool,
}

impl<T: Clone> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Subject<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            closed: false,
        }
    }

    /// Register a new subscriber. Subscribing to a closed subject yields a
    /// source that completes immediately.
    pub fn subscribe(&mut self) -> StreamSource<T> {
        let (tx, rx) = mpsc::channel();
        if self.closed {
            let _ = tx.send(StreamMessage::Complete);
        } else {
            self.subscribers.push(tx);
        }
        StreamSource::new(rx)
    }

    /// Emit a value to every subscriber. Subscribers that went away are
    /// dropped.
    pub fn next(&mut self, value: T) {
        if self.closed {
            return;
        }
        self.broadcast(StreamMessage::Next(value));
    }

    /// Terminate the stream with an error. The services in this binary end
    /// their streams by dropping the subject instead.
    #[allow(dead_code)]
    pub fn error(&mut self, reason: impl Into<String>) {
        if self.closed {
            return;
        }
        self.broadcast(StreamMessage::Error(reason.into()));
        self.close();
    }

    /// Terminate the stream normally
    #[allow(dead_code)]
    pub fn complete(&mut self) {
        if self.closed {
            return;
        }
        self.broadcast(StreamMessage::Complete);
        self.close();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn broadcast(&mut self, message: StreamMessage<T>) {
        self.subscribers
            .retain(|tx| tx.send(message.clone()).is_ok());
    }

    fn close(&mut self) {
        self.closed = true;
        self.subscribers.clear();
    }
}

/// Consumer side of a stream
pub struct StreamSource<T> {
    receiver: Receiver<StreamMessage<T>>,
    finished: bool,
}

impl<T> StreamSource<T> {
    fn new(receiver: Receiver<StreamMessage<T>>) -> Self {
        Self {
            receiver,
            finished: false,
        }
    }

    /// Drain every pending message in emission order.
    ///
    /// At most one terminal message (`Error` or `Complete`) is ever returned.
    /// A producer that disappears without terminating the stream is reported
    /// as `Complete`.
    pub fn drain(&mut self) -> Vec<StreamMessage<T>> {
        let mut messages = Vec::new();
        if self.finished {
            return messages;
        }

        loop {
            match self.receiver.try_recv() {
                Ok(StreamMessage::Next(value)) => messages.push(StreamMessage::Next(value)),
                Ok(terminal) => {
                    self.finished = true;
                    messages.push(terminal);
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.finished = true;
                    messages.push(StreamMessage::Complete);
                    break;
                }
            }
        }

        messages
    }

    /// Whether a terminal message has been observed
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
