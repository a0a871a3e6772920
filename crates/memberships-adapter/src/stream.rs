//! # Membership Stream
//!
//! Subscription handle returned by every memberships adapter.
//!
//! Polling the stream yields `Ok(Membership)` snapshots until the source
//! ends it, or a single `Err` after which the stream is finished. Dropping
//! the handle (or calling [`MembershipStream::unsubscribe`]) cancels the
//! subscription and releases the underlying source receiver.

use crate::domain::Membership;
use crate::error::MembershipsError;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::debug;

/// A single event on a membership stream.
pub type MembershipEvent = Result<Membership, MembershipsError>;

/// A cancellable stream of roster snapshots.
pub struct MembershipStream {
    inner: BoxStream<'static, MembershipEvent>,
    finished: bool,
}

impl MembershipStream {
    /// Wrap any sendable stream of membership events.
    pub fn new<S>(inner: S) -> Self
    where
        S: Stream<Item = MembershipEvent> + Send + 'static,
    {
        Self {
            inner: inner.boxed(),
            finished: false,
        }
    }

    /// A stream whose sole event is `error`.
    ///
    /// The error is produced on first poll, not at construction.
    #[must_use]
    pub fn failed(error: MembershipsError) -> Self {
        Self::new(stream::once(async move { Err(error) }))
    }

    /// A finite stream emitting each snapshot in order, then ending.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<Membership>) -> Self {
        Self::new(stream::iter(snapshots.into_iter().map(Ok)))
    }

    /// Receive the next event.
    ///
    /// # Returns
    ///
    /// - `Some(Ok(membership))` - The next roster snapshot
    /// - `Some(Err(error))` - Terminal error, the stream is finished
    /// - `None` - The stream has ended
    pub async fn recv(&mut self) -> Option<MembershipEvent> {
        self.next().await
    }

    /// Whether the stream has ended or errored.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Cancel the subscription.
    pub fn unsubscribe(self) {
        debug!(finished = self.finished, "Membership stream unsubscribed");
    }
}

impl Stream for MembershipStream {
    type Item = MembershipEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.finished {
            return Poll::Ready(None);
        }

        match self.inner.as_mut().poll_next(cx) {
            Poll::Ready(Some(Err(e))) => {
                self.finished = true;
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(None) => {
                self.finished = true;
                Poll::Ready(None)
            }
            other => other,
        }
    }
}

impl fmt::Debug for MembershipStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MembershipStream")
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
