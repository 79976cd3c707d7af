//! In-memory capabilities that record how they were used, and a log capture for asserting on what the flow logged.

use std::{
    cell::{Cell, RefCell},
    io,
    sync::{Arc, Mutex, PoisonError},
};

use async_trait::async_trait;
use futures_channel::oneshot;
use tracing_subscriber::fmt::MakeWriter;

use crate::{
    Coordinates, Error, PermissionName, PermissionQuery, PermissionState, Position, PositionError,
    PositionOptions, PositionSource, Result,
};

enum Answer {
    Ready(PermissionState),
    Pending(RefCell<Option<oneshot::Receiver<PermissionState>>>),
}

/// A permission query with a fixed or externally released answer.
pub struct MockPermissions {
    answer: Answer,
    queries: Cell<usize>,
}

/// Releases the answer of a [`MockPermissions::pending`] query.
pub struct PermissionRelease(oneshot::Sender<PermissionState>);

impl PermissionRelease {
    /// Resolve the query. Returns `false` if nobody is waiting anymore.
    pub fn resolve(self, state: PermissionState) -> bool {
        self.0.send(state).is_ok()
    }
}

impl MockPermissions {
    /// Every query immediately answers `state`.
    pub fn resolved(state: PermissionState) -> Self {
        Self {
            answer: Answer::Ready(state),
            queries: Cell::new(0),
        }
    }

    /// The first query waits until the returned handle resolves it.
    pub fn pending() -> (Self, PermissionRelease) {
        let (sender, receiver) = oneshot::channel();
        let permissions = Self {
            answer: Answer::Pending(RefCell::new(Some(receiver))),
            queries: Cell::new(0),
        };
        (permissions, PermissionRelease(sender))
    }

    /// How many times the permission state was asked for.
    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

#[async_trait(?Send)]
impl PermissionQuery for MockPermissions {
    async fn query(&self, _name: PermissionName) -> Result<PermissionState> {
        self.queries.set(self.queries.get() + 1);

        match &self.answer {
            Answer::Ready(state) => Ok(*state),
            Answer::Pending(receiver) => {
                let receiver = receiver
                    .borrow_mut()
                    .take()
                    .ok_or_else(|| Error::PermissionQuery("already answered".to_string()))?;
                receiver
                    .await
                    .map_err(|_| Error::PermissionQuery("query abandoned".to_string()))
            }
        }
    }
}

/// A position source that answers every request with the same outcome.
pub struct MockGeolocation {
    outcome: Result<Position, PositionError>,
    requests: RefCell<Vec<PositionOptions>>,
}

impl MockGeolocation {
    pub fn located(latitude: f64, longitude: f64) -> Self {
        Self::with_outcome(Ok(Position {
            coords: Coordinates::new(latitude, longitude),
            accuracy: 10.0,
        }))
    }

    pub fn failing(code: u16, message: &str) -> Self {
        Self::with_outcome(Err(PositionError::new(code, message)))
    }

    pub fn with_outcome(outcome: Result<Position, PositionError>) -> Self {
        Self {
            outcome,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// The options of every request made so far, oldest first.
    pub fn requests(&self) -> Vec<PositionOptions> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PositionSource for MockGeolocation {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Position, PositionError> {
        self.requests.borrow_mut().push(*options);
        self.outcome.clone()
    }
}

/// Collects everything logged on the current thread while installed.
#[derive(Clone, Default)]
pub struct Logs(Arc<Mutex<Vec<u8>>>);

impl Logs {
    /// Route this thread's events here until the guard is dropped.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .without_time()
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// How many times `needle` was logged.
    pub fn count(&self, needle: &str) -> usize {
        self.contents().matches(needle).count()
    }
}

impl io::Write for Logs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Logs {
    type Writer = Logs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
