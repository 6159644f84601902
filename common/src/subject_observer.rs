use std::{fmt, rc::Rc};

use log::warn;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObserverError {
    #[error("Observer rejected notification: {0}")]
    Rejected(String),
}

pub trait Observer<S: ?Sized> {
    fn update(&self, source: &S) -> Result<(), ObserverError>;
}

pub type SharedObservers<S> = Vec<Rc<dyn Observer<S>>>;

/// Ordered, append-only list of observers.
///
/// Registering the same observer twice makes it receive every notification twice.
pub struct Observable<S: ?Sized> {
    observers: SharedObservers<S>,
}

impl<S: ?Sized> Default for Observable<S> {
    fn default() -> Self {
        Observable { observers: vec![] }
    }
}

impl<S: ?Sized> fmt::Debug for Observable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<S: ?Sized> Observable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_observer(&mut self, observer: Rc<dyn Observer<S>>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Delivers `source` to every observer in registration order.
    ///
    /// A failing observer does not stop the delivery to the next ones; failures are
    /// logged and handed back once every observer has been called.
    pub fn notify_observers(&self, source: &S) -> Vec<ObserverError> {
        self.observers
            .iter()
            .enumerate()
            .filter_map(|(index, obs)| {
                obs.update(source)
                    .map_err(|err| {
                        warn!("Observer #{} failed: {}", index, err);
                        err
                    })
                    .err()
            })
            .collect()
    }
}
