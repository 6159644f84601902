use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use log::debug;

use crate::{QuackObservable, QuackObserver, Quackable};

/// Quack count shared by every counter created from it.
///
/// Clones share the same value. It only ever grows.
#[derive(Debug, Clone, Default)]
pub struct QuackTally(Arc<AtomicU64>);

impl QuackTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quacks(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    fn increment(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Decorator counting the quacks of the wrapped duck into a shared tally.
pub struct QuackCounter {
    duck: Box<dyn Quackable>,
    tally: QuackTally,
}

impl QuackCounter {
    pub fn new(duck: Box<dyn Quackable>, tally: QuackTally) -> Self {
        QuackCounter { duck, tally }
    }

    pub fn quacks(&self) -> u64 {
        self.tally.quacks()
    }
}

impl QuackObservable for QuackCounter {
    fn register_observer(&mut self, observer: QuackObserver) {
        self.duck.register_observer(observer);
    }

    fn notify_observers(&self) {
        self.duck.notify_observers();
    }
}

impl Quackable for QuackCounter {
    fn quack(&self) {
        self.duck.quack();
        let quacks = self.tally.increment();
        debug!("{} counted, tally is now {}", self.duck.name(), quacks);
    }

    fn name(&self) -> &'static str {
        self.duck.name()
    }
}
