use common::subject_observer::Observable;
use log::debug;

use crate::{QuackObservable, QuackObserver, Quackable};

/// Composite of quackables, itself a quackable.
///
/// Members quack in insertion order. Registering an observer registers it on the
/// members held at that moment only: members added later do not receive it unless
/// `register_observer` is called again.
#[derive(Default)]
pub struct Flock {
    quackers: Vec<Box<dyn Quackable>>,
    observable: Observable<dyn Quackable>,
}

impl Flock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, quacker: Box<dyn Quackable>) {
        self.quackers.push(quacker);
    }

    /// Adds `times` members, each one built by a new call to `factory`.
    pub fn add_times<F>(&mut self, mut factory: F, times: usize)
    where
        F: FnMut() -> Box<dyn Quackable>,
    {
        self.quackers.extend((0..times).map(|_| factory()));
    }

    pub fn len(&self) -> usize {
        self.quackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quackers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Quackable> + '_ {
        self.quackers.iter().map(|quacker| quacker.as_ref())
    }
}

impl QuackObservable for Flock {
    fn register_observer(&mut self, observer: QuackObserver) {
        debug!("Registering observer on {} flock members", self.len());
        for quacker in self.quackers.iter_mut() {
            quacker.register_observer(observer.clone());
        }
    }

    fn notify_observers(&self) {
        self.observable.notify_observers(self);
    }
}

impl Quackable for Flock {
    fn quack(&self) {
        self.iter().for_each(|quacker| quacker.quack());
    }

    fn name(&self) -> &'static str {
        "Flock"
    }
}
