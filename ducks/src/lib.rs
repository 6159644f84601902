use std::{fmt, rc::Rc};

use common::subject_observer::Observer;

pub mod duck;
pub mod factory;
pub mod flock;
pub mod goose;
pub mod quack_counter;
pub mod quackologist;
pub mod simulation;

pub use duck::{Duck, DuckKind};
pub use factory::{AbstractDuckFactory, CountingDuckFactory, DuckFactory, FactoryError};
pub use flock::Flock;
pub use goose::{Goose, GooseAdapter};
pub use quack_counter::{QuackCounter, QuackTally};
pub use quackologist::Quackologist;

pub type QuackObserver = Rc<dyn Observer<dyn Quackable>>;

pub trait QuackObservable {
    fn register_observer(&mut self, observer: QuackObserver);
    fn notify_observers(&self);
}

/// Anything that quacks and lets observers know about it.
///
/// `quack` must notify every registered observer before returning.
pub trait Quackable: QuackObservable {
    fn quack(&self);
    fn name(&self) -> &'static str;
}

impl fmt::Display for dyn Quackable + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
