use common::subject_observer::Observable;
use log::info;

use crate::{QuackObservable, QuackObserver, Quackable};

#[derive(Debug, Default)]
pub struct Goose;

impl Goose {
    pub fn honk(&self) {
        info!("'Honk!'");
    }
}

/// Lets a goose stand in a flock of ducks.
#[derive(Debug)]
pub struct GooseAdapter {
    goose: Goose,
    observable: Observable<dyn Quackable>,
}

impl GooseAdapter {
    pub fn new(goose: Goose) -> Self {
        GooseAdapter {
            goose,
            observable: Observable::new(),
        }
    }
}

impl QuackObservable for GooseAdapter {
    fn register_observer(&mut self, observer: QuackObserver) {
        self.observable.register_observer(observer);
    }

    fn notify_observers(&self) {
        self.observable.notify_observers(self);
    }
}

impl Quackable for GooseAdapter {
    fn quack(&self) {
        self.goose.honk();
        self.notify_observers();
    }

    fn name(&self) -> &'static str {
        "Goose in duck's clothing"
    }
}
