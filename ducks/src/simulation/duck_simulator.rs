use std::rc::Rc;

use log::{debug, info};
use strum::IntoEnumIterator;

use crate::{
    AbstractDuckFactory, CountingDuckFactory, DuckKind, Flock, Goose, GooseAdapter,
    QuackObservable, QuackObserver, QuackTally, Quackable, Quackologist,
};

use super::SimulationSettings;

pub struct DuckSimulator {
    factory: Box<dyn AbstractDuckFactory>,
    tally: QuackTally,
    settings: SimulationSettings,
}

impl DuckSimulator {
    pub fn new(
        factory: Box<dyn AbstractDuckFactory>,
        tally: QuackTally,
        settings: SimulationSettings,
    ) -> Self {
        DuckSimulator {
            factory,
            tally,
            settings,
        }
    }

    /// Simulator whose ducks all count into `tally`.
    pub fn counting(tally: QuackTally, settings: SimulationSettings) -> Self {
        let factory = CountingDuckFactory::new(tally.clone());
        Self::new(Box::new(factory), tally, settings)
    }

    pub fn tally(&self) -> &QuackTally {
        &self.tally
    }

    pub fn run(&self) -> u64 {
        self.simulate(Rc::new(Quackologist))
    }

    /// Builds both flocks, lets `quackologist` watch them, makes them quack once
    /// and returns the tally.
    pub fn simulate(&self, quackologist: QuackObserver) -> u64 {
        let mut ducks_flock = Flock::new();
        DuckKind::iter().for_each(|kind| ducks_flock.add(self.factory.create_duck(kind)));
        if self.settings.include_goose {
            ducks_flock.add(Box::new(GooseAdapter::new(Goose)));
        }

        let mut mallards_flock = Flock::new();
        mallards_flock.add_times(
            || self.factory.create_duck(DuckKind::Mallard),
            self.settings.mallard_count,
        );
        debug!(
            "Flocks ready: {} ducks, {} mallards",
            ducks_flock.len(),
            mallards_flock.len()
        );

        ducks_flock.register_observer(quackologist.clone());
        mallards_flock.register_observer(quackologist);

        simulate(&ducks_flock);
        simulate(&mallards_flock);

        let quacks = self.tally.quacks();
        info!("The ducks quacked {} times.", quacks);
        quacks
    }
}

fn simulate(duck: &dyn Quackable) {
    duck.quack();
}
