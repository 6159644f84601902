use thiserror::Error;

use crate::{Duck, DuckKind, QuackCounter, QuackTally, Quackable};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FactoryError {
    #[error("Unknown duck variant: '{0}'")]
    UnknownVariant(String),
}

pub trait AbstractDuckFactory {
    fn create_duck(&self, kind: DuckKind) -> Box<dyn Quackable>;

    /// Builds the duck matching `tag`, or nothing when the tag is unknown.
    fn create(&self, tag: &str) -> Result<Box<dyn Quackable>, FactoryError> {
        Ok(self.create_duck(DuckKind::from_tag(tag)?))
    }
}

#[derive(Debug, Default)]
pub struct DuckFactory;

impl AbstractDuckFactory for DuckFactory {
    fn create_duck(&self, kind: DuckKind) -> Box<dyn Quackable> {
        Box::new(Duck::new(kind))
    }
}

/// Builds ducks wrapped in one `QuackCounter` feeding `tally`.
#[derive(Debug, Clone, Default)]
pub struct CountingDuckFactory {
    tally: QuackTally,
}

impl CountingDuckFactory {
    pub fn new(tally: QuackTally) -> Self {
        CountingDuckFactory { tally }
    }

    pub fn tally(&self) -> &QuackTally {
        &self.tally
    }
}

impl AbstractDuckFactory for CountingDuckFactory {
    fn create_duck(&self, kind: DuckKind) -> Box<dyn Quackable> {
        Box::new(QuackCounter::new(
            DuckFactory.create_duck(kind),
            self.tally.clone(),
        ))
    }
}
