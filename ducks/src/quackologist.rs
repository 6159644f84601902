use common::subject_observer::{Observer, ObserverError};
use log::info;

use crate::Quackable;

#[derive(Debug, Default)]
pub struct Quackologist;

impl Observer<dyn Quackable> for Quackologist {
    fn update(&self, duck: &dyn Quackable) -> Result<(), ObserverError> {
        info!("Quackologist: {} just quacked.", duck);
        Ok(())
    }
}
