use std::{cell::RefCell, fmt::Display, sync::OnceLock};

use common::subject_observer::{Observer, ObserverError};

static LOGGER: OnceLock<()> = OnceLock::new();

/// Routes `log` records of the crate under test to the test harness output.
pub fn init_logger() {
    LOGGER.get_or_init(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Observer keeping the display form of every source it was notified with.
#[derive(Default)]
pub struct RecordingObserver {
    notifications: RefCell<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.notifications.borrow().len()
    }
}

impl<S> Observer<S> for RecordingObserver
where
    S: Display + ?Sized,
{
    fn update(&self, source: &S) -> Result<(), ObserverError> {
        self.notifications.borrow_mut().push(source.to_string());
        Ok(())
    }
}
