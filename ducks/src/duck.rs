use common::subject_observer::Observable;
use log::info;
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::{FactoryError, QuackObservable, QuackObserver, Quackable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DuckKind {
    Mallard,
    Redhead,
    Decoy,
    Rubber,
}

impl DuckKind {
    pub fn from_tag(tag: &str) -> Result<Self, FactoryError> {
        tag.parse()
            .map_err(|_| FactoryError::UnknownVariant(tag.to_string()))
    }

    pub fn tag(self) -> &'static str {
        self.into()
    }

    pub fn name(self) -> &'static str {
        match self {
            DuckKind::Mallard => "Mallard duck",
            DuckKind::Redhead => "Redhead duck",
            DuckKind::Decoy => "Decoy duck",
            DuckKind::Rubber => "Rubber duck",
        }
    }

    pub fn sound(self) -> &'static str {
        match self {
            DuckKind::Mallard | DuckKind::Redhead => "'Quack!'",
            DuckKind::Decoy => "'Kwak!'",
            DuckKind::Rubber => "'Squeak!'",
        }
    }
}

#[derive(Debug)]
pub struct Duck {
    kind: DuckKind,
    observable: Observable<dyn Quackable>,
}

impl Duck {
    pub fn new(kind: DuckKind) -> Self {
        Duck {
            kind,
            observable: Observable::new(),
        }
    }

    pub fn kind(&self) -> DuckKind {
        self.kind
    }
}

impl QuackObservable for Duck {
    fn register_observer(&mut self, observer: QuackObserver) {
        self.observable.register_observer(observer);
    }

    fn notify_observers(&self) {
        self.observable.notify_observers(self);
    }
}

impl Quackable for Duck {
    fn quack(&self) {
        info!("{}", self.kind.sound());
        self.notify_observers();
    }

    fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common_test::{init_logger, RecordingObserver};
    use strum::IntoEnumIterator;

    use crate::{FactoryError, QuackObservable, Quackable};

    use super::{Duck, DuckKind};

    #[test]
    fn test_duck_kind_from_tag() {
        assert_eq!(Ok(DuckKind::Mallard), DuckKind::from_tag("mallard"));
        assert_eq!(
            Ok(DuckKind::Rubber),
            DuckKind::from_tag("Rubber"),
            "Should ignore case"
        );
        assert_eq!(
            Err(FactoryError::UnknownVariant("goose".to_string())),
            DuckKind::from_tag("goose")
        );
    }

    #[test]
    fn test_duck_kind_tag_should_parse_back() {
        for kind in DuckKind::iter() {
            assert_eq!(Ok(kind), DuckKind::from_tag(kind.tag()));
        }
    }

    #[test]
    fn test_duck_kind_iteration_order() {
        // When
        let kinds = DuckKind::iter().collect::<Vec<_>>();

        // Then
        assert_eq!(
            vec![
                DuckKind::Mallard,
                DuckKind::Redhead,
                DuckKind::Decoy,
                DuckKind::Rubber
            ],
            kinds
        );
    }

    #[test]
    fn test_duck_quack_should_notify_observers_with_itself() {
        init_logger();

        // Given
        let observer = Rc::new(RecordingObserver::new());
        let mut duck = Duck::new(DuckKind::Decoy);
        duck.register_observer(observer.clone());

        // When
        duck.quack();

        // Then
        assert_eq!(vec!["Decoy duck"], observer.notifications());
        assert_eq!(DuckKind::Decoy, duck.kind());
    }

    #[test]
    fn test_duck_quack_without_observer() {
        // Given
        let duck = Duck::new(DuckKind::Rubber);

        // When
        duck.quack();

        // Then
        assert_eq!("Rubber duck", duck.name());
        assert_eq!("'Squeak!'", DuckKind::Rubber.sound());
    }
}
