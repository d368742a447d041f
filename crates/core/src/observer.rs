/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers monitor or steer a solver without changing its API,
/// enabling logging, early stopping, or custom diagnostics.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<O: Observer<i32, Action>>(mut observer: O, events: &[i32]) -> Option<usize> {
        events
            .iter()
            .position(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1, 2, 3]), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let observer = |event: &i32| (*event > 1).then_some(Action::Stop);
        assert_eq!(drive(observer, &[0, 1, 2, 3]), Some(2));
    }

    #[test]
    fn closure_observer_keeps_state() {
        let mut seen = Vec::new();
        let observer = |event: &i32| {
            seen.push(*event);
            None
        };
        drive(observer, &[4, 5]);
        assert_eq!(seen, vec![4, 5]);
    }
}
