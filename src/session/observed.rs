//! Event fan-out for presentation and audio collaborators
//!
//! `ObservedSession` drives a `GameSession` and notifies observers after each state
//! change. Observers are fire-and-forget: a panicking observer is logged and skipped,
//! and never reaches the caller.

use super::{AttemptRecord, GameSession, SessionStatus};
use crate::core::{GameError, LetterVerdict, Word};
use std::panic::{self, AssertUnwindSafe};

/// Discrete things that happened to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A letter was typed; `entry` is the whole row so far
    LetterEntered { entry: String },
    /// A letter was removed from `position`; `entry` is what remains
    LetterDeleted { entry: String, position: usize },
    GuessSubmitted(AttemptRecord),
    /// One per tile, in position order, after `GuessSubmitted`
    TileRevealed {
        position: usize,
        letter: char,
        verdict: LetterVerdict,
    },
    GuessRejected(GameError),
    GameWon { attempts: usize },
    GameLost { target: Word },
}

/// Receiver of session events
pub trait SessionObserver {
    fn on_event(&mut self, event: &SessionEvent);
}

impl<F: FnMut(&SessionEvent)> SessionObserver for F {
    fn on_event(&mut self, event: &SessionEvent) {
        self(event);
    }
}

/// A `GameSession` plus the observers watching it
pub struct ObservedSession {
    session: GameSession,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl ObservedSession {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Swap in a fresh round, keeping the observers
    pub fn replace_session(&mut self, session: GameSession) -> GameSession {
        std::mem::replace(&mut self.session, session)
    }

    /// Type a letter into the current row
    ///
    /// # Errors
    /// See [`GameSession::push_letter`]. Rejections are also broadcast.
    pub fn push_letter(&mut self, letter: char) -> Result<(), GameError> {
        match self.session.push_letter(letter) {
            Ok(()) => {
                self.emit(&SessionEvent::LetterEntered {
                    entry: self.session.partial_entry().to_string(),
                });
                Ok(())
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Replace the whole row (e.g. from a spoken transcript)
    ///
    /// # Errors
    /// See [`GameSession::update_partial_entry`].
    pub fn update_partial_entry(&mut self, letters: &str) -> Result<(), GameError> {
        match self.session.update_partial_entry(letters) {
            Ok(()) => {
                self.emit(&SessionEvent::LetterEntered {
                    entry: self.session.partial_entry().to_string(),
                });
                Ok(())
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Backspace
    pub fn delete_partial_entry(&mut self) -> Option<char> {
        let removed = self.session.delete_partial_entry()?;
        let entry = self.session.partial_entry().to_string();
        let position = entry.len();
        self.emit(&SessionEvent::LetterDeleted { entry, position });
        Some(removed)
    }

    /// Submit `guess`, broadcasting the attempt, each tile, and any terminal outcome
    ///
    /// # Errors
    /// See [`GameSession::submit_guess`].
    pub fn submit_guess(&mut self, guess: &str) -> Result<AttemptRecord, GameError> {
        let record = match self.session.submit_guess(guess) {
            Ok(record) => record,
            Err(err) => return Err(self.reject(err)),
        };

        self.emit(&SessionEvent::GuessSubmitted(record.clone()));
        for (position, (letter, verdict)) in record.tiles().enumerate() {
            self.emit(&SessionEvent::TileRevealed {
                position,
                letter,
                verdict,
            });
        }

        match self.session.status() {
            SessionStatus::Won => self.emit(&SessionEvent::GameWon {
                attempts: self.session.attempts_used(),
            }),
            SessionStatus::Lost => self.emit(&SessionEvent::GameLost {
                target: self.session.target().clone(),
            }),
            SessionStatus::InProgress => {}
        }

        Ok(record)
    }

    /// Submit whatever is in the live entry buffer
    ///
    /// # Errors
    /// See [`GameSession::submit_guess`].
    pub fn submit_entry(&mut self) -> Result<AttemptRecord, GameError> {
        let entry = self.session.partial_entry().to_string();
        self.submit_guess(&entry)
    }

    fn reject(&mut self, err: GameError) -> GameError {
        log::debug!("Rejected input: {err}");
        self.emit(&SessionEvent::GuessRejected(err.clone()));
        err
    }

    fn emit(&mut self, event: &SessionEvent) {
        for (index, observer) in self.observers.iter_mut().enumerate() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| observer.on_event(event)));
            if outcome.is_err() {
                log::warn!("Observer {index} panicked handling {event:?}; ignoring");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<SessionEvent>>>, impl SessionObserver + 'static) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        (events, move |event: &SessionEvent| {
            sink.borrow_mut().push(event.clone());
        })
    }

    #[test]
    fn submit_emits_attempt_tiles_and_win() {
        let (events, observer) = recorder();
        let mut observed = ObservedSession::new(GameSession::new("world", 6).unwrap());
        observed.subscribe(observer);

        observed.submit_guess("world").unwrap();

        let events = events.borrow();
        assert!(matches!(events[0], SessionEvent::GuessSubmitted(_)));
        let tiles = events
            .iter()
            .filter(|e| matches!(e, SessionEvent::TileRevealed { .. }))
            .count();
        assert_eq!(tiles, 5);
        assert_eq!(
            events.last(),
            Some(&SessionEvent::GameWon { attempts: 1 })
        );
    }

    #[test]
    fn loss_is_broadcast_with_target() {
        let (events, observer) = recorder();
        let mut observed = ObservedSession::new(GameSession::new("crane", 1).unwrap());
        observed.subscribe(observer);

        observed.submit_guess("slate").unwrap();

        assert_eq!(
            events.borrow().last(),
            Some(&SessionEvent::GameLost {
                target: Word::new("crane").unwrap()
            })
        );
    }

    #[test]
    fn typing_and_backspace_events() {
        let (events, observer) = recorder();
        let mut observed = ObservedSession::new(GameSession::new("crane", 6).unwrap());
        observed.subscribe(observer);

        observed.push_letter('c').unwrap();
        observed.push_letter('r').unwrap();
        assert_eq!(observed.delete_partial_entry(), Some('R'));

        let events = events.borrow();
        assert_eq!(
            events[1],
            SessionEvent::LetterEntered {
                entry: "CR".to_string()
            }
        );
        assert_eq!(
            events[2],
            SessionEvent::LetterDeleted {
                entry: "C".to_string(),
                position: 1
            }
        );
    }

    #[test]
    fn rejection_is_broadcast_and_returned() {
        let (events, observer) = recorder();
        let mut observed = ObservedSession::new(GameSession::new("crane", 6).unwrap());
        observed.subscribe(observer);

        let err = observed.submit_guess("cat").unwrap_err();
        assert_eq!(
            events.borrow().as_slice(),
            &[SessionEvent::GuessRejected(err)]
        );
        assert!(observed.session().history().is_empty());
    }

    #[test]
    fn panicking_observer_does_not_affect_state() {
        let (events, observer) = recorder();
        let mut observed = ObservedSession::new(GameSession::new("crane", 6).unwrap());
        observed.subscribe(|_: &SessionEvent| panic!("sound engine unavailable"));
        observed.subscribe(observer);

        let record = observed.submit_guess("crane").unwrap();

        assert!(record.is_solved());
        assert_eq!(observed.session().status(), SessionStatus::Won);
        assert_eq!(observed.session().history().len(), 1);
        // Later observers still hear everything
        assert_eq!(events.borrow().len(), 7);
    }

    #[test]
    fn submit_entry_uses_buffer() {
        let mut observed = ObservedSession::new(GameSession::new("crane", 6).unwrap());
        observed.update_partial_entry("crane").unwrap();
        let record = observed.submit_entry().unwrap();
        assert!(record.is_solved());
        assert_eq!(observed.session().partial_entry(), "");
    }

    #[test]
    fn empty_entry_is_a_length_error() {
        let (events, observer) = recorder();
        let mut observed = ObservedSession::new(GameSession::new("crane", 6).unwrap());
        observed.subscribe(observer);

        let err = observed.submit_entry().unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidLength {
                expected: 5,
                actual: 0
            }
        );
        assert_eq!(
            events.borrow().as_slice(),
            &[SessionEvent::GuessRejected(err)]
        );
    }
}
