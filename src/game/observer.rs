use super::{Board, GameState, Move};

/// Receives a notification after every applied move and once more when a
/// resolution finishes.
///
/// `last_move` is the most recently processed move. It is `None` only when a
/// resolution ends without having processed any move.
pub trait Observer {
    fn notify(&mut self, last_move: Option<Move>, board: &Board, state: GameState);
}

impl<F> Observer for F
where
    F: FnMut(Option<Move>, &Board, GameState),
{
    fn notify(&mut self, last_move: Option<Move>, board: &Board, state: GameState) {
        self(last_move, board, state)
    }
}

/// Handle returned by [`Observers::add`], used to remove that registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered list of registered observers.
#[derive(Default)]
pub struct Observers {
    entries: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: u64,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Remove a registration. Returns the observer if it was still registered.
    pub fn remove(&mut self, id: ObserverId) -> Option<Box<dyn Observer>> {
        let index = self.entries.iter().position(|(entry_id, _)| *entry_id == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Notify every observer in registration order.
    pub fn notify_all(&mut self, last_move: Option<Move>, board: &Board, state: GameState) {
        for (_, observer) in &mut self.entries {
            observer.notify(last_move, board, state);
        }
    }
}
