//! Chronological press history with an undo/redo cursor.

/// How [`MoveHistory::record`] classified a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedPress {
    /// The press exactly reversed the most recent applied move; the cursor
    /// retreated instead of a new entry being recorded.
    Undo,
    /// A fresh move was recorded and the cursor advanced.
    Advance,
}

/// The ordered sequence of presses for the current level, plus the cursor
/// state that drives undo and redo.
///
/// `current` counts how many leading entries are applied to the grid;
/// `ceiling` is the highest cursor position reached since the level was
/// dealt and bounds how far [`advance`](Self::advance) (redo) can go.
///
/// Invariant: `current <= ceiling <= moves.len()` between operations.
/// Recording a fresh move past the cursor overwrites the stale redo tail,
/// and the caller is expected to follow a fresh press with
/// [`collapse_ceiling`](Self::collapse_ceiling).
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    moves: Vec<usize>,
    current: usize,
    ceiling: usize,
}

impl MoveHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of applied moves (the displayed move counter).
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the redo ceiling.
    #[must_use]
    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Records a press.
    ///
    /// If the press equals the most recent applied move it is an
    /// undo-by-repress: the cursor retreats and nothing is stored.
    /// Otherwise the press is written at the cursor (overwriting any stale
    /// redo entry there, or appending at the end) and the cursor advances.
    pub fn record(&mut self, index: usize) -> RecordedPress {
        if self.current > 0 && self.moves[self.current - 1] == index {
            self.current -= 1;
            return RecordedPress::Undo;
        }

        if self.current < self.moves.len() {
            self.moves[self.current] = index;
        } else {
            self.moves.push(index);
        }
        self.current += 1;
        RecordedPress::Advance
    }

    /// Retreats the cursor by one, returning the move that was un-applied.
    ///
    /// Returns `None` at cursor position zero.
    pub fn retreat(&mut self) -> Option<usize> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        Some(self.moves[self.current])
    }

    /// Advances the cursor by one, returning the move to re-apply.
    ///
    /// Returns `None` at the redo ceiling.
    pub fn advance(&mut self) -> Option<usize> {
        if self.current == self.ceiling {
            return None;
        }
        let index = self.moves[self.current];
        self.current += 1;
        Some(index)
    }

    /// Sets the redo ceiling to the current cursor, discarding the redo
    /// window. Called after every press that did not win the level.
    pub fn collapse_ceiling(&mut self) {
        self.ceiling = self.current;
    }

    /// Resets the cursor to zero while keeping the ceiling, so the whole
    /// sequence stays redoable. This is the Restart operation's view of
    /// history.
    pub fn rewind(&mut self) {
        self.current = 0;
    }

    /// Jumps the cursor to the ceiling. Returns `false` if it was already
    /// there.
    pub fn jump_to_ceiling(&mut self) -> bool {
        if self.current == self.ceiling {
            return false;
        }
        self.current = self.ceiling;
        true
    }

    /// Clears everything; called when a new level is dealt.
    pub fn reset(&mut self) {
        self.moves.clear();
        self.current = 0;
        self.ceiling = 0;
    }
}
