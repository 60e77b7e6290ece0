//! The puzzle session controller.
//!
//! [`Session`] is the single-threaded state machine driving a game: it owns
//! the grid, the move history, the pack set, and the random dealer, and it
//! implements press handling, undo/redo, restart/restore, win detection,
//! and the move-count grading that gates pack progression.

use lightsoff_core::{CellMask, Dimension, Grid};
use lightsoff_generator::PuzzleGenerator;

use crate::{
    history::{MoveHistory, RecordedPress},
    pack::PuzzlePackSet,
    progress::{Preferences, ProgressStore},
};

/// Extra presses beyond a level's required move count that still grade as
/// a normal win.
const MOVE_BUDGET_SLACK: usize = 10;

/// Where the active puzzle came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleSource {
    /// Freshly generated; the level number is only a difficulty knob and
    /// there is no move-count grading.
    Random,
    /// A pre-solved level from the pack at `index` in the session's set.
    Pack {
        /// Index into the session's pack set.
        index: usize,
    },
}

/// What a call to [`Session::press`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The index was outside the active n-by-n window; nothing changed.
    Ignored,
    /// A fresh move was applied.
    Moved,
    /// The press exactly reversed the most recent applied move.
    Undone,
    /// The press turned every cell off and the level was evaluated.
    Won(Completion),
}

/// How a won level was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Random mode: a fresh puzzle was dealt at the same level.
    Redealt,
    /// Pack mode, solved within the grading window; the next level was
    /// dealt (or the last level re-dealt at the end of the pack).
    Advanced {
        /// The level that was just completed.
        completed: usize,
        /// Whether completing it raised the pack's high-water mark.
        unlocked: bool,
    },
    /// Pack mode, solved but with more than `required + 10` presses: no
    /// progression, and the same level was re-dealt.
    OverBudget {
        /// Presses applied at the moment of winning.
        moves_used: usize,
        /// The largest press count that still grades as a normal win.
        allowed: usize,
    },
}

/// The central game state machine.
///
/// The session exclusively owns its [`Grid`], [`MoveHistory`], and
/// [`PuzzlePackSet`]; callers construct the pack set explicitly and hand it
/// over, and read progression back out through [`Session::preferences`]
/// before persisting at shutdown. Invalid input (out-of-range cell index,
/// level, or pack) is ignored rather than treated as an error.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    history: MoveHistory,
    packs: PuzzlePackSet,
    generator: PuzzleGenerator,
    source: PuzzleSource,
    level: usize,
    /// The state dealt for the current level; Restart returns here.
    puzzle_values: CellMask,
    /// Lazily captured snapshot of the most advanced state reached, taken
    /// on the first Undo or Restart after a fresh press; Restore returns
    /// here. Invalidated by every non-winning press.
    saved_values: Option<CellMask>,
    use_sound: bool,
    /// Last-played random level per dimension, indexed by offset from 3x3.
    last_levels: [usize; Dimension::SPAN],
    /// The random-mode dimension. Survives pack mode (which always plays
    /// at 5x5) so a later return to random mode lands on the same grid.
    random_dimension: Dimension,
}

impl Session {
    /// Creates a session with default preferences: random mode on the
    /// default 5x5 grid, with an initial puzzle already dealt.
    #[must_use]
    pub fn new(packs: PuzzlePackSet, generator: PuzzleGenerator) -> Self {
        Self::from_preferences(packs, &Preferences::default(), generator)
    }

    /// Creates a session from decoded preferences, restoring pack
    /// high-water marks, the last puzzle source, and the last dimension,
    /// and dealing the first puzzle.
    #[must_use]
    pub fn from_preferences(
        packs: PuzzlePackSet,
        prefs: &Preferences,
        generator: PuzzleGenerator,
    ) -> Self {
        let mut session = Self {
            grid: Grid::new(prefs.dimension),
            history: MoveHistory::new(),
            packs,
            generator,
            source: PuzzleSource::Random,
            level: 0,
            puzzle_values: CellMask::EMPTY,
            saved_values: None,
            use_sound: prefs.use_sound,
            last_levels: prefs.last_levels,
            random_dimension: prefs.dimension,
        };

        for (name, highest) in &prefs.pack_highest {
            if let Some(index) = session.packs.position_by_name(name)
                && let Some(pack) = session.packs.get_mut(index)
            {
                pack.set_highest(*highest);
            }
        }

        let resumed = prefs
            .last_pack
            .as_deref()
            .and_then(|name| session.packs.position_by_name(name))
            .is_some_and(|index| session.select_pack(index));
        if !resumed {
            session.select_random(prefs.dimension);
        }
        session
    }

    /// Creates a session by reading preferences straight from a progress
    /// store (the startup half of the persistence contract).
    #[must_use]
    pub fn from_store(
        packs: PuzzlePackSet,
        store: &impl ProgressStore,
        generator: PuzzleGenerator,
    ) -> Self {
        let prefs = Preferences::load(store, &packs);
        Self::from_preferences(packs, &prefs, generator)
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the active dimension.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.grid.dimension()
    }

    /// Returns the active level index.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the active puzzle source.
    #[must_use]
    pub fn source(&self) -> PuzzleSource {
        self.source
    }

    /// Returns the pack set, including any progression made this session.
    #[must_use]
    pub fn packs(&self) -> &PuzzlePackSet {
        &self.packs
    }

    /// Returns the applied move count (the displayed counter).
    #[must_use]
    pub fn current_moves(&self) -> usize {
        self.history.current()
    }

    /// Returns the redo ceiling: the furthest the cursor has been since
    /// the level was dealt.
    #[must_use]
    pub fn move_ceiling(&self) -> usize {
        self.history.ceiling()
    }

    /// Returns the state the current level was dealt with.
    #[must_use]
    pub fn puzzle_values(&self) -> CellMask {
        self.puzzle_values
    }

    /// Returns whether sound feedback is enabled.
    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.use_sound
    }

    /// Enables or disables sound feedback.
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.use_sound = enabled;
    }

    /// Handles a cell press, the central operation of the session.
    ///
    /// A press that exactly reverses the most recent applied move retreats
    /// the history cursor instead of recording a new entry. Any other press
    /// records itself (overwriting a stale redo tail), and if it leaves
    /// every cell off the level is won and resolved per the completion
    /// protocol. A press that does not win collapses the redo ceiling and
    /// invalidates the restore snapshot.
    ///
    /// Out-of-range indices are ignored.
    pub fn press(&mut self, index: usize) -> PressOutcome {
        if !self.grid.contains(index) {
            return PressOutcome::Ignored;
        }

        let recorded = self.history.record(index);
        self.grid.press(index);

        if recorded == RecordedPress::Advance && self.grid.is_all_off() {
            return PressOutcome::Won(self.evaluate_completion());
        }

        self.history.collapse_ceiling();
        self.saved_values = None;
        match recorded {
            RecordedPress::Undo => PressOutcome::Undone,
            RecordedPress::Advance => PressOutcome::Moved,
        }
    }

    /// Un-applies the most recent applied move. Returns `false` at zero.
    ///
    /// The first undo after a fresh press captures the restore snapshot so
    /// [`restore`](Self::restore) can jump back to the most advanced state.
    pub fn undo(&mut self) -> bool {
        let values = self.grid.values();
        let Some(index) = self.history.retreat() else {
            return false;
        };
        if self.saved_values.is_none() {
            self.saved_values = Some(values);
        }
        self.grid.press(index);
        true
    }

    /// Re-applies the next un-applied move. Returns `false` at the ceiling.
    pub fn redo(&mut self) -> bool {
        let Some(index) = self.history.advance() else {
            return false;
        };
        self.grid.press(index);
        true
    }

    /// Resets the cursor to zero and the grid to the dealt state, keeping
    /// the whole move sequence redoable. Returns `false` at zero.
    pub fn restart(&mut self) -> bool {
        if self.history.current() == 0 {
            return false;
        }
        if self.saved_values.is_none() {
            self.saved_values = Some(self.grid.values());
        }
        self.history.rewind();
        self.grid.set_values(self.puzzle_values);
        true
    }

    /// Jumps the cursor to the ceiling and the grid to the restore
    /// snapshot, undoing any undos. Returns `false` at the ceiling.
    pub fn restore(&mut self) -> bool {
        let Some(values) = self.saved_values else {
            return false;
        };
        if !self.history.jump_to_ceiling() {
            return false;
        }
        self.grid.set_values(values);
        true
    }

    /// Switches to random mode at the given dimension and deals a puzzle
    /// at the dimension's remembered last level.
    ///
    /// Changing dimension resizes (and clears) the grid and resets the
    /// move history; this is also the dimension-change operation, since a
    /// dimension change always invalidates the active puzzle.
    pub fn select_random(&mut self, dimension: Dimension) {
        self.source = PuzzleSource::Random;
        self.random_dimension = dimension;
        if self.grid.dimension() != dimension {
            self.grid.set_dimension(dimension);
        }
        self.set_level(self.last_levels[dimension.offset()]);
    }

    /// Switches to the pack at `index`, forcing the default 5x5 dimension
    /// and dealing the pack's highest unlocked level.
    ///
    /// Returns `false` (leaving the session untouched) if the pack does
    /// not exist or has no levels.
    pub fn select_pack(&mut self, index: usize) -> bool {
        let Some(pack) = self.packs.get(index) else {
            return false;
        };
        if pack.is_empty() {
            log::warn!("pack {:?} has no levels, not selecting it", pack.name());
            return false;
        }
        let highest = pack.highest();

        self.source = PuzzleSource::Pack { index };
        if self.grid.dimension() != Dimension::default() {
            self.grid.set_dimension(Dimension::default());
        }
        self.set_level(highest);
        true
    }

    /// Deals the given level from the active source, resetting the move
    /// history, counters, and restore snapshot.
    ///
    /// In pack mode the grid is set to the level's target bitmask; in
    /// random mode a puzzle is dealt with `level + 1` simulated presses
    /// and the level is remembered as the dimension's last level.
    /// Out-of-range levels are clamped into the valid range.
    pub fn set_level(&mut self, level: usize) {
        let level = self.clamp_level(level);
        self.level = level;
        self.history.reset();
        self.saved_values = None;

        match self.source {
            PuzzleSource::Pack { index } => {
                if let Some(pack_level) =
                    self.packs.get(index).and_then(|pack| pack.level(level))
                {
                    self.grid
                        .set_values(CellMask::from_bits(pack_level.values()));
                }
            }
            PuzzleSource::Random => {
                let dealt = self.generator.deal(self.grid.dimension(), level + 1);
                self.grid.set_values(dealt.values);
                self.last_levels[self.grid.dimension().offset()] = level;
            }
        }

        self.puzzle_values = self.grid.values();
        log::debug!(
            "dealt level {} on {} ({:?})",
            level + 1,
            self.grid.dimension(),
            self.source
        );
    }

    /// Returns the preference state to persist at shutdown.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            last_levels: self.last_levels,
            pack_highest: self
                .packs
                .iter()
                .map(|pack| (pack.name().to_owned(), pack.highest()))
                .collect(),
            last_pack: match self.source {
                PuzzleSource::Pack { index } => {
                    self.packs.get(index).map(|pack| pack.name().to_owned())
                }
                PuzzleSource::Random => None,
            },
            dimension: self.random_dimension,
            use_sound: self.use_sound,
        }
    }

    /// Writes the session's preference state to a progress store (the
    /// shutdown half of the persistence contract).
    pub fn save_preferences(&self, store: &mut impl ProgressStore) {
        self.preferences().store(store);
    }

    fn clamp_level(&self, level: usize) -> usize {
        let limit = match self.source {
            PuzzleSource::Pack { index } => self.packs.get(index).map_or(0, crate::PuzzlePack::len),
            PuzzleSource::Random => self.grid.dimension().max_moves(),
        };
        level.min(limit.saturating_sub(1))
    }

    /// Resolves a won level: grades pack levels against their required
    /// move count, advances progression, and deals the follow-up puzzle.
    fn evaluate_completion(&mut self) -> Completion {
        let moves_used = self.history.current();

        let PuzzleSource::Pack { index } = self.source else {
            log::info!(
                "random {} puzzle solved in {moves_used} moves",
                self.grid.dimension()
            );
            self.set_level(self.level);
            return Completion::Redealt;
        };

        let completed = self.level;
        let required = self
            .packs
            .get(index)
            .and_then(|pack| pack.level(completed))
            .map_or(0, |level| level.moves_required());
        let allowed = required + MOVE_BUDGET_SLACK;

        if moves_used > allowed {
            log::info!(
                "level {} solved in {moves_used} moves, over the {allowed} allowed",
                completed + 1
            );
            self.set_level(completed);
            return Completion::OverBudget { moves_used, allowed };
        }

        let mut unlocked = false;
        if let Some(pack) = self.packs.get_mut(index)
            && pack.highest() == completed
            && completed + 1 < pack.len()
        {
            pack.set_highest(completed + 1);
            unlocked = true;
            log::info!("unlocked level {} of pack {:?}", completed + 2, pack.name());
        }
        self.set_level(completed + 1);
        Completion::Advanced { completed, unlocked }
    }
}
