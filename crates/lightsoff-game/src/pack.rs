//! Curated puzzle packs: ordered, pre-solved levels with unlock progression.

use serde::{Deserialize, Serialize};

/// One pre-solved level: the target cell state and its required move count.
///
/// The target is the bitmask the grid is set to when the level is dealt
/// (row-major, one bit per cell); the player wins by reaching all-off.
/// Solving in more than `moves_required + 10` presses is a win, but an
/// over-budget one that does not advance progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackLevel {
    values: u64,
    moves_required: usize,
}

impl PackLevel {
    /// Creates a level from its target bitmask and required move count.
    #[must_use]
    pub const fn new(values: u64, moves_required: usize) -> Self {
        Self {
            values,
            moves_required,
        }
    }

    /// Returns the target bitmask the grid starts from.
    #[must_use]
    pub const fn values(self) -> u64 {
        self.values
    }

    /// Returns the move count the level is graded against.
    #[must_use]
    pub const fn moves_required(self) -> usize {
        self.moves_required
    }
}

/// A named, ordered sequence of levels plus the highest-unlocked marker.
///
/// `highest` is the high-water mark of progression: the largest level index
/// the player may select. It only ever grows (up to the last level) and is
/// persisted under a key named after the pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzlePack {
    name: String,
    levels: Vec<PackLevel>,
    highest: usize,
}

impl PuzzlePack {
    /// Creates a pack with nothing unlocked beyond the first level.
    #[must_use]
    pub fn new(name: impl Into<String>, levels: Vec<PackLevel>) -> Self {
        Self {
            name: name.into(),
            levels,
            highest: 0,
        }
    }

    /// Returns the pack's display name, also used as its persistence key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns whether the pack has no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns the level at `index`, or `None` out of range.
    #[must_use]
    pub fn level(&self, index: usize) -> Option<&PackLevel> {
        self.levels.get(index)
    }

    /// Returns the highest unlocked level index.
    #[must_use]
    pub fn highest(&self) -> usize {
        self.highest
    }

    /// Sets the highest unlocked level, clamped to the last level index.
    pub fn set_highest(&mut self, level: usize) {
        self.highest = level.min(self.levels.len().saturating_sub(1));
    }
}

/// An explicitly constructed, ordered collection of puzzle packs.
///
/// There is no process-wide pack registry; whoever builds the
/// [`Session`](crate::Session) constructs the set and hands it over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzlePackSet {
    packs: Vec<PuzzlePack>,
}

impl PuzzlePackSet {
    /// Creates a pack set from an ordered list of packs.
    #[must_use]
    pub fn new(packs: Vec<PuzzlePack>) -> Self {
        Self { packs }
    }

    /// Returns the number of packs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    /// Returns whether the set holds no packs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Returns the pack at `index`, or `None` out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PuzzlePack> {
        self.packs.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut PuzzlePack> {
        self.packs.get_mut(index)
    }

    /// Returns the index of the pack with the given name.
    #[must_use]
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.packs.iter().position(|pack| pack.name() == name)
    }

    /// Returns an iterator over the packs in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PuzzlePack> {
        self.packs.iter()
    }
}

impl<'a> IntoIterator for &'a PuzzlePackSet {
    type Item = &'a PuzzlePack;
    type IntoIter = std::slice::Iter<'a, PuzzlePack>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack() -> PuzzlePack {
        PuzzlePack::new(
            "Beginner",
            vec![
                PackLevel::new(0x0002_3880, 1),
                PackLevel::new(0x1, 3),
                PackLevel::new(0x1FF, 5),
            ],
        )
    }

    #[test]
    fn new_pack_starts_at_level_zero() {
        let pack = pack();
        assert_eq!(pack.highest(), 0);
        assert_eq!(pack.len(), 3);
        assert_eq!(pack.level(0).unwrap().moves_required(), 1);
        assert!(pack.level(3).is_none());
    }

    #[test]
    fn set_highest_clamps_to_last_level() {
        let mut pack = pack();
        pack.set_highest(1);
        assert_eq!(pack.highest(), 1);
        pack.set_highest(99);
        assert_eq!(pack.highest(), 2);
    }

    #[test]
    fn set_lookup_by_name_and_index() {
        let set = PuzzlePackSet::new(vec![pack(), PuzzlePack::new("Expert", vec![])]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.position_by_name("Expert"), Some(1));
        assert_eq!(set.position_by_name("Unknown"), None);
        assert_eq!(set.get(0).unwrap().name(), "Beginner");
        assert!(set.get(2).is_none());
    }

    #[test]
    fn pack_data_roundtrips_through_serde() {
        let set = PuzzlePackSet::new(vec![pack()]);
        let json = serde_json::to_string(&set).unwrap();
        let restored: PuzzlePackSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, restored);
    }
}
