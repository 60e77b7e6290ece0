//! The durable preference contract: read at startup, written at shutdown.
//!
//! The store itself (file format, location) is an external collaborator;
//! this module only defines the key/value contract and the documented
//! per-key defaults applied when an entry is missing or invalid. Nothing
//! here is ever fatal.

use std::collections::BTreeMap;

use lightsoff_core::Dimension;
use serde::{Deserialize, Serialize};

use crate::PuzzlePackSet;

/// Durable key/value storage for session preferences and progression.
///
/// Keys and semantics:
///
/// - `levels[i]` for `i` in `0..6`: last-played level for dimension
///   `3 + i`; defaults to `i + 1`.
/// - one integer key per pack, named after the pack: its highest unlocked
///   level; defaults to `0`.
/// - `lastpack`: name of the last active pack; absent means random mode.
/// - `dimension`: last active dimension; defaults to `5`.
/// - `usesound`: whether sound feedback is enabled; defaults to `true`.
pub trait ProgressStore {
    /// Reads the `index`-th integer stored under `key`.
    fn get_int_at(&self, key: &str, index: usize) -> Option<i64>;
    /// Writes the `index`-th integer under `key`.
    fn set_int_at(&mut self, key: &str, index: usize, value: i64);
    /// Reads the string stored under `key`.
    fn get_string(&self, key: &str) -> Option<String>;
    /// Writes a string under `key`.
    fn set_string(&mut self, key: &str, value: &str);
    /// Reads the boolean stored under `key`.
    fn get_bool(&self, key: &str) -> Option<bool>;
    /// Writes a boolean under `key`.
    fn set_bool(&mut self, key: &str, value: bool);
    /// Deletes every entry stored under `key`, if any.
    fn remove(&mut self, key: &str);

    /// Reads the first integer stored under `key`.
    fn get_int(&self, key: &str) -> Option<i64> {
        self.get_int_at(key, 0)
    }

    /// Writes the first integer under `key`.
    fn set_int(&mut self, key: &str, value: i64) {
        self.set_int_at(key, 0, value);
    }
}

/// An in-memory [`ProgressStore`], serializable so callers can persist it
/// however they like. Also serves as the test double for the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    ints: BTreeMap<String, Vec<i64>>,
    strings: BTreeMap<String, String>,
    flags: BTreeMap<String, bool>,
}

impl MemoryStore {
    /// Creates an empty store; every lookup falls back to its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn get_int_at(&self, key: &str, index: usize) -> Option<i64> {
        self.ints.get(key)?.get(index).copied()
    }

    fn set_int_at(&mut self, key: &str, index: usize, value: i64) {
        let values = self.ints.entry(key.to_owned()).or_default();
        if values.len() <= index {
            values.resize(index + 1, 0);
        }
        values[index] = value;
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.strings.insert(key.to_owned(), value.to_owned());
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.flags.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.ints.remove(key);
        self.strings.remove(key);
        self.flags.remove(key);
    }
}

/// The decoded preference state a session starts from and shuts down to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Last-played level per dimension, indexed by [`Dimension::offset`].
    pub last_levels: [usize; Dimension::SPAN],
    /// Highest unlocked level per pack name.
    pub pack_highest: Vec<(String, usize)>,
    /// Name of the last active pack; `None` means random mode.
    pub last_pack: Option<String>,
    /// Last active dimension.
    pub dimension: Dimension,
    /// Whether sound feedback is enabled.
    pub use_sound: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        let mut last_levels = [0; Dimension::SPAN];
        for (i, level) in last_levels.iter_mut().enumerate() {
            *level = i + 1;
        }
        Self {
            last_levels,
            pack_highest: Vec::new(),
            last_pack: None,
            dimension: Dimension::default(),
            use_sound: true,
        }
    }
}

impl Preferences {
    /// Loads preferences from a store, applying the documented default for
    /// every missing or invalid entry.
    ///
    /// The pack set supplies the per-pack key names; a `lastpack` entry
    /// naming a pack that no longer exists falls back to random mode.
    #[must_use]
    pub fn load(store: &impl ProgressStore, packs: &PuzzlePackSet) -> Self {
        let mut prefs = Self::default();

        for (i, slot) in prefs.last_levels.iter_mut().enumerate() {
            if let Some(level) = store
                .get_int_at("levels", i)
                .and_then(|value| usize::try_from(value).ok())
            {
                *slot = level;
            }
        }

        prefs.pack_highest = packs
            .iter()
            .map(|pack| {
                let highest = store
                    .get_int(pack.name())
                    .and_then(|value| usize::try_from(value).ok())
                    .unwrap_or(0);
                (pack.name().to_owned(), highest)
            })
            .collect();

        prefs.last_pack = store.get_string("lastpack").filter(|name| {
            let known = packs.position_by_name(name).is_some();
            if !known {
                log::warn!("last pack {name:?} is not available, falling back to random mode");
            }
            known
        });

        if let Some(value) = store.get_int("dimension") {
            match u8::try_from(value).map(Dimension::new) {
                Ok(Ok(dimension)) => prefs.dimension = dimension,
                _ => log::warn!("ignoring invalid persisted dimension {value}"),
            }
        }

        prefs.use_sound = store.get_bool("usesound").unwrap_or(true);
        prefs
    }

    /// Writes every preference key back to the store.
    pub fn store(&self, store: &mut impl ProgressStore) {
        for (i, level) in self.last_levels.iter().enumerate() {
            store.set_int_at("levels", i, saturating_i64(*level));
        }
        for (name, highest) in &self.pack_highest {
            store.set_int(name, saturating_i64(*highest));
        }
        // Absent means random mode, so ending in random mode must delete
        // any name left over from an earlier pack-mode shutdown.
        match &self.last_pack {
            Some(name) => store.set_string("lastpack", name),
            None => store.remove("lastpack"),
        }
        store.set_int("dimension", i64::from(self.dimension.get()));
        store.set_bool("usesound", self.use_sound);
    }
}

fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
