//! Resonator collection with stable, store-owned identifiers.

use std::fmt;

use crate::curve::SampleCurve;

/// Identifier assigned to a resonator on import.
///
/// Rendered as a human-readable tag (`Resonator_1`, `Resonator_2`, ...).
/// Identifiers are monotonically increasing per store and are never
/// reused, even across [`ResonatorStore::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResonatorId(u32);

impl fmt::Display for ResonatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resonator_{}", self.0)
    }
}

/// An imported resonator: an identifier wrapping one immutable curve.
#[derive(Debug, Clone)]
pub struct Resonator {
    id: ResonatorId,
    curve: SampleCurve,
}

impl Resonator {
    /// The identifier assigned on import.
    #[must_use]
    pub fn id(&self) -> ResonatorId {
        self.id
    }

    /// The measured admittance curve.
    #[must_use]
    pub fn curve(&self) -> &SampleCurve {
        &self.curve
    }
}

/// Insertion-ordered collection of imported resonators.
///
/// The identifier counter is owned by the store instance, so multiple
/// independent stores assign ids deterministically. The store performs
/// no validation of curve content; that belongs to the importer.
#[derive(Debug, Default)]
pub struct ResonatorStore {
    next_id: u32,
    resonators: Vec<Resonator>,
}

impl ResonatorStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `curve` under the next unused identifier and returns it.
    pub fn add(&mut self, curve: SampleCurve) -> ResonatorId {
        self.next_id += 1;
        let id = ResonatorId(self.next_id);
        self.resonators.push(Resonator { id, curve });
        id
    }

    /// Identifiers in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<ResonatorId> {
        self.resonators.iter().map(|r| r.id).collect()
    }

    /// Iterates resonators in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Resonator> {
        self.resonators.iter()
    }

    /// Looks up a resonator by identifier.
    #[must_use]
    pub fn get(&self, id: ResonatorId) -> Option<&Resonator> {
        self.resonators.iter().find(|r| r.id == id)
    }

    /// Number of stored resonators.
    #[must_use]
    pub fn count(&self) -> usize {
        self.resonators.len()
    }

    /// True when nothing has been imported (or everything was cleared).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resonators.is_empty()
    }

    /// Curves in insertion order, the shape the cascading engine consumes.
    #[must_use]
    pub fn curves(&self) -> Vec<&SampleCurve> {
        self.resonators.iter().map(|r| &r.curve).collect()
    }

    /// Removes every resonator. The identifier counter keeps advancing,
    /// so cleared ids are never reassigned.
    pub fn clear(&mut self) {
        self.resonators.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::C;

    fn curve() -> SampleCurve {
        SampleCurve::new(vec![1.0, 2.0], vec![C::new(1.0, 0.0); 2]).unwrap()
    }

    #[test]
    fn ids_are_sequential_and_tagged() {
        let mut store = ResonatorStore::new();
        let a = store.add(curve());
        let b = store.add(curve());
        assert_eq!(a.to_string(), "Resonator_1");
        assert_eq!(b.to_string(), "Resonator_2");
        assert_eq!(store.list(), vec![a, b]);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn clear_never_reuses_ids() {
        let mut store = ResonatorStore::new();
        store.add(curve());
        store.add(curve());
        store.clear();
        assert!(store.is_empty());
        let next = store.add(curve());
        assert_eq!(next.to_string(), "Resonator_3");
    }

    #[test]
    fn independent_stores_count_independently() {
        let mut first = ResonatorStore::new();
        let mut second = ResonatorStore::new();
        first.add(curve());
        let id = second.add(curve());
        assert_eq!(id.to_string(), "Resonator_1");
        assert!(second.get(id).is_some());
    }
}
