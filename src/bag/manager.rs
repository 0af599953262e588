use super::entry::{BagEntry, EntryId};
use super::error::BagError;
use crate::catalog::Item;

/// Result of previewing a prospective addition
///
/// `total_weight`/`total_volume` are the contribution of the addition alone
/// (item dimensions times quantity), matching what the modal displays next
/// to the quantity selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview {
    pub total_weight: f32,
    pub total_volume: f32,
    pub admissible: bool,
}

/// Single source of truth for bag capacity
///
/// Owns the running weight/volume totals and the set of live entries, and
/// decides whether a prospective addition fits. The presentation layer calls
/// `preview_addition` to enable/disable the commit affordance, commits via
/// `commit_addition`, and removes units via `remove_entry`.
///
/// Admissibility always compares raw weight/volume against the maxima;
/// `capacity_percentages` is display-only and never drives decisions, so
/// rounding can't produce false positives.
///
/// The manager imposes no time-based restriction. Session-end gating (the
/// countdown reaching zero) is the presentation layer's job.
#[derive(Debug, Clone)]
pub struct BagManager {
    max_weight: f32,
    max_volume: f32,
    current_weight: f32,
    current_volume: f32,
    entries: Vec<BagEntry>,
    next_entry_id: u64,
}

impl BagManager {
    /// Creates an empty bag with the given capacity limits
    pub fn new(max_weight: f32, max_volume: f32) -> Self {
        BagManager {
            max_weight,
            max_volume,
            current_weight: 0.0,
            current_volume: 0.0,
            entries: Vec::new(),
            next_entry_id: 0,
        }
    }

    /// Computes the effect of adding `quantity` units of an item
    ///
    /// Pure function of current state and inputs, no side effects. An
    /// addition is admissible when the quantity is positive and neither
    /// projected total exceeds its maximum. A quantity of zero is never
    /// admissible.
    pub fn preview_addition(&self, item: &Item, quantity: u32) -> Preview {
        // The catalog loader guarantees non-negative dimensions; anything
        // else is a programming error upstream.
        debug_assert!(
            item.weight >= 0.0 && item.volume >= 0.0,
            "item '{}' has negative dimensions",
            item.name
        );

        let total_weight = item.weight * quantity as f32;
        let total_volume = item.volume * quantity as f32;

        let admissible = quantity > 0
            && self.current_weight + total_weight <= self.max_weight
            && self.current_volume + total_volume <= self.max_volume;

        Preview {
            total_weight,
            total_volume,
            admissible,
        }
    }

    /// Adds `quantity` units of an item to the bag
    ///
    /// Re-validates admissibility against the current totals rather than
    /// trusting an earlier preview, so back-to-back commits can't sneak past
    /// the limits. All-or-nothing: on failure no entry is created and the
    /// totals are untouched.
    ///
    /// Returns the ids of the created entries in creation order.
    pub fn commit_addition(&mut self, item: &Item, quantity: u32) -> Result<Vec<EntryId>, BagError> {
        if quantity == 0 {
            return Err(BagError::EmptyCommit);
        }

        let preview = self.preview_addition(item, quantity);
        if !preview.admissible {
            return Err(BagError::CapacityExceeded {
                projected_weight: self.current_weight + preview.total_weight,
                projected_volume: self.current_volume + preview.total_volume,
            });
        }

        let mut created = Vec::with_capacity(quantity as usize);
        for _ in 0..quantity {
            let id = EntryId(self.next_entry_id);
            self.next_entry_id += 1;

            self.entries.push(BagEntry::new(id, item));
            created.push(id);
        }

        self.current_weight += preview.total_weight;
        self.current_volume += preview.total_volume;

        Ok(created)
    }

    /// Removes a single entry from the bag
    ///
    /// Unknown or already-removed ids are a silent no-op, so a racing
    /// double-click on a delete button can't corrupt the totals. Totals are
    /// clamped at a zero floor to guard against floating-point drift.
    pub fn remove_entry(&mut self, id: EntryId) {
        let Some(position) = self.entries.iter().position(|entry| entry.id == id) else {
            return;
        };

        let entry = self.entries.remove(position);
        self.current_weight = (self.current_weight - entry.weight).max(0.0);
        self.current_volume = (self.current_volume - entry.volume).max(0.0);
    }

    /// Fill percentages for the capacity bars
    ///
    /// Each axis is `min(100, current / max * 100)` rounded to 2 decimal
    /// places. Display only; admissibility never looks at these.
    pub fn capacity_percentages(&self) -> (f32, f32) {
        let weight_pct = (self.current_weight / self.max_weight * 100.0).min(100.0);
        let volume_pct = (self.current_volume / self.max_volume * 100.0).min(100.0);

        (round2(weight_pct), round2(volume_pct))
    }

    /// Live entries in insertion order
    pub fn entries(&self) -> &[BagEntry] {
        &self.entries
    }

    /// Returns true if the bag holds no entries
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_weight(&self) -> f32 {
        self.current_weight
    }

    pub fn current_volume(&self) -> f32 {
        self.current_volume
    }

    pub fn max_weight(&self) -> f32 {
        self.max_weight
    }

    pub fn max_volume(&self) -> f32 {
        self.max_volume
    }
}

impl Default for BagManager {
    /// Default limits: 100 kg / 100 cubic meters
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

/// Rounds to 2 decimal places
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crate_item(weight: f32, volume: f32) -> Item {
        Item {
            id: 7,
            name: "Crate".to_string(),
            localized_name: "Crate".to_string(),
            weight,
            volume,
            description: String::new(),
            image_ref: "assets/items/crate.png".to_string(),
        }
    }

    /// Sum of live entry dimensions, for drift checks
    fn entry_totals(manager: &BagManager) -> (f32, f32) {
        manager.entries().iter().fold((0.0, 0.0), |(w, v), entry| {
            (w + entry.weight, v + entry.volume)
        })
    }

    #[test]
    fn test_commit_within_capacity() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(10.0, 5.0);

        let created = manager.commit_addition(&item, 5).unwrap();

        assert_eq!(created.len(), 5); // One entry per unit
        assert_eq!(manager.current_weight(), 50.0);
        assert_eq!(manager.current_volume(), 25.0);
        assert_eq!(manager.entries().len(), 5);
    }

    #[test]
    fn test_commit_over_capacity_fails_atomically() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(10.0, 5.0);

        // 11 * 10 = 110 > 100 weight limit
        let result = manager.commit_addition(&item, 11);

        assert!(matches!(result, Err(BagError::CapacityExceeded { .. })));
        assert_eq!(manager.current_weight(), 0.0);
        assert_eq!(manager.current_volume(), 0.0);
        assert!(manager.entries().is_empty()); // All-or-nothing
    }

    #[test]
    fn test_commit_revalidates_against_current_totals() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(10.0, 5.0);

        manager.commit_addition(&item, 5).unwrap();

        // Projected weight 50 + 60 = 110 > 100
        let result = manager.commit_addition(&item, 6);

        assert!(matches!(result, Err(BagError::CapacityExceeded { .. })));
        assert_eq!(manager.current_weight(), 50.0); // First commit untouched
        assert_eq!(manager.current_volume(), 25.0);
        assert_eq!(manager.entries().len(), 5);
    }

    #[test]
    fn test_commit_exactly_at_capacity_succeeds() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(10.0, 10.0);

        // 10 * 10 = 100 == limit, boundary is inclusive
        assert!(manager.commit_addition(&item, 10).is_ok());
        assert_eq!(manager.current_weight(), 100.0);
    }

    #[test]
    fn test_zero_quantity_commit_always_fails() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(1.0, 1.0);

        let result = manager.commit_addition(&item, 0);

        assert_eq!(result, Err(BagError::EmptyCommit));
        assert!(manager.entries().is_empty());
    }

    #[test]
    fn test_volume_limit_is_enforced_independently() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(1.0, 40.0);

        // Weight fits easily (3 kg) but volume projects to 120
        let result = manager.commit_addition(&item, 3);

        assert!(matches!(result, Err(BagError::CapacityExceeded { .. })));
    }

    #[test]
    fn test_preview_matches_commit_decision() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(10.0, 5.0);

        let preview = manager.preview_addition(&item, 5);
        assert!(preview.admissible);
        assert_eq!(preview.total_weight, 50.0);
        assert_eq!(preview.total_volume, 25.0);

        // Preview has no side effects
        assert_eq!(manager.current_weight(), 0.0);
        assert!(manager.entries().is_empty());

        assert!(manager.commit_addition(&item, 5).is_ok());

        // After committing, the same quantity no longer fits
        assert!(!manager.preview_addition(&item, 6).admissible);
    }

    #[test]
    fn test_preview_zero_quantity_is_inadmissible() {
        let manager = BagManager::new(100.0, 100.0);
        let item = crate_item(1.0, 1.0);

        let preview = manager.preview_addition(&item, 0);

        assert!(!preview.admissible);
        assert_eq!(preview.total_weight, 0.0);
        assert_eq!(preview.total_volume, 0.0);
    }

    #[test]
    fn test_remove_entry_updates_totals() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(10.0, 5.0);

        let created = manager.commit_addition(&item, 5).unwrap();
        manager.remove_entry(created[0]);

        assert_eq!(manager.current_weight(), 40.0);
        assert_eq!(manager.current_volume(), 20.0);
        assert_eq!(manager.entries().len(), 4);
    }

    #[test]
    fn test_remove_entry_is_idempotent() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(10.0, 5.0);

        let created = manager.commit_addition(&item, 2).unwrap();
        manager.remove_entry(created[0]);
        manager.remove_entry(created[0]); // Double-click, must be a no-op

        assert_eq!(manager.current_weight(), 10.0);
        assert_eq!(manager.current_volume(), 5.0);
        assert_eq!(manager.entries().len(), 1);
    }

    #[test]
    fn test_totals_never_go_negative() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(10.0, 5.0);

        let created = manager.commit_addition(&item, 1).unwrap();
        manager.remove_entry(created[0]);
        manager.remove_entry(created[0]);

        assert!(manager.current_weight() >= 0.0);
        assert!(manager.current_volume() >= 0.0);
        assert!(manager.entries().is_empty());
    }

    #[test]
    fn test_totals_track_sum_of_live_entries() {
        let mut manager = BagManager::new(100.0, 100.0);
        let light = crate_item(2.5, 1.25);
        let heavy = crate_item(12.0, 3.0);

        let a = manager.commit_addition(&light, 4).unwrap();
        let b = manager.commit_addition(&heavy, 3).unwrap();
        manager.remove_entry(a[1]);
        manager.remove_entry(b[0]);
        manager.commit_addition(&light, 2).unwrap();

        let (entry_weight, entry_volume) = entry_totals(&manager);
        assert!((manager.current_weight() - entry_weight).abs() < 1e-4);
        assert!((manager.current_volume() - entry_volume).abs() < 1e-4);
    }

    #[test]
    fn test_entry_ids_are_unique_across_commits() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(1.0, 1.0);

        let first = manager.commit_addition(&item, 3).unwrap();
        let second = manager.commit_addition(&item, 3).unwrap();

        for id in &first {
            assert!(!second.contains(id));
        }
    }

    #[test]
    fn test_freed_capacity_can_be_reused() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(50.0, 10.0);

        let created = manager.commit_addition(&item, 2).unwrap();
        assert!(manager.commit_addition(&item, 1).is_err()); // Full on weight

        manager.remove_entry(created[0]);
        assert!(manager.commit_addition(&item, 1).is_ok()); // Fits again
    }

    #[test]
    fn test_capacity_percentages_rounding_and_cap() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(33.333, 10.0);

        manager.commit_addition(&item, 1).unwrap();

        let (weight_pct, volume_pct) = manager.capacity_percentages();
        assert_eq!(weight_pct, 33.33); // Rounded to 2 decimal places
        assert_eq!(volume_pct, 10.0);

        manager.commit_addition(&item, 2).unwrap();
        let (weight_pct, _) = manager.capacity_percentages();
        assert!(weight_pct <= 100.0); // Never reports past full
    }

    #[test]
    fn test_zero_dimension_item_fills_nothing() {
        let mut manager = BagManager::new(100.0, 100.0);
        let item = crate_item(0.0, 0.0);

        manager.commit_addition(&item, 10).unwrap();

        assert_eq!(manager.current_weight(), 0.0);
        assert_eq!(manager.entries().len(), 10);
        assert_eq!(manager.capacity_percentages(), (0.0, 0.0));
    }
}
