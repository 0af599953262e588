use crate::catalog::Item;

/// Opaque handle for a live bag entry
///
/// Handed out by `BagManager::commit_addition` and used to remove entries
/// later. The presentation layer keeps its own mapping from visual cell to
/// id, which decouples capacity bookkeeping from rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub(super) u64);

/// One physical unit of an item inside the bag
///
/// Quantity N is modeled as N independent entries rather than a count
/// field, so removing a single unit never has to touch a shared counter.
/// Weight, volume, and sprite path are snapshots taken at commit time;
/// removal and rendering never need to consult the catalog.
#[derive(Debug, Clone)]
pub struct BagEntry {
    /// Handle for this entry
    pub id: EntryId,

    /// Catalog id of the item this unit came from
    pub item_id: u32,

    /// Weight contribution of this single unit
    pub weight: f32,

    /// Volume contribution of this single unit
    pub volume: f32,

    /// Sprite path snapshot
    pub image_ref: String,
}

impl BagEntry {
    /// Creates an entry for one unit of the given item
    pub(super) fn new(id: EntryId, item: &Item) -> Self {
        BagEntry {
            id,
            item_id: item.id,
            weight: item.weight,
            volume: item.volume,
            image_ref: item.image_ref.clone(),
        }
    }
}
