//! The contract shared by every stored record kind.

/// A storable record: carries an identity slot and knows how to apply its
/// sparse patch type.
///
/// Identities are owned by the repository; `assign_id` is called exactly
/// once when a record is stored, overwriting anything the caller put there.
pub trait Record: Clone {
    /// Sparse update payload. Only fields present in the payload change.
    type Patch;

    fn id(&self) -> u64;

    fn assign_id(&mut self, id: u64);

    /// Apply every field present in `patch`, leaving absent fields at their
    /// current values.
    fn apply(&mut self, patch: Self::Patch);
}
