//! Capability contract for generated containers.

/// Sentinel returned by [`Identifiable::representative_id`] when no row is
/// available. Negative values always mean "no id".
pub const NO_ID: i32 = -1;

/// Containers that can produce a representative integer id.
///
/// Generated `*SO` containers implement this when generation was asked for it
/// and the schema carries an `int` column literally named `id`. The contract
/// has exactly one operation: return the first row's id, or [`NO_ID`] when
/// there are no rows.
pub trait Identifiable {
    fn representative_id(&self) -> i32;
}
