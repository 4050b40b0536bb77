/// Analysis layer: pure derivations over one loaded [`Table`].
///
/// Every function here reads the table and returns a fresh value; nothing
/// mutates the table. The UI recomputes these on each relevant interaction.
///
/// [`Table`]: crate::data::model::Table
pub mod bins;
pub mod detail;
pub mod ranking;
pub mod search;
pub mod summary;
