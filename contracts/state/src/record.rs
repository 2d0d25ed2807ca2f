use prost::Message;

/// A message persisted as the single object of its own storage space.
pub trait Record: Message + Default {
    const SPACE_ID: u32;

    /// Record name used in diagnostics.
    const NAME: &'static str;
}
