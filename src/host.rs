use crate::switch::InverterSwitch;

/// What the home-automation host provides to this crate.
///
/// The host owns entity lifecycle, state caching and polling; we only hand
/// it new entities and ask it to refresh one after a write.
pub trait Host: Send + Sync {
    /// Registers newly created entities. Never called with an empty list.
    fn add_entities(&self, entities: Vec<InverterSwitch>);

    /// Requests that the host publishes the entity's state, re-running its
    /// `update` first when `force_refresh` is set.
    fn schedule_update(&self, unique_id: &str, force_refresh: bool);
}
