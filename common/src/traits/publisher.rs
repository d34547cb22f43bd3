use crate::types::Callback;
use uuid::Uuid;

/// Anything that can hand a callback to a publisher and remember the id it was given.
pub trait Notifiable<T>: Sync + Send {
    fn get_callback(&self) -> Callback<T>;
    fn set_id(&mut self, id: Uuid);
}
