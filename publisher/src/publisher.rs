use dashmap::DashMap;
use rayon::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use common::traits::Notifiable;
use common::types::Callback;

pub trait Publishable<T> {
    fn register_listener(&self, listener: &mut dyn Notifiable<T>) -> Uuid;
    fn unregister_listener(&self, listener_id: Uuid) -> bool;
    fn unregister_all(&self);
    fn notify_listeners(&self, data: Arc<T>);
}

/// Record of registered listeners that will be notified of updates.
///
/// Cloning shares the registry.
#[derive(Clone, Default)]
pub struct Publisher<T> {
    listeners: Arc<DashMap<Uuid, Callback<T>>>,
}

impl<T> Publisher<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(DashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Publishable<T> for Publisher<T>
where
    T: Send + Sync + 'static,
{
    fn register_listener(&self, listener: &mut dyn Notifiable<T>) -> Uuid {
        let callback = listener.get_callback();
        let listener_id = Uuid::new_v4();
        listener.set_id(listener_id);
        self.listeners.insert(listener_id, callback);
        log::debug!("Registered listener {}", listener_id);
        listener_id
    }

    fn unregister_all(&self) {
        self.listeners.clear();
    }

    /// Returns false if no listener with that id was registered.
    fn unregister_listener(&self, listener_id: Uuid) -> bool {
        self.listeners.remove(&listener_id).is_some()
    }

    /// Calls every listener before returning. Listeners run in parallel, so
    /// they must not block on each other.
    fn notify_listeners(&self, data: Arc<T>) {
        let listeners: Vec<(Uuid, Callback<T>)> = self
            .listeners
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        listeners.into_par_iter().for_each(|(id, callback)| {
            callback(id, data.clone());
        });
    }
}
