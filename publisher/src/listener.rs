use std::sync::Arc;
use uuid::Uuid;

use common::traits::Notifiable;
use common::types::Callback;

/// Callback wrapper that can be registered with a [`Publisher`](crate::Publisher).
#[derive(Clone)]
pub struct Listener<T> {
    callback: Callback<T>,
    id: Option<Uuid>,
}

impl<T> Listener<T>
where
    T: Send + Sync + 'static,
{
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Uuid, Arc<T>) + Send + Sync + 'static,
    {
        Listener {
            callback: Arc::new(callback),
            id: None,
        }
    }

    /// Id assigned at registration, if any.
    pub fn id(&self) -> Option<Uuid> {
        self.id
    }
}

impl<T> Notifiable<T> for Listener<T>
where
    T: Send + Sync,
{
    fn get_callback(&self) -> Callback<T> {
        self.callback.clone()
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}
