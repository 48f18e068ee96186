//! # Generic Table Actor
//!
//! `ResourceActor` owns one table of rows and processes requests sequentially, which
//! gives it exclusive access to its store without any locking.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages one table of rows.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the `store`
/// needs no `Mutex` or `RwLock`.
///
/// The store is a `BTreeMap`, so a [`ResourceRequest::Scan`] always returns rows in
/// primary-key order. The query layer relies on this as its natural scan order.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Team>::new(32);
/// tokio::spawn(actor.run(()));
/// let id = client.create(TeamCreate::new("TeamA")).await?;
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows rows
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Member" instead of "query_recipe::model::member::Member")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            // Only consume the id once the row is accepted.
                            self.next_id += 1;
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get(&id) {
                        // Work on a copy so a rejected update leaves the stored row untouched.
                        let mut updated = item.clone();
                        if let Err(e) = updated.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.insert(id.clone(), updated.clone());
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(updated));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Scan { respond_to } => {
                    let rows: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, rows = rows.len(), "Scan");
                    let _ = respond_to.send(Ok(rows));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u64,
        label: String,
    }

    #[derive(Debug)]
    struct TagCreate {
        label: String,
    }

    #[derive(Debug)]
    struct TagUpdate {
        label: Option<String>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Tag error: {0}")]
    struct TagError(String);

    #[async_trait]
    impl ActorEntity for Tag {
        type Id = u64;
        type Create = TagCreate;
        type Update = TagUpdate;
        type Context = ();
        type Error = TagError;

        fn from_create_params(id: u64, params: TagCreate) -> Result<Self, TagError> {
            if params.label.is_empty() {
                return Err(TagError("empty label".into()));
            }
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, update: TagUpdate, _ctx: &()) -> Result<(), TagError> {
            if let Some(label) = update.label {
                if label.is_empty() {
                    return Err(TagError("empty label".into()));
                }
                self.label = label;
            }
            Ok(())
        }
    }

    fn create(label: &str) -> TagCreate {
        TagCreate {
            label: label.to_string(),
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_resource_actor_crud_and_scan() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run(()));

        // 1. Create
        let first = client.create(create("alpha")).await.unwrap();
        let second = client.create(create("beta")).await.unwrap();
        assert_eq!((first, second), (1, 2));

        // 2. Get
        let tag = client.get(first).await.unwrap().unwrap();
        assert_eq!(tag.label, "alpha");

        // 3. Update
        let updated = client
            .update(second, TagUpdate { label: Some("gamma".into()) })
            .await
            .unwrap();
        assert_eq!(updated.label, "gamma");

        // 4. Scan returns rows in key order
        let rows = client.scan().await.unwrap();
        let labels: Vec<&str> = rows.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["alpha", "gamma"]);

        // 5. Delete
        client.delete(first).await.unwrap();
        assert!(client.get(first).await.unwrap().is_none());
        assert_eq!(client.scan().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_consume_id() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run(()));

        let err = client.create(create("")).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));

        let id = client.create(create("alpha")).await.unwrap();
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_stored_row() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run(()));

        let id = client.create(create("alpha")).await.unwrap();
        let result = client.update(id, TagUpdate { label: Some(String::new()) }).await;
        assert!(result.is_err());

        let tag = client.get(id).await.unwrap().unwrap();
        assert_eq!(tag.label, "alpha");
    }

    #[tokio::test]
    async fn test_missing_rows_report_not_found() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run(()));

        let err = client.delete(42).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "42"));

        let err = client.update(42, TagUpdate { label: None }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(_)));
    }
}
