//! # Generic Messages
//!
//! The message types used between `ResourceClient` and `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD + Scan Pattern
/// Each actor manages one table. Instead of ad-hoc messages for every operation,
/// we standardize on the lifecycle operations that apply to any persistent row,
/// plus a full ordered scan that the query layer joins and filters.
///
/// - **Create**: Uses [`ActorEntity::Create`] to insert a new row.
/// - **Get (Read)**: Fetches a row by primary key.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing row.
/// - **Delete**: Removes the row.
/// - **Scan**: Returns a snapshot of every row in primary-key order.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Scan {
        respond_to: Response<Vec<T>>,
    },
}
