pub mod id;
pub mod model;
pub mod registry;
pub mod storage;

pub use id::FieldId;
pub use model::*;
pub use registry::{FieldKind, FieldType};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
