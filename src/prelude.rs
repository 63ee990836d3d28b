pub use crate::cli::{command, render, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactInput, Tag},
    manager::{ContactStore, Stats},
    notice::{Notice, NoticeKind},
    sample::sample_contacts,
    search::TagFilter,
};
pub use crate::errors::{AppError, ValidationError};
pub use crate::storage::{
    self, KeyValueStore, Persistence, STORAGE_KEY, file::FileStore, memory::MemoryStore,
};
