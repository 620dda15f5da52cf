pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact},
    directory::{ContactDirectory, bucket_key},
    manager::ContactManager,
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactStore,
    stores::{CsvStorage, MemStorage},
};
