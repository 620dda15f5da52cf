pub mod contact;
pub mod directory;
pub mod manager;

pub use contact::Contact;
pub use directory::{ContactDirectory, bucket_key};
pub use manager::ContactManager;

use crate::errors::AppError;
use crate::storage::{self, ContactStore};
