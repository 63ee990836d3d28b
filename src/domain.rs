pub mod contact;
pub mod manager;
pub mod notice;
pub mod sample;
pub mod search;

use crate::errors::{AppError, ValidationError};
use crate::storage::Persistence;
use contact::{Contact, ContactInput, Tag};
use search::TagFilter;
