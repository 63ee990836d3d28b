use crate::prelude::{Tag, TagFilter, storage::default_data_dir};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage medium (file, mem)
    #[arg(long, env = "CONTACT_BOOK_STORAGE", default_value_t = String::from("file"))]
    pub storage: String,

    /// Directory the contact list is saved in
    #[arg(long, env = "CONTACT_BOOK_DIR", default_value_os_t = default_data_dir())]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: Option<String>,

        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// Contact tag (friend, work, family, other)
        #[arg(long)]
        tag: Option<Tag>,
    },
    /// Edit an existing contact by id
    /// Only the fields given are changed
    Edit {
        /// Id of the contact to edit
        #[arg(long)]
        id: u64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New tag (friend, work, family, other)
        #[arg(long)]
        tag: Option<Tag>,
    },
    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete
        #[arg(long)]
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List contacts sorted by name
    List {
        /// Only contacts whose name, phone or email contain this text
        #[arg(long)]
        search: Option<String>,

        /// Only contacts with this tag (any, friend, work, family, other)
        #[arg(long, default_value = "any")]
        tag: TagFilter,
    },
    /// Show contact counts per tag
    Stats,
}
