use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "alphadex", version, about = "Alphabet-bucketed contact directory")]
pub struct Cli {
    /// Storage choice (csv, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("csv"))]
    pub storage_choice: String,

    /// Starts the interactive menu when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact surname
        #[arg(long)]
        surname: String,

        /// Contact first name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },

    /// List every contact grouped by surname initial
    List,

    /// Search contacts by exact surname or exact name
    Search {
        /// Surname to look up (single bucket scan)
        #[arg(long)]
        surname: Option<String>,

        /// First name to look up (scans every bucket)
        #[arg(long)]
        name: Option<String>,
    },

    /// Edit an existing contact, matched by surname
    /// provide name or phone in cases where surname matches multiple contacts
    Edit {
        /// Current surname
        #[arg(long)]
        surname: String,

        /// Current first name, narrows duplicate surnames
        #[arg(long)]
        name: Option<String>,

        /// Current phone number, narrows duplicate surnames
        #[arg(long)]
        phone: Option<String>,

        /// Update surname
        #[arg(long)]
        new_surname: Option<String>,

        /// Update first name
        #[arg(long)]
        new_name: Option<String>,

        /// Update phone number
        #[arg(long)]
        new_phone: Option<String>,
    },

    /// Delete a contact by surname
    /// provide optional name or phone in cases where surname matches multiple contacts
    Delete {
        /// Surname of contact to delete
        #[arg(long)]
        surname: String,

        /// First name of contact to delete
        #[arg(long)]
        name: Option<String>,

        /// Phone number of contact to delete
        #[arg(long)]
        phone: Option<String>,
    },
}
