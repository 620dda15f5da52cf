use std::env;

use clap::Parser;
use log::error;

use super::command::{Cli, Commands};
use super::{menu, print_directory};
use crate::domain::{Contact, ContactManager};
use crate::errors::AppError;
use crate::validation::{ValidationReq, validate_number, validate_person_name};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    unsafe {
        env::set_var("STORAGE_CHOICE", &cli.storage_choice);
    }

    let mut manager = ContactManager::new()?;
    let found_saved = manager.load()?;

    let Some(command) = cli.command else {
        return menu::run_menu(&mut manager, found_saved);
    };

    match command {
        Commands::Add {
            surname,
            name,
            phone,
        } => {
            if !validate_person_name(&surname)? || !validate_person_name(&name)? {
                return Err(AppError::Validation(ValidationReq::name_req()));
            }

            if !validate_number(&phone)? {
                return Err(AppError::Validation(ValidationReq::phone_req()));
            }

            manager.add_contact(&[surname, name, phone])?;
            save_and_report(&manager)?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::List => {
            if manager.directory.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            print_directory(&manager.directory);
            Ok(())
        }

        Commands::Search { surname, name } => {
            let found = match (surname, name) {
                (Some(surname), _) => manager.search_by_surname(&surname),
                (None, Some(name)) => manager.search_by_name(&name),
                (None, None) => {
                    return Err(AppError::Validation(
                        "Provide --surname or --name to search".to_string(),
                    ));
                }
            };

            if found.is_empty() {
                println!("No matching contact found");
                return Ok(());
            }

            for contact in found {
                println!("{contact}");
            }
            Ok(())
        }

        Commands::Delete {
            surname,
            name,
            phone,
        } => {
            if !manager.remove_contact(&surname, name.as_deref(), phone.as_deref())? {
                return Err(AppError::NotFound("Contact".to_string()));
            }

            save_and_report(&manager)?;
            println!("Contact deleted successfully");
            Ok(())
        }

        Commands::Edit {
            surname,
            name,
            phone,
            new_surname,
            new_name,
            new_phone,
        } => {
            let matches: Vec<Contact> = manager
                .search_by_surname(&surname)
                .into_iter()
                .filter(|c| name.as_deref().is_none_or(|n| c.name().eq_ignore_ascii_case(n)))
                .filter(|c| phone.as_deref().is_none_or(|p| c.phone() == p))
                .cloned()
                .collect();

            let old = match matches.as_slice() {
                [] => return Err(AppError::NotFound("Contact".to_string())),
                [only] => only,
                more => {
                    return Err(AppError::Validation(format!(
                        "{} contacts match, narrow down with --name or --phone",
                        more.len()
                    )));
                }
            };

            if let Some(new_surname) = &new_surname
                && !validate_person_name(new_surname)?
            {
                return Err(AppError::Validation(ValidationReq::name_req()));
            }
            if let Some(new_name) = &new_name
                && !validate_person_name(new_name)?
            {
                return Err(AppError::Validation(ValidationReq::name_req()));
            }
            if let Some(new_phone) = &new_phone
                && !validate_number(new_phone)?
            {
                return Err(AppError::Validation(ValidationReq::phone_req()));
            }

            let fields = vec![
                new_surname.unwrap_or_else(|| old.surname().to_string()),
                new_name.unwrap_or_else(|| old.name().to_string()),
                new_phone.unwrap_or_else(|| old.phone().to_string()),
            ];

            if !manager.modify_contact(old, &fields)? {
                return Err(AppError::NotFound("Contact".to_string()));
            }
            save_and_report(&manager)?;

            println!("Contact modified successfully");
            Ok(())
        }
    }
}

fn save_and_report(manager: &ContactManager) -> Result<(), AppError> {
    manager.save().inspect_err(|e| error!("save failed: {e}"))
}
