use std::io::{self, Write};

use log::error;

use super::{confirm_action, get_input, print_directory, prompt};
use crate::domain::{Contact, ContactManager};
use crate::errors::AppError;
use crate::validation::validate_number;

enum MenuChoice {
    Add,
    Remove,
    Modify,
    ShowAll,
    Search,
    SaveExit,
}

fn parse_choice_from_menu() -> Result<MenuChoice, AppError> {
    println!("\n");
    println!("1. Add Contact");
    println!("2. Remove Contact");
    println!("3. Modify Contact");
    println!("4. Show All Contacts");
    println!("5. Search Contacts");
    println!("6. Save and Exit");
    print!("> ");
    io::stdout().flush()?;

    let action = get_input()?;

    match action.as_str() {
        "1" => Ok(MenuChoice::Add),
        "2" => Ok(MenuChoice::Remove),
        "3" => Ok(MenuChoice::Modify),
        "4" => Ok(MenuChoice::ShowAll),
        "5" => Ok(MenuChoice::Search),
        "6" => Ok(MenuChoice::SaveExit),
        _ => Err(AppError::ParseCommand(action)),
    }
}

/// The interactive session. Loops over the numbered menu until the user
/// saves and exits; the exit path always attempts a save and reports the
/// outcome before terminating.
pub fn run_menu(manager: &mut ContactManager, found_saved: bool) -> Result<(), AppError> {
    println!("\n\n--- Contact Directory ---\n");

    if found_saved {
        println!("Saved contact list loaded!");
    } else {
        println!("No saved contact list has been found");
    }

    'outerloop: loop {
        let choice = match parse_choice_from_menu() {
            Ok(choice) => choice,
            Err(e) => {
                eprintln!("{e}");
                continue 'outerloop;
            }
        };

        match choice {
            MenuChoice::Add => add_contact(manager)?,
            MenuChoice::Remove => remove_contact(manager)?,
            MenuChoice::Modify => modify_contact(manager)?,
            MenuChoice::ShowAll => {
                if manager.directory.is_empty() {
                    println!("No contact in contact list!");
                    continue 'outerloop;
                }

                print_directory(&manager.directory);
            }
            MenuChoice::Search => search_contacts(manager)?,
            MenuChoice::SaveExit => {
                match manager.save() {
                    Ok(()) => println!("Contact list saved successfully"),
                    Err(e) => {
                        error!("save failed: {e}");
                        eprintln!("Something went wrong while saving the contact list: {e}");
                    }
                }

                println!("\nBye!");
                break 'outerloop;
            }
        }
    }

    Ok(())
}

fn add_contact(manager: &mut ContactManager) -> Result<(), AppError> {
    let surname = prompt("New contact surname \n* to go back: ")?;
    if surname == "*" {
        return Ok(());
    }

    let name = prompt("New contact name: ")?;

    let phone = 'phone: loop {
        let phone = prompt("New contact phone number, digits only [prefix supported]: ")?;
        if validate_number(&phone)? {
            break 'phone phone;
        }
        println!("\nInvalid Number input.");
    };

    match manager.add_contact(&[surname, name, phone]) {
        Ok(()) => println!("New contact added to your contact list"),
        Err(e) => eprintln!("Impossible to add the new contact: {e}"),
    }
    Ok(())
}

/// Search by surname and let the user pick an entry when more than one
/// matches. Returns the chosen contact without touching the store.
fn search_and_pick(manager: &ContactManager, verb: &str) -> Result<Option<Contact>, AppError> {
    let surname = prompt(&format!(
        "Which contact would you like to {verb}? [surname]: "
    ))?;

    let matches: Vec<Contact> = manager
        .search_by_surname(&surname)
        .into_iter()
        .cloned()
        .collect();

    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0].clone())),
        _ => {
            println!("I found more than one. Which contact would you like to {verb}?");
            for (index, contact) in matches.iter().enumerate() {
                println!("{}) {contact}", index + 1);
            }

            'pick: loop {
                let choice = prompt(&format!(
                    "Choose one option using the respective number [1-{}]: ",
                    matches.len()
                ))?;

                match choice.parse::<usize>() {
                    Ok(n) if (1..=matches.len()).contains(&n) => {
                        break 'pick Ok(Some(matches[n - 1].clone()));
                    }
                    _ => println!("Seems that your choice is not allowed. Please try again"),
                }
            }
        }
    }
}

fn remove_contact(manager: &mut ContactManager) -> Result<(), AppError> {
    let Some(contact) = search_and_pick(manager, "remove")? else {
        println!("\nNo contact matched the criteria");
        return Ok(());
    };

    if !confirm_action(&format!("remove '{contact}'"))? {
        return Ok(());
    }

    if manager.remove_contact(contact.surname(), Some(contact.name()), Some(contact.phone()))? {
        println!("\nContact '{contact}' has been removed");
    } else {
        println!("\nNo contact matched the criteria");
    }
    Ok(())
}

fn modify_contact(manager: &mut ContactManager) -> Result<(), AppError> {
    let Some(target) = search_and_pick(manager, "modify")? else {
        println!("\nNo contact matched the criteria");
        return Ok(());
    };

    // Empty input keeps the current value
    let surname = prompt(&format!("Modify contact surname [{}]: ", target.surname()))?;
    let name = prompt(&format!("Modify contact name [{}]: ", target.name()))?;

    let phone = 'phone: loop {
        let phone = prompt(&format!(
            "Modify contact phone number [{}], digits only [prefix supported]: ",
            target.phone()
        ))?;

        if phone.is_empty() || validate_number(&phone)? {
            break 'phone phone;
        }
        println!("\nInvalid Number input.");
    };

    let surname = if surname.is_empty() {
        target.surname().to_string()
    } else {
        surname
    };
    let name = if name.is_empty() {
        target.name().to_string()
    } else {
        name
    };
    let phone = if phone.is_empty() {
        target.phone().to_string()
    } else {
        phone
    };

    let replacement = [surname, name, phone];

    match manager.modify_contact(&target, &replacement) {
        Ok(true) => {
            println!("Contact modified");
            println!("Previous ---> {target}");
            println!(
                "Current ---> {} {}: {}",
                replacement[0], replacement[1], replacement[2]
            );
        }
        Ok(false) => println!("Impossible to modify the chosen contact"),
        Err(e) => eprintln!("Impossible to modify the chosen contact: {e}"),
    }
    Ok(())
}

fn search_contacts(manager: &ContactManager) -> Result<(), AppError> {
    let by = 'by: loop {
        let choice = prompt("Search via surname or name? [s/n]: ")?;
        match choice.to_lowercase().as_str() {
            "s" | "n" => break 'by choice.to_lowercase(),
            _ => println!("Seems that your choice is not allowed. Please try again"),
        }
    };

    let found: Vec<&Contact> = if by == "s" {
        let surname = prompt("Which surname are you looking for? [surname]: ")?;
        manager.search_by_surname(&surname)
    } else {
        let name = prompt("Which name are you looking for? [name]: ")?;
        manager.search_by_name(&name)
    };

    if found.is_empty() {
        println!("No matching contact found");
        return Ok(());
    }

    println!("\nContact(s) Found");
    for contact in found {
        println!("{contact}");
    }
    Ok(())
}
