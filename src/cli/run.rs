use crate::{
    cli::render::{display_contact, display_contacts, display_notice, display_stats},
    prelude::{
        AppError, ContactInput, ContactStore, Notice, Persistence,
        command::{Cli, Commands},
        storage::{StorageMediums, parse_storage_type},
    },
};
use clap::Parser;
use dotenv::dotenv;
use log::info;
use std::io::{self, Write};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    let medium = StorageMediums::from(&cli.storage)?;
    let backend = parse_storage_type(medium, &cli.data_dir)?;
    let mut book = ContactStore::open(Persistence::new(backend));

    info!(
        "event=app_start medium={} data_dir={}",
        cli.storage,
        cli.data_dir.display()
    );

    match cli.command {
        Commands::Add {
            name,
            phone,
            email,
            tag,
        } => {
            let input = ContactInput {
                name: name.unwrap_or_default(),
                phone: phone.unwrap_or_default(),
                email: email.unwrap_or_default(),
                tag,
            };

            let contact = book.create(input)?;

            println!("{}", display_notice(&Notice::added()));
            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::Edit {
            id,
            name,
            phone,
            email,
            tag,
        } => {
            let current = book.begin_edit(id)?;

            // Start from the current values, then apply what was given
            let mut form = ContactInput::from(&current);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(phone) = phone {
                form.phone = phone;
            }
            if let Some(email) = email {
                form.email = email;
            }
            if tag.is_some() {
                form.tag = tag;
            }

            let contact = book.update(id, form)?;

            println!("{}", display_notice(&Notice::updated()));
            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::Delete { id, yes } => {
            let Some(contact) = book.get(id) else {
                return Err(AppError::NotFound("Contact".to_string()));
            };

            if !yes {
                confirm_action(&format!(
                    "delete this contact?\n{}",
                    display_contact(contact)
                ))?;

                if get_input_to_lower()? != "y" {
                    println!("Delete cancelled");
                    return Ok(());
                }
            }

            book.delete(id)?;

            println!("{}", display_notice(&Notice::deleted()));
            Ok(())
        }

        Commands::List { search, tag } => {
            let contacts = book.query(search.as_deref(), tag);

            println!("{}", display_contacts(&contacts));
            println!();
            println!("{}", display_stats(&book.stats()));
            Ok(())
        }

        Commands::Stats => {
            println!("{}", display_stats(&book.stats()));
            Ok(())
        }
    }
}

pub fn confirm_action(action: &str) -> Result<(), AppError> {
    println!("\nAre you sure you want to {}\n(y/n)", action);
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

pub fn get_input_to_lower() -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}
