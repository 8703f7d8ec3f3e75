//! `contact-desk` command line: drives the form controllers from a terminal.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::info;

use contact_desk::adapters::{ConsoleNotifier, FileCredentialStore, LoggingNavigator, RestClient};
use contact_desk::application::{
    ContactDirectory, CreateAddressController, CreateContactController, EditAddressController,
    EditContactController, FormContext, LoadOutcome, LoginController, LogoutController,
    ProfileController, RegisterController, SessionContext, SubmitOutcome,
};
use contact_desk::config::{AppConfig, ConfigError, LogFormat, LoggingConfig, ValidationError};
use contact_desk::domain::address::AddressField;
use contact_desk::domain::contact::{ContactField, ContactQuery};
use contact_desk::domain::foundation::{AddressId, ContactId};
use contact_desk::domain::user::{LoginField, PasswordField, ProfileField, RegisterField};
use contact_desk::domain::validation::FormField;
use contact_desk::ports::TransportError;

/// `contact-desk` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "contact-desk",
    about = "Manage users, contacts and addresses against the Contact Desk API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create an account.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Sign in and store the session token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and forget the session token.
    Logout,
    /// Show or change the current user.
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// List, show, create and edit contacts.
    Contacts {
        #[command(subcommand)]
        command: ContactsCommand,
    },
    /// Create and edit a contact's addresses.
    Addresses {
        #[command(subcommand)]
        command: AddressesCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ProfileCommand {
    Show,
    SetName {
        name: String,
    },
    SetPassword {
        #[arg(long)]
        password: String,
        #[arg(long = "confirm")]
        confirm_password: String,
    },
}

#[derive(Debug, Subcommand)]
enum ContactsCommand {
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    Show {
        id: ContactId,
    },
    Create(ContactArgs),
    Edit {
        id: ContactId,
        #[command(flatten)]
        fields: ContactArgs,
    },
}

#[derive(Debug, Subcommand)]
enum AddressesCommand {
    Create {
        contact_id: ContactId,
        #[command(flatten)]
        fields: AddressArgs,
    },
    Edit {
        contact_id: ContactId,
        address_id: AddressId,
        #[command(flatten)]
        fields: AddressArgs,
    },
}

/// Contact fields; on edit, omitted flags keep the loaded value.
#[derive(Debug, Args)]
struct ContactArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
}

impl ContactArgs {
    fn values(self) -> Vec<(ContactField, String)> {
        [
            (ContactField::FirstName, self.first_name),
            (ContactField::LastName, self.last_name),
            (ContactField::Email, self.email),
            (ContactField::Phone, self.phone),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// Address fields; on edit, omitted flags keep the loaded value.
#[derive(Debug, Args)]
struct AddressArgs {
    #[arg(long)]
    street: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    province: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
}

impl AddressArgs {
    fn values(self) -> Vec<(AddressField, String)> {
        [
            (AddressField::Street, self.street),
            (AddressField::City, self.city),
            (AddressField::Province, self.province),
            (AddressField::Country, self.country),
            (AddressField::PostalCode, self.postal_code),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("HTTP client: {0}")]
    Client(#[from] TransportError),

    #[error("runtime: {0}")]
    Runtime(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match start(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("contact-desk: {}", e);
            ExitCode::from(2)
        }
    }
}

fn start(cli: Cli) -> Result<bool, CliError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let runtime = Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(run(cli.command, config))
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), CliError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter()?)
        .with_writer(io::stderr);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.compact().init(),
    }
    Ok(())
}

/// Returns whether the command ended in success.
async fn run(command: Command, config: AppConfig) -> Result<bool, CliError> {
    let api = Arc::new(RestClient::from_config(&config.api)?);
    let store = Arc::new(FileCredentialStore::from_config(&config.storage));
    let session = SessionContext::open(store).await;
    let navigator = LoggingNavigator::new();
    let ctx = FormContext::new(
        session,
        Arc::new(ConsoleNotifier::new()),
        Arc::new(navigator.clone()),
    );

    info!(base_url = api.base_url(), "Contact Desk ready");

    let succeeded = match command {
        Command::Register {
            username,
            password,
            name,
        } => {
            let mut controller = RegisterController::new(ctx, api);
            controller.set(RegisterField::Username, username);
            controller.set(RegisterField::Password, password);
            controller.set(RegisterField::Name, name);
            report(controller.submit().await)
        }
        Command::Login { username, password } => {
            let mut controller = LoginController::new(ctx, api);
            controller.set(LoginField::Username, username);
            controller.set(LoginField::Password, password);
            report(controller.submit().await)
        }
        Command::Logout => LogoutController::spawn(ctx, api)
            .finished()
            .await
            .is_succeeded(),
        Command::Profile { command } => run_profile(command, ctx, api).await,
        Command::Contacts { command } => run_contacts(command, ctx, api).await,
        Command::Addresses { command } => run_addresses(command, ctx, api).await,
    };

    if let Some(route) = navigator.last() {
        println!("-> {}", route);
    }
    Ok(succeeded)
}

async fn run_profile(command: ProfileCommand, ctx: FormContext, api: Arc<RestClient>) -> bool {
    let (mut controller, loaded) = ProfileController::mount(ctx, api).await;
    match command {
        ProfileCommand::Show => {
            if let Some(profile) = controller.profile() {
                println!("username: {}", profile.username);
                println!("name:     {}", profile.name);
            }
            loaded.is_loaded()
        }
        ProfileCommand::SetName { name } => {
            controller.set_name(ProfileField::Name, name);
            report(controller.submit_name().await)
        }
        ProfileCommand::SetPassword {
            password,
            confirm_password,
        } => {
            controller.set_password(PasswordField::Password, password);
            controller.set_password(PasswordField::ConfirmPassword, confirm_password);
            report(controller.submit_password().await)
        }
    }
}

async fn run_contacts(command: ContactsCommand, ctx: FormContext, api: Arc<RestClient>) -> bool {
    match command {
        ContactsCommand::List {
            page,
            name,
            email,
            phone,
        } => {
            let query = ContactQuery {
                page,
                name,
                email,
                phone,
            };
            let directory = ContactDirectory::new(ctx, api.clone(), api);
            match directory.list(&query).await {
                Ok(page) => {
                    for contact in &page.data {
                        println!(
                            "{:>6}  {:<30} {:<30} {}",
                            contact.id,
                            contact.full_name(),
                            contact.email,
                            contact.phone
                        );
                    }
                    if let Some(paging) = page.paging {
                        println!(
                            "page {} of {} ({} contacts)",
                            paging.page, paging.total_page, paging.total_item
                        );
                    }
                    true
                }
                Err(_) => false,
            }
        }
        ContactsCommand::Show { id } => {
            let directory = ContactDirectory::new(ctx, api.clone(), api);
            match directory.detail(id).await {
                Ok(detail) => {
                    let contact = &detail.contact;
                    println!("{} (#{})", contact.full_name(), contact.id);
                    println!("email: {}", contact.email);
                    println!("phone: {}", contact.phone);
                    for record in &detail.addresses {
                        let a = &record.address;
                        println!(
                            "  [{}] {}, {}, {}, {} {}",
                            record.id, a.street, a.city, a.province, a.country, a.postal_code
                        );
                    }
                    true
                }
                Err(_) => false,
            }
        }
        ContactsCommand::Create(fields) => {
            let mut controller = CreateContactController::new(ctx, api);
            for (field, value) in fields.values() {
                controller.set(field, value);
            }
            report(controller.submit().await)
        }
        ContactsCommand::Edit { id, fields } => {
            let (mut controller, loaded) = EditContactController::mount(ctx, api, id).await;
            if !matches!(loaded, LoadOutcome::Loaded) {
                return false;
            }
            for (field, value) in fields.values() {
                controller.set(field, value);
            }
            report(controller.submit().await)
        }
    }
}

async fn run_addresses(command: AddressesCommand, ctx: FormContext, api: Arc<RestClient>) -> bool {
    match command {
        AddressesCommand::Create { contact_id, fields } => {
            let mut controller =
                CreateAddressController::mount(ctx, api.clone(), api, contact_id).await;
            if let Some(contact) = controller.contact() {
                println!("Contact: {}", contact.full_name());
            }
            for (field, value) in fields.values() {
                controller.set(field, value);
            }
            report(controller.submit().await)
        }
        AddressesCommand::Edit {
            contact_id,
            address_id,
            fields,
        } => {
            let (mut controller, loaded) =
                EditAddressController::mount(ctx, api.clone(), api, contact_id, address_id).await;
            if !matches!(loaded, LoadOutcome::Loaded) {
                return false;
            }
            if let Some(contact) = controller.contact() {
                println!("Contact: {}", contact.full_name());
            }
            for (field, value) in fields.values() {
                controller.set(field, value);
            }
            report(controller.submit().await)
        }
    }
}

/// Prints per-field messages for a rejected draft; notices were already shown.
fn report<F: FormField>(outcome: SubmitOutcome<F>) -> bool {
    match &outcome {
        SubmitOutcome::Rejected(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("  {}: {}", field.name(), message);
            }
        }
        SubmitOutcome::NotReady(status) => eprintln!("form not ready ({:?})", status),
        SubmitOutcome::Succeeded { .. } | SubmitOutcome::Failed(_) => {}
    }
    outcome.is_succeeded()
}
