mod config;
mod render;
mod storage;
mod transport;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use session::form::{LoginForm, SignupForm};
use session::graphql::DEFAULT_ENDPOINT;
use session::{GraphqlError, RootController, Screen, StorageError};
use tracing_subscriber::EnvFilter;

use config::{ClientConfig, ConfigError};
use storage::FileStorage;
use transport::HttpTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Graphql(#[from] GraphqlError),
    #[error("{0}")]
    Auth(String),
    #[error("not signed in; run `portal login` first")]
    NotSignedIn,
    #[error("already signed in as {0}; run `portal logout` first")]
    AlreadySignedIn(String),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portal", about = "Sign in, sign up, and view your profile")]
struct Cli {
    #[arg(long, env = "PORTAL_GRAPHQL_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[arg(long, env = "PORTAL_STATE_DIR")]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with an email or username.
    Login {
        #[arg(long)]
        identifier: String,
        /// Read from stdin when omitted.
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Create an account and sign in.
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Read from stdin when omitted.
        #[arg(long)]
        password: Option<String>,
        /// Read from stdin when omitted.
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Show the signed-in user's profile.
    #[command(visible_alias = "whoami")]
    Dashboard,
    /// Sign out and forget the stored session.
    Logout,
    /// List users visible to the signed-in account.
    Users,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::from_env(&cli.endpoint, cli.state_dir)?;
    tracing::debug!(endpoint = %config.endpoint, state_dir = %config.state_dir.display(), "config resolved");
    let storage = FileStorage::open(&config.state_dir)?;
    tracing::debug!(path = %storage.path().display(), "session file");
    let mut controller = RootController::new(storage);

    match cli.command {
        Command::Login { identifier, password } => {
            ensure_signed_out(&controller)?;
            let transport = HttpTransport::new(&config)?;
            let mut form = LoginForm::new();
            form.set_identifier(identifier);
            form.set_password(password_or_prompt(password, "Password: ")?);
            if !controller.submit_login(&mut form, &transport).await {
                return Err(CliError::Auth(form.error().unwrap_or("Login failed").to_owned()));
            }
            print_screen(&controller);
            Ok(())
        }
        Command::Signup { username, email, password, confirm_password } => {
            ensure_signed_out(&controller)?;
            controller.show_signup();
            let transport = HttpTransport::new(&config)?;
            let mut form = SignupForm::new();
            form.set_username(username);
            form.set_email(email);
            form.set_password(password_or_prompt(password, "Password: ")?);
            form.set_confirm_password(password_or_prompt(confirm_password, "Confirm password: ")?);
            if !controller.submit_signup(&mut form, &transport).await {
                return Err(CliError::Auth(form.error().unwrap_or("Signup failed").to_owned()));
            }
            print_screen(&controller);
            Ok(())
        }
        Command::Dashboard => {
            if !controller.session().is_authenticated() {
                return Err(CliError::NotSignedIn);
            }
            print_screen(&controller);
            Ok(())
        }
        Command::Logout => {
            let was_signed_in = controller.session().is_authenticated();
            controller.on_logout()?;
            println!("{}", if was_signed_in { "Signed out." } else { "Not signed in." });
            Ok(())
        }
        Command::Users => {
            let token = controller.session().token().ok_or(CliError::NotSignedIn)?;
            let transport = HttpTransport::new(&config)?;
            let rows = session::graphql::users(&transport, token).await?;
            println!("{}", render::users(&rows));
            Ok(())
        }
    }
}

fn ensure_signed_out(controller: &RootController<FileStorage>) -> Result<(), CliError> {
    match controller.session().user() {
        Some(user) => Err(CliError::AlreadySignedIn(user.username.clone())),
        None => Ok(()),
    }
}

fn print_screen(controller: &RootController<FileStorage>) {
    match controller.screen() {
        Screen::Dashboard(view) => println!("{}", render::dashboard(&view)),
        Screen::Login => println!("Not signed in. Run `portal login`."),
        Screen::Signup => println!("Not signed in. Run `portal signup`."),
    }
}

fn password_or_prompt(value: Option<String>, prompt: &str) -> Result<String, CliError> {
    if let Some(value) = value {
        return Ok(value);
    }
    eprint!("{prompt}");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
