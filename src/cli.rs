use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use codehub_client::api::Envelope;
use codehub_client::config::Config;
use codehub_client::routing::NavigateOutcome;
use codehub_client::state::SliceName;
use codehub_client::App;

#[derive(Parser)]
#[command(name = "codehub")]
#[command(about = "Inspect routes, persisted UI state and the code-hosting API")]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding persisted UI state
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List a route table in match order (default: the session's)
    Routes {
        /// The signed-out table
        #[arg(long, conflicts_with = "full")]
        public: bool,
        /// The signed-in table
        #[arg(long)]
        full: bool,
    },
    /// Show which route a path resolves to, running its loader
    Resolve {
        path: String,
        /// Force the signed-in table instead of the persisted session's
        #[arg(long, default_value_t = false)]
        authenticated: bool,
    },
    /// Inspect or clear a persisted slice
    State {
        #[command(subcommand)]
        command: StateCommand,
    },
    Login {
        username: String,
        password: String,
    },
    Logout,
    /// Print the signed-in user
    Whoami,
    /// Show a repository
    Repo { owner: String, name: String },
    Star { owner: String, name: String },
    Unstar { owner: String, name: String },
    /// List public repositories
    Explore {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
}

#[derive(Subcommand)]
enum StateCommand {
    Show { slice: String },
    Clear { slice: String },
}

pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(dir) = cli.state_dir {
        config.storage.dir = Some(dir);
    }
    let app = App::open(&config)?;

    match cli.command {
        Command::Routes { public, full } => {
            let table = match table_choice(public, full) {
                Some(authenticated) => app.router().table_for(authenticated),
                None => app.router().active_table(),
            };
            for route in table.routes() {
                let loader = if route.has_loader() { " (loader)" } else { "" };
                println!(
                    "{:<32} {:<16} {}{}",
                    route.pattern().to_string(),
                    route.view().to_string(),
                    route.feature(),
                    loader
                );
            }
        }
        Command::Resolve {
            path,
            authenticated,
        } => {
            if authenticated {
                app.router().set_authenticated(true);
            }
            match app.navigate(&path).await {
                NavigateOutcome::Committed(navigation) => {
                    println!("view:   {}", navigation.matched.view());
                    println!("route:  {}", navigation.matched.route().pattern());
                    for (name, value) in navigation.matched.params() {
                        println!("param:  {name} = {value}");
                    }
                    match navigation.props {
                        Some(props) => println!("props:  {}", serde_json::to_string_pretty(&props)?),
                        None => println!("props:  (none)"),
                    }
                }
                NavigateOutcome::NotFound { location } => bail!("no route matches {location}"),
                NavigateOutcome::Stale => bail!("navigation was superseded"),
            }
        }
        Command::State { command } => match command {
            StateCommand::Show { slice } => {
                let name = parse_slice(&slice)?;
                println!("{}", serde_json::to_string_pretty(&app.state().snapshot(name))?);
            }
            StateCommand::Clear { slice } => {
                let name = parse_slice(&slice)?;
                app.state().clear(name);
                println!("cleared {name}");
            }
        },
        Command::Login { username, password } => {
            print_envelope(&app.login(&username, &password).await?)?;
        }
        Command::Logout => print_envelope(&app.logout().await?)?,
        Command::Whoami => match app.state().current_user() {
            Some(user) => println!("{}", user.username),
            None => println!("not signed in"),
        },
        Command::Repo { owner, name } => {
            print_envelope(&app.api().repo.info(&owner, &name).await?)?;
        }
        Command::Star { owner, name } => {
            print_envelope(&app.api().repo.star(&owner, &name).await?)?;
        }
        Command::Unstar { owner, name } => {
            print_envelope(&app.api().repo.unstar(&owner, &name).await?)?;
        }
        Command::Explore { page, size } => {
            print_envelope(&app.api().explore.repos(page, size).await?)?;
        }
    }

    Ok(())
}

/// Which table `routes` lists: `Some(flag)` when forced, else the session's.
fn table_choice(public: bool, full: bool) -> Option<bool> {
    match (public, full) {
        (true, _) => Some(false),
        (_, true) => Some(true),
        _ => None,
    }
}

fn parse_slice(raw: &str) -> Result<SliceName> {
    SliceName::parse(raw).with_context(|| {
        let known: Vec<&str> = SliceName::all().iter().map(SliceName::as_str).collect();
        format!("unknown slice '{raw}' (known: {})", known.join(", "))
    })
}

/// Print the payload of a success envelope, or fail with its message.
fn print_envelope<T: Serialize>(envelope: &Envelope<T>) -> Result<()> {
    if !envelope.is_success() {
        bail!("{} (code {})", envelope.message(), envelope.code());
    }
    match envelope.data() {
        Some(data) => println!("{}", serde_json::to_string_pretty(data)?),
        None => println!("{}", envelope.message()),
    }
    Ok(())
}
