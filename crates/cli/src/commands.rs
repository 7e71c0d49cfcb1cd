//! CLI commands

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use petcare_frontend_common::{App, AppConfig};
use petcare_http::Notifier;
use petcare_http::types::{
    LoginRequest, OrderQuery, OrderStatus, Paging, PetQuery, ServiceQuery,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Reports request failures to the terminal user
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and keep the session for later commands
    Login {
        #[arg(short, long, env = "PETCARE_USERNAME")]
        username: String,

        #[arg(short, long, env = "PETCARE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami {
        /// Fetch the profile from the server instead of the stored copy
        #[arg(long)]
        refresh: bool,
    },

    /// Show where a navigation to PATH would land
    Navigate { path: String },

    /// Pet records
    Pets {
        #[command(subcommand)]
        command: PetCommands,
    },

    /// Service orders
    Orders {
        #[command(subcommand)]
        command: OrderCommands,
    },

    /// Service catalogue
    Services {
        #[command(subcommand)]
        command: ServiceCommands,
    },

    /// Dashboard counters
    Stats,
}

#[derive(Args)]
pub struct PageArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,

    #[arg(long, default_value_t = 10)]
    size: u32,
}

impl From<PageArgs> for Paging {
    fn from(args: PageArgs) -> Self {
        Self {
            page: args.page,
            size: args.size,
        }
    }
}

#[derive(Subcommand)]
pub enum PetCommands {
    List {
        #[command(flatten)]
        paging: PageArgs,

        #[arg(long)]
        owner_id: Option<i64>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        species: Option<String>,
    },
    Get {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum OrderCommands {
    List {
        #[command(flatten)]
        paging: PageArgs,

        /// pending, confirmed, in_progress, completed or cancelled
        #[arg(long, value_parser = parse_order_status)]
        status: Option<OrderStatus>,

        #[arg(long)]
        pet_id: Option<i64>,
    },
    Get {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ServiceCommands {
    List {
        #[command(flatten)]
        paging: PageArgs,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        available: Option<bool>,
    },
}

impl Commands {
    pub async fn execute(self, config: &AppConfig) -> Result<()> {
        let app = App::open(config, Arc::new(ConsoleNotifier))?;

        match self {
            Self::Login { username, password } => {
                if !app.login(&LoginRequest::new(username, password)).await? {
                    bail!("Server accepted the login but returned no session");
                }
                print_json(&app.session().user())
            }
            Self::Logout => {
                app.logout();
                info!("Stored session removed");
                Ok(())
            }
            Self::Whoami { refresh } => {
                let user = if refresh {
                    app.fetch_user_info().await?
                } else {
                    app.session().user()
                };
                match user {
                    Some(user) => print_json(&user),
                    None => bail!("Not logged in"),
                }
            }
            Self::Navigate { path } => {
                let route = app.navigate(&path)?;
                println!("{} ({})", route.path, route.name);
                Ok(())
            }
            Self::Pets { command } => command.execute(&app).await,
            Self::Orders { command } => command.execute(&app).await,
            Self::Services { command } => command.execute(&app).await,
            Self::Stats => {
                let stats = app
                    .with_session_handling(app.client().dashboard_stats())
                    .await?;
                print_json(&stats)
            }
        }
    }
}

impl PetCommands {
    async fn execute(self, app: &App) -> Result<()> {
        let client = app.client();
        match self {
            Self::List {
                paging,
                owner_id,
                name,
                species,
            } => {
                let query = PetQuery {
                    paging: paging.into(),
                    owner_id,
                    name,
                    species,
                    gender: None,
                };
                print_json(&app.with_session_handling(client.list_pets(&query)).await?)
            }
            Self::Get { id } => print_json(&app.with_session_handling(client.get_pet(id)).await?),
        }
    }
}

impl OrderCommands {
    async fn execute(self, app: &App) -> Result<()> {
        let client = app.client();
        match self {
            Self::List {
                paging,
                status,
                pet_id,
            } => {
                let query = OrderQuery {
                    paging: paging.into(),
                    status,
                    pet_id,
                };
                print_json(&app.with_session_handling(client.list_orders(&query)).await?)
            }
            Self::Get { id } => {
                print_json(&app.with_session_handling(client.get_order(id)).await?)
            }
        }
    }
}

impl ServiceCommands {
    async fn execute(self, app: &App) -> Result<()> {
        let Self::List {
            paging,
            category,
            available,
        } = self;
        let query = ServiceQuery {
            paging: paging.into(),
            category,
            is_available: available,
        };
        print_json(
            &app.with_session_handling(app.client().list_services(&query))
                .await?,
        )
    }
}

fn parse_order_status(value: &str) -> Result<OrderStatus, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unknown order status `{value}`"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
