//! Users CLI
//!
//! Command-line interface for the Users API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use users_client::UsersClient;

#[derive(Parser)]
#[command(name = "users")]
#[command(author, version, about = "Users API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Users API
    #[arg(long, env = "USERS_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Bearer token, when the server requires one
    #[arg(long, env = "USERS_API_TOKEN")]
    api_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Get a user by ID
    Get {
        /// Logical user ID
        id: String,
    },
    /// List all users
    List,
    /// Update fields of an existing user; omitted fields keep their value
    Update {
        /// Logical user ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Archive a user
    Delete {
        /// Page ID (the `pageid` field of the user)
        page_id: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut client = UsersClient::new(&cli.api_url);
    if let Some(token) = cli.api_token {
        client = client.with_api_token(token);
    }

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Create { name, email, phone } => {
            let user = client.create_user(&name, &email, &phone).await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }

        Commands::Get { id } => {
            let user = client.get_user(&id).await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }

        Commands::List => {
            let users = client.list_users().await?;
            println!("{}", serde_json::to_string_pretty(&users)?);
        }

        Commands::Update {
            id,
            name,
            email,
            phone,
        } => {
            // Updates overwrite every field, so start from the stored record.
            let mut user = client.get_user(&id).await?;
            if let Some(name) = name {
                user.name = name;
            }
            if let Some(email) = email {
                user.email = email;
            }
            if let Some(phone) = phone {
                user.phone = phone;
            }
            let user = client.update_user(&user).await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }

        Commands::Delete { page_id } => {
            let response = client.delete_user(&page_id).await?;
            println!("✓ {}", response.message);
        }
    }

    Ok(())
}
