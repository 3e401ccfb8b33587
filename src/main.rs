//! `shopwise` — CLI consumer of the session context.
//!
//! Stands in for the view layer: every subcommand holds only the session
//! reference and its operation handles. The token file plays the role of
//! origin-scoped storage, so `login` in one invocation carries over to the
//! next the way a browser session survives a reload.

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use shopwise_client::net::api::{ApiClient, ApiError};
use shopwise_client::net::types::NewProduct;
use shopwise_client::state::session::Session;
use shopwise_client::store::FileTokenStore;
use shopwise_client::util::price::format_price_cents;

#[derive(Parser, Debug)]
#[command(name = "shopwise", about = "ShopWise API client")]
struct Cli {
    #[arg(long, env = "SHOPWISE_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Where the bearer token is persisted between invocations.
    #[arg(long, env = "SHOPWISE_TOKEN_FILE", default_value = ".shopwise_token")]
    token_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and persist the session token.
    Login {
        username: String,
        password: String,
    },
    /// Create an account (does not log in).
    Register {
        email: String,
        username: String,
        password: String,
    },
    /// Clear the persisted session.
    Logout,
    /// Show the currently authenticated user.
    Me,
    Product(ProductCommand),
}

#[derive(Args, Debug)]
struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProductSubcommand {
    List,
    Read {
        product_id: Uuid,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price_cents: i64,
        #[arg(long)]
        description: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = std::sync::Arc::new(FileTokenStore::new(&cli.token_file));
    let session = Session::new(ApiClient::new(cli.base_url, store));

    match cli.command {
        Command::Login { username, password } => {
            let user = session.login(&username, &password).await?;
            println!("logged in as {} ({:?})", user.username, user.role);
            Ok(())
        }
        Command::Register {
            email,
            username,
            password,
        } => {
            session.register(&email, &username, &password).await?;
            println!("registered {username}; log in to start a session");
            Ok(())
        }
        Command::Logout => {
            session.logout();
            println!("logged out");
            Ok(())
        }
        Command::Me => {
            session.restore().await;
            match session.current_user() {
                Some(user) => print_json(&user),
                None => println!("not logged in"),
            }
            Ok(())
        }
        Command::Product(product) => run_product(&session, product).await,
    }
}

async fn run_product(session: &Session, product: ProductCommand) -> Result<(), ApiError> {
    match product.command {
        ProductSubcommand::List => {
            let products = session.api().list_products().await?;
            for product in &products {
                println!("{}  {}  {}", product.id, format_price_cents(product.price_cents), product.name);
            }
            Ok(())
        }
        ProductSubcommand::Read { product_id } => {
            let product = session.api().get_product(product_id).await?;
            print_json(&product);
            Ok(())
        }
        ProductSubcommand::Create {
            name,
            price_cents,
            description,
        } => {
            let created = session
                .api()
                .create_product(&NewProduct {
                    name,
                    price_cents,
                    description,
                })
                .await?;
            print_json(&created);
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{rendered}"),
        Err(error) => eprintln!("failed to render response: {error}"),
    }
}
