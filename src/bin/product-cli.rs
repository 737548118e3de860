use clap::{Parser, Subcommand};
use product_sdk::{ApiReply, NewProduct, ProductClient, ProductUpdate};

#[derive(Parser)]
#[command(name = "product-cli")]
#[command(about = "Command-line client for the product service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service status
    Health,
    /// List all products
    List,
    /// Create a product
    Create {
        id: i64,
        name: String,
        price: f64,
    },
    /// Update a product's name and price
    Update {
        id: String,
        name: String,
        price: f64,
    },
    /// Delete a product
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ProductClient::new(&cli.url);

    let reply = match cli.command {
        Commands::Health => client.health().await?,
        Commands::List => client.list().await?,
        Commands::Create { id, name, price } => {
            client.create(&NewProduct { id, name, price }).await?
        }
        Commands::Update { id, name, price } => {
            client.update(&id, &ProductUpdate { name, price }).await?
        }
        Commands::Delete { id } => client.delete(&id).await?,
    };

    print_reply(&reply)
}

fn print_reply(reply: &ApiReply) -> Result<(), Box<dyn std::error::Error>> {
    if !reply.is_success() {
        eprintln!("Error: service returned status {}", reply.status);
    } else {
        println!("Status: {}", reply.status);
    }

    if let Some(body) = &reply.body {
        println!("{}", serde_json::to_string_pretty(body)?);
    }
    Ok(())
}
