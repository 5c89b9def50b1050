pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use commands::cart::CartCommand;

#[derive(Debug, Parser)]
#[command(
    name = "shopfront",
    about = "Shopfront storefront CLI",
    long_about = "Browse the product catalog, manage the persisted cart, run migrations, and inspect config.",
    after_help = "Examples:\n  shopfront products --pages 2\n  shopfront products --search shirt\n  shopfront cart add 3\n  shopfront cart show"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Fetch catalog pages into the local store and list products")]
    Products {
        #[arg(long, help = "Search term sent with every page request")]
        search: Option<String>,
        #[arg(long, default_value_t = 1, help = "Number of pages to load")]
        pages: u32,
    },
    #[command(about = "Show one product from the local catalog")]
    Product { id: String },
    /// Inspect or change the cart
    #[command(subcommand)]
    Cart(CartCommand),
    #[command(about = "Request checkout")]
    Checkout,
    #[command(about = "Apply pending database migrations and return structured status output")]
    Migrate,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Products { search, pages } => commands::products::run(search, pages),
        Command::Product { id } => commands::product::run(&id),
        Command::Cart(command) => commands::cart::run(command),
        Command::Checkout => commands::checkout::run(),
        Command::Migrate => commands::migrate::run(),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
