use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use internlink::cli::create_admin;
use internlink::internlink_db::{PgStore, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "internlink-cli")]
#[command(about = "InternLink CLI - Administrative tools for InternLink", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    CreateAdmin {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = init_db_pool(&database_url).await?;

    match cli.command {
        Commands::CreateAdmin { email, password } => {
            let email = match email {
                Some(email) => email,
                None => Input::<String>::new().with_prompt("Email address").interact_text()?,
            };
            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()?,
            };

            run_migrations(&pool).await?;
            let store = PgStore::new(pool);
            match create_admin(&store, &email, &password).await {
                Ok(admin) => {
                    println!("\n✅ Admin created successfully!");
                    println!("   Email: {}", admin.email);
                }
                Err(e) => {
                    eprintln!("\n❌ Error creating admin: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Migrate => {
            run_migrations(&pool).await?;
            println!("✅ Migrations applied");
        }
    }

    Ok(())
}
