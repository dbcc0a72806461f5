use std::io::{BufRead, Write};

use clap::Parser;
use movie_explorer::{config::Config, db, seed, store::MovieStore};

/// Load the sample movie catalog into the database.
#[derive(Debug, Parser)]
#[command(name = "seed")]
struct Args {
    /// Add the catalog even if the database already has movies, without asking.
    #[arg(long, short)]
    yes: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn".to_string()))
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let store = MovieStore::new(db::connect_and_migrate(&config.database_url).await?);

    let existing = store.count_movies().await?;
    if existing > 0
        && !args.yes
        && !confirm(existing, std::io::stdin().lock(), std::io::stdout())?
    {
        println!("Operation cancelled.");
        return Ok(());
    }

    seed::seed_catalog(&store).await?;

    let total = store.count_movies().await?;
    tracing::info!(total, "seeding finished");
    Ok(())
}

fn confirm(existing: u64, mut input: impl BufRead, mut output: impl Write) -> anyhow::Result<bool> {
    write!(output, "Database already contains {existing} movies. Do you want to add more? (y/n) ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
