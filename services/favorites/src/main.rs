use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use holonet_core::config::Config;
use holonet_core::tracing::init_tracing;
use holonet_domain::favorite::{FavoriteKind, FavoriteTarget};
use holonet_domain::id::{FavoriteId, UserId};
use holonet_favorites_migration::Migrator;

use holonet_favorites::config::FavoritesConfig;
use holonet_favorites::domain::types::CatalogSeed;
use holonet_favorites::infra::db::{DbCatalogRepository, DbFavoriteRepository, DbUserRepository};
use holonet_favorites::record::{CatalogRecord, FavoriteRecord, UserRecord};
use holonet_favorites::usecase::catalog::{ListCatalogUseCase, SeedCatalogUseCase};
use holonet_favorites::usecase::favorite::{
    AddFavoriteUseCase, ListFavoritesUseCase, PruneOrphanedFavoritesUseCase, RemoveFavoriteUseCase,
};
use holonet_favorites::usecase::user::{CreateUserInput, CreateUserUseCase, DeleteUserUseCase};

#[derive(Debug, Parser)]
#[command(name = "holonet-favorites", about = "Operate the favorites catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending migrations.
    Migrate,
    /// Insert catalog entries from a JSON seed file, skipping names already present.
    Seed { file: PathBuf },
    /// Print the catalog entries of one kind (personaje, planeta, vehiculo).
    Catalog { kind: FavoriteKind },
    /// Create a user.
    AddUser {
        email: String,
        /// Plaintext password; stored hashed.
        #[arg(long, env = "HOLONET_USER_PASSWORD")]
        password: String,
        #[arg(long)]
        nombre: Option<String>,
        #[arg(long)]
        apellido: Option<String>,
    },
    /// Delete a user and all of their favorites.
    DeleteUser { user_id: i32 },
    /// Favorite a catalog entry for a user.
    AddFavorite {
        user_id: i32,
        tipo: FavoriteKind,
        objeto_id: i32,
    },
    /// Remove one of a user's favorites.
    RemoveFavorite { user_id: i32, favorite_id: i32 },
    /// Print a user's favorites with their resolved catalog entries.
    Favorites { user_id: i32 },
    /// Delete favorites whose catalog entry no longer exists.
    PruneOrphans,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = FavoritesConfig::try_from_env().context("load config from environment")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    if config.run_migrations || matches!(cli.command, Command::Migrate) {
        Migrator::up(&db, None).await.context("apply migrations")?;
        info!("migrations applied");
    }

    run(cli.command, db, &config).await
}

async fn run(
    command: Command,
    db: DatabaseConnection,
    config: &FavoritesConfig,
) -> anyhow::Result<()> {
    let users = DbUserRepository { db: db.clone() };
    let catalog = DbCatalogRepository { db: db.clone() };
    let favorites = DbFavoriteRepository { db };

    match command {
        Command::Migrate => {}
        Command::Seed { file } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("read seed file {}", file.display()))?;
            let seed: CatalogSeed = serde_json::from_str(&contents)
                .with_context(|| format!("parse seed file {}", file.display()))?;
            let report = SeedCatalogUseCase { repo: catalog }.execute(seed).await?;
            println!(
                "inserted {} entries, skipped {}",
                report.inserted, report.skipped
            );
        }
        Command::Catalog { kind } => {
            let entries = ListCatalogUseCase { repo: catalog }.execute(kind).await?;
            let records: Vec<CatalogRecord> = entries.iter().map(CatalogRecord::from).collect();
            print_json(&records)?;
        }
        Command::AddUser {
            email,
            password,
            nombre,
            apellido,
        } => {
            let usecase = CreateUserUseCase {
                repo: users,
                min_password_length: config.min_password_length,
            };
            let user = usecase
                .execute(CreateUserInput {
                    email,
                    password,
                    first_name: nombre,
                    last_name: apellido,
                })
                .await?;
            print_json(&UserRecord::from(&user))?;
        }
        Command::DeleteUser { user_id } => {
            let removed = DeleteUserUseCase { repo: users }
                .execute(UserId(user_id))
                .await?;
            println!("deleted user {user_id} and {removed} favorites");
        }
        Command::AddFavorite {
            user_id,
            tipo,
            objeto_id,
        } => {
            let usecase = AddFavoriteUseCase {
                users,
                catalog,
                favorites,
            };
            let favorite = usecase
                .execute(UserId(user_id), FavoriteTarget::new(tipo, objeto_id))
                .await?;
            println!("added favorite {}", favorite.id);
        }
        Command::RemoveFavorite {
            user_id,
            favorite_id,
        } => {
            RemoveFavoriteUseCase { favorites }
                .execute(UserId(user_id), FavoriteId(favorite_id))
                .await?;
            println!("removed favorite {favorite_id}");
        }
        Command::Favorites { user_id } => {
            let usecase = ListFavoritesUseCase {
                users,
                catalog,
                favorites,
            };
            let resolved = usecase.execute(UserId(user_id)).await?;
            let records: Vec<FavoriteRecord> = resolved.iter().map(FavoriteRecord::from).collect();
            print_json(&records)?;
        }
        Command::PruneOrphans => {
            let removed = PruneOrphanedFavoritesUseCase { favorites }
                .execute()
                .await?;
            println!("pruned {removed} orphaned favorites");
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}
