use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, Order,
    PaginatorTrait, QueryOrder, Set, TransactionTrait, sea_query::Expr,
};
use tracing::debug;

use crate::{
    entities::{actor, movie},
    error::AppResult,
    models::{MovieCreate, MoviePublic},
};

/// Handle over the movie catalog. Cloning shares the underlying connection pool; every
/// call checks a connection out for its own duration only.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Inserts the movie and its cast in one transaction. If any insert fails the
    /// transaction is dropped uncommitted and nothing is persisted.
    pub async fn create_movie(&self, input: MovieCreate) -> AppResult<MoviePublic> {
        let txn = self.db.begin().await?;

        let movie = movie::ActiveModel {
            title: Set(input.title),
            year: Set(input.year),
            director: Set(input.director),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut actors = Vec::with_capacity(input.actors.len());
        for a in input.actors {
            let row = actor::ActiveModel {
                actor_name: Set(a.actor_name),
                movie_id: Set(movie.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            actors.push(row);
        }

        txn.commit().await?;

        debug!(movie_id = movie.id, actors = actors.len(), "created movie");
        Ok(MoviePublic::from_rows(movie, actors))
    }

    pub async fn random_movie(&self) -> AppResult<Option<MoviePublic>> {
        let movie = movie::Entity::find()
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .one(&self.db)
            .await?;

        match movie {
            Some(movie) => Ok(Some(with_actors(&self.db, movie).await?)),
            None => Ok(None),
        }
    }

    pub async fn find_movie(&self, id: i64) -> AppResult<Option<MoviePublic>> {
        let Some(movie) = movie::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(Some(with_actors(&self.db, movie).await?))
    }

    pub async fn count_movies(&self) -> AppResult<u64> {
        Ok(movie::Entity::find().count(&self.db).await?)
    }
}

// Cast comes back in insertion order.
async fn with_actors<C: ConnectionTrait>(db: &C, movie: movie::Model) -> AppResult<MoviePublic> {
    let actors = movie
        .find_related(actor::Entity)
        .order_by_asc(actor::Column::Id)
        .all(db)
        .await?;
    Ok(MoviePublic::from_rows(movie, actors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, models::ActorCreate};

    async fn store() -> (tempfile::TempDir, MovieStore) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("store.db").display());
        let db = db::connect_and_migrate(&url).await.unwrap();
        (dir, MovieStore::new(db))
    }

    fn movie(title: &str, actors: &[&str]) -> MovieCreate {
        MovieCreate {
            title: title.to_string(),
            year: 1999,
            director: "Someone".to_string(),
            actors: actors.iter().map(|n| ActorCreate { actor_name: n.to_string() }).collect(),
        }
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids_and_keeps_cast_order() {
        let (_dir, store) = store().await;

        let first = store
            .create_movie(movie("The Matrix", &["Keanu Reeves", "Carrie-Anne Moss"]))
            .await
            .unwrap();
        let second = store.create_movie(movie("Parasite", &["Song Kang-ho"])).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.actors.len(), 2);
        assert_ne!(first.actors[0].id, first.actors[1].id);
        assert!(second.actors.iter().all(|a| !first.actors.iter().any(|b| b.id == a.id)));

        let loaded = store.find_movie(first.id).await.unwrap().unwrap();
        assert_eq!(loaded, first);
        assert_eq!(
            loaded.actor_names().collect::<Vec<_>>(),
            vec!["Keanu Reeves", "Carrie-Anne Moss"]
        );
    }

    #[tokio::test]
    async fn random_movie_on_empty_store_is_none() {
        let (_dir, store) = store().await;
        assert!(store.random_movie().await.unwrap().is_none());
        assert_eq!(store.count_movies().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn random_movie_with_single_row_returns_it_with_cast() {
        let (_dir, store) = store().await;
        let created = store
            .create_movie(movie("Spirited Away", &["Rumi Hiiragi", "Miyu Irino"]))
            .await
            .unwrap();

        for _ in 0..5 {
            assert_eq!(store.random_movie().await.unwrap(), Some(created.clone()));
        }
    }

    #[tokio::test]
    async fn movie_without_actors_loads_empty_cast() {
        let (_dir, store) = store().await;
        let created = store.create_movie(movie("Untitled", &[])).await.unwrap();

        let loaded = store.find_movie(created.id).await.unwrap().unwrap();
        assert!(loaded.actors.is_empty());
        assert!(store.find_movie(created.id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn actor_rows_require_an_existing_movie() {
        let (_dir, store) = store().await;

        let orphan = actor::ActiveModel {
            actor_name: Set("Nobody".to_string()),
            movie_id: Set(42),
            ..Default::default()
        }
        .insert(store.db())
        .await;

        assert!(orphan.is_err());
    }

    #[tokio::test]
    async fn failed_actor_insert_rolls_back_whole_movie() {
        let (_dir, store) = store().await;
        store
            .db()
            .execute_unprepared(
                "CREATE TRIGGER reject_second_actor BEFORE INSERT ON actors \
                 WHEN NEW.actor_name = 'Second' \
                 BEGIN SELECT RAISE(ABORT, 'actor rejected'); END",
            )
            .await
            .unwrap();

        let result = store.create_movie(movie("Half Cast", &["First", "Second", "Third"])).await;

        assert!(result.is_err());
        assert_eq!(store.count_movies().await.unwrap(), 0);
        assert_eq!(actor::Entity::find().count(store.db()).await.unwrap(), 0);
    }
}
