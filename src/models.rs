use serde::{Deserialize, Serialize};

use crate::entities::{actor, movie};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ActorCreate {
    pub actor_name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MovieCreate {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub actors: Vec<ActorCreate>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ActorPublic {
    pub id: i64,
    pub actor_name: String,
}

impl From<actor::Model> for ActorPublic {
    fn from(row: actor::Model) -> Self {
        Self { id: row.id, actor_name: row.actor_name }
    }
}

/// A movie together with its full cast, as returned by every read path.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MoviePublic {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub actors: Vec<ActorPublic>,
}

impl MoviePublic {
    pub fn from_rows(movie: movie::Model, actors: Vec<actor::Model>) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            year: movie.year,
            director: movie.director,
            actors: actors.into_iter().map(ActorPublic::from).collect(),
        }
    }

    pub fn actor_names(&self) -> impl Iterator<Item = &str> {
        self.actors.iter().map(|a| a.actor_name.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SummaryRequest {
    pub movie_id: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SummaryResponse {
    pub summary_text: String,
}
