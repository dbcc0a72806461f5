//! Fixed sample catalog used to populate an empty database.

use tracing::info;

use crate::{
    error::AppResult,
    models::{ActorCreate, MovieCreate},
    store::MovieStore,
};

const SAMPLE_MOVIES: &[(&str, i32, &str, [&str; 4])] = &[
    (
        "Inception",
        2010,
        "Christopher Nolan",
        ["Leonardo DiCaprio", "Joseph Gordon-Levitt", "Elliot Page", "Tom Hardy"],
    ),
    (
        "Pulp Fiction",
        1994,
        "Quentin Tarantino",
        ["John Travolta", "Samuel L. Jackson", "Uma Thurman", "Bruce Willis"],
    ),
    (
        "Al-Risalah (The Message)",
        1976,
        "Moustapha Akkad",
        [
            "Abdullah Gaith (عبد الله غيث)",
            "Muna Wassef (منى واصف)",
            "Hamdi Ghaith (حمدي غيث)",
            "Ahmad Marey (أحمد مرعي)",
        ],
    ),
    (
        "The Shawshank Redemption",
        1994,
        "Frank Darabont",
        ["Tim Robbins", "Morgan Freeman", "Bob Gunton", "William Sadler"],
    ),
    (
        "The Godfather",
        1972,
        "Francis Ford Coppola",
        ["Marlon Brando", "Al Pacino", "James Caan", "Richard S. Castellano"],
    ),
    (
        "Parasite",
        2019,
        "Bong Joon-ho",
        ["Song Kang-ho", "Lee Sun-kyun", "Cho Yeo-jeong", "Choi Woo-shik"],
    ),
    (
        "The Matrix",
        1999,
        "Lana Wachowski, Lilly Wachowski",
        ["Keanu Reeves", "Laurence Fishburne", "Carrie-Anne Moss", "Hugo Weaving"],
    ),
    (
        "Back to the Future",
        1985,
        "Robert Zemeckis",
        ["Michael J. Fox", "Christopher Lloyd", "Lea Thompson", "Crispin Glover"],
    ),
    (
        "Spider-Man: Into the Spider-Verse",
        2018,
        "Bob Persichetti, Peter Ramsey, Rodney Rothman",
        ["Shameik Moore", "Jake Johnson", "Hailee Steinfeld", "Mahershala Ali"],
    ),
    (
        "Spirited Away",
        2001,
        "Hayao Miyazaki",
        ["Rumi Hiiragi", "Miyu Irino", "Mari Natsuki", "Takashi Naitô"],
    ),
];

pub fn sample_catalog() -> Vec<MovieCreate> {
    SAMPLE_MOVIES
        .iter()
        .map(|(title, year, director, actors)| MovieCreate {
            title: title.to_string(),
            year: *year,
            director: director.to_string(),
            actors: actors.iter().map(|n| ActorCreate { actor_name: n.to_string() }).collect(),
        })
        .collect()
}

/// Inserts every sample movie, each in its own transaction. Returns how many were added.
pub async fn seed_catalog(store: &MovieStore) -> AppResult<usize> {
    let mut added = 0;
    for movie in sample_catalog() {
        let created = store.create_movie(movie).await?;
        info!(title = %created.title, actors = created.actors.len(), "added movie");
        added += 1;
    }
    Ok(added)
}
