// src/analytics/index.rs

use std::collections::HashMap;

use crate::models::warehouse::{DateRow, Movie, Theater, WarehouseSnapshot};

/// Mapas id -> linha de dimensão, montados uma vez por snapshot.
/// Se dois registros tiverem o mesmo id, vale o primeiro.
#[derive(Debug)]
pub struct DimensionIndex<'a> {
    movies: HashMap<i64, &'a Movie>,
    theaters: HashMap<i64, &'a Theater>,
    dates: HashMap<i64, &'a DateRow>,
}

impl<'a> DimensionIndex<'a> {
    pub fn build(snapshot: &'a WarehouseSnapshot) -> Self {
        let mut movies = HashMap::with_capacity(snapshot.movies.len());
        for movie in &snapshot.movies {
            movies.entry(movie.m_id).or_insert(movie);
        }

        let mut theaters = HashMap::with_capacity(snapshot.theaters.len());
        for theater in &snapshot.theaters {
            theaters.entry(theater.t_id).or_insert(theater);
        }

        let mut dates = HashMap::with_capacity(snapshot.dates.len());
        for date in &snapshot.dates {
            dates.entry(date.d_id).or_insert(date);
        }

        Self { movies, theaters, dates }
    }

    pub fn movie(&self, id: Option<i64>) -> Option<&'a Movie> {
        id.and_then(|id| self.movies.get(&id).copied())
    }

    pub fn theater(&self, id: Option<i64>) -> Option<&'a Theater> {
        id.and_then(|id| self.theaters.get(&id).copied())
    }

    pub fn date(&self, id: Option<i64>) -> Option<&'a DateRow> {
        id.and_then(|id| self.dates.get(&id).copied())
    }
}
