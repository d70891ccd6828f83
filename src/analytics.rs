// src/analytics.rs

// Motor de agregação: funções puras sobre um WarehouseSnapshot.
// Nada aqui toca o banco; os services montam o snapshot e chamam estas funções.

pub mod format;
pub mod index;
pub mod kpi;
pub mod location;
pub mod period;
pub mod ranking;

pub use index::DimensionIndex;

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::models::warehouse::{DateRow, Fact, Movie, Theater, WarehouseSnapshot};

    pub fn fact(id: i64, m_id: i64, t_id: i64, d_id: i64, tickets: i64, amount: i64, discount: i64) -> Fact {
        Fact {
            id,
            c_id: Some(1),
            m_id: Some(m_id),
            t_id: Some(t_id),
            d_id: Some(d_id),
            tickets_sold: Some(tickets),
            total_amount: Some(Decimal::from(amount)),
            discount: Some(Decimal::from(discount)),
        }
    }

    pub fn movie(m_id: i64, title: &str, genre: &str) -> Movie {
        Movie {
            m_id,
            title: title.to_string(),
            genre: Some(genre.to_string()),
            release_date: Some("2024-01-01".to_string()),
            duration: Some(120),
            rating: Some(Decimal::new(75, 1)),
            language: Some("Hindi".to_string()),
        }
    }

    pub fn theater(t_id: i64, name: &str, location: &str) -> Theater {
        Theater {
            t_id,
            t_name: name.to_string(),
            location: Some(location.to_string()),
            totalseats: Some(200),
            showtime: Some("18:00:00".to_string()),
            showdate: Some("2024-01-01".to_string()),
        }
    }

    pub fn date(d_id: i64, ymd: (i32, u32, u32), month: &str) -> DateRow {
        let (y, m, d) = ymd;
        DateRow {
            d_id,
            date: NaiveDate::from_ymd_opt(y, m, d),
            day: None,
            month: Some(month.to_string()),
            quarter: Some(((m - 1) / 3 + 1) as i32),
            year: Some(y),
            isweekend: Some(false),
        }
    }

    /// O exemplo de referência: uma venda em Mumbai, janeiro de 2024.
    pub fn mumbai_snapshot() -> WarehouseSnapshot {
        WarehouseSnapshot {
            customers: Vec::new(),
            movies: vec![movie(1, "X", "Action")],
            theaters: vec![theater(1, "PVR", "Mumbai")],
            dates: vec![date(1, (2024, 1, 10), "January")],
            facts: vec![fact(1, 1, 1, 1, 10, 1000, 50)],
        }
    }
}
