// src/analytics/period.rs

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::{
    analytics::DimensionIndex,
    models::{
        dashboard::{ChartPoint, Period, RevenueSeries},
        warehouse::{DateRow, Fact},
    },
};

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

// Acima disso o eixo X passa a pular rótulos (~10 visíveis)
const MAX_DENSE_POINTS: usize = 20;

/// Posição 0..12 do mês no calendário. Aceita espaços em volta do nome
/// (o `to_char(.., 'Month')` do Postgres completa com espaços).
pub fn month_index(name: &str) -> Option<usize> {
    let name = name.trim();
    MONTHS.iter().position(|m| *m == name)
}

pub fn quarter_of(month: &str) -> Option<u32> {
    month_index(month).map(|idx| idx as u32 / 3 + 1)
}

/// Semana do ano: ceil((dias desde 1/jan + dia da semana de 1/jan + 1) / 7),
/// com domingo = 0.
pub fn week_of_year(date: NaiveDate) -> u32 {
    let days_since_jan1 = date.ordinal0();
    let jan1_weekday = NaiveDate::from_ymd_opt(date.year(), 1, 1)
        .map(|jan1| jan1.weekday().num_days_from_sunday())
        .unwrap_or(0);

    (days_since_jan1 + jan1_weekday + 1).div_ceil(7)
}

/// Anos distintos da dimensão de datas, como texto, em ordem crescente.
pub fn available_years(dates: &[DateRow]) -> Vec<String> {
    dates
        .iter()
        .filter_map(|d| d.year)
        .map(|y| y.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// Chave ordenável do balde: índice do mês, número da semana ou do trimestre.
fn bucket_key(period: Period, date: &DateRow) -> Option<u32> {
    match period {
        Period::Monthly => date.month.as_deref().and_then(month_index).map(|i| i as u32),
        Period::Weekly => date.date.map(week_of_year),
        Period::Quarterly => date.month.as_deref().and_then(quarter_of),
    }
}

fn bucket_label(period: Period, key: u32) -> String {
    match period {
        Period::Monthly => MONTHS[key as usize].to_string(),
        Period::Weekly => format!("W{}", key),
        Period::Quarterly => format!("Q{}", key),
    }
}

pub fn axis_label(period: Period, label: &str) -> String {
    match period {
        Period::Weekly => label.replacen('W', "Wk ", 1),
        _ => label.to_string(),
    }
}

pub fn axis_interval(points: usize) -> usize {
    if points <= MAX_DENSE_POINTS {
        0
    } else {
        points.div_ceil(10)
    }
}

/// Receita do ano selecionado agrupada por período, na ordem natural
/// (meses do calendário, semanas e trimestres pelo número).
pub fn revenue_by_period(
    facts: &[Fact],
    index: &DimensionIndex<'_>,
    period: Period,
    selected_year: &str,
) -> Vec<ChartPoint> {
    let mut buckets: BTreeMap<u32, Decimal> = BTreeMap::new();

    for fact in facts {
        let Some(date) = index.date(fact.d_id) else {
            continue;
        };
        if date.year.map(|y| y.to_string()).as_deref() != Some(selected_year) {
            continue;
        }
        let Some(key) = bucket_key(period, date) else {
            tracing::debug!(d_id = date.d_id, ?period, "Linha de data sem mês/data válida, ignorada");
            continue;
        };

        *buckets.entry(key).or_insert(Decimal::ZERO) += fact.amount();
    }

    buckets
        .into_iter()
        .map(|(key, revenue)| {
            let label = bucket_label(period, key);
            ChartPoint {
                axis_label: axis_label(period, &label),
                label,
                revenue,
            }
        })
        .collect()
}

pub fn revenue_series(
    facts: &[Fact],
    index: &DimensionIndex<'_>,
    period: Period,
    selected_year: Option<&str>,
) -> RevenueSeries {
    let points = match selected_year {
        Some(year) => revenue_by_period(facts, index, period, year),
        None => Vec::new(),
    };

    RevenueSeries {
        period,
        year: selected_year.map(str::to_string),
        axis_interval: axis_interval(points.len()),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::{date, fact, mumbai_snapshot};
    use crate::models::warehouse::WarehouseSnapshot;

    fn labels(points: &[ChartPoint]) -> Vec<&str> {
        points.iter().map(|p| p.label.as_str()).collect()
    }

    #[test]
    fn test_week_of_year_when_jan1_is_sunday() {
        // 2023-01-01 foi domingo
        assert_eq!(week_of_year(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()), 1);
        assert_eq!(week_of_year(NaiveDate::from_ymd_opt(2023, 1, 7).unwrap()), 1);
        assert_eq!(week_of_year(NaiveDate::from_ymd_opt(2023, 1, 8).unwrap()), 2);
    }

    #[test]
    fn test_week_of_year_when_jan1_is_midweek() {
        // 2024-01-01 foi segunda (weekday 1): o sábado 6/jan ainda é W1
        assert_eq!(week_of_year(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()), 1);
        assert_eq!(week_of_year(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()), 2);
        assert_eq!(week_of_year(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()), 53);
    }

    #[test]
    fn test_quarter_of() {
        assert_eq!(quarter_of("January"), Some(1));
        assert_eq!(quarter_of("June"), Some(2));
        assert_eq!(quarter_of("September "), Some(3));
        assert_eq!(quarter_of("December"), Some(4));
        assert_eq!(quarter_of("Smarch"), None);
    }

    #[test]
    fn test_monthly_example() {
        let snapshot = mumbai_snapshot();
        let index = DimensionIndex::build(&snapshot);

        let points = revenue_by_period(&snapshot.facts, &index, Period::Monthly, "2024");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "January");
        assert_eq!(points[0].revenue, Decimal::from(1000));
    }

    #[test]
    fn test_monthly_follows_calendar_order_regardless_of_input() {
        let snapshot = WarehouseSnapshot {
            dates: vec![
                date(1, (2024, 11, 3), "November"),
                date(2, (2024, 2, 3), "February"),
                date(3, (2024, 9, 3), "September"),
                date(4, (2024, 2, 20), "February"),
            ],
            facts: vec![
                fact(1, 1, 1, 1, 1, 300, 0),
                fact(2, 1, 1, 2, 1, 100, 0),
                fact(3, 1, 1, 3, 1, 200, 0),
                fact(4, 1, 1, 4, 1, 50, 0),
            ],
            ..Default::default()
        };
        let index = DimensionIndex::build(&snapshot);

        let points = revenue_by_period(&snapshot.facts, &index, Period::Monthly, "2024");
        assert_eq!(labels(&points), vec!["February", "September", "November"]);
        assert_eq!(points[0].revenue, Decimal::from(150));
    }

    #[test]
    fn test_weekly_sorts_numerically_not_lexicographically() {
        let snapshot = WarehouseSnapshot {
            dates: vec![
                date(1, (2024, 3, 15), "March"),
                date(2, (2024, 1, 10), "January"),
            ],
            facts: vec![fact(1, 1, 1, 1, 1, 10, 0), fact(2, 1, 1, 2, 1, 20, 0)],
            ..Default::default()
        };
        let index = DimensionIndex::build(&snapshot);

        let points = revenue_by_period(&snapshot.facts, &index, Period::Weekly, "2024");
        assert_eq!(labels(&points), vec!["W2", "W11"]);
        assert_eq!(points[1].axis_label, "Wk 11");
    }

    #[test]
    fn test_quarterly_and_year_filter() {
        let snapshot = WarehouseSnapshot {
            dates: vec![
                date(1, (2024, 8, 1), "August"),
                date(2, (2024, 2, 1), "February"),
                date(3, (2023, 2, 1), "February"),
            ],
            facts: vec![
                fact(1, 1, 1, 1, 1, 10, 0),
                fact(2, 1, 1, 2, 1, 20, 0),
                fact(3, 1, 1, 3, 1, 40, 0),
            ],
            ..Default::default()
        };
        let index = DimensionIndex::build(&snapshot);

        let points = revenue_by_period(&snapshot.facts, &index, Period::Quarterly, "2024");
        assert_eq!(labels(&points), vec!["Q1", "Q3"]);
        assert_eq!(points[0].revenue, Decimal::from(20));
    }

    #[test]
    fn test_unresolved_and_malformed_dates_are_dropped() {
        let mut broken = date(2, (2024, 1, 20), "Smarch");
        broken.date = None;

        let snapshot = WarehouseSnapshot {
            dates: vec![date(1, (2024, 1, 3), "January"), broken],
            facts: vec![
                fact(1, 1, 1, 1, 1, 10, 0),
                fact(2, 1, 1, 99, 1, 500, 0),
                fact(3, 1, 1, 2, 1, 700, 0),
            ],
            ..Default::default()
        };
        let index = DimensionIndex::build(&snapshot);

        for (period, label) in [
            (Period::Monthly, "January"),
            (Period::Weekly, "W1"),
            (Period::Quarterly, "Q1"),
        ] {
            let points = revenue_by_period(&snapshot.facts, &index, period, "2024");
            assert_eq!(labels(&points), vec![label], "{:?}", period);
            assert_eq!(points[0].revenue, Decimal::from(10));
        }
    }

    #[test]
    fn test_year_without_facts_is_empty() {
        let snapshot = mumbai_snapshot();
        let index = DimensionIndex::build(&snapshot);

        assert!(revenue_by_period(&snapshot.facts, &index, Period::Monthly, "1999").is_empty());
        assert!(revenue_series(&snapshot.facts, &index, Period::Monthly, None).points.is_empty());
    }

    #[test]
    fn test_available_years_are_distinct_and_sorted() {
        let dates = vec![
            date(1, (2025, 1, 1), "January"),
            date(2, (2023, 1, 1), "January"),
            date(3, (2025, 6, 1), "June"),
        ];
        assert_eq!(available_years(&dates), vec!["2023", "2025"]);
    }

    #[test]
    fn test_axis_interval() {
        assert_eq!(axis_interval(12), 0);
        assert_eq!(axis_interval(20), 0);
        assert_eq!(axis_interval(21), 3);
        assert_eq!(axis_interval(53), 6);
    }
}
