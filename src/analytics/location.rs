// src/analytics/location.rs

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{
    analytics::DimensionIndex,
    models::{
        dashboard::{LocationRevenue, Region},
        warehouse::Fact,
    },
};

pub const REGION_OPTIONS: [Region; 6] = [
    Region::All,
    Region::North,
    Region::South,
    Region::East,
    Region::West,
    Region::Central,
];

/// Tabela fixa cidade -> região. Cidades fora dela ficam sem região.
pub fn region_of(city: &str) -> Option<Region> {
    let region = match city {
        "Delhi" | "Chandigarh" | "Lucknow" | "Jaipur" | "Noida" | "Gurgaon" => Region::North,
        "Mumbai" | "Pune" | "Ahmedabad" | "Surat" | "Vadodara" => Region::West,
        "Bangalore" | "Chennai" | "Hyderabad" | "Coimbatore" | "Visakhapatnam" | "Kochi" => {
            Region::South
        }
        "Kolkata" | "Ranchi" | "Guwahati" => Region::East,
        "Bhopal" | "Indore" => Region::Central,
        _ => return None,
    };
    Some(region)
}

/// Receita somada por cidade do cinema, na ordem em que cada cidade apareceu.
/// Fatos sem cinema (ou cinema sem localização) ficam de fora.
pub fn revenue_by_location(facts: &[Fact], index: &DimensionIndex<'_>) -> Vec<LocationRevenue> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<LocationRevenue> = Vec::new();

    for fact in facts {
        let Some(city) = index.theater(fact.t_id).and_then(|t| t.location.as_deref()) else {
            continue;
        };

        let pos = *positions.entry(city).or_insert_with(|| {
            entries.push(LocationRevenue {
                location: city.to_string(),
                region: region_of(city),
                revenue: Decimal::ZERO,
            });
            entries.len() - 1
        });
        entries[pos].revenue += fact.amount();
    }

    entries
}

pub fn filter_by_region(entries: &[LocationRevenue], region: Region) -> Vec<LocationRevenue> {
    match region {
        Region::All => entries.to_vec(),
        region => entries
            .iter()
            .filter(|e| e.region == Some(region))
            .cloned()
            .collect(),
    }
}

/// Cidade de maior receita; empates ficam com a que apareceu primeiro.
pub fn top_location(entries: &[LocationRevenue]) -> Option<&LocationRevenue> {
    entries.iter().fold(None, |best, entry| match best {
        Some(b) if b.revenue >= entry.revenue => Some(b),
        _ => Some(entry),
    })
}
