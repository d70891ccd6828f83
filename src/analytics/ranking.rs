// src/analytics/ranking.rs

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{
    analytics::DimensionIndex,
    models::{
        dashboard::{MovieRanking, TheaterRanking},
        warehouse::{Fact, Movie, Theater},
    },
};

pub const TOP_N: usize = 5;

struct Group<'a, D> {
    first_seen: &'a D,
    tickets_sold: i64,
    total_amount: Decimal,
    conflict_logged: bool,
}

// Agrupa os fatos por uma chave textual da dimensão, preservando a ordem
// em que cada chave apareceu. Os atributos do grupo são os da primeira linha.
fn accumulate<'a, D>(
    facts: &[Fact],
    resolve: impl Fn(&Fact) -> Option<&'a D>,
    key_of: impl Fn(&D) -> &str,
    same_attributes: impl Fn(&D, &D) -> bool,
) -> Vec<Group<'a, D>> {
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<Group<'a, D>> = Vec::new();

    for fact in facts {
        let Some(row) = resolve(fact) else {
            continue;
        };
        let key: &'a str = key_of(row);

        let pos = *positions.entry(key).or_insert_with(|| {
            groups.push(Group {
                first_seen: row,
                tickets_sold: 0,
                total_amount: Decimal::ZERO,
                conflict_logged: false,
            });
            groups.len() - 1
        });

        let group = &mut groups[pos];
        if !group.conflict_logged && !same_attributes(group.first_seen, row) {
            tracing::warn!(key, "Atributos divergentes para a mesma chave; mantendo a primeira linha");
            group.conflict_logged = true;
        }
        group.tickets_sold += fact.tickets();
        group.total_amount += fact.amount();
    }

    groups
}

// Ordenação estável: empates mantêm a ordem de aparição.
fn top_by_revenue<'a, D>(mut groups: Vec<Group<'a, D>>) -> Vec<Group<'a, D>> {
    groups.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
    groups.truncate(TOP_N);
    groups
}

/// Top 5 filmes por receita, agrupados pelo título.
pub fn top_movies(facts: &[Fact], index: &DimensionIndex<'_>) -> Vec<MovieRanking> {
    let groups = accumulate(
        facts,
        |f| index.movie(f.m_id),
        |m: &Movie| m.title.as_str(),
        |a: &Movie, b: &Movie| a.genre == b.genre && a.language == b.language && a.duration == b.duration,
    );

    top_by_revenue(groups)
        .into_iter()
        .map(|g| MovieRanking {
            movie: g.first_seen.clone(),
            tickets_sold: g.tickets_sold,
            total_amount: g.total_amount,
        })
        .collect()
}

/// Top 5 cinemas por receita, agrupados pelo nome.
pub fn top_theaters(facts: &[Fact], index: &DimensionIndex<'_>) -> Vec<TheaterRanking> {
    let groups = accumulate(
        facts,
        |f| index.theater(f.t_id),
        |t: &Theater| t.t_name.as_str(),
        |a: &Theater, b: &Theater| a.location == b.location && a.totalseats == b.totalseats,
    );

    top_by_revenue(groups)
        .into_iter()
        .map(|g| TheaterRanking {
            theater: g.first_seen.clone(),
            tickets_sold: g.tickets_sold,
            total_amount: g.total_amount,
        })
        .collect()
}
