// src/analytics/kpi.rs

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    analytics::{
        format::{format_currency, format_growth, format_number, to_f64},
        location::{revenue_by_location, top_location},
        DimensionIndex,
    },
    models::{
        dashboard::{FormattedKpis, KpiSummary, YearOverYear},
        warehouse::Fact,
    },
};

pub const NO_LOCATION: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub revenue: Decimal,
    pub tickets_sold: i64,
    pub discounts: Decimal,
}

/// Somatórios globais. Não depende de nenhuma dimensão.
pub fn totals(facts: &[Fact]) -> Totals {
    facts.iter().fold(Totals::default(), |acc, f| Totals {
        revenue: acc.revenue + f.amount(),
        tickets_sold: acc.tickets_sold.saturating_add(f.tickets()),
        discounts: acc.discounts + f.discount_amount(),
    })
}

/// round(receita / ingressos), arredondando .5 para cima. Zero sem ingressos.
pub fn average_ticket_price(revenue: Decimal, tickets_sold: i64) -> Decimal {
    if tickets_sold <= 0 {
        return Decimal::ZERO;
    }

    revenue
        .checked_div(Decimal::from(tickets_sold))
        .map(|avg| avg.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}

pub fn revenue_for_year(facts: &[Fact], index: &DimensionIndex<'_>, year: i32) -> Decimal {
    facts
        .iter()
        .filter(|f| index.date(f.d_id).and_then(|d| d.year) == Some(year))
        .map(Fact::amount)
        .sum()
}

/// Crescimento percentual; zero quando o ano anterior não teve receita.
pub fn growth_percent(this_year: Decimal, last_year: Decimal) -> Decimal {
    if last_year <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    (this_year - last_year)
        .checked_div(last_year)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Compara o ano corrente (relógio) com o anterior, ignorando o ano selecionado na tela.
pub fn year_over_year(facts: &[Fact], index: &DimensionIndex<'_>, current_year: i32) -> YearOverYear {
    let this_year_revenue = revenue_for_year(facts, index, current_year);
    let last_year_revenue = revenue_for_year(facts, index, current_year - 1);

    YearOverYear {
        current_year,
        this_year_revenue,
        last_year_revenue,
        growth: growth_percent(this_year_revenue, last_year_revenue),
    }
}

pub fn summarize(facts: &[Fact], index: &DimensionIndex<'_>, current_year: i32) -> KpiSummary {
    let totals = totals(facts);
    let avg_ticket_price = average_ticket_price(totals.revenue, totals.tickets_sold);

    let locations = revenue_by_location(facts, index);
    let top_revenue_location = top_location(&locations)
        .map(|l| l.location.clone())
        .unwrap_or_else(|| NO_LOCATION.to_string());

    let year_over_year = year_over_year(facts, index, current_year);

    let formatted = FormattedKpis {
        total_revenue: format_currency(to_f64(totals.revenue)),
        tickets_sold: format_number(totals.tickets_sold as f64),
        avg_ticket_price: format_currency(to_f64(avg_ticket_price)),
        total_discounts: format_currency(to_f64(totals.discounts)),
        growth: format_growth(to_f64(year_over_year.growth)),
    };

    KpiSummary {
        total_revenue: totals.revenue,
        tickets_sold: totals.tickets_sold,
        total_discounts: totals.discounts,
        avg_ticket_price,
        top_revenue_location,
        year_over_year,
        formatted,
    }
}
