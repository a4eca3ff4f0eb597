use crate::loader::TripTable;
use crate::reports::types::{BirthYearStats, UserStats};
use crate::reports::utility::{mode, value_counts};

/// User-type counts plus gender and birth-year stats when the schema has them.
#[tracing::instrument(skip(table), fields(rows = table.len(), schema = ?table.schema))]
pub fn user_stats(table: &TripTable) -> UserStats {
    let user_types = owned(value_counts(
        table.trips.iter().filter_map(|t| t.user_type.as_deref()),
    ));

    let gender = table.schema.has_gender.then(|| {
        owned(value_counts(
            table.trips.iter().filter_map(|t| t.gender.as_deref()),
        ))
    });

    let birth_year = table.schema.has_birth_year.then(|| {
        let years = || table.trips.iter().filter_map(|t| t.birth_year);
        BirthYearStats {
            earliest: years().min(),
            latest: years().max(),
            most_common: mode(years()),
        }
    });

    UserStats {
        user_types,
        gender,
        birth_year,
    }
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(label, n)| (label.to_string(), n))
        .collect()
}
