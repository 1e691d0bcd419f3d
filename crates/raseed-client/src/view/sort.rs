use std::cmp::Ordering;

use super::types::{SortConfig, SortDirection, SortKey, Transaction};

/// Advances the tri-state header cycle: ascending, descending, unsorted, and
/// back to ascending. Selecting a different column always starts ascending.
pub fn request_sort(current: SortConfig, requested: SortKey) -> SortConfig {
    let direction = if current.key == Some(requested) {
        match current.direction {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Unsorted,
            SortDirection::Unsorted => SortDirection::Ascending,
        }
    } else {
        SortDirection::Ascending
    };

    SortConfig::new(requested, direction)
}

/// Orders rows by the configured column. `sort_by` is stable, so equal keys
/// keep their filtered order; an unset key or `Unsorted` leaves rows as given.
pub fn apply_sort<'a>(mut rows: Vec<&'a Transaction>, sort: SortConfig) -> Vec<&'a Transaction> {
    let Some(key) = sort.active_key() else {
        return rows;
    };

    rows.sort_by(|left, right| {
        let ordering = compare_by_key(left, right, key);
        match sort.direction {
            SortDirection::Descending => ordering.reverse(),
            _ => ordering,
        }
    });
    rows
}

fn compare_by_key(left: &Transaction, right: &Transaction, key: SortKey) -> Ordering {
    match key {
        SortKey::Amount => left.amount.total_cmp(&right.amount),
        SortKey::Date => left.date.cmp(&right.date),
        SortKey::Description => left.description.cmp(&right.description),
        SortKey::Category => left.category.cmp(&right.category),
        SortKey::Wallet => left.wallet.cmp(&right.wallet),
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_sort, request_sort};
    use crate::view::types::{SortConfig, SortDirection, SortKey, Transaction};

    fn row(id: &str, date: &str, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: date.to_string(),
            description: format!("row {id}"),
            amount,
            category: "c".to_string(),
            wallet: "w".to_string(),
        }
    }

    fn ids(rows: &[&Transaction]) -> Vec<String> {
        rows.iter().map(|row| row.id.clone()).collect()
    }

    #[test]
    fn tri_state_cycle_rotates_without_terminal_state() {
        let first = request_sort(SortConfig::default(), SortKey::Amount);
        assert_eq!(
            first,
            SortConfig::new(SortKey::Amount, SortDirection::Ascending)
        );

        let second = request_sort(first, SortKey::Amount);
        assert_eq!(second.direction, SortDirection::Descending);

        let third = request_sort(second, SortKey::Amount);
        assert_eq!(
            third,
            SortConfig::new(SortKey::Amount, SortDirection::Unsorted)
        );

        let fourth = request_sort(third, SortKey::Amount);
        assert_eq!(fourth.direction, SortDirection::Ascending);
    }

    #[test]
    fn switching_columns_restarts_ascending() {
        let descending = SortConfig::new(SortKey::Amount, SortDirection::Descending);
        let next = request_sort(descending, SortKey::Date);
        assert_eq!(
            next,
            SortConfig::new(SortKey::Date, SortDirection::Ascending)
        );
    }

    #[test]
    fn amount_sorts_numerically() {
        let rows = vec![
            row("a", "2023-06-01", 5000.0),
            row("b", "2023-06-02", -250.0),
            row("c", "2023-06-03", 20.0),
        ];
        let refs = rows.iter().collect::<Vec<_>>();

        let ascending = apply_sort(
            refs.clone(),
            SortConfig::new(SortKey::Amount, SortDirection::Ascending),
        );
        assert_eq!(ids(&ascending), vec!["b", "c", "a"]);

        let descending = apply_sort(
            refs,
            SortConfig::new(SortKey::Amount, SortDirection::Descending),
        );
        assert_eq!(ids(&descending), vec!["a", "c", "b"]);
    }

    #[test]
    fn dates_sort_lexicographically() {
        let rows = vec![
            row("a", "2023-06-10", 1.0),
            row("b", "2023-06-02", 1.0),
            row("c", "2022-12-31", 1.0),
        ];
        let sorted = apply_sort(
            rows.iter().collect(),
            SortConfig::new(SortKey::Date, SortDirection::Ascending),
        );
        assert_eq!(ids(&sorted), vec!["c", "b", "a"]);
    }

    #[test]
    fn unsorted_direction_is_passthrough() {
        let rows = vec![row("a", "2023-06-03", 3.0), row("b", "2023-06-01", 1.0)];
        let sorted = apply_sort(
            rows.iter().collect(),
            SortConfig::new(SortKey::Amount, SortDirection::Unsorted),
        );
        assert_eq!(ids(&sorted), vec!["a", "b"]);

        let unset = apply_sort(rows.iter().collect(), SortConfig::default());
        assert_eq!(ids(&unset), vec!["a", "b"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let rows = vec![
            row("a", "2023-06-01", 1.0),
            row("b", "2023-06-01", 1.0),
            row("c", "2023-06-01", 1.0),
        ];
        let sorted = apply_sort(
            rows.iter().collect(),
            SortConfig::new(SortKey::Date, SortDirection::Descending),
        );
        assert_eq!(ids(&sorted), vec!["a", "b", "c"]);
    }
}
