//! Search/filter semantics for work-order listings.
//!
//! Case-insensitive substring match over work number, client name, client
//! phone and turbo code, ANDed with an optional exact status filter. The
//! original application re-implemented this per screen; the list endpoint
//! now applies this one definition.

use crate::domain::status::WorkStatus;

/// Fields a work-order row exposes to the search filter.
pub trait OrderSearchFields {
    fn work_number(&self) -> &str;
    fn client_name(&self) -> &str;
    fn client_phone(&self) -> &str;
    fn turbo_code(&self) -> &str;
    fn status(&self) -> WorkStatus;
}

/// Case-insensitive substring containment.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Whether a row matches the free-text search term.
pub fn matches_search<R: OrderSearchFields>(row: &R, term: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contains_ci(row.work_number(), &needle)
        || contains_ci(row.client_name(), &needle)
        || contains_ci(row.client_phone(), &needle)
        || contains_ci(row.turbo_code(), &needle)
}

/// Applies the free-text term and the exact status filter, keeping the
/// input ordering.
pub fn filter_orders<R: OrderSearchFields>(
    rows: Vec<R>,
    search: Option<&str>,
    status: Option<WorkStatus>,
) -> Vec<R> {
    rows.into_iter()
        .filter(|row| match search {
            Some(term) => matches_search(row, term),
            None => true,
        })
        .filter(|row| match status {
            Some(status) => row.status() == status,
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        work_number: &'static str,
        client_name: &'static str,
        client_phone: &'static str,
        turbo_code: &'static str,
        status: WorkStatus,
    }

    impl OrderSearchFields for Row {
        fn work_number(&self) -> &str {
            self.work_number
        }
        fn client_name(&self) -> &str {
            self.client_name
        }
        fn client_phone(&self) -> &str {
            self.client_phone
        }
        fn turbo_code(&self) -> &str {
            self.turbo_code
        }
        fn status(&self) -> WorkStatus {
            self.status
        }
    }

    fn fixture() -> Vec<Row> {
        vec![
            Row {
                work_number: "40001",
                client_name: "Kovács Béla",
                client_phone: "+36301234567",
                turbo_code: "5490-970-0071",
                status: WorkStatus::Received,
            },
            Row {
                work_number: "40002",
                client_name: "Nagy és Társa Kft.",
                client_phone: "+36209876543",
                turbo_code: "8201-100-0042",
                status: WorkStatus::Quoted,
            },
            Row {
                work_number: "43005",
                client_name: "Szabó Anna",
                client_phone: "+36701112233",
                turbo_code: "5490-988-0260",
                status: WorkStatus::Quoted,
            },
        ]
    }

    #[test]
    fn work_number_substring_matches() {
        let hits = filter_orders(fixture(), Some("4300"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].work_number, "43005");
    }

    #[test]
    fn phone_substring_matches() {
        let hits = filter_orders(fixture(), Some("3620"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].client_name, "Nagy és Társa Kft.");
    }

    #[test]
    fn client_name_match_is_case_insensitive() {
        let hits = filter_orders(fixture(), Some("kovács"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].work_number, "40001");
    }

    #[test]
    fn search_and_status_intersect() {
        // "5490" matches two rows by turbo code, but only one is QUOTED.
        let hits = filter_orders(fixture(), Some("5490"), Some(WorkStatus::Quoted));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].work_number, "43005");
    }

    #[test]
    fn no_match_yields_empty_result() {
        let hits = filter_orders(fixture(), Some("garrett"), None);
        assert!(hits.is_empty());
    }

    #[test]
    fn empty_term_keeps_everything() {
        assert_eq!(filter_orders(fixture(), Some(""), None).len(), 3);
        assert_eq!(filter_orders(fixture(), None, None).len(), 3);
    }
}
