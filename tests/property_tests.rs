//! Property-based tests for the pricing, status and search subsystems.
//!
//! These use proptest to verify invariants across a wide range of inputs,
//! helping to catch edge cases that unit tests might miss.

use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;

use turbo_service_api::domain::{
    pricing::{self, PricedLine},
    search::{self, OrderSearchFields},
    status::{self, WorkStatus},
};

#[derive(Debug, Clone)]
struct Line {
    price: Decimal,
    selected: bool,
}

impl PricedLine for Line {
    fn price(&self) -> Decimal {
        self.price
    }
    fn selected(&self) -> bool {
        self.selected
    }
}

// Strategies for generating test data

fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000, 0u32..3).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn line_strategy() -> impl Strategy<Value = Line> {
    (price_strategy(), any::<bool>()).prop_map(|(price, selected)| Line { price, selected })
}

fn lines_strategy() -> impl Strategy<Value = Vec<Line>> {
    prop::collection::vec(line_strategy(), 0..12)
}

// Property: pricing

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn adding_an_unselected_line_never_changes_the_total(
        lines in lines_strategy(),
        price in price_strategy(),
        base in price_strategy(),
    ) {
        let before = pricing::order_total(base, base, base, &lines);
        let mut extended = lines.clone();
        extended.push(Line { price, selected: false });
        let after = pricing::order_total(base, base, base, &extended);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn toggling_a_line_moves_the_total_by_exactly_its_price(
        mut lines in lines_strategy(),
        index in 0usize..12,
    ) {
        prop_assume!(!lines.is_empty());
        let index = index % lines.len();
        let before = pricing::selected_lines_total(&lines);
        let delta = lines[index].price;
        let was_selected = lines[index].selected;
        lines[index].selected = !was_selected;
        let after = pricing::selected_lines_total(&lines);
        if was_selected {
            prop_assert_eq!(before - after, delta);
        } else {
            prop_assert_eq!(after - before, delta);
        }
    }

    #[test]
    fn total_is_order_independent(lines in lines_strategy()) {
        let mut reversed = lines.clone();
        reversed.reverse();
        prop_assert_eq!(
            pricing::selected_lines_total(&lines),
            pricing::selected_lines_total(&reversed)
        );
    }

    #[test]
    fn total_is_monotonic_in_each_base_price(
        lines in lines_strategy(),
        base in price_strategy(),
        bump in price_strategy(),
    ) {
        let lower = pricing::order_total(base, base, base, &lines);
        let higher = pricing::order_total(base + bump, base, base, &lines);
        prop_assert!(higher >= lower);
    }

    #[test]
    fn display_amount_has_no_fraction_digits(amount in price_strategy()) {
        let rendered = pricing::display_amount(amount);
        prop_assert!(!rendered.contains('.'), "unexpected fraction in {}", rendered);
    }
}

// Property: status workflow

fn status_strategy() -> impl Strategy<Value = WorkStatus> {
    prop_oneof![
        Just(WorkStatus::Received),
        Just(WorkStatus::InProgress),
        Just(WorkStatus::Quoted),
        Just(WorkStatus::Accepted),
        Just(WorkStatus::Rejected),
        Just(WorkStatus::Working),
        Just(WorkStatus::Ready),
        Just(WorkStatus::Delivered),
    ]
}

proptest! {
    #[test]
    fn transition_check_matches_the_documented_edges(
        from in status_strategy(),
        to in status_strategy(),
    ) {
        use WorkStatus::*;
        let documented = matches!(
            (from, to),
            (Received, InProgress)
                | (InProgress, Quoted)
                | (Quoted, Accepted)
                | (Quoted, Rejected)
                | (Accepted, Working)
                | (Working, Ready)
                | (Ready, Delivered)
        ) || from == to;
        prop_assert_eq!(status::is_valid_transition(from, to), documented);
        prop_assert_eq!(status::transition(from, to).is_ok(), documented);
    }

    #[test]
    fn badge_lookup_never_fails(raw in "\\PC{0,24}") {
        let (label, class) = status::badge_for(&raw);
        prop_assert!(!class.is_empty());
        if WorkStatus::parse(&raw).is_none() {
            prop_assert_eq!(label, raw);
        }
    }
}

#[rstest]
#[case(WorkStatus::Received, "Beérkezett", "bg-blue-100 text-blue-800")]
#[case(WorkStatus::InProgress, "Vizsgálat alatt", "bg-yellow-100 text-yellow-800")]
#[case(WorkStatus::Quoted, "Árajánlat készült", "bg-purple-100 text-purple-800")]
#[case(WorkStatus::Accepted, "Elfogadva", "bg-green-100 text-green-800")]
#[case(WorkStatus::Rejected, "Elutasítva", "bg-red-100 text-red-800")]
#[case(WorkStatus::Working, "Javítás alatt", "bg-orange-100 text-orange-800")]
#[case(WorkStatus::Ready, "Kész", "bg-teal-100 text-teal-800")]
#[case(WorkStatus::Delivered, "Átvett", "bg-gray-100 text-gray-800")]
fn badge_table_is_total(
    #[case] status: WorkStatus,
    #[case] label: &str,
    #[case] class: &str,
) {
    assert_eq!(status.label(), label);
    assert_eq!(status.badge_class(), class);
    let (rendered_label, rendered_class) = status::badge_for(status.as_str());
    assert_eq!(rendered_label, label);
    assert_eq!(rendered_class, class);
}

// Property: search filtering

#[derive(Debug, Clone)]
struct Row {
    work_number: String,
    client_name: String,
    client_phone: String,
    turbo_code: String,
    status: WorkStatus,
}

impl OrderSearchFields for Row {
    fn work_number(&self) -> &str {
        &self.work_number
    }
    fn client_name(&self) -> &str {
        &self.client_name
    }
    fn client_phone(&self) -> &str {
        &self.client_phone
    }
    fn turbo_code(&self) -> &str {
        &self.turbo_code
    }
    fn status(&self) -> WorkStatus {
        self.status
    }
}

fn row_strategy() -> impl Strategy<Value = Row> {
    (
        "4[0-9]{4}",
        "[A-Za-z ]{3,16}",
        "\\+36[0-9]{9}",
        "[0-9]{4}-[0-9]{3}-[0-9]{4}",
        status_strategy(),
    )
        .prop_map(|(work_number, client_name, client_phone, turbo_code, status)| Row {
            work_number,
            client_name,
            client_phone,
            turbo_code,
            status,
        })
}

proptest! {
    #[test]
    fn filtered_rows_all_match_and_nothing_matching_is_dropped(
        rows in prop::collection::vec(row_strategy(), 0..24),
        term in "[0-9a-z]{1,4}",
        status in prop::option::of(status_strategy()),
    ) {
        let kept = search::filter_orders(rows.clone(), Some(&term), status);

        for row in &kept {
            prop_assert!(search::matches_search(row, &term));
            if let Some(wanted) = status {
                prop_assert_eq!(row.status, wanted);
            }
        }

        let expected = rows
            .iter()
            .filter(|r| search::matches_search(*r, &term))
            .filter(|r| status.map_or(true, |s| r.status == s))
            .count();
        prop_assert_eq!(kept.len(), expected);
    }

    #[test]
    fn empty_search_is_a_noop(rows in prop::collection::vec(row_strategy(), 0..24)) {
        let kept = search::filter_orders(rows.clone(), Some(""), None);
        prop_assert_eq!(kept.len(), rows.len());
    }
}
