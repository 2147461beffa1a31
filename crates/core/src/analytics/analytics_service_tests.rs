//! Tests for the past-month analytics computation.

#[cfg(test)]
mod tests {
    use crate::analytics::{is_unnecessary, potential_saving, summarize};
    use crate::constants::CATEGORIES;
    use crate::expenses::Expense;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn expense(id: &str, amount: Decimal, category: &str, date: &str) -> Expense {
        Expense {
            id: id.to_string(),
            title: format!("{category} purchase"),
            amount,
            category: category.to_string(),
            date: date.parse().unwrap(),
            description: String::new(),
        }
    }

    #[test]
    fn test_summarize_example_vector() {
        let expenses = vec![
            expense("a", dec!(100), "Food & Dining", "2024-01-01"),
            expense("b", dec!(50), "Food & Dining", "2024-01-02"),
            expense("c", dec!(25), "Transportation", "2024-01-01"),
        ];

        let summary = summarize(&expenses);
        assert_eq!(summary.total_spent, dec!(175));
        assert_eq!(summary.expense_count, 3);
        assert_eq!(summary.category_totals["Food & Dining"], dec!(150));
        assert_eq!(summary.category_totals["Transportation"], dec!(25));
        assert_eq!(summary.daily_spending["2024-01-01"], dec!(125));
        assert_eq!(summary.daily_spending["2024-01-02"], dec!(50));
    }

    #[test]
    fn test_flagging_thresholds_are_strict() {
        let at = |amount, category| is_unnecessary(&expense("x", amount, category, "2024-01-01"));

        assert!(!at(dec!(500), "Entertainment"));
        assert!(at(dec!(500.01), "Entertainment"));
        assert!(!at(dec!(1000), "Shopping"));
        assert!(at(dec!(1001), "Shopping"));
        assert!(!at(dec!(300), "Food & Dining"));
        assert!(at(dec!(301), "Food & Dining"));
        // Other categories never flag, whatever the amount.
        assert!(!at(dec!(99999), "Travel"));
    }

    #[test]
    fn test_savings_potential_is_thirty_percent_of_flagged() {
        let expenses = vec![
            expense("a", dec!(800), "Entertainment", "2024-01-03"),
            expense("b", dec!(2000), "Shopping", "2024-01-04"),
            expense("c", dec!(100), "Food & Dining", "2024-01-05"),
        ];

        let summary = summarize(&expenses);
        let flagged: Vec<&str> = summary
            .unnecessary_expenses
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(flagged, vec!["a", "b"]);
        assert_eq!(summary.savings_potential, dec!(840)); // (800 + 2000) * 0.3
    }

    #[test]
    fn test_potential_saving_rounds_to_whole_units() {
        assert_eq!(potential_saving(dec!(800)), dec!(240));
        assert_eq!(potential_saving(dec!(1075)), dec!(323)); // 322.5 rounds away from zero
    }

    #[test]
    fn test_no_recommendations_under_thresholds() {
        let expenses = vec![
            expense("a", dec!(15000), "Food & Dining", "2024-01-01"),
            expense("b", dec!(5000), "Entertainment", "2024-01-02"),
            expense("c", dec!(8000), "Shopping", "2024-01-03"),
        ];

        // Totals exactly at the thresholds do not trigger.
        assert!(summarize(&expenses).recommendations.is_empty());
    }

    #[test]
    fn test_recommendations_with_savings_figures() {
        let expenses = vec![
            expense("a", dec!(9000), "Food & Dining", "2024-01-01"),
            expense("b", dec!(7500), "Food & Dining", "2024-01-10"),
            expense("c", dec!(6000), "Entertainment", "2024-01-02"),
            expense("d", dec!(2000), "Shopping", "2024-01-03"),
        ];

        let summary = summarize(&expenses);
        assert_eq!(summary.recommendations.len(), 2);

        let food = &summary.recommendations[0];
        assert_eq!(food.category, "Food & Dining");
        assert_eq!(food.current, dec!(16500));
        assert_eq!(food.suggested, dec!(12000));
        assert_eq!(food.savings, dec!(4500));
        assert_eq!(
            food.tip,
            "Cook more meals at home and limit dining out to weekends"
        );

        let entertainment = &summary.recommendations[1];
        assert_eq!(entertainment.category, "Entertainment");
        assert_eq!(entertainment.savings, dec!(3000));
    }

    #[test]
    fn test_default_summary_is_all_zero() {
        let summary = crate::analytics::AnalyticsSummary::default();
        assert_eq!(summary.total_spent, Decimal::ZERO);
        assert_eq!(summary.savings_potential, Decimal::ZERO);
        assert_eq!(summary.expense_count, 0);
        assert!(summary.category_totals.is_empty());
        assert!(summary.daily_spending.is_empty());
        assert!(summary.unnecessary_expenses.is_empty());
        assert!(summary.recommendations.is_empty());
    }

    #[test]
    fn test_summary_card_figures() {
        let expenses = vec![expense("a", dec!(45000), "Travel", "2024-01-01")];
        let summary = summarize(&expenses);
        assert_eq!(summary.daily_average(), dec!(1500)); // 45000 / 30
    }

    fn expense_strategy() -> impl Strategy<Value = Expense> {
        (
            "[a-f0-9]{8}",
            0u64..=5_000_000,
            0usize..CATEGORIES.len(),
            0u32..28,
        )
            .prop_map(|(id, cents, category, day)| Expense {
                id,
                title: "generated".to_string(),
                amount: Decimal::new(cents as i64, 2),
                category: CATEGORIES[category].to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1 + day).unwrap(),
                description: String::new(),
            })
    }

    proptest! {
        #[test]
        fn prop_daily_totals_sum_to_total(
            expenses in proptest::collection::vec(expense_strategy(), 0..50)
        ) {
            let summary = summarize(&expenses);
            let sum: Decimal = summary.daily_spending.values().copied().sum();
            prop_assert_eq!(sum, summary.total_spent);
        }

        #[test]
        fn prop_category_totals_sum_to_total(
            expenses in proptest::collection::vec(expense_strategy(), 0..50)
        ) {
            let summary = summarize(&expenses);
            let sum: Decimal = summary.category_totals.values().copied().sum();
            prop_assert_eq!(sum, summary.total_spent);
        }

        #[test]
        fn prop_flagged_expenses_keep_input_order(
            expenses in proptest::collection::vec(expense_strategy(), 0..50)
        ) {
            let summary = summarize(&expenses);
            let expected: Vec<&Expense> =
                expenses.iter().filter(|e| is_unnecessary(e)).collect();
            prop_assert_eq!(summary.unnecessary_expenses.len(), expected.len());
            for (flagged, original) in summary.unnecessary_expenses.iter().zip(expected) {
                prop_assert_eq!(&flagged.id, &original.id);
            }
        }
    }
}
