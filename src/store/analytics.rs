//! Derived spending figures
//!
//! Everything here is recomputed from the current records on each call.

use serde::Serialize;

use super::ExpenseStore;
use crate::models::{Category, Expense, Money};

/// Number of most recent expenses shown in the spending trend
pub const DEFAULT_TREND_WINDOW: usize = 7;

/// Label format for trend points, e.g. "May 15"
const TREND_LABEL_FORMAT: &str = "%b %-d";

/// Spending in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
}

/// Per-category totals in the order each category first appears
///
/// Categories without expenses are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals(Vec<CategoryTotal>);

impl CategoryTotals {
    /// Total for one category, `None` when it has no expenses
    pub fn get(&self, category: Category) -> Option<Money> {
        self.entry(category).map(|t| t.total)
    }

    pub fn entry(&self, category: Category) -> Option<&CategoryTotal> {
        self.0.iter().find(|t| t.category == category)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTotal> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum across all categories
    pub fn grand_total(&self) -> Money {
        self.0.iter().map(|t| t.total).sum()
    }

    fn record(&mut self, expense: &Expense) {
        match self.0.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => {
                entry.total += expense.amount;
                entry.count += 1;
            }
            None => self.0.push(CategoryTotal {
                category: expense.category,
                total: expense.amount,
                count: 1,
            }),
        }
    }
}

impl<'a> IntoIterator for &'a CategoryTotals {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One bar of the recent spending trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Month and day, e.g. "May 15"
    pub label: String,
    pub amount: Money,
}

impl ExpenseStore {
    /// Sum of all amounts; zero when empty
    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Mean amount, `None` when there are no expenses
    pub fn average_expense(&self) -> Option<f64> {
        if self.expenses.is_empty() {
            return None;
        }
        Some(self.total_spent().to_f64() / self.expenses.len() as f64)
    }

    /// Totals grouped by category
    pub fn category_totals(&self) -> CategoryTotals {
        let mut totals = CategoryTotals::default();
        for expense in &self.expenses {
            totals.record(expense);
        }
        totals
    }

    /// Daily totals of the `n` most recent expenses, oldest first
    ///
    /// Points are keyed by month and day only, so entries from different
    /// years that share a month and day land in the same point.
    pub fn recent_trend(&self, n: usize) -> Vec<TrendPoint> {
        let mut recent: Vec<&Expense> = self.expenses.iter().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(n);
        recent.reverse();

        let mut points: Vec<TrendPoint> = Vec::new();
        for expense in recent {
            let label = expense.date.format(TREND_LABEL_FORMAT).to_string();
            match points.iter_mut().find(|p| p.label == label) {
                Some(point) => point.amount += expense.amount,
                None => points.push(TrendPoint {
                    label,
                    amount: expense.amount,
                }),
            }
        }

        tracing::trace!(window = n, points = points.len(), "computed spending trend");
        points
    }

    /// Largest amount, zero when empty
    pub fn max_expense(&self) -> Money {
        self.expenses
            .iter()
            .map(|e| e.amount)
            .max()
            .unwrap_or_default()
    }

    /// Smallest amount, zero when empty
    pub fn min_expense(&self) -> Money {
        self.expenses
            .iter()
            .map(|e| e.amount)
            .min()
            .unwrap_or_default()
    }

    /// Category with the most expenses; ties go to the one seen first
    pub fn most_common_category(&self) -> Option<Category> {
        let totals = self.category_totals();
        let mut best: Option<&CategoryTotal> = None;
        for entry in &totals {
            if best.map_or(true, |b| entry.count > b.count) {
                best = Some(entry);
            }
        }
        best.map(|b| b.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, NewExpense};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: &str, cents: i64, category: Category, on: NaiveDate) -> Expense {
        Expense {
            id: ExpenseId::from(id),
            description: format!("Expense {id}"),
            amount: Money::from_cents(cents),
            category,
            date: on,
        }
    }

    #[test]
    fn test_seed_totals() {
        let store = ExpenseStore::with_sample_data();
        assert_eq!(store.total_spent(), Money::from_cents(34349));
        assert_eq!(store.max_expense(), Money::from_cents(12050));
        assert_eq!(store.min_expense(), Money::from_cents(3200));

        let average = store.average_expense().unwrap();
        assert!((average - 68.698).abs() < 1e-9);
    }

    #[test]
    fn test_seed_category_totals() {
        let totals = ExpenseStore::with_sample_data().category_totals();
        assert_eq!(totals.len(), 4);
        assert_eq!(totals.get(Category::Utilities), Some(Money::from_cents(18049)));
        assert_eq!(totals.get(Category::Food), Some(Money::from_cents(8575)));
        assert_eq!(totals.get(Category::Entertainment), Some(Money::from_cents(3200)));
        assert_eq!(totals.get(Category::Transportation), Some(Money::from_cents(4525)));
        assert_eq!(totals.get(Category::Housing), None);

        let order: Vec<_> = totals.iter().map(|t| t.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Food,
                Category::Utilities,
                Category::Entertainment,
                Category::Transportation,
            ]
        );
        assert_eq!(totals.entry(Category::Utilities).unwrap().count, 2);
    }

    #[test]
    fn test_category_totals_sum_to_total() {
        let mut store = ExpenseStore::with_sample_data();
        store.add(NewExpense::new(
            "Rent",
            Money::from_cents(150000),
            Category::Housing,
            date(2024, 6, 1),
        ));
        assert_eq!(store.category_totals().grand_total(), store.total_spent());
    }

    #[test]
    fn test_adding_coffee_updates_food() {
        let mut store = ExpenseStore::with_sample_data();
        store.add(NewExpense::new(
            "Coffee",
            Money::from_cents(450),
            Category::Food,
            date(2024, 6, 1),
        ));
        assert_eq!(store.len(), 6);
        assert_eq!(
            store.category_totals().get(Category::Food),
            Some(Money::from_cents(9025))
        );
    }

    #[test]
    fn test_empty_store_aggregates() {
        let store = ExpenseStore::new();
        assert_eq!(store.total_spent(), Money::zero());
        assert_eq!(store.average_expense(), None);
        assert!(store.category_totals().is_empty());
        assert!(store.recent_trend(DEFAULT_TREND_WINDOW).is_empty());
        assert_eq!(store.max_expense(), Money::zero());
        assert_eq!(store.min_expense(), Money::zero());
        assert_eq!(store.most_common_category(), None);
    }

    #[test]
    fn test_average_matches_total_over_count() {
        let store = ExpenseStore::with_sample_data();
        let expected = store.total_spent().to_f64() / store.len() as f64;
        assert_eq!(store.average_expense(), Some(expected));
    }

    #[test]
    fn test_most_common_category() {
        let on = date(2024, 5, 1);
        let store = ExpenseStore::from_expenses(vec![
            expense("a", 100, Category::Food, on),
            expense("b", 100, Category::Food, on),
            expense("c", 100, Category::Utilities, on),
        ]);
        assert_eq!(store.most_common_category(), Some(Category::Food));
    }

    #[test]
    fn test_most_common_category_tie_goes_to_first_seen() {
        let on = date(2024, 5, 1);
        let store = ExpenseStore::from_expenses(vec![
            expense("a", 100, Category::Healthcare, on),
            expense("b", 100, Category::Education, on),
            expense("c", 100, Category::Education, on),
            expense("d", 100, Category::Healthcare, on),
        ]);
        assert_eq!(store.most_common_category(), Some(Category::Healthcare));

        // Seed data: Utilities is the only category with two entries
        assert_eq!(
            ExpenseStore::with_sample_data().most_common_category(),
            Some(Category::Utilities)
        );
    }

    #[test]
    fn test_recent_trend_seed() {
        let trend = ExpenseStore::with_sample_data().recent_trend(DEFAULT_TREND_WINDOW);
        let labels: Vec<_> = trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["May 5", "May 10", "May 12", "May 15", "May 18"]);
        assert_eq!(trend[0].amount, Money::from_cents(5999));
        assert_eq!(trend[4].amount, Money::from_cents(3200));
    }

    #[test]
    fn test_recent_trend_takes_latest_n() {
        let trend = ExpenseStore::with_sample_data().recent_trend(2);
        let labels: Vec<_> = trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["May 15", "May 18"]);
        assert!(ExpenseStore::with_sample_data().recent_trend(0).is_empty());
    }

    #[test]
    fn test_recent_trend_groups_same_day() {
        let store = ExpenseStore::from_expenses(vec![
            expense("a", 1000, Category::Food, date(2024, 6, 1)),
            expense("b", 250, Category::Other, date(2024, 6, 2)),
            expense("c", 525, Category::Food, date(2024, 6, 1)),
        ]);
        let trend = store.recent_trend(DEFAULT_TREND_WINDOW);
        assert_eq!(
            trend,
            vec![
                TrendPoint {
                    label: "Jun 1".into(),
                    amount: Money::from_cents(1525),
                },
                TrendPoint {
                    label: "Jun 2".into(),
                    amount: Money::from_cents(250),
                },
            ]
        );
    }

    #[test]
    fn test_recent_trend_merges_across_years() {
        let store = ExpenseStore::from_expenses(vec![
            expense("a", 1000, Category::Food, date(2023, 6, 1)),
            expense("b", 500, Category::Food, date(2024, 5, 31)),
            expense("c", 200, Category::Food, date(2024, 6, 1)),
        ]);
        let trend = store.recent_trend(DEFAULT_TREND_WINDOW);
        let labels: Vec<_> = trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Jun 1", "May 31"]);
        assert_eq!(trend[0].amount, Money::from_cents(1200));
    }

    #[test]
    fn test_min_is_true_minimum() {
        let store = ExpenseStore::from_expenses(vec![
            expense("a", 999, Category::Food, date(2024, 1, 1)),
            expense("b", 10, Category::Food, date(2024, 1, 2)),
        ]);
        assert_eq!(store.min_expense(), Money::from_cents(10));
    }

    #[test]
    fn test_totals_saturate_on_huge_amounts() {
        let store = ExpenseStore::from_expenses(vec![
            expense("a", i64::MAX / 2 + 1, Category::Personal, date(2024, 6, 1)),
            expense("b", i64::MAX / 2 + 1, Category::Personal, date(2024, 6, 2)),
        ]);
        assert_eq!(store.total_spent(), Money::from_cents(i64::MAX));
        assert_eq!(
            store.category_totals().get(Category::Personal),
            Some(Money::from_cents(i64::MAX))
        );
    }
}
