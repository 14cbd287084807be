use chrono::NaiveDate;

use engine::{Category, Engine, EngineError, ExpenseDraft, ExpensePatch, FixedClock, Money};

const TODAY: &str = "2024-06-15";

fn engine_at(date: &str) -> Engine {
    let today = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    Engine::builder().clock(FixedClock(today)).build()
}

fn draft(amount: i64, category: Category, date: &str, description: &str) -> ExpenseDraft {
    ExpenseDraft {
        amount: Money::new(amount),
        category,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        description: description.to_string(),
        tags: Vec::new(),
        receipt_note: String::new(),
        recurring: false,
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn ids_are_monotonic_and_never_reused() {
    let mut engine = engine_at(TODAY);

    let (first, _) = engine
        .add_expense(draft(10_00, Category::Food, TODAY, "lunch"))
        .unwrap();
    let (second, _) = engine
        .add_expense(draft(20_00, Category::Bills, TODAY, "power"))
        .unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    engine.delete_expense(2).unwrap();
    let (third, _) = engine
        .add_expense(draft(5_00, Category::Food, TODAY, "snack"))
        .unwrap();
    assert_eq!(third.id, 3);
}

#[test]
fn rejects_non_positive_amounts() {
    let mut engine = engine_at(TODAY);

    let err = engine
        .add_expense(draft(0, Category::Food, TODAY, "free lunch"))
        .unwrap_err();
    assert_eq!(err, EngineError::Validation("Amount must be positive".to_string()));

    let err = engine
        .add_expense(draft(-5_00, Category::Food, TODAY, "refund"))
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
    assert!(engine.expenses().is_empty());
}

#[test]
fn update_merges_only_supplied_fields() {
    let mut engine = engine_at(TODAY);
    engine
        .add_expense(draft(12_50, Category::Transport, "2024-06-01", "taxi"))
        .unwrap();

    let updated = engine
        .update_expense(
            1,
            ExpensePatch {
                description: Some("night taxi".to_string()),
                ..ExpensePatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.description, "night taxi");
    assert_eq!(updated.amount, Money::new(12_50));
    assert_eq!(updated.category, Category::Transport);
    assert_eq!(updated.date, date("2024-06-01"));
}

#[test]
fn update_does_not_recheck_amount_positivity() {
    let mut engine = engine_at(TODAY);
    engine
        .add_expense(draft(12_50, Category::Transport, TODAY, "taxi"))
        .unwrap();

    let updated = engine
        .update_expense(
            1,
            ExpensePatch {
                amount: Some(Money::new(-1_00)),
                ..ExpensePatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.amount, Money::new(-1_00));
}

#[test]
fn update_missing_id_is_not_found() {
    let mut engine = engine_at(TODAY);
    let err = engine
        .update_expense(7, ExpensePatch::default())
        .unwrap_err();
    assert_eq!(err, EngineError::NotFound(7));
}

#[test]
fn delete_missing_id_leaves_store_unchanged() {
    let mut engine = engine_at(TODAY);
    engine
        .add_expense(draft(10_00, Category::Food, TODAY, "lunch"))
        .unwrap();

    assert_eq!(engine.delete_expense(99), Err(EngineError::NotFound(99)));
    assert_eq!(engine.expenses().len(), 1);
}

#[test]
fn delete_removes_recurring_snapshot_too() {
    let mut engine = engine_at(TODAY);
    let mut rent = draft(800_00, Category::Bills, "2024-06-01", "rent");
    rent.recurring = true;
    engine.add_expense(rent).unwrap();
    assert_eq!(engine.current_month_recurring().len(), 1);

    engine.delete_expense(1).unwrap();
    assert!(engine.expenses().is_empty());
    assert!(engine.current_month_recurring().is_empty());
}

#[test]
fn recurring_snapshots_appear_regardless_of_stored_date() {
    // A snapshot dated months in the past is still materialized every call.
    let mut engine = engine_at(TODAY);
    let mut rent = draft(800_00, Category::Bills, "2023-01-01", "rent");
    rent.recurring = true;
    engine.add_expense(rent).unwrap();

    let instances = engine.current_month_recurring();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].date, date("2023-01-01"));
}

#[test]
fn recurring_snapshot_ignores_later_edits() {
    let mut engine = engine_at(TODAY);
    let mut gym = draft(30_00, Category::Entertainment, "2024-06-02", "gym");
    gym.recurring = true;
    engine.add_expense(gym).unwrap();

    engine
        .update_expense(
            1,
            ExpensePatch {
                amount: Some(Money::new(45_00)),
                ..ExpensePatch::default()
            },
        )
        .unwrap();

    let instances = engine.current_month_recurring();
    assert_eq!(instances[0].amount, Money::new(30_00));
}

#[test]
fn monthly_total_filters_canonical_but_not_recurring() {
    let mut engine = engine_at(TODAY);
    engine
        .add_expense(draft(10_00, Category::Food, "2024-06-10", "lunch"))
        .unwrap();
    engine
        .add_expense(draft(99_00, Category::Shopping, "2024-05-10", "old purchase"))
        .unwrap();
    let mut rent = draft(800_00, Category::Bills, "2023-12-01", "rent");
    rent.recurring = true;
    engine.add_expense(rent).unwrap();

    // 10.00 current-month canonical + 800.00 recurring instance; the May
    // purchase is out, but so is the canonical copy of the December rent.
    assert_eq!(engine.monthly_total(), Money::new(810_00));
}

#[test]
fn breakdown_omits_zero_spend_categories_and_matches_total() {
    let mut engine = engine_at(TODAY);
    engine
        .add_expense(draft(10_00, Category::Food, "2024-06-10", "lunch"))
        .unwrap();
    engine
        .add_expense(draft(25_50, Category::Food, "2024-06-12", "groceries"))
        .unwrap();
    let mut gym = draft(30_00, Category::Entertainment, "2024-01-02", "gym");
    gym.recurring = true;
    engine.add_expense(gym).unwrap();

    let breakdown = engine.category_breakdown();
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[&Category::Food], Money::new(35_50));
    assert_eq!(breakdown[&Category::Entertainment], Money::new(30_00));
    assert!(!breakdown.contains_key(&Category::Bills));

    let sum: Money = breakdown.values().copied().sum();
    assert_eq!(sum, engine.monthly_total());
}

#[test]
fn date_filter_is_inclusive_and_order_independent() {
    let mut engine = engine_at(TODAY);
    engine
        .add_expense(draft(1_00, Category::Food, "2024-02-15", "mid"))
        .unwrap();
    engine
        .add_expense(draft(2_00, Category::Food, "2024-01-31", "end"))
        .unwrap();
    engine
        .add_expense(draft(3_00, Category::Food, "2024-01-01", "start"))
        .unwrap();

    let hits = engine.filter_by_date(Some(date("2024-01-01")), Some(date("2024-01-31")));
    let mut ids: Vec<u64> = hits.iter().map(|e| e.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 3]);

    let unbounded = engine.filter_by_date(None, Some(date("2024-01-31")));
    assert_eq!(unbounded.len(), 2);
}

#[test]
fn search_is_case_insensitive_substring() {
    let mut engine = engine_at(TODAY);
    engine
        .add_expense(draft(4_50, Category::Food, TODAY, "Morning Coffee Run"))
        .unwrap();
    engine
        .add_expense(draft(9_00, Category::Food, TODAY, "lunch"))
        .unwrap();

    let hits = engine.search_description("coffee");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].description, "Morning Coffee Run");

    // Empty keyword matches everything.
    assert_eq!(engine.search_description("").len(), 2);
}

#[test]
fn tag_filter_matches_exactly_but_case_insensitively() {
    let mut engine = engine_at(TODAY);
    let mut lunch = draft(9_00, Category::Food, TODAY, "lunch");
    lunch.tags = vec!["Work".to_string(), "reimbursable".to_string()];
    engine.add_expense(lunch).unwrap();

    assert_eq!(engine.filter_by_tag("work").len(), 1);
    assert_eq!(engine.filter_by_tag("WORK").len(), 1);
    // Substrings are not enough for tags.
    assert!(engine.filter_by_tag("wor").is_empty());
}

#[test]
fn tag_filter_folds_case_beyond_ascii() {
    let mut engine = engine_at(TODAY);
    let mut espresso = draft(3_00, Category::Food, TODAY, "espresso");
    espresso.tags = vec!["CAFÉ".to_string()];
    engine.add_expense(espresso).unwrap();

    assert_eq!(engine.filter_by_tag("café").len(), 1);
}

#[test]
fn budget_breach_fires_on_create_once_limit_exceeded() {
    let mut engine = engine_at(TODAY);
    let (_, warning) = engine
        .add_expense(draft(50_00, Category::Food, TODAY, "lunch"))
        .unwrap();
    assert!(warning.is_none());

    engine.set_budget(Category::Food, Money::new(30_00)).unwrap();

    let (_, warning) = engine
        .add_expense(draft(10_00, Category::Food, TODAY, "snack"))
        .unwrap();
    let warning = warning.expect("cumulative 60.00 exceeds the 30.00 limit");
    assert!(warning.contains("Food"));
}

#[test]
fn budget_breach_requires_strict_excess() {
    let mut engine = engine_at(TODAY);
    engine.set_budget(Category::Food, Money::new(30_00)).unwrap();

    let (_, warning) = engine
        .add_expense(draft(30_00, Category::Food, TODAY, "lunch"))
        .unwrap();
    assert!(warning.is_none());
}

#[test]
fn budget_breach_ignores_recurring_instances() {
    // Recurring instances inflate totals but never the breach check.
    let mut engine = engine_at(TODAY);
    engine.set_budget(Category::Bills, Money::new(100_00)).unwrap();

    let mut rent = draft(800_00, Category::Bills, "2023-12-01", "rent");
    rent.recurring = true;
    engine.add_expense(rent).unwrap();

    let (_, warning) = engine
        .add_expense(draft(20_00, Category::Bills, TODAY, "water"))
        .unwrap();
    assert!(warning.is_none());
    assert_eq!(engine.monthly_total(), Money::new(820_00));
}

#[test]
fn set_budget_rejects_non_positive_limits_and_overwrites() {
    let mut engine = engine_at(TODAY);
    assert!(matches!(
        engine.set_budget(Category::Food, Money::ZERO),
        Err(EngineError::Validation(_))
    ));

    engine.set_budget(Category::Food, Money::new(30_00)).unwrap();
    engine.set_budget(Category::Food, Money::new(70_00)).unwrap();
    assert_eq!(engine.budgets()[&Category::Food], Money::new(70_00));
}

#[test]
fn visible_expenses_union_canonical_and_recurring() {
    let mut engine = engine_at(TODAY);
    engine
        .add_expense(draft(10_00, Category::Food, "2024-05-01", "old lunch"))
        .unwrap();
    let mut rent = draft(800_00, Category::Bills, "2023-12-01", "rent");
    rent.recurring = true;
    engine.add_expense(rent).unwrap();

    // Canonical copies plus one recurring instance sharing id 2.
    let visible = engine.visible_expenses();
    assert_eq!(visible.len(), 3);
    assert_eq!(visible.iter().filter(|e| e.id == 2).count(), 2);
}
