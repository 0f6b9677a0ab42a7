use chrono::NaiveDate;
use kitchen_core::{
    ChangeEvent, ChangeKind, Clock, ConfigError, Domain, ExpiryStatus, FixedClock, IdGenerator,
    InventoryItem, ItemDraft, Kitchen, KitchenConfig, KitchenError, KitchenSeed, MealDraft,
    MealType, NotificationLevel, RecordId, SequentialIdGenerator, ServiceError, StoreError,
    ValidationError, Weekday,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn kitchen_on(today: NaiveDate) -> Kitchen {
    Kitchen::builder()
        .clock(Arc::new(FixedClock::on(today)))
        .inventory_ids(Box::new(SequentialIdGenerator::new("item")))
        .meal_ids(Box::new(SequentialIdGenerator::new("meal")))
        .build()
        .unwrap()
}

fn stock(kitchen: &mut Kitchen, name: &str) -> InventoryItem {
    kitchen.inventory.add_item(ItemDraft::named(name)).unwrap()
}

fn recorder() -> (Rc<RefCell<Vec<ChangeEvent>>>, impl Fn(&ChangeEvent) + 'static) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    (events, move |event: &ChangeEvent| sink.borrow_mut().push(event.clone()))
}

/// Always hands out the same id, to force a store collision.
struct StuckIds;

impl IdGenerator for StuckIds {
    fn next_id(&mut self, _clock: &dyn Clock) -> RecordId {
        RecordId::from("same")
    }
}

#[test]
fn add_item_applies_defaults_and_notifies_success() {
    let mut kitchen = kitchen_on(date(2024, 2, 10));
    let (events, callback) = recorder();
    kitchen.inventory.subscribe(callback);

    let item = stock(&mut kitchen, "Milk");

    assert_eq!(item.id, RecordId::from("item-1"));
    assert_eq!(item.category, "Other");
    assert_eq!(item.quantity, 1);
    assert_eq!(item.added_date, date(2024, 2, 10));
    assert_eq!(kitchen.inventory.all(), vec![item.clone()]);

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, ChangeKind::Added);
    assert_eq!(events[0].level, NotificationLevel::Success);
    assert_eq!(events[0].domain, Domain::Inventory);
    assert_eq!(events[0].id, item.id);
    assert_eq!(events[0].message, "Item added to inventory!");
}

#[test]
fn negative_quantity_is_rejected_without_side_effects() {
    let mut kitchen = kitchen_on(date(2024, 2, 10));
    stock(&mut kitchen, "Rice");
    let (events, callback) = recorder();
    kitchen.inventory.subscribe(callback);
    let before = kitchen.inventory.all();

    let err = kitchen
        .inventory
        .add_item(ItemDraft::named("Milk").quantity(-1))
        .unwrap_err();

    assert_eq!(err, ServiceError::Validation(ValidationError::NegativeQuantity(-1)));
    assert_eq!(kitchen.inventory.all(), before);
    assert!(events.borrow().is_empty());
}

#[test]
fn duplicate_generated_id_surfaces_store_error() {
    let mut kitchen = Kitchen::builder()
        .clock(Arc::new(FixedClock::on(date(2024, 2, 10))))
        .inventory_ids(Box::new(StuckIds))
        .build()
        .unwrap();
    stock(&mut kitchen, "Rice");
    let (events, callback) = recorder();
    kitchen.inventory.subscribe(callback);

    let err = kitchen
        .inventory
        .add_item(ItemDraft::named("Beans"))
        .unwrap_err();

    assert_eq!(err, ServiceError::Store(StoreError::DuplicateId(RecordId::from("same"))));
    assert_eq!(kitchen.inventory.len(), 1);
    assert!(events.borrow().is_empty());
}

#[test]
fn delete_is_idempotent_and_always_notifies_info() {
    let mut kitchen = kitchen_on(date(2024, 2, 10));
    let item = stock(&mut kitchen, "Milk");
    let (events, callback) = recorder();
    kitchen.inventory.subscribe(callback);

    assert!(kitchen.inventory.delete_item(&item.id));
    assert!(!kitchen.inventory.delete_item(&item.id));
    assert!(kitchen.inventory.is_empty());

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    for event in events.iter() {
        assert_eq!(event.kind, ChangeKind::Removed);
        assert_eq!(event.level, NotificationLevel::Info);
    }
    assert_eq!(events[0].message, "Item removed from inventory");
}

#[test]
fn fan_out_reaches_subscribers_in_order_and_skips_unsubscribed() {
    let mut kitchen = kitchen_on(date(2024, 2, 10));
    let log = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&log);
    kitchen
        .meal_plan
        .subscribe(move |_| first.borrow_mut().push("first"));
    let second = Rc::clone(&log);
    kitchen
        .meal_plan
        .subscribe(move |_| second.borrow_mut().push("second"));
    let gone = Rc::clone(&log);
    let token = kitchen
        .meal_plan
        .subscribe(move |_| gone.borrow_mut().push("gone"));
    assert!(kitchen.meal_plan.unsubscribe(token));

    kitchen
        .meal_plan
        .add_meal(MealDraft::new(Weekday::Monday, MealType::Dinner, "Soup"))
        .unwrap();

    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn panicking_observer_does_not_block_later_observers() {
    let mut kitchen = kitchen_on(date(2024, 2, 10));
    let reached = Rc::new(RefCell::new(0));
    kitchen.meal_plan.subscribe(|_| panic!("view crashed"));
    let counter = Rc::clone(&reached);
    kitchen
        .meal_plan
        .subscribe(move |_| *counter.borrow_mut() += 1);

    kitchen
        .meal_plan
        .add_meal(MealDraft::new(Weekday::Sunday, MealType::Snacks, "Popcorn"))
        .unwrap();

    assert_eq!(*reached.borrow(), 1);
    assert_eq!(kitchen.meal_plan.len(), 1);
}

#[test]
fn item_without_name_is_rejected_not_defaulted() {
    let mut kitchen = kitchen_on(date(2024, 2, 10));
    for draft in [ItemDraft::default(), ItemDraft::named("   ")] {
        let err = kitchen.inventory.add_item(draft).unwrap_err();
        assert_eq!(err, ServiceError::Validation(ValidationError::MissingField("name")));
    }
    assert!(kitchen.inventory.is_empty());
}

#[test]
fn meal_without_day_or_type_is_rejected() {
    let mut kitchen = kitchen_on(date(2024, 2, 10));
    let err = kitchen
        .meal_plan
        .add_meal(MealDraft {
            recipe: Some("Soup".to_string()),
            ..MealDraft::default()
        })
        .unwrap_err();
    assert_eq!(err, ServiceError::Validation(ValidationError::MissingField("day")));
    assert!(kitchen.meal_plan.is_empty());
}

#[test]
fn week_view_tracks_adds_and_deletes() {
    let mut kitchen = kitchen_on(date(2024, 2, 10));
    let dinner = kitchen
        .meal_plan
        .add_meal(MealDraft::new(Weekday::Monday, MealType::Dinner, "Tomato Pasta"))
        .unwrap();
    kitchen
        .meal_plan
        .add_meal(MealDraft::new(Weekday::Monday, MealType::Dinner, "Side Salad"))
        .unwrap();

    let week = kitchen.meal_plan.week();
    assert_eq!(week.len(), 7);
    assert_eq!(week[&Weekday::Monday].len(), 2);
    assert_eq!(
        kitchen
            .meal_plan
            .meals_for_slot(Weekday::Monday, MealType::Dinner)
            .len(),
        2
    );

    kitchen.meal_plan.delete_meal(&dinner.id);
    let monday = kitchen.meal_plan.meals_for_day(Weekday::Monday);
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].recipe, "Side Salad");
}

#[test]
fn remove_right_after_insert_observes_the_record() {
    let mut kitchen = kitchen_on(date(2024, 2, 10));
    let item = stock(&mut kitchen, "Milk");
    assert_eq!(kitchen.inventory.get(&item.id).unwrap(), item);
    assert!(kitchen.inventory.delete_item(&item.id));
    assert!(kitchen.inventory.get(&item.id).is_err());
}

#[test]
fn freshness_uses_clock_date_and_config_window() {
    let config = KitchenConfig {
        expiring_soon_days: 1,
        ..KitchenConfig::default()
    };
    let mut kitchen = Kitchen::builder()
        .config(config)
        .clock(Arc::new(FixedClock::on(date(2024, 2, 10))))
        .seed(KitchenSeed::default())
        .build()
        .unwrap();
    kitchen
        .inventory
        .add_item(ItemDraft::named("Yogurt").expires_on(date(2024, 2, 12)))
        .unwrap();
    kitchen
        .inventory
        .add_item(ItemDraft::named("Cream").expires_on(date(2024, 2, 11)))
        .unwrap();

    let statuses: Vec<_> = kitchen
        .inventory
        .freshness("")
        .into_iter()
        .map(|entry| (entry.item.name, entry.status, entry.days_left))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("Yogurt".to_string(), ExpiryStatus::Fresh, 2),
            ("Cream".to_string(), ExpiryStatus::ExpiringSoon, 1),
        ]
    );
    let summary = kitchen.inventory.expiry_summary();
    assert_eq!((summary.expired, summary.expiring_soon, summary.fresh), (0, 1, 1));
}

#[test]
fn demo_kitchen_serves_every_view() {
    let kitchen = Kitchen::builder()
        .clock(Arc::new(FixedClock::on(date(2024, 2, 10))))
        .seed(KitchenSeed::demo())
        .build()
        .unwrap();

    assert_eq!(kitchen.inventory.len(), 3);
    assert_eq!(kitchen.recipes.len(), 3);
    assert_eq!(kitchen.meal_plan.len(), 2);
    assert_eq!(kitchen.inventory.search("veg").len(), 1);
    assert_eq!(kitchen.recipes.browse("Breakfast", "").len(), 1);
    assert_eq!(kitchen.suggest_recipes().len(), 2);

    let summary = kitchen.inventory.expiry_summary();
    assert_eq!((summary.expired, summary.expiring_soon, summary.fresh), (1, 1, 1));
}

#[test]
fn builder_rejects_config_that_fails_validation() {
    let blank_category = KitchenConfig {
        default_category: String::new(),
        ..KitchenConfig::default()
    };
    let err = Kitchen::builder()
        .config(blank_category)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, KitchenError::Config(ConfigError::Invalid(_))));
    assert!(err.to_string().contains("default_category"));

    let negative_window = KitchenConfig {
        expiring_soon_days: -5,
        ..KitchenConfig::default()
    };
    let err = Kitchen::builder()
        .config(negative_window)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, KitchenError::Config(ConfigError::Invalid(_))));
}

#[test]
fn builder_reports_duplicate_seed_ids() {
    let mut seed = KitchenSeed::demo();
    seed.meal_plan.push(seed.meal_plan[0].clone());
    let err = Kitchen::builder().seed(seed).build().err().unwrap();
    assert!(matches!(err, KitchenError::Store(StoreError::DuplicateId(_))));
}
