use kitchen_core::{EntityStore, MealEntry, MealType, MemoryStore, RecordId, StoreError, Weekday};

fn meal(id: &str, day: Weekday, recipe: &str) -> MealEntry {
    MealEntry {
        id: RecordId::from(id),
        day,
        meal_type: MealType::Dinner,
        recipe: recipe.to_string(),
        notes: String::new(),
    }
}

#[test]
fn insert_then_get_returns_equal_record() {
    let mut store = MemoryStore::new();
    let record = meal("a", Weekday::Monday, "Soup");
    store.insert(record.clone()).unwrap();

    assert_eq!(store.get(&RecordId::from("a")).unwrap(), record);
}

#[test]
fn all_preserves_insertion_order() {
    let mut store = MemoryStore::new();
    let a = meal("a", Weekday::Friday, "Soup");
    let b = meal("b", Weekday::Monday, "Salad");
    store.insert(a.clone()).unwrap();
    store.insert(b.clone()).unwrap();

    assert_eq!(store.all(), vec![a, b]);
}

#[test]
fn duplicate_insert_fails_and_keeps_state() {
    let mut store = MemoryStore::new();
    store.insert(meal("a", Weekday::Monday, "Soup")).unwrap();

    let err = store
        .insert(meal("a", Weekday::Tuesday, "Other"))
        .unwrap_err();
    assert_eq!(err, StoreError::DuplicateId(RecordId::from("a")));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&RecordId::from("a")).unwrap().recipe, "Soup");
}

#[test]
fn get_unknown_id_is_not_found() {
    let store: MemoryStore<MealEntry> = MemoryStore::new();
    let err = store.get(&RecordId::from("missing")).unwrap_err();
    assert_eq!(err, StoreError::NotFound(RecordId::from("missing")));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn remove_twice_equals_remove_once() {
    let mut store = MemoryStore::new();
    store.insert(meal("a", Weekday::Monday, "Soup")).unwrap();
    store.insert(meal("b", Weekday::Monday, "Salad")).unwrap();

    let id = RecordId::from("a");
    assert!(store.remove(&id).is_some());
    let after_once = store.all();
    assert!(store.remove(&id).is_none());
    assert_eq!(store.all(), after_once);
}

#[test]
fn snapshot_is_detached_from_later_mutations() {
    let mut store = MemoryStore::new();
    store.insert(meal("a", Weekday::Monday, "Soup")).unwrap();
    let snapshot = store.all();

    store.insert(meal("b", Weekday::Monday, "Salad")).unwrap();
    store.remove(&RecordId::from("a"));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, RecordId::from("a"));
}
