use thai_storefront::store::CART_KEY;
use thai_storefront::{Cart, CartError, CartStore, LocalizedText, MemoryStore, Money, Product, Storage};

fn silk_shirt() -> Product {
    Product::new("1", LocalizedText::new("เสื้อเชิ้ตผ้าไหมไทย", "Thai Silk Shirt"), Money::baht(1200), "shirts")
        .with_images(["silk.jpg"])
        .with_sizes(["S", "M", "L", "XL"])
        .with_colors(["น้ำเงิน", "แดง", "เขียว"])
}

fn pants() -> Product {
    Product::new("3", LocalizedText::new("กางเกงผ้าฝ้าย", "Cotton Pants"), Money::baht(800), "pants").with_images(["pants.jpg"])
}

fn denim_skirt() -> Product {
    Product::new("5", LocalizedText::new("กระโปรงยีนส์", "Denim Skirt"), Money::baht(900), "skirts")
        .with_images(["skirt.jpg"])
        .out_of_stock()
}

fn assert_derived_consistent(store: &CartStore) {
    let total: Money = store.items().iter().map(|i| i.price.multiply(i.quantity)).sum();
    let count: u32 = store.items().iter().map(|i| i.quantity).sum();
    assert_eq!(store.total(), total);
    assert_eq!(store.item_count(), count);
    assert!(store.items().iter().all(|i| i.quantity >= 1));
}

#[test]
fn add_merge_then_zero_scenario() {
    let mut store = CartStore::open(Storage::in_memory());

    let line = store.add(&silk_shirt(), Some("M"), Some("น้ำเงิน"), 1).unwrap();
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.total(), Money::baht(1200));
    assert_eq!(store.item_count(), 1);

    store.add(&silk_shirt(), Some("M"), Some("น้ำเงิน"), 2).unwrap();
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].quantity, 3);
    assert_eq!(store.total(), Money::baht(3600));
    assert_eq!(store.item_count(), 3);

    store.update_quantity(&line, 0);
    assert!(store.is_empty());
    assert_eq!(store.total(), Money::ZERO);
    assert_eq!(store.item_count(), 0);
}

#[test]
fn out_of_stock_adds_never_mutate() {
    let storage = Storage::in_memory();
    let mut store = CartStore::open(storage.clone());
    store.add(&pants(), Some("L"), None, 2).unwrap();
    let before: Vec<_> = store.items().to_vec();

    for qty in 1..=5 {
        let err = store.add(&denim_skirt(), Some("S"), None, qty).unwrap_err();
        assert_eq!(err, CartError::OutOfStock("5".into()));
    }
    assert_eq!(store.items(), before.as_slice());
    assert_eq!(storage.get::<Cart>(CART_KEY).unwrap().items(), before.as_slice());
}

#[test]
fn repeated_adds_merge_into_one_line() {
    for (q1, q2) in [(1, 1), (2, 5), (7, 3)] {
        let mut store = CartStore::open(Storage::in_memory());
        store.add(&silk_shirt(), Some("L"), Some("แดง"), q1).unwrap();
        store.add(&silk_shirt(), Some("L"), Some("แดง"), q2).unwrap();
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.line_quantity("1", Some("L"), Some("แดง")), q1 + q2);
        assert_eq!(store.total(), Money::baht(1200).multiply(q1 + q2));
        assert_eq!(store.item_count(), q1 + q2);
    }
}

#[test]
fn derived_totals_hold_after_every_mutation() {
    let mut store = CartStore::open(Storage::in_memory());
    let a = store.add(&silk_shirt(), Some("S"), Some("เขียว"), 2).unwrap();
    assert_derived_consistent(&store);
    let b = store.add(&pants(), None, None, 1).unwrap();
    assert_derived_consistent(&store);
    store.add(&silk_shirt(), Some("XL"), Some("เขียว"), 4).unwrap();
    assert_derived_consistent(&store);
    store.update_quantity(&a, 9);
    assert_derived_consistent(&store);
    store.update_quantity(&b, -3);
    assert_derived_consistent(&store);
    store.remove(&a);
    assert_derived_consistent(&store);
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.total(), Money::baht(4800));
}

#[test]
fn zero_update_and_remove_are_equivalent() {
    let setup = || {
        let mut store = CartStore::open(Storage::in_memory());
        store.add(&pants(), None, None, 1).unwrap();
        let line = store.add(&silk_shirt(), Some("M"), None, 2).unwrap();
        store.add(&pants(), Some("S"), None, 3).unwrap();
        (store, line)
    };
    let (mut zeroed, line) = setup();
    zeroed.update_quantity(&line, 0);
    let (mut removed, line) = setup();
    removed.remove(&line);

    let shape = |s: &CartStore| s.items().iter().map(|i| (i.product_id.clone(), i.size.clone(), i.quantity)).collect::<Vec<_>>();
    assert_eq!(shape(&zeroed), shape(&removed));
    assert_eq!(zeroed.total(), removed.total());
    assert_eq!(zeroed.item_count(), removed.item_count());
}

#[test]
fn clear_then_fresh_start_is_empty() {
    let storage = Storage::in_memory();
    let mut store = CartStore::open(storage.clone());
    store.add(&silk_shirt(), Some("M"), Some("น้ำเงิน"), 2).unwrap();
    store.clear();

    let mut restarted = CartStore::new(storage);
    restarted.load();
    assert!(restarted.is_empty());
    assert_eq!(restarted.total(), Money::ZERO);
}

#[test]
fn persisted_cart_survives_restart() {
    let storage = Storage::in_memory();
    let line = {
        let mut store = CartStore::open(storage.clone());
        store.add(&pants(), Some("L"), Some("ดำ"), 2).unwrap()
    };
    let store = CartStore::open(storage);
    assert_eq!(store.item_count(), 2);
    let item = store.find_line("3", Some("L"), Some("ดำ")).unwrap();
    assert_eq!(item.cart_item_id, line);
    assert_eq!(item.image, "pants.jpg");
    assert!(store.is_in_cart("3", Some("L"), Some("ดำ")));
    assert!(!store.is_in_cart("3", Some("M"), Some("ดำ")));
}

#[test]
fn persisted_json_shape() {
    let storage = Storage::in_memory();
    let mut store = CartStore::open(storage.clone());
    store.add(&silk_shirt(), Some("M"), None, 1).unwrap();

    let json: serde_json::Value = storage.get(CART_KEY).unwrap();
    let item = &json["items"][0];
    for key in ["cartItemId", "id", "name", "price", "image", "size", "color", "quantity", "inStock"] {
        assert!(item.get(key).is_some(), "missing {key}");
    }
    assert_eq!(item["id"], "1");
    assert!(item["color"].is_null());
    assert_eq!(json["itemCount"], 1);
    assert_eq!(json["total"].as_f64(), Some(1200.0));
}

#[test]
fn corrupt_snapshot_loads_empty() {
    let backend = std::sync::Arc::new(MemoryStore::new());
    thai_storefront::KeyValueStore::write(backend.as_ref(), CART_KEY, "{\"items\": [").unwrap();
    let store = CartStore::open(Storage::from_shared(backend));
    assert!(store.is_empty());
}
