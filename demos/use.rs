use avl_map::AvlTreeMap;

fn main() {
    let mut map = AvlTreeMap::new();
    map.insert(0, "zero");
    map.insert(1, "one");
    map.insert(2, "two");
    map.insert(2, "two");
    map.insert(3, "three");
    map.insert(4, "four");
    map.insert(5, "five");
    assert_eq!(map.get(&1), Some(&"one"));
    map.remove(&1);
    assert!(map.get(&1).is_none());
    assert!(map.try_remove(&1).is_err());

    println!("In-order traversal:");
    map.traverse_in_order(|k, v| println!("{k} => {v}"));

    println!("Level-order traversal:");
    map.traverse_level_order(|k, v| println!("{k} => {v}"));

    println!(
        "min = {:?}, max = {:?}, len = {}, height = {}",
        map.first_key(),
        map.last_key(),
        map.len(),
        map.height()
    );
}
