//! Tests for domain values.

use super::*;

#[test]
fn test_item_equality_is_structural() {
    assert_eq!(Item::new(1, 53.38, 45.0), Item::new(1, 53.38, 45.0));
    assert_ne!(Item::new(1, 53.38, 45.0), Item::new(2, 53.38, 45.0));
    assert_ne!(Item::new(1, 53.38, 45.0), Item::new(1, 53.39, 45.0));
    assert_ne!(Item::new(1, 53.38, 45.0), Item::new(1, 53.38, 46.0));
}

#[test]
fn test_task_accessors() {
    let task = Task::new(81.0, vec![Item::new(1, 53.38, 45.0), Item::new(2, 88.62, 98.0)]);

    assert_eq!(task.capacity(), 81.0);
    assert_eq!(task.item_count(), 2);
    assert!(!task.is_empty());
    assert_eq!(task.items()[1].index(), 2);
}

#[test]
fn test_empty_task() {
    let task = Task::new(0.0, Vec::new());
    assert!(task.is_empty());
    assert_eq!(task.item_count(), 0);
}

#[test]
fn test_package_totals() {
    let package = Package::new(vec![Item::new(2, 14.55, 74.0), Item::new(7, 60.02, 74.0)]);

    assert_eq!(package.indices(), vec![2, 7]);
    assert_eq!(package.len(), 2);
    assert_eq!(package.total_cost(), 148.0);
    assert!((package.total_weight() - 74.57).abs() < 1e-9);
}

#[test]
fn test_empty_package() {
    let package = Package::empty();
    assert!(package.is_empty());
    assert!(package.indices().is_empty());
    assert_eq!(package.total_cost(), 0.0);
    assert_eq!(package, Package::default());
}
