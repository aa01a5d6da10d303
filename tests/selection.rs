use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use scroll_picker::{
    PickerConfig, PickerError, PickerItem, ScrollPicker, ScrollView, TouchEvent,
};

/// Scroll surface where animations land instantly; the picker treats them as
/// fire-and-forget anyway.
#[derive(Debug, Default)]
struct TestScroll {
    offset: i32,
    animated_to: Vec<i32>,
}

impl ScrollView for TestScroll {
    fn scroll_y(&self) -> i32 {
        self.offset
    }

    fn scroll_to(&mut self, y: i32) {
        self.offset = y;
    }

    fn animate_to(&mut self, y: i32, _duration: Duration) {
        self.animated_to.push(y);
        self.offset = y;
    }

    fn stop(&mut self) {}
}

/// Picker with a 100x300 viewport and 3 shown items: cell height 100.
fn picker() -> (ScrollPicker, TestScroll) {
    let mut picker = ScrollPicker::new(PickerConfig::default());
    let mut view = TestScroll::default();
    picker.set_viewport(100, 300, &mut view);
    (picker, view)
}

fn int_items(values: &[i32]) -> Vec<PickerItem> {
    values.iter().copied().map(PickerItem::from).collect()
}

fn label_items(labels: &[&str]) -> Vec<PickerItem> {
    labels.iter().copied().map(PickerItem::from).collect()
}

fn recorded(picker: &mut ScrollPicker) -> Rc<RefCell<Vec<i32>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    picker.add_on_value_changed(move |value| sink.borrow_mut().push(value));
    seen
}

// ============================================================================
// Value/Index Duality
// ============================================================================

#[test]
fn test_value_is_index_for_label_lists() {
    let (mut picker, mut view) = picker();
    picker
        .set_items(label_items(&["mon", "tue", "wed"]), &mut view)
        .unwrap();
    assert_eq!(picker.value(), 0);

    picker.select_next_item(&mut view);
    assert_eq!(picker.selected_index(), 1);
    assert_eq!(picker.value(), 1);
}

#[test]
fn test_value_is_item_for_int_lists() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[10, 20, 30]), &mut view).unwrap();
    assert_eq!(picker.value(), 10);

    picker.select_next_item(&mut view);
    assert_eq!(picker.selected_index(), 1);
    assert_eq!(picker.value(), 20);
}

#[test]
fn test_set_value_round_trip() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[10, 20, 30]), &mut view).unwrap();

    picker.set_value(20, &mut view).unwrap();
    assert_eq!(picker.value(), 20);
    assert_eq!(picker.selected_index(), 1);
}

// ============================================================================
// Discrete Steps
// ============================================================================

#[test]
fn test_select_previous_noop_at_first_item() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[1, 2, 3]), &mut view).unwrap();
    let seen = recorded(&mut picker);

    picker.select_previous_item(&mut view);
    assert_eq!(picker.selected_index(), 0);
    assert_eq!(view.animated_to, Vec::<i32>::new());
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_select_next_noop_at_last_item() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[1, 2, 3]), &mut view).unwrap();
    picker.set_value(3, &mut view).unwrap();
    let seen = recorded(&mut picker);

    picker.select_next_item(&mut view);
    assert_eq!(picker.selected_index(), 2);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_steps_move_by_exactly_one_cell() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[1, 2, 3]), &mut view).unwrap();

    picker.select_next_item(&mut view);
    assert_eq!(view.animated_to, vec![100]);
    picker.select_next_item(&mut view);
    assert_eq!(view.animated_to, vec![100, 200]);
    picker.select_previous_item(&mut view);
    assert_eq!(view.animated_to, vec![100, 200, 100]);
    assert_eq!(picker.selected_index(), 1);
}

// ============================================================================
// Listener Notification
// ============================================================================

#[test]
fn test_set_value_never_notifies_listeners() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[10, 20, 30]), &mut view).unwrap();
    let seen = recorded(&mut picker);

    picker.set_value(30, &mut view).unwrap();
    assert_eq!(picker.value(), 30);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_steps_notify_exactly_once_with_derived_value() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[10, 20, 30]), &mut view).unwrap();
    let seen = recorded(&mut picker);

    picker.select_next_item(&mut view);
    assert_eq!(*seen.borrow(), vec![20]);
    picker.select_previous_item(&mut view);
    assert_eq!(*seen.borrow(), vec![20, 10]);
}

#[test]
fn test_listeners_invoked_in_registration_order() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[1, 2]), &mut view).unwrap();

    let order = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&order);
    let second = Rc::clone(&order);
    picker.add_on_value_changed(move |_| first.borrow_mut().push("first"));
    picker.add_on_value_changed(move |_| second.borrow_mut().push("second"));

    picker.select_next_item(&mut view);
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[test]
fn test_removed_listener_is_not_invoked() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[1, 2]), &mut view).unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = picker.add_on_value_changed(move |value| sink.borrow_mut().push(value));
    picker.remove_on_value_changed(id);
    // Removing again is harmless.
    picker.remove_on_value_changed(id);

    picker.select_next_item(&mut view);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_list_swap_resets_selection_without_notification() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[10, 20, 30]), &mut view).unwrap();
    picker.set_value(30, &mut view).unwrap();
    let seen = recorded(&mut picker);

    picker.set_items(int_items(&[40, 50]), &mut view).unwrap();
    assert_eq!(picker.selected_index(), 0);
    assert_eq!(picker.value(), 40);
    assert!(seen.borrow().is_empty());
}

// ============================================================================
// Stored Value Replay
// ============================================================================

#[test]
fn test_set_value_before_items_is_replayed() {
    let (mut picker, mut view) = picker();
    let seen = recorded(&mut picker);

    picker.set_value(5, &mut view).unwrap();
    assert_eq!(picker.value(), 0); // nothing configured yet

    picker.set_items(int_items(&[5, 6, 7]), &mut view).unwrap();
    assert_eq!(picker.value(), 5);
    assert_eq!(picker.selected_index(), 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_stored_value_selects_matching_item() {
    let (mut picker, mut view) = picker();
    picker.set_value(7, &mut view).unwrap();
    picker.set_items(int_items(&[5, 6, 7]), &mut view).unwrap();
    assert_eq!(picker.value(), 7);
    assert_eq!(picker.selected_index(), 2);
}

#[test]
fn test_stored_value_invalid_for_new_list_errors() {
    let (mut picker, mut view) = picker();
    picker.set_value(9, &mut view).unwrap();
    let result = picker.set_items(int_items(&[5, 6, 7]), &mut view);
    assert_eq!(result, Err(PickerError::WrongValue { value: 9 }));
}

// ============================================================================
// Errors and Degradation
// ============================================================================

#[test]
fn test_empty_item_list_is_rejected() {
    let (mut picker, mut view) = picker();
    let result = picker.set_items(Vec::new(), &mut view);
    assert_eq!(result, Err(PickerError::EmptyItems));
}

#[test]
fn test_set_value_absent_from_int_list_errors() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[10, 20, 30]), &mut view).unwrap();
    let result = picker.set_value(25, &mut view);
    assert_eq!(result, Err(PickerError::WrongValue { value: 25 }));
    // Selection is untouched by the failed set.
    assert_eq!(picker.value(), 10);
}

#[test]
fn test_set_value_out_of_bounds_label_index_errors() {
    let (mut picker, mut view) = picker();
    picker.set_items(label_items(&["a", "b"]), &mut view).unwrap();
    assert_eq!(
        picker.set_value(2, &mut view),
        Err(PickerError::WrongValue { value: 2 })
    );
    assert_eq!(
        picker.set_value(-1, &mut view),
        Err(PickerError::WrongValue { value: -1 })
    );
}

#[test]
fn test_mixed_item_kinds_degrade_to_labels() {
    let (mut picker, mut view) = picker();
    picker
        .set_items(vec![PickerItem::Int(7), PickerItem::from("x")], &mut view)
        .unwrap();
    // Label semantics: the value is the index, not the first item's 7.
    picker.select_next_item(&mut view);
    assert_eq!(picker.value(), 1);
    assert_eq!(picker.selected_item_text(), Some("x".to_string()));
}

#[test]
fn test_selected_item_text() {
    let (mut picker, mut view) = picker();
    assert_eq!(picker.selected_item_text(), None);
    picker.set_items(int_items(&[10, 20]), &mut view).unwrap();
    picker.select_next_item(&mut view);
    assert_eq!(picker.selected_item_text(), Some("20".to_string()));
}

// ============================================================================
// Enabled Flag and Taps
// ============================================================================

#[test]
fn test_disabled_picker_ignores_touch_but_not_programmatic_changes() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[10, 20, 30]), &mut view).unwrap();
    picker.set_enabled(false);

    let now = Instant::now();
    picker.handle_touch(TouchEvent::down(50, 250), now, &mut view);
    picker.handle_touch(TouchEvent::up(50, 250), now, &mut view);
    assert_eq!(picker.selected_index(), 0);

    picker.set_value(30, &mut view).unwrap();
    assert_eq!(picker.value(), 30);
}

#[test]
fn test_tap_below_selector_selects_next() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[10, 20, 30]), &mut view).unwrap();

    let now = Instant::now();
    picker.handle_touch(TouchEvent::down(50, 250), now, &mut view);
    picker.handle_touch(TouchEvent::up(50, 252), now, &mut view);
    assert_eq!(picker.selected_index(), 1);
}

#[test]
fn test_tap_above_selector_selects_previous() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[10, 20, 30]), &mut view).unwrap();
    picker.set_value(30, &mut view).unwrap();

    let now = Instant::now();
    picker.handle_touch(TouchEvent::down(50, 50), now, &mut view);
    picker.handle_touch(TouchEvent::up(50, 50), now, &mut view);
    assert_eq!(picker.selected_index(), 1);
}

#[test]
fn test_tap_on_selector_band_changes_nothing() {
    let (mut picker, mut view) = picker();
    picker.set_items(int_items(&[10, 20, 30]), &mut view).unwrap();
    picker.set_value(20, &mut view).unwrap();

    let now = Instant::now();
    picker.handle_touch(TouchEvent::down(50, 150), now, &mut view);
    picker.handle_touch(TouchEvent::up(50, 150), now, &mut view);
    assert_eq!(picker.selected_index(), 1);
}
