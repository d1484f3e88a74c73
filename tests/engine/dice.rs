use backgammon_engine::dice::Dice;
use backgammon_engine::util::consistent_rng;

#[test]
fn pair_has_two_slots() {
    let dice = Dice::from_pair(6, 2);
    assert_eq!(&[6, 2], dice.rolled());
    assert!(!dice.is_double());
    assert_eq!(0, dice.used_count());
    assert_eq!(vec![6, 2], dice.available().collect::<Vec<_>>());
    assert_eq!(vec![6, 2], dice.distinct_available().collect::<Vec<_>>());
}

#[test]
fn double_has_four_slots() {
    let dice = Dice::from_pair(4, 4);
    assert_eq!(&[4, 4, 4, 4], dice.rolled());
    assert!(dice.is_double());
    assert_eq!(4, dice.available().count());
    // but only one distinct value
    assert_eq!(vec![4], dice.distinct_available().collect::<Vec<_>>());
}

#[test]
fn consume_marks_one_slot_at_a_time() {
    let mut dice = Dice::from_pair(6, 2);
    assert!(dice.consume(6));
    assert!(!dice.consume(6));
    assert!(!dice.consume(5));
    assert_eq!(vec![2], dice.available().collect::<Vec<_>>());
    assert!(!dice.all_used());
    assert!(dice.consume(2));
    assert!(dice.all_used());
}

#[test]
fn double_slots_are_independent() {
    let mut dice = Dice::from_pair(3, 3);
    for used in 1..=4 {
        assert!(dice.consume(3));
        assert_eq!(used, dice.used_count());
    }
    assert!(!dice.consume(3));
    assert!(dice.all_used());
}

#[test]
fn display_marks_used_slots() {
    let mut dice = Dice::from_pair(6, 2);
    assert_eq!("[6 2]", format!("{}", dice));
    dice.consume(6);
    assert_eq!("[(6) 2]", format!("{}", dice));
}

#[test]
fn rolls_stay_in_range() {
    let mut rng = consistent_rng();
    for _ in 0..100 {
        let dice = Dice::roll(&mut rng);
        assert!(dice.rolled().iter().all(|&v| (1..=6).contains(&v)));
        assert_eq!(dice.rolled().len() == 4, dice.is_double());
        assert_eq!(dice.rolled().len() == 2, !dice.is_double());
    }
}

#[test]
#[should_panic]
fn rejects_out_of_range_values() {
    let _ = Dice::from_pair(0, 3);
}
