use crate::form::{ChoiceError, ChoiceSet, SelectionTracker};

fn seed() -> ChoiceSet {
    ChoiceSet::from_seed(["Asia", "Australia", "Europe"])
}

#[test]
fn add_trims_and_appends() {
    let mut choices = seed();
    assert_eq!(choices.add("  Oceania "), Ok("Oceania"));
    assert_eq!(choices.as_slice(), ["Asia", "Australia", "Europe", "Oceania"]);
}

#[test]
fn add_rejects_blank_and_exact_duplicates() {
    let mut choices = seed();
    assert_eq!(choices.add("   "), Err(ChoiceError::EmptyChoice));
    assert_eq!(
        choices.add(" Asia"),
        Err(ChoiceError::DuplicateChoice("Asia".into()))
    );
    assert_eq!(choices.len(), 3);
}

#[test]
fn duplicates_are_case_sensitive() {
    let mut choices = seed();
    assert!(choices.add("asia").is_ok());
    assert!(choices.contains("asia"));
    assert!(choices.contains("Asia"));
}

#[test]
fn seed_drops_blank_and_repeated_entries() {
    let choices = ChoiceSet::from_seed(["a", "", "b", "a", " c "]);
    assert_eq!(choices.as_slice(), ["a", "b", "c"]);
}

#[test]
fn remove_many_reports_only_present_values() {
    let mut choices = seed();
    let removed = choices.remove_many(&["Europe", "Mars", "Asia"]);
    assert_eq!(removed, ["Asia", "Europe"]);
    assert_eq!(choices.as_slice(), ["Australia"]);
}

#[test]
fn permute_requires_the_same_members() {
    let mut choices = seed();
    let shuffled = vec!["Europe".to_string(), "Asia".into(), "Australia".into()];
    assert!(choices.permute(shuffled.clone()).is_ok());
    assert_eq!(choices.as_slice(), shuffled.as_slice());

    let missing = vec!["Europe".to_string(), "Asia".into()];
    assert_eq!(choices.permute(missing), Err(ChoiceError::NotAPermutation));
    let foreign = vec!["Europe".to_string(), "Asia".into(), "Mars".into()];
    assert_eq!(choices.permute(foreign), Err(ChoiceError::NotAPermutation));
    assert_eq!(choices.as_slice(), shuffled.as_slice());
}

#[test]
fn selection_keeps_toggle_order() {
    let mut selection = SelectionTracker::new();
    assert!(selection.toggle("Europe"));
    assert!(selection.toggle("Asia"));
    assert!(!selection.toggle("Europe"));
    assert!(selection.toggle("Europe"));
    assert_eq!(selection.as_slice(), ["Asia", "Europe"]);
}

#[test]
fn selection_retains_only_current_members() {
    let mut choices = seed();
    let mut selection = SelectionTracker::new();
    selection.toggle("Asia");
    selection.toggle("Australia");
    choices.remove_many(&["Asia"]);
    assert!(!selection.is_subset_of(&choices));
    selection.retain_members(&choices);
    assert_eq!(selection.as_slice(), ["Australia"]);
}
