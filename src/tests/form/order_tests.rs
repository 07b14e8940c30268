use crate::form::{ChoiceSet, OrderPolicy, ordered_view, visible};

fn mixed() -> ChoiceSet {
    ChoiceSet::from_seed(["beta", "Alpha", "alpha", "Gamma"])
}

#[test]
fn alphabetical_ignores_case_and_keeps_set_untouched() {
    let choices = mixed();
    let ordered = OrderPolicy::Alphabetical.apply(&choices);
    assert_eq!(ordered, ["alpha", "Alpha", "beta", "Gamma"]);
    assert_eq!(choices.as_slice(), ["beta", "Alpha", "alpha", "Gamma"]);
}

#[test]
fn alphabetical_sorts_accented_letters_with_their_base_letter() {
    let choices = ChoiceSet::from_seed(["Europe", "Éire", "Asia", "Zambia", "Ärzte", "Oslo", "Ödland"]);
    assert_eq!(
        OrderPolicy::Alphabetical.apply(&choices),
        ["Ärzte", "Asia", "Éire", "Europe", "Ödland", "Oslo", "Zambia"]
    );

    let ties = ChoiceSet::from_seed(["Éire", "eire", "Eire"]);
    assert_eq!(OrderPolicy::Alphabetical.apply(&ties), ["eire", "Eire", "Éire"]);
}

#[test]
fn manual_and_unset_keep_stored_sequence() {
    let choices = mixed();
    assert_eq!(OrderPolicy::Manual.apply(&choices), choices.as_slice());
    assert_eq!(ordered_view(&choices, None), choices.as_slice());
}

#[test]
fn filter_applies_after_ordering() {
    let choices = ChoiceSet::from_seed(["Asia", "Australia", "Europe", "Americas", "Africa"]);
    let ordered = ordered_view(&choices, Some(OrderPolicy::Alphabetical));
    assert_eq!(visible(&ordered, "A"), ["Africa", "Americas", "Asia", "Australia"]);
}

#[test]
fn parses_policy_names() {
    assert_eq!("manual".parse::<OrderPolicy>(), Ok(OrderPolicy::Manual));
    assert_eq!(" Alphabetical ".parse::<OrderPolicy>(), Ok(OrderPolicy::Alphabetical));
    assert!("random".parse::<OrderPolicy>().is_err());
    assert_eq!(OrderPolicy::Alphabetical.to_string(), "Alphabetical");
}
