use crate::form::{
    ChoiceError, CommandOutcome, CommittedField, DefinitionError, EditorSession, MemorySink,
    NullSink, OrderPolicy, ScalarEdit, SessionCommand, VisibleChoices,
};

fn complete_session() -> EditorSession {
    let mut session = EditorSession::default();
    session.edit(ScalarEdit::Label("Region".into())).expect("label");
    session
        .edit(ScalarEdit::DefaultValue("Europe".into()))
        .expect("default");
    session
        .edit(ScalarEdit::Order(Some(OrderPolicy::Manual)))
        .expect("order");
    session
}

#[test]
fn walkthrough_from_seed_to_rejected_save() {
    let mut session = EditorSession::default();

    assert_eq!(
        session.add_choice("Asia"),
        Err(ChoiceError::DuplicateChoice("Asia".into()))
    );
    assert_eq!(session.definition().choices.len(), 5);
    assert!(session.pending_error().is_some());

    session.add_choice("Oceania").expect("new choice");
    assert_eq!(session.definition().choices.iter().last(), Some("Oceania"));
    assert_eq!(session.pending_choice(), "");
    assert!(session.pending_error().is_none());

    session
        .edit(ScalarEdit::DefaultValue("Asia".into()))
        .expect("default");
    session.remove_choices(&["Asia"]);
    assert_eq!(session.definition().default_value, "");

    session
        .edit(ScalarEdit::MultiValueRequired(true))
        .expect("required");
    let errors = session.save(&mut NullSink).expect_err("save must fail");
    assert!(errors.contains(DefinitionError::MissingChoiceSelection));
    assert!(errors.contains(DefinitionError::MissingDefaultValue));
    assert!(!session.is_saved());
    assert_eq!(session.errors(), &errors);
}

#[test]
fn successful_save_commits_once_and_clears_flags() {
    let mut session = complete_session();
    let mut sink = MemorySink::new();
    let committed = session.save(&mut sink).expect("valid definition");
    assert!(session.is_saved());
    assert!(!session.is_dirty());
    assert!(session.errors().is_empty());
    assert_eq!(sink.commits(), [committed.clone()]);

    let again = session.save(&mut sink).expect("still valid");
    assert_eq!(again, committed);
    assert_eq!(sink.commits().len(), 2);
    assert_eq!(sink.commits()[0], sink.commits()[1]);
}

#[test]
fn failed_save_commits_nothing() {
    let mut session = EditorSession::default();
    let mut sink = MemorySink::new();
    assert!(session.save(&mut sink).is_err());
    assert!(sink.commits().is_empty());
}

#[test]
fn closures_act_as_sinks() {
    let mut session = complete_session();
    let mut seen: Vec<CommittedField> = Vec::new();
    let mut sink = |field: &CommittedField| seen.push(field.clone());
    session.save(&mut sink).expect("valid definition");
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].definition.label, "Region");
}

#[test]
fn edits_unsave_but_keep_errors_until_next_save() {
    let mut session = EditorSession::default();
    assert!(session.save(&mut NullSink).is_err());
    session.edit(ScalarEdit::Label("Region".into())).expect("label");
    assert!(session.errors().contains(DefinitionError::MissingLabel));
    assert!(session.is_dirty());

    let mut session = complete_session();
    session.save(&mut NullSink).expect("valid definition");
    session.edit(ScalarEdit::Label("Zone".into())).expect("label");
    assert!(!session.is_saved());
    assert!(session.is_dirty());
}

#[test]
fn default_must_name_a_current_choice() {
    let mut session = EditorSession::default();
    assert_eq!(
        session.edit(ScalarEdit::DefaultValue("Mars".into())),
        Err(ChoiceError::UnknownDefault("Mars".into()))
    );
    assert_eq!(session.definition().default_value, "");
    assert!(!session.is_dirty());
    session
        .edit(ScalarEdit::DefaultValue(String::new()))
        .expect("clearing is allowed");
}

#[test]
fn toggling_unknown_values_is_ignored() {
    let mut session = EditorSession::default();
    assert!(!session.toggle_choice_selection("Mars"));
    assert!(session.selection().is_empty());
    assert!(!session.is_dirty());
}

#[test]
fn removing_selected_choices_keeps_selection_a_subset() {
    let mut session = EditorSession::default();
    session.toggle_choice_selection("Asia");
    session.toggle_choice_selection("Africa");
    session
        .edit(ScalarEdit::DefaultValue("Africa".into()))
        .expect("default");

    let removed = session.remove_selected_choices();
    assert_eq!(removed, ["Asia", "Africa"]);
    assert!(session.selection().is_empty());
    assert_eq!(session.definition().default_value, "");
    assert!(
        session
            .selection()
            .is_subset_of(&session.definition().choices)
    );
}

#[test]
fn removing_other_choices_keeps_default_and_prunes_selection() {
    let mut session = complete_session();
    session.toggle_choice_selection("Asia");
    session.toggle_choice_selection("Europe");

    assert_eq!(session.remove_choices(&["Asia"]), ["Asia"]);
    assert_eq!(session.definition().default_value, "Europe");
    assert_eq!(session.selection().as_slice(), ["Europe"]);
    assert!(!session.definition().choices.contains("Asia"));
}

#[test]
fn cancelling_pending_choice_leaves_definition_alone() {
    let mut session = EditorSession::default();
    assert!(session.save(&mut NullSink).is_err());
    session.toggle_choice_selection("Europe");
    assert!(session.add_choice("Asia").is_err());

    let choices = session.definition().choices.clone();
    let selection = session.selection().clone();
    let errors = session.errors().clone();

    session.cancel_pending_choice();
    assert_eq!(session.pending_choice(), "");
    assert!(session.pending_error().is_none());
    assert_eq!(session.definition().choices, choices);
    assert_eq!(session.selection(), &selection);
    assert_eq!(session.errors(), &errors);
    assert_eq!(errors.len(), 3);

    session.set_pending_choice("Oceania");
    let outcome = session.apply(SessionCommand::CancelPendingChoice, &mut NullSink);
    assert_eq!(outcome, CommandOutcome::Changed);
    assert_eq!(session.pending_choice(), "");
    assert_eq!(session.definition().choices, choices);
    assert_eq!(session.selection(), &selection);
}

#[test]
fn removing_with_empty_selection_is_a_noop() {
    let mut session = EditorSession::default();
    assert!(session.remove_selected_choices().is_empty());
    assert_eq!(session.definition().choices.len(), 5);
    assert!(!session.is_dirty());
}

#[test]
fn reorder_rejects_foreign_sequences() {
    let mut session = EditorSession::default();
    let result = session.reorder_choices(vec!["Asia".into()]);
    assert_eq!(result, Err(ChoiceError::NotAPermutation));
    assert_eq!(session.definition().choices.len(), 5);

    let mut reversed: Vec<String> = session.definition().choices.iter().map(String::from).collect();
    reversed.reverse();
    session.reorder_choices(reversed.clone()).expect("permutation");
    assert_eq!(session.definition().choices.as_slice(), reversed.as_slice());
}

#[test]
fn search_filters_view_and_reports_no_results() {
    let mut session = EditorSession::default();
    session.set_search_query("AU");
    assert_eq!(session.visible_choices(), ["Australia"]);
    session.set_search_query("zz");
    assert_eq!(session.view().visible_choices, VisibleChoices::NoResults);
    assert_eq!(session.definition().choices.len(), 5);
}

#[test]
fn search_change_and_pointer_outside_cancel_drag() {
    let mut session = EditorSession::default();
    session
        .edit(ScalarEdit::Order(Some(OrderPolicy::Manual)))
        .expect("order");
    session.toggle_picker(None);
    assert!(session.begin_drag(1));
    session.set_search_query("a");
    assert_eq!(session.drag_source(), None);

    assert!(session.begin_drag(0));
    session.pointer_outside_picker();
    assert!(!session.is_picker_open());
    assert_eq!(session.drag_source(), None);
}

#[test]
fn dropping_reorders_and_unsaves() {
    let mut session = complete_session();
    session.save(&mut NullSink).expect("valid definition");
    assert!(session.begin_drag(4));
    assert!(session.drop_at(0));
    assert_eq!(
        session.definition().choices.as_slice(),
        ["Africa", "Asia", "Australia", "Europe", "Americas"]
    );
    assert!(!session.is_saved());
    assert!(session.is_dirty());
}

#[test]
fn alphabetical_order_blocks_drag() {
    let mut session = EditorSession::default();
    session
        .edit(ScalarEdit::Order(Some(OrderPolicy::Alphabetical)))
        .expect("order");
    assert!(!session.can_reorder());
    assert!(!session.begin_drag(0));
    assert!(!session.drop_at(2));
}

#[test]
fn discard_returns_to_seed() {
    let mut session = EditorSession::with_choices(["x", "y"]);
    session.edit(ScalarEdit::Label("Letters".into())).expect("label");
    session.add_choice("z").expect("new choice");
    session.toggle_choice_selection("x");
    session.toggle_picker(Some(true));
    session.discard();

    assert_eq!(session.definition().label, "");
    assert_eq!(session.definition().choices.as_slice(), ["x", "y"]);
    assert!(session.selection().is_empty());
    assert!(!session.is_picker_open());
    assert!(!session.is_dirty());
    assert!(!session.is_saved());
}

#[test]
fn apply_routes_commands_through_the_engine() {
    let mut session = complete_session();
    let mut sink = MemorySink::new();

    let outcome = session.apply(SessionCommand::AddChoice("Asia".into()), &mut sink);
    assert_eq!(
        outcome,
        CommandOutcome::Rejected(ChoiceError::DuplicateChoice("Asia".into()))
    );
    let outcome = session.apply(SessionCommand::ToggleChoiceSelection("Mars".into()), &mut sink);
    assert_eq!(outcome, CommandOutcome::Unchanged);

    match session.apply(SessionCommand::Save, &mut sink) {
        CommandOutcome::Saved(committed) => assert_eq!(sink.last(), Some(&committed)),
        other => panic!("unexpected outcome {other:?}"),
    }
}
