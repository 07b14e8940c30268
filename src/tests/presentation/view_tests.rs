use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::{
    app::FocusTarget,
    form::{EditorSession, NullSink, OrderPolicy, ScalarEdit},
    presentation::{HitMap, PopupRender, UiContext, draw},
};

fn context<'a>(session: &'a EditorSession, focus: FocusTarget) -> UiContext<'a> {
    UiContext {
        title: Some("Region field"),
        session: session.view(),
        focus,
        picker_cursor: 0,
        picker_height: 8,
        status_message: "Ready",
        help: Some("Ctrl+S save"),
        popup: None,
    }
}

fn render(session: &EditorSession, focus: FocusTarget) -> (String, HitMap) {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
    let mut hits = HitMap::default();
    terminal
        .draw(|frame| hits = draw(frame, context(session, focus)))
        .expect("draw");
    (screen(terminal.backend().buffer()), hits)
}

fn screen(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn renders_every_row_and_records_hits() {
    let session = EditorSession::default();
    let (text, hits) = render(&session, FocusTarget::Label);
    assert!(text.contains("Region field"));
    for target in FocusTarget::ALL {
        assert!(
            hits.rows.iter().any(|(row, _)| *row == target),
            "missing row {target:?}"
        );
    }
    assert!(hits.picker.is_none());
}

#[test]
fn failed_save_shows_messages_under_rows() {
    let mut session = EditorSession::default();
    assert!(session.save(&mut NullSink).is_err());
    let (text, _) = render(&session, FocusTarget::Save);
    assert!(text.contains("Label is required."));
    assert!(text.contains("errors: 3"));
}

#[test]
fn open_picker_lists_filtered_choices() {
    let mut session = EditorSession::default();
    session
        .edit(ScalarEdit::Order(Some(OrderPolicy::Alphabetical)))
        .expect("order");
    session.toggle_picker(Some(true));
    session.toggle_choice_selection("Asia");
    session.set_search_query("as");
    let (text, hits) = render(&session, FocusTarget::Choices);
    assert!(text.contains("[x] Asia"));
    assert!(!text.contains("Europe"));
    assert!(hits.list.is_some());
}

#[test]
fn empty_search_result_shows_placeholder() {
    let mut session = EditorSession::default();
    session.toggle_picker(Some(true));
    session.set_search_query("zz");
    let (text, hits) = render(&session, FocusTarget::Choices);
    assert!(text.contains("No choices found."));
    assert!(hits.list.is_none());
}

#[test]
fn selected_choices_render_as_chips() {
    let mut session = EditorSession::default();
    session.toggle_choice_selection("Europe");
    let (text, hits) = render(&session, FocusTarget::Label);
    assert!(text.contains("Europe ×"));
    assert_eq!(hits.chips.len(), 1);
    assert_eq!(hits.chips[0].0, "Europe");
}

#[test]
fn popup_marks_the_stored_value() {
    let session = EditorSession::default();
    let options: Vec<String> = ["Select a default value", "Asia", "Europe"]
        .into_iter()
        .map(String::from)
        .collect();
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
    terminal
        .draw(|frame| {
            let mut ctx = context(&session, FocusTarget::DefaultValue);
            ctx.popup = Some(PopupRender {
                title: "Default Value",
                options: &options,
                selected: 1,
                current: Some(2),
                placeholder: Some(0),
            });
            draw(frame, ctx);
        })
        .expect("draw");
    let text = screen(terminal.backend().buffer());
    assert!(text.contains("» ○ Asia"));
    assert!(text.contains("● Europe"));
    assert!(text.contains("Esc cancel"));
}
