use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use tracing::debug;

use crate::{
    form::{CommandOutcome, CommitSink, CommittedField, EditorSession, ScalarEdit, SessionCommand, SessionEngine},
    presentation::{self, HitMap, UiContext},
};

use super::{
    input::{FocusTarget, KeyAction},
    keymap::{self, KeymapContext},
    options::UiOptions,
    popup::PopupState,
    status::StatusLine,
    terminal::{EditorScreen, ScreenModes},
};

mod mouse;
mod picker_ops;

pub(crate) struct App {
    session: EditorSession,
    sink: Box<dyn CommitSink>,
    options: UiOptions,
    title: Option<String>,
    status: StatusLine,
    focus: FocusTarget,
    picker_cursor: usize,
    popup: Option<PopupState>,
    hits: HitMap,
    press_index: Option<usize>,
    exit_armed: bool,
    should_quit: bool,
    result: Option<CommittedField>,
}

impl App {
    pub fn new(
        session: EditorSession,
        sink: Box<dyn CommitSink>,
        options: UiOptions,
        title: Option<String>,
    ) -> Self {
        Self {
            session,
            sink,
            options,
            title,
            status: StatusLine::new(),
            focus: FocusTarget::Label,
            picker_cursor: 0,
            popup: None,
            hits: HitMap::default(),
            press_index: None,
            exit_armed: false,
            should_quit: false,
            result: None,
        }
    }

    pub fn run(&mut self) -> Result<CommittedField> {
        let mut terminal = EditorScreen::enter(ScreenModes::for_options(&self.options))?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                Event::FocusLost => {
                    self.dispatch(SessionCommand::PointerOutsidePicker);
                }
                Event::FocusGained | Event::Paste(_) => {}
            }
        }

        self.result
            .take()
            .ok_or_else(|| anyhow!("user exited without saving"))
    }

    fn current_help_text(&self) -> Option<String> {
        if !self.options.show_help {
            return None;
        }
        keymap::help_text(self.keymap_context())
    }

    fn keymap_context(&self) -> KeymapContext {
        if self.session.is_picker_open() {
            KeymapContext::Picker
        } else if self.focus.is_text_entry() {
            KeymapContext::Text
        } else {
            KeymapContext::Form
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let help = self.current_help_text();
        let ctx = UiContext {
            title: self.title.as_deref(),
            session: self.session.view(),
            focus: self.focus,
            picker_cursor: self.picker_cursor,
            picker_height: self.options.picker_height,
            status_message: self.status.message(),
            help: help.as_deref(),
            popup: self.popup.as_ref().map(PopupState::as_render),
        };
        self.hits = presentation::draw(frame, ctx);
    }

    fn dispatch(&mut self, command: SessionCommand) -> CommandOutcome {
        debug!(?command, "dispatching session command");
        let mut engine = SessionEngine::new(&mut self.session, self.sink.as_mut());
        engine.dispatch(command)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.handle_popup_key(key) {
            return;
        }
        if self.session.is_picker_open() {
            self.handle_picker_key(key);
            return;
        }

        let context = self.keymap_context();
        match keymap::classify_key(context, &key) {
            Some(action) => self.handle_action(action),
            None if context == KeymapContext::Text => self.handle_text_input(key),
            None => {}
        }
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Save => self.on_save(),
            KeyAction::Discard => self.on_discard(),
            KeyAction::Quit => self.on_exit(),
            KeyAction::ResetStatus => {
                self.exit_armed = false;
                self.status.ready();
            }
            KeyAction::FocusStep(delta) => {
                self.focus = self.focus.step(delta);
                self.exit_armed = false;
            }
            KeyAction::Activate => self.activate(self.focus),
            KeyAction::TogglePicker => self.open_picker(),
            KeyAction::CancelPending => {
                if self.focus == FocusTarget::NewChoice {
                    self.dispatch(SessionCommand::CancelPendingChoice);
                    self.status.ready();
                }
            }
            KeyAction::ClosePicker
            | KeyAction::CursorStep(_)
            | KeyAction::ToggleSelection
            | KeyAction::RemoveSelected
            | KeyAction::GrabOrDrop => {}
        }
    }

    fn activate(&mut self, target: FocusTarget) {
        self.exit_armed = false;
        match target {
            FocusTarget::Label => self.focus = self.focus.step(1),
            FocusTarget::Required => {
                let flag = !self.session.definition().is_multi_value_required;
                self.dispatch(SessionCommand::EditScalarField(ScalarEdit::MultiValueRequired(
                    flag,
                )));
                self.status.value_updated();
            }
            FocusTarget::DefaultValue => {
                self.popup = Some(PopupState::for_default_value(&self.session));
                self.status.choosing();
            }
            FocusTarget::Choices => self.open_picker(),
            FocusTarget::NewChoice => self.add_pending_choice(),
            FocusTarget::Order => {
                self.popup = Some(PopupState::for_order(&self.session));
                self.status.choosing();
            }
            FocusTarget::Save => self.on_save(),
            FocusTarget::Cancel => self.on_discard(),
        }
    }

    fn handle_text_input(&mut self, key: KeyEvent) {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }
        let mut text = match self.focus {
            FocusTarget::Label => self.session.definition().label.clone(),
            FocusTarget::NewChoice => self.session.pending_choice().to_string(),
            _ => return,
        };
        match key.code {
            KeyCode::Char(ch) => text.push(ch),
            KeyCode::Backspace => {
                if text.pop().is_none() {
                    return;
                }
            }
            _ => return,
        }
        self.exit_armed = false;
        if self.focus == FocusTarget::Label {
            self.dispatch(SessionCommand::EditScalarField(ScalarEdit::Label(text)));
        } else {
            self.dispatch(SessionCommand::SetPendingChoice(text));
        }
        self.status.editing(self.focus.title());
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> bool {
        let Some(popup) = &mut self.popup else {
            return false;
        };
        match key.code {
            KeyCode::Esc => {
                self.popup = None;
                self.status.ready();
            }
            KeyCode::Up => popup.select_previous(),
            KeyCode::Down => popup.select_next(),
            KeyCode::Enter => {
                let edit = popup.selection_edit();
                self.popup = None;
                match self.dispatch(SessionCommand::EditScalarField(edit)) {
                    CommandOutcome::Rejected(err) => self.status.rejected(&err),
                    _ => self.status.value_updated(),
                }
            }
            _ => {}
        }
        true
    }

    fn add_pending_choice(&mut self) {
        match self.dispatch(SessionCommand::AddPendingChoice) {
            CommandOutcome::Rejected(err) => self.status.rejected(&err),
            _ => {
                let added = self
                    .session
                    .definition()
                    .choices
                    .iter()
                    .last()
                    .unwrap_or_default()
                    .to_string();
                self.status.choice_added(&added);
            }
        }
    }

    fn on_save(&mut self) {
        self.exit_armed = false;
        match self.dispatch(SessionCommand::Save) {
            CommandOutcome::Saved(committed) => {
                self.result = Some(committed);
                self.status.saved();
            }
            CommandOutcome::Invalid(errors) => self.status.issues_remaining(errors.len()),
            _ => {}
        }
    }

    fn on_discard(&mut self) {
        self.dispatch(SessionCommand::Discard);
        self.popup = None;
        self.picker_cursor = 0;
        self.press_index = None;
        self.exit_armed = false;
        self.status.discarded();
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.session.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}
