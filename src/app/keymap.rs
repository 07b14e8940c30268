use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;
use std::sync::LazyLock;

use super::input::KeyAction;

macro_rules! keymap_source {
    () => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/keymap/default.keymap.json"
        ))
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum KeymapContext {
    Form,
    Text,
    Picker,
}

impl KeymapContext {
    fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "form" => Some(KeymapContext::Form),
            "text" => Some(KeymapContext::Text),
            "picker" => Some(KeymapContext::Picker),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    description: String,
    contexts: Vec<String>,
    action: RawAction,
    combos: Vec<String>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RawAction {
    Save,
    Discard,
    Quit,
    ResetStatus,
    FocusStep { delta: i32 },
    Activate,
    TogglePicker,
    ClosePicker,
    CursorStep { delta: i32 },
    ToggleSelection,
    RemoveSelected,
    GrabOrDrop,
    CancelPending,
}

impl RawAction {
    fn into_action(self) -> KeyAction {
        match self {
            RawAction::Save => KeyAction::Save,
            RawAction::Discard => KeyAction::Discard,
            RawAction::Quit => KeyAction::Quit,
            RawAction::ResetStatus => KeyAction::ResetStatus,
            RawAction::FocusStep { delta } => KeyAction::FocusStep(delta),
            RawAction::Activate => KeyAction::Activate,
            RawAction::TogglePicker => KeyAction::TogglePicker,
            RawAction::ClosePicker => KeyAction::ClosePicker,
            RawAction::CursorStep { delta } => KeyAction::CursorStep(delta),
            RawAction::ToggleSelection => KeyAction::ToggleSelection,
            RawAction::RemoveSelected => KeyAction::RemoveSelected,
            RawAction::GrabOrDrop => KeyAction::GrabOrDrop,
            RawAction::CancelPending => KeyAction::CancelPending,
        }
    }
}

struct KeyBinding {
    action: KeyAction,
    contexts: Vec<KeymapContext>,
    combos: Vec<KeyPattern>,
    snippet: String,
}

impl KeyBinding {
    fn from_raw(raw: RawEntry) -> Self {
        let contexts = raw
            .contexts
            .iter()
            .filter_map(|ctx| KeymapContext::from_str(ctx))
            .collect::<Vec<_>>();
        assert!(
            !contexts.is_empty(),
            "keymap entry {} must declare at least one context",
            raw.id
        );
        let action = raw.action.into_action();
        let combos = raw
            .combos
            .iter()
            .map(|combo| {
                KeyPattern::parse(combo).unwrap_or_else(|err| {
                    panic!("failed to parse combo '{combo}' for {}: {err}", raw.id)
                })
            })
            .collect::<Vec<_>>();
        assert!(
            !combos.is_empty(),
            "keymap entry {} must declare combos",
            raw.id
        );
        let combos_display = combos
            .iter()
            .map(|pattern| pattern.display.clone())
            .collect::<Vec<_>>()
            .join("/");
        let snippet = format!("{combos_display} {}", raw.description);
        Self {
            action,
            contexts,
            combos,
            snippet,
        }
    }

    fn matches(&self, context: KeymapContext, key: &KeyEvent) -> Option<KeyAction> {
        if !self.contexts.contains(&context) {
            return None;
        }
        self.combos
            .iter()
            .find(|pattern| pattern.matches(key))
            .map(|_| self.action)
    }
}

struct KeyPattern {
    matcher: CodeMatcher,
    required: KeyModifiers,
    allow_shift: bool,
    display: String,
}

impl KeyPattern {
    fn parse(spec: &str) -> Result<Self, String> {
        let display = spec.trim().to_string();
        if display.is_empty() {
            return Err("combo cannot be empty".into());
        }
        let mut tokens = display
            .split('+')
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        let Some(key_token) = tokens.pop() else {
            return Err("combo must contain key".into());
        };
        let matcher = CodeMatcher::from_token(key_token)?;
        let mut required = KeyModifiers::empty();
        for token in tokens {
            match token.to_lowercase().as_str() {
                "ctrl" | "control" => required |= KeyModifiers::CONTROL,
                "shift" => required |= KeyModifiers::SHIFT,
                "alt" => required |= KeyModifiers::ALT,
                other => {
                    return Err(format!("unsupported modifier '{other}'"));
                }
            }
        }
        let allow_shift = matcher.allows_extra_shift() && !required.contains(KeyModifiers::SHIFT);
        Ok(Self {
            matcher,
            required,
            allow_shift,
            display,
        })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        if !self.matcher.matches(&key.code) {
            return false;
        }
        if !key.modifiers.contains(self.required) {
            return false;
        }
        let extra = remove_modifiers(key.modifiers, self.required);
        if self.allow_shift {
            remove_modifiers(extra, KeyModifiers::SHIFT).is_empty()
        } else {
            extra.is_empty()
        }
    }
}

#[derive(Clone)]
enum CodeMatcher {
    Literal(KeyCode),
    Alpha(char),
}

impl CodeMatcher {
    fn from_token(token: &str) -> Result<Self, String> {
        let normalized = token.to_lowercase();
        let matcher = match normalized.as_str() {
            "tab" => CodeMatcher::Literal(KeyCode::Tab),
            "backtab" => CodeMatcher::Literal(KeyCode::BackTab),
            "enter" => CodeMatcher::Literal(KeyCode::Enter),
            "esc" | "escape" => CodeMatcher::Literal(KeyCode::Esc),
            "space" => CodeMatcher::Literal(KeyCode::Char(' ')),
            "left" => CodeMatcher::Literal(KeyCode::Left),
            "right" => CodeMatcher::Literal(KeyCode::Right),
            "up" => CodeMatcher::Literal(KeyCode::Up),
            "down" => CodeMatcher::Literal(KeyCode::Down),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => CodeMatcher::Alpha(ch),
                    _ => return Err(format!("unsupported key '{token}'")),
                }
            }
        };
        Ok(matcher)
    }

    fn matches(&self, code: &KeyCode) -> bool {
        match (self, code) {
            (CodeMatcher::Literal(expected), actual) => actual == expected,
            (CodeMatcher::Alpha(expected), KeyCode::Char(actual)) => {
                actual.to_ascii_lowercase() == *expected
            }
            _ => false,
        }
    }

    fn allows_extra_shift(&self) -> bool {
        matches!(
            self,
            CodeMatcher::Alpha(_) | CodeMatcher::Literal(KeyCode::BackTab)
        )
    }
}

static KEYMAP: LazyLock<Vec<KeyBinding>> = LazyLock::new(|| {
    let raw_entries: Vec<RawEntry> =
        serde_json::from_str(keymap_source!()).expect("invalid keymap/default.keymap.json");
    raw_entries.into_iter().map(KeyBinding::from_raw).collect()
});

pub(crate) fn classify_key(context: KeymapContext, key: &KeyEvent) -> Option<KeyAction> {
    KEYMAP.iter().find_map(|binding| binding.matches(context, key))
}

pub(crate) fn help_text(context: KeymapContext) -> Option<String> {
    let mut snippets = Vec::<String>::new();
    for binding in KEYMAP.iter().filter(|binding| binding.contexts.contains(&context)) {
        if !snippets.contains(&binding.snippet) {
            snippets.push(binding.snippet.clone());
        }
    }
    if snippets.is_empty() {
        None
    } else {
        Some(snippets.join(" • "))
    }
}

fn remove_modifiers(actual: KeyModifiers, required: KeyModifiers) -> KeyModifiers {
    KeyModifiers::from_bits_truncate(actual.bits() & !required.bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn ctrl_s_saves_everywhere() {
        for context in [KeymapContext::Form, KeymapContext::Text, KeymapContext::Picker] {
            assert_eq!(
                classify_key(context, &key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
                Some(KeyAction::Save)
            );
        }
    }

    #[test]
    fn space_depends_on_context() {
        let space = key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(
            classify_key(KeymapContext::Form, &space),
            Some(KeyAction::Activate)
        );
        assert_eq!(classify_key(KeymapContext::Text, &space), None);
        assert_eq!(
            classify_key(KeymapContext::Picker, &space),
            Some(KeyAction::ToggleSelection)
        );
    }

    #[test]
    fn plain_letters_fall_through_to_text_input() {
        let letter = key(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(classify_key(KeymapContext::Picker, &letter), None);
        assert_eq!(
            classify_key(KeymapContext::Picker, &key(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Some(KeyAction::RemoveSelected)
        );
    }

    #[test]
    fn help_lists_picker_bindings() {
        let help = help_text(KeymapContext::Picker).expect("picker help");
        assert!(help.contains("Ctrl+D remove selected"));
        assert!(help.contains("Ctrl+G grab/drop"));
    }
}
