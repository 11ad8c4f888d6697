use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::model::Focus;
use crate::app::{App, Message, Model};
use crate::editor::Direction;
use crate::markup::StyleCode;

/// Lines moved by PageUp/PageDown in the markdown pane.
const MARKDOWN_PAGE: usize = 5;

/// Preview-focus key for each palette code.
const PALETTE_KEYS: [(char, u32); 17] = [
    ('1', 30),
    ('2', 31),
    ('3', 32),
    ('4', 33),
    ('5', 34),
    ('6', 35),
    ('7', 36),
    ('8', 37),
    ('a', 40),
    ('s', 41),
    ('d', 42),
    ('f', 43),
    ('g', 44),
    ('h', 47),
    ('b', 1),
    ('u', 4),
    ('x', 0),
];

/// The key that applies `code` from the preview, if it has one.
pub fn palette_key(code: StyleCode) -> Option<char> {
    PALETTE_KEYS
        .iter()
        .find(|&&(_, value)| value == code.value())
        .map(|&(key, _)| key)
}

fn palette_code(key: char) -> Option<StyleCode> {
    PALETTE_KEYS
        .iter()
        .find(|&&(k, _)| k == key)
        .map(|&(_, value)| StyleCode::new(value))
}

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Paste(text) if model.focus == Focus::Input && !model.help_visible => {
                Some(Message::InputPaste(text.clone()))
            }
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global bindings
        match key.code {
            KeyCode::Char('q' | 'c') if ctrl => return Some(Message::Quit),
            KeyCode::Char('z') if ctrl => return Some(Message::Undo),
            KeyCode::Char('r') if ctrl => return Some(Message::ResetAll),
            KeyCode::Char('y') if ctrl => return Some(Message::CopyMarkdown),
            KeyCode::F(1) => return Some(Message::ToggleHelp),
            _ => {}
        }

        if model.help_visible {
            return Some(Message::HideHelp);
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => return Some(Message::SwitchFocus),
            KeyCode::PageUp => return Some(Message::MarkdownScrollUp(MARKDOWN_PAGE)),
            KeyCode::PageDown => return Some(Message::MarkdownScrollDown(MARKDOWN_PAGE)),
            _ => {}
        }

        match model.focus {
            Focus::Input => Self::handle_input_key(key),
            Focus::Preview => Self::handle_preview_key(key, model),
        }
    }

    fn handle_input_key(key: KeyEvent) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Char(ch) if !ctrl && !alt => Some(Message::InputInsertChar(ch)),
            KeyCode::Enter => Some(Message::InputNewline),
            KeyCode::Backspace => Some(Message::InputDeleteBack),
            KeyCode::Delete => Some(Message::InputDeleteForward),
            KeyCode::Left => Some(Message::InputMoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::InputMoveCursor(Direction::Right)),
            KeyCode::Up => Some(Message::InputMoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::InputMoveCursor(Direction::Down)),
            KeyCode::Home if ctrl => Some(Message::InputMoveToStart),
            KeyCode::End if ctrl => Some(Message::InputMoveToEnd),
            KeyCode::Home => Some(Message::InputMoveHome),
            KeyCode::End => Some(Message::InputMoveEnd),
            KeyCode::Esc => Some(Message::SwitchFocus),
            _ => None,
        }
    }

    fn handle_preview_key(key: KeyEvent, model: &Model) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let extend = key.modifiers.contains(KeyModifiers::SHIFT);
        let move_to = |direction| Some(Message::PreviewMoveCursor { direction, extend });

        match key.code {
            KeyCode::Left => move_to(Direction::Left),
            KeyCode::Right => move_to(Direction::Right),
            KeyCode::Up => move_to(Direction::Up),
            KeyCode::Down => move_to(Direction::Down),
            KeyCode::Home => Some(Message::PreviewMoveHome { extend }),
            KeyCode::End => Some(Message::PreviewMoveEnd { extend }),
            KeyCode::Char('a') if ctrl => Some(Message::SelectAll),
            KeyCode::Esc if model.selection_anchor.is_some() => Some(Message::ClearSelection),
            KeyCode::Esc | KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Enter | KeyCode::Char('i') => Some(Message::SwitchFocus),
            KeyCode::Char('z') => Some(Message::Undo),
            KeyCode::Char('R') => Some(Message::ResetAll),
            KeyCode::Char('c') => Some(Message::CopyMarkdown),
            KeyCode::Char('p') => Some(Message::CopyPlainText),
            KeyCode::Char('m') => Some(Message::ToggleMarkdown),
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            KeyCode::Char(ch) if !ctrl => palette_code(ch).map(Message::ApplyStyle),
            _ => None,
        }
    }
}
