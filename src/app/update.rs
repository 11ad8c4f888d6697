use crate::app::Model;
use crate::app::model::{Focus, ToastLevel};
use crate::editor::Direction;
use crate::markup::StyleCode;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Raw text input
    /// Insert a character at the input cursor
    InputInsertChar(char),
    /// Insert pasted text at the input cursor
    InputPaste(String),
    /// Insert a line break (Enter)
    InputNewline,
    /// Delete character before cursor (Backspace)
    InputDeleteBack,
    /// Delete character at cursor (Delete)
    InputDeleteForward,
    /// Move input cursor in a direction
    InputMoveCursor(Direction),
    /// Move input cursor to beginning of line (Home)
    InputMoveHome,
    /// Move input cursor to end of line (End)
    InputMoveEnd,
    /// Move input cursor to start of text (Ctrl+Home)
    InputMoveToStart,
    /// Move input cursor to end of text (Ctrl+End)
    InputMoveToEnd,

    // Preview caret and selection
    /// Move the preview caret; `extend` grows the selection
    PreviewMoveCursor { direction: Direction, extend: bool },
    /// Move the preview caret to the start of its line
    PreviewMoveHome { extend: bool },
    /// Move the preview caret to the end of its line
    PreviewMoveEnd { extend: bool },
    /// Select all rendered text
    SelectAll,
    /// Clear the preview selection
    ClearSelection,

    // Styling
    /// Wrap the selected text with a style
    ApplyStyle(StyleCode),
    /// Step back one history entry
    Undo,
    /// Drop every style, back to the last typed text
    ResetAll,

    // Clipboard
    /// Copy the Discord markdown
    CopyMarkdown,
    /// Copy the text without markup
    CopyPlainText,

    // View
    /// Switch focus between input and preview
    SwitchFocus,
    /// Show or hide the Discord markdown pane
    ToggleMarkdown,
    /// Scroll the markdown pane up by lines
    MarkdownScrollUp(usize),
    /// Scroll the markdown pane down by lines
    MarkdownScrollDown(usize),
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// Clipboard writes happen afterwards in the side-effect handler.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Raw text input
        Message::InputInsertChar(ch) => {
            model.input.insert_char(ch);
            model.sync_session_from_input();
        }
        Message::InputPaste(text) => {
            model.input.insert_str(&text);
            model.sync_session_from_input();
        }
        Message::InputNewline => {
            model.input.insert_char('\n');
            model.sync_session_from_input();
        }
        Message::InputDeleteBack => {
            if model.input.delete_back() {
                model.sync_session_from_input();
            }
        }
        Message::InputDeleteForward => {
            if model.input.delete_forward() {
                model.sync_session_from_input();
            }
        }
        Message::InputMoveCursor(direction) => model.input.move_cursor(direction),
        Message::InputMoveHome => model.input.move_home(),
        Message::InputMoveEnd => model.input.move_end(),
        Message::InputMoveToStart => model.input.move_to_start(),
        Message::InputMoveToEnd => model.input.move_to_end(),

        // Preview caret and selection
        Message::PreviewMoveCursor { direction, extend } => {
            let target = model.preview_target(direction);
            model.move_preview_cursor(target, extend);
        }
        Message::PreviewMoveHome { extend } => {
            let (start, _) = model.preview_line_bounds();
            model.move_preview_cursor(start, extend);
        }
        Message::PreviewMoveEnd { extend } => {
            let (_, end) = model.preview_line_bounds();
            model.move_preview_cursor(end, extend);
        }
        Message::SelectAll => {
            model.selection_anchor = Some(0);
            model.preview_cursor = model.preview_text().chars().count();
        }
        Message::ClearSelection => model.clear_selection(),

        // Styling
        Message::ApplyStyle(code) => apply_selected_style(&mut model, code),
        Message::Undo => {
            if model.session.undo() {
                model.clamp_preview_cursor();
                model.scroll_markdown(0);
            } else {
                model.show_toast(ToastLevel::Info, "Nothing to undo");
            }
        }
        Message::ResetAll => {
            model.session.reset_all();
            model.clear_selection();
            model.clamp_preview_cursor();
            model.scroll_markdown(0);
            model.show_toast(ToastLevel::Info, "Formatting reset");
        }

        // Clipboard (handled as side effects)
        Message::CopyMarkdown | Message::CopyPlainText => {}

        // View
        Message::SwitchFocus => {
            model.focus = match model.focus {
                Focus::Input => Focus::Preview,
                Focus::Preview => Focus::Input,
            };
            model.clamp_preview_cursor();
        }
        Message::ToggleMarkdown => model.markdown_visible = !model.markdown_visible,
        Message::MarkdownScrollUp(lines) => {
            model.scroll_markdown(-isize::try_from(lines).unwrap_or(isize::MAX));
        }
        Message::MarkdownScrollDown(lines) => {
            model.scroll_markdown(isize::try_from(lines).unwrap_or(isize::MAX));
        }
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,

        // Window
        Message::Resize(_, _) | Message::Redraw => {}

        // Application
        Message::Quit => model.should_quit = true,
    }

    model
}

fn apply_selected_style(model: &mut Model, code: StyleCode) {
    let Some(selection) = model.selected_text() else {
        model.show_toast(ToastLevel::Info, "Select text in the preview first");
        return;
    };
    if model.session.apply_style(&selection, code) {
        let name = code
            .palette_entry()
            .map_or_else(|| format!("style {code}"), |entry| entry.description.to_string());
        model.clear_selection();
        model.clamp_preview_cursor();
        model.show_toast(ToastLevel::Info, format!("Applied {name}"));
    } else {
        model.show_toast(ToastLevel::Warning, "Selection not found in the text");
    }
}
