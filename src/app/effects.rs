use std::io::{Write, stdout};

use crate::app::{App, Message, Model, ToastLevel};
use base64::Engine;

impl App {
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::CopyMarkdown => {
                let markdown = model.session.discord_markdown();
                Self::copy_text(model, &markdown, "Discord markdown");
            }
            Message::CopyPlainText => {
                let plain = model.session.plain_text();
                Self::copy_text(model, &plain, "plain text");
            }
            _ => {}
        }
    }

    fn copy_text(model: &mut Model, text: &str, what: &str) {
        match copy_to_clipboard(text) {
            Ok(()) => {
                tracing::debug!(bytes = text.len(), what, "copied to clipboard");
                model.show_toast(ToastLevel::Info, "Copied to clipboard!");
            }
            Err(err) => {
                tracing::debug!(%err, what, "clipboard write failed");
                model.show_toast(ToastLevel::Error, format!("Copy failed: {err}"));
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        if copy_to_pbcopy(text).is_ok() {
            return Ok(());
        }
    }
    copy_to_clipboard_osc52(text)
}

#[cfg(target_os = "macos")]
fn copy_to_pbcopy(text: &str) -> std::io::Result<()> {
    use std::process::{Command, Stdio};

    let mut child = Command::new("pbcopy").stdin(Stdio::piped()).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other("pbcopy failed"))
    }
}

fn copy_to_clipboard_osc52(text: &str) -> std::io::Result<()> {
    let osc = osc52_sequence(text);
    let mut out = stdout();
    out.write_all(osc.as_bytes())?;
    out.flush()
}

fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

#[cfg(test)]
mod tests {
    use super::osc52_sequence;

    #[test]
    fn test_osc52_sequence_encodes_text() {
        let seq = osc52_sequence("hi");
        assert_eq!(seq, "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_osc52_sequence_carries_escape_bytes_encoded() {
        let seq = osc52_sequence("\u{1b}[31m");
        assert!(!seq[1..].contains('\u{1b}'), "payload must be base64 only");
        assert!(seq.starts_with("\x1b]52;c;"));
    }
}
