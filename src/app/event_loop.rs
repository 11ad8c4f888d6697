use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::model::Focus;
use crate::app::{App, Message, Model, ToastLevel, update};

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - discolor requires an interactive terminal")?;
        execute!(stdout(), EnableBracketedPaste)?;

        let mut model = self.initial_model();
        tracing::info!(
            len = model.session.buffer().len(),
            history = model.session.history_len(),
            "editor started"
        );

        let result = Self::event_loop(&mut terminal, &mut model);

        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();

        result
    }

    pub(super) fn initial_model(&self) -> Model {
        let mut model = Model::new(&self.initial_text);
        if let Some(session) = &self.session {
            model.session = session.clone();
        }
        model.focus = if self.focus_preview {
            Focus::Preview
        } else {
            Focus::Input
        };
        model.markdown_visible = self.markdown_visible;
        model.palette_mode = self.palette_mode;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        if let Some(notice) = &self.startup_notice {
            model.show_toast(ToastLevel::Warning, notice.clone());
        }
        model
    }

    fn dispatch(model: &mut Model, msg: Message) {
        tracing::trace!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg);
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let poll_ms = if needs_render { 0 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    Self::dispatch(model, msg);
                    needs_render = true;
                }

                // Coalesce key repeat and paste bursts into a single render.
                let mut drained = 0_u32;
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        drained += 1;
                        Self::dispatch(model, msg);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    tracing::trace!(drained, "event burst drained");
                }
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
