//! Interactive session loop and terminal view.

use crate::command::{Command, HELP};
use log::debug;
use std::io::{self, BufRead, Write};
use tasklist_core::{render_table, SubmitError, TaskListController, TaskListView, TaskRow};

/// Writes renders and warnings to a terminal stream.
///
/// `TaskListView` cannot fail, so the first write error is kept and
/// reported by the session loop.
struct TerminalView<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TerminalView<W> {
    fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn write_str(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            self.error = Some(err);
        }
    }

    fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<W: Write> TaskListView for TerminalView<W> {
    fn render(&mut self, input: &str, rows: &[TaskRow]) {
        let frame = format!("\ninput: \"{input}\"\n{}", render_table(rows));
        self.write_str(&frame);
    }

    fn warn(&mut self, message: &str) {
        self.write_str(&format!("! {message}\n"));
    }
}

/// Runs commands from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> io::Result<()> {
    let mut controller = TaskListController::new(TerminalView::new(output));
    controller.view_mut().take_error()?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                controller.view_mut().write_str(&format!("error: {err}\n"));
                controller.view_mut().take_error()?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Empty => {}
            Command::Help => controller.view_mut().write_str(&format!("{HELP}\n")),
            Command::Type(text) => controller.set_input(text.unwrap_or_default()),
            Command::Add(text) => {
                if let Some(text) = text {
                    controller.set_input(text);
                }
                if let Err(SubmitError::EmptyInput) = controller.submit() {
                    debug!("event=cli_add module=cli status=skipped reason=empty");
                }
            }
            Command::Done(id) => controller.mark_complete(id),
            Command::Delete(id) => controller.delete(id),
        }
        controller.view_mut().take_error()?;
    }

    Ok(())
}
