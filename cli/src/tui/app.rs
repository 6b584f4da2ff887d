use lyra_core::service::messages;
use lyra_core::{Session, TaskRepository};
use tracing::debug;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Lyra,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogEntry {
    pub speaker: Speaker,
    pub text: String,
}

/// Chat-style shell. It only keeps the dialog and the input line; all task
/// changes go through the session.
pub struct App<R: TaskRepository> {
    pub session: Session<R>,
    pub dialog: Vec<DialogEntry>,
    pub input: String,
    pub cursor_position: usize,
}

impl<R: TaskRepository> App<R> {
    pub fn new(session: Session<R>) -> Self {
        let mut dialog = vec![DialogEntry {
            speaker: Speaker::Lyra,
            text: messages::welcome(),
        }];
        if let Some(notice) = session.startup_notice() {
            dialog.push(DialogEntry {
                speaker: Speaker::Lyra,
                text: notice.to_string(),
            });
        }
        App {
            session,
            dialog,
            input: String::new(),
            cursor_position: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.session.is_finished()
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.byte_index(self.cursor_position);
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index = self.byte_index(self.cursor_position - 1);
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Terminal columns between the start of the input and the cursor.
    pub fn cursor_column(&self) -> u16 {
        self.input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.width().unwrap_or(0) as u16)
            .sum()
    }

    pub fn submit_command(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.cursor_position = 0;
        if line.trim().is_empty() {
            return;
        }

        debug!(input = %line, "submitted");
        let response = self.session.handle(&line);
        self.dialog.push(DialogEntry {
            speaker: Speaker::User,
            text: line,
        });
        self.dialog.push(DialogEntry {
            speaker: Speaker::Lyra,
            text: response.message,
        });
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .chars()
            .take(char_index)
            .map(|c| c.len_utf8())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyra_core::MemoryTaskRepository;

    fn app() -> App<MemoryTaskRepository> {
        App::new(Session::open(MemoryTaskRepository::new()))
    }

    fn type_str(app: &mut App<MemoryTaskRepository>, s: &str) {
        for c in s.chars() {
            app.input_char(c);
        }
    }

    #[test]
    fn test_submit_goes_through_session() {
        let mut app = app();
        type_str(&mut app, "todo Buy milk");
        app.submit_command();

        assert!(app.input.is_empty());
        assert_eq!(app.session.tasks().len(), 1);
        assert_eq!(app.dialog.len(), 3);
        assert_eq!(app.dialog[1].speaker, Speaker::User);
        assert!(app.dialog[2].text.contains("[T][ ] Buy milk"));
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut app = app();
        type_str(&mut app, "   ");
        app.submit_command();
        assert_eq!(app.dialog.len(), 1);
    }

    #[test]
    fn test_bye_quits() {
        let mut app = app();
        type_str(&mut app, "bye");
        app.submit_command();
        assert!(app.should_quit());
    }

    #[test]
    fn test_editing_multibyte_input() {
        let mut app = app();
        type_str(&mut app, "todo 牛乳");
        assert_eq!(app.cursor_column(), 9);

        app.move_cursor_left();
        app.delete_char();
        assert_eq!(app.input, "todo 乳");
        app.move_cursor_right();
        app.move_cursor_right();
        assert_eq!(app.cursor_position, 6);
    }
}
