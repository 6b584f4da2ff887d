use std::io::{BufRead, Write};

use anyhow::Result;
use lyra_core::service::messages;
use lyra_core::{Session, TaskRepository};

const LINE: &str = "____________________________________________________________";

/// Line-based front end. End of input counts as `bye`.
pub fn run<R, I, W>(session: &mut Session<R>, input: I, mut out: W) -> Result<()>
where
    R: TaskRepository,
    I: BufRead,
    W: Write,
{
    print_block(&mut out, &messages::welcome())?;
    if let Some(notice) = session.startup_notice() {
        print_block(&mut out, notice)?;
    }

    let mut lines = input.lines();
    while !session.is_finished() {
        let line = match lines.next() {
            Some(line) => line?,
            None => "bye".to_string(),
        };
        let response = session.handle(&line);
        print_block(&mut out, &response.message)?;
    }
    out.flush()?;
    Ok(())
}

fn print_block<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{}", LINE)?;
    for line in message.lines() {
        writeln!(out, " {}", line)?;
    }
    writeln!(out, "{}", LINE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyra_core::MemoryTaskRepository;

    fn transcript(input: &str) -> (String, Session<MemoryTaskRepository>) {
        let mut session = Session::open(MemoryTaskRepository::new());
        let mut out = Vec::new();
        run(&mut session, input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn test_runs_until_bye() {
        let (out, session) = transcript("todo Buy milk\nmark 1\nlist\nbye\ntodo ignored\n");
        assert!(out.contains(" Hello! I'm Lyra"));
        assert!(out.contains(" 1.[T][X] Buy milk"));
        assert!(out.contains(" Bye. Hope to see you again soon!"));
        assert_eq!(session.tasks().len(), 1);
        assert_eq!(session.repository().lines(), vec!["T | 1 | Buy milk"]);
    }

    #[test]
    fn test_end_of_input_exits() {
        let (out, session) = transcript("todo a\n");
        assert!(session.is_finished());
        assert!(out.trim_end().ends_with(LINE));
        assert!(out.contains("Bye."));
    }

    #[test]
    fn test_bad_command_keeps_going() {
        let (out, session) = transcript("fly\ntodo\ntodo real\n");
        assert!(out.contains("couldn't recognize"));
        assert!(out.contains("a todo needs a description"));
        assert_eq!(session.tasks().len(), 1);
    }
}
