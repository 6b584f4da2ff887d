use std::fs;
use std::path::Path;

use lyra_core::{FileTaskRepository, Session, TaskRepository};
use tempfile::TempDir;

fn open(path: &Path) -> Session<FileTaskRepository> {
    Session::open(FileTaskRepository::new(path))
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_todo_mark_list_scenario() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("lyra.txt");
    let mut session = open(&path);
    assert!(path.exists());
    assert!(session.tasks().is_empty());

    session.handle("todo Buy milk");
    assert_eq!(read(&path), "T | 0 | Buy milk\n");

    session.handle("mark 1");
    assert_eq!(read(&path), "T | 1 | Buy milk\n");

    let response = session.handle("list");
    assert!(response.message.contains("1.[T][X] Buy milk"));
}

#[test]
fn test_deadline_scenario() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lyra.txt");
    let mut session = open(&path);

    let response = session.handle("deadline Submit report /by 2024-12-25");
    assert!(response
        .message
        .contains("[D][ ] Submit report (by: Dec 25 2024)"));
    assert_eq!(read(&path), "D | 0 | Submit report | 2024-12-25\n");
}

#[test]
fn test_empty_description_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lyra.txt");
    let mut session = open(&path);

    let response = session.handle("deadline /by 2024-01-01");
    assert!(response.message.contains("needs a description"));
    assert!(session.tasks().is_empty());
    assert_eq!(read(&path), "");
}

#[test]
fn test_sort_event_reorders_by_start() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lyra.txt");
    let mut session = open(&path);

    session.handle("event Trip /from 2024-06-01 /to 2024-06-10");
    session.handle("event Conference /from 2024-05-20 /to 2024-05-22");
    let response = session.handle("sort event");
    assert_eq!(response.message, "Tasks sorted by event start date chronologically.");

    let names: Vec<_> = session
        .tasks()
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(names, vec!["Conference", "Trip"]);
}

#[test]
fn test_reload_reconstructs_every_kind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lyra.txt");
    {
        let mut session = open(&path);
        session.handle("todo Buy milk");
        session.handle("deadline Submit report /by 2024-12-25");
        session.handle("event Trip /from 2024-06-10 /to 2024-06-01");
        session.handle("mark 2");
        session.handle("bye");
    }

    let before = read(&path);
    let session = open(&path);
    let tasks: Vec<String> = session.tasks().iter().map(|t| t.to_string()).collect();
    assert_eq!(
        tasks,
        vec![
            "[T][ ] Buy milk",
            "[D][X] Submit report (by: Dec 25 2024)",
            "[E][ ] Trip (from: Jun 10 2024 to: Jun 1 2024)",
        ]
    );

    session.repository().save(session.tasks().tasks()).unwrap();
    assert_eq!(read(&path), before);
}

#[test]
fn test_out_of_range_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lyra.txt");
    let mut session = open(&path);
    session.handle("todo a");
    session.handle("todo b");
    let before = read(&path);

    for input in ["mark 0", "unmark 3", "delete -4", "delete 100"] {
        let response = session.handle(input);
        assert!(response.message.starts_with("Invalid task number."), "{input}");
    }
    assert_eq!(read(&path), before);
    assert_eq!(session.tasks().len(), 2);
}

#[test]
fn test_delete_keeps_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lyra.txt");
    let mut session = open(&path);
    for name in ["one", "two", "three"] {
        session.handle(&format!("todo {}", name));
    }

    let response = session.handle("delete 2");
    assert!(response.message.contains("Now you have 2 tasks in the list."));
    assert_eq!(read(&path), "T | 0 | one\nT | 0 | three\n");
}

#[test]
fn test_find_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lyra.txt");
    let mut session = open(&path);
    session.handle("todo File report");
    session.handle("todo Buy milk");

    let response = session.handle("find ILE");
    assert_eq!(
        response.message,
        "Here are the matching tasks in your list:\n1.[T][ ] File report"
    );
}

#[test]
fn test_corrupt_lines_are_skipped_with_notice() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lyra.txt");
    fs::write(&path, "T | 0 | kept\nD | 0 | broken | 2024-99-99\n").unwrap();

    let session = open(&path);
    assert_eq!(session.tasks().len(), 1);
    let notice = session.startup_notice().unwrap();
    assert!(notice.contains("Skipped 1 unreadable line(s)"));
    assert!(notice.contains("line 2"));
}

#[test]
fn test_unreadable_path_starts_empty() {
    let dir = TempDir::new().unwrap();
    // a directory where the file should be
    let path = dir.path().join("lyra.txt");
    fs::create_dir(&path).unwrap();

    let session = open(&path);
    assert!(session.tasks().is_empty());
    assert!(session
        .startup_notice()
        .unwrap()
        .starts_with("Error loading tasks from file"));
}

#[test]
fn test_pipes_in_descriptions_survive_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lyra.txt");
    {
        let mut session = open(&path);
        session.handle("todo a | b");
        session.handle("deadline pay | rent /by 2024-01-31");
        session.handle("event x | y /from 2024-01-01 /to 2024-01-02");
    }

    let session = open(&path);
    assert!(session.startup_notice().is_none());
    let tasks: Vec<String> = session.tasks().iter().map(|t| t.to_string()).collect();
    assert_eq!(
        tasks,
        vec![
            "[T][ ] a | b",
            "[D][ ] pay | rent (by: Jan 31 2024)",
            "[E][ ] x | y (from: Jan 1 2024 to: Jan 2 2024)",
        ]
    );
}
