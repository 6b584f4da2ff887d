//! Every piece of text shown to the user after a command.

use crate::model::strategy::SortCriterion;
use crate::model::task::Task;

pub fn welcome() -> String {
    "Hello! I'm Lyra\nWhat can I do for you?".to_string()
}

pub fn goodbye() -> String {
    "Bye. Hope to see you again soon!".to_string()
}

pub fn task_added(task: &Task, total: usize) -> String {
    format!(
        "Got it. I've added this task:\n  {}\nNow you have {} in the list.",
        task,
        count_tasks(total)
    )
}

pub fn task_marked(task: &Task) -> String {
    if task.done {
        format!("Nice! I've marked this task as done:\n  {}", task)
    } else {
        format!("OK, I've marked this task as not done yet:\n  {}", task)
    }
}

pub fn task_deleted(task: &Task, remaining: usize) -> String {
    format!(
        "Noted. I've removed this task:\n  {}\nNow you have {} in the list.",
        task,
        count_tasks(remaining)
    )
}

pub fn task_list<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let lines = numbered(tasks);
    if lines.is_empty() {
        "There are no tasks in your list.".to_string()
    } else {
        format!("Here are the tasks in your list:\n{}", lines)
    }
}

pub fn matching_tasks<'a>(keyword: &str, tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let lines = numbered(tasks);
    if lines.is_empty() {
        format!(
            "No tasks found matching '{}'. Try a different keyword or check your spelling.",
            keyword
        )
    } else {
        format!("Here are the matching tasks in your list:\n{}", lines)
    }
}

pub fn nothing_to_sort() -> String {
    "Your task list is empty. Nothing to sort!".to_string()
}

pub fn sorted(criterion: SortCriterion) -> String {
    let how = match criterion {
        SortCriterion::Description => "by description alphabetically",
        SortCriterion::Deadline => "by deadline chronologically",
        SortCriterion::Event => "by event start date chronologically",
        SortCriterion::Type => "by type (Todo, Deadline, Event)",
        SortCriterion::Status => "by completion status (incomplete first)",
    };
    format!("Tasks sorted {}.", how)
}

pub fn skipped_lines(lines: &[usize]) -> String {
    let numbers: Vec<String> = lines.iter().map(|n| n.to_string()).collect();
    format!(
        "Skipped {} unreadable line(s) in the task file (line {}).",
        lines.len(),
        numbers.join(", ")
    )
}

pub fn loading_failed(reason: &str) -> String {
    format!(
        "Error loading tasks from file: {}\nStarting with an empty task list.",
        reason
    )
}

pub fn help() -> String {
    HELP_TEXT.to_string()
}

const HELP_TEXT: &str = "\
Here are all the commands you can use with Lyra:

TASK MANAGEMENT:
  todo <description>                          - Add a new todo task
  deadline <task> /by <yyyy-MM-dd>            - Add a deadline task
  event <task> /from <yyyy-MM-dd> /to <yyyy-MM-dd> - Add an event task

TASK OPERATIONS:
  list                         - Show all tasks
  mark <number>                - Mark task as done
  unmark <number>              - Mark task as not done
  delete <number>              - Delete a task

SEARCH & ORGANIZE:
  find <keyword>               - Search for tasks
  sort <criteria>              - Sort tasks by criteria
    Available criteria: description, deadline, event, type, status

UTILITY:
  help                         - Show this help message
  bye                          - Exit the application

TIPS:
  - Task numbers start from 1
  - Dates use the yyyy-MM-dd format, e.g. 2024-12-25
  - Search is case-insensitive";

fn numbered<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    tasks
        .into_iter()
        .enumerate()
        .map(|(i, task)| format!("{}.{}", i + 1, task))
        .collect::<Vec<_>>()
        .join("\n")
}

fn count_tasks(n: usize) -> String {
    if n == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_numbering() {
        let mut milk = Task::todo("Buy milk");
        milk.mark_done();
        let tasks = vec![milk, Task::todo("Walk dog")];
        assert_eq!(
            task_list(&tasks),
            "Here are the tasks in your list:\n1.[T][X] Buy milk\n2.[T][ ] Walk dog"
        );
    }

    #[test]
    fn test_empty_messages() {
        let none: Vec<Task> = Vec::new();
        assert_eq!(task_list(&none), "There are no tasks in your list.");
        assert!(matching_tasks("book", &none).starts_with("No tasks found matching 'book'"));
    }

    #[test]
    fn test_counts() {
        let task = Task::todo("a");
        assert!(task_added(&task, 1).ends_with("Now you have 1 task in the list."));
        assert!(task_deleted(&task, 0).ends_with("Now you have 0 tasks in the list."));
    }
}
