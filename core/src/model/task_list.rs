use crate::error::{LyraError, Result};
use crate::model::strategy::{sort_tasks, SortCriterion};
use crate::model::task::Task;

/// Ordered collection of tasks. Insertion order is display order until sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn delete(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    pub fn mark_done(&mut self, index: usize) -> Result<&Task> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.mark_done();
        Ok(task)
    }

    pub fn mark_not_done(&mut self, index: usize) -> Result<&Task> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.mark_not_done();
        Ok(task)
    }

    pub fn sort_by(&mut self, criterion: SortCriterion) {
        sort_tasks(&mut self.tasks, criterion);
    }

    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.matches(keyword)).collect()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(LyraError::IndexOutOfRange {
                index: index as i64,
                size: self.tasks.len(),
            })
        }
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        TaskList::from(vec![
            Task::todo("read book"),
            Task::todo("return book"),
            Task::todo("buy milk"),
        ])
    }

    #[test]
    fn test_add_appends() {
        let mut list = TaskList::new();
        list.add(Task::todo("a"));
        list.add(Task::todo("b"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().description, "b");
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let mut list = sample();
        let removed = list.delete(1).unwrap();
        assert_eq!(removed.description, "return book");
        let names: Vec<_> = list.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["read book", "buy milk"]);
    }

    #[test]
    fn test_out_of_range_leaves_list_untouched() {
        let mut list = sample();
        let before = list.clone();

        assert!(matches!(
            list.delete(3),
            Err(LyraError::IndexOutOfRange { index: 3, size: 3 })
        ));
        assert!(list.mark_done(7).is_err());
        assert!(list.mark_not_done(10).is_err());

        assert_eq!(list, before);
    }

    #[test]
    fn test_mark_and_unmark() {
        let mut list = sample();
        assert!(list.mark_done(0).unwrap().done);
        assert!(list.mark_done(0).unwrap().done);
        assert!(!list.mark_not_done(0).unwrap().done);
    }

    #[test]
    fn test_find() {
        let list = sample();
        let found = list.find("BOOK");
        assert_eq!(found.len(), 2);
        assert!(list.find("bread").is_empty());
    }
}
