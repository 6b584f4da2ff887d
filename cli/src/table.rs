use lyra_core::{TaskDto, TaskList};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "When")]
    when: String,
}

impl From<TaskDto> for TaskRow {
    fn from(dto: TaskDto) -> Self {
        let when = dto.when();
        Self {
            number: dto.number,
            kind: dto.kind,
            done: if dto.done { "X" } else { "" },
            description: dto.description,
            when,
        }
    }
}

pub fn render(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return "There are no tasks in your list.".to_string();
    }

    let rows: Vec<TaskRow> = TaskDto::from_tasks(tasks).into_iter().map(TaskRow::from).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}
