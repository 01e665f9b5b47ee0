//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Human output picks its
//! colors from the active [`Theme`].

use colored::{Color, Colorize};
use serde::Serialize;

use crate::models::{Task, Theme};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Colors used for human output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Headings and IDs
    pub accent: Color,
    /// Due dates
    pub due: Color,
    /// Completed tasks
    pub done: Color,
    /// Tip text
    pub tip: Color,
}

impl Palette {
    /// Palette for a theme
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                accent: Color::Blue,
                due: Color::Magenta,
                done: Color::BrightBlack,
                tip: Color::Green,
            },
            Theme::Dark => Self {
                accent: Color::BrightCyan,
                due: Color::BrightYellow,
                done: Color::White,
                tip: Color::BrightGreen,
            },
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_task(task: &Task, palette: Palette) {
    let id = format!("[{}]", task.id).color(palette.accent);
    if task.completed {
        println!("  {} {} {}", id, task.name.strikethrough().color(palette.done), "(done)".dimmed());
    } else {
        println!("  {} {}", id, task.name);
    }
    println!("        Due: {}", task.due_date.color(palette.due));
}

/// Result of a task list operation
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Number of tasks shown
    pub total: usize,
    /// Number of shown tasks still open
    pub pending: usize,
    /// The tasks, in insertion order
    pub tasks: Vec<Task>,
    /// Theme used for human output
    #[serde(skip)]
    pub theme: Theme,
}

impl TaskListResult {
    /// Build a result, counting pending tasks
    #[must_use]
    pub fn new(tasks: Vec<Task>, theme: Theme) -> Self {
        Self {
            total: tasks.len(),
            pending: tasks.iter().filter(|t| t.is_pending()).count(),
            tasks,
            theme,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let palette = Palette::for_theme(self.theme);
        if self.tasks.is_empty() {
            println!("No tasks yet. Add one with: cleanmate add \"Clean Kitchen\"");
            return;
        }

        println!("{}\n", "Your Tasks".bold().color(palette.accent));
        for task in &self.tasks {
            print_task(task, palette);
        }
        println!("\n{} task(s), {} pending", self.total, self.pending);
    }
}

/// Result of adding a task
#[derive(Debug, Serialize)]
pub struct TaskAddResult {
    /// Whether a task was created
    pub success: bool,
    /// The created task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

impl TaskAddResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.task {
                Some(task) => {
                    println!("Created task: {}", task.id);
                    println!("  Name: {}", task.name);
                    println!("  Due:  {}", task.due_date);
                },
                None => println!("Nothing added: a task needs both a name and a due date."),
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of marking a task done
#[derive(Debug, Serialize)]
pub struct TaskDoneResult {
    /// Whether the task exists
    pub found: bool,
    /// Requested task ID
    pub id: u64,
    /// Whether it was already done before this call
    pub already_done: bool,
    /// The task after the update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

impl TaskDoneResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.task {
                Some(task) if self.already_done => {
                    println!("Already done: {} ({})", task.id, task.name);
                },
                Some(task) => println!("Completed: {} ({})", task.id, task.name),
                None => println!("Task not found: {}", self.id),
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of showing or toggling the theme
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThemeResult {
    /// Active theme
    pub theme: Theme,
    /// Whether this call changed it
    pub changed: bool,
}

impl ThemeResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.changed {
                    println!("Switched to {} theme", self.theme);
                } else {
                    println!("Theme: {}", self.theme);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Tip of the day
#[derive(Debug, Serialize)]
pub struct TipResult {
    /// Tip text
    pub tip: String,
    /// Theme used for human output
    #[serde(skip)]
    pub theme: Theme,
}

impl TipResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let palette = Palette::for_theme(self.theme);
                println!("{}", "Tip of the Day".bold().color(palette.tip));
                println!("  {}", self.tip);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Available task templates
#[derive(Debug, Serialize)]
pub struct TemplateListResult {
    /// Template names, in order
    pub templates: Vec<String>,
}

impl TemplateListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.templates.is_empty() {
                    println!("No templates configured.");
                    return;
                }
                println!("Templates:\n");
                for (i, name) in self.templates.iter().enumerate() {
                    println!("  {}. {}", i + 1, name);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Overview shown when no subcommand is given
#[derive(Debug, Serialize)]
pub struct DashboardResult {
    /// Active theme
    pub theme: Theme,
    /// Tip chosen for this session
    pub tip: String,
    /// All tasks
    #[serde(flatten)]
    pub tasks: TaskListResult,
}

impl DashboardResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}", "CleanMate".bold());
                println!("Schedule tasks, get daily tips, and stay organized.\n");
                self.tasks.render(OutputMode::Human);
                println!();
                TipResult {
                    tip: self.tip.clone(),
                    theme: self.theme,
                }
                .render(OutputMode::Human);
            },
            OutputMode::Json => print_json(self),
        }
    }
}
