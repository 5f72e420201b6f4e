use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use tsk::config::TskConfig;
use tsk::error::Result;
use tsk::loader::TasksFile;
use tsk::manager::{PriorityTaskManager, RecurringTaskManager, RegularTaskManager};
use tsk::model::Task;
use tsk::report::{MessageLevel, ReportMessage, TaskReport};
use unicode_width::UnicodeWidthStr;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.verbose);

    let file = cli
        .file
        .unwrap_or_else(|| PathBuf::from(&config.tasks_file));
    let keyword = cli.keyword.unwrap_or_else(|| config.keyword.clone());

    println!("Task Management System - Loading from {}", file.display());
    println!("-------------------------------------------------");

    let tasks = match TasksFile::load(&file) {
        Ok(tasks) => tasks,
        Err(e) => {
            print_message(&ReportMessage::warning(format!(
                "Could not load tasks from {}: {}",
                file.display(),
                e
            )));
            TasksFile::default()
        }
    };

    let mut regular = RegularTaskManager::new();
    let mut priority = PriorityTaskManager::new();
    let mut recurring = RecurringTaskManager::new();
    for task in tasks.regular_tasks {
        regular.add_task(task);
    }
    for task in tasks.priority_tasks {
        priority.add_task(task);
    }
    for task in tasks.recurring_tasks {
        recurring.add_task(task);
    }

    let report = TaskReport::build(&mut regular, &priority, &recurring, &keyword);
    print_report(&report);
    Ok(())
}

fn load_config(verbose: bool) -> TskConfig {
    let Some(proj_dirs) = ProjectDirs::from("com", "tsk", "tsk") else {
        return TskConfig::default();
    };
    let config_dir = proj_dirs.config_dir();

    match TskConfig::load(config_dir) {
        Ok(config) => {
            if verbose {
                println!("{}", format!("config dir: {}", config_dir.display()).dimmed());
            }
            config
        }
        Err(e) => {
            print_message(&ReportMessage::warning(format!(
                "Ignoring unreadable config in {}: {}",
                config_dir.display(),
                e
            )));
            TskConfig::default()
        }
    }
}

fn print_report(report: &TaskReport) {
    println!();
    println!("{}", "Task Statistics:".bold());
    println!("Regular Tasks: {}", report.regular_count);
    println!("Priority Tasks: {}", report.priority_count);
    println!("Recurring Tasks: {}", report.recurring_count);

    println!();
    println!("{}", "Task Status Breakdown:".bold());
    println!("Pending: {}", report.status.pending);
    println!("In Progress: {}", report.status.in_progress);
    println!("Completed: {}", report.status.completed);

    println!();
    println!("{}", "Priority Breakdown:".bold());
    println!("Urgent: {}", report.priorities.urgent);
    println!("High: {}", report.priorities.high);
    println!("Medium: {}", report.priorities.medium);
    println!("Low: {}", report.priorities.low);

    println!();
    println!("{}", "Demonstrating Task Operations:".bold());
    print_messages(&report.messages);

    if !report.attention.is_empty() {
        println!();
        println!("{}", "High Priority Tasks That Need Attention:".bold());
        for task in &report.attention {
            println!("- {}: {}", task.task.title.bold(), task.task.description);
        }
    }

    println!();
    println!("{}", "Tasks Sorted by Title:".bold());
    print_task_list(&report.sorted_tasks);

    println!();
    let header = format!("Tasks Containing \"{}\":", report.keyword);
    println!("{}", header.bold());
    if report.keyword_matches.is_empty() {
        println!("No tasks found with that keyword.");
    } else {
        for task in &report.keyword_matches {
            println!("- {}", task.title);
        }
    }
}

fn print_messages(messages: &[ReportMessage]) {
    for message in messages {
        print_message(message);
    }
}

fn print_message(message: &ReportMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content.dimmed()),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
        MessageLevel::Error => println!("{}", message.content.red()),
    }
}

const LINE_WIDTH: usize = 72;
// Widest status is "in-progress" plus a two-column gutter.
const STATUS_WIDTH: usize = 13;

fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    for (i, task) in tasks.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);
        let available = LINE_WIDTH.saturating_sub(idx_str.width() + STATUS_WIDTH);

        let title = truncate_to_width(&task.title, available);
        let padding = available.saturating_sub(title.width());
        let status = format!("{:>width$}", task.status.to_string(), width = STATUS_WIDTH);

        println!(
            "{}{}{}{}",
            idx_str,
            title,
            " ".repeat(padding),
            status.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
