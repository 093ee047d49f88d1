use tokio::io::{AsyncBufReadExt, BufReader};

use workdesk::application::Desk;
use workdesk::config::DeskConfig;
use workdesk::core::calendar::parse_date_key;
use workdesk::core::task::Priority;
use workdesk::message::{Message, Section, TaskFilter};
use workdesk::pages;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up logging to the systemd user journal (`journalctl --user -t workdesk -f`).
    // Wrapper filters: workdesk crate at info/debug (per toggle), everything else at warn.
    {
        struct FilteredJournal {
            inner: systemd_journal_logger::JournalLog,
        }

        impl log::Log for FilteredJournal {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                if metadata.target().starts_with("workdesk") {
                    let max = if workdesk::debug_logging() {
                        log::LevelFilter::Debug
                    } else {
                        log::LevelFilter::Info
                    };
                    metadata.level() <= max
                } else {
                    metadata.level() <= log::LevelFilter::Warn
                }
            }
            fn log(&self, record: &log::Record) {
                if self.enabled(record.metadata()) {
                    self.inner.log(record);
                }
            }
            fn flush(&self) {
                self.inner.flush();
            }
        }

        let journal = systemd_journal_logger::JournalLog::new()
            .unwrap()
            .with_syslog_identifier("workdesk".to_string());

        log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })).unwrap();
        // Global max must be Debug so workdesk debug logs can pass through when toggled
        log::set_max_level(log::LevelFilter::Debug);
    }

    let config = DeskConfig::default();
    config.ensure_files()?;

    let mut desk = Desk::new(config);

    // Restore the launch section from the command line, like the web
    // dashboard restored it from the URL fragment.
    let args: Vec<String> = std::env::args().collect();
    if let Some(section) = args.iter().skip(1).find_map(|a| Section::from_fragment(a)) {
        desk.update(Message::SelectSection(section)).await;
    }

    println!("{}", pages::view(&desk));
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        if line == "help" {
            print_help();
            continue;
        }

        match parse_command(line, &desk) {
            Some(messages) => {
                for message in messages {
                    desk.update(message).await;
                }
            }
            None => {
                println!("Unrecognized command: {} (try `help`)", line);
                continue;
            }
        }
        println!("{}", pages::view(&desk));
    }

    Ok(())
}

/// Map one typed command onto user-intent messages. A command that edits
/// an input and submits it (the original's type-then-Enter) yields both
/// messages in order. Commands shared between panels (`del`, `open`)
/// route by the active section.
fn parse_command(line: &str, desk: &Desk) -> Option<Vec<Message>> {
    let (cmd, rest) = match line.split_once(' ') {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    if let Some(section) = Section::from_fragment(cmd) {
        return Some(vec![Message::SelectSection(section)]);
    }
    if cmd == "debug" {
        return Some(vec![Message::ToggleDebugLogging]);
    }

    match desk.active_section() {
        Section::Todo => match cmd {
            "add" if !rest.is_empty() => Some(vec![
                Message::TaskInputChanged(rest.to_string()),
                Message::TaskSubmit,
            ]),
            "pri" => Priority::from_label(rest)
                .map(|p| vec![Message::NewTaskPriorityChanged(p)]),
            "toggle" => task_at(desk, rest).map(|id| vec![Message::ToggleTaskDone(id)]),
            "del" => task_at(desk, rest).map(|id| vec![Message::DeleteTask(id)]),
            "filter" => TaskFilter::from_label(rest).map(|f| vec![Message::SetTaskFilter(f)]),
            "clear-completed" => Some(vec![Message::ClearCompleted]),
            "clear-all" => Some(vec![Message::ClearAllTasks]),
            _ => None,
        },
        Section::Calendar => match cmd {
            "prev" => Some(vec![Message::CalendarPrevYear]),
            "next" => Some(vec![Message::CalendarNextYear]),
            "day" => parse_date_key(rest).map(|d| vec![Message::CalendarSelectDay(d)]),
            "note" if !rest.is_empty() => Some(vec![
                Message::NoteInputChanged(rest.to_string()),
                Message::NoteSubmit,
            ]),
            _ => None,
        },
        Section::Subjects => match cmd {
            "folder" if !rest.is_empty() => Some(vec![Message::PickFolder(rest.to_string())]),
            "new" if !rest.is_empty() => Some(vec![
                Message::FileNameInputChanged(rest.to_string()),
                Message::CreateFile,
            ]),
            "open" => file_at(desk, rest).map(|f| vec![Message::OpenFile(f)]),
            "edit" => Some(vec![Message::FileContentChanged(rest.to_string())]),
            "save" => Some(vec![Message::SaveFile]),
            "del" => file_at(desk, rest).map(|f| vec![Message::ConfirmDeleteFile(f)]),
            "y" => desk
                .pending_delete_file()
                .map(|f| vec![Message::DeleteFile(f.to_string())]),
            "n" => Some(vec![Message::CancelDeleteFile]),
            "close" => Some(vec![Message::CloseFolder]),
            _ => None,
        },
    }
}

/// Resolve a 1-based index in the filtered task view.
fn task_at(desk: &Desk, arg: &str) -> Option<uuid::Uuid> {
    let index: usize = arg.parse().ok()?;
    desk.filtered_tasks().get(index.checked_sub(1)?).map(|t| t.id)
}

/// Resolve a file by 1-based listing index or by name.
fn file_at(desk: &Desk, arg: &str) -> Option<String> {
    if let Ok(index) = arg.parse::<usize>() {
        return desk.file_list().get(index.checked_sub(1)?).cloned();
    }
    desk.file_list().iter().find(|f| *f == arg).cloned()
}

fn print_help() {
    println!("\nSections: todo | calendar | subjects   (quit, help, debug)");
    println!("Todo:     add <text>, pri <low|medium|high>, toggle <n>, del <n>,");
    println!("          filter <all|active|completed>, clear-completed, clear-all");
    println!("Calendar: prev, next, day <YYYY-MM-DD>, note <text>");
    println!("Subjects: folder <path>, new <name>, open <n>, edit <text>, save,");
    println!("          del <n>, y, n, close");
}
