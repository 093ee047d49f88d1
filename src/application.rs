use chrono::NaiveDate;

use crate::config::DeskConfig;
use crate::core::calendar::YearCalendarState;
use crate::core::task::{Priority, Task};
use crate::message::{Message, Section, TaskFilter};
use crate::store::folders::FolderHistory;
use crate::store::notes::NoteStore;
use crate::store::tasks::TaskStore;
use crate::subjects::FolderVault;

/// The dashboard: owns the stores and all per-session UI state. Every
/// user intent arrives as a [`Message`] through [`Desk::update`].
pub struct Desk {
    config: DeskConfig,
    active_section: Section,

    // Data
    tasks: TaskStore,
    notes: NoteStore,
    folder_history: FolderHistory,

    // Todo panel state
    task_input: String,
    new_task_priority: Priority,
    task_filter: TaskFilter,

    // Calendar panel state
    calendar: YearCalendarState,
    note_input: String,

    // Subjects panel state; the folder grant lives only for this session
    vault: Option<FolderVault>,
    file_list: Vec<String>,
    file_name_input: String,
    open_file: Option<String>,
    file_content: String,
    pending_delete_file: Option<String>,
}

impl Desk {
    pub fn new(config: DeskConfig) -> Self {
        let tasks = TaskStore::load(config.tasks_path());
        let notes = NoteStore::load(config.notes_path());
        let folder_history = FolderHistory::load(config.folder_history_path());

        Self {
            config,
            active_section: Section::default(),
            tasks,
            notes,
            folder_history,
            task_input: String::new(),
            new_task_priority: Priority::default(),
            task_filter: TaskFilter::default(),
            calendar: YearCalendarState::default(),
            note_input: String::new(),
            vault: None,
            file_list: Vec::new(),
            file_name_input: String::new(),
            open_file: None,
            file_content: String::new(),
            pending_delete_file: None,
        }
    }

    pub async fn update(&mut self, message: Message) {
        match message {
            Message::SelectSection(section) => {
                self.active_section = section;
            }

            // Task CRUD
            Message::TaskInputChanged(value) => {
                self.task_input = value;
            }

            Message::NewTaskPriorityChanged(priority) => {
                self.new_task_priority = priority;
            }

            Message::TaskSubmit => {
                if self.tasks.add(&self.task_input, self.new_task_priority).is_some() {
                    self.task_input.clear();
                }
            }

            Message::ToggleTaskDone(id) => {
                self.tasks.toggle(id);
            }

            Message::DeleteTask(id) => {
                self.tasks.delete(id);
            }

            Message::SetTaskFilter(filter) => {
                self.task_filter = filter;
            }

            Message::ClearCompleted => {
                self.tasks.clear_completed();
            }

            Message::ClearAllTasks => {
                self.tasks.clear_all();
            }

            // Calendar
            Message::CalendarPrevYear => {
                self.calendar.prev_year();
                self.note_input.clear();
            }

            Message::CalendarNextYear => {
                self.calendar.next_year();
                self.note_input.clear();
            }

            Message::CalendarSelectDay(date) => {
                self.calendar.select_day(date);
                self.note_input = match self.calendar.selected_day {
                    Some(day) => self.notes.get(day).unwrap_or_default().to_string(),
                    None => String::new(),
                };
            }

            Message::NoteInputChanged(value) => {
                self.note_input = value;
            }

            Message::NoteSubmit => {
                let message = self.note_input.trim();
                if message.is_empty() {
                    return;
                }
                if let Some(day) = self.calendar.selected_day {
                    self.notes.set(day, message);
                }
            }

            // Subjects folder
            Message::PickFolder(path) => match FolderVault::open(&path).await {
                Ok(vault) => {
                    self.folder_history.remember(vault.name());
                    self.file_list = match vault.list_text_files().await {
                        Ok(files) => files,
                        Err(e) => {
                            log::error!("Failed to list {}: {}", vault.name(), e);
                            Vec::new()
                        }
                    };
                    self.vault = Some(vault);
                    self.open_file = None;
                    self.file_content.clear();
                    self.pending_delete_file = None;
                }
                Err(e) => {
                    log::error!("Folder selection failed for {}: {}", path, e);
                }
            },

            Message::FileNameInputChanged(value) => {
                self.file_name_input = value;
            }

            Message::CreateFile => {
                let name = self.file_name_input.trim().to_string();
                if name.is_empty() {
                    return;
                }
                let Some(vault) = &self.vault else { return };
                match vault.create_file(&name).await {
                    Ok(()) => {
                        self.file_name_input.clear();
                        self.refresh_file_list().await;
                    }
                    Err(e) => log::error!("File creation failed: {}", e),
                }
            }

            Message::OpenFile(file_name) => {
                let Some(vault) = &self.vault else { return };
                match vault.read_file(&file_name).await {
                    Ok(content) => {
                        self.open_file = Some(file_name);
                        self.file_content = content;
                    }
                    Err(e) => log::error!("Failed to open {}: {}", file_name, e),
                }
            }

            Message::FileContentChanged(value) => {
                self.file_content = value;
            }

            Message::SaveFile => {
                let Some(vault) = &self.vault else { return };
                let Some(file_name) = &self.open_file else { return };
                if let Err(e) = vault.write_file(file_name, &self.file_content).await {
                    log::error!("Failed to save {}: {}", file_name, e);
                }
            }

            Message::ConfirmDeleteFile(file_name) => {
                self.pending_delete_file = Some(file_name);
            }

            Message::CancelDeleteFile => {
                self.pending_delete_file = None;
            }

            Message::DeleteFile(file_name) => {
                self.pending_delete_file = None;
                let Some(vault) = &self.vault else { return };
                match vault.delete_file(&file_name).await {
                    Ok(()) => {
                        if self.open_file.as_deref() == Some(file_name.as_str()) {
                            self.open_file = None;
                            self.file_content.clear();
                        }
                        self.refresh_file_list().await;
                    }
                    Err(e) => log::error!("Failed to delete {}: {}", file_name, e),
                }
            }

            Message::CloseFolder => {
                self.vault = None;
                self.file_list.clear();
                self.open_file = None;
                self.file_content.clear();
                self.pending_delete_file = None;
            }

            Message::ToggleDebugLogging => {
                let enabled = !crate::debug_logging();
                crate::set_debug_logging(enabled);
                log::info!("Debug logging {}", if enabled { "on" } else { "off" });
            }
        }
    }

    async fn refresh_file_list(&mut self) {
        let Some(vault) = &self.vault else { return };
        match vault.list_text_files().await {
            Ok(files) => self.file_list = files,
            Err(e) => log::error!("Failed to list {}: {}", vault.name(), e),
        }
    }

    // Derived views for the presentation layer.

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks.filtered(self.task_filter)
    }

    pub fn task_filter(&self) -> TaskFilter {
        self.task_filter
    }

    pub fn task_input(&self) -> &str {
        &self.task_input
    }

    pub fn new_task_priority(&self) -> Priority {
        self.new_task_priority
    }

    pub fn active_count(&self) -> usize {
        self.tasks.active_count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.completed_count()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn calendar(&self) -> &YearCalendarState {
        &self.calendar
    }

    pub fn selected_note(&self) -> Option<&str> {
        self.calendar.selected_day.and_then(|day| self.notes.get(day))
    }

    pub fn noted_days(&self) -> std::collections::HashSet<NaiveDate> {
        self.notes.noted_days()
    }

    pub fn note_input(&self) -> &str {
        &self.note_input
    }

    pub fn vault(&self) -> Option<&FolderVault> {
        self.vault.as_ref()
    }

    pub fn file_list(&self) -> &[String] {
        &self.file_list
    }

    pub fn file_name_input(&self) -> &str {
        &self.file_name_input
    }

    pub fn open_file(&self) -> Option<&str> {
        self.open_file.as_deref()
    }

    pub fn file_content(&self) -> &str {
        &self.file_content
    }

    pub fn pending_delete_file(&self) -> Option<&str> {
        self.pending_delete_file.as_deref()
    }

    pub fn folder_history(&self) -> &[String] {
        self.folder_history.names()
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }
}
