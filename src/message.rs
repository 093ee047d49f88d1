use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::task::Priority;

/// Dashboard panels, navigated by URL-fragment-style names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Todo,
    Calendar,
    Subjects,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Todo => "Todos",
            Self::Calendar => "Calendar",
            Self::Subjects => "Track Subjects",
        }
    }

    pub fn fragment(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Calendar => "calendar",
            Self::Subjects => "subjects",
        }
    }

    pub fn from_fragment(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(Self::Todo),
            "calendar" => Some(Self::Calendar),
            "subjects" => Some(Self::Subjects),
            _ => None,
        }
    }

    pub const ALL: &'static [Section] = &[Section::Todo, Section::Calendar, Section::Subjects];
}

impl Default for Section {
    fn default() -> Self {
        Self::Todo
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self::All
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    SelectSection(Section),

    // Task CRUD
    TaskInputChanged(String),
    NewTaskPriorityChanged(Priority),
    TaskSubmit,
    ToggleTaskDone(Uuid),
    DeleteTask(Uuid),
    SetTaskFilter(TaskFilter),
    ClearCompleted,
    ClearAllTasks,

    // Calendar
    CalendarPrevYear,
    CalendarNextYear,
    CalendarSelectDay(NaiveDate),
    NoteInputChanged(String),
    NoteSubmit,

    // Subjects folder
    PickFolder(String),
    FileNameInputChanged(String),
    CreateFile,
    OpenFile(String),
    FileContentChanged(String),
    SaveFile,
    ConfirmDeleteFile(String),
    CancelDeleteFile,
    DeleteFile(String),
    CloseFolder,

    // Settings
    ToggleDebugLogging,
}
