use std::fmt::Write;

use crate::application::Desk;

pub fn view(desk: &Desk) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Track Subjects ==");

    let Some(vault) = desk.vault() else {
        let _ = writeln!(out, "No folder selected. Use `folder <path>` to pick one.");
        if !desk.folder_history().is_empty() {
            let _ = writeln!(out, "\nHistory (folders must be re-granted each session):");
            for name in desk.folder_history() {
                let _ = writeln!(out, "  - {}", name);
            }
        }
        return out;
    };

    let _ = writeln!(out, "Folder: {}", vault.name());

    if desk.file_list().is_empty() {
        let _ = writeln!(out, "No .txt files yet. Use `new <name>` to create one.");
    } else {
        let _ = writeln!(out, "Files:");
        for (i, file) in desk.file_list().iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", i + 1, file);
        }
    }

    if let Some(file_name) = desk.open_file() {
        let _ = writeln!(out, "\nEditing: {}", file_name);
        let _ = writeln!(out, "---\n{}\n---", desk.file_content());
    }

    if let Some(file_name) = desk.pending_delete_file() {
        let _ = writeln!(
            out,
            "\nDelete {}? Type `y` to confirm or `n` to cancel.",
            file_name
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Desk;
    use crate::config::DeskConfig;
    use crate::message::Message;

    #[tokio::test]
    async fn folder_view_lists_files_and_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeskConfig {
            data_directory: dir.path().to_path_buf(),
        };
        let mut desk = Desk::new(config);

        let folder = tempfile::tempdir().unwrap();
        desk.update(Message::PickFolder(folder.path().to_string_lossy().into_owned()))
            .await;
        desk.update(Message::FileNameInputChanged("maths".into())).await;
        desk.update(Message::CreateFile).await;
        desk.update(Message::ConfirmDeleteFile("maths.txt".into())).await;

        let rendered = view(&desk);
        assert!(rendered.contains("maths.txt"));
        assert!(rendered.contains("Delete maths.txt?"));
    }

    #[tokio::test]
    async fn no_folder_shows_history_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeskConfig {
            data_directory: dir.path().to_path_buf(),
        };
        let desk = Desk::new(config);
        assert!(view(&desk).contains("No folder selected"));
    }
}
