use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::UploadedFile;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – inputs
// ---------------------------------------------------------------------------

/// Render the input sidebar: uploads, key field and the Analyze trigger.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Inputs");
    ui.separator();

    ui.strong("Upload Excel files (.xlsx)");
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Browse…").clicked() {
            open_file_dialog(state);
        }
        if ui
            .add_enabled(!state.uploads.is_empty(), egui::Button::new("Clear"))
            .clicked()
        {
            state.clear_uploads();
        }
    });
    ui.label(RichText::new("or drop files onto the window").weak().small());

    if let Some(msg) = &state.status_message {
        ui.colored_label(ui.visuals().error_fg_color, msg);
    }

    let mut remove = None;
    ScrollArea::vertical()
        .max_height(200.0)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for (idx, file) in state.uploads.iter().enumerate() {
                ui.horizontal(|ui: &mut Ui| {
                    if ui.small_button("✖").on_hover_text("Remove").clicked() {
                        remove = Some(idx);
                    }
                    ui.label(&file.name);
                });
            }
        });
    if let Some(idx) = remove {
        state.remove_upload(idx);
    }

    ui.separator();

    ui.strong(format!("Enter {}", state.config.key_column));
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.key_input).hint_text("e.g. 300 or 2024-12-15"),
    );
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(8.0);
    if ui.button("Analyze").clicked() || submitted {
        state.analyze();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Clear uploads").clicked() {
                state.clear_uploads();
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(format!("{} file(s) uploaded", state.uploads.len()));
    });
}

// ---------------------------------------------------------------------------
// File dialog / drag and drop
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let files = rfd::FileDialog::new()
        .set_title("Upload Excel files")
        .add_filter("Excel workbook", &["xlsx"])
        .pick_files();

    if let Some(paths) = files {
        state.add_paths(paths);
    }
}

/// Add any files dropped onto the window this frame.
pub fn handle_dropped_files(ctx: &egui::Context, state: &mut AppState) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    if dropped.is_empty() {
        return;
    }

    let mut paths = Vec::new();
    for file in dropped {
        if let Some(path) = file.path {
            paths.push(path);
        } else if let Some(bytes) = file.bytes {
            state.add_upload(UploadedFile::new(file.name, bytes.to_vec()));
        }
    }
    if !paths.is_empty() {
        state.add_paths(paths);
    }
}
