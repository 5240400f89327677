use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::FileColors;
use crate::error::RunError;
use crate::pipeline::{AnalysisReport, FileReport, FileStatus, RunOutcome};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results (central panel)
// ---------------------------------------------------------------------------

/// Render the outcome of the last run in the central panel.
pub fn results(ui: &mut Ui, state: &AppState) {
    ui.heading("R² PDF Dashboard");
    ui.separator();

    let outcome = match &state.last_run {
        Some(run) => run,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label("Upload workbooks, enter a key and press Analyze.");
            });
            return;
        }
    };

    match &outcome.result {
        Err(e @ RunError::NoValues { .. }) => {
            warnings(ui, outcome);
            ui.colored_label(ui.visuals().warn_fg_color, e.to_string());
            file_table(ui, outcome);
        }
        Err(e) => {
            ui.colored_label(ui.visuals().error_fg_color, e.to_string());
        }
        Ok(report) => {
            warnings(ui, outcome);
            report_view(ui, outcome, report);
        }
    }
}

fn warnings(ui: &mut Ui, outcome: &RunOutcome) {
    for msg in &outcome.warnings {
        ui.colored_label(ui.visuals().warn_fg_color, format!("⚠ {msg}"));
    }
}

fn report_view(ui: &mut Ui, outcome: &RunOutcome, report: &AnalysisReport) {
    let colors = FileColors::new(outcome.files.len());

    ui.label(RichText::new(report.title()).strong().size(16.0));
    match &report.density {
        Ok(curve) => {
            Plot::new("density_plot")
                .legend(Legend::default())
                .x_axis_label(report.value_column.as_str())
                .y_axis_label("Density")
                .show_grid(true)
                .height(360.0)
                .allow_boxed_zoom(true)
                .allow_drag(true)
                .allow_scroll(true)
                .allow_zoom(true)
                .show(ui, |plot_ui| {
                    let line = Line::new(PlotPoints::from(curve.points.clone()))
                        .name("Normal PDF")
                        .width(2.0);
                    plot_ui.line(line);

                    // Sample markers along the x-axis, one series per file.
                    for (file_index, file) in outcome.files.iter().enumerate() {
                        let points: Vec<[f64; 2]> = report
                            .samples
                            .iter()
                            .filter(|s| s.file_index == file_index)
                            .map(|s| [s.value, 0.0])
                            .collect();
                        if points.is_empty() {
                            continue;
                        }
                        plot_ui.points(
                            Points::new(PlotPoints::from(points))
                                .name(&file.name)
                                .color(colors.color_for(file_index))
                                .shape(MarkerShape::Diamond)
                                .radius(4.0),
                        );
                    }
                });
        }
        Err(e) => {
            ui.colored_label(ui.visuals().warn_fg_color, e.to_string());
        }
    }

    ui.add_space(8.0);
    ui.label(RichText::new(format!("Samples: {}", report.summary.count)).strong());
    ui.label(RichText::new(format!("Mean (μ): {:.4}", report.summary.mean)).strong());
    ui.label(RichText::new(format!("Std Dev (σ): {:.4}", report.summary.std_dev)).strong());

    if ui.button("Copy summary").clicked() {
        match report.summary_json() {
            Ok(json) => ui.ctx().copy_text(json),
            Err(e) => log::error!("Failed to serialize summary: {e}"),
        }
    }

    ui.add_space(8.0);
    file_table(ui, outcome);
}

// ---------------------------------------------------------------------------
// Per-file table
// ---------------------------------------------------------------------------

fn file_table(ui: &mut Ui, outcome: &RunOutcome) {
    if outcome.files.is_empty() {
        return;
    }
    let colors = FileColors::new(outcome.files.len());

    egui::CollapsingHeader::new(RichText::new("Files").strong())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .vscroll(false)
                .striped(true)
                .column(Column::auto().at_least(160.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("File");
                    });
                    header.col(|ui| {
                        ui.strong("Result");
                    });
                })
                .body(|mut body| {
                    for (idx, file) in outcome.files.iter().enumerate() {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.colored_label(colors.color_for(idx), &file.name);
                            });
                            row.col(|ui| {
                                ui.label(status_text(file));
                            });
                        });
                    }
                });
        });
}

fn status_text(file: &FileReport) -> String {
    match &file.status {
        FileStatus::Contributed { count, ignored: 0 } => format!("{count} value(s)"),
        FileStatus::Contributed { count, ignored } => {
            format!("{count} value(s), {ignored} non-numeric ignored")
        }
        FileStatus::Skipped(e) => format!("skipped: {e}"),
    }
}
