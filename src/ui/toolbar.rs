use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::{AppConfig, SaveConfigRequest, SetMaxPointsRequest};
use crate::constants::{MAX_MAX_POINTS, MIN_MAX_POINTS};
use crate::drawing::Drawing;
use crate::editor::{CommandHistory, HistoryRequest, PolylineTool};

/// Main toolbar with history buttons and polyline settings
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    history: Res<CommandHistory>,
    mut config: ResMut<AppConfig>,
    mut history_requests: MessageWriter<HistoryRequest>,
    mut max_points_events: MessageWriter<SetMaxPointsRequest>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                let undo = ui
                    .add_enabled(
                        history.can_undo(),
                        egui::Button::new(egui::RichText::new("Undo").size(14.0).strong())
                            .min_size(egui::vec2(0.0, 28.0)),
                    )
                    .on_disabled_hover_text("Nothing to undo");
                let undo = match history.undo_description() {
                    Some(desc) => undo.on_hover_text(format!("Undo: {} (Ctrl+Z)", desc)),
                    None => undo,
                };
                if undo.clicked() {
                    history_requests.write(HistoryRequest::Undo);
                }

                let redo = ui
                    .add_enabled(
                        history.can_redo(),
                        egui::Button::new(egui::RichText::new("Redo").size(14.0).strong())
                            .min_size(egui::vec2(0.0, 28.0)),
                    )
                    .on_disabled_hover_text("Nothing to redo");
                let redo = match history.redo_description() {
                    Some(desc) => redo.on_hover_text(format!("Redo: {} (Ctrl+Y)", desc)),
                    None => redo,
                };
                if redo.clicked() {
                    history_requests.write(HistoryRequest::Redo);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                ui.label("Max points:");
                let mut max_points = config.data.polyline.max_points;
                if ui
                    .add(egui::DragValue::new(&mut max_points).range(MIN_MAX_POINTS..=MAX_MAX_POINTS))
                    .on_hover_text("Applies to the next polyline")
                    .changed()
                {
                    max_points_events.write(SetMaxPointsRequest { max_points });
                }

                ui.add_space(8.0);

                let mut show_vertices = config.data.polyline.show_vertices;
                if ui.checkbox(&mut show_vertices, "Vertices").changed() {
                    config.data.polyline.show_vertices = show_vertices;
                    config.dirty = true;
                    save_events.write(SaveConfigRequest);
                }
            });
        });
    Ok(())
}

/// Bottom bar describing the construction state and the history depth
pub fn status_bar_ui(
    mut contexts: EguiContexts,
    tool: Res<PolylineTool>,
    history: Res<CommandHistory>,
    drawing: Res<Drawing>,
) -> Result {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 4))
                .fill(egui::Color32::from_rgb(45, 45, 48)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                let state = tool.state();
                ui.label(egui::RichText::new(state.display_name()).strong());
                ui.label(
                    egui::RichText::new(state.hint())
                        .color(egui::Color32::GRAY)
                        .size(11.0),
                );

                if tool.is_drawing() {
                    ui.separator();
                    ui.label(format!(
                        "{}/{} points",
                        tool.draft().committed_count(),
                        tool.max_points()
                    ));
                    if let Some(pos) = tool.draft().provisional() {
                        ui.label(
                            egui::RichText::new(format!("({:.0}, {:.0})", pos.x, pos.y)).weak(),
                        );
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} shapes | {} undo / {} redo",
                        drawing.len(),
                        history.undo_count(),
                        history.redo_count()
                    ));
                });
            });
        });
    Ok(())
}
