use eframe::egui;

use crate::engine::machine::Action;
use crate::model::discussion::Mark;
use crate::model::game_state::GameSnapshot;
use crate::ui::app::big_button;
use crate::ui::settings::UiSettings;

fn mark_color(mark: Mark) -> egui::Color32 {
    match mark {
        Mark::O => egui::Color32::from_rgb(60, 170, 90),
        Mark::X => egui::Color32::from_rgb(210, 70, 70),
        Mark::Question => egui::Color32::from_rgb(220, 170, 40),
    }
}

pub fn draw_discussion(
    ui: &mut egui::Ui,
    snap: &GameSnapshot,
    settings: &UiSettings,
) -> Option<Action> {
    let mut action = None;

    /* -------- Counters -------- */

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.columns(2, |cols| {
            cols[0].vertical_centered(|ui| {
                ui.small("Time left");
                ui.label(
                    egui::RichText::new(snap.formatted_time_left())
                        .size(28.0)
                        .strong()
                        .color(settings.accent()),
                );
            });
            cols[1].vertical_centered(|ui| {
                ui.small("Questions left");
                ui.label(
                    egui::RichText::new(format!(
                        "{} / {}",
                        snap.questions_left, snap.settings.question_limit
                    ))
                    .size(28.0)
                    .strong(),
                );
            });
        });
    });

    ui.add_space(8.0);

    /* -------- Question tally -------- */

    let can_log = snap.questions_left > 0;

    for player in &snap.players {
        let counts = snap.counts_for(player.id);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong(player.list_label());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Right-to-left, so iterate in reverse to show O X ?
                    for mark in Mark::ALL.iter().rev() {
                        let text = egui::RichText::new(format!(
                            "{} {}",
                            mark.symbol(),
                            counts.get(*mark)
                        ))
                        .color(mark_color(*mark))
                        .strong();

                        if ui.add_enabled(can_log, egui::Button::new(text)).clicked() {
                            action = Some(Action::LogMark {
                                player_id: player.id,
                                mark: *mark,
                            });
                        }
                    }
                });
            });
        });
    }

    ui.add_space(16.0);
    if big_button(ui, "Topic solved!", true) {
        action = Some(Action::DeclareSolved);
    }

    action
}
