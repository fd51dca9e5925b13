use eframe::egui;

use crate::engine::machine::Action;
use crate::engine::vote::vote_title;
use crate::model::game_state::GameSnapshot;
use crate::model::player::Role;
use crate::model::verdict::Winner;
use crate::ui::app::{big_button, bubble, headline, placeholder, UiState};
use crate::ui::settings::UiSettings;

pub fn draw_vote(ui: &mut egui::Ui, snap: &GameSnapshot, state: &mut UiState) -> Option<Action> {
    let Some(ended_by) = snap.ended_by else {
        placeholder(ui, "Loading…");
        return None;
    };

    ui.vertical_centered(|ui| ui.heading(vote_title(ended_by, &snap.players)));
    ui.add_space(12.0);

    for player in snap.players.iter().filter(|p| snap.candidates.contains(&p.id)) {
        let counts = snap.counts_for(player.id);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.radio_value(&mut state.vote_selection, Some(player.id), player.list_label());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("O: {}  X: {}  ?: {}", counts.o, counts.x, counts.question));
                });
            });
        });
    }

    ui.add_space(16.0);

    let valid = state
        .vote_selection
        .is_some_and(|id| snap.candidates.contains(&id));
    big_button(ui, "Cast vote", valid).then_some(Action::SubmitVote(state.vote_selection))
}

pub fn draw_result(ui: &mut egui::Ui, snap: &GameSnapshot, settings: &UiSettings) -> Option<Action> {
    let Some(verdict) = snap.verdict.as_ref() else {
        placeholder(ui, "Waiting for the vote…");
        return None;
    };
    let Some(voted) = snap.player(verdict.voted_player_id) else {
        placeholder(ui, "Waiting for the vote…");
        return None;
    };

    ui.add_space(24.0);
    ui.vertical_centered(|ui| ui.label("The group chose…"));
    headline(ui, &voted.name, settings.accent());
    ui.vertical_centered(|ui| ui.label("Their role is…"));
    headline(ui, voted.role.label(), settings.role_color(voted.role));

    ui.add_space(16.0);
    let banner_color = match verdict.winner {
        Winner::Seekers => settings.role_color(Role::Seeker),
        Winner::Saboteur => settings.role_color(Role::Saboteur),
    };
    ui.vertical_centered(|ui| {
        bubble(ui, banner_color, &format!("{}\n{}", verdict.label, verdict.message));
    });

    /* -------- Full reveal -------- */

    ui.add_space(16.0);
    ui.strong(format!("The topic was \"{}\"", snap.secret_topic));
    egui::Grid::new("role_listing").num_columns(2).striped(true).show(ui, |ui| {
        for player in &snap.players {
            let mut name = egui::RichText::new(player.list_label());
            if player.id == voted.id {
                name = name.strong().color(settings.accent());
            }
            ui.label(name);
            ui.label(
                egui::RichText::new(player.role.label()).color(settings.role_color(player.role)),
            );
            ui.end_row();
        }
    });

    ui.add_space(24.0);
    big_button(ui, "New game", true).then_some(Action::Restart)
}
