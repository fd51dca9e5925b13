use eframe::egui;

use crate::engine::machine::Action;
use crate::model::settings::{default_player_name, MasterSelection, MAX_PLAYERS, MIN_PLAYERS};
use crate::ui::app::{big_button, UiState};

pub fn draw_setup(ui: &mut egui::Ui, state: &mut UiState) -> Option<Action> {
    let mut action = None;
    let form = &mut state.form;

    ui.vertical_centered(|ui| {
        ui.heading("Insider");
        ui.label("Set up the game, then pass the device to the master.");
    });
    ui.add_space(8.0);

    /* -------- Player count -------- */

    let mut count = form.player_count;
    egui::ComboBox::from_label("Players")
        .selected_text(format!("{count} players"))
        .show_ui(ui, |ui| {
            for n in MIN_PLAYERS..=MAX_PLAYERS {
                ui.selectable_value(&mut count, n, format!("{n} players"));
            }
        });
    if count != form.player_count {
        form.set_player_count(count);
    }

    /* -------- Time & questions -------- */

    ui.horizontal(|ui| {
        ui.label("Discussion (minutes)");
        let mut minutes = form.game_minutes();
        if ui.add(egui::DragValue::new(&mut minutes).range(1..=60)).changed() {
            form.set_game_minutes(minutes);
        }

        ui.separator();
        ui.label("Questions");
        ui.add(egui::DragValue::new(&mut form.question_limit).range(1..=99));
    });

    /* -------- Names -------- */

    ui.add_space(8.0);
    ui.strong("Player names");
    egui::Grid::new("player_names").num_columns(2).show(ui, |ui| {
        for (i, name) in form.player_names.iter_mut().enumerate() {
            ui.add(egui::TextEdit::singleline(name).hint_text(default_player_name(i)));
            if i % 2 == 1 {
                ui.end_row();
            }
        }
    });

    /* -------- Master -------- */

    ui.add_space(8.0);
    ui.strong("Master");
    ui.horizontal(|ui| {
        ui.selectable_value(&mut form.master_selection, MasterSelection::Random, "Random");
        ui.selectable_value(&mut form.master_selection, MasterSelection::Manual, "Choose");
    });

    if form.master_selection == MasterSelection::Manual {
        let names = form.resolved_names();
        let mut master = form.manual_master_id;

        egui::ComboBox::from_label("Master player")
            .selected_text(names.get(master).cloned().unwrap_or_default())
            .show_ui(ui, |ui| {
                for (i, name) in names.iter().enumerate() {
                    ui.selectable_value(&mut master, i, name);
                }
            });
        form.manual_master_id = master;
    }

    ui.add_space(16.0);
    if big_button(ui, "Start game", true) {
        action = Some(Action::SubmitSettings(form.clone()));
    }
    ui.vertical_centered(|ui| {
        if ui.link("How to play").clicked() {
            action = Some(Action::ShowRules);
        }
    });

    action
}

const RULES: &[(&str, &str)] = &[
    (
        "Roles",
        "One player is the Master, who picks a secret topic and answers questions. \
         Among the others hides one Pathfinder, who also knows the topic and quietly \
         steers the group toward it, and one Saboteur, who knows the topic too but \
         wants it to stay secret. Everyone else is a Seeker.",
    ),
    (
        "Reveal",
        "The Master enters the topic, sees their own role, then passes the device \
         around. Each player privately checks their role; only the Pathfinder and \
         the Saboteur see the topic.",
    ),
    (
        "Discussion",
        "Ask the Master yes/no questions. The Master records each answer as O (yes), \
         X (no) or ? (unknown) against the player who asked. The discussion ends \
         when time runs out, the questions run out, or someone guesses the topic.",
    ),
    (
        "Vote",
        "If the topic was guessed, vote on who the Pathfinder is; the Saboteur is \
         not on the ballot. Unmask the Pathfinder and the Seekers win. Otherwise, \
         vote on who the Saboteur is; catch them and the Seekers win.",
    ),
];

pub fn draw_rules(ui: &mut egui::Ui) -> Option<Action> {
    ui.heading("How to play");
    ui.add_space(8.0);

    for (title, body) in RULES {
        ui.strong(*title);
        ui.label(*body);
        ui.add_space(8.0);
    }

    big_button(ui, "Back to setup", true).then_some(Action::CloseRules)
}
