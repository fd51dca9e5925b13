use eframe::egui;

use crate::engine::machine::Action;
use crate::model::game_state::GameSnapshot;
use crate::ui::app::{big_button, headline, placeholder, UiState};
use crate::ui::settings::UiSettings;

pub fn draw_master_reveal(
    ui: &mut egui::Ui,
    snap: &GameSnapshot,
    settings: &UiSettings,
) -> Option<Action> {
    let Some(master) = snap.master() else {
        placeholder(ui, "Choosing the master…");
        return None;
    };

    ui.add_space(40.0);
    ui.vertical_centered(|ui| ui.label("This round's master is…"));
    headline(ui, &master.name, settings.accent());
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label("Master, take the device and choose the secret topic.")
    });
    ui.add_space(24.0);

    big_button(ui, "Enter topic", true).then_some(Action::Advance)
}

pub fn draw_topic_setup(
    ui: &mut egui::Ui,
    snap: &GameSnapshot,
    state: &mut UiState,
) -> Option<Action> {
    let master = snap.master().map(|p| p.name.as_str()).unwrap_or("Master");

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.heading(format!("{master}, enter the secret topic"));
        ui.add_space(12.0);
        ui.add(
            egui::TextEdit::singleline(&mut state.topic_input)
                .hint_text("e.g. apple")
                .font(egui::TextStyle::Heading)
                .horizontal_align(egui::Align::Center),
        );
    });
    ui.add_space(24.0);

    let ready = !state.topic_input.trim().is_empty();
    big_button(ui, "Lock in topic", ready).then(|| Action::SubmitTopic(state.topic_input.clone()))
}

pub fn draw_master_role_reveal(
    ui: &mut egui::Ui,
    snap: &GameSnapshot,
    settings: &UiSettings,
) -> Option<Action> {
    let Some(master) = snap.master() else {
        placeholder(ui, "Loading…");
        return None;
    };

    ui.add_space(40.0);
    ui.vertical_centered(|ui| ui.label(format!("{}'s role is…", master.name)));
    headline(ui, master.role.label(), settings.role_color(master.role));
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label("Check it, press Next, and pass the device to the next player.")
    });
    ui.add_space(24.0);

    big_button(ui, "Next", true).then_some(Action::Advance)
}

pub fn draw_role_reveal(
    ui: &mut egui::Ui,
    snap: &GameSnapshot,
    visible: bool,
    settings: &UiSettings,
) -> Option<Action> {
    let Some(player) = snap.reveal_target() else {
        placeholder(ui, "Loading…");
        return None;
    };

    ui.add_space(40.0);

    if !visible {
        ui.vertical_centered(|ui| ui.label("Next up"));
        headline(ui, &player.name, settings.accent());
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label("Once you are holding the device, press the button to see your role.")
        });
        ui.add_space(24.0);

        return big_button(ui, "I have the device", true).then_some(Action::AcknowledgeReceipt);
    }

    ui.vertical_centered(|ui| ui.label(format!("{}'s role is…", player.name)));
    headline(ui, player.role.label(), settings.role_color(player.role));
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            ui.label("The topic is");
            ui.strong(format!("\"{}\"", snap.topic_for(player)));
        });
        ui.label("Remember it, then pass the device on.");
    });
    ui.add_space(24.0);

    big_button(ui, "Got it", true).then_some(Action::ConfirmRole)
}

pub fn draw_discussion_prep(ui: &mut egui::Ui) -> Option<Action> {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.heading("Everyone has seen their role");
        ui.add_space(12.0);
        ui.label("Hand the device back to the master and start the discussion.");
    });
    ui.add_space(24.0);

    big_button(ui, "Start discussion", true).then_some(Action::Advance)
}
