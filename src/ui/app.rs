use eframe::egui;
use rand::rngs::StdRng;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{error, info};

use crate::engine::engine::spawn_engine;
use crate::engine::machine::{Action, GameMachine};
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::timer::TICK_INTERVAL;
use crate::model::game_state::GameSnapshot;
use crate::model::phase::Phase;
use crate::model::player::{PlayerId, Role};
use crate::model::settings::GameSettings;
use crate::ui::settings::{UiSettings, ACCENT_KEY};
use crate::ui::settings_io::save_settings;
use crate::ui::{discussion_panel, reveal_panel, setup_panel, vote_panel};

/* =========================
   UI State
   ========================= */

/// Input that lives only in the UI until it is submitted.
#[derive(Default)]
pub struct UiState {
    pub form: GameSettings,
    pub topic_input: String,
    pub vote_selection: Option<PlayerId>,

    /// Last rejection from the engine, cleared on the next phase change
    pub notice: Option<String>,

    pub show_appearance_window: bool,
    pub appearance_dirty: bool,
}

/* =========================
   App
   ========================= */

pub struct InsiderApp {
    ui: UiState,
    settings: UiSettings,
    snapshot: Option<GameSnapshot>,

    cmd_tx: Sender<EngineCommand>,
    resp_rx: Receiver<EngineResponse>,
    engine_thread: Option<JoinHandle<()>>,
}

impl InsiderApp {
    pub fn new(settings: UiSettings, rng: StdRng) -> Self {
        let machine = GameMachine::new(settings.last_game.clone(), rng);
        let (cmd_tx, resp_rx, handle) = spawn_engine(machine, TICK_INTERVAL);

        Self {
            ui: UiState {
                form: settings.last_game.clone(),
                ..Default::default()
            },
            settings,
            snapshot: None,
            cmd_tx,
            resp_rx,
            engine_thread: Some(handle),
        }
    }

    fn send_command(&self, action: Action) {
        if self.cmd_tx.send(EngineCommand::Act(action)).is_err() {
            error!("engine thread is gone; action dropped");
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.send_command(action);
    }

    fn on_snapshot(&mut self, snap: GameSnapshot) {
        if let Some(accepted) = started_with(self.snapshot.as_ref(), &snap) {
            if self.settings.last_game != *accepted {
                self.settings.last_game = accepted.clone();
                save_settings(&self.settings);
            }
        }

        let phase_changed = self
            .snapshot
            .as_ref()
            .map_or(true, |old| old.phase.name() != snap.phase.name());

        if phase_changed {
            self.ui.notice = None;

            match snap.phase {
                Phase::Setup => {
                    self.ui.form = snap.settings.clone();
                    self.ui.topic_input.clear();
                }
                Phase::Vote => self.ui.vote_selection = None,
                _ => {}
            }
        }

        self.snapshot = Some(snap);
    }
}

/// Settings the engine accepted for a new game, seen on the first snapshot
/// past setup. A rejected form never reaches `MasterReveal`.
fn started_with<'a>(
    previous: Option<&GameSnapshot>,
    next: &'a GameSnapshot,
) -> Option<&'a GameSettings> {
    let entered = next.phase == Phase::MasterReveal
        && previous.map_or(true, |old| old.phase != Phase::MasterReveal);
    entered.then_some(&next.settings)
}

impl Drop for InsiderApp {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
        if let Some(handle) = self.engine_thread.take() {
            let _ = handle.join();
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for InsiderApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::Snapshot(snap) => self.on_snapshot(snap),
                EngineResponse::Rejected { action, reason } => {
                    info!(action, %reason, "showing rejection");
                    self.ui.notice = Some(reason);
                }
            }
        }

        let mut action: Option<Action> = None;

        /* TOP BAR */
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Insider");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙").on_hover_text("Appearance").clicked() {
                        self.ui.show_appearance_window = !self.ui.show_appearance_window;
                    }

                    let abandonable = self
                        .snapshot
                        .as_ref()
                        .is_some_and(|s| s.phase.in_game() && s.phase != Phase::Result);
                    if abandonable && ui.small_button("Abandon game").clicked() {
                        action = Some(Action::Restart);
                    }
                });
            });
        });

        if self.ui.show_appearance_window {
            self.draw_appearance_window(ctx);
        }
        if !self.ui.show_appearance_window && self.ui.appearance_dirty {
            save_settings(&self.settings);
            self.ui.appearance_dirty = false;
        }

        /* CENTER */
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(notice) = &self.ui.notice {
                ui.colored_label(egui::Color32::LIGHT_RED, notice);
                ui.separator();
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                let drawn = match self.snapshot.as_ref() {
                    Some(snap) => draw_phase(ui, snap, &mut self.ui, &self.settings),
                    None => {
                        ui.vertical_centered(|ui| {
                            ui.spinner();
                            ui.label("Loading…");
                        });
                        None
                    }
                };
                if drawn.is_some() {
                    action = drawn;
                }
            });
        });

        if let Some(action) = action {
            self.dispatch(action);
        }

        // Keep the countdown moving without input
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}

impl InsiderApp {
    fn draw_appearance_window(&mut self, ctx: &egui::Context) {
        let settings = &mut self.settings;
        let dirty = &mut self.ui.appearance_dirty;

        egui::Window::new("Appearance")
            .open(&mut self.ui.show_appearance_window)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("UI Scale");
                if ui.add(egui::Slider::new(&mut settings.ui_scale, 0.75..=2.0)).changed() {
                    *dirty = true;
                }

                ui.separator();
                ui.label("Colors");
                let roles = [Role::Saboteur, Role::Pathfinder, Role::Seeker]
                    .map(|role| (role.color_key(), role.label()));
                for (key, label) in roles.into_iter().chain([(ACCENT_KEY, "Highlights")]) {
                    ui.horizontal(|ui| {
                        let mut color = settings.color(key);
                        if ui.color_edit_button_srgba(&mut color).changed() {
                            settings.set_color(key, color);
                            *dirty = true;
                        }
                        ui.label(label);
                    });
                }
            });
    }
}

fn draw_phase(
    ui: &mut egui::Ui,
    snap: &GameSnapshot,
    state: &mut UiState,
    settings: &UiSettings,
) -> Option<Action> {
    match snap.phase {
        Phase::Setup => setup_panel::draw_setup(ui, state),
        Phase::Rules => setup_panel::draw_rules(ui),
        Phase::MasterReveal => reveal_panel::draw_master_reveal(ui, snap, settings),
        Phase::TopicSetup => reveal_panel::draw_topic_setup(ui, snap, state),
        Phase::MasterRoleReveal => reveal_panel::draw_master_role_reveal(ui, snap, settings),
        Phase::RoleReveal { visible, .. } => {
            reveal_panel::draw_role_reveal(ui, snap, visible, settings)
        }
        Phase::DiscussionPrep => reveal_panel::draw_discussion_prep(ui),
        Phase::Discussion { .. } => discussion_panel::draw_discussion(ui, snap, settings),
        Phase::Vote => vote_panel::draw_vote(ui, snap, state),
        Phase::Result => vote_panel::draw_result(ui, snap, settings),
    }
}

/* =========================
   UI Helpers
   ========================= */

/// Full-width primary button used by every screen.
pub fn big_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> bool {
    let width = ui.available_width().min(360.0);
    ui.vertical_centered(|ui| {
        ui.add_enabled(
            enabled,
            egui::Button::new(egui::RichText::new(text).size(18.0).strong())
                .min_size(egui::vec2(width, 44.0)),
        )
        .clicked()
    })
    .inner
}

pub fn bubble(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(8)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::WHITE));
        });
}

/// Large centered headline, as used on the pass-the-device screens.
pub fn headline(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(text).size(36.0).strong().color(color));
    });
}

/// Placeholder for a phase whose data has not arrived yet.
pub fn placeholder(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.spinner();
        ui.label(text);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn named_settings() -> GameSettings {
        GameSettings {
            player_names: vec!["Ann".into(), "Ben".into(), "Cat".into(), "Dan".into()],
            ..Default::default()
        }
    }

    #[test]
    fn rejected_form_is_not_kept_as_default() {
        let mut game = GameMachine::new(GameSettings::default(), StdRng::seed_from_u64(3));
        let before = game.snapshot();

        let bad = GameSettings {
            player_count: 2,
            ..named_settings()
        };
        assert!(!game.apply(Action::SubmitSettings(bad)).is_applied());
        let after = game.snapshot();

        assert_eq!(after.phase, Phase::Setup);
        assert_eq!(started_with(Some(&before), &after), None);
    }

    #[test]
    fn accepted_form_is_kept_once_the_game_starts() {
        let mut game = GameMachine::new(GameSettings::default(), StdRng::seed_from_u64(3));
        let setup = game.snapshot();

        assert!(game.apply(Action::SubmitSettings(named_settings())).is_applied());
        let started = game.snapshot();

        assert_eq!(started_with(Some(&setup), &started), Some(&named_settings()));
        // Later snapshots of the same phase do not persist again
        assert_eq!(started_with(Some(&started), &started), None);

        assert!(game.apply(Action::Advance).is_applied());
        assert_eq!(started_with(Some(&started), &game.snapshot()), None);
    }
}
