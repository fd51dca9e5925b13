use serde::{Deserialize, Serialize};

pub const MIN_PLAYERS: usize = 4;
pub const MAX_PLAYERS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasterSelection {
    Random,
    Manual,
}

/// Setup form values. Survives restarts and is persisted as the default
/// for the next game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub player_count: usize,

    /// Discussion length in seconds
    pub game_time: u32,
    pub question_limit: u32,

    pub master_selection: MasterSelection,
    pub manual_master_id: usize,

    pub player_names: Vec<String>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            game_time: 300,
            question_limit: 15,
            master_selection: MasterSelection::Random,
            manual_master_id: 0,
            player_names: vec![String::new(); MIN_PLAYERS],
        }
    }
}

pub fn default_player_name(index: usize) -> String {
    format!("Player {}", index + 1)
}

impl GameSettings {
    /// Resize the name list, keeping names already typed. A manual master
    /// index that no longer exists falls back to the first player.
    pub fn set_player_count(&mut self, count: usize) {
        let count = count.clamp(MIN_PLAYERS, MAX_PLAYERS);

        self.player_count = count;
        self.player_names.resize(count, String::new());

        if self.manual_master_id >= count {
            self.manual_master_id = 0;
        }
    }

    pub fn game_minutes(&self) -> u32 {
        self.game_time / 60
    }

    pub fn set_game_minutes(&mut self, minutes: u32) {
        self.game_time = minutes.max(1) * 60;
    }

    pub fn display_name(&self, index: usize) -> String {
        match self.player_names.get(index).map(|n| n.trim()) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default_player_name(index),
        }
    }

    pub fn resolved_names(&self) -> Vec<String> {
        (0..self.player_count).map(|i| self.display_name(i)).collect()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(format!(
                "Player count must be between {} and {} (got {})",
                MIN_PLAYERS, MAX_PLAYERS, self.player_count
            ));
        }
        if self.player_names.len() != self.player_count {
            return Err(format!(
                "Expected {} player names, got {}",
                self.player_count,
                self.player_names.len()
            ));
        }
        if self.game_time == 0 {
            return Err("Game time must be greater than zero".to_string());
        }
        if self.question_limit == 0 {
            return Err("Question limit must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Repair values loaded from disk so they satisfy `validate`.
    pub fn normalized(mut self) -> Self {
        self.set_player_count(self.player_count);
        if self.game_time == 0 {
            self.game_time = Self::default().game_time;
        }
        if self.question_limit == 0 {
            self.question_limit = Self::default().question_limit;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrinking_player_count_resets_manual_master() {
        let mut settings = GameSettings {
            master_selection: MasterSelection::Manual,
            ..Default::default()
        };
        settings.set_player_count(8);
        settings.manual_master_id = 6;

        settings.set_player_count(5);

        assert_eq!(settings.manual_master_id, 0);
        assert_eq!(settings.player_names.len(), 5);
    }

    #[test]
    fn growing_player_count_keeps_typed_names() {
        let mut settings = GameSettings::default();
        settings.player_names[1] = "Bea".into();

        settings.set_player_count(6);

        assert_eq!(settings.player_names.len(), 6);
        assert_eq!(settings.player_names[1], "Bea");
        assert_eq!(settings.player_names[5], "");
    }

    #[test]
    fn blank_names_get_default_labels() {
        let mut settings = GameSettings::default();
        settings.player_names = vec!["A".into(), "  ".into(), "".into(), "D".into()];

        assert_eq!(
            settings.resolved_names(),
            vec!["A", "Player 2", "Player 3", "D"]
        );
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let mut settings = GameSettings::default();
        assert!(settings.validate().is_ok());

        settings.question_limit = 0;
        assert!(settings.validate().is_err());

        let mut settings = GameSettings::default();
        settings.player_count = 9;
        settings.player_names.resize(9, String::new());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn normalized_repairs_mismatched_name_list() {
        let settings = GameSettings {
            player_count: 6,
            player_names: vec!["A".into()],
            game_time: 0,
            ..Default::default()
        }
        .normalized();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.player_names[0], "A");
        assert_eq!(settings.game_time, 300);
    }

    #[test]
    fn minutes_are_stored_as_seconds() {
        let mut settings = GameSettings::default();
        settings.set_game_minutes(3);
        assert_eq!(settings.game_time, 180);
        assert_eq!(settings.game_minutes(), 3);

        settings.set_game_minutes(0);
        assert_eq!(settings.game_time, 60);
    }
}
