use serde::{Deserialize, Serialize};

pub type PlayerId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Saboteur,
    /// Also called the Insider
    Pathfinder,
    Seeker,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Saboteur => "Saboteur",
            Role::Pathfinder => "Pathfinder",
            Role::Seeker => "Seeker",
        }
    }

    /// Roles shown the secret topic during their reveal.
    pub fn knows_topic(&self) -> bool {
        matches!(self, Role::Saboteur | Role::Pathfinder)
    }

    /// Key into `UiSettings::reveal_colors`.
    pub fn color_key(&self) -> &'static str {
        match self {
            Role::Saboteur => "saboteur",
            Role::Pathfinder => "pathfinder",
            Role::Seeker => "seeker",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    pub is_master: bool,
}

impl Player {
    /// Name with the master marker used in discussion and vote lists.
    pub fn list_label(&self) -> String {
        if self.is_master {
            format!("{} (M)", self.name)
        } else {
            self.name.clone()
        }
    }
}
