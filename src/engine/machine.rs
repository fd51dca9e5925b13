use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::engine::roles::assign_roles;
use crate::engine::vote::{resolve_vote, vote_candidates};
use crate::model::action_result::{ActionOutcome, TimerEffect};
use crate::model::discussion::{DiscussionLogEntry, Mark};
use crate::model::game_state::GameSnapshot;
use crate::model::phase::{EndReason, Phase, TickToken};
use crate::model::player::{Player, PlayerId};
use crate::model::settings::GameSettings;

/// Everything a player (or the ticker) can do to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SubmitSettings(GameSettings),
    ShowRules,
    CloseRules,
    /// Generic "next" button on the single-button screens
    Advance,
    SubmitTopic(String),
    AcknowledgeReceipt,
    ConfirmRole,
    LogMark { player_id: PlayerId, mark: Mark },
    DeclareSolved,
    Tick(TickToken),
    SubmitVote(Option<PlayerId>),
    Restart,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SubmitSettings(_) => "submit_settings",
            Action::ShowRules => "show_rules",
            Action::CloseRules => "close_rules",
            Action::Advance => "advance",
            Action::SubmitTopic(_) => "submit_topic",
            Action::AcknowledgeReceipt => "acknowledge_receipt",
            Action::ConfirmRole => "confirm_role",
            Action::LogMark { .. } => "log_mark",
            Action::DeclareSolved => "declare_solved",
            Action::Tick(_) => "tick",
            Action::SubmitVote(_) => "submit_vote",
            Action::Restart => "restart",
        }
    }
}

/// Owns the current phase and every piece of game-scoped data.
pub struct GameMachine<R = StdRng> {
    rng: R,
    settings: GameSettings,
    phase: Phase,

    players: Vec<Player>,
    secret_topic: String,

    time_left: u32,
    questions_left: u32,
    discussion_log: Vec<DiscussionLogEntry>,
    ended_by: Option<EndReason>,
    voted_player_id: Option<PlayerId>,

    next_token: u64,
}

impl<R: Rng> GameMachine<R> {
    pub fn new(settings: GameSettings, rng: R) -> Self {
        Self {
            rng,
            time_left: settings.game_time,
            questions_left: settings.question_limit,
            settings,
            phase: Phase::Setup,
            players: Vec::new(),
            secret_topic: String::new(),
            discussion_log: Vec::new(),
            ended_by: None,
            voted_player_id: None,
            next_token: 0,
        }
    }

    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        let before = self.phase;
        let name = action.name();

        let outcome = self.step(action);

        match &outcome {
            ActionOutcome::Applied(_) if self.phase != before => {
                info!(action = name, from = before.name(), to = self.phase.name(), "phase changed");
            }
            ActionOutcome::Applied(_) => {
                debug!(action = name, phase = self.phase.name(), "action applied");
            }
            ActionOutcome::Rejected { reason } => {
                warn!(action = name, phase = self.phase.name(), %reason, "action rejected");
            }
            ActionOutcome::Ignored { reason } => {
                debug!(action = name, phase = self.phase.name(), %reason, "action ignored");
            }
        }

        outcome
    }

    fn step(&mut self, action: Action) -> ActionOutcome {
        match (self.phase, action) {
            (Phase::Setup, Action::SubmitSettings(settings)) => self.start_game(settings),
            (Phase::Setup, Action::ShowRules) => self.enter(Phase::Rules),
            (Phase::Rules, Action::CloseRules) => self.enter(Phase::Setup),

            (Phase::MasterReveal, Action::Advance) => self.enter(Phase::TopicSetup),
            (Phase::TopicSetup, Action::SubmitTopic(topic)) => self.set_topic(topic),
            (Phase::MasterRoleReveal, Action::Advance) => self.enter(Phase::RoleReveal {
                index: 0,
                visible: false,
            }),

            (Phase::RoleReveal { index, visible: false }, Action::AcknowledgeReceipt) => {
                self.enter(Phase::RoleReveal { index, visible: true })
            }
            (Phase::RoleReveal { index, visible: true }, Action::ConfirmRole) => {
                self.next_reveal(index)
            }

            (Phase::DiscussionPrep, Action::Advance) => self.start_discussion(),
            (Phase::Discussion { .. }, Action::LogMark { player_id, mark }) => {
                self.log_mark(player_id, mark)
            }
            (Phase::Discussion { .. }, Action::DeclareSolved) => {
                self.end_discussion(EndReason::Solved)
            }
            (Phase::Discussion { token }, Action::Tick(tick)) if token == tick => self.tick(),
            (_, Action::Tick(_)) => ActionOutcome::ignored("tick does not belong to a running discussion"),

            (Phase::Vote, Action::SubmitVote(choice)) => self.submit_vote(choice),

            (phase, Action::Restart) if phase.in_game() => self.restart(),

            (phase, action) => ActionOutcome::rejected(format!(
                "{} is not allowed during {}",
                action.name(),
                phase.name()
            )),
        }
    }

    fn enter(&mut self, phase: Phase) -> ActionOutcome {
        self.phase = phase;
        ActionOutcome::applied()
    }

    fn start_game(&mut self, settings: GameSettings) -> ActionOutcome {
        if let Err(reason) = settings.validate() {
            return ActionOutcome::rejected(reason);
        }
        self.settings = settings;

        self.players = assign_roles(&self.settings, &mut self.rng);
        self.secret_topic.clear();
        self.time_left = self.settings.game_time;
        self.questions_left = self.settings.question_limit;
        self.discussion_log.clear();
        self.voted_player_id = None;
        self.ended_by = None;

        self.enter(Phase::MasterReveal)
    }

    fn set_topic(&mut self, topic: String) -> ActionOutcome {
        let topic = topic.trim();
        if topic.is_empty() {
            return ActionOutcome::rejected("The secret topic cannot be empty");
        }

        self.secret_topic = topic.to_string();
        self.enter(Phase::MasterRoleReveal)
    }

    fn next_reveal(&mut self, index: usize) -> ActionOutcome {
        let remaining = self.players.iter().filter(|p| !p.is_master).count();

        if index + 1 < remaining {
            self.enter(Phase::RoleReveal {
                index: index + 1,
                visible: false,
            })
        } else {
            self.enter(Phase::DiscussionPrep)
        }
    }

    fn start_discussion(&mut self) -> ActionOutcome {
        self.next_token += 1;
        let token = TickToken(self.next_token);

        self.phase = Phase::Discussion { token };
        ActionOutcome::Applied(TimerEffect::Start(token))
    }

    fn log_mark(&mut self, player_id: PlayerId, mark: Mark) -> ActionOutcome {
        if self.questions_left == 0 {
            return ActionOutcome::ignored("no questions left");
        }
        if !self.players.iter().any(|p| p.id == player_id) {
            return ActionOutcome::rejected(format!("Unknown player {player_id}"));
        }

        self.discussion_log.push(DiscussionLogEntry { player_id, mark });
        self.questions_left -= 1;
        ActionOutcome::applied()
    }

    /// Time is checked before the question budget.
    fn tick(&mut self) -> ActionOutcome {
        if self.time_left == 0 {
            return self.end_discussion(EndReason::TimeUp);
        }
        if self.questions_left == 0 {
            return self.end_discussion(EndReason::QuestionsUp);
        }

        self.time_left -= 1;
        if self.time_left == 0 {
            return self.end_discussion(EndReason::TimeUp);
        }
        ActionOutcome::applied()
    }

    fn end_discussion(&mut self, reason: EndReason) -> ActionOutcome {
        info!(?reason, time_left = self.time_left, questions_left = self.questions_left, "discussion ended");

        self.ended_by = Some(reason);
        self.phase = Phase::Vote;
        ActionOutcome::Applied(TimerEffect::Stop)
    }

    fn submit_vote(&mut self, choice: Option<PlayerId>) -> ActionOutcome {
        let Some(id) = choice else {
            return ActionOutcome::rejected("Select a player before voting");
        };
        let Some(reason) = self.ended_by else {
            return ActionOutcome::rejected("The discussion has not ended");
        };
        if !vote_candidates(reason, &self.players).contains(&id) {
            return ActionOutcome::rejected(format!("Player {id} cannot be voted for"));
        }

        self.voted_player_id = Some(id);
        self.enter(Phase::Result)
    }

    fn restart(&mut self) -> ActionOutcome {
        let was_discussing = self.phase.is_discussion();

        self.players.clear();
        self.secret_topic.clear();
        self.discussion_log.clear();
        self.voted_player_id = None;
        self.ended_by = None;
        self.time_left = self.settings.game_time;
        self.questions_left = self.settings.question_limit;
        self.phase = Phase::Setup;

        if was_discussing {
            ActionOutcome::Applied(TimerEffect::Stop)
        } else {
            ActionOutcome::applied()
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let candidates = self
            .ended_by
            .map(|reason| vote_candidates(reason, &self.players))
            .unwrap_or_default();

        let verdict = match (self.ended_by, self.voted_player_id) {
            (Some(reason), Some(id)) => resolve_vote(reason, &self.players, id),
            _ => None,
        };

        GameSnapshot {
            phase: self.phase,
            settings: self.settings.clone(),
            players: self.players.clone(),
            secret_topic: self.secret_topic.clone(),
            time_left: self.time_left,
            questions_left: self.questions_left,
            discussion_log: self.discussion_log.clone(),
            ended_by: self.ended_by,
            candidates,
            voted_player_id: self.voted_player_id,
            verdict,
        }
    }
}

// Read access for assertions; the UI only sees snapshots.
#[cfg(test)]
impl<R: Rng> GameMachine<R> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn secret_topic(&self) -> &str {
        &self.secret_topic
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn questions_left(&self) -> u32 {
        self.questions_left
    }

    pub fn discussion_log(&self) -> &[DiscussionLogEntry] {
        &self.discussion_log
    }

    pub fn ended_by(&self) -> Option<EndReason> {
        self.ended_by
    }

    pub fn voted_player_id(&self) -> Option<PlayerId> {
        self.voted_player_id
    }
}
