use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::engine::machine::{Action, GameMachine};
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::timer::Ticker;
use crate::model::action_result::{ActionOutcome, TimerEffect};
use crate::model::phase::TickToken;

/// Single mutator of the game. UI actions and timer ticks arrive on the
/// same channel and are applied one at a time.
pub struct Engine<R> {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    /// Handed to the ticker so ticks queue behind UI commands
    loopback: Sender<EngineCommand>,

    machine: GameMachine<R>,
    ticker: Option<Ticker>,
    tick_interval: Duration,
}

impl<R: Rng> Engine<R> {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        loopback: Sender<EngineCommand>,
        machine: GameMachine<R>,
        tick_interval: Duration,
    ) -> Self {
        Self {
            rx,
            tx,
            loopback,
            machine,
            ticker: None,
            tick_interval,
        }
    }

    pub fn run(&mut self) {
        self.publish();

        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Act(action) => self.handle(action),
                EngineCommand::Shutdown => break,
            }
        }

        self.stop_timer();
        info!("engine stopped");
    }

    fn handle(&mut self, action: Action) {
        let name = action.name();

        match self.machine.apply(action) {
            ActionOutcome::Applied(effect) => self.run_effect(effect),
            ActionOutcome::Rejected { reason } => {
                let _ = self.tx.send(EngineResponse::Rejected { action: name, reason });
            }
            ActionOutcome::Ignored { .. } => return,
        }

        self.publish();
    }

    fn run_effect(&mut self, effect: TimerEffect) {
        match effect {
            TimerEffect::None => {}
            TimerEffect::Start(token) => self.start_timer(token),
            TimerEffect::Stop => self.stop_timer(),
        }
    }

    fn start_timer(&mut self, token: TickToken) {
        self.stop_timer();

        let tx = self.loopback.clone();
        self.ticker = Some(Ticker::spawn(self.tick_interval, move || {
            tx.send(EngineCommand::Act(Action::Tick(token))).is_ok()
        }));
        debug!(?token, "discussion timer started");
    }

    fn stop_timer(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
            debug!("discussion timer stopped");
        }
    }

    fn publish(&self) {
        let _ = self.tx.send(EngineResponse::Snapshot(self.machine.snapshot()));
    }
}

/// Spawn the engine thread. Returns the command sender, the response
/// receiver and the thread handle.
pub fn spawn_engine<R>(
    machine: GameMachine<R>,
    tick_interval: Duration,
) -> (Sender<EngineCommand>, Receiver<EngineResponse>, JoinHandle<()>)
where
    R: Rng + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let loopback = cmd_tx.clone();

    let handle = std::thread::spawn(move || {
        let mut engine = Engine::new(cmd_rx, resp_tx, loopback, machine, tick_interval);
        engine.run();
    });

    (cmd_tx, resp_rx, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::game_state::GameSnapshot;
    use crate::model::phase::{EndReason, Phase};
    use crate::model::settings::GameSettings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const WAIT: Duration = Duration::from_secs(5);

    fn next_snapshot(rx: &Receiver<EngineResponse>) -> GameSnapshot {
        loop {
            match rx.recv_timeout(WAIT).expect("engine response") {
                EngineResponse::Snapshot(snap) => return snap,
                EngineResponse::Rejected { .. } => continue,
            }
        }
    }

    fn wait_for_phase(rx: &Receiver<EngineResponse>, wanted: fn(&Phase) -> bool) -> GameSnapshot {
        loop {
            let snap = next_snapshot(rx);
            if wanted(&snap.phase) {
                return snap;
            }
        }
    }

    fn start(settings: GameSettings) -> (Sender<EngineCommand>, Receiver<EngineResponse>, JoinHandle<()>) {
        let machine = GameMachine::new(settings, StdRng::seed_from_u64(5));
        spawn_engine(machine, Duration::from_millis(5))
    }

    fn drive_to_discussion(tx: &Sender<EngineCommand>, settings: &GameSettings) {
        let act = |a| tx.send(EngineCommand::Act(a)).unwrap();
        act(Action::SubmitSettings(settings.clone()));
        act(Action::Advance);
        act(Action::SubmitTopic("lighthouse".into()));
        act(Action::Advance);
        for _ in 0..settings.player_count - 1 {
            act(Action::AcknowledgeReceipt);
            act(Action::ConfirmRole);
        }
        act(Action::Advance);
    }

    #[test]
    fn publishes_initial_snapshot() {
        let (tx, rx, handle) = start(GameSettings::default());

        assert_eq!(next_snapshot(&rx).phase, Phase::Setup);

        tx.send(EngineCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn timer_runs_discussion_out_to_vote() {
        let settings = GameSettings {
            game_time: 3,
            ..Default::default()
        };
        let (tx, rx, handle) = start(settings.clone());

        drive_to_discussion(&tx, &settings);
        let snap = wait_for_phase(&rx, |p| *p == Phase::Vote);

        assert_eq!(snap.ended_by, Some(EndReason::TimeUp));
        assert_eq!(snap.time_left, 0);

        tx.send(EngineCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn solved_stops_the_timer() {
        let settings = GameSettings {
            game_time: 600,
            ..Default::default()
        };
        let (tx, rx, handle) = start(settings.clone());

        drive_to_discussion(&tx, &settings);
        wait_for_phase(&rx, Phase::is_discussion);
        tx.send(EngineCommand::Act(Action::DeclareSolved)).unwrap();
        let voted = wait_for_phase(&rx, |p| *p == Phase::Vote);

        std::thread::sleep(Duration::from_millis(50));
        // Ignored ticks publish nothing
        assert!(rx.try_recv().is_err());
        assert_eq!(voted.ended_by, Some(EndReason::Solved));

        tx.send(EngineCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn rejected_actions_are_reported() {
        let (tx, rx, handle) = start(GameSettings::default());
        next_snapshot(&rx);

        tx.send(EngineCommand::Act(Action::DeclareSolved)).unwrap();

        match rx.recv_timeout(WAIT).unwrap() {
            EngineResponse::Rejected { action, .. } => assert_eq!(action, "declare_solved"),
            EngineResponse::Snapshot(_) => panic!("expected a rejection first"),
        }

        tx.send(EngineCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }
}
