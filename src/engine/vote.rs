use crate::model::phase::EndReason;
use crate::model::player::{Player, PlayerId, Role};
use crate::model::verdict::{VoteOutcome, Winner};

/// Once the topic is solved the group hunts the Pathfinder, so the
/// Saboteur is not on the ballot. Otherwise everyone is.
pub fn vote_candidates(ended_by: EndReason, players: &[Player]) -> Vec<PlayerId> {
    players
        .iter()
        .filter(|p| ended_by != EndReason::Solved || p.role != Role::Saboteur)
        .map(|p| p.id)
        .collect()
}

pub fn winner_for(ended_by: EndReason, voted_role: Role) -> Winner {
    let target = match ended_by {
        EndReason::Solved => Role::Pathfinder,
        EndReason::TimeUp | EndReason::QuestionsUp => Role::Saboteur,
    };

    if voted_role == target {
        Winner::Seekers
    } else {
        Winner::Saboteur
    }
}

fn message_for(ended_by: EndReason, winner: Winner) -> &'static str {
    match (ended_by, winner) {
        (EndReason::Solved, Winner::Seekers) => {
            "The Pathfinder was unmasked. The Seekers found the topic and its guide."
        }
        (EndReason::Solved, Winner::Saboteur) => {
            "The Pathfinder stayed hidden. The Saboteur's side takes the game."
        }
        (_, Winner::Seekers) => "The Saboteur was caught red-handed.",
        (_, Winner::Saboteur) => "The topic stayed secret and the Saboteur slipped away.",
    }
}

/// `None` when the vote does not reference a known player.
pub fn resolve_vote(
    ended_by: EndReason,
    players: &[Player],
    voted_player_id: PlayerId,
) -> Option<VoteOutcome> {
    let voted = players.iter().find(|p| p.id == voted_player_id)?;
    let winner = winner_for(ended_by, voted.role);

    Some(VoteOutcome {
        winner,
        label: winner.label().to_string(),
        message: message_for(ended_by, winner).to_string(),
        voted_player_id,
    })
}

/// Heading for the vote screen.
pub fn vote_title(ended_by: EndReason, players: &[Player]) -> String {
    match ended_by {
        EndReason::Solved => {
            let saboteur = players
                .iter()
                .find(|p| p.role == Role::Saboteur)
                .map(|p| p.name.as_str())
                .unwrap_or("The Saboteur");
            format!("Topic solved! {saboteur}, who do you think is the Pathfinder?")
        }
        EndReason::TimeUp => "Time's up! Vote for the player you think is the Saboteur".into(),
        EndReason::QuestionsUp => {
            "Out of questions! Vote for the player you think is the Saboteur".into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> Vec<Player> {
        vec![
            Player { id: 0, name: "A".into(), role: Role::Seeker, is_master: false },
            Player { id: 1, name: "B".into(), role: Role::Pathfinder, is_master: true },
            Player { id: 2, name: "C".into(), role: Role::Saboteur, is_master: false },
            Player { id: 3, name: "D".into(), role: Role::Seeker, is_master: false },
        ]
    }

    #[test]
    fn solved_vote_excludes_saboteur() {
        assert_eq!(vote_candidates(EndReason::Solved, &players()), vec![0, 1, 3]);
    }

    #[test]
    fn unsolved_vote_includes_everyone() {
        assert_eq!(vote_candidates(EndReason::TimeUp, &players()), vec![0, 1, 2, 3]);
        assert_eq!(vote_candidates(EndReason::QuestionsUp, &players()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn solved_and_pathfinder_found_is_seeker_win() {
        let outcome = resolve_vote(EndReason::Solved, &players(), 1).unwrap();
        assert_eq!(outcome.winner, Winner::Seekers);
        assert_eq!(outcome.voted_player_id, 1);
    }

    #[test]
    fn solved_and_wrong_pick_is_saboteur_win() {
        for id in [0, 2, 3] {
            let outcome = resolve_vote(EndReason::Solved, &players(), id).unwrap();
            assert_eq!(outcome.winner, Winner::Saboteur, "voted {id}");
        }
    }

    #[test]
    fn unsolved_catching_saboteur_is_seeker_win() {
        for reason in [EndReason::TimeUp, EndReason::QuestionsUp] {
            assert_eq!(winner_for(reason, Role::Saboteur), Winner::Seekers);
            assert_eq!(winner_for(reason, Role::Pathfinder), Winner::Saboteur);
            assert_eq!(winner_for(reason, Role::Seeker), Winner::Saboteur);
        }
    }

    #[test]
    fn unknown_player_has_no_outcome() {
        assert!(resolve_vote(EndReason::TimeUp, &players(), 9).is_none());
    }

    #[test]
    fn solved_title_names_the_saboteur() {
        assert!(vote_title(EndReason::Solved, &players()).contains("C, who"));
    }
}
