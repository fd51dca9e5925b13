use rand::Rng;

use crate::model::player::{Player, PlayerId, Role};
use crate::model::settings::{GameSettings, MasterSelection};

/// One Saboteur, one Pathfinder, everyone else a Seeker.
pub fn role_pool(player_count: usize) -> Vec<Role> {
    let mut roles = vec![Role::Saboteur, Role::Pathfinder];
    roles.extend(std::iter::repeat(Role::Seeker).take(player_count.saturating_sub(2)));
    roles
}

/// Fisher–Yates, walking from the last slot down.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

pub fn pick_master<R: Rng + ?Sized>(settings: &GameSettings, rng: &mut R) -> PlayerId {
    match settings.master_selection {
        MasterSelection::Random => rng.gen_range(0..settings.player_count),
        MasterSelection::Manual if settings.manual_master_id < settings.player_count => {
            settings.manual_master_id
        }
        MasterSelection::Manual => 0,
    }
}

/// Build the player list for a new game. Roles are shuffled, not players,
/// so seat order always matches the name order from setup.
pub fn assign_roles<R: Rng + ?Sized>(settings: &GameSettings, rng: &mut R) -> Vec<Player> {
    let names = settings.resolved_names();

    let mut roles = role_pool(settings.player_count);
    shuffle(&mut roles, rng);

    let master_id = pick_master(settings, rng);

    names
        .into_iter()
        .zip(roles)
        .enumerate()
        .map(|(id, (name, role))| Player {
            id,
            name,
            role,
            is_master: id == master_id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings_for(count: usize) -> GameSettings {
        let mut settings = GameSettings::default();
        settings.set_player_count(count);
        settings
    }

    #[test]
    fn every_player_count_gets_one_saboteur_one_pathfinder_one_master() {
        let mut rng = StdRng::seed_from_u64(7);

        for count in 4..=8 {
            for _ in 0..50 {
                let players = assign_roles(&settings_for(count), &mut rng);

                assert_eq!(players.len(), count);
                let count_of = |role: Role| players.iter().filter(|p| p.role == role).count();
                assert_eq!(count_of(Role::Saboteur), 1);
                assert_eq!(count_of(Role::Pathfinder), 1);
                assert_eq!(count_of(Role::Seeker), count - 2);
                assert_eq!(players.iter().filter(|p| p.is_master).count(), 1);
            }
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut items: Vec<u32> = (0..8).collect();

        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let settings = settings_for(6);

        let first = assign_roles(&settings, &mut StdRng::seed_from_u64(42));
        let second = assign_roles(&settings, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_reaches_every_seat() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut saboteur_seats = [0u32; 4];

        for _ in 0..400 {
            let players = assign_roles(&settings_for(4), &mut rng);
            let seat = players.iter().position(|p| p.role == Role::Saboteur).unwrap();
            saboteur_seats[seat] += 1;
        }

        assert!(saboteur_seats.iter().all(|&n| n > 0), "{:?}", saboteur_seats);
    }

    #[test]
    fn manual_master_uses_configured_index() {
        let mut settings = settings_for(4);
        settings.master_selection = MasterSelection::Manual;
        settings.manual_master_id = 1;
        settings.player_names = vec!["A".into(), "B".into(), "C".into(), "D".into()];

        let players = assign_roles(&settings, &mut StdRng::seed_from_u64(1));

        let master = players.iter().find(|p| p.is_master).unwrap();
        assert_eq!(master.name, "B");
    }

    #[test]
    fn out_of_range_manual_master_falls_back_to_first_player() {
        let mut settings = settings_for(4);
        settings.master_selection = MasterSelection::Manual;
        settings.manual_master_id = 12;

        assert_eq!(pick_master(&settings, &mut StdRng::seed_from_u64(1)), 0);
    }

    #[test]
    fn blank_names_become_default_labels() {
        let players = assign_roles(&settings_for(4), &mut StdRng::seed_from_u64(5));

        let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Player 1", "Player 2", "Player 3", "Player 4"]);
    }
}
