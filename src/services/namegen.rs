use rand::Rng;

use crate::models::GameOption;

/// Produces a team-name suggestion for the given game.
///
/// The hosted text-generation service the web form called is an external
/// collaborator; this trait is the seam for it. The local implementation
/// below is the offline stand-in.
pub trait NameSuggester: Send + Sync {
    fn suggest(&self, game: &str) -> String;
}

const ADJECTIVES: [&str; 12] = [
    "Shadow", "Crimson", "Silent", "Iron", "Phantom", "Savage", "Rogue", "Venom", "Apex",
    "Midnight", "Feral", "Stellar",
];

const NOUNS: [&str; 12] = [
    "Hunters", "Wolves", "Reapers", "Titans", "Vipers", "Ravens", "Spectres", "Outlaws",
    "Legion", "Strikers", "Sentinels", "Raiders",
];

const FREE_FIRE_NOUNS: [&str; 3] = ["Squad", "Booyah", "Frontline"];
const TACTICAL_NOUNS: [&str; 3] = ["Aces", "Clutch", "Headshots"];

/// Word-combining suggester, no network involved.
pub struct LocalNameSuggester;

impl NameSuggester for LocalNameSuggester {
    fn suggest(&self, game: &str) -> String {
        let mut rng = rand::thread_rng();

        let nouns: &[&str] = match GameOption::from_label(game) {
            Some(GameOption::FreeFire) => &FREE_FIRE_NOUNS,
            Some(GameOption::Valorant) | Some(GameOption::Cs2) => &TACTICAL_NOUNS,
            _ => &NOUNS,
        };

        let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
        let noun = nouns[rng.gen_range(0..nouns.len())];
        format!("{} {}", adjective, noun)
    }
}
