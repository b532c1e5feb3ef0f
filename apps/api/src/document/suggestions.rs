//! Authoring tips. A fixed list and a uniform random pick — there is no
//! model behind this.

use rand::seq::SliceRandom;

pub const SUGGESTIONS: &[&str] = &[
    "Consider adding quantifiable achievements to your experience descriptions",
    "Your summary could benefit from highlighting your top 3 skills",
    "Add more technical skills relevant to your target role",
    "Include links to your portfolio projects",
];

/// Picks one tip uniformly at random.
pub fn random_suggestion() -> &'static str {
    SUGGESTIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SUGGESTIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_comes_from_the_list() {
        for _ in 0..32 {
            assert!(SUGGESTIONS.contains(&random_suggestion()));
        }
    }
}
