use serde::{Deserialize, Serialize};

/// Loyalty ladder: points needed and the reward unlocked at each rung.
pub const MILESTONES: [(i32, &str); 3] = [
    (1_000, "1 Free Day"),
    (3_000, "3 Free Days"),
    (10_000, "7 Free Days"),
];

/// One point per 1,000 UGX spent, floored.
pub fn points_for_amount(amount_ugx: i32) -> i32 {
    amount_ugx / 1_000
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NextReward {
    pub milestone_points: i32,
    pub reward: String,
    pub points_to_go: i32,
}

/// First milestone strictly above the current balance. None once the top
/// rung has been reached.
pub fn next_reward(points: i32) -> Option<NextReward> {
    MILESTONES
        .iter()
        .find(|(milestone, _)| points < *milestone)
        .map(|(milestone, reward)| NextReward {
            milestone_points: *milestone,
            reward: (*reward).to_string(),
            points_to_go: *milestone - points,
        })
}

/// Progress toward the milestone the customer is currently working on,
/// as a percentage. Past the top rung this reports against the top rung.
pub fn progress_percent(points: i32) -> f64 {
    let milestone = MILESTONES
        .iter()
        .find(|(milestone, _)| points < *milestone)
        .map(|(milestone, _)| *milestone)
        .unwrap_or(MILESTONES[MILESTONES.len() - 1].0);

    f64::from(points) / f64::from(milestone) * 100.0
}
