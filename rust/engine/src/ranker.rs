use crate::hand::Hand;
use crate::player::PlayerId;

/// One rung of the showdown ladder: the players whose revealed hands
/// compare exactly equal, strongest group first in the output of
/// [`rank_hands`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup {
    pub hand: Hand,
    pub players: Vec<PlayerId>,
}

/// Order revealed hands from strongest to weakest, grouping exact ties.
pub fn rank_hands(entries: &[(PlayerId, Hand)]) -> Vec<RankGroup> {
    let mut sorted: Vec<(PlayerId, Hand)> = entries.to_vec();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut groups: Vec<RankGroup> = Vec::new();
    for (id, hand) in sorted {
        match groups.last_mut() {
            Some(g) if g.hand == hand => g.players.push(id),
            _ => groups.push(RankGroup {
                hand,
                players: vec![id],
            }),
        }
    }
    groups
}
