/// Kind of body a particle or polygon belongs to, which decides collision semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum OwnerTag {
    /// The player-controlled body
    Player,

    /// An enemy that costs a life when it reaches the goal
    Dinosaur,

    /// The target the player must reach; anchored in place
    Goal,

    /// A shape drawn at runtime with the pencil
    UserDrawn,
}

impl OwnerTag {
    /// Returns true for a goal/dinosaur pair in either order
    #[inline]
    pub fn is_goal_dinosaur_pair(self, other: Self) -> bool {
        matches!(
            (self, other),
            (OwnerTag::Goal, OwnerTag::Dinosaur) | (OwnerTag::Dinosaur, OwnerTag::Goal)
        )
    }

    /// Returns true for a player/goal pair in either order
    #[inline]
    pub fn is_player_goal_pair(self, other: Self) -> bool {
        matches!(
            (self, other),
            (OwnerTag::Player, OwnerTag::Goal) | (OwnerTag::Goal, OwnerTag::Player)
        )
    }
}
