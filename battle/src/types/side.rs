//! Battle sides

use pokeduel_protocol::Winner;

/// One of the two competing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    /// The other side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Array index (player = 0, opponent = 1)
    pub fn index(&self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }

    pub fn from_protocol(winner: Winner) -> Self {
        match winner {
            Winner::Player => Side::Player,
            Winner::Opponent => Side::Opponent,
        }
    }

    pub fn to_protocol(&self) -> Winner {
        match self {
            Side::Player => Winner::Player,
            Side::Opponent => Winner::Opponent,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Side::Player.opposite(), Side::Opponent);
        assert_eq!(Side::Opponent.opposite(), Side::Player);
    }

    #[test]
    fn test_index() {
        assert_eq!(Side::Player.index(), 0);
        assert_eq!(Side::Opponent.index(), 1);
    }

    #[test]
    fn test_winner_conversion() {
        for side in Side::BOTH {
            assert_eq!(Side::from_protocol(side.to_protocol()), side);
        }
        assert_eq!(Side::Opponent.to_protocol(), Winner::Opponent);
    }
}
