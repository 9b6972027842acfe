//! Base stats and stat names

/// The six base stats, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Parse from the catalog stat name
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s {
            "hp" => Some(Stat::Hp),
            "attack" => Some(Stat::Attack),
            "defense" => Some(Stat::Defense),
            "special-attack" => Some(Stat::SpecialAttack),
            "special-defense" => Some(Stat::SpecialDefense),
            "speed" => Some(Stat::Speed),
            _ => None,
        }
    }

    /// Catalog stat name
    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special-attack",
            Stat::SpecialDefense => "special-defense",
            Stat::Speed => "speed",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Base stats of a creature
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Build from `(name, value)` pairs; unknown names are skipped and
    /// missing stats stay at 0
    pub fn from_named<'a>(entries: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        let mut stats = Self::new();
        for (name, value) in entries {
            if let Some(stat) = Stat::from_protocol(name) {
                stats.set(stat, value);
            }
        }
        stats
    }

    /// Iterate `(stat, value)` in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::ALL.iter().map(|&stat| (stat, self.get(stat)))
    }

    /// Sum of all six stats
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, v)| v).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_from_protocol() {
        assert_eq!(Stat::from_protocol("hp"), Some(Stat::Hp));
        assert_eq!(Stat::from_protocol("special-attack"), Some(Stat::SpecialAttack));
        assert_eq!(Stat::from_protocol("speed"), Some(Stat::Speed));
        assert_eq!(Stat::from_protocol("accuracy"), None);
    }

    #[test]
    fn test_stat_names_round_trip() {
        for stat in Stat::ALL {
            assert_eq!(Stat::from_protocol(stat.as_str()), Some(stat));
        }
    }

    #[test]
    fn test_from_named() {
        let stats = BaseStats::from_named([
            ("hp", 45),
            ("attack", 49),
            ("special-defense", 65),
            ("evasion", 99),
        ]);

        assert_eq!(stats.hp, 45);
        assert_eq!(stats.attack, 49);
        assert_eq!(stats.special_defense, 65);
        assert_eq!(stats.speed, 0); // Missing stays 0
        assert_eq!(stats.total(), 45 + 49 + 65);
    }

    #[test]
    fn test_get_set() {
        let mut stats = BaseStats::new();
        stats.set(Stat::Speed, 120);
        assert_eq!(stats.get(Stat::Speed), 120);
        assert_eq!(stats.iter().last(), Some((Stat::Speed, 120)));
    }
}
