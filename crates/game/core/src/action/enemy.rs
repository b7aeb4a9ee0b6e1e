use crate::env::RngOracle;

/// Enemy turn choices. The AI picks uniformly among them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyAction {
    Attack,
    Defend,
    Buff,
}

impl EnemyAction {
    pub const ALL: [EnemyAction; 3] = [Self::Attack, Self::Defend, Self::Buff];

    /// Uniform pick among [`EnemyAction::ALL`].
    pub fn roll(rng: &mut (impl RngOracle + ?Sized)) -> Self {
        Self::ALL[rng.pick(Self::ALL.len())]
    }
}
