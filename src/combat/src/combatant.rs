// src/combat/src/combatant.rs

use crate::rng::GameRng;

/// 表示可以参加战斗的活体
///
/// Anything that can be hit: characters, and the hero wrapping one.
pub trait Combatant {
    /// 获取名称
    fn name(&self) -> &str;

    /// 获取当前生命值（死亡判定前可能为负）
    fn health(&self) -> i32;

    /// 获取最大生命值
    fn max_health(&self) -> i32;

    /// 是否存活
    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Applies `amount` damage through this combatant's defense and narrates it.
    fn damage(&mut self, amount: i32, rng: &mut GameRng) -> String;
}
