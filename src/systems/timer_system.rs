// src/systems/timer_system.rs
//! The 1 Hz game clock transition.

use crate::components::game_state::GameState;

/// 経過時間を 1 秒進める遷移だよ。⏱️
///
/// クリア済み (`won == true`) なら何もしない。勝った瞬間にタイマーは
/// 止まる約束だからね。呼び出し側 (JS のインターバル) も止めてくれるけど、
/// 遅れて届いた tick が記録を汚さないように、こっちでもガードするよ。
pub fn tick(state: &GameState) -> GameState {
    if state.won {
        return state.clone();
    }
    let mut next = state.clone();
    next.elapsed += 1;
    next
}
