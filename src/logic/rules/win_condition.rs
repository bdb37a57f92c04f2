//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::Card;
use crate::components::game_state::FOUNDATION_COUNT;

/// ゲームのクリア条件を判定する。
/// 4つの組札すべてが A〜K の13枚になっていたら勝ち！🏆
/// 51枚まで積めてても、どこかの組札が13枚未満ならまだクリアじゃないよ。
pub fn check_win_condition(foundations: &[Vec<Card>; FOUNDATION_COUNT]) -> bool {
    foundations.iter().all(|foundation| foundation.len() == 13)
}
