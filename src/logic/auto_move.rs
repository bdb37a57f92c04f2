// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! 盤面を見て、組札 (Foundation) へ自動で動かせるカードを探すんだ。

use log::debug;

use crate::components::card::Card;
use crate::components::drag::DragOrigin;
use crate::components::game_state::{GameState, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::logic::rules;

/// 見つかった自動移動 1 手分の情報だよ。
///
/// どのカードが動くか (origin の山の一番上) と、どの組札に置くか。
/// 1 回の探索で変わる組札は必ずこの 1 つだけ！呼び出し側は
/// 「どの組札が伸びたか」を前後比較しなくても、この値を見ればわかるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoMove {
    /// 動かすカードのある場所 (捨て札 or 場札の列)。
    pub origin: DragOrigin,
    /// 置き先の組札インデックス (0-3)。
    pub foundation_index: usize,
}

/// 現在の盤面で、組札へ自動で動かせるカードを探す関数だよ。
///
/// 探索順は固定！結果はいつ呼んでも同じ (決定的) だよ。
/// 1. 捨て札 (Waste) の一番上のカードを、組札 0→3 の順にチェック。
/// 2. 場札 (Tableau) を列 0→6 の順に、一番上が表向きのカードだけ、
///    組札 0→3 の順にチェック。
/// 最初に見つかった合法手を返す。見つからなければ `None`。
/// 盤面には一切触らないよ！
///
/// # 戻り値
/// * `Some(AutoMove)` - 移動可能な組札が見つかった場合。
/// * `None` - 移動できるカードが無い、またはもうクリア済みの場合。
pub fn find_automatic_foundation_move(state: &GameState) -> Option<AutoMove> {
    // クリア済みなら探すだけ無駄！
    if state.won {
        return None;
    }

    // --- 1. 捨て札の一番上をチェック ---
    if let Some(waste_top) = state.waste.last() {
        if let Some(foundation_index) = find_foundation_for(state, waste_top) {
            debug!(
                "[AutoMove] 捨て札の {} が組札 {} へ動かせるよ！",
                waste_top.id(),
                foundation_index
            );
            return Some(AutoMove { origin: DragOrigin::Waste, foundation_index });
        }
    }

    // --- 2. 場札を列 0 から順にチェック ---
    for pile_index in 0..TABLEAU_COUNT {
        let Some(top_card) = state.tableau[pile_index].last() else {
            continue; // 空の列はスキップ
        };
        if !top_card.is_face_up {
            continue; // 裏向きのカードは動かせない！
        }
        if let Some(foundation_index) = find_foundation_for(state, top_card) {
            debug!(
                "[AutoMove] 場札 {} の {} が組札 {} へ動かせるよ！",
                pile_index,
                top_card.id(),
                foundation_index
            );
            return Some(AutoMove { origin: DragOrigin::Tableau(pile_index), foundation_index });
        }
    }

    debug!("[AutoMove] 自動で動かせるカードは無かったよ。");
    None
}

/// カード 1 枚に対して、置ける組札をインデックス 0→3 の順で探すヘルパー。
fn find_foundation_for(state: &GameState, card: &Card) -> Option<usize> {
    (0..FOUNDATION_COUNT)
        .find(|&index| rules::can_place_on_foundation(card, &state.foundations[index]))
}
