// src/systems/move_card_system.rs
//! Validated pile-to-pile move transitions. Legality is the caller's job
//! (the drag machine asks `logic::rules` first); these functions only move
//! cards between piles and keep the counters honest.

use log::warn;

use crate::components::card::Card;
use crate::components::drag::DragOrigin;
use crate::components::game_state::{GameState, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::logic::rules;

/// ドラッグしたカードの連なりを場札 (Tableau) の列へ移す遷移だよ。
///
/// 移動元からペイロードを取り除いて、移動先の列の上に積む。
/// 移動元の場札に裏向きのカードが残ったら、新しい一番上を表向きにめくるよ！
/// 手数 +1。
///
/// ルールチェック (`can_place_on_tableau`) は呼び出し側で済ませておく約束。
/// ここでは再チェックしない。ただし未検証のまま呼ぶのは呼び出し側のバグ
/// なので、デバッグビルドでは debug_assert が大声で教えてくれるよ。🔊
///
/// 壊れた入力 (空の移動元、もう存在しないカードのペイロード、範囲外の
/// インデックス) は `None`。素早い連続ジェスチャで普通に起きうるから、
/// 静かに「移動なし」として扱うんだ。
pub fn move_to_tableau(
    state: &GameState,
    target_index: usize,
    cards: &[Card],
    origin: DragOrigin,
) -> Option<GameState> {
    if cards.is_empty() || target_index >= TABLEAU_COUNT {
        warn!("[Move] 場札への移動の入力が壊れてるよ (target={}, cards={})", target_index, cards.len());
        return None;
    }
    // 自分の列に落とすのは移動じゃない！
    if origin == DragOrigin::Tableau(target_index) {
        return None;
    }

    debug_assert!(
        rules::can_place_on_tableau(&cards[0], state.tableau[target_index].last()),
        "move_to_tableau がルール未検証のまま呼ばれたよ！呼び出し側のバグ！"
    );

    let mut next = state.clone();
    let moved = take_cards_from_origin(&mut next, origin, cards)?;
    next.tableau[target_index].extend(moved);
    next.moves += 1;
    Some(next)
}

/// カード 1 枚を組札 (Foundation) へ移す遷移だよ。
///
/// 場札への移動と同じ流儀で、移動元から取り除いて組札に積んで手数 +1。
/// 組札が伸びたら勝利条件も計算し直すよ。52枚目が乗った瞬間に
/// `won` が true になって、タイマーが止まる合図になるんだ。🏆
pub fn move_to_foundation(
    state: &GameState,
    foundation_index: usize,
    card: &Card,
    origin: DragOrigin,
) -> Option<GameState> {
    if foundation_index >= FOUNDATION_COUNT {
        warn!("[Move] 組札インデックスが範囲外だよ ({})", foundation_index);
        return None;
    }

    debug_assert!(
        rules::can_place_on_foundation(card, &state.foundations[foundation_index]),
        "move_to_foundation がルール未検証のまま呼ばれたよ！呼び出し側のバグ！"
    );

    let mut next = state.clone();
    let mut moved = take_cards_from_origin(&mut next, origin, std::slice::from_ref(card))?;
    // 組札に乗るのは必ず 1 枚だけ。
    let landed = moved.pop()?;
    if !moved.is_empty() {
        return None;
    }
    next.foundations[foundation_index].push(landed);
    next.moves += 1;
    next.won = rules::check_win_condition(&next.foundations);
    Some(next)
}

/// 移動元の山からペイロードを取り除くヘルパー。
///
/// * 捨て札: 一番上の 1 枚だけ。ペイロードの先頭と一致しなければ古い
///   ジェスチャなので `None`。
/// * 場札: ペイロードの先頭のカードを列から探して、そこから末尾までを
///   まるごと切り出す。切り出した長さがペイロードと食い違ったら `None`。
///   切った後に残った新しい一番上は表向きにめくる！
fn take_cards_from_origin(
    next: &mut GameState,
    origin: DragOrigin,
    cards: &[Card],
) -> Option<Vec<Card>> {
    let leading = cards.first()?;
    match origin {
        DragOrigin::Waste => {
            let top = next.waste.last()?;
            if !top.is_same_card(leading) || cards.len() != 1 {
                warn!("[Move] 捨て札のペイロードが古いよ。無視するね。");
                return None;
            }
            Some(vec![next.waste.pop()?])
        }
        DragOrigin::Tableau(pile_index) => {
            if pile_index >= TABLEAU_COUNT {
                return None;
            }
            let pile = &mut next.tableau[pile_index];
            let split_at = pile.iter().position(|c| c.is_same_card(leading))?;
            if pile.len() - split_at != cards.len() {
                warn!("[Move] 場札 {} のペイロードが今の列と合わないよ。無視するね。", pile_index);
                return None;
            }
            let moved = pile.split_off(split_at);
            // 新しく顔を出したカードをめくる！
            if let Some(new_top) = pile.last_mut() {
                new_top.is_face_up = true;
            }
            Some(moved)
        }
    }
}
