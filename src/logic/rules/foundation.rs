//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use super::common::rank_value;

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
///
/// 組札はあらかじめスートが決まってるわけじゃなくて、最初に置かれた A の
/// スートがその組札のスートになるよ。だから判定は山の一番上のカードを見る！
///
/// # 引数
/// * `card_to_move` - 置こうとしているカード。
/// * `foundation` - 移動先の組札の中身 (下から上の順)。
///
/// # 戻り値
/// * 置けるなら `true`、そうでなければ `false`。
pub fn can_place_on_foundation(card_to_move: &Card, foundation: &[Card]) -> bool {
    match foundation.last() {
        None => {
            // 組札が空の場合、置けるのはエース (A) だけ！
            let is_ace = card_to_move.rank == Rank::Ace;
            debug!(
                "[Foundation Rule] {:?} {:?} を空の組札へ。Ace か: {}",
                card_to_move.rank, card_to_move.suit, is_ace
            );
            is_ace
        }
        Some(top_card) => {
            // スートが同じで、ランクがちょうど1つ大きければ置ける！
            let suit_matches = card_to_move.suit == top_card.suit;
            let rank_is_next = rank_value(card_to_move.rank) == rank_value(top_card.rank) + 1;
            debug!(
                "[Foundation Rule] {:?} {:?} を {:?} {:?} の上へ。スート一致: {}, 連番: {}",
                card_to_move.rank,
                card_to_move.suit,
                top_card.rank,
                top_card.suit,
                suit_matches,
                rank_is_next
            );
            suit_matches && rank_is_next
        }
    }
}
