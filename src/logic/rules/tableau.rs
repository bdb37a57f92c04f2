//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use super::common::{rank_value, Polarity};

/// 指定されたカードが、特定の場札 (Tableau) の一番上に置けるかチェックする。
///
/// `target_top` は移動先の列の一番上のカード。列が空なら `None` を渡してね。
/// 連なりごと動かす場合も、チェックするのは連なりの先頭 1 枚だけでOK！
/// (連なりの中身は元の列で既にルール通りに積まれてるからね)
pub fn can_place_on_tableau(card_to_move: &Card, target_top: Option<&Card>) -> bool {
    match target_top {
        None => {
            // 空の列に置けるのはキング (K) だけ！👑
            let is_king = card_to_move.rank == Rank::King;
            debug!(
                "[Tableau Rule] {:?} を空の列へ。King か: {}",
                card_to_move.rank, is_king
            );
            is_king
        }
        Some(target_card) => {
            // ランクがちょうど1つ小さくて、極性 (光/闇) が逆なら置ける！
            let rank_is_one_less =
                rank_value(target_card.rank) == rank_value(card_to_move.rank) + 1;
            let polarity_differs =
                Polarity::from_suit(card_to_move.suit) != Polarity::from_suit(target_card.suit);

            debug!(
                "[Tableau Rule] {:?}({:?}) を {:?}({:?}) の上へ。ランク差OK: {}, 極性違い: {}",
                card_to_move.rank,
                Polarity::from_suit(card_to_move.suit),
                target_card.rank,
                Polarity::from_suit(target_card.suit),
                rank_is_one_less,
                polarity_differs
            );

            rank_is_one_less && polarity_differs
        }
    }
}
