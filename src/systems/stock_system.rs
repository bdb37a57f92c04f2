// src/systems/stock_system.rs
//! Stock pile transitions: dealing a card to the Waste and recycling the
//! Waste back into the Stock when it runs dry.

use log::{debug, info};

use crate::components::game_state::GameState;
use crate::logic::rules;

/// 山札をクリックした時の遷移だよ。今の状態から新しい状態を作って返す！
///
/// 3パターンある:
/// 1. 山札にカードがある → 一番上を表向きにして捨て札へ。手数 +1。
/// 2. 山札が空で捨て札にカードがある → リサイクル！捨て札を逆順にして
///    全部裏向きで山札に戻し、捨て札は空っぽに。手数 +1。
///    (逆順だから、もう一周めくると前と同じ順でカードが出てくるよ)
/// 3. 両方空 → 何も起きない。エラーでもない。手数も増えない。
pub fn draw_from_stock(state: &GameState) -> GameState {
    let mut next = state.clone();

    if rules::can_deal_from_stock(next.stock.is_empty()) {
        // pop は None にならない (上の can_deal_from_stock でチェック済み)
        if let Some(mut card) = next.stock.pop() {
            card.is_face_up = true;
            debug!("[Stock] {} を捨て札へめくったよ。", card.id());
            next.waste.push(card);
            next.moves += 1;
        }
    } else if rules::can_recycle_waste(next.stock.is_empty(), next.waste.is_empty()) {
        info!("[Stock] 山札が空！捨て札 {} 枚をリサイクルするよ。♻️", next.waste.len());
        next.stock = next
            .waste
            .drain(..)
            .rev() // 捨て札の並びを逆順にして山札へ！
            .map(|mut card| {
                card.is_face_up = false; // 全部裏向きに戻す
                card
            })
            .collect();
        next.moves += 1;
    } else {
        debug!("[Stock] 山札も捨て札も空。何もしないよ。");
    }

    next
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use crate::logic::deck::deal_new_game;

    fn card(suit: Suit, rank: Rank, is_face_up: bool) -> Card {
        Card { suit, rank, is_face_up }
    }

    #[test]
    fn draw_moves_top_card_to_waste_face_up() {
        let state = deal_new_game();
        let stock_top = state.stock.last().cloned().expect("配った直後の山札は24枚");

        let next = draw_from_stock(&state);

        assert_eq!(next.stock.len(), state.stock.len() - 1, "山札が1枚減るはず");
        assert_eq!(next.waste.len(), 1, "捨て札が1枚増えるはず");
        let waste_top = next.waste.last().unwrap();
        assert!(waste_top.is_same_card(&stock_top), "めくったのは山札の一番上のはず");
        assert!(waste_top.is_face_up, "めくったカードは表向きのはず");
        assert_eq!(next.moves, state.moves + 1, "手数が1増えるはず");

        // 元の状態はそのまま！(遷移は新しい状態を返すだけ)
        assert_eq!(state.waste.len(), 0);
        assert_eq!(state.stock.len(), 24);

        // カードは増えも減りもしない！
        assert_eq!(next.total_cards(), 52);
        println!("山札めくりテスト、成功！🎉");
    }

    #[test]
    fn recycle_reverses_waste_into_stock() {
        // 山札が空、捨て札に3枚ある状態を作るよ。
        let mut state = deal_new_game();
        state.stock.clear();
        state.waste = vec![
            card(Suit::Void, Rank::Ace, true),
            card(Suit::Solar, Rank::Two, true),
            card(Suit::Stasis, Rank::Three, true),
        ];
        let moves_before = state.moves;

        let next = draw_from_stock(&state);

        // 捨て札は空っぽに！
        assert!(next.waste.is_empty(), "リサイクル後の捨て札は空のはず");
        // 山札は捨て札の逆順 (末尾が先頭に) で、全部裏向き！
        assert_eq!(next.stock.len(), 3);
        assert!(next.stock[0].is_same_card(&card(Suit::Stasis, Rank::Three, false)));
        assert!(next.stock[1].is_same_card(&card(Suit::Solar, Rank::Two, false)));
        assert!(next.stock[2].is_same_card(&card(Suit::Void, Rank::Ace, false)));
        assert!(next.stock.iter().all(|c| !c.is_face_up), "戻ったカードは全部裏向きのはず");
        assert_eq!(next.moves, moves_before + 1, "リサイクルも手数1のはず");

        // もう一度めくると、最初にめくった Void の A がまた出てくる！
        let redrawn = draw_from_stock(&next);
        assert!(redrawn.waste.last().unwrap().is_same_card(&card(Suit::Void, Rank::Ace, true)));

        println!("リサイクルテスト、成功！🎉");
    }

    #[test]
    fn both_empty_is_a_no_op() {
        let mut state = deal_new_game();
        state.stock.clear();
        state.waste.clear();

        let next = draw_from_stock(&state);
        assert_eq!(next, state, "両方空なら状態は変わらないはず (手数もそのまま)");
        println!("両方空の no-op テスト、成功！🎉");
    }

    #[test]
    fn deck_invariant_survives_many_draws() {
        // 山札を一周 + リサイクル + もう数枚、とめくり続けても52枚のまま！
        let mut state = deal_new_game();
        for _ in 0..30 {
            state = draw_from_stock(&state);
            assert_eq!(state.total_cards(), 52, "どの時点でも52枚のはず");
        }
        println!("めくり連打の不変条件テスト、成功！🎉");
    }
}
