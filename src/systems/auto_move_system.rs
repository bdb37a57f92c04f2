// src/systems/auto_move_system.rs
//! Applies the automatic foundation move found by `logic::auto_move`.

use log::info;

use crate::components::drag::DragOrigin;
use crate::components::game_state::GameState;
use crate::logic::auto_move::{find_automatic_foundation_move, AutoMove};
use crate::systems::move_card_system;

/// 自動移動を 1 手だけ適用するよ。🪄
///
/// `find_automatic_foundation_move` が見つけた手を `move_to_foundation` で
/// 実行して、新しい状態と「どの手を適用したか」のペアを返す。
/// 適用した `AutoMove` を一緒に返すから、呼び出し側は前後の枚数を
/// 見比べなくても、どの組札が伸びたか (エフェクトをどこに出すか) がわかるよ。
///
/// 動かせるカードが無ければ `None`。状態はそのまま！
pub fn apply_auto_move(state: &GameState) -> Option<(GameState, AutoMove)> {
    let auto_move = find_automatic_foundation_move(state)?;

    // 動かすカードは origin の山の一番上。探索が見つけた直後だから必ずいる。
    let moving = match auto_move.origin {
        DragOrigin::Waste => state.waste.last()?,
        DragOrigin::Tableau(pile_index) => state.tableau[pile_index].last()?,
    }
    .clone();

    info!(
        "[AutoMove] {} を組札 {} へ自動移動するよ！",
        moving.id(),
        auto_move.foundation_index
    );

    let next = move_card_system::move_to_foundation(
        state,
        auto_move.foundation_index,
        &moving,
        auto_move.origin,
    )?;

    // 勝利判定は move_to_foundation の中で済んでる (won が最新になってる)。
    Some((next, auto_move))
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card { suit, rank, is_face_up: true }
    }

    fn empty_state() -> GameState {
        GameState {
            stock: Vec::new(),
            waste: Vec::new(),
            foundations: [vec![], vec![], vec![], vec![]],
            tableau: [vec![], vec![], vec![], vec![], vec![], vec![], vec![]],
            moves: 0,
            elapsed: 0,
            won: false,
        }
    }

    #[test]
    fn applies_waste_move_and_reports_foundation() {
        let mut state = empty_state();
        state.foundations[1].push(card(Suit::Solar, Rank::Ace));
        state.waste.push(card(Suit::Solar, Rank::Two));

        let (next, applied) = apply_auto_move(&state).expect("自動移動があるはず");

        assert_eq!(applied.origin, DragOrigin::Waste);
        assert_eq!(applied.foundation_index, 1, "伸びた組札のインデックスが返るはず");
        assert!(next.waste.is_empty());
        assert_eq!(next.foundations[1].len(), 2);
        assert_eq!(next.moves, 1);

        // 元の状態は無傷！
        assert_eq!(state.foundations[1].len(), 1);
        println!("自動移動適用テスト、成功！🎉");
    }

    #[test]
    fn flips_the_card_exposed_by_an_auto_move() {
        let mut state = empty_state();
        let mut hidden = card(Suit::Strand, Rank::Seven);
        hidden.is_face_up = false;
        state.tableau[3] = vec![hidden, card(Suit::Void, Rank::Ace)];

        let (next, applied) = apply_auto_move(&state).expect("A は組札へ動かせるはず");

        assert_eq!(applied.origin, DragOrigin::Tableau(3));
        assert_eq!(next.tableau[3].len(), 1);
        assert!(next.tableau[3][0].is_face_up, "顔を出した 7 はめくられるはず");
        println!("自動移動のめくりテスト、成功！🎉");
    }

    #[test]
    fn returns_none_when_nothing_to_do() {
        let state = empty_state();
        assert!(apply_auto_move(&state).is_none());
        println!("自動移動なしテスト、成功！🎉");
    }

    #[test]
    fn final_auto_move_wins_the_game() {
        // 51枚積んだ状態で最後の1枚を自動移動 → won！
        let mut state = empty_state();
        for (i, &suit) in ALL_SUITS.iter().enumerate() {
            for &rank in &ALL_RANKS {
                state.foundations[i].push(card(suit, rank));
            }
        }
        let last = state.foundations[3].pop().unwrap();
        state.waste.push(last);

        let (next, _) = apply_auto_move(&state).expect("最後の1枚は動かせるはず");
        assert!(next.won, "自動移動でも勝利判定が走るはず！🏆");
        println!("自動移動での勝利テスト、成功！🎉");
    }
}
