// src/app/state_getter.rs
//! Converts the current game state and drag machine into JSON snapshots for
//! the JS renderer.

use log::error;
use serde::Serialize;

use crate::app::drag_handler::DragMachine;
use crate::components::card::Card;
use crate::components::drag::{DragPhase, PointerSample};
use crate::components::game_state::GameState;
use crate::logic::rules;

/// レンダラーに渡すカード 1 枚分の DTO。
/// `suit_class` は CSS クラス用の "light" / "dark"。
#[derive(Debug, Serialize)]
struct CardData {
    id: String,
    suit: &'static str,
    rank: &'static str,
    suit_class: &'static str,
    is_face_up: bool,
}

impl CardData {
    fn from_card(card: &Card) -> Self {
        // スート名から極性クラスを引く。アセットパス対応の判定器を
        // そのまま使えば、JS 側と同じ答えになるよ。
        let suit_class = if rules::is_light_suit_name(card.suit.name()) {
            "light"
        } else {
            "dark"
        };
        Self {
            id: card.id(),
            suit: card.suit.name(),
            rank: card.rank.label(),
            suit_class,
            is_face_up: card.is_face_up,
        }
    }
}

/// 盤面まるごとのスナップショット DTO。
#[derive(Debug, Serialize)]
struct GameStateData {
    stock: Vec<CardData>,
    waste: Vec<CardData>,
    foundations: Vec<Vec<CardData>>,
    tableau: Vec<Vec<CardData>>,
    moves: u32,
    elapsed: u32,
    won: bool,
}

/// ドラッグオーバーレイ用のスナップショット DTO。
/// dragged_ids に入ってるカードは盤面側では薄く描く、とかに使うよ。
#[derive(Debug, Serialize)]
struct DragStateData {
    phase: DragPhase,
    dragged_ids: Vec<String>,
    pointer: Option<PointerSample>,
    offset: Option<PointerSample>,
}

fn pile_data(pile: &[Card]) -> Vec<CardData> {
    pile.iter().map(CardData::from_card).collect()
}

/// 盤面の状態を JSON 文字列にして返すよ。
pub fn game_state_json(state: &GameState) -> Result<String, String> {
    let data = GameStateData {
        stock: pile_data(&state.stock),
        waste: pile_data(&state.waste),
        foundations: state.foundations.iter().map(|f| pile_data(f)).collect(),
        tableau: state.tableau.iter().map(|t| pile_data(t)).collect(),
        moves: state.moves,
        elapsed: state.elapsed,
        won: state.won,
    };

    serde_json::to_string(&data).map_err(|e| {
        let message = format!("Failed to serialize game state: {}", e);
        error!("{}", message);
        message
    })
}

/// ドラッグの状態を JSON 文字列にして返すよ。
pub fn drag_state_json(machine: &DragMachine) -> Result<String, String> {
    let data = match machine.context() {
        Some(context) => DragStateData {
            phase: machine.phase(),
            dragged_ids: context.cards.iter().map(|c| c.id()).collect(),
            pointer: Some(context.pointer_current),
            offset: Some(context.offset),
        },
        None => DragStateData {
            phase: machine.phase(),
            dragged_ids: Vec::new(),
            pointer: None,
            offset: None,
        },
    };

    serde_json::to_string(&data).map_err(|e| {
        let message = format!("Failed to serialize drag state: {}", e);
        error!("{}", message);
        message
    })
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::components::drag::{DragOrigin, PointerSample};
    use crate::logic::deck::deal_new_game;

    #[test]
    fn game_state_json_has_expected_fields() {
        let state = deal_new_game();
        let json = game_state_json(&state).expect("シリアライズできるはず");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["stock"].as_array().unwrap().len(), 24);
        assert_eq!(value["tableau"].as_array().unwrap().len(), 7);
        assert_eq!(value["foundations"].as_array().unwrap().len(), 4);
        assert_eq!(value["moves"], 0);
        assert_eq!(value["won"], false);

        // カード DTO の形もチェック！
        let first_card = &value["tableau"][0][0];
        assert!(first_card["id"].is_string());
        assert!(first_card["suit"].is_string());
        assert!(
            first_card["suit_class"] == "light" || first_card["suit_class"] == "dark",
            "suit_class は light か dark のはず"
        );
        println!("盤面スナップショットテスト、成功！🎉");
    }

    #[test]
    fn drag_json_reflects_machine_state() {
        let mut state = deal_new_game();
        state.waste.push(crate::components::card::Card {
            suit: Suit::Void,
            rank: Rank::Ace,
            is_face_up: true,
        });

        let mut machine = DragMachine::new();
        // Idle のスナップショット
        let json = drag_state_json(&machine).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "idle");
        assert!(value["dragged_ids"].as_array().unwrap().is_empty());
        assert!(value["pointer"].is_null());

        // ドラッグ中のスナップショット
        machine.pointer_down(
            &state,
            DragOrigin::Waste,
            0,
            PointerSample { x: 12.0, y: 34.0 },
            PointerSample { x: 1.0, y: 2.0 },
        );
        let json = drag_state_json(&machine).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "dragging");
        assert_eq!(value["dragged_ids"][0], "Void-A");
        assert_eq!(value["pointer"]["x"], 12.0);
        assert_eq!(value["offset"]["y"], 2.0);
        println!("ドラッグスナップショットテスト、成功！🎉");
    }
}
