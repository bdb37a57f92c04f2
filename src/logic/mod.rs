// src/logic/mod.rs
//! ゲームの純粋ロジック (デッキ・ルール・自動移動) を集めたモジュールだよ！🧠
//! ここの関数はどれも状態を直接書き換えない。判定して答えを返すだけ！

pub mod auto_move;
pub mod deck;
pub mod rules;
