//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Rank, Suit};

/// カードの極性（光か闇か）を表すヘルパーenumだよ。
/// 伝統的なソリティアの赤・黒の代わりに、このデッキは光と闇で交互に積むんだ。🌗
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Polarity {
    Light,
    Dark,
}

impl Polarity {
    /// スートからカードの極性を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Void | Suit::Solar => Polarity::Light, // Void と Solar は光！🌑☀️
            Suit::Stasis | Suit::Strand => Polarity::Dark, // Stasis と Strand は闇！❄️🕸️
        }
    }
}

/// ランクを 1..=13 の数値に変換するよ。A=1, J=11, Q=12, K=13。
/// enum の判別値がそのままこの対応になってる！
pub fn rank_value(rank: Rank) -> u8 {
    rank as u8
}

/// スート名の文字列が「光」かどうか判定するよ。
///
/// JS 側ではスートがアセットのパス ("/assets/Solar.svg" とか) の形で
/// 渡ってくることがあるから、大文字小文字を無視して
/// 「文字列のどこかに solar か void が含まれてるか」で判定するんだ。
pub fn is_light_suit_name(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    lowered.contains("solar") || lowered.contains("void")
}
