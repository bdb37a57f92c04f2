// src/components/game_state.rs

// serde を使う宣言！ゲーム状態を JSON にしてレンダラーに渡すよ！
use serde::{Serialize, Deserialize};

use crate::components::card::Card;

/// 場札 (Tableau) の列数。クロンダイクは 7 列！
pub const TABLEAU_COUNT: usize = 7;
/// 組札 (Foundation) の数。スートごとに 1 つで 4 つ！
pub const FOUNDATION_COUNT: usize = 4;

/// ゲーム全体の現在の状態をまるごと持つ構造体だよ！🃏🌍
///
/// 山札・捨て札・4つの組札・7列の場札、それから手数と経過秒数と勝利フラグ。
/// この値の持ち主は状態ストア (`systems` の遷移関数) だけで、
/// 他のみんなは読むだけ。変更したい時は遷移関数に頼んで、
/// 「新しい GameState」を作ってもらって丸ごと差し替えるんだ。
/// 途中だけ書き換わった状態は絶対に外から見えない！✨
///
/// 不変条件: 全ての山のカードを合わせると、ちょうど 52 枚のフルデッキに
/// なること (重複なし・欠けなし)。遷移関数はカードを増やしも減らしもせず、
/// 山から山へ移すだけだからこれが守られるよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// 山札。裏向きのカードの山。top は Vec の末尾！
    pub stock: Vec<Card>,
    /// 捨て札。山札からめくった表向きのカード。
    pub waste: Vec<Card>,
    /// 組札 4 つ。A から K まで同じスートで積み上げたら勝ち！🏆
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
    /// 場札 7 列。
    pub tableau: [Vec<Card>; TABLEAU_COUNT],
    /// 手数カウンター。
    pub moves: u32,
    /// 経過秒数。タイマーの tick で 1 ずつ増えるよ。
    pub elapsed: u32,
    /// 勝利フラグ。true になったらタイマーは止まる (終端状態)。
    pub won: bool,
}

impl GameState {
    /// 全部の山に入ってるカードの合計枚数。不変条件チェックに便利！
    pub fn total_cards(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundations.iter().map(|f| f.len()).sum::<usize>()
            + self.tableau.iter().map(|t| t.len()).sum::<usize>()
    }

    /// 全ての山のカードを順に訪ねるイテレータ。
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flatten())
            .chain(self.tableau.iter().flatten())
    }
}
