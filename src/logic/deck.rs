// src/logic/deck.rs

use itertools::Itertools;
use rand::{seq::SliceRandom, thread_rng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::game_state::GameState;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// 返り値は `Vec<Card>` で、カードはスートとランクの組み合わせで全種類作られるよ。
/// 列挙順はスートメジャー・ランクマイナー (Void の A〜K、次に Solar の A〜K、…)。
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`) になってる！
pub fn create_standard_deck() -> Vec<Card> {
    ALL_SUITS
        .iter()
        .cartesian_product(ALL_RANKS.iter()) // スート × ランクの全組み合わせ！
        .map(|(&suit, &rank)| Card { suit, rank, is_face_up: false })
        .collect()
}

/// カードデッキをシャッフルする関数だよ。
///
/// 中身は Fisher–Yates (`SliceRandom::shuffle`) で一様ランダムな並べ替え。
/// 引数のデッキはいじらずに、シャッフル済みの新しい Vec を返すよ。
/// 元の並びが欲しくなるテストとかで助かるやつ！
pub fn shuffle_deck(deck: &[Card]) -> Vec<Card> {
    let mut rng = thread_rng(); // 乱数生成器を取得
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(&mut rng); // コピーした方をシャッフル！
    shuffled
}

/// シャッフル済みデッキからゲーム開始時の盤面を配る関数だよ！🎉
///
/// # 処理の流れ
/// 1. 場札 (Tableau) 7列に三角形に配る。列 j はラウンド 0..=j で1枚ずつ、
///    合計 1+2+...+7 = 28枚。各列の最後に配られた1枚 (ラウンド j の分) だけ
///    表向きにするよ！👀
/// 2. 残りの24枚はそのままの順番で裏向きの山札 (Stock) になる。
/// 3. 捨て札と組札は空っぽ、カウンターは 0、勝利フラグは false でスタート！
pub fn deal(shuffled: Vec<Card>) -> GameState {
    let mut tableau: [Vec<Card>; 7] = [
        vec![], vec![], vec![], vec![], vec![], vec![], vec![],
    ];

    let mut card_iterator = shuffled.into_iter();

    for round in 0..7 {
        for pile in round..7 {
            // `next()` は Option<Card> を返す。52枚のデッキから28枚配るだけだから
            // 足りなくなることは無いはず。無いなら即クラッシュでOK！💥
            let mut card = card_iterator
                .next()
                .expect("デッキにカードが足りません！(場札配置中)");
            // その列の一番上のカード (ラウンド番号 == 列番号の分) だけ表向き！
            card.is_face_up = round == pile;
            tableau[pile].push(card);
        }
    }

    // 残りは全部、裏向きのまま山札へ。
    let stock: Vec<Card> = card_iterator
        .map(|mut card| {
            card.is_face_up = false;
            card
        })
        .collect();

    GameState {
        stock,
        waste: Vec::new(),
        foundations: [vec![], vec![], vec![], vec![]],
        tableau,
        moves: 0,
        elapsed: 0,
        won: false,
    }
}

/// 新しいゲームを丸ごと用意するよ。デッキ生成 → シャッフル → 配る、の一本道！
pub fn deal_new_game() -> GameState {
    deal(shuffle_deck(&create_standard_deck()))
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！ (ちょっと大変だけど大事！)
        let mut unique_cards = HashSet::with_capacity(52);
        for card in &deck {
            // HashSet の insert メソッドは、要素が既に追加されていたら false を返すよ！
            assert!(
                unique_cards.insert((card.suit, card.rank)),
                "デッキに重複したカードが見つかりました！ {:?}",
                card
            );
        }

        // 3. すべてのカードが裏向きかチェック！
        assert!(
            deck.iter().all(|card| !card.is_face_up),
            "デッキに表向きのカードが含まれています！"
        );

        println!("create_standard_deck 関数のテスト、成功！🎉");
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let initial_deck = create_standard_deck();
        let shuffled_deck = shuffle_deck(&initial_deck);

        // サイズは変わらないはず
        assert_eq!(initial_deck.len(), shuffled_deck.len(), "シャッフルでカード数が変わった！");

        // 同じカードの集合のはず (id でソートして比較)
        let mut before: Vec<String> = initial_deck.iter().map(|c| c.id()).collect();
        let mut after: Vec<String> = shuffled_deck.iter().map(|c| c.id()).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after, "シャッフルでカードの中身が変わった！");

        // 入力のデッキはそのままのはず (シャッフルは新しい Vec を返す約束)
        assert_eq!(initial_deck, create_standard_deck(), "入力デッキが書き換わってる！");

        println!("シャッフル置換テスト、成功！🎉");
    }

    #[test]
    fn shuffle_has_no_fixed_point_bias() {
        // 統計チェック: 何回もシャッフルして「同じ位置に留まるカード」を数えるよ。
        // 一様ランダムなら1回あたりの固定点は平均1枚くらい。
        // 100回で52×100枚中の固定点が300を超えるようなら何かおかしい！
        let deck = create_standard_deck();
        let runs = 100;
        let mut fixed_points = 0usize;

        for _ in 0..runs {
            let shuffled = shuffle_deck(&deck);
            fixed_points += deck
                .iter()
                .zip(shuffled.iter())
                .filter(|(a, b)| a.is_same_card(b))
                .count();
        }

        assert!(
            fixed_points < 3 * runs,
            "固定点が多すぎる！ ({} / {}回) シャッフルが偏ってるかも",
            fixed_points,
            runs
        );
        println!("シャッフル固定点テスト、成功！🎉 (固定点 {} / {}回)", fixed_points, runs);
    }

    #[test]
    fn deal_builds_a_klondike_layout() {
        let state = deal_new_game();

        // 場札の長さは [1, 2, 3, 4, 5, 6, 7] のはず！
        for (index, pile) in state.tableau.iter().enumerate() {
            assert_eq!(pile.len(), index + 1, "場札 {} の枚数がおかしい", index);
            // 各列、一番上 (末尾) だけ表向き！
            for (card_index, card) in pile.iter().enumerate() {
                let should_be_face_up = card_index == pile.len() - 1;
                assert_eq!(
                    card.is_face_up, should_be_face_up,
                    "場札 {} の {} 枚目の表裏がおかしい",
                    index, card_index
                );
            }
        }

        // 山札は24枚、全部裏向き！
        assert_eq!(state.stock.len(), 24, "山札は24枚のはず");
        assert!(state.stock.iter().all(|card| !card.is_face_up), "山札に表向きのカードがある！");

        // 捨て札と組札は空、カウンターは0からスタート！
        assert!(state.waste.is_empty());
        assert!(state.foundations.iter().all(|f| f.is_empty()));
        assert_eq!(state.moves, 0);
        assert_eq!(state.elapsed, 0);
        assert!(!state.won);

        // 全部合わせてちょうどフルデッキ (52枚、重複なし)！
        assert_eq!(state.total_cards(), 52);
        let ids: HashSet<String> = state.all_cards().map(|c| c.id()).collect();
        assert_eq!(ids.len(), 52, "盤面のカード id が52通りじゃない！");

        println!("初期盤面の配りテスト、成功！🎉");
    }
}
