// src/components/card.rs

// serde を使う宣言！カード情報をスナップショットで JS に送る時に使うよ！
use serde::{Serialize, Deserialize};

/// カードのスート（マーク）を表す列挙型だよ！🌑☀️❄️🕸️
///
/// このゲームのデッキは伝統的な赤黒じゃなくて「光」と「闇」の2極なんだ。
/// - 光 (Light): Void 🌑, Solar ☀️
/// - 闇 (Dark): Stasis ❄️, Strand 🕸️
/// 極性そのものはここには持たせない！ルール側で導出するよ (`Polarity::from_suit`)。
///
/// #[derive(...)] のおまじないも忘れずに！
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq: 等しいか比較できるように (`==`)
/// - Hash: HashSet で重複チェックとかに使えるように
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Void,   // 🌑 (光)
    Solar,  // ☀️ (光)
    Stasis, // ❄️ (闇)
    Strand, // 🕸️ (闇)
}

impl Suit {
    /// スートの名前を文字列で返すヘルパー。スナップショットの id 生成で使うよ。
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Void => "Void",
            Suit::Solar => "Solar",
            Suit::Stasis => "Stasis",
            Suit::Strand => "Strand",
        }
    }
}

/// デッキ生成で使う全スートのリスト。順番もこれが正！(スートメジャーの列挙順)
pub const ALL_SUITS: [Suit; 4] = [Suit::Void, Suit::Solar, Suit::Stasis, Suit::Strand];

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// スートと同じように #[derive(...)] を付けておくよ！
/// PartialOrd, Ord も追加して、ランクの大小比較 (`<`, `>`) もできるようにしておこう！
/// 場札の「1つ小さい」チェックとかで使いそう！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ
    Two,     // 2
    Three,   // 3
    Four,    // 4
    Five,    // 5
    Six,     // 6
    Seven,   // 7
    Eight,   // 8
    Nine,    // 9
    Ten,     // 10
    Jack,    // J (11 扱い)
    Queen,   // Q (12 扱い)
    King,    // K (13 扱い)
}

impl Rank {
    /// 表示用の短い名前。"A", "2", ..., "J", "Q", "K"
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// デッキ生成で使う全ランクのリスト (ランクマイナーの列挙順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表す型だよ！🃏
///
/// - `suit`: カードのスート
/// - `rank`: カードのランク
/// - `is_face_up`: カードが表向きか裏向きかを示すフラグ (trueなら表向き)
///
/// (suit, rank) の組み合わせがカードの不変なアイデンティティで、
/// デッキ全体で 52 通り、重複なし。`is_face_up` だけが後から変わるよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)] // Copy は外したよ。カードの状態は変わる可能性があるからね。
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool, // カードが表向きかどうか
}

impl Card {
    /// デッキ全体でユニークな id を作るよ。"Void-A" みたいな形式！
    /// (suit, rank) から導出できるのでフィールドには持たせない。
    /// JS 側のレンダラーが DOM の key に使うんだ。
    pub fn id(&self) -> String {
        format!("{}-{}", self.suit.name(), self.rank.label())
    }

    /// 同じカードかどうか (suit と rank だけで比較、表裏は無視！)。
    /// ドラッグ中のペイロードを山の中から探す時はこっちを使ってね。
    pub fn is_same_card(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}
