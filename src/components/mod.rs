// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;       // カードの型 (Suit, Rank, Card) 🃏
pub mod game_state; // ゲーム全体の状態 (GameState) 🌍
pub mod drag;       // ドラッグ関連の型 (DragOrigin, DropTarget など) 🖱️

// よく使う型はここで再エクスポートしておくと、使う側が楽チン！✨
pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use drag::{DragContext, DragOrigin, DragPhase, DropTarget, PointerSample};
pub use game_state::{GameState, FOUNDATION_COUNT, TABLEAU_COUNT};
