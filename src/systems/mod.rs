// src/systems/mod.rs
//! ゲーム状態を遷移させるシステムたちを置くモジュールだよ！⚙️
//!
//! どのシステムも「今の GameState を借りて、新しい GameState を返す」純粋な
//! 関数。受け取った状態を直接書き換えることは絶対にしない！
//! だから失敗したら元の状態をそのまま使い続ければいいし、
//! テストも「等しいかどうか」を見るだけで済むんだ。✨

pub mod auto_move_system;
pub mod move_card_system;
pub mod stock_system;
pub mod timer_system;
