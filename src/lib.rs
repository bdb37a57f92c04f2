// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;        // ドラッグ状態機械と JS 境界 (GameApp)
pub mod components; // カード・盤面・ドラッグのデータ型
pub mod logic;      // デッキ・ルール・自動移動の純粋ロジック
pub mod systems;    // 盤面を遷移させる純粋関数たち

// よく使うものを再エクスポート！JS 側のエントリポイントはこの2つ。
pub use app::game_app::GameApp;
pub use app::drag_handler::RETURN_ANIMATION_MS;

/// console.log に文字列を出すヘルパーだよ。
/// wasm ターゲットではブラウザのコンソールへ、それ以外 (ネイティブの
/// テスト実行とか) では標準出力へ。どっちの環境でも安心して呼べる！
#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(message: &str) {
    println!("{}", message);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
// パニックの内容がブラウザのコンソールに出るようになる。デバッグの味方！
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    log("Panic hook set!");
}
