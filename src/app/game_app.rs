// src/app/game_app.rs

// --- 必要なものをインポート ---
use js_sys::Function;
use log::{error, info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::app::drag_handler::{DragMachine, DropOutcome, FoundationLanding, RETURN_ANIMATION_MS};
use crate::app::state_getter;
use crate::components::drag::{DragOrigin, DropTarget, PointerSample};
use crate::components::game_state::GameState;
use crate::log;
use crate::logic::deck;
use crate::logic::rules;
use crate::systems::{auto_move_system, stock_system, timer_system};

/// 自動移動の結果を JS に伝える DTO。文字列メッセージじゃなくて
/// 構造化された答えを返すのがこのコアの流儀だよ。
#[derive(Debug, Serialize)]
struct AutoMoveOutcome {
    moved: bool,
    foundation_index: Option<usize>,
    suit: Option<&'static str>,
}

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
#[wasm_bindgen]
pub struct GameApp {
    /// 今のゲーム状態。遷移のたびに丸ごと新しい値に差し替わるよ。
    state: GameState,
    /// ドラッグの状態機械。
    drag: DragMachine,
    /// 組札着地の演出フック。`(suit, x, y)` で呼ばれる。演出専用！
    foundation_landing_callback: Option<Function>,
}

// GameApp 構造体のメソッドを実装していくよ！
#[wasm_bindgen]
impl GameApp {
    /// 新しいゲームを配った状態で起動するよ。
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        log("GameApp: Initializing...");
        let state = deck::deal_new_game();
        log("GameApp: Initialization complete.");
        Self {
            state,
            drag: DragMachine::new(),
            foundation_landing_callback: None,
        }
    }

    /// ニューゲーム！盤面を配り直して、進行中のドラッグも破棄。
    /// JS 側はこの後 1 秒タイマーを再開してね。
    pub fn request_new_game(&mut self) {
        info!("GameApp: New game requested.");
        self.state = deck::deal_new_game();
        self.drag.reset();
    }

    /// 1 秒タイマーの tick。経過時間を進めるよ。
    /// 戻り値は「タイマーを続けるべきか」。勝った後は false！
    pub fn tick(&mut self) -> bool {
        self.state = timer_system::tick(&self.state);
        !self.state.won
    }

    /// 山札クリック。めくる or リサイクル or 何もしない、は遷移側が判断。
    pub fn on_stock_click(&mut self) {
        self.state = stock_system::draw_from_stock(&self.state);
    }

    /// pointer-down。`origin_json` は `"Waste"` か `{"Tableau":3}` の形。
    /// ドラッグが始まったかどうかを返すよ。
    pub fn on_pointer_down(
        &mut self,
        origin_json: &str,
        card_index: usize,
        x: f32,
        y: f32,
        offset_x: f32,
        offset_y: f32,
    ) -> bool {
        let origin: DragOrigin = match serde_json::from_str(origin_json) {
            Ok(origin) => origin,
            Err(e) => {
                warn!("GameApp: Bad drag origin JSON ({}): {}", origin_json, e);
                return false;
            }
        };
        self.drag.pointer_down(
            &self.state,
            origin,
            card_index,
            PointerSample { x, y },
            PointerSample { x: offset_x, y: offset_y },
        )
    }

    /// pointer-move。座標の追跡だけ。
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.drag.pointer_move(PointerSample { x, y });
    }

    /// pointer-up。`hit_test_resolver` は JS の関数 `(x, y) -> JSON | null` で、
    /// 指を離した場所にある山を教えてくれる。画面のレイアウトを知ってるのは
    /// JS 側だけだから、コアはこのリゾルバ経由でしか座標を解釈しないよ。
    pub fn on_pointer_up(&mut self, x: f32, y: f32, hit_test_resolver: &Function) {
        let target = resolve_drop_target(hit_test_resolver, x, y);
        let outcome = self
            .drag
            .pointer_up(&self.state, PointerSample { x, y }, target);

        match outcome {
            DropOutcome::Committed { next, landing } => {
                self.state = next;
                if let Some(landing) = landing {
                    self.fire_foundation_landing(&landing);
                }
            }
            // 不成立なら状態はそのまま。JS 側は RETURN_ANIMATION_MS 後に
            // finish_return_animation を呼んでね。
            DropOutcome::Rejected | DropOutcome::Ignored => {}
        }
    }

    /// 戻りアニメーションが終わった合図 (不成立ドロップの 300ms 後)。
    pub fn finish_return_animation(&mut self) {
        self.drag.finish_return();
    }

    /// 自動移動を 1 手実行するよ。結果は JSON で返す。
    /// `center_resolver` は `(foundation_index) -> JSON {x, y} | null` の
    /// JS 関数。渡されていれば、着地エフェクトのフックも発火させる。
    pub fn request_auto_move(&mut self, center_resolver: Option<Function>) -> String {
        let outcome = match auto_move_system::apply_auto_move(&self.state) {
            Some((next, applied)) => {
                let suit = next.foundations[applied.foundation_index]
                    .last()
                    .map(|card| card.suit);
                self.state = next;

                if let (Some(suit), Some(resolver)) = (suit, center_resolver.as_ref()) {
                    if let Some(center) = resolve_foundation_center(resolver, applied.foundation_index) {
                        self.fire_foundation_landing(&FoundationLanding {
                            suit,
                            x: center.x,
                            y: center.y,
                        });
                    }
                }

                AutoMoveOutcome {
                    moved: true,
                    foundation_index: Some(applied.foundation_index),
                    suit: suit.map(|s| s.name()),
                }
            }
            None => AutoMoveOutcome { moved: false, foundation_index: None, suit: None },
        };

        serde_json::to_string(&outcome).unwrap_or_else(|e| {
            error!("GameApp: Failed to serialize auto-move outcome: {}", e);
            String::from("{\"moved\":false}")
        })
    }

    /// 組札着地の演出フックを登録するよ。`(suit, x, y)` で呼ばれる。
    pub fn set_foundation_landing_callback(&mut self, callback: Function) {
        self.foundation_landing_callback = Some(callback);
    }

    /// 盤面スナップショット (JSON)。レンダラーはこれを描くだけ！
    pub fn get_state_json(&self) -> String {
        state_getter::game_state_json(&self.state).unwrap_or_else(|_| String::from("{}"))
    }

    /// ドラッグオーバーレイのスナップショット (JSON)。
    pub fn get_drag_json(&self) -> String {
        state_getter::drag_state_json(&self.drag).unwrap_or_else(|_| String::from("{}"))
    }

    pub fn moves(&self) -> u32 {
        self.state.moves
    }

    pub fn elapsed(&self) -> u32 {
        self.state.elapsed
    }

    pub fn is_won(&self) -> bool {
        self.state.won
    }

    /// 着地フックを発火させる内部ヘルパー。演出だけ、状態には触らない！
    fn fire_foundation_landing(&self, landing: &FoundationLanding) {
        let Some(callback) = &self.foundation_landing_callback else {
            return;
        };
        let result = callback.call3(
            &JsValue::NULL,
            &JsValue::from_str(landing.suit.name()),
            &JsValue::from_f64(landing.x as f64),
            &JsValue::from_f64(landing.y as f64),
        );
        if let Err(e) = result {
            error!("GameApp: foundation landing callback failed: {:?}", e);
        }
    }
}

/// ヒットテストリゾルバを呼んで、結果の JSON を `DropTarget` に変換する。
/// null / undefined / パース失敗は「ターゲット無し」扱いだよ。
fn resolve_drop_target(resolver: &Function, x: f32, y: f32) -> Option<DropTarget> {
    let value = match resolver.call2(
        &JsValue::NULL,
        &JsValue::from_f64(x as f64),
        &JsValue::from_f64(y as f64),
    ) {
        Ok(value) => value,
        Err(e) => {
            error!("GameApp: hit test resolver threw: {:?}", e);
            return None;
        }
    };

    let text = value.as_string()?;
    match serde_json::from_str::<DropTarget>(&text) {
        Ok(target) => Some(target),
        Err(e) => {
            warn!("GameApp: Bad drop target JSON ({}): {}", text, e);
            None
        }
    }
}

/// 組札の中心座標リゾルバを呼ぶヘルパー。
fn resolve_foundation_center(resolver: &Function, foundation_index: usize) -> Option<PointerSample> {
    let value = match resolver.call1(&JsValue::NULL, &JsValue::from_f64(foundation_index as f64)) {
        Ok(value) => value,
        Err(e) => {
            error!("GameApp: foundation center resolver threw: {:?}", e);
            return None;
        }
    };

    let text = value.as_string()?;
    match serde_json::from_str::<PointerSample>(&text) {
        Ok(center) => Some(center),
        Err(e) => {
            warn!("GameApp: Bad foundation center JSON ({}): {}", text, e);
            None
        }
    }
}

/// 戻りアニメーションの長さ (ms)。JS 側の setTimeout 用。
#[wasm_bindgen]
pub fn return_animation_ms() -> u32 {
    RETURN_ANIMATION_MS
}

/// スート名 (アセットパスでもOK) が「光」かどうか。JS 側の CSS クラス分け用。
#[wasm_bindgen]
pub fn suit_is_light(name: &str) -> bool {
    rules::is_light_suit_name(name)
}
