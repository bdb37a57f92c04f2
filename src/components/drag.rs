// src/components/drag.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;

/// 正規化されたポインタ座標だよ！🖱️👆
///
/// マウスでもタッチでもペンでも、JS 側で clientX/clientY に揃えてから
/// この型で渡してもらう。コア側は入力デバイスの種類を一切知らない！
/// 座標の型は `f32`。アニメーションで滑らかに動かすなら小数が扱えると便利だからね。😉
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

/// ドラッグがどこから始まったかを表す閉じた列挙型だよ。
///
/// 文字列 + インデックスのゆるいペアじゃなくて enum にしておくことで、
/// 「存在しない移動元」をそもそも表現できなくするんだ。💪
/// 山札 (Stock) はクリックでめくるだけでドラッグはできないから、
/// ここに Stock のバリアントは無いよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragOrigin {
    /// 捨て札の一番上から。1枚だけつまめる。
    Waste,
    /// 場札から。列番号 (0-6) を持つ。表向きの連なりをまとめてつまめる。
    Tableau(usize),
}

/// ポインタを離した場所にあった山。JS 側のヒットテストが返してくる型だよ。
///
/// JSON で国境 (JS⇔Wasm) を越えるので serde を付けておく！
/// Foundation には中心座標も入れてもらう。着地エフェクト✨を出す場所として
/// そのまま使うためで、コアはレイアウトを計算しない約束だからね。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    /// 場札の列に落とした。
    Tableau { index: usize },
    /// 組札に落とした。center_x/center_y はその山の画面上の中心。
    Foundation { index: usize, center_x: f32, center_y: f32 },
}

/// ドラッグのライフサイクルの現在地。スナップショットで JS にも伝えるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    /// 何もつまんでない。
    Idle,
    /// つまんで動かしてる最中。
    Dragging,
    /// ドロップ失敗！開始位置へ戻るアニメーション中。
    Returning,
}

/// アクティブなジェスチャ 1 回分の情報だよ！🖱️➡️🃏
///
/// ポインタを押した瞬間に作られて、コミットか戻りアニメーション完了で破棄される。
/// 同時に存在できるのは最大 1 つだけ！
#[derive(Debug, Clone, PartialEq)]
pub struct DragContext {
    /// つまんでいるカードの連なり (場札なら表向きの連続列、捨て札なら1枚)。
    pub cards: Vec<Card>,
    /// どこからつまんだか。
    pub origin: DragOrigin,
    /// ドラッグ開始地点の座標。失敗したらここへスナップバックする。
    pub pointer_start: PointerSample,
    /// 今のポインタ座標。move のたびに更新されるよ。
    pub pointer_current: PointerSample,
    /// ポインタとカード左上のオフセット。描画のズレ防止用。
    pub offset: PointerSample,
}
