// src/app/drag_handler.rs
//! Handles the card drag lifecycle (pointer down, move, up) as an explicit
//! state machine: Idle -> Dragging -> committed back to Idle, or Returning
//! while the snap-back animation plays.

use log::{debug, info, warn};

use crate::components::card::{Card, Suit};
use crate::components::drag::{DragContext, DragOrigin, DragPhase, DropTarget, PointerSample};
use crate::components::game_state::{GameState, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::logic::rules;
use crate::systems::move_card_system;

/// 戻りアニメーションの長さ (ミリ秒)。JS 側はこの時間の後に
/// `finish_return` を呼んでね。
pub const RETURN_ANIMATION_MS: u32 = 300;

/// ドラッグマシンの内部状態。フェーズとコンテキストを一体で持つことで、
/// 「Dragging なのにコンテキストが無い」みたいな中途半端な状態を
/// 型レベルで作れなくしてるよ。
#[derive(Debug, Clone, PartialEq)]
enum DragState {
    Idle,
    Dragging(DragContext),
    Returning(DragContext),
}

/// 組札への着地情報。パーティクル演出✨のためのデータで、
/// コアの状態には一切影響しないよ。
#[derive(Debug, Clone, PartialEq)]
pub struct FoundationLanding {
    pub suit: Suit,
    pub x: f32,
    pub y: f32,
}

/// pointer-up の結果。呼び出し側へ返す構造化された答えだよ。
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// 移動成立！`next` が新しいゲーム状態。組札に乗ったなら `landing` 付き。
    Committed {
        next: GameState,
        landing: Option<FoundationLanding>,
    },
    /// 移動不成立。状態はそのまま、戻りアニメーションへ。
    Rejected,
    /// ドラッグ中じゃなかった等、古いイベントだったので無視した。
    Ignored,
}

/// ポインタジェスチャをカード移動に変換する状態機械だよ。🖱️➡️🃏
///
/// 同時にアクティブにできるドラッグは 1 つだけ。Dragging か Returning の
/// 間に来た pointer-down は黙って無視する。ルール違反のドロップも
/// 例外じゃなくてただの「不成立」で、ゲーム状態には指一本触れない！
#[derive(Debug)]
pub struct DragMachine {
    state: DragState,
}

impl Default for DragMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl DragMachine {
    pub fn new() -> Self {
        Self { state: DragState::Idle }
    }

    /// 今のフェーズ。スナップショットで JS に伝える用。
    pub fn phase(&self) -> DragPhase {
        match self.state {
            DragState::Idle => DragPhase::Idle,
            DragState::Dragging(_) => DragPhase::Dragging,
            DragState::Returning(_) => DragPhase::Returning,
        }
    }

    /// アクティブなジェスチャのコンテキスト (あれば)。
    pub fn context(&self) -> Option<&DragContext> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(context) | DragState::Returning(context) => Some(context),
        }
    }

    /// pointer-down: ドラッグ開始を試みる。
    ///
    /// Idle の時だけ反応するよ。つまめたかどうかを bool で返す。
    /// つまむのは `origin` の山の `card_index` から末尾までの表向きの連なり
    /// (捨て札なら一番上の1枚)。裏向きのカードや空の山は掴めない！
    pub fn pointer_down(
        &mut self,
        state: &GameState,
        origin: DragOrigin,
        card_index: usize,
        sample: PointerSample,
        offset: PointerSample,
    ) -> bool {
        if !matches!(self.state, DragState::Idle) {
            debug!("[Drag] ドラッグ中/戻り中の pointer-down は無視するよ。");
            return false;
        }

        let Some(cards) = grab_cards(state, origin, card_index) else {
            debug!("[Drag] {:?} の {} 枚目は掴めないよ。", origin, card_index);
            return false;
        };

        info!("[Drag] {:?} から {} 枚掴んだよ！", origin, cards.len());
        self.state = DragState::Dragging(DragContext {
            cards,
            origin,
            pointer_start: sample,
            pointer_current: sample,
            offset,
        });
        true
    }

    /// pointer-move: 追跡座標を更新するだけ。
    ///
    /// ルールチェックも状態変更も一切なし！描画のための純粋な追跡だよ。
    /// Dragging 以外のフェーズに届いた move は古いイベントなので無視。
    pub fn pointer_move(&mut self, sample: PointerSample) {
        if let DragState::Dragging(context) = &mut self.state {
            context.pointer_current = sample;
        }
    }

    /// pointer-up: ドロップを解決する。
    ///
    /// `target` は JS 側のヒットテストが見つけた、指を離した場所の山。
    /// 置けるなら遷移を実行して `Committed`、置けないなら座標を開始地点に
    /// スナップバックして `Returning` フェーズへ入り `Rejected`。
    /// そもそもドラッグ中じゃなければ `Ignored`。
    pub fn pointer_up(
        &mut self,
        state: &GameState,
        sample: PointerSample,
        target: Option<DropTarget>,
    ) -> DropOutcome {
        let mut context = match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Idle => return DropOutcome::Ignored,
            DragState::Returning(context) => {
                // 戻りアニメーション中の up は古いジェスチャのもの。
                // フェーズを元に戻して無視！
                self.state = DragState::Returning(context);
                return DropOutcome::Ignored;
            }
            DragState::Dragging(context) => context,
        };
        context.pointer_current = sample;

        match try_commit(state, &context, target) {
            Some((next, landing)) => {
                info!("[Drag] ドロップ成立！🎉");
                DropOutcome::Committed { next, landing }
            }
            None => {
                info!("[Drag] ドロップ不成立。開始位置へ戻るよ。");
                // 見た目は掴んだ場所へスナップバック！
                context.pointer_current = context.pointer_start;
                self.state = DragState::Returning(context);
                DropOutcome::Rejected
            }
        }
    }

    /// 戻りアニメーションが終わった合図。Returning -> Idle。
    /// それ以外のフェーズで呼ばれても何もしない。
    pub fn finish_return(&mut self) {
        if matches!(self.state, DragState::Returning(_)) {
            debug!("[Drag] 戻りアニメーション完了。Idle に戻るよ。");
            self.state = DragState::Idle;
        }
    }

    /// 強制リセット (ニューゲーム用)。進行中のジェスチャは破棄！
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}

/// 掴むカードの連なりを盤面から切り出すヘルパー。盤面はいじらないよ。
///
/// * 捨て札: 一番上の 1 枚 (あれば)。
/// * 場札: `card_index` のカードが表向きなら、そこから末尾まで。
///   場札の不変条件 (表向きは末尾の連続区間だけ) があるから、
///   先頭が表向きなら連なり全部が表向きだよ。
fn grab_cards(state: &GameState, origin: DragOrigin, card_index: usize) -> Option<Vec<Card>> {
    match origin {
        DragOrigin::Waste => state.waste.last().map(|card| vec![card.clone()]),
        DragOrigin::Tableau(pile_index) => {
            let pile = state.tableau.get(pile_index)?;
            let card = pile.get(card_index)?;
            if !card.is_face_up {
                return None; // 裏向きは掴めない！
            }
            Some(pile[card_index..].to_vec())
        }
    }
}

/// ドロップ先ごとの合法性チェックと遷移の実行。
/// 置けない・ターゲットなし・遷移側での拒否、ぜんぶまとめて `None`。
fn try_commit(
    state: &GameState,
    context: &DragContext,
    target: Option<DropTarget>,
) -> Option<(GameState, Option<FoundationLanding>)> {
    let leading = context.cards.first()?;

    match target? {
        DropTarget::Tableau { index } => {
            if index >= TABLEAU_COUNT {
                warn!("[Drag] 場札インデックスが範囲外だよ ({})", index);
                return None;
            }
            if !rules::can_place_on_tableau(leading, state.tableau[index].last()) {
                return None;
            }
            let next = move_card_system::move_to_tableau(state, index, &context.cards, context.origin)?;
            Some((next, None))
        }
        DropTarget::Foundation { index, center_x, center_y } => {
            if index >= FOUNDATION_COUNT {
                warn!("[Drag] 組札インデックスが範囲外だよ ({})", index);
                return None;
            }
            // 組札に乗せられるのは 1 枚だけ！連なりごとはダメ！
            if context.cards.len() != 1 {
                return None;
            }
            if !rules::can_place_on_foundation(leading, &state.foundations[index]) {
                return None;
            }
            let suit = leading.suit;
            let next = move_card_system::move_to_foundation(state, index, leading, context.origin)?;
            Some((next, Some(FoundationLanding { suit, x: center_x, y: center_y })))
        }
    }
}
