// src/app/mod.rs
//! アプリケーション層。ドラッグの状態機械と、JS とやり取りする境界を置くよ！

pub mod drag_handler;
pub mod game_app;
pub mod state_getter;
