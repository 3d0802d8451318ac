//! Input domain — источники PlayerInput внутри симуляции
//!
//! Клавиатура/мышь живут в клиенте; здесь только scripted бот для headless.

pub mod scripted;

pub use scripted::*;
