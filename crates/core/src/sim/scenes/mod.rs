//! Scene implementations, one module per lesson.

pub mod atom;
pub mod fluids;
pub mod interference;
pub mod kinematics;
pub mod optics;
pub mod vectors;
pub mod waves;

use super::geom::Color;

// Shared palette.
pub(crate) const BLUE: Color = Color::hex(0x3b82f6);
pub(crate) const RED: Color = Color::hex(0xef4444);
pub(crate) const GREEN: Color = Color::hex(0x10b981);
pub(crate) const PURPLE: Color = Color::hex(0xa855f7);
pub(crate) const SLATE: Color = Color::hex(0x64748b);
pub(crate) const SLATE_DARK: Color = Color::hex(0x475569);
pub(crate) const WHITE: Color = Color::hex(0xffffff);
pub(crate) const CYAN: Color = Color::hex(0x00bcd4);
