//! # Common Foundation Crate
//!
//! Shared colors, geometry primitives, four-sided values, and error types for
//! the StyleLens overlay. Zero external dependencies.

#![forbid(unsafe_code)]

use core::fmt;
use std::ops::Add;

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// An RGBA color with 8 bits per channel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// Create a fully-opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Render as an uppercase CSS hex string: `#RRGGBB`, or `#RRGGBBAA` when
    /// the alpha channel is not fully opaque.
    pub fn to_css_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color(#{:02x}{:02x}{:02x}{:02x})",
            self.r, self.g, self.b, self.a
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css_hex())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Vec2 — 2D vector / point
// ─────────────────────────────────────────────────────────────────────────────

/// A 2D point with `f32` components (page coordinates).
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rect
// ─────────────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle: origin plus size.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.h
    }

    /// Point-in-rect test (edges inclusive).
    #[inline]
    pub fn contains(self, px: f32, py: f32) -> bool {
        px >= self.x && py >= self.y && px <= self.right() && py <= self.bottom()
    }

    /// Whether `other` lies entirely inside `self`.
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Edges<T>
// ─────────────────────────────────────────────────────────────────────────────

/// Four-sided values (margin, padding, border sides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Edges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T> Edges<T> {
    #[inline]
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self { top, right, bottom, left }
    }
}

impl<T: PartialEq> Edges<T> {
    /// Whether all four sides carry the same value.
    ///
    /// Drives the panel's collapsed `border` line: uniform sides render as a
    /// single shorthand entry instead of four directional ones.
    pub fn uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LensError — top-level error type
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level error type that every subsystem maps into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LensError {
    /// The target page refuses injection (internal/restricted URL).
    RestrictedPage(String),
}

impl fmt::Display for LensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RestrictedPage(url) => write!(f, "restricted page: {url}"),
        }
    }
}

impl std::error::Error for LensError {}

// ═════════════════════════════════════════════════════════════════════════════
// Tests
// ═════════════════════════════════════════════════════════════════════════════
