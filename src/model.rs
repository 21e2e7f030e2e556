//! Core data types shared by the trackers and the renderers.
//! Everything here is platform independent; the browser glue lives in `input`.

use std::fmt;

use crate::error::Error;

/// Surface-local position in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One active finger within a single event. `slot` is only meaningful for
/// that event; lifting and re-touching may hand the same finger a new slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub slot: usize,
    pub pos: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchKind {
    /// First finger down; starts a new stroke.
    Begin,
    /// Another finger joined while at least one was already down.
    PointerDown,
    Move,
    /// A finger lifted while others remain down.
    PointerUp,
    /// Last finger lifted.
    End,
    Cancel,
}

/// A touch event after it has been lifted out of the platform's types.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchInput {
    pub kind: TouchKind,
    /// Active pointers in platform slot order.
    pub pointers: Vec<Point>,
}

impl TouchInput {
    pub fn new(kind: TouchKind, pointers: Vec<Point>) -> Self {
        Self { kind, pointers }
    }

    pub fn count(&self) -> usize {
        self.pointers.len()
    }

    /// Position of pointer 0, the one the freehand stroke follows.
    pub fn primary(&self) -> Option<Point> {
        self.pointers.first().copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn as_css(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0x00, 0x00, 0x00);
    pub const RED: Rgba = Rgba::rgb(0xFF, 0x00, 0x00);
    pub const YELLOW: Rgba = Rgba::rgb(0xFF, 0xFF, 0x00);
    pub const GREEN: Rgba = Rgba::rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Rgba = Rgba::rgb(0x00, 0x00, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Accepts `#rrggbb` and `#rrggbbaa`.
    pub fn parse_hex(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)?, a })
    }

    /// CSS string usable as a canvas fill/stroke style.
    pub fn to_css(self) -> String {
        if self.a == 0xFF {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Default finger palette: red, deep orange, yellow, green, blue, indigo, purple.
pub const DEFAULT_PALETTE: [Rgba; 7] = [
    Rgba::RED,
    Rgba::rgb(0xFF, 0x57, 0x22),
    Rgba::YELLOW,
    Rgba::GREEN,
    Rgba::BLUE,
    Rgba::rgb(0x3F, 0x51, 0xB5),
    Rgba::rgb(0x9C, 0x27, 0xB0),
];

pub const DEFAULT_CIRCLE_RADIUS: f64 = 100.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 30.0;
