use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Straight (non-premultiplied) color from channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Color with a fractional alpha, as in CSS `rgba(r, g, b, a)`.
    pub fn rgb_alpha(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self::rgba(r, g, b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// `true` when alpha is zero.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Premultiplied `[r, g, b, a]` bytes.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }
        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }

    /// Scale every color channel by `1 - factor`, keeping alpha.
    pub fn darken(self, factor: f64) -> Self {
        let k = 1.0 - factor;
        let ch = |c: u8| (f64::from(c) * k).round().clamp(0.0, 255.0) as u8;
        Self::rgba(ch(self.r), ch(self.g), ch(self.b), self.a)
    }

    /// Channel-wise linear blend; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| {
            let af = f64::from(a);
            (af + (f64::from(b) - af) * t).round().clamp(0.0, 255.0) as u8
        };
        Self::rgba(
            ch(self.r, other.r),
            ch(self.g, other.g),
            ch(self.b, other.b),
            ch(self.a, other.a),
        )
    }

    /// Parse `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)`, `rgba(r, g, b, a)` with a
    /// fractional alpha, `transparent`, `white` or `black`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "transparent" => return Ok(Self::TRANSPARENT),
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            _ => {}
        }
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            return Self::parse_functional(s, args);
        }
        let hex = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> Result<u8, String> {
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        if !hex.is_ascii() {
            return Err(format!("invalid color \"{s}\""));
        }
        match hex.len() {
            6 => Ok(Self::rgb(
                hex_byte(&hex[0..2])?,
                hex_byte(&hex[2..4])?,
                hex_byte(&hex[4..6])?,
            )),
            8 => Ok(Self::rgba(
                hex_byte(&hex[0..2])?,
                hex_byte(&hex[2..4])?,
                hex_byte(&hex[4..6])?,
                hex_byte(&hex[6..8])?,
            )),
            _ => Err("color must be #RRGGBB, #RRGGBBAA or a keyword".to_owned()),
        }
    }

    fn parse_functional(original: &str, args: &str) -> Result<Self, String> {
        let inner = args
            .strip_suffix(')')
            .ok_or_else(|| format!("unterminated color \"{original}\""))?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();

        fn channel(v: &str) -> Result<u8, String> {
            v.parse::<u8>()
                .map_err(|_| format!("invalid color channel \"{v}\""))
        }

        match parts.as_slice() {
            [r, g, b] => Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => {
                let alpha: f64 = a
                    .parse()
                    .map_err(|_| format!("invalid alpha \"{a}\""))?;
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(format!("alpha {alpha} is outside [0, 1]"));
                }
                Ok(Self::rgb_alpha(channel(r)?, channel(g)?, channel(b)?, alpha))
            }
            _ => Err(format!("color \"{original}\" needs 3 or 4 components")),
        }
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => Self::parse(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
