use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::Placement;

/// An opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB` or `#RRGGBB` (the leading `#` is required).
    ///
    /// `#RGBA` and `#RRGGBBAA` are accepted too; the alpha digits are validated and dropped.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().strip_prefix('#').ok_or(ColorParseError::MissingHash)?;

        let nibble = |c: u8| -> Result<u8, ColorParseError> {
            match c {
                b'0'..=b'9' => Ok(c - b'0'),
                b'a'..=b'f' => Ok(c - b'a' + 10),
                b'A'..=b'F' => Ok(c - b'A' + 10),
                _ => Err(ColorParseError::InvalidHex),
            }
        };

        let bytes = digits.as_bytes();
        for &c in bytes {
            nibble(c)?;
        }
        match bytes.len() {
            3 | 4 => Ok(Self::new(
                nibble(bytes[0])? * 17,
                nibble(bytes[1])? * 17,
                nibble(bytes[2])? * 17,
            )),
            6 | 8 => {
                let byte = |hi: u8, lo: u8| -> Result<u8, ColorParseError> {
                    Ok((nibble(hi)? << 4) | nibble(lo)?)
                };
                Ok(Self::new(
                    byte(bytes[0], bytes[1])?,
                    byte(bytes[2], bytes[3])?,
                    byte(bytes[4], bytes[5])?,
                ))
            }
            0 => Err(ColorParseError::Empty),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Per-channel linear interpolation, rounding half up.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        fn channel(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let v = a + (f64::from(b) - a) * t;
            // `v` is within [0, 255]; truncating `v + 0.5` is round-half-up.
            (v + 0.5) as u8
        }
        Self::new(
            channel(self.r, other.r, t),
            channel(self.g, other.g, t),
            channel(self.b, other.b, t),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("color must start with '#'")]
    MissingHash,
    #[error("invalid hex length")]
    InvalidLength,
    #[error("invalid hex digits")]
    InvalidHex,
}

/// The fixed hue cycle used by rainbow coloring.
pub const RAINBOW: [Rgb; 7] = [
    Rgb::new(0xFF, 0x00, 0x00),
    Rgb::new(0xFF, 0x7F, 0x00),
    Rgb::new(0xFF, 0xFF, 0x00),
    Rgb::new(0x00, 0xFF, 0x00),
    Rgb::new(0x00, 0x00, 0xFF),
    Rgb::new(0x4B, 0x00, 0x82),
    Rgb::new(0x94, 0x00, 0xD3),
];

/// Wraps `index` into `[0, len)`. Non-finite input maps to 0.
pub fn wrap_phase(index: f64, len: f64) -> f64 {
    if !index.is_finite() || len <= 0.0 {
        return 0.0;
    }
    let mut r = index % len;
    if r < 0.0 {
        r += len;
    }
    if r >= len { 0.0 } else { r }
}

/// Samples the cyclic `palette` at a fractional `index`.
///
/// Neighbours are `floor(index)` and `ceil(index)`, both taken modulo the palette length, so
/// the cycle wraps smoothly. At an integer index the palette entry is returned unchanged.
pub fn interpolate(palette: &[Rgb], index: f64) -> Rgb {
    let len = palette.len();
    if len == 0 {
        return Rgb::WHITE;
    }
    let index = wrap_phase(index, len as f64);
    let lo = index as usize;
    let fraction = index - lo as f64;
    let hi = if fraction > 0.0 { lo + 1 } else { lo };
    palette[lo % len].lerp(palette[hi % len], fraction)
}

/// Rainbow position of the `i`-th of `n` settled items.
///
/// Bottom placement counts from the far end so the anchored edge keeps a stable hue.
pub fn rainbow_position(i: usize, n: usize, placement: Placement) -> usize {
    match placement {
        Placement::Top => i,
        Placement::Bottom => n.saturating_sub(1).saturating_sub(i),
    }
}

/// Category name → color table used by [`ColorMode::Categorized`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryColors(BTreeMap<String, Rgb>);

impl CategoryColors {
    /// A table with no entries. [`CategoryColors::default`] holds the stock categories.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Builds a table from `(category, "#hex")` pairs.
    pub fn parse<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ColorParseError> {
        let mut table = Self::empty();
        for (category, hex) in entries {
            table.insert(category, Rgb::from_hex(hex)?);
        }
        Ok(table)
    }

    pub fn insert(&mut self, category: impl Into<String>, color: Rgb) -> Option<Rgb> {
        self.0.insert(category.into(), color)
    }

    pub fn get(&self, category: &str) -> Option<Rgb> {
        self.0.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for CategoryColors {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("visual", Rgb::new(0x7F, 0xE5, 0x66));
        table.insert("movement", Rgb::new(0xFF, 0x99, 0x4C));
        table.insert("player", Rgb::new(0x19, 0x99, 0xE5));
        table.insert("world", Rgb::new(0xE5, 0x7F, 0xE5));
        table.insert("misc", Rgb::new(0xFF, 0xE5, 0x4C));
        table.insert("combat", Rgb::new(0xE5, 0x33, 0x33));
        table
    }
}

impl<S: Into<String>> FromIterator<(S, Rgb)> for CategoryColors {
    fn from_iter<I: IntoIterator<Item = (S, Rgb)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Color policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorMode {
    /// Position- and phase-dependent gradient over [`RAINBOW`].
    #[default]
    Rainbow,
    /// Per-category color from the table, white when unmapped.
    Categorized,
    /// One color for every item.
    Literal(Rgb),
    /// Opaque white.
    Fallback,
}

impl ColorMode {
    /// Parses a color-mode string: `"rainbow"`, `"categorized"`, a `#hex` literal, or anything
    /// else (which selects [`ColorMode::Fallback`]).
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        match s {
            "rainbow" => Ok(Self::Rainbow),
            "categorized" => Ok(Self::Categorized),
            _ if s.starts_with('#') => Rgb::from_hex(s).map(Self::Literal),
            _ => Ok(Self::Fallback),
        }
    }

    /// Whether the computed color depends on the item's position or the clock phase.
    pub fn is_positional(self) -> bool {
        matches!(self, Self::Rainbow)
    }
}

impl FromStr for ColorMode {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A color policy bound to its inputs for one recoloring pass.
#[derive(Clone, Copy, Debug)]
pub struct ColorEngine<'a> {
    pub mode: ColorMode,
    pub categories: &'a CategoryColors,
    pub palette: &'a [Rgb],
    pub placement: Placement,
    pub offset: f64,
}

impl ColorEngine<'_> {
    /// Color of the `index`-th of `settled` settled items carrying `category`.
    pub fn color_for(&self, index: usize, settled: usize, category: Option<&str>) -> Rgb {
        match self.mode {
            ColorMode::Rainbow => {
                let pos = rainbow_position(index, settled, self.placement);
                interpolate(self.palette, pos as f64 + self.offset)
            }
            ColorMode::Categorized => category
                .and_then(|c| self.categories.get(c))
                .unwrap_or(Rgb::WHITE),
            ColorMode::Literal(color) => color,
            ColorMode::Fallback => Rgb::WHITE,
        }
    }

    /// Color for a position-independent mode; `None` in rainbow mode.
    pub fn static_color(&self, category: Option<&str>) -> Option<Rgb> {
        if self.mode.is_positional() {
            return None;
        }
        Some(self.color_for(0, 1, category))
    }
}
