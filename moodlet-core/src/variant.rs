//! Variant palette for moodlet pills.
//!
//! Every [`Variant`] carries two complete [`VisualStyle`] profiles: one for an
//! interactive pill and one for a read-only pill. Resolution is a plain table
//! lookup; the built-in table is `const` and is checked for completeness by
//! the compiler through an exhaustive `match`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 24-bit sRGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build a color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(format!("'{}' must start with '#'", s)))?;

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(format!(
                "'{}' is not a #RRGGBB color",
                s
            )));
        }

        u32::from_str_radix(digits, 16)
            .map(Rgb::hex)
            .map_err(|e| Error::InvalidColor(format!("'{}': {}", s, e)))
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Resolved colors for one pill in one interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualStyle {
    pub border: Rgb,
    #[serde(alias = "color")]
    pub foreground: Rgb,
    #[serde(alias = "bg")]
    pub background: Rgb,
    #[serde(alias = "hoverBorder")]
    pub hover_border: Rgb,
    #[serde(alias = "hoverColor")]
    pub hover_foreground: Rgb,
    #[serde(alias = "hoverBg")]
    pub hover_background: Rgb,
}

impl VisualStyle {
    /// A style that looks the same whether hovered or not.
    pub const fn flat(border: Rgb, foreground: Rgb, background: Rgb) -> Self {
        Self {
            border,
            foreground,
            background,
            hover_border: border,
            hover_foreground: foreground,
            hover_background: background,
        }
    }

    /// A filled style whose border matches its fill, darkening on hover.
    pub const fn filled(fill: Rgb, foreground: Rgb, hover_fill: Rgb) -> Self {
        Self {
            border: fill,
            foreground,
            background: fill,
            hover_border: hover_fill,
            hover_foreground: foreground,
            hover_background: hover_fill,
        }
    }

    /// All six colors, resting colors first.
    pub fn colors(&self) -> [Rgb; 6] {
        [
            self.border,
            self.foreground,
            self.background,
            self.hover_border,
            self.hover_foreground,
            self.hover_background,
        ]
    }
}

/// Interactive and read-only profiles of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantStyles {
    pub readonly: VisualStyle,
    #[serde(alias = "button")]
    pub interactive: VisualStyle,
}

impl VariantStyles {
    /// Pick the profile for an interaction mode.
    pub fn for_mode(&self, read_only: bool) -> VisualStyle {
        if read_only {
            self.readonly
        } else {
            self.interactive
        }
    }
}

/// Named visual treatment of a pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Brand purple.
    Primary,
    /// Greyed out.
    Inactive,
    /// Brand teal.
    Secondary,
    /// In-progress blue.
    Blue,
    /// Success green.
    Green,
    /// Danger red.
    Red,
    /// Warning yellow.
    Yellow,
    /// Light purple used for empty slots.
    Placeholder,
    /// Muted look for unavailable pills.
    Disabled,
}

impl Variant {
    /// Number of variants.
    pub const COUNT: usize = 9;

    /// All variants, in table order.
    pub const ALL: [Variant; Variant::COUNT] = [
        Variant::Primary,
        Variant::Inactive,
        Variant::Secondary,
        Variant::Blue,
        Variant::Green,
        Variant::Red,
        Variant::Yellow,
        Variant::Placeholder,
        Variant::Disabled,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Convert to the identifier used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Inactive => "inactive",
            Variant::Secondary => "secondary",
            Variant::Blue => "blue",
            Variant::Green => "green",
            Variant::Red => "red",
            Variant::Yellow => "yellow",
            Variant::Placeholder => "placeholder",
            Variant::Disabled => "disabled",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_lowercase();
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| Error::Config(format!("Unknown variant: {}", s)))
    }
}

const WHITE: Rgb = Rgb::hex(0xFFFFFF);
const BLACK: Rgb = Rgb::hex(0x000000);

/// Built-in palette entry for a variant.
const fn builtin_styles(variant: Variant) -> VariantStyles {
    match variant {
        Variant::Primary => VariantStyles {
            readonly: VisualStyle::flat(Rgb::hex(0x824DFF), Rgb::hex(0x824DFF), Rgb::hex(0xE2DEED)),
            interactive: VisualStyle::filled(Rgb::hex(0x824DFF), WHITE, Rgb::hex(0x6D0EF1)),
        },
        Variant::Inactive => VariantStyles {
            readonly: VisualStyle::flat(Rgb::hex(0x808080), Rgb::hex(0x808080), Rgb::hex(0xD3CEE3)),
            interactive: VisualStyle::filled(Rgb::hex(0x998DBF), WHITE, Rgb::hex(0x6E5CA3)),
        },
        Variant::Secondary => VariantStyles {
            readonly: VisualStyle::flat(Rgb::hex(0x09A7AA), Rgb::hex(0x09A7AA), Rgb::hex(0xCCFFE9)),
            interactive: VisualStyle::filled(Rgb::hex(0x09A7AA), WHITE, Rgb::hex(0x007780)),
        },
        Variant::Blue => VariantStyles {
            readonly: VisualStyle::flat(Rgb::hex(0x0B94D8), Rgb::hex(0x0B94D8), Rgb::hex(0xB2E5FF)),
            interactive: VisualStyle::filled(Rgb::hex(0x0B94D8), WHITE, Rgb::hex(0x005580)),
        },
        Variant::Green => VariantStyles {
            readonly: VisualStyle::flat(Rgb::hex(0x319B31), Rgb::hex(0x319B31), Rgb::hex(0xD6F6D6)),
            interactive: VisualStyle::filled(Rgb::hex(0x319B31), WHITE, Rgb::hex(0x247524)),
        },
        Variant::Red => VariantStyles {
            readonly: VisualStyle::flat(Rgb::hex(0xD22D5C), Rgb::hex(0xD22D5C), Rgb::hex(0xF6D6E4)),
            interactive: VisualStyle::filled(Rgb::hex(0xD22D5C), WHITE, Rgb::hex(0xA82443)),
        },
        Variant::Yellow => VariantStyles {
            readonly: VisualStyle::flat(Rgb::hex(0xC39100), Rgb::hex(0xC39100), Rgb::hex(0xFEFFCF)),
            interactive: VisualStyle::filled(Rgb::hex(0xFFD116), BLACK, Rgb::hex(0xC39100)),
        },
        Variant::Placeholder => {
            let style =
                VisualStyle::flat(Rgb::hex(0x824DFF), Rgb::hex(0x824DFF), Rgb::hex(0xBDB2FF));
            VariantStyles {
                readonly: style,
                interactive: style,
            }
        }
        Variant::Disabled => {
            let style =
                VisualStyle::flat(Rgb::hex(0x998DBF), Rgb::hex(0x998DBF), Rgb::hex(0xE2DEED));
            VariantStyles {
                readonly: style,
                interactive: style,
            }
        }
    }
}

const fn builtin_entries() -> [VariantStyles; Variant::COUNT] {
    let mut entries = [builtin_styles(Variant::Primary); Variant::COUNT];
    let mut i = 0;
    while i < Variant::COUNT {
        entries[i] = builtin_styles(Variant::ALL[i]);
        i += 1;
    }
    entries
}

static BUILTIN: StyleTable = StyleTable {
    entries: builtin_entries(),
};

/// Complete mapping from variant to its two style profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    entries: [VariantStyles; Variant::COUNT],
}

impl StyleTable {
    /// The built-in product palette.
    pub fn builtin() -> &'static StyleTable {
        &BUILTIN
    }

    /// Build a table from explicit entries.
    ///
    /// Every variant must be present. A missing entry is reported as
    /// [`Error::IncompleteStyleTable`]; no default is substituted. When a
    /// variant appears more than once the last entry wins.
    pub fn from_entries(entries: impl IntoIterator<Item = (Variant, VariantStyles)>) -> Result<Self> {
        let mut slots: [Option<VariantStyles>; Variant::COUNT] = [None; Variant::COUNT];
        for (variant, styles) in entries {
            slots[variant.index()] = Some(styles);
        }

        let mut table = BUILTIN.clone();
        for variant in Variant::ALL {
            table.entries[variant.index()] =
                slots[variant.index()].ok_or(Error::IncompleteStyleTable { variant })?;
        }
        Ok(table)
    }

    /// Both profiles of a variant.
    pub fn get(&self, variant: Variant) -> &VariantStyles {
        &self.entries[variant.index()]
    }

    /// Resolve the style for a variant in an interaction mode.
    pub fn resolve(&self, variant: Variant, read_only: bool) -> VisualStyle {
        self.get(variant).for_mode(read_only)
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

/// Resolve a style from the built-in palette.
pub fn resolve(variant: Variant, read_only: bool) -> VisualStyle {
    BUILTIN.resolve(variant, read_only)
}
