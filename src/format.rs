//! Value formatting - converts typed attribute inputs into their canonical text
//!
//! Every function here is pure and total. Callers only reach this module when a
//! value is present; an absent value means the attribute is never set at all.

use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;

/// Whole numbers from here on come out of `ryu` in exponent form (`1e16`)
const INTEGER_FORM_LIMIT: f64 = 1e16;

/// Formats a number the way it appears in an attribute value
///
/// Whole numbers drop the trailing `.0` (`50.0` -> `50`), everything else uses
/// the shortest representation that parses back to the same `f64`.
///
/// # Arguments
/// * `value` - The number to format
///
/// # Returns
/// The textual form, e.g. `"50"`, `"0.7"`, `"-12.25"`
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < INTEGER_FORM_LIMIT {
        // `as i64` also folds -0.0 into 0
        return (value as i64).to_string();
    }
    let mut buffer = ryu::Buffer::new();
    buffer.format(value).to_string()
}

/// Formats a coordinate list as `"x,y x,y ..."`
pub fn format_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", format_number(*x), format_number(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a list of numbers separated by single spaces (dash arrays, rotate lists)
pub fn format_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Anything that can be written as an attribute value
pub trait AttributeValue {
    fn to_attribute_value(&self) -> String;
}

impl AttributeValue for f64 {
    fn to_attribute_value(&self) -> String {
        format_number(*self)
    }
}

impl AttributeValue for f32 {
    fn to_attribute_value(&self) -> String {
        // Go through the f32 Display so 0.1f32 stays "0.1" instead of widening noise
        let widened: f64 = self.to_string().parse().unwrap_or(*self as f64);
        format_number(widened)
    }
}

macro_rules! integer_attribute_value {
    ($($ty:ty),*) => {
        $(
            impl AttributeValue for $ty {
                fn to_attribute_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_attribute_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl AttributeValue for bool {
    fn to_attribute_value(&self) -> String {
        let keyword = if *self { "true" } else { "false" };
        keyword.to_string()
    }
}

impl AttributeValue for str {
    fn to_attribute_value(&self) -> String {
        self.to_string()
    }
}

impl AttributeValue for String {
    fn to_attribute_value(&self) -> String {
        self.clone()
    }
}

impl<T: AttributeValue + ?Sized> AttributeValue for &T {
    fn to_attribute_value(&self) -> String {
        (**self).to_attribute_value()
    }
}

/// Unit suffix of a [`Length`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    None,
    Px,
    Percent,
    Em,
    Rem,
    Ex,
    Pt,
    Pc,
    Cm,
    Mm,
    In,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Ex => "ex",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
        }
    }
}

/// A dimension with an optional unit, e.g. `100`, `50%`, `2em`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Self {
        Length { value, unit }
    }

    pub fn number(value: f64) -> Self {
        Length::new(value, Unit::None)
    }

    pub fn px(value: f64) -> Self {
        Length::new(value, Unit::Px)
    }

    pub fn percent(value: f64) -> Self {
        Length::new(value, Unit::Percent)
    }

    pub fn em(value: f64) -> Self {
        Length::new(value, Unit::Em)
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Length::number(value)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit.suffix())
    }
}

impl AttributeValue for Length {
    fn to_attribute_value(&self) -> String {
        self.to_string()
    }
}

/// The `viewBox` rectangle: `min-x min-y width height`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        ViewBox { min_x, min_y, width, height }
    }

    /// A view box anchored at the origin
    pub fn sized(width: f64, height: f64) -> Self {
        ViewBox::new(0.0, 0.0, width, height)
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            format_number(self.min_x),
            format_number(self.min_y),
            format_number(self.width),
            format_number(self.height)
        )
    }
}

impl FromStr for ViewBox {
    type Err = anyhow::Error;

    /// Parses `"0 0 24 24"` or `"0,0,24,24"`
    fn from_str(s: &str) -> Result<Self> {
        let components = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<f64>()
                    .with_context(|| format!("invalid viewBox component '{}'", part))
            })
            .collect::<Result<Vec<f64>>>()?;

        anyhow::ensure!(
            components.len() == 4,
            "viewBox needs 4 numbers, found {} in '{}'",
            components.len(),
            s
        );
        Ok(ViewBox::new(components[0], components[1], components[2], components[3]))
    }
}

impl AttributeValue for ViewBox {
    fn to_attribute_value(&self) -> String {
        self.to_string()
    }
}

/// Declares a keyword enum together with its markup spelling
macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AttributeValue for $name {
            fn to_attribute_value(&self) -> String {
                self.as_str().to_string()
            }
        }
    };
}

keyword_enum!(
    /// Coordinate system for gradients, patterns, clip paths and masks
    GradientUnits {
        UserSpaceOnUse => "userSpaceOnUse",
        ObjectBoundingBox => "objectBoundingBox",
    }
);

keyword_enum!(
    SpreadMethod {
        Pad => "pad",
        Reflect => "reflect",
        Repeat => "repeat",
    }
);

keyword_enum!(
    FillRule {
        NonZero => "nonzero",
        EvenOdd => "evenodd",
    }
);

keyword_enum!(
    TextAnchor {
        Start => "start",
        Middle => "middle",
        End => "end",
    }
);

keyword_enum!(
    StrokeLinecap {
        Butt => "butt",
        Round => "round",
        Square => "square",
    }
);

keyword_enum!(
    StrokeLinejoin {
        Miter => "miter",
        Round => "round",
        Bevel => "bevel",
    }
);

keyword_enum!(
    MarkerUnits {
        StrokeWidth => "strokeWidth",
        UserSpaceOnUse => "userSpaceOnUse",
    }
);
