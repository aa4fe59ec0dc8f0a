use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Anchor-relative placement intent.
///
/// `TopLeft` and `LeftTop` (and their siblings) are distinct values: they share an offset
/// reference point but align the overlay differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}

/// The anchor edge a position places the overlay against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Flip groups: a vertical flip lands on `Top`/`Bottom`, a horizontal one on `Left`/`Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlipAxis {
    Vertical,
    Horizontal,
}

impl Position {
    pub const ALL: [Position; 12] = [
        Position::Top,
        Position::Bottom,
        Position::Left,
        Position::Right,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
        Position::LeftTop,
        Position::LeftBottom,
        Position::RightTop,
        Position::RightBottom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Top => "Top",
            Position::Bottom => "Bottom",
            Position::Left => "Left",
            Position::Right => "Right",
            Position::TopLeft => "TopLeft",
            Position::TopRight => "TopRight",
            Position::BottomLeft => "BottomLeft",
            Position::BottomRight => "BottomRight",
            Position::LeftTop => "LeftTop",
            Position::LeftBottom => "LeftBottom",
            Position::RightTop => "RightTop",
            Position::RightBottom => "RightBottom",
        }
    }

    pub fn side(self) -> Side {
        match self {
            Position::Top | Position::TopLeft | Position::TopRight => Side::Top,
            Position::Bottom | Position::BottomLeft | Position::BottomRight => Side::Bottom,
            Position::Left | Position::LeftTop | Position::LeftBottom => Side::Left,
            Position::Right | Position::RightTop | Position::RightBottom => Side::Right,
        }
    }

    /// The flip group a position belongs to when it is used as a collision fallback.
    pub fn flip_axis(self) -> FlipAxis {
        match self.side() {
            Side::Top | Side::Bottom => FlipAxis::Vertical,
            Side::Left | Side::Right => FlipAxis::Horizontal,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| Error::UnknownPosition {
                name: name.to_string(),
            })
    }
}

/// Which anchor interaction opens the tooltip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerMode {
    #[default]
    Hover,
    Click,
}

impl TriggerMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TriggerMode::Hover => "Hover",
            TriggerMode::Click => "Click",
        }
    }
}

impl std::fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Hover" => Ok(Self::Hover),
            "Click" => Ok(Self::Click),
            other => Err(Error::UnknownTrigger {
                name: other.to_string(),
            }),
        }
    }
}

/// Visual variant tag. Opaque to placement; only the class resolver looks at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TooltipVariant {
    #[default]
    Default,
    Popup,
}

impl TooltipVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            TooltipVariant::Default => "Default",
            TooltipVariant::Popup => "Popup",
        }
    }
}

impl std::fmt::Display for TooltipVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TooltipVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Default" => Ok(Self::Default),
            "Popup" => Ok(Self::Popup),
            other => Err(Error::UnknownVariant {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for p in Position::ALL {
            assert_eq!(p.as_str().parse::<Position>().unwrap(), p);
        }
    }

    #[test]
    fn unknown_position_name_is_rejected() {
        let err = "Middle".parse::<Position>().unwrap_err();
        assert!(matches!(err, Error::UnknownPosition { ref name } if name == "Middle"));
        assert!("top".parse::<Position>().is_err());
    }

    #[test]
    fn compound_positions_keep_their_primary_side() {
        assert_eq!(Position::TopLeft.side(), Side::Top);
        assert_eq!(Position::LeftTop.side(), Side::Left);
        assert_eq!(Position::RightBottom.side(), Side::Right);
        assert_eq!(Position::BottomRight.flip_axis(), FlipAxis::Vertical);
        assert_eq!(Position::LeftBottom.flip_axis(), FlipAxis::Horizontal);
    }

    #[test]
    fn trigger_and_variant_parse() {
        assert_eq!("Click".parse::<TriggerMode>().unwrap(), TriggerMode::Click);
        assert!("DoubleClick".parse::<TriggerMode>().is_err());
        assert_eq!("Popup".parse::<TooltipVariant>().unwrap(), TooltipVariant::Popup);
        assert!("Fancy".parse::<TooltipVariant>().is_err());
    }
}
