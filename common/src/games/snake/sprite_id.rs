use std::fmt;

use super::orientation::{BodyOrientation, TailOrientation};
use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    HeadLeft,
    HeadRight,
    HeadUp,
    HeadDown,

    TailLeft,
    TailRight,
    TailUp,
    TailDown,

    BodyHorizontal,
    BodyVertical,
    BodyTopLeft,
    BodyTopRight,
    BodyBottomLeft,
    BodyBottomRight,

    Apple,
}

impl SpriteId {
    pub const ALL: [SpriteId; 15] = [
        SpriteId::HeadLeft,
        SpriteId::HeadRight,
        SpriteId::HeadUp,
        SpriteId::HeadDown,
        SpriteId::TailLeft,
        SpriteId::TailRight,
        SpriteId::TailUp,
        SpriteId::TailDown,
        SpriteId::BodyHorizontal,
        SpriteId::BodyVertical,
        SpriteId::BodyTopLeft,
        SpriteId::BodyTopRight,
        SpriteId::BodyBottomLeft,
        SpriteId::BodyBottomRight,
        SpriteId::Apple,
    ];

    pub fn head(direction: Direction) -> Self {
        match direction {
            Direction::Up => SpriteId::HeadUp,
            Direction::Down => SpriteId::HeadDown,
            Direction::Left => SpriteId::HeadLeft,
            Direction::Right => SpriteId::HeadRight,
        }
    }

    pub fn tail(orientation: TailOrientation) -> Self {
        match orientation {
            TailOrientation::Left => SpriteId::TailLeft,
            TailOrientation::Right => SpriteId::TailRight,
            TailOrientation::Up => SpriteId::TailUp,
            TailOrientation::Down => SpriteId::TailDown,
        }
    }

    pub fn body(orientation: BodyOrientation) -> Self {
        match orientation {
            BodyOrientation::Horizontal => SpriteId::BodyHorizontal,
            BodyOrientation::Vertical => SpriteId::BodyVertical,
            BodyOrientation::TopLeft => SpriteId::BodyTopLeft,
            BodyOrientation::TopRight => SpriteId::BodyTopRight,
            BodyOrientation::BottomLeft => SpriteId::BodyBottomLeft,
            BodyOrientation::BottomRight => SpriteId::BodyBottomRight,
        }
    }

    /// Asset file stem, e.g. `body_bottomleft` for `body_bottomleft.png`.
    pub fn name(self) -> &'static str {
        match self {
            SpriteId::HeadLeft => "head_left",
            SpriteId::HeadRight => "head_right",
            SpriteId::HeadUp => "head_up",
            SpriteId::HeadDown => "head_down",
            SpriteId::TailLeft => "tail_left",
            SpriteId::TailRight => "tail_right",
            SpriteId::TailUp => "tail_up",
            SpriteId::TailDown => "tail_down",
            SpriteId::BodyHorizontal => "body_horizontal",
            SpriteId::BodyVertical => "body_vertical",
            SpriteId::BodyTopLeft => "body_topleft",
            SpriteId::BodyTopRight => "body_topright",
            SpriteId::BodyBottomLeft => "body_bottomleft",
            SpriteId::BodyBottomRight => "body_bottomright",
            SpriteId::Apple => "apple",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.png", self.name())
    }
}

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
