//! Layout constants (inches and points)

use crate::errors::GeometryError;
use crate::types::{Length as Inches, Pt, Rect};

/// A frame known at compile time; validated when turned into a `Rect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Slot {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub const fn at_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub const fn at_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub fn rect(self) -> Result<Rect, GeometryError> {
        Rect::try_new(self.x, self.y, self.w, self.h)
    }
}

pub const BULLET: &str = "• ";

// Header chrome shared by content-style templates
pub const HEADER_HEIGHT: Inches = Inches::inches(1.2);
pub const HEADER_TITLE: Slot = Slot::new(0.5, 0.3, 12.333, 0.8);
pub const HEADER_TITLE_SIZE: Pt = Pt(36.0);

// Title slide
pub const TITLE_TEXT: Slot = Slot::new(0.5, 2.5, 12.333, 1.5);
pub const TITLE_SIZE: Pt = Pt(54.0);
pub const SUBTITLE_TEXT: Slot = Slot::new(0.5, 4.2, 12.333, 1.0);
pub const SUBTITLE_SIZE: Pt = Pt(28.0);

// Section divider
pub const ACCENT_BAR_WIDTH: Inches = Inches::inches(0.3);
pub const SECTION_TEXT: Slot = Slot::new(1.0, 3.0, 11.0, 1.5);
pub const SECTION_SIZE: Pt = Pt(48.0);

// Bulleted content
pub const BULLET_BODY: Slot = Slot::new(0.8, 1.8, 11.733, 5.0);
pub const BULLET_SIZE: Pt = Pt(24.0);
pub const BULLET_SPACE_AFTER: Pt = Pt(12.0);

// Two columns
pub const COLUMN_LEFT_X: f64 = 0.5;
pub const COLUMN_RIGHT_X: f64 = 7.0;
pub const COLUMN_HEADING: Slot = Slot::new(COLUMN_LEFT_X, 1.5, 5.5, 0.5);
pub const COLUMN_HEADING_SIZE: Pt = Pt(24.0);
pub const COLUMN_BODY: Slot = Slot::new(COLUMN_LEFT_X, 2.2, 5.5, 4.5);
pub const COLUMN_SIZE: Pt = Pt(20.0);
pub const COLUMN_SPACE_AFTER: Pt = Pt(8.0);

// Table
pub const TABLE_X: f64 = 0.667;
pub const TABLE_Y: f64 = 1.8;
pub const TABLE_WIDTH: Inches = Inches::inches(12.0);
pub const TABLE_ROW_HEIGHT: Inches = Inches::inches(0.5);

// Architecture stack
pub const LAYER_BOX: Slot = Slot::new(1.0, 1.8, 5.0, 1.0);
pub const LAYER_PITCH: f64 = 1.4;
pub const LAYER_SIZE: Pt = Pt(18.0);
pub const LAYER_LABEL_X: f64 = 7.0;
pub const LAYER_LABEL_WIDTH: f64 = 5.5;
pub const LAYER_LABEL_SIZE: Pt = Pt(16.0);
pub const LAYER_ARROW_WIDTH: f64 = 0.5;
pub const LAYER_ARROW_HEIGHT: f64 = 0.3;
/// Space between a layer box's bottom edge and the arrow below it
pub const LAYER_ARROW_GAP: f64 = 0.1;

// Flow
pub const FLOW_X: f64 = 0.5;
pub const FLOW_Y: f64 = 2.5;
pub const FLOW_BOX_WIDTH: f64 = 1.4;
pub const FLOW_BOX_HEIGHT: f64 = 1.5;
pub const FLOW_GAP: f64 = 0.15;
pub const FLOW_ARROW_DY: f64 = 0.6;
pub const FLOW_ARROW_HEIGHT: f64 = 0.3;
pub const FLOW_PRIMARY_SIZE: Pt = Pt(14.0);
pub const FLOW_SECONDARY_SIZE: Pt = Pt(11.0);

// Score interpretation
pub const SCORE_Y: f64 = 1.8;
pub const SCORE_PITCH: f64 = 1.3;
pub const SCORE_BADGE: Slot = Slot::new(0.5, SCORE_Y, 1.5, 1.0);
pub const SCORE_BADGE_SIZE: Pt = Pt(24.0);
pub const SCORE_LABEL: Slot = Slot::new(2.3, SCORE_Y, 4.0, 1.0);
pub const SCORE_LABEL_SIZE: Pt = Pt(20.0);
pub const SCORE_DESCRIPTION: Slot = Slot::new(7.0, SCORE_Y, 5.5, 1.0);
pub const SCORE_DESCRIPTION_SIZE: Pt = Pt(18.0);
