//! Static profile content: skill list, headline labels and overlay text.

use crate::color::{Color, ColorError};
use crate::constants::*;
use glam::Vec3;

/// One floating skill cube: where it sits, what color it is, what it says.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillDescriptor {
    pub position: Vec3,
    pub color: Color,
    pub label: String,
}

impl SkillDescriptor {
    pub fn new(position: [f32; 3], color: Color, label: &str) -> Self {
        Self {
            position: Vec3::from(position),
            color,
            label: label.to_string(),
        }
    }

    /// Build from an authored hex color string such as `#ef4444`.
    pub fn parse(position: [f32; 3], color: &str, label: &str) -> Result<Self, ColorError> {
        Ok(Self::new(position, Color::parse(color)?, label))
    }
}

/// Position, hex color and label of each default skill cube.
pub type SkillRow<'a> = ([f32; 3], &'a str, &'a str);

pub const DEFAULT_SKILLS: [SkillRow<'static>; 4] = [
    ([-3.0, 1.0, 0.0], "#ef4444", "React"),
    ([3.0, 1.0, 0.0], "#3b82f6", "TypeScript"),
    ([-2.0, -1.0, 2.0], "#f59e0b", "Three.js"),
    ([2.0, -1.0, 2.0], "#8b5cf6", "Node.js"),
];

/// Horizontal/vertical text anchoring relative to the label position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    Start,
    #[default]
    Center,
    End,
}

/// Font reference for a label. `url` is fetched by the front-end.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSource {
    pub family: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelSpec {
    pub text: String,
    pub position: Vec3,
    /// Em height in world units.
    pub font_size: f32,
    pub color: Color,
    pub anchor_x: Anchor,
    pub anchor_y: Anchor,
    pub font: Option<FontSource>,
}

impl LabelSpec {
    pub fn centered(text: &str, position: Vec3, font_size: f32, color: Color) -> Self {
        Self {
            text: text.to_string(),
            position,
            font_size,
            color,
            anchor_x: Anchor::Center,
            anchor_y: Anchor::Center,
            font: None,
        }
    }
}

/// Fixed-position HTML blocks layered over the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayContent {
    pub heading: String,
    pub hint: String,
    pub contacts: Vec<String>,
}

impl Default for OverlayContent {
    fn default() -> Self {
        Self {
            heading: "3D プロフィール".to_string(),
            hint: "マウスでドラッグして回転、スクロールでズーム".to_string(),
            contacts: vec![
                "📧 your.email@example.com".to_string(),
                "🐙 github.com/yourusername".to_string(),
                "💼 linkedin.com/in/yourprofile".to_string(),
            ],
        }
    }
}

/// Everything the scene shows that is not a tuning constant.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileContent {
    pub name: LabelSpec,
    pub title: LabelSpec,
    pub skills: Vec<SkillDescriptor>,
    pub overlay: OverlayContent,
}

/// Parse a skill table. The first bad color aborts the whole table.
pub fn skills_from_table(rows: &[SkillRow<'_>]) -> Result<Vec<SkillDescriptor>, ColorError> {
    rows.iter()
        .map(|&(position, color, label)| SkillDescriptor::parse(position, color, label))
        .collect()
}

pub fn default_skills() -> Result<Vec<SkillDescriptor>, ColorError> {
    skills_from_table(&DEFAULT_SKILLS)
}

impl ProfileContent {
    /// The fixed profile page.
    pub fn new() -> Result<Self, ColorError> {
        let mut name = LabelSpec::centered(
            "石神　勇貴",
            Vec3::from(NAME_LABEL_POSITION),
            NAME_LABEL_FONT_SIZE,
            Color::WHITE,
        );
        name.font = Some(FontSource {
            family: NAME_FONT_FAMILY.to_string(),
            url: NAME_FONT_URL.to_string(),
        });
        Ok(Self {
            name,
            title: LabelSpec::centered(
                "フロントエンド開発者",
                Vec3::from(TITLE_LABEL_POSITION),
                TITLE_LABEL_FONT_SIZE,
                Color::parse(TITLE_LABEL_COLOR)?,
            ),
            skills: default_skills()?,
            overlay: OverlayContent::default(),
        })
    }
}
