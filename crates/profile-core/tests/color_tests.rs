// Host-side tests for color parsing and conversion.

use profile_core::{
    default_skills, skills_from_table, Color, ColorError, SkillDescriptor, SkillRow,
};

#[test]
fn parses_long_and_short_hex() {
    assert_eq!(Color::parse("#4f46e5"), Ok(Color::hex(0x4f46e5)));
    assert_eq!(Color::parse("10b981"), Ok(Color::hex(0x10b981)));
    assert_eq!(Color::parse("#fff"), Ok(Color::WHITE));
    assert_eq!(Color::parse(" #E5E7EB "), Ok(Color::hex(0xe5e7eb)));
}

#[test]
fn rejects_malformed_hex() {
    assert!(matches!(Color::parse("#12345"), Err(ColorError::BadLength(_))));
    assert!(matches!(Color::parse(""), Err(ColorError::BadLength(_))));
    assert!(matches!(Color::parse("#12345g"), Err(ColorError::BadDigit(_))));
    assert!(matches!(Color::parse("+12345"), Err(ColorError::BadDigit(_))));
}

#[test]
fn accepts_at_most_one_hash() {
    assert!(matches!(Color::parse("##fff"), Err(ColorError::BadDigit(_))));
    assert!(matches!(Color::parse("###ef4444"), Err(ColorError::BadDigit(_))));
    assert!(matches!(Color::parse("# fff"), Err(ColorError::BadDigit(_))));
}

#[test]
fn default_skill_table_parses_to_authored_colors() {
    let skills = default_skills().unwrap();
    let colors: Vec<Color> = skills.iter().map(|s| s.color).collect();
    assert_eq!(
        colors,
        vec![
            Color::hex(0xef4444),
            Color::hex(0x3b82f6),
            Color::hex(0xf59e0b),
            Color::hex(0x8b5cf6),
        ]
    );
    assert_eq!(skills[1].label, "TypeScript");
}

#[test]
fn bad_table_color_is_reported() {
    let rows: [SkillRow<'static>; 2] = [
        ([0.0, 0.0, 0.0], "#ef4444", "ok"),
        ([1.0, 0.0, 0.0], "#ef44", "short"),
    ];
    assert_eq!(
        skills_from_table(&rows),
        Err(ColorError::BadLength("#ef44".to_string()))
    );
    assert!(matches!(
        SkillDescriptor::parse([0.0; 3], "##ef4444", "x"),
        Err(ColorError::BadDigit(_))
    ));
}

#[test]
fn linear_conversion_endpoints() {
    let white = Color::WHITE.to_linear();
    assert!((white.x - 1.0).abs() < 1e-6);
    assert_eq!(white.w, 1.0);
    let black = Color::hex(0).to_linear();
    assert_eq!(black.x, 0.0);
    // Mid grey is darker in linear light.
    let grey = Color::hex(0x808080).to_linear();
    assert!(grey.x > 0.2 && grey.x < 0.23);
}
