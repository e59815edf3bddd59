mod common;

use common::{sample_content, temp_file, SAMPLE_CONTENT};
use folio::content::icons::{resolve_icon, tech_icon, FALLBACK_ICON};
use folio::content::plain::render_plain;
use folio::content::{Content, ContentError};
use folio::ui::rotator::RotationState;

#[test]
fn builtin_content_is_valid() {
    let content = Content::builtin().unwrap();
    assert!(!content.profile.name.is_empty());
    assert_eq!(content.profile.titles.len(), 5);
    assert_eq!(content.profile.titles[0], "Full-Stack Developer");
    assert!(RotationState::new(content.profile.titles.iter().cloned()).is_ok());
    assert!(!content.skills.is_empty());
    assert!(!content.projects.is_empty());
    assert!(!content.experience.is_empty());
}

#[test]
fn load_without_path_uses_builtin() {
    assert_eq!(Content::load(None).unwrap(), Content::builtin().unwrap());
}

#[test]
fn load_from_file() {
    let (_dir, path) = temp_file("portfolio.toml", SAMPLE_CONTENT);
    let content = Content::load(Some(&path)).unwrap();
    assert_eq!(content, sample_content());
    assert_eq!(content.profile.titles, vec!["Engineer", "Writer"]);
    assert_eq!(
        content.projects[0].links.code.as_deref(),
        Some("https://example.com/folio")
    );
    assert!(content.projects[0].links.demo.is_none());
}

#[test]
fn missing_file_is_a_read_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let result = Content::load_from(&temp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ContentError::ReadError { .. })));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let (_dir, path) = temp_file("portfolio.toml", "[profile\nname = 1");
    assert!(matches!(
        Content::load_from(&path),
        Err(ContentError::ParseError { .. })
    ));
}

#[test]
fn empty_titles_are_rejected() {
    let text = SAMPLE_CONTENT.replace(r#"titles = ["Engineer", "Writer"]"#, "titles = []");
    let (_dir, path) = temp_file("portfolio.toml", &text);
    let err = Content::load_from(&path).unwrap_err();
    assert!(matches!(err, ContentError::ValidationError { .. }));
    assert!(err.to_string().contains("profile.titles"));
}

#[test]
fn blank_title_is_rejected() {
    let text = SAMPLE_CONTENT.replace(r#"titles = ["Engineer", "Writer"]"#, r#"titles = ["Engineer", ""]"#);
    let (_dir, path) = temp_file("portfolio.toml", &text);
    let err = Content::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("profile.titles[1] is empty"));
}

#[test]
fn timeline_is_most_recent_first() {
    let content = sample_content();
    let timeline = content.timeline();

    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].item.org, "Second Co");
    assert_eq!((timeline[0].position, timeline[0].total), (2, 2));
    assert_eq!(timeline[1].item.org, "First Co");
    assert_eq!((timeline[1].position, timeline[1].total), (1, 2));
}

#[test]
fn unknown_technology_gets_fallback_icon() {
    assert_eq!(tech_icon("COBOL"), FALLBACK_ICON);
    assert_eq!(resolve_icon("COBOL", Some("React")), tech_icon("React"));
    assert_ne!(tech_icon("React"), FALLBACK_ICON);
}

#[test]
fn plain_rendering_lists_every_section() {
    let text = render_plain(&sample_content());

    assert!(text.starts_with("Ada Example\n"));
    for heading in ["SKILLS", "PROJECTS", "EXPERIENCE", "CONTACT"] {
        assert!(text.contains(heading), "missing {heading}");
    }
    assert!(text.contains("ML,") || text.contains("ML\n"));
    assert!(!text.contains("basics ("));

    let second = text.find("Second Co").unwrap();
    let first = text.find("First Co").unwrap();
    assert!(second < first);
}
