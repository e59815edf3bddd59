//! Technology name → terminal glyph.

/// Glyph used for anything not in the table.
pub const FALLBACK_ICON: &str = "◇";

const ICONS: &[(&str, &str)] = &[
    ("React", "⚛"),
    ("React Native", "⚛"),
    ("Next.js", "▲"),
    ("Redux", "◎"),
    ("TypeScript", "Ꞁ"),
    ("JavaScript", "ʝ"),
    ("Tailwind CSS", "≈"),
    ("Node.js", "⬢"),
    ("Django/DRF", "ɖ"),
    ("Django", "ɖ"),
    ("Spring Boot", "❦"),
    ("REST APIs", "⇄"),
    ("MySQL", "◍"),
    ("MongoDB", "❧"),
    ("PostgreSQL", "◉"),
    ("Git/GitHub", "⎇"),
    ("Jira", "◆"),
    ("Docker", "▣"),
    ("Agile", "↻"),
    ("OOP", "▦"),
    ("Design Patterns", "▤"),
    ("Machine Learning basics (TensorFlow, PyTorch, Scikit-learn)", "∑"),
    ("Expo", "△"),
    ("Celery", "⚙"),
    ("Redis", "◈"),
];

/// Resolve by name, then by `label`, then fall back.
pub fn resolve_icon(name: &str, label: Option<&str>) -> &'static str {
    lookup(name)
        .or_else(|| label.and_then(lookup))
        .unwrap_or(FALLBACK_ICON)
}

/// Icon for `name`, or the fallback glyph.
pub fn tech_icon(name: &str) -> &'static str {
    resolve_icon(name, None)
}

fn lookup(name: &str) -> Option<&'static str> {
    ICONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, icon)| *icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(tech_icon("React"), "⚛");
        assert_eq!(tech_icon("Docker"), "▣");
    }

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(tech_icon("PL/SQL"), FALLBACK_ICON);
        assert_eq!(tech_icon(""), FALLBACK_ICON);
    }

    #[test]
    fn label_is_second_choice() {
        assert_eq!(resolve_icon("Whatever", Some("Redis")), "◈");
        assert_eq!(resolve_icon("Docker", Some("Redis")), "▣");
        assert_eq!(resolve_icon("Whatever", Some("Unknown")), FALLBACK_ICON);
    }
}
