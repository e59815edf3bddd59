//! Plain-text rendering for `--plain` and non-interactive output.

use std::fmt::Write;

use crate::content::icons::tech_icon;
use crate::content::types::{skill_label, Content};

pub fn render_plain(content: &Content) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_plain(&mut out, content);
    out
}

fn write_plain(out: &mut String, content: &Content) -> std::fmt::Result {
    let profile = &content.profile;
    writeln!(out, "{}", profile.name)?;
    writeln!(out, "{}", profile.role)?;
    writeln!(out, "{} · {}", profile.location, profile.email)?;
    writeln!(out)?;
    writeln!(out, "{}", profile.summary)?;
    if !profile.tags.is_empty() {
        writeln!(out, "[{}]", profile.tags.join("] ["))?;
    }
    let links = [
        ("GitHub", &profile.links.github),
        ("LinkedIn", &profile.links.linkedin),
        ("Website", &profile.links.website),
    ];
    for (label, link) in links {
        if let Some(link) = link {
            writeln!(out, "{}: {}", label, link)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "SKILLS")?;
    for category in &content.skills {
        let items: Vec<String> = category
            .items
            .iter()
            .map(|item| format!("{} {}", tech_icon(item), skill_label(item)))
            .collect();
        writeln!(out, "  {}: {}", category.title, items.join(", "))?;
    }

    writeln!(out)?;
    writeln!(out, "PROJECTS")?;
    for project in &content.projects {
        match &project.highlight {
            Some(highlight) => writeln!(out, "  {} ({})", project.title, highlight)?,
            None => writeln!(out, "  {}", project.title)?,
        }
        writeln!(out, "    {}", project.description)?;
        if !project.tech.is_empty() {
            writeln!(out, "    Tech: {}", project.tech.join(", "))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "EXPERIENCE")?;
    for entry in content.timeline() {
        let item = entry.item;
        writeln!(
            out,
            "  {}. {} • {} @ {}",
            entry.position, item.timeframe, item.role, item.org
        )?;
        writeln!(out, "     {}", item.summary)?;
        for detail in &item.details {
            writeln!(out, "     - {}", detail)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "CONTACT")?;
    writeln!(out, "  {}", content.contact.headline)?;
    writeln!(out, "  Email: {}", content.contact.email)?;
    if let Some(linkedin) = &content.contact.linkedin {
        writeln!(out, "  LinkedIn: {}", linkedin)?;
    }
    Ok(())
}
