use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use folioapp::api::{CmdMessage, MessageLevel};
use folioapp::model::{Category, ProjectRecord};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const ID_WIDTH: usize = 8;
const BADGE_WIDTH: usize = 8;
const MAX_LISTED_TAGS: usize = 3;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_json(records: &[ProjectRecord]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

/// One line per project: short id, category badge, title, tags, age.
pub(super) fn print_projects(records: &[ProjectRecord]) {
    for record in records {
        println!("{}", project_line(record));
    }
}

pub(super) fn print_full_project(record: &ProjectRecord) {
    println!(
        "{} {}",
        short_id(record).yellow(),
        record.title.bold()
    );
    println!("--------------------------------");
    println!(
        "{}  {}",
        colored_badge(&record.category, record.category.display_name()),
        format_date(record.date).dimmed()
    );
    if !record.description.is_empty() {
        println!();
        println!("{}", record.description);
    }
    println!();
    if !record.tags.is_empty() {
        println!("{} {}", "Tags:".dimmed(), record.tags.join(", "));
    }
    if record.has_url() {
        println!("{} {}", "Link:".dimmed(), record.url.underline());
    }
    println!("{} {}", "Image:".dimmed(), record.image);
    println!("{} {}", "Id:".dimmed(), record.id);
}

fn project_line(record: &ProjectRecord) -> String {
    let id = format!("{:<width$} ", short_id(record), width = ID_WIDTH);
    let badge_text = format!(
        "{:<width$} ",
        record.category.display_kind().as_str(),
        width = BADGE_WIDTH
    );
    let tags = format_tags(&record.tags);

    let fixed_width = id.width() + badge_text.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);

    // Tags give way to the title when space runs out.
    let title = truncate_to_width(&record.title, available);
    let tags_room = available.saturating_sub(title.width() + 2);
    let tags = if tags.is_empty() || tags_room < 4 {
        String::new()
    } else {
        truncate_to_width(&tags, tags_room)
    };

    let used = title.width() + if tags.is_empty() { 0 } else { tags.width() + 2 };
    let padding = available.saturating_sub(used);
    let tags_colored = if tags.is_empty() {
        String::new()
    } else {
        format!("  {}", tags.dimmed())
    };

    format!(
        "{}{}{}{}{}{}",
        id.yellow(),
        colored_badge(&record.category, &badge_text),
        title,
        tags_colored,
        " ".repeat(padding),
        format_time_ago(record.date).dimmed()
    )
}

fn short_id(record: &ProjectRecord) -> String {
    record.id.as_str().chars().take(ID_WIDTH).collect()
}

fn colored_badge(category: &Category, text: &str) -> ColoredString {
    match category.display_kind() {
        Category::Web => text.blue(),
        Category::Mobile => text.green(),
        Category::Design => text.magenta(),
        _ => text.normal(),
    }
}

/// `#a #b #c +2`
fn format_tags(tags: &[String]) -> String {
    let mut shown: Vec<String> = tags
        .iter()
        .take(MAX_LISTED_TAGS)
        .map(|tag| format!("#{}", tag))
        .collect();
    if tags.len() > MAX_LISTED_TAGS {
        shown.push(format!("+{}", tags.len() - MAX_LISTED_TAGS));
    }
    shown.join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("Created: %B %-d, %Y").to_string()
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folioapp::model::ProjectInput;

    fn record(title: &str, tags: &str) -> ProjectRecord {
        ProjectRecord::new(ProjectInput::new(title).with_category("web").with_tags(tags))
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("Site", 10), "Site");
    }

    #[test]
    fn truncate_marks_cut_text() {
        let cut = truncate_to_width("A very long project title", 10);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 10);
    }

    #[test]
    fn truncate_counts_wide_chars() {
        let cut = truncate_to_width("日本語のプロジェクト", 7);
        assert!(cut.width() <= 7);
    }

    #[test]
    fn tags_are_capped_with_a_counter() {
        let tags: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        assert_eq!(format_tags(&tags), "#a #b #c +2");
        assert_eq!(format_tags(&tags[..2]), "#a #b");
        assert_eq!(format_tags(&[]), "");
    }

    #[test]
    fn line_starts_with_the_short_id() {
        colored::control::set_override(false);
        let rec = record("Site", "HTML, CSS");
        let line = project_line(&rec);
        assert!(line.starts_with(&rec.id.as_str()[..ID_WIDTH]));
        assert!(line.contains("web"));
        assert!(line.contains("#HTML #CSS"));
    }

    #[test]
    fn long_titles_fit_the_line() {
        colored::control::set_override(false);
        let rec = record(&"x".repeat(300), "tag");
        assert!(project_line(&rec).width() <= LINE_WIDTH);
    }

    #[test]
    fn date_reads_like_a_calendar_date() {
        let date = "2024-03-05T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_date(date), "Created: March 5, 2024");
    }
}
