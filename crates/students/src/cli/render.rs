use super::setup::OutputMode;
use super::styles::{CHECK_MARK, STYLES};
use studentapp::api::{CmdMessage, CmdResult, MessageLevel};
use studentapp::model::Student;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

pub fn render(result: &CmdResult, mode: OutputMode) -> serde_json::Result<String> {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(result).map(|json| json + "\n"),
        OutputMode::Text => Ok(render_text(result)),
    }
}

fn render_text(result: &CmdResult) -> String {
    let mut out = String::new();

    if !result.listed.is_empty() {
        out.push_str(&render_table(&result.listed));
    }
    if let Some(count) = result.count {
        out.push_str(&render_count(count, result.listed.is_empty()));
    }
    out.push_str(&render_messages(&result.messages));
    out
}

fn render_count(count: usize, nothing_listed: bool) -> String {
    let line = match (count, nothing_listed) {
        (0, _) => "No students found.".to_string(),
        (1, _) => "1 student".to_string(),
        (n, _) => format!("{} students", n),
    };
    if nothing_listed {
        format!("{}\n", line)
    } else {
        format!("{}\n", STYLES.muted.apply_to(line))
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &STYLES.info,
            MessageLevel::Success => &STYLES.success,
            MessageLevel::Warning => &STYLES.warning,
            MessageLevel::Error => &STYLES.error,
        };
        out.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    out
}

/// Pads with spaces to `width` display columns. Styling happens after padding
/// so escape codes never count towards the width.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.width()).chain([header.width()]).max().unwrap_or(0)
}

fn render_table(students: &[Student]) -> String {
    let phones: Vec<String> = students.iter().map(Student::formatted_phone).collect();
    let id_w = column_width("ID", students.iter().map(|s| s.id.as_str()));
    let name_w = column_width("Name", students.iter().map(|s| s.name.as_str()));
    let phone_w = column_width("Phone", phones.iter().map(String::as_str));

    let mut out = String::new();
    let header = format!(
        "  {}{gap}{}{gap}{}{gap}Address",
        pad("ID", id_w),
        pad("Name", name_w),
        pad("Phone", phone_w),
        gap = COLUMN_GAP
    );
    out.push_str(&format!("{}\n", STYLES.header.apply_to(header.trim_end())));

    for (student, phone) in students.iter().zip(&phones) {
        let mark = if student.checked {
            STYLES.checked.apply_to(CHECK_MARK).to_string()
        } else {
            " ".to_string()
        };
        out.push_str(&format!(
            "{} {}{gap}{}{gap}{}{gap}{}\n",
            mark,
            STYLES.id.apply_to(pad(&student.id, id_w)),
            pad(&student.name, name_w),
            pad(phone, phone_w),
            student.address,
            gap = COLUMN_GAP
        ));
    }
    out
}
