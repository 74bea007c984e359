use console::Style;
use once_cell::sync::Lazy;

pub const CHECK_MARK: &str = "✓";

pub struct Styles {
    pub header: Style,
    pub id: Style,
    pub checked: Style,
    pub muted: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

pub static STYLES: Lazy<Styles> = Lazy::new(|| Styles {
    header: Style::new().bold(),
    id: Style::new().yellow(),
    checked: Style::new().green().bold(),
    muted: Style::new().color256(246).italic(),
    info: Style::new().dim(),
    success: Style::new().green(),
    warning: Style::new().yellow(),
    error: Style::new().red(),
});
