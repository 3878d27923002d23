use crate::config::Layout;
use crate::emoji::label_for;
use crate::ranking::GameRecord;
use crate::width::pad;

pub const CLOCK: &str = "🕘";

const LABEL_COLUMNS: usize = 35;
const TIME_COLUMNS: usize = 16;
const MULTILINE_INDENT: &str = "\t\t\t\t\t\t    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub label: String,
    pub hours: u64,
    pub minutes: u64,
}

impl LeaderboardEntry {
    pub fn from_record(record: &GameRecord) -> Self {
        Self {
            label: label_for(record.app_id, &record.name),
            hours: record.playtime_minutes / 60,
            minutes: record.playtime_minutes % 60,
        }
    }

    pub fn playtime_text(&self) -> String {
        format!("{CLOCK} {} hrs {} mins", self.hours, self.minutes)
    }
}

pub fn render_lines(records: &[GameRecord], layout: Layout) -> Vec<String> {
    let mut lines = Vec::with_capacity(records.len() * 2);
    for entry in records.iter().map(LeaderboardEntry::from_record) {
        match layout {
            Layout::MultiLine => {
                lines.push(entry.label.clone());
                lines.push(format!("{MULTILINE_INDENT}{}", entry.playtime_text()));
            }
            Layout::SingleLine => {
                lines.push(format!(
                    "{} {}",
                    pad(&entry.label, " ", LABEL_COLUMNS),
                    pad(&entry.playtime_text(), "", TIME_COLUMNS)
                ));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::display_width;

    #[test]
    fn splits_minutes_into_hours_and_minutes() {
        for m in [0u64, 1, 59, 60, 61, 150, 3599, 3600, 123_456] {
            let entry = LeaderboardEntry::from_record(&GameRecord::new(1, "x", m));
            assert_eq!(entry.hours, m / 60);
            assert_eq!(entry.minutes, m % 60);
            assert!(entry.minutes <= 59);
        }
    }

    #[test]
    fn single_line_layout_aligns_columns() {
        let records = vec![
            GameRecord::new(730, "CS:GO", 150),
            GameRecord::new(1, "X", 90),
        ];
        let lines = render_lines(&records, Layout::SingleLine);
        assert_eq!(lines.len(), 2);

        let (label, time) = lines[0].split_once(CLOCK).unwrap();
        assert!(label.starts_with("🔫 CS:GO"));
        assert_eq!(display_width(label), LABEL_COLUMNS + 1);
        assert_eq!(time, " 2 hrs 30 mins");

        assert!(lines[1].starts_with("🎮 X "));
        assert!(lines[1].ends_with("🕘 1 hrs 30 mins"));
    }

    #[test]
    fn long_labels_are_not_truncated() {
        let name = "A".repeat(50);
        let lines = render_lines(&[GameRecord::new(1, name.clone(), 5)], Layout::SingleLine);
        assert_eq!(lines[0], format!("🎮 {name} 🕘 0 hrs 5 mins"));
    }

    #[test]
    fn multi_line_layout_emits_two_lines_per_entry() {
        let records = vec![GameRecord::new(570, "Dota 2", 61)];
        let lines = render_lines(&records, Layout::MultiLine);
        assert_eq!(
            lines,
            vec![
                "⚔️ Dota 2".to_string(),
                format!("{MULTILINE_INDENT}🕘 1 hrs 1 mins"),
            ]
        );
    }

    #[test]
    fn rendering_is_repeatable() {
        let records = vec![GameRecord::new(1, "a", 7), GameRecord::new(2, "b", 700)];
        assert_eq!(
            render_lines(&records, Layout::SingleLine),
            render_lines(&records, Layout::SingleLine)
        );
    }
}
