use crate::render::CLOCK;

/// Wraps rendered leaderboard lines in an HTML table, one row per line.
///
/// Lines holding the clock glyph get a name cell and a playtime cell; any
/// other line spans both columns.
pub fn to_table<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::from("<table>\n");
    for line in lines.iter().map(AsRef::as_ref) {
        if line.is_empty() {
            continue;
        }
        match line.split_once(CLOCK) {
            Some((name, playtime)) => {
                out.push_str(&format!(
                    "  <tr>\n    <td>{}</td>\n    <td>{CLOCK}{}</td>\n  </tr>\n",
                    name.trim(),
                    playtime
                ));
            }
            None => {
                out.push_str(&format!(
                    "  <tr>\n    <td colspan=\"2\">{line}</td>\n  </tr>\n"
                ));
            }
        }
    }
    out.push_str("</table>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_an_empty_table() {
        assert_eq!(to_table::<&str>(&[]), "<table>\n</table>");
        assert_eq!(to_table(&["", ""]), "<table>\n</table>");
    }

    #[test]
    fn splits_name_and_playtime() {
        let table = to_table(&["🔫 CS:GO          🕘 2 hrs 30 mins"]);
        assert_eq!(
            table,
            "<table>\n  <tr>\n    <td>🔫 CS:GO</td>\n    <td>🕘 2 hrs 30 mins</td>\n  </tr>\n</table>"
        );
    }

    #[test]
    fn splits_only_at_first_clock() {
        let table = to_table(&["a 🕘 b 🕘 c"]);
        assert!(table.contains("<td>a</td>"));
        assert!(table.contains("<td>🕘 b 🕘 c</td>"));
    }

    #[test]
    fn lines_without_clock_span_both_columns() {
        let table = to_table(&["🎮 X", "", "\t\t    🕘 1 hrs 0 mins"]);
        assert_eq!(
            table,
            "<table>\n  <tr>\n    <td colspan=\"2\">🎮 X</td>\n  </tr>\n  <tr>\n    <td></td>\n    <td>🕘 1 hrs 0 mins</td>\n  </tr>\n</table>"
        );
        assert_eq!(table.matches("<tr>").count(), 2);
    }
}
