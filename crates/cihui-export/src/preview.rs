use cihui_types::{RECORD_COLUMNS, VocabularyRecord};

/// Terminal columns taken by `text`; East Asian wide and fullwidth characters count two
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

fn char_width(ch: char) -> usize {
    match ch as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x20000..=0x3FFFD => 2,
        _ if ch.is_control() => 0,
        _ => 1,
    }
}

fn truncate(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = char_width(ch);
        // leave room for the ellipsis
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Render records as a plain-text table with a 0-based index column
pub fn render_table(records: &[VocabularyRecord], max_cell_width: usize) -> String {
    let max_cell_width = max_cell_width.max(2);

    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            std::iter::once(index.to_string())
                .chain(
                    record
                        .columns()
                        .iter()
                        .map(|cell| truncate(cell, max_cell_width)),
                )
                .collect()
        })
        .collect();

    let header: Vec<String> = std::iter::once(String::new())
        .chain(RECORD_COLUMNS.iter().map(|c| c.to_string()))
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| display_width(&row[col]))
                .chain(std::iter::once(display_width(&header[col])))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |row: &[String]| {
        row.iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(header.as_slice()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(rows.iter().map(|row| format_row(row.as_slice())));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use cihui_types::Enrichment;

    use super::*;

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("cat"), 3);
        assert_eq!(display_width("违反"), 4);
        assert_eq!(display_width("（违法）"), 8);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("violate", 10), "violate");
        assert_eq!(truncate("violation", 5), "viol…");
        assert_eq!(truncate("违反交通规则", 5), "违反…");
    }

    #[test]
    fn test_table_columns_align() {
        let records = vec![
            VocabularyRecord::new(
                "violate",
                "违反",
                Enrichment {
                    pos: "v.".to_string(),
                    ..Enrichment::default()
                },
            ),
            VocabularyRecord::new("cat", "猫", Enrichment::default()),
        ];

        let table = render_table(&records, 24);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("word") && lines[0].contains("cn_meaning"));
        assert!(lines[2].starts_with("0 | violate | v.  | 违反"));
        assert!(lines[3].starts_with("1 | cat     |     | 猫"));

        // every separator sits at the same display column
        let bar = |line: &str| display_width(&line[..line.rfind(" | ").unwrap()]);
        assert_eq!(bar(lines[2]), bar(lines[3]));
    }

    #[test]
    fn test_long_cells_truncated() {
        let record = VocabularyRecord::new(
            "violate",
            "违反",
            Enrichment {
                example: "He was fined for violating traffic rules.".to_string(),
                ..Enrichment::default()
            },
        );
        let table = render_table(&[record], 10);
        assert!(table.contains("He was fi…"));
        assert!(!table.contains("traffic"));
    }
}
