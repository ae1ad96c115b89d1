use cihui_types::VocabularyRecord;

/// Layout of the study handout: a heading, then a block of lines per record
///
/// Line templates use `{word}`, `{pos}`, `{meaning}`, `{collocation}`,
/// `{example}`, `{derivatives}` and `{confusable}` placeholders.
#[derive(Debug, Clone)]
pub struct HandoutTemplate {
    pub title: String,
    pub line_templates: Vec<String>,
}

impl HandoutTemplate {
    /// Default Chinese handout layout
    pub fn default_chinese() -> Self {
        Self {
            title: "高三英语常忘词扩展记忆手册".to_string(),
            line_templates: vec![
                "■ {word}  {pos}  {meaning}".to_string(),
                "常见搭配：{collocation}".to_string(),
                "例句：{example}".to_string(),
                "词形变化：{derivatives}".to_string(),
                "形近词辨析：{confusable}".to_string(),
            ],
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Lines for one record, without the blank separator
    pub fn render(&self, record: &VocabularyRecord) -> Vec<String> {
        self.line_templates
            .iter()
            .map(|template| format_line(template, record))
            .collect()
    }
}

impl Default for HandoutTemplate {
    fn default() -> Self {
        Self::default_chinese()
    }
}

/// Substitute placeholders in a single pass so record text is never re-expanded
fn format_line(template: &str, record: &VocabularyRecord) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open..];
        let Some(close) = after.find('}') else {
            break;
        };

        match field(&after[1..close], record) {
            Some(value) => out.push_str(value),
            None => out.push_str(&after[..=close]),
        }
        rest = &after[close + 1..];
    }

    // Unclosed brace or plain tail
    if let Some(open) = rest.find('{') {
        out.push_str(&rest[open..]);
    } else {
        out.push_str(rest);
    }
    out
}

fn field<'a>(name: &str, record: &'a VocabularyRecord) -> Option<&'a str> {
    Some(match name {
        "word" => record.word(),
        "pos" => record.part_of_speech(),
        "meaning" => record.meaning(),
        "collocation" => record.collocation(),
        "example" => record.example(),
        "derivatives" => record.derivatives(),
        "confusable" => record.confusable(),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use cihui_types::Enrichment;

    use super::*;

    fn violate() -> VocabularyRecord {
        VocabularyRecord::new(
            "violate",
            "违反",
            Enrichment {
                pos: "v.".to_string(),
                collocation: "violate the law（违法）".to_string(),
                example: "He was fined.".to_string(),
                derivatives: "violation (n.)".to_string(),
                confusable: "violet".to_string(),
            },
        )
    }

    #[test]
    fn test_default_layout() {
        let lines = HandoutTemplate::default_chinese().render(&violate());
        assert_eq!(
            lines,
            vec![
                "■ violate  v.  违反",
                "常见搭配：violate the law（违法）",
                "例句：He was fined.",
                "词形变化：violation (n.)",
                "形近词辨析：violet",
            ]
        );
    }

    #[test]
    fn test_unknown_word_renders_empty_fields() {
        let record = VocabularyRecord::new("xylophone", "木琴", Enrichment::default());
        let lines = HandoutTemplate::default().render(&record);
        assert_eq!(lines[0], "■ xylophone    木琴");
        assert_eq!(lines[1], "常见搭配：");
    }

    #[test]
    fn test_record_text_not_re_expanded() {
        let record = VocabularyRecord::new("cat", "{word}", Enrichment::default());
        assert_eq!(format_line("{meaning}/{word}", &record), "{word}/cat");
    }

    #[test]
    fn test_unknown_and_unclosed_placeholders_kept() {
        let record = violate();
        assert_eq!(format_line("{nope} {word", &record), "{nope} {word");
        assert_eq!(format_line("a } b", &record), "a } b");
    }
}
