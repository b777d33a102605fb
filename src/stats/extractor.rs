use crate::models::{RecruiterKey, StatField, StatKey};
use crate::parsers::{Token, TokenSink};
use crate::stats::histogram::Histogram;

/// Single-pass consumer of one shard's token stream.
///
/// The extractor keeps only per-object scratch state plus the histogram it is
/// filling, so memory use is independent of shard size. A record contributes
/// to the histogram only if a string value was observed for both `position`
/// and `recruiter_first_name` within its own object; an explicit null, an
/// absent field, or a non-string value for either name disqualifies the whole
/// record for every selector. Disqualified records are counted in
/// [`FieldExtractor::excluded_records`] rather than reported as errors.
pub struct FieldExtractor {
    field: StatField,
    histogram: Histogram,
    excluded: u64,
    /// Name context for the next value token
    current_field: String,
    saw_position: bool,
    saw_recruiter_first_name: bool,
    current_value: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    company_name: Option<String>,
}

impl FieldExtractor {
    pub fn new(field: StatField) -> Self {
        Self {
            field,
            histogram: Histogram::new(),
            excluded: 0,
            current_field: String::new(),
            saw_position: false,
            saw_recruiter_first_name: false,
            current_value: None,
            first_name: None,
            last_name: None,
            company_name: None,
        }
    }

    /// Records excluded so far by the required-field rule
    pub fn excluded_records(&self) -> u64 {
        self.excluded
    }

    /// Consume the extractor, yielding the shard histogram and the number of
    /// excluded records
    pub fn into_parts(self) -> (Histogram, u64) {
        (self.histogram, self.excluded)
    }

    fn on_string(&mut self, value: &str) {
        // Required-field tracking is independent of the selected field and
        // only fires for string-typed values, so a null or a number under
        // `position`/`recruiter_first_name` leaves the flag unset and the
        // record is dropped at object end.
        match self.current_field.as_str() {
            "position" => self.saw_position = true,
            "recruiter_first_name" => self.saw_recruiter_first_name = true,
            _ => {}
        }

        if self.field == StatField::Recruiter {
            match self.current_field.as_str() {
                "recruiter_first_name" => self.first_name = Some(value.to_string()),
                "recruiter_last_name" => self.last_name = Some(value.to_string()),
                "recruiter_company_name" => self.company_name = Some(value.to_string()),
                _ => {}
            }
        } else if self.current_field == self.field.wire_name() {
            self.current_value = Some(value.to_string());
        }
    }

    fn on_number(&mut self, value: f64) {
        // Numbers only matter for the salary selector. A strictly negative
        // salary is treated as absent, not as an error.
        if self.field == StatField::Salary && self.current_field == "salary" {
            self.current_value = if value < 0.0 { None } else { Some(canonical_salary(value)) };
        }
    }

    fn on_end_object(&mut self) {
        if self.saw_position && self.saw_recruiter_first_name {
            self.dispatch();
        } else {
            self.excluded += 1;
        }
        self.clear_scratch();
    }

    fn dispatch(&mut self) {
        match self.field {
            StatField::Recruiter => {
                let key = RecruiterKey {
                    first_name: self.first_name.take(),
                    last_name: self.last_name.take(),
                    company_name: self.company_name.take(),
                };
                self.histogram.increment(StatKey::Recruiter(key));
            }
            StatField::TechnologyStack => {
                if let Some(stack) = self.current_value.take() {
                    for technology in split_technology_stack(&stack) {
                        self.histogram.increment(StatKey::plain(technology));
                    }
                }
            }
            StatField::Position | StatField::Salary => {
                // The record was valid; the selected field may still have
                // been absent, null, or filtered by the negative-salary rule.
                if let Some(value) = self.current_value.take() {
                    self.histogram.increment(StatKey::Plain(value));
                }
            }
        }
    }

    fn clear_scratch(&mut self) {
        self.saw_position = false;
        self.saw_recruiter_first_name = false;
        self.current_value = None;
        self.first_name = None;
        self.last_name = None;
        self.company_name = None;
    }
}

impl TokenSink for FieldExtractor {
    fn accept(&mut self, token: Token<'_>) {
        match token {
            Token::StartObject => self.clear_scratch(),
            Token::EndObject => self.on_end_object(),
            Token::FieldName(name) => {
                self.current_field.clear();
                self.current_field.push_str(name);
            }
            Token::String(value) => self.on_string(value),
            Token::Number(value) => self.on_number(value),
            // Explicit nulls never mark a required field as observed
            Token::Null | Token::Bool(_) | Token::StartArray | Token::EndArray => {}
        }
    }
}

/// Canonical decimal string for a salary value, used as the histogram key.
///
/// Uses shortest-roundtrip formatting with a guaranteed fraction part, so the
/// integers `1000` and `1000.0` land in the same `"1000.0"` bucket.
pub(crate) fn canonical_salary(value: f64) -> String {
    format!("{:?}", value)
}

/// Split a technology-stack string on a comma followed by one or more
/// whitespace characters.
///
/// A bare comma does not split, so `"Spring,React"` stays one token.
/// Trailing empty segments are dropped.
fn split_technology_stack(value: &str) -> Vec<&str> {
    let bytes = value.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b',' {
            let mut end = i + 1;
            while end < bytes.len() && bytes[end].is_ascii_whitespace() {
                end += 1;
            }
            if end > i + 1 {
                parts.push(&value[start..i]);
                start = end;
                i = end;
                continue;
            }
        }
        i += 1;
    }
    parts.push(&value[start..]);
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}
