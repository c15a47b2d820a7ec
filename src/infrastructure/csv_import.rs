//! Reader for admission spreadsheets exported as CSV.
//!
//! Accepts the Chinese headers written by the export endpoint as well as the
//! English column names of the `admission_data` table. Numeric and boolean
//! cells are parsed leniently; rows without a year, university or major are
//! skipped and reported.

use serde::Deserialize;
use serde_json::json;

use crate::domain::entities::NewAdmissionRecord;
use crate::error::AppError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Deserialize)]
struct ImportRow {
    #[serde(alias = "年份")]
    year: Option<String>,
    #[serde(alias = "院校名称", alias = "universityName")]
    university_name: Option<String>,
    #[serde(alias = "院校代码", alias = "universityCode")]
    university_code: Option<String>,
    #[serde(alias = "科类")]
    category: Option<String>,
    #[serde(alias = "批次")]
    batch: Option<String>,
    #[serde(alias = "选科要求", alias = "subjectRequirement")]
    subject_requirement: Option<String>,
    #[serde(alias = "专业")]
    major: Option<String>,
    #[serde(alias = "专业代码", alias = "majorCode")]
    major_code: Option<String>,
    #[serde(alias = "所属专业组", alias = "majorGroup")]
    major_group: Option<String>,
    #[serde(alias = "专业备注", alias = "majorNote")]
    major_note: Option<String>,
    #[serde(alias = "录取人数", alias = "admissionCount")]
    admission_count: Option<String>,
    #[serde(alias = "最低分数", alias = "minScore")]
    min_score: Option<String>,
    #[serde(alias = "最低位次", alias = "minRank")]
    min_rank: Option<String>,
    #[serde(alias = "学校所在", alias = "schoolLocation")]
    school_location: Option<String>,
    #[serde(alias = "学校性质", alias = "schoolNature")]
    school_nature: Option<String>,
    #[serde(alias = "是否985", alias = "is985")]
    is_985: Option<String>,
    #[serde(alias = "是否211", alias = "is211")]
    is_211: Option<String>,
}

/// A data row that could not be imported.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the file, header included.
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ParsedImport {
    pub records: Vec<NewAdmissionRecord>,
    pub skipped: Vec<SkippedRow>,
}

/// Parses a whole CSV file.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the header row cannot be read.
/// Malformed data rows are collected in [`ParsedImport::skipped`] instead.
pub fn parse_csv(data: &[u8]) -> Result<ParsedImport, AppError> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(data);

    reader.headers().map_err(|e| {
        AppError::bad_request("Unreadable CSV header", json!({ "reason": e.to_string() }))
    })?;

    let mut parsed = ParsedImport::default();

    for (index, row) in reader.deserialize::<ImportRow>().enumerate() {
        let line = index as u64 + 2;
        match row {
            Ok(row) => match row.into_record() {
                Ok(record) => parsed.records.push(record),
                Err(reason) => parsed.skipped.push(SkippedRow { line, reason }),
            },
            Err(e) => parsed.skipped.push(SkippedRow {
                line,
                reason: e.to_string(),
            }),
        }
    }

    Ok(parsed)
}

impl ImportRow {
    fn into_record(self) -> Result<NewAdmissionRecord, String> {
        let year = text(self.year)
            .ok_or("missing year")?
            .parse::<f64>()
            .ok()
            .filter(|y| y.is_finite() && y.fract() == 0.0)
            .map(|y| y as i32)
            .ok_or("year is not a number")?;
        let university_name = text(self.university_name).ok_or("missing university name")?;
        let major = text(self.major).ok_or("missing major")?;

        Ok(NewAdmissionRecord {
            year,
            university_name,
            university_code: text(self.university_code).unwrap_or_default(),
            category: text(self.category).unwrap_or_default(),
            batch: text(self.batch).unwrap_or_default(),
            subject_requirement: text(self.subject_requirement).unwrap_or_default(),
            major,
            major_code: text(self.major_code).unwrap_or_default(),
            major_group: text(self.major_group),
            major_note: text(self.major_note),
            admission_count: number(self.admission_count).map(|v| v as i32),
            min_score: number(self.min_score),
            min_rank: number(self.min_rank).map(|v| v.trunc() as i64),
            school_location: text(self.school_location).unwrap_or_default(),
            school_nature: text(self.school_nature).unwrap_or_default(),
            is_985: flag(self.is_985),
            is_211: flag(self.is_211),
        })
    }
}

fn text(cell: Option<String>) -> Option<String> {
    cell.map(|c| c.trim().to_string()).filter(|c| !c.is_empty())
}

/// Non-numeric cells ("-", "暂无") count as absent.
fn number(cell: Option<String>) -> Option<f64> {
    text(cell)?.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn flag(cell: Option<String>) -> bool {
    matches!(
        text(cell).as_deref().map(str::to_ascii_lowercase).as_deref(),
        Some("是" | "true" | "1" | "yes" | "y")
    )
}
