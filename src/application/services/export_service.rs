//! Spreadsheet export of search results.

use serde_json::json;
use std::sync::Arc;

use crate::domain::criteria::{AdmissionCriteria, OrderBy, QueryOptions};
use crate::domain::entities::AdmissionRecord;
use crate::domain::repositories::AdmissionRepository;
use crate::error::AppError;

/// Upper bound on exported rows.
pub const EXPORT_LIMIT: i64 = 100_000;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const HEADERS: [&str; 17] = [
    "年份",
    "院校名称",
    "院校代码",
    "科类",
    "批次",
    "选科要求",
    "专业",
    "专业代码",
    "所属专业组",
    "专业备注",
    "录取人数",
    "最低分数",
    "最低位次",
    "学校所在",
    "学校性质",
    "是否985",
    "是否211",
];

/// A rendered export ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub rows: usize,
    pub bytes: Vec<u8>,
}

pub struct ExportService<R: AdmissionRepository> {
    repository: Arc<R>,
}

impl<R: AdmissionRepository> ExportService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Renders every matching record (up to [`EXPORT_LIMIT`]) as CSV.
    ///
    /// The file starts with a UTF-8 byte order mark so spreadsheet tools pick
    /// the right encoding for the Chinese headers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database or encoding errors.
    pub async fn export(
        &self,
        criteria: AdmissionCriteria,
        sort: OrderBy,
    ) -> Result<ExportFile, AppError> {
        let options = QueryOptions::new().order(sort).limit(EXPORT_LIMIT);
        let records = self.repository.find_many(&criteria, &options).await?;

        let bytes = render_csv(&records)?;
        let filename = format!(
            "admission_export_{}.csv",
            chrono::Utc::now().timestamp_millis()
        );

        metrics::counter!("exports_total").increment(1);
        tracing::info!(rows = records.len(), filename = %filename, "Export rendered");

        Ok(ExportFile {
            filename,
            rows: records.len(),
            bytes,
        })
    }
}

/// Writes records as CSV in the legacy column order.
pub fn render_csv(records: &[AdmissionRecord]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());

    writer.write_record(HEADERS).map_err(encode_error)?;

    for r in records {
        writer
            .write_record([
                r.year.to_string(),
                r.university_name.clone(),
                r.university_code.clone(),
                r.category.clone(),
                r.batch.clone(),
                r.subject_requirement.clone(),
                r.major.clone(),
                r.major_code.clone(),
                r.major_group.clone().unwrap_or_default(),
                r.major_note.clone().unwrap_or_default(),
                optional(r.admission_count),
                optional(r.min_score),
                optional(r.min_rank),
                r.school_location.clone(),
                r.school_nature.clone(),
                yes_no(r.is_985).to_string(),
                yes_no(r.is_211).to_string(),
            ])
            .map_err(encode_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::internal("Failed to finish export", json!({ "reason": e.to_string() })))
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "是" } else { "否" }
}

fn encode_error(e: csv::Error) -> AppError {
    AppError::internal("Failed to encode export", json!({ "reason": e.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::SortField;
    use crate::domain::repositories::MockAdmissionRepository;

    fn record() -> AdmissionRecord {
        AdmissionRecord {
            id: 1,
            year: 2025,
            university_name: "浙江大学".to_string(),
            university_code: "10335".to_string(),
            category: "物理类".to_string(),
            batch: "本科批".to_string(),
            subject_requirement: "物理,化学".to_string(),
            major: "计算机科学与技术".to_string(),
            major_code: "080901".to_string(),
            major_group: None,
            major_note: Some("含实验班".to_string()),
            admission_count: Some(30),
            min_score: Some(672.0),
            min_rank: Some(1_520),
            school_location: "浙江".to_string(),
            school_nature: "公办".to_string(),
            is_985: true,
            is_211: true,
        }
    }

    #[test]
    fn test_render_csv_has_bom_and_headers() {
        let bytes = render_csv(&[]).unwrap();

        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("年份,院校名称,院校代码"));
        assert!(text.trim_end().ends_with("是否985,是否211"));
    }

    #[test]
    fn test_render_csv_formats_values() {
        let bytes = render_csv(&[record()]).unwrap();
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let row = text.lines().nth(1).unwrap();

        assert_eq!(
            row,
            "2025,浙江大学,10335,物理类,本科批,\"物理,化学\",计算机科学与技术,080901,,含实验班,30,672,1520,浙江,公办,是,是"
        );
    }

    #[tokio::test]
    async fn test_export_is_capped_and_named() {
        let mut mock_repo = MockAdmissionRepository::new();
        mock_repo
            .expect_find_many()
            .withf(|_, options| options.limit == Some(EXPORT_LIMIT) && options.offset == 0)
            .times(1)
            .returning(|_, _| Ok(vec![record()]));

        let service = ExportService::new(Arc::new(mock_repo));
        let file = service
            .export(AdmissionCriteria::new(), OrderBy::desc(SortField::MinScore))
            .await
            .unwrap();

        assert_eq!(file.rows, 1);
        assert!(file.filename.starts_with("admission_export_"));
        assert!(file.filename.ends_with(".csv"));
    }
}
