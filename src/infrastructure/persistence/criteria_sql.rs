//! Translation of [`AdmissionCriteria`] and [`QueryOptions`] into SQL.
//!
//! Values are always bound as parameters; only whitelisted column names from
//! [`crate::domain::criteria::SortField`] are interpolated.

use sqlx::{Postgres, QueryBuilder};

use crate::domain::criteria::{
    AdmissionCriteria, LocationFilter, OrderBy, QueryOptions, SortField, SortOrder,
};

/// Column list matching [`crate::domain::entities::AdmissionRecord`].
pub(crate) const ADMISSION_COLUMNS: &str = "id, year, university_name, university_code, \
     category, batch, subject_requirement, major, major_code, major_group, major_note, \
     admission_count, min_score, min_rank, school_location, school_nature, is_985, is_211";

/// Escapes LIKE metacharacters and wraps the needle for substring matching.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for ch in needle.trim().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// Appends `WHERE ...` for the given criteria.
pub(crate) fn push_criteria(qb: &mut QueryBuilder<'_, Postgres>, criteria: &AdmissionCriteria) {
    qb.push(" WHERE TRUE");

    if let Some(years) = &criteria.years {
        qb.push(" AND year = ANY(").push_bind(years.clone()).push(")");
    }

    if let Some(name) = &criteria.university_name {
        qb.push(" AND university_name = ").push_bind(name.clone());
    }

    if let Some(needle) = &criteria.university_name_contains {
        qb.push(" AND university_name ILIKE ")
            .push_bind(contains_pattern(needle));
    }

    if let Some(needle) = &criteria.major_contains {
        qb.push(" AND major ILIKE ").push_bind(contains_pattern(needle));
    }

    if let Some(needle) = &criteria.subject_contains {
        qb.push(" AND subject_requirement ILIKE ")
            .push_bind(contains_pattern(needle));
    }

    if let Some(category) = &criteria.category {
        qb.push(" AND category = ").push_bind(category.clone());
    }

    if let Some(batch) = &criteria.batch {
        qb.push(" AND batch = ").push_bind(batch.clone());
    }

    match &criteria.location {
        Some(LocationFilter::One(location)) => {
            qb.push(" AND school_location = ").push_bind(location.clone());
        }
        Some(LocationFilter::Many(locations)) => {
            qb.push(" AND school_location = ANY(")
                .push_bind(locations.clone())
                .push(")");
        }
        None => {}
    }

    if let Some(min) = criteria.score.min {
        qb.push(" AND min_score >= ").push_bind(min);
    }
    if let Some(max) = criteria.score.max {
        qb.push(" AND min_score <= ").push_bind(max);
    }

    if let Some(min) = criteria.rank.min {
        qb.push(" AND min_rank >= ").push_bind(min);
    }
    if let Some(max) = criteria.rank.max {
        qb.push(" AND min_rank <= ").push_bind(max);
    }

    if let Some(flag) = criteria.is_985 {
        qb.push(" AND is_985 = ").push_bind(flag);
    }
    if let Some(flag) = criteria.is_211 {
        qb.push(" AND is_211 = ").push_bind(flag);
    }

    if criteria.require_score {
        qb.push(" AND min_score IS NOT NULL");
    }
    if criteria.require_rank {
        qb.push(" AND min_rank IS NOT NULL");
    }
}

/// Renders the ORDER BY clause. Missing values sort last in either direction
/// and `id` is always the final key.
pub(crate) fn order_clause(order_by: &[OrderBy]) -> String {
    let mut keys: Vec<String> = order_by
        .iter()
        .map(|o| format!("{} {} NULLS LAST", o.field.column(), o.order.keyword()))
        .collect();

    if !order_by.iter().any(|o| o.field == SortField::Id) {
        keys.push(format!("id {}", SortOrder::Asc.keyword()));
    }

    format!(" ORDER BY {}", keys.join(", "))
}

/// Appends ORDER BY / LIMIT / OFFSET.
pub(crate) fn push_options(qb: &mut QueryBuilder<'_, Postgres>, options: &QueryOptions) {
    qb.push(order_clause(&options.order_by));

    if let Some(limit) = options.limit {
        qb.push(" LIMIT ").push_bind(limit);
    }
    if options.offset > 0 {
        qb.push(" OFFSET ").push_bind(options.offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::NumericRange;

    fn where_sql(criteria: &AdmissionCriteria) -> String {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1 FROM admission_data");
        push_criteria(&mut qb, criteria);
        qb.sql().to_string()
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("计算机"), "%计算机%");
        assert_eq!(contains_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
        assert_eq!(contains_pattern("  物理 "), "%物理%");
    }

    #[test]
    fn test_empty_criteria_has_trivial_where() {
        assert_eq!(
            where_sql(&AdmissionCriteria::new()),
            "SELECT 1 FROM admission_data WHERE TRUE"
        );
    }

    #[test]
    fn test_criteria_are_and_combined_with_binds() {
        let criteria = AdmissionCriteria::new()
            .with_year(2025)
            .with_category(Some("理科".to_string()))
            .with_location(Some(LocationFilter::Many(vec![
                "北京".to_string(),
                "上海".to_string(),
            ])))
            .with_score_range(NumericRange::between(505.0, 510.0));

        let sql = where_sql(&criteria);
        assert!(sql.contains("year = ANY($1)"));
        assert!(sql.contains("AND category = $2"));
        assert!(sql.contains("AND school_location = ANY($3)"));
        assert!(sql.contains("AND min_score >= $4"));
        assert!(sql.contains("AND min_score <= $5"));
        assert!(!sql.contains("北京"));
    }

    #[test]
    fn test_single_location_uses_equality() {
        let criteria =
            AdmissionCriteria::new().with_location(Some(LocationFilter::One("浙江".to_string())));
        assert!(where_sql(&criteria).contains("school_location = $1"));
    }

    #[test]
    fn test_null_presence_checks() {
        let sql = where_sql(&AdmissionCriteria::new().requiring_score().requiring_rank());
        assert!(sql.contains("min_score IS NOT NULL"));
        assert!(sql.contains("min_rank IS NOT NULL"));
    }

    #[test]
    fn test_order_clause_appends_id() {
        assert_eq!(
            order_clause(&[OrderBy::desc(SortField::MinScore)]),
            " ORDER BY min_score DESC NULLS LAST, id ASC"
        );
        assert_eq!(order_clause(&[]), " ORDER BY id ASC");
        assert_eq!(
            order_clause(&[OrderBy::desc(SortField::Id)]),
            " ORDER BY id DESC NULLS LAST"
        );
    }
}
