//! Query contract for the admission record store.
//!
//! [`AdmissionCriteria`] expresses the AND-combination of filters every read
//! operation needs: equality, inclusive numeric ranges, set membership,
//! case-insensitive substring and null-presence checks. Repository
//! implementations translate it into their own query language.

/// School location filter: a single location or a set of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationFilter {
    One(String),
    Many(Vec<String>),
}

impl LocationFilter {
    /// Normalizes user input. Blank values are discarded; an empty result means
    /// "no location filter".
    pub fn from_values(values: Vec<String>) -> Option<Self> {
        let mut values: Vec<String> = values
            .into_iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();

        match values.len() {
            0 => None,
            1 => values.pop().map(LocationFilter::One),
            _ => Some(LocationFilter::Many(values)),
        }
    }

    pub fn values(&self) -> Vec<String> {
        match self {
            LocationFilter::One(v) => vec![v.clone()],
            LocationFilter::Many(vs) => vs.clone(),
        }
    }
}

/// Inclusive range; either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericRange<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: Copy> NumericRange<T> {
    pub fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Filter criteria over admission records. All set fields are AND-combined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdmissionCriteria {
    pub years: Option<Vec<i32>>,
    pub university_name: Option<String>,
    pub university_name_contains: Option<String>,
    pub major_contains: Option<String>,
    pub subject_contains: Option<String>,
    pub category: Option<String>,
    pub batch: Option<String>,
    pub location: Option<LocationFilter>,
    pub score: NumericRange<f64>,
    pub rank: NumericRange<i64>,
    pub is_985: Option<bool>,
    pub is_211: Option<bool>,
    pub require_score: bool,
    pub require_rank: bool,
}

/// Treats blank strings as "not provided".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl AdmissionCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.years = Some(vec![year]);
        self
    }

    /// Restricts to a set of years. An empty set leaves years unfiltered.
    pub fn with_years(mut self, years: Vec<i32>) -> Self {
        self.years = (!years.is_empty()).then_some(years);
        self
    }

    pub fn with_university(mut self, name: impl Into<String>) -> Self {
        self.university_name = Some(name.into());
        self
    }

    pub fn with_university_like(mut self, needle: Option<String>) -> Self {
        self.university_name_contains = non_blank(needle);
        self
    }

    pub fn with_major_like(mut self, needle: Option<String>) -> Self {
        self.major_contains = non_blank(needle);
        self
    }

    pub fn with_subject_like(mut self, needle: Option<String>) -> Self {
        self.subject_contains = non_blank(needle);
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = non_blank(category);
        self
    }

    pub fn with_batch(mut self, batch: Option<String>) -> Self {
        self.batch = non_blank(batch);
        self
    }

    pub fn with_location(mut self, location: Option<LocationFilter>) -> Self {
        self.location = location;
        self
    }

    pub fn with_score_range(mut self, range: NumericRange<f64>) -> Self {
        self.score = range;
        self
    }

    pub fn with_rank_range(mut self, range: NumericRange<i64>) -> Self {
        self.rank = range;
        self
    }

    pub fn with_elite_flags(mut self, is_985: Option<bool>, is_211: Option<bool>) -> Self {
        self.is_985 = is_985;
        self.is_211 = is_211;
        self
    }

    /// Only records with a non-null cutoff score.
    pub fn requiring_score(mut self) -> Self {
        self.require_score = true;
        self
    }

    /// Only records with a non-null cutoff rank.
    pub fn requiring_rank(mut self) -> Self {
        self.require_rank = true;
        self
    }
}

/// Whitelisted sort columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Year,
    MinScore,
    MinRank,
    UniversityName,
    Major,
    SchoolLocation,
}

impl SortField {
    /// Parses the public `sortBy` parameter. Unknown names fall back to
    /// [`SortField::MinScore`].
    pub fn from_param(name: &str) -> Self {
        match name {
            "minRank" => SortField::MinRank,
            "year" => SortField::Year,
            "universityName" => SortField::UniversityName,
            "major" => SortField::Major,
            "schoolLocation" => SortField::SchoolLocation,
            _ => SortField::MinScore,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Year => "year",
            SortField::MinScore => "min_score",
            SortField::MinRank => "min_rank",
            SortField::UniversityName => "university_name",
            SortField::Major => "major",
            SortField::SchoolLocation => "school_location",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parses `asc` / `desc` (case-insensitive); anything else is descending.
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: SortField,
    pub order: SortOrder,
}

impl OrderBy {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }
}

/// Ordering and paging for `find_many`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub order_by: Vec<OrderBy>,
    pub limit: Option<i64>,
    pub offset: i64,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sort key. Keys apply in insertion order.
    pub fn order(mut self, order: OrderBy) -> Self {
        self.order_by.push(order);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }
}
