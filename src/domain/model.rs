use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type CourseId = u64;
pub type LessonId = u64;

/// 後端回傳欄位中未建模的部分，原樣保留
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

pub const DEFAULT_LESSON_FILTER: &str = "";
pub const DEFAULT_PAGE_NUMBER: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTitles {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

/// 課程分類。未知的分類字串原樣保留，序列化時寫回
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CourseCategory {
    Beginner,
    Advanced,
    Other(String),
}

impl CourseCategory {
    pub fn as_str(&self) -> &str {
        match self {
            CourseCategory::Beginner => "BEGINNER",
            CourseCategory::Advanced => "ADVANCED",
            CourseCategory::Other(raw) => raw,
        }
    }
}

impl From<String> for CourseCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "BEGINNER" => CourseCategory::Beginner,
            "ADVANCED" => CourseCategory::Advanced,
            _ => CourseCategory::Other(raw),
        }
    }
}

impl From<CourseCategory> for String {
    fn from(category: CourseCategory) -> Self {
        match category {
            CourseCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub titles: CourseTitles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_list_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CourseCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons_count: Option<i64>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// 局部更新：只序列化有設定的欄位
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<CourseTitles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CourseCategory>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl CourseChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let long_description = self.titles.take().and_then(|t| t.long_description);
        self.titles = Some(CourseTitles {
            description: description.into(),
            long_description,
        });
        self
    }

    pub fn with_category(mut self, category: CourseCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_none() && self.category.is_none() && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LessonId>,
    pub course_id: CourseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<i64>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}', expected asc or desc", other)),
        }
    }
}

/// 課程單元查詢條件，預設值與後端分頁約定一致
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonQuery {
    pub course_id: CourseId,
    pub filter: String,
    pub sort_order: SortOrder,
    pub page_number: u32,
    pub page_size: u32,
}

impl LessonQuery {
    pub fn new(course_id: CourseId) -> Self {
        Self {
            course_id,
            filter: DEFAULT_LESSON_FILTER.to_string(),
            sort_order: SortOrder::default(),
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn page(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// 所有參數一律以字串送出，空字串也保留
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("courseId", self.course_id.to_string()),
            ("filter", self.filter.clone()),
            ("sortOrder", self.sort_order.to_string()),
            ("pageNumber", self.page_number.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload<T> {
    pub payload: Vec<T>,
}

pub fn sort_courses_by_seq_no(courses: &mut [Course]) {
    courses.sort_by_key(|c| (c.seq_no.is_none(), c.seq_no));
}

pub fn filter_by_category(courses: &[Course], category: &CourseCategory) -> Vec<Course> {
    courses
        .iter()
        .filter(|c| c.category.as_ref() == Some(category))
        .cloned()
        .collect()
}
