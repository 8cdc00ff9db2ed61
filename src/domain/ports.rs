use crate::domain::model::{Course, CourseChanges, CourseId, Lesson, LessonQuery};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 計算服務注入的日誌協作者
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

impl<L: Logger + ?Sized> Logger for std::sync::Arc<L> {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;

    fn default_headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// 課程資料存取介面。回傳的 future 在被 await 之前不會送出請求
#[async_trait]
pub trait CourseApi: Send + Sync {
    async fn find_all_courses(&self) -> Result<Vec<Course>>;

    async fn find_course_by_id(&self, id: CourseId) -> Result<Course>;

    async fn save_course(&self, id: CourseId, changes: &CourseChanges) -> Result<Course>;

    async fn find_lessons_with(&self, query: &LessonQuery) -> Result<Vec<Lesson>>;

    async fn find_lessons(&self, course_id: CourseId) -> Result<Vec<Lesson>> {
        self.find_lessons_with(&LessonQuery::new(course_id)).await
    }
}
