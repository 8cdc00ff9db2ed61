use crate::domain::ports::Logger;

/// 將日誌協作者的訊息轉交給 tracing
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: String,
}

impl TracingLogger {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("calculator")
    }
}

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(component = %self.component, "{}", message);
    }
}
