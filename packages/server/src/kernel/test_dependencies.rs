// TestDependencies - mock implementations for testing
//
// Provides a scripted page checker that can be injected into the router for tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BasePageChecker, CheckError, PageCheck};

// =============================================================================
// Mock Page Checker
// =============================================================================

/// Returns queued results in order; once the queue is drained every call
/// succeeds with a 200 "Test Page".
#[derive(Clone, Default)]
pub struct MockPageChecker {
    responses: Arc<Mutex<VecDeque<Result<PageCheck, CheckError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPageChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful check
    pub fn with_page(self, check: PageCheck) -> Self {
        self.responses.lock().unwrap().push_back(Ok(check));
        self
    }

    /// Queue a timeout
    pub fn with_timeout(self) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(CheckError::Timeout(Duration::from_secs(10))));
        self
    }

    /// Queue an error status response
    pub fn with_status_error(self, status_code: u16) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(CheckError::Status(status_code)));
        self
    }

    /// URLs passed to `check`, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn default_page() -> PageCheck {
        PageCheck {
            status_code: 200,
            title: Some("Test Page".to_string()),
            h1: None,
            description: None,
        }
    }
}

#[async_trait]
impl BasePageChecker for MockPageChecker {
    async fn check(&self, url: &str) -> Result<PageCheck, CheckError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Self::default_page()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_queued_results_in_order() {
        let mock = MockPageChecker::new()
            .with_status_error(404)
            .with_page(PageCheck {
                status_code: 200,
                title: Some("Queued".to_string()),
                ..Default::default()
            });

        assert!(matches!(
            mock.check("http://a.test").await,
            Err(CheckError::Status(404))
        ));
        assert_eq!(
            mock.check("http://b.test").await.unwrap().title.as_deref(),
            Some("Queued")
        );
        assert_eq!(
            mock.check("http://c.test").await.unwrap().title.as_deref(),
            Some("Test Page")
        );
        assert_eq!(
            mock.calls(),
            vec!["http://a.test", "http://b.test", "http://c.test"]
        );
    }
}
