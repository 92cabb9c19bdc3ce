use bake::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock NoticePublisher keeping published documents in memory
#[derive(Clone, Default)]
pub struct MockNoticePublisher {
    pub published: Arc<Mutex<HashMap<PathBuf, String>>>,
    pub should_fail: bool,
}

impl MockNoticePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn content(&self, path: &Path) -> Option<String> {
        self.published.lock().unwrap().get(path).cloned()
    }
}

impl NoticePublisher for MockNoticePublisher {
    fn publish(&self, path: &Path, content: &str) -> Result<()> {
        if self.should_fail {
            return Err(BakeError::Publish {
                path: path.to_path_buf(),
                staged: None,
                details: "Mock publisher failure".to_string(),
            }
            .into());
        }
        self.published
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
