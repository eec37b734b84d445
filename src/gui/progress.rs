// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    total: Option<usize>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, total: None }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn finish(&mut self) {
        // failed before begin: keep the error message
        if let Some(n) = self.total {
            self.set_status(format!("Fetched {n} match(es)"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_reports_the_fetched_count() {
        let status = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(status.clone());
        p.log("Fetching 2024 ONWAT (Playoff)…");
        p.begin(2);
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Fetched 2 match(es)");
    }

    #[test]
    fn failure_message_survives_finish() {
        let status = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(status.clone());
        p.log("Fetch failed: missing credential");
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Fetch failed: missing credential");
    }
}
