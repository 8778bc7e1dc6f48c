//! Per-user analysis dialog.
//!
//! Responsibilities:
//! - Open the dialog for a user and fetch its snapshot.
//! - Re-fetch when the window changes.
//! - Discard everything on close.
//!
//! Invariants:
//! - Closing cancels the in-flight fetch and drops the snapshot, so a late
//!   response can never repopulate a closed dialog.
//! - Reopening always fetches.

use gateway_client::AnalysisParams;

use crate::app::App;
use crate::app::structs::AnalysisView;
use crate::sync::FetchOrigin;

impl App {
    /// Open the analysis dialog. `end_time` pins the window's upper bound.
    pub fn open_analysis(&mut self, user_id: i64, username: String, end_time: Option<i64>) {
        self.analysis.clear();
        let window = self.analysis.params().window;
        self.analysis.set_params(AnalysisParams {
            user_id,
            window,
            end_time,
        });
        self.analysis_view = Some(AnalysisView { user_id, username });
        if !self.session_expired {
            self.fetch_analysis(FetchOrigin::Initial);
        }
    }

    pub fn close_analysis(&mut self) {
        self.analysis.clear();
        self.analysis_view = None;
    }

    pub fn is_analysis_open(&self) -> bool {
        self.analysis_view.is_some()
    }

    /// Widen or narrow the analysis window and re-fetch.
    pub(crate) fn shift_analysis_window(&mut self, wider: bool) {
        let mut params = *self.analysis.params();
        let window = if wider {
            params.window.wider()
        } else {
            params.window.narrower()
        };
        if window == params.window {
            return;
        }
        params.window = window;
        self.analysis.set_params(params);
        self.fetch_analysis(FetchOrigin::Manual);
    }
}
