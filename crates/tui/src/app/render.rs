//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main app layout (header, content, footer)
//! - Dispatch to screen-specific renderers
//! - Layer the analysis dialog, toasts and popups on top
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for TableState selection and last_area)

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::app::state::{CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::screens::{analysis, dashboard, leaderboard, models, redemptions, users};
use crate::ui::theme::{ThemeExt, spinner_char};

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_content(f, chunks[1]);
        self.render_footer(f, chunks[2]);

        if let Some(view) = &self.analysis_view {
            analysis::render_analysis(
                f,
                chunks[1],
                analysis::AnalysisRenderConfig {
                    username: &view.username,
                    snapshot: self.analysis.data(),
                    params: *self.analysis.params(),
                    loading: self.analysis.is_loading(),
                    error: self.analysis.error(),
                    theme: &self.theme,
                    spinner_frame: self.spinner_frame,
                },
            );
        }

        crate::ui::toast::render_toasts(f, &self.toasts, &self.theme);

        if let Some(popup) = &self.popup {
            crate::ui::popup::render_popup(f, popup, &self.theme, self);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let mut tabs = vec![
            Span::styled(
                "Gateway Admin",
                theme.title().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        for (idx, screen) in CurrentScreen::ALL.iter().enumerate() {
            let label = format!(" {} {} ", idx + 1, screen.title());
            let style = if *screen == self.current_screen {
                theme.highlight()
            } else {
                theme.text_dim()
            };
            tabs.push(Span::styled(label, style));
        }

        let mut connection = vec![Span::styled(
            self.connection.base_url.clone(),
            theme.text_dim(),
        )];
        if let Some(profile) = &self.connection.profile_name {
            connection.push(Span::styled(format!("  profile: {profile}"), theme.text_dim()));
        }
        if self.session_expired {
            connection.push(Span::styled("  session expired", theme.error()));
        }

        let header = Paragraph::new(vec![Line::from(tabs), Line::from(connection)]).block(
            Block::default()
                .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
                .border_style(theme.border()),
        );
        f.render_widget(header, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let hints = match self.current_screen {
            CurrentScreen::Dashboard => "p:Period r:Refresh i:Interval",
            CurrentScreen::Leaderboard => "[/]:Window m:Metric Enter:Analyze r:Refresh",
            CurrentScreen::Users => "b/u:Ban d/D:Delete X:Batch /:Filter s:Status n/p:Page Enter:Analyze",
            CurrentScreen::Redemptions => "g:Generate d:Delete X:Purge /:Filter s:Status n/p:Page",
            CurrentScreen::Models => "e:Choose x:Remove [/]:Window i:Interval r:Refresh",
        };

        let mut spans = Vec::new();
        if self.is_busy() {
            spans.push(Span::styled(
                format!(" {} ", spinner_char(self.spinner_frame)),
                theme.warning(),
            ));
        }
        spans.push(Span::raw(format!(" {hints} ")));
        spans.push(Span::raw("|"));
        if let Some(updated) = self.current_updated_at() {
            spans.push(Span::styled(
                format!(" updated {} ", updated.format("%H:%M:%S")),
                theme.text_dim(),
            ));
            spans.push(Span::raw("|"));
        }
        spans.push(Span::styled(" ?:Help q:Quit ", theme.error()));

        let footer = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
        f.render_widget(footer, area);
    }

    fn current_updated_at(&self) -> Option<chrono::DateTime<chrono::Local>> {
        match self.current_screen {
            CurrentScreen::Dashboard => self.dashboard.updated_at(),
            CurrentScreen::Leaderboard => self.leaderboard.updated_at(),
            CurrentScreen::Users => self.users.updated_at(),
            CurrentScreen::Redemptions => self.redemptions.updated_at(),
            CurrentScreen::Models => self.models.updated_at(),
        }
    }

    fn render_content(&mut self, f: &mut Frame, area: Rect) {
        match self.current_screen {
            CurrentScreen::Dashboard => dashboard::render_dashboard(
                f,
                area,
                dashboard::DashboardRenderConfig {
                    overview: self.dashboard.data(),
                    period: *self.dashboard.params(),
                    loading: self.dashboard.is_loading(),
                    estimating: self.dashboard_estimate.is_some(),
                    error: self.dashboard.error(),
                    countdown: self.dashboard_countdown.remaining(),
                    theme: &self.theme,
                    spinner_frame: self.spinner_frame,
                },
            ),
            CurrentScreen::Leaderboard => leaderboard::render_leaderboard(
                f,
                area,
                leaderboard::LeaderboardRenderConfig {
                    snapshot: self.leaderboard.data(),
                    params: *self.leaderboard.params(),
                    loading: self.leaderboard.is_loading(),
                    error: self.leaderboard.error(),
                    countdown: self.leaderboard_countdown.remaining(),
                    state: &mut self.leaderboard_state,
                    theme: &self.theme,
                    spinner_frame: self.spinner_frame,
                },
            ),
            CurrentScreen::Users => users::render_users(
                f,
                area,
                users::UsersRenderConfig {
                    page: self.users.data(),
                    stats: self.user_stats.data(),
                    params: self.users.params(),
                    loading: self.users.is_loading(),
                    error: self.users.error(),
                    state: &mut self.users_state,
                    theme: &self.theme,
                    spinner_frame: self.spinner_frame,
                },
            ),
            CurrentScreen::Redemptions => redemptions::render_redemptions(
                f,
                area,
                redemptions::RedemptionsRenderConfig {
                    page: self.redemptions.data(),
                    params: self.redemptions.params(),
                    loading: self.redemptions.is_loading(),
                    error: self.redemptions.error(),
                    state: &mut self.redemptions_state,
                    theme: &self.theme,
                    spinner_frame: self.spinner_frame,
                },
            ),
            CurrentScreen::Models => models::render_models(
                f,
                area,
                models::ModelsRenderConfig {
                    statuses: self.models.data().map(Vec::as_slice),
                    monitored: &self.monitored_models,
                    window: self.models.params().window,
                    loading: self.models.is_loading(),
                    error: self.models.error(),
                    countdown: self.models_countdown.remaining(),
                    state: &mut self.models_state,
                    theme: &self.theme,
                    spinner_frame: self.spinner_frame,
                },
            ),
        }
    }
}
