use crate::theme::colors::{ERROR_COLOR, SUCCESS_COLOR};
use cardpost_domain::{Notification, NotificationKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerVariant {
    Error,
    Success,
}

impl BannerVariant {
    fn color(self) -> Color {
        match self {
            BannerVariant::Error => ERROR_COLOR,
            BannerVariant::Success => SUCCESS_COLOR,
        }
    }
}

/// Toast-style notification drawn over the top of the form until it expires.
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub variant: BannerVariant,
    pub created_at: Instant,
}

impl Banner {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: BannerVariant::Error,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: BannerVariant::Success,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let color = self.variant.color();

        // +4 for border chars and padding
        let box_width = (self.message.chars().count() + 4).min(area.width as usize) as u16;
        let inner_width = box_width.saturating_sub(2).max(1) as usize;
        let lines = self.message.chars().count().div_ceil(inner_width).max(1) as u16;
        let box_height = (lines + 2).min(area.height);

        let centered_x = area.width.saturating_sub(box_width) / 2;

        let banner_area = Rect {
            x: area.x + centered_x,
            y: area.y,
            width: box_width,
            height: box_height,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        let text_style = Style::default().fg(color).add_modifier(Modifier::BOLD);

        let widget = Paragraph::new(self.message.as_str())
            .style(text_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(Clear, banner_area);
        frame.render_widget(widget, banner_area);
    }
}

impl From<Notification> for Banner {
    fn from(notification: Notification) -> Self {
        match notification.kind {
            NotificationKind::Success => Banner::success(notification.message),
            NotificationKind::Error => Banner::error(notification.message),
        }
    }
}
