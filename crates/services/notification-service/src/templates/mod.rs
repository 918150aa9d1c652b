//! HTML email templates.
//!
//! Every renderer is a pure function of a [`RenderContext`] and its input.
//! Caller-supplied text is escaped before it is placed in markup. Tokens
//! that end up inside a link are percent-encoded as a single path segment.

mod application;
mod interview;
mod password_reset;
mod verification;
mod welcome;

pub use application::render_application_notification;
pub use interview::render_interview_invitation;
pub use password_reset::render_password_reset;
pub use verification::render_verification;
pub use welcome::render_welcome;

use chrono::{Datelike, NaiveDate};

/// Process-wide values templates depend on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub base_url: String,
    pub brand_name: String,
    /// Date stamp for "applied on" and the footer year
    pub today: NaiveDate,
}

impl RenderContext {
    /// `{base_url}{path}`; `path` starts with a slash
    pub fn link(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Subject line and HTML body ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

pub(crate) const TAGLINE: &str = "Healthcare Job Platform";

pub(crate) fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

/// Percent-encode a caller value for use as one URL path segment
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Brand banner, content block and footer shared by every email
pub(crate) fn layout(ctx: &RenderContext, banner: &str, content: &str) -> String {
    let brand = escape(&ctx.brand_name);
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 30px; text-align: center;">
    <h1 style="color: white; margin: 0; font-size: 28px;">{banner}</h1>
    <p style="color: white; margin: 10px 0 0 0; font-size: 16px;">{TAGLINE}</p>
  </div>
  <div style="padding: 30px; background: #f8f9fa;">
{content}
  </div>
  <div style="background: #333; padding: 20px; text-align: center;">
    <p style="color: #999; margin: 0; font-size: 14px;">&copy; {year} {brand}. All rights reserved.</p>
    <p style="color: #999; margin: 5px 0 0 0; font-size: 12px;">This is an automated email. Please do not reply to this message.</p>
  </div>
</div>
"#,
        year = ctx.today.year(),
    )
}

pub(crate) fn heading(text: &str) -> String {
    format!(r#"    <h2 style="color: #333; margin-bottom: 20px;">{text}</h2>"#)
}

pub(crate) fn paragraph(text: &str) -> String {
    format!(r#"    <p style="color: #666; line-height: 1.6; margin-bottom: 20px;">{text}</p>"#)
}

pub(crate) fn small_print(text: &str) -> String {
    format!(r#"    <p style="color: #666; line-height: 1.6; margin-top: 30px; font-size: 14px;">{text}</p>"#)
}

pub(crate) fn button(href: &str, label: &str, color: &str) -> String {
    format!(
        r#"    <div style="text-align: center; margin: 30px 0;">
      <a href="{href}" style="background: {color}; color: white; padding: 12px 30px; text-decoration: none; border-radius: 5px; font-weight: bold; display: inline-block;">{label}</a>
    </div>"#
    )
}

/// Button plus the same link spelled out for clients that drop buttons
pub(crate) fn button_with_fallback(href: &str, label: &str, color: &str) -> String {
    [
        button(href, label, color),
        paragraph("If the button doesn't work, you can copy and paste this link into your browser:"),
        format!(
            r#"    <p style="color: #667eea; word-break: break-all; background: #f0f0f0; padding: 10px; border-radius: 5px;">{href}</p>"#
        ),
    ]
    .join("\n")
}

/// Bordered box with a title and `label: value` rows
pub(crate) fn details_box(title: &str, accent: &str, rows: &[(&str, String)]) -> String {
    let rows: String = rows
        .iter()
        .map(|(label, value)| {
            format!("\n      <p style=\"margin: 5px 0;\"><strong>{label}:</strong> {value}</p>")
        })
        .collect();
    format!(
        r#"    <div style="background: white; padding: 20px; border-radius: 5px; border-left: 4px solid {accent}; margin: 20px 0;">
      <h3 style="color: #333; margin-top: 0;">{title}</h3>{rows}
    </div>"#
    )
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::RenderContext;
    use chrono::NaiveDate;

    pub fn ctx() -> RenderContext {
        RenderContext {
            base_url: "https://example.com".to_string(),
            brand_name: "LifeMate".to_string(),
            today: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        }
    }
}
