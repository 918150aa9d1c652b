use super::{button, details_box, escape, format_date, heading, layout, paragraph, small_print};
use super::{RenderContext, RenderedEmail};
use crate::inputs::ApplicationNotificationEmail;

pub fn render_application_notification(
    ctx: &RenderContext,
    input: &ApplicationNotificationEmail,
) -> RenderedEmail {
    let brand = escape(&ctx.brand_name);
    let job_title = escape(&input.job_title);

    let content = [
        heading("New Job Application Received"),
        paragraph(&format!("Hello {},", escape(&input.employer_name))),
        paragraph(&format!(
            "You have received a new application for the position: <strong>{job_title}</strong>"
        )),
        details_box(
            "Application Details:",
            "#667eea",
            &[
                ("Candidate Name", escape(&input.candidate_name)),
                ("Candidate Email", escape(&input.candidate_email)),
                ("Job Title", job_title.clone()),
                ("Applied On", format_date(ctx.today)),
            ],
        ),
        button(&ctx.link("/employer/applications"), "View Application", "#667eea"),
        small_print(&format!(
            "Log in to your {brand} employer dashboard to review the full application and \
             candidate profile."
        )),
    ]
    .join("\n");

    RenderedEmail {
        subject: format!("New Application for {} - {}", input.job_title, ctx.brand_name),
        html: layout(ctx, &brand, &content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::test_support::ctx;

    #[test]
    fn test_summarises_application_for_employer() {
        let input = ApplicationNotificationEmail {
            employer_email: "hr@apollo.example".to_string(),
            employer_name: "Apollo".to_string(),
            job_title: "Radiographer".to_string(),
            candidate_name: "Kavya".to_string(),
            candidate_email: "kavya@example.com".to_string(),
        };
        let email = render_application_notification(&ctx(), &input);

        assert_eq!(email.subject, "New Application for Radiographer - LifeMate");
        assert!(email.html.contains("https://example.com/employer/applications"));
        assert!(email.html.contains("Kavya"));
        assert!(email.html.contains("Applied On:</strong> October 19, 2026"));
    }
}
