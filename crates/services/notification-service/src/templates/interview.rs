use super::{button, details_box, escape, format_date, heading, layout, paragraph, small_print};
use super::{RenderContext, RenderedEmail};
use crate::inputs::InterviewInvitationEmail;

/// Optional detail that is neither absent nor blank
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn render_interview_invitation(
    ctx: &RenderContext,
    input: &InterviewInvitationEmail,
) -> RenderedEmail {
    let brand = escape(&ctx.brand_name);
    let details = &input.interview_details;
    let job_title = escape(&input.job_title);
    let company = escape(&input.company_name);

    let mut rows = vec![
        ("Date", format_date(details.date)),
        ("Time", escape(&details.time)),
        ("Type", escape(&details.interview_type)),
    ];
    if let Some(location) = provided(&details.location) {
        rows.push(("Location", escape(location)));
    }
    if let Some(link) = provided(&details.meeting_link) {
        let href = escape(link);
        rows.push(("Meeting Link", format!(r#"<a href="{href}">{href}</a>"#)));
    }
    if let Some(notes) = provided(&details.notes) {
        rows.push(("Notes", escape(notes)));
    }

    let content = [
        heading("Interview Invitation"),
        paragraph(&format!("Congratulations {}!", escape(&input.candidate_name))),
        paragraph(&format!(
            "We are pleased to invite you for an interview for the position of \
             <strong>{job_title}</strong> at <strong>{company}</strong>."
        )),
        details_box("Interview Details:", "#28a745", &rows),
        button(&ctx.link("/jobseeker/applications"), "View Application", "#28a745"),
        small_print(&format!(
            "Please confirm your attendance by replying to this email or through your {brand} \
             dashboard."
        )),
    ]
    .join("\n");

    RenderedEmail {
        subject: format!(
            "Interview Invitation for {} - {}",
            input.job_title, input.company_name
        ),
        html: layout(ctx, &brand, &content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::InterviewDetails;
    use crate::templates::test_support::ctx;
    use chrono::NaiveDate;

    fn input(meeting_link: Option<&str>) -> InterviewInvitationEmail {
        InterviewInvitationEmail {
            candidate_email: "meera@example.com".to_string(),
            candidate_name: "Meera".to_string(),
            job_title: "Physiotherapist".to_string(),
            company_name: "Apollo".to_string(),
            interview_details: InterviewDetails {
                date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
                time: "10:30".to_string(),
                interview_type: "Video".to_string(),
                location: None,
                meeting_link: meeting_link.map(str::to_string),
                notes: None,
            },
        }
    }

    #[test]
    fn test_meeting_link_section_absent_when_not_provided() {
        let email = render_interview_invitation(&ctx(), &input(None));

        assert_eq!(email.subject, "Interview Invitation for Physiotherapist - Apollo");
        assert!(!email.html.contains("Meeting Link"));
        assert!(!email.html.contains("Location:"));
        assert!(!email.html.contains("Notes:"));
        assert!(email.html.contains("Date:</strong> November 2, 2026"));
        assert!(email.html.contains("https://example.com/jobseeker/applications"));
    }

    #[test]
    fn test_meeting_link_section_present_exactly_once() {
        let email = render_interview_invitation(&ctx(), &input(Some("https://meet.example.com/xyz")));

        assert_eq!(email.html.matches("Meeting Link").count(), 1);
        assert!(email.html.contains("meet.example.com"));
    }

    #[test]
    fn test_blank_optional_details_are_omitted() {
        let mut input = input(None);
        input.interview_details.location = Some("  ".to_string());
        input.interview_details.notes = Some("Bring certificates".to_string());

        let email = render_interview_invitation(&ctx(), &input);
        assert!(!email.html.contains("Location:"));
        assert_eq!(email.html.matches("Notes:").count(), 1);
    }
}
