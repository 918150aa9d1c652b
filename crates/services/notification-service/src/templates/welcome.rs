use super::{button, escape, heading, layout, paragraph, small_print};
use super::{RenderContext, RenderedEmail};
use crate::inputs::WelcomeEmail;

const JOB_SEEKER_STEPS: [&str; 4] = [
    "Complete your profile to increase your visibility to employers",
    "Upload your resume and portfolio",
    "Set your job preferences and notifications",
    "Start browsing and applying to healthcare jobs",
];

const EMPLOYER_STEPS: [&str; 4] = [
    "Complete your organization profile",
    "Upload your company logo and documents",
    "Get your organization verified",
    "Start posting healthcare job opportunities",
];

pub fn render_welcome(ctx: &RenderContext, input: &WelcomeEmail) -> RenderedEmail {
    let brand = escape(&ctx.brand_name);
    // Admins get the employer variant
    let job_seeker = input.role.is_job_seeker();

    let (dashboard, purpose, steps) = if job_seeker {
        (
            "/jobseeker/dashboard",
            "explore healthcare job opportunities and advance your career",
            JOB_SEEKER_STEPS,
        )
    } else {
        (
            "/employer/dashboard",
            "find the best healthcare talent for your organization",
            EMPLOYER_STEPS,
        )
    };

    let items: String = steps
        .iter()
        .map(|step| format!("\n        <li>{step}</li>"))
        .collect();
    let next_steps = format!(
        r#"    <div style="background: white; padding: 20px; border-radius: 5px; border-left: 4px solid #667eea; margin: 20px 0;">
      <h3 style="color: #333; margin-top: 0;">What's Next?</h3>
      <ul style="color: #666; line-height: 1.6;">{items}
      </ul>
    </div>"#
    );

    let content = [
        heading(&format!("Hello {}!", escape(&input.first_name))),
        paragraph(&format!(
            "Welcome to {brand}, the premier platform connecting healthcare professionals with \
             amazing career opportunities!"
        )),
        paragraph(&format!(
            "Your account has been successfully created and verified. You're now ready to {purpose}."
        )),
        next_steps,
        button(&ctx.link(dashboard), "Go to Dashboard", "#667eea"),
        small_print(
            "If you have any questions or need assistance, feel free to contact our support \
             team. We're here to help you succeed!",
        ),
    ]
    .join("\n");

    RenderedEmail {
        subject: format!(
            "Welcome to {} - Your Healthcare Career Journey Starts Here!",
            ctx.brand_name
        ),
        html: layout(ctx, &format!("Welcome to {brand}!"), &content),
    }
}
