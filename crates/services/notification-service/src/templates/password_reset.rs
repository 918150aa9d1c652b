use super::{button_with_fallback, escape, heading, layout, paragraph, path_segment, small_print};
use super::{RenderContext, RenderedEmail};
use crate::inputs::PasswordResetEmail;

pub fn render_password_reset(ctx: &RenderContext, input: &PasswordResetEmail) -> RenderedEmail {
    let brand = escape(&ctx.brand_name);
    let link = ctx.link(&format!("/reset-password/{}", path_segment(&input.token)));

    let content = [
        heading("Password Reset Request"),
        paragraph(&format!("Hello {},", escape(&input.first_name))),
        paragraph(&format!(
            "We received a request to reset your password for your {brand} account. If you made \
             this request, click the button below to reset your password."
        )),
        button_with_fallback(&link, "Reset Password", "#dc3545"),
        small_print(
            "This password reset link will expire in 1 hour. If you didn't request a password \
             reset, please ignore this email and your password will remain unchanged.",
        ),
        small_print("For security reasons, please do not share this link with anyone."),
    ]
    .join("\n");

    RenderedEmail {
        subject: format!("Reset Your Password - {}", ctx.brand_name),
        html: layout(ctx, &brand, &content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::test_support::ctx;

    #[test]
    fn test_contains_reset_link_and_expiry() {
        let input = PasswordResetEmail {
            email: "arun@example.com".to_string(),
            token: "r3set".to_string(),
            first_name: "Arun".to_string(),
        };
        let email = render_password_reset(&ctx(), &input);

        assert_eq!(email.subject, "Reset Your Password - LifeMate");
        assert!(email.html.contains("https://example.com/reset-password/r3set"));
        assert!(email.html.contains("expire in 1 hour"));
        assert!(!email.html.contains("verify-email"));
    }

    #[test]
    fn test_token_cannot_break_out_of_the_link() {
        let input = PasswordResetEmail {
            email: "arun@example.com".to_string(),
            token: r#"x"><img src=y>"#.to_string(),
            first_name: "Arun".to_string(),
        };
        let email = render_password_reset(&ctx(), &input);

        assert!(!email.html.contains("<img"));
        assert!(email.html.contains("https://example.com/reset-password/x%22%3E%3Cimg%20src%3Dy%3E"));
    }
}
