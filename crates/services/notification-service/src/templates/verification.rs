use super::{button_with_fallback, escape, heading, layout, paragraph, path_segment, small_print};
use super::{RenderContext, RenderedEmail};
use crate::inputs::VerificationEmail;

pub fn render_verification(ctx: &RenderContext, input: &VerificationEmail) -> RenderedEmail {
    let brand = escape(&ctx.brand_name);
    let link = ctx.link(&format!("/verify-email/{}", path_segment(&input.token)));

    let content = [
        heading(&format!("Welcome to {brand}, {}!", escape(&input.first_name))),
        paragraph(&format!(
            "Thank you for registering with {brand}. To complete your registration and start \
             exploring healthcare job opportunities, please verify your email address by \
             clicking the button below."
        )),
        button_with_fallback(&link, "Verify Email Address", "#667eea"),
        small_print(&format!(
            "This verification link will expire in 24 hours. If you didn't create an account \
             with {brand}, please ignore this email."
        )),
    ]
    .join("\n");

    RenderedEmail {
        subject: format!("Verify Your Email Address - {}", ctx.brand_name),
        html: layout(ctx, &brand, &content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::test_support::ctx;

    fn input(token: &str) -> VerificationEmail {
        VerificationEmail {
            email: "arun@example.com".to_string(),
            token: token.to_string(),
            first_name: "Arun".to_string(),
        }
    }

    #[test]
    fn test_contains_exact_verification_link() {
        let email = render_verification(&ctx(), &input("abc123"));

        assert_eq!(email.subject, "Verify Your Email Address - LifeMate");
        assert!(email.html.contains("https://example.com/verify-email/abc123"));
        assert!(email.html.contains("expire in 24 hours"));
        assert!(email.html.contains("Arun"));
    }

    #[test]
    fn test_first_name_is_escaped() {
        let mut input = input("abc123");
        input.first_name = "<script>alert(1)</script>".to_string();

        let email = render_verification(&ctx(), &input);
        assert!(!email.html.contains("<script>"));
    }

    #[test]
    fn test_token_cannot_break_out_of_the_link() {
        let email = render_verification(&ctx(), &input(r#"abc" onclick="steal()"#));

        assert!(!email.html.contains(r#"onclick="steal()""#));
        assert!(email.html.contains("https://example.com/verify-email/abc%22%20onclick%3D%22steal%28%29"));
    }
}
