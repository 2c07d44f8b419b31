use portfolio_di::Build;
use portfolio_email_contracts::{template::TemplateEmailService, ContentType, Email, EmailService};
use portfolio_models::email_address::EmailAddressWithName;
use portfolio_templates_contracts::{
    ContactNotificationTemplate, NewsletterWelcomeTemplate, Template, TemplateService,
};
use portfolio_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct TemplateEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
}

impl<EmailS, Template> TemplateEmailService for TemplateEmailServiceImpl<EmailS, Template>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    #[trace_instrument(skip(self, data))]
    async fn send_contact_notification_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ContactNotificationTemplate,
    ) -> anyhow::Result<bool> {
        self.send_email(
            recipient,
            Some(reply_to),
            data,
            ContentType::Text,
            format!("New Contact Form Submission from {}", data.name),
        )
        .await
    }

    #[trace_instrument(skip(self, data))]
    async fn send_newsletter_welcome_email(
        &self,
        recipient: EmailAddressWithName,
        data: &NewsletterWelcomeTemplate,
    ) -> anyhow::Result<bool> {
        self.send_email(
            recipient,
            None,
            data,
            ContentType::Html,
            "Welcome to Our Newsletter!",
        )
        .await
    }
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_email<T: Template + 'static>(
        &self,
        recipient: EmailAddressWithName,
        reply_to: Option<EmailAddressWithName>,
        data: &T,
        content_type: ContentType,
        subject: impl Into<String>,
    ) -> anyhow::Result<bool> {
        self.email
            .send(Email {
                recipient,
                subject: subject.into(),
                body: self.template.render(data)?,
                content_type,
                reply_to,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use portfolio_email_contracts::MockEmailService;
    use portfolio_templates_contracts::MockTemplateService;

    use super::*;

    type Sut = TemplateEmailServiceImpl<MockEmailService, MockTemplateService>;

    #[tokio::test]
    async fn contact_notification() {
        // Arrange
        let data = ContactNotificationTemplate {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: None,
            message: "Hello there, this is a message.".into(),
            submitted_at: "2024-05-01 13:37:00 UTC".into(),
        };
        let recipient: EmailAddressWithName = "contact@example.com".parse().unwrap();
        let reply_to: EmailAddressWithName = "john@example.com".parse().unwrap();

        let template = MockTemplateService::new().with_render(data.clone(), Ok("body".into()));
        let email = MockEmailService::new().with_send(
            Email {
                recipient: recipient.clone(),
                subject: "New Contact Form Submission from John Doe".into(),
                body: "body".into(),
                content_type: ContentType::Text,
                reply_to: Some(reply_to.clone()),
            },
            true,
        );

        let sut: Sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut
            .send_contact_notification_email(recipient, reply_to, &data)
            .await;

        // Assert
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn newsletter_welcome() {
        // Arrange
        let data = NewsletterWelcomeTemplate {
            email: "alice@example.com".into(),
        };
        let recipient: EmailAddressWithName = "alice@example.com".parse().unwrap();

        let template = MockTemplateService::new().with_render(data.clone(), Ok("<p>hi</p>".into()));
        let email = MockEmailService::new().with_send(
            Email {
                recipient: recipient.clone(),
                subject: "Welcome to Our Newsletter!".into(),
                body: "<p>hi</p>".into(),
                content_type: ContentType::Html,
                reply_to: None,
            },
            false,
        );

        let sut: Sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut.send_newsletter_welcome_email(recipient, &data).await;

        // Assert
        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn render_error() {
        // Arrange
        let data = NewsletterWelcomeTemplate {
            email: "alice@example.com".into(),
        };

        let template = MockTemplateService::new()
            .with_render(data.clone(), Err(anyhow::anyhow!("render failed")));

        let sut: Sut = TemplateEmailServiceImpl {
            email: MockEmailService::new(),
            template,
        };

        // Act
        let result = sut
            .send_newsletter_welcome_email("alice@example.com".parse().unwrap(), &data)
            .await;

        // Assert
        assert!(result.is_err());
    }
}
