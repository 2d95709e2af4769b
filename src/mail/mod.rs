//! Transactional mail.
//!
//! Handlers compose messages with [`confirmation_message`] and
//! [`thanks_message`] and hand them to a [`Mailer`]. The shipped
//! [`LogMailer`] records each message in the log; a transport-backed
//! implementation only needs to implement the same trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Argument, Campaign, Person, Politician};

pub const SUBJECT_THANKS: &str = "Crowd-Lobbying";
pub const SUBJECT_CONFIRMATION: &str = "Crowd-Lobbying: Bitte bestätigen Sie Ihre Nachricht";

/// An outgoing HTML mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Failure to hand a message to the transport.
#[derive(Debug)]
pub struct MailError(pub String);

impl std::fmt::Display for MailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mail delivery failed: {}", self.0)
    }
}

impl std::error::Error for MailError {}

impl From<MailError> for crate::errors::AppError {
    fn from(err: MailError) -> Self {
        crate::errors::AppError::Mail(err.to_string())
    }
}

/// Sends transactional mail. Returns the message id on success.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<String, MailError>;
}

/// Mailer that only writes messages to the log.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> Result<String, MailError> {
        let message_id = Uuid::new_v4().to_string();

        tracing::info!(
            message_id = %message_id,
            from = %message.from,
            to = %message.to,
            subject = %message.subject,
            body_len = message.html_body.len(),
            "Mail sent"
        );

        Ok(message_id)
    }
}

/// Links a confirmation mail points to.
pub struct ConfirmationLinks {
    pub confirm_url: String,
    pub campaign_url: String,
}

/// Ask the person to confirm their message to `politician`.
pub fn confirmation_message(
    from: &str,
    person: &Person,
    politician: &Politician,
    campaign: &Campaign,
    argument: &Argument,
    links: &ConfirmationLinks,
) -> MailMessage {
    let html_body = format!(
        "<p>Hallo {first} {last}</p>\
         <p>Sie möchten {politician} im Rahmen der Kampagne «{campaign}» folgendes Argument senden:</p>\
         <blockquote><strong>{title}</strong><br>{text}</blockquote>\
         <p><a href=\"{confirm}\">Nachricht bestätigen</a></p>\
         <p><a href=\"{home}\">{campaign}</a></p>",
        first = escape(&person.first_name),
        last = escape(&person.last_name),
        politician = escape(&politician.full_name()),
        campaign = escape(&campaign.name),
        title = escape(&argument.title),
        text = escape(&argument.text),
        confirm = escape(&links.confirm_url),
        home = escape(&links.campaign_url),
    );

    MailMessage {
        from: from.to_string(),
        to: person.email.clone(),
        subject: SUBJECT_CONFIRMATION.to_string(),
        html_body,
    }
}

/// Thank the person once their message is confirmed.
pub fn thanks_message(
    from: &str,
    person: &Person,
    politician: &Politician,
    campaign: &Campaign,
) -> MailMessage {
    let html_body = format!(
        "<p>Hallo {first} {last}</p>\
         <p>Vielen Dank! Ihre Nachricht an {politician} im Rahmen der Kampagne «{campaign}» ist bestätigt.</p>",
        first = escape(&person.first_name),
        last = escape(&person.last_name),
        politician = escape(&politician.full_name()),
        campaign = escape(&campaign.name),
    );

    MailMessage {
        from: from.to_string(),
        to: person.email.clone(),
        subject: SUBJECT_THANKS.to_string(),
        html_body,
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixtures() -> (Person, Politician, Campaign, Argument) {
        let person = Person {
            id: 1,
            email: "anna@example.ch".into(),
            first_name: "Anna".into(),
            last_name: "<Muster>".into(),
            city: None,
            confirmation_token: Some("tok".into()),
            confirmation_expires: None,
            confirmed: false,
            language: Some("de".into()),
            created_at: Utc::now(),
        };
        let politician = Politician {
            id: 2,
            slug: "hans.meier".into(),
            first_name: "Hans".into(),
            last_name: "Meier".into(),
            party: None,
            politician_type: "national_council".into(),
            regions: vec![],
        };
        let campaign = Campaign {
            id: 3,
            slug: "klima".into(),
            name: "Klima".into(),
            politician_type: "national_council".into(),
            regions: vec![],
            created_at: Utc::now(),
        };
        let argument = Argument {
            id: 4,
            campaign_id: 3,
            title: "Jetzt handeln".into(),
            text: "Weil es dringend ist.".into(),
        };
        (person, politician, campaign, argument)
    }

    #[test]
    fn test_confirmation_message_contains_link() {
        let (person, politician, campaign, argument) = fixtures();
        let links = ConfirmationLinks {
            confirm_url: "https://klima.example.ch/de/lobby/hans.meier/confirm/tok".into(),
            campaign_url: "https://klima.example.ch/de/".into(),
        };

        let message =
            confirmation_message("from@example.ch", &person, &politician, &campaign, &argument, &links);

        assert_eq!(message.to, "anna@example.ch");
        assert_eq!(message.subject, SUBJECT_CONFIRMATION);
        assert!(message.html_body.contains(&links.confirm_url));
        assert!(message.html_body.contains("Hans Meier"));
        assert!(message.html_body.contains("&lt;Muster&gt;"));
    }

    #[test]
    fn test_thanks_message() {
        let (person, politician, campaign, _) = fixtures();
        let message = thanks_message("from@example.ch", &person, &politician, &campaign);

        assert_eq!(message.from, "from@example.ch");
        assert_eq!(message.subject, SUBJECT_THANKS);
        assert!(message.html_body.contains("Klima"));
    }

    #[tokio::test]
    async fn test_log_mailer_returns_message_id() {
        let (person, politician, campaign, _) = fixtures();
        let message = thanks_message("from@example.ch", &person, &politician, &campaign);

        let id = LogMailer.send(&message).await.unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
