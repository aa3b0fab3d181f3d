use super::flow::SubmissionStatus;

pub const CONTACT_STATUS_RESET_MS: u32 = 2_200;
pub const NEWSLETTER_STATUS_RESET_MS: u32 = 2_500;
pub const MODAL_HIDE_MS: u32 = 5_000;

/// Copy a form shows around its submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Labels {
    pub submit: &'static str,
    pub busy: &'static str,
    pub sent: &'static str,
}

pub const CONTACT_LABELS: Labels = Labels {
    submit: "Envoyer",
    busy: "Envoi…",
    sent: "Message envoyé, merci !",
};

pub const NEWSLETTER_LABELS: Labels = Labels {
    submit: "S'inscrire",
    busy: "Envoi…",
    sent: "Merci, inscription enregistrée.",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusView {
    pub button_label: &'static str,
    pub disabled: bool,
    pub message: Option<(Tone, String)>,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "status-success",
            Tone::Error => "status-error",
        }
    }
}

pub fn present(status: SubmissionStatus, error: Option<&str>, labels: &Labels) -> StatusView {
    let sending = status == SubmissionStatus::Sending;
    let message = match status {
        SubmissionStatus::Sent => Some((Tone::Success, labels.sent.to_string())),
        SubmissionStatus::Error => error.map(|e| (Tone::Error, e.to_string())),
        SubmissionStatus::Idle | SubmissionStatus::Sending => None,
    };
    StatusView {
        button_label: if sending { labels.busy } else { labels.submit },
        disabled: sending,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sending_locks_the_button() {
        let view = present(SubmissionStatus::Sending, None, &CONTACT_LABELS);
        assert_eq!(view.button_label, "Envoi…");
        assert!(view.disabled);
        assert_eq!(view.message, None);
    }

    #[test]
    fn terminal_states_show_a_message() {
        let sent = present(SubmissionStatus::Sent, None, &NEWSLETTER_LABELS);
        assert_eq!(sent.message, Some((Tone::Success, NEWSLETTER_LABELS.sent.to_string())));
        assert!(!sent.disabled);

        let failed = present(SubmissionStatus::Error, Some("Email invalide."), &CONTACT_LABELS);
        assert_eq!(failed.message, Some((Tone::Error, "Email invalide.".to_string())));
        assert_eq!(failed.button_label, "Envoyer");
    }

    #[test]
    fn idle_is_quiet_even_with_a_stale_error() {
        let view = present(SubmissionStatus::Idle, Some("Email invalide."), &CONTACT_LABELS);
        assert_eq!(view.message, None);
    }
}
