use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::content::SiteContent;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("Please tell me a little about your project.")]
    MissingMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl ContactDraft {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    fn with(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Company => next.company = value,
            Field::Message => next.message = value,
        }
        next
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn looks_like_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !host.starts_with('.'),
        None => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: Rc<SiteContent>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let contact = &props.content.contact;
    let draft = use_state(ContactDraft::default);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<ContactError>);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    // Pending reset must not fire into an unmounted form
    {
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    reset_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_input = |field: Field| {
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |value: String| {
            draft.set(draft.with(field, value));
            error.set(None);
        })
    };

    let input_handler = |field: Field| {
        let on_input = on_input(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let message_handler = {
        let on_input = on_input(Field::Message);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit(area.value());
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let submitted = submitted.clone();
        let error = error.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(e) = draft.validate() {
                warn!("Contact form rejected: {}", e);
                error.set(Some(e));
                return;
            }

            // No submission endpoint yet, the hand-off is only logged.
            info!(
                "Contact request from {} <{}> ({}): {} chars",
                draft.name.trim(),
                draft.email.trim(),
                if draft.company.trim().is_empty() { "no company" } else { draft.company.trim() },
                draft.message.trim().len()
            );
            submitted.set(true);

            let submitted = submitted.clone();
            let draft = draft.clone();
            *reset_timer.borrow_mut() = Some(Timeout::new(config::CONTACT_RESET_MS, move || {
                submitted.set(false);
                draft.set(ContactDraft::default());
            }));
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Let's "}<span class="text-accent-blue">{"Connect"}</span></h2>
                    <p>{"Ready to scale your business with data-driven marketing strategies? Let's discuss how we can achieve your growth goals together."}</p>
                </div>

                <div class="contact-grid">
                    <div class="contact-info">
                        <h3>{"Get in Touch"}</h3>
                        <p>{&contact.intro}</p>
                        <div class="contact-methods">
                            <div class="contact-method">
                                <span class="method-icon">{"✉"}</span>
                                <div>
                                    <div class="method-label">{"Email"}</div>
                                    <a href={format!("mailto:{}", contact.email)}>{&contact.email}</a>
                                </div>
                            </div>
                            <div class="contact-method">
                                <span class="method-icon">{"in"}</span>
                                <div>
                                    <div class="method-label">{"LinkedIn"}</div>
                                    <a href={contact.linkedin.clone()} target="_blank" rel="noopener noreferrer">{"Connect with me ↗"}</a>
                                </div>
                            </div>
                            <div class="contact-method">
                                <span class="method-icon">{"☎"}</span>
                                <div>
                                    <div class="method-label">{"Available for"}</div>
                                    <div>{&contact.availability_note}</div>
                                </div>
                            </div>
                            <div class="contact-method">
                                <span class="method-icon">{"⌖"}</span>
                                <div>
                                    <div class="method-label">{"Based in"}</div>
                                    <div>{&contact.location}</div>
                                </div>
                            </div>
                        </div>

                        <div class="availability">
                            <h4>{"Current Availability"}</h4>
                            <div class="availability-row"><span>{"New Projects"}</span><span class="status-open">{"Available"}</span></div>
                            <div class="availability-row"><span>{"Consultations"}</span><span class="status-open">{"Open"}</span></div>
                            <div class="availability-row"><span>{"Response Time"}</span><span>{&contact.response_time}</span></div>
                        </div>
                    </div>

                    <div class="contact-form-panel">
                        <h3>{"Send a Message"}</h3>
                        if *submitted {
                            <div class="contact-success">
                                <div class="success-icon">{"✓"}</div>
                                <h4>{"Message Sent!"}</h4>
                                <p>{"Thank you for reaching out. I'll get back to you within 24 hours."}</p>
                            </div>
                        } else {
                            <form class="contact-form" {onsubmit} novalidate={true}>
                                <div class="form-row">
                                    <div>
                                        <label for="name">{"Full Name *"}</label>
                                        <input
                                            type="text"
                                            id="name"
                                            name="name"
                                            value={draft.name.clone()}
                                            oninput={input_handler(Field::Name)}
                                            placeholder="Your full name"
                                        />
                                    </div>
                                    <div>
                                        <label for="email">{"Email Address *"}</label>
                                        <input
                                            type="email"
                                            id="email"
                                            name="email"
                                            value={draft.email.clone()}
                                            oninput={input_handler(Field::Email)}
                                            placeholder="your.email@company.com"
                                        />
                                    </div>
                                </div>
                                <div>
                                    <label for="company">{"Company Name"}</label>
                                    <input
                                        type="text"
                                        id="company"
                                        name="company"
                                        value={draft.company.clone()}
                                        oninput={input_handler(Field::Company)}
                                        placeholder="Your company name"
                                    />
                                </div>
                                <div>
                                    <label for="message">{"Project Details *"}</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="5"
                                        value={draft.message.clone()}
                                        oninput={message_handler}
                                        placeholder="Tell me about your project, goals, and how I can help you achieve them..."
                                    />
                                </div>
                                if let Some(e) = &*error {
                                    <p class="form-error">{e.to_string()}</p>
                                }
                                <button type="submit" class="contact-submit">{"➤ Send Message"}</button>
                            </form>
                        }
                    </div>
                </div>

                <div class="contact-cta">
                    <h3>{"Ready to Scale Your Business?"}</h3>
                    <p>{&contact.closing_pitch}</p>
                    <a href={format!("mailto:{}", contact.email)} class="hero-cta">{"Email Me Directly"}</a>
                </div>
            </div>
            <style>
                {r#"
                    .contact-section {
                        padding: 5rem 2rem;
                        position: relative;
                        overflow: hidden;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .contact-methods {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        margin: 2rem 0;
                    }
                    .contact-method {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .method-icon {
                        width: 3rem;
                        height: 3rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 0.5rem;
                        background: rgba(59, 130, 246, 0.2);
                        color: #60a5fa;
                        font-weight: 700;
                    }
                    .method-label {
                        font-weight: 600;
                    }
                    .contact-method a {
                        color: #60a5fa;
                        text-decoration: none;
                    }
                    .availability {
                        border: 1px solid #374151;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        background: rgba(31, 41, 55, 0.3);
                    }
                    .availability-row {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 0.75rem;
                        color: #d1d5db;
                    }
                    .status-open {
                        color: #34d399;
                    }
                    .contact-form-panel {
                        border: 1px solid #374151;
                        border-radius: 1rem;
                        padding: 2rem;
                        background: rgba(31, 41, 55, 0.3);
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.85rem;
                        color: #d1d5db;
                        margin-bottom: 0.5rem;
                    }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #4b5563;
                        background: #111827;
                        color: #fff;
                        font: inherit;
                    }
                    .form-error {
                        color: #f87171;
                        margin: 0;
                    }
                    .contact-submit {
                        padding: 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: linear-gradient(90deg, #3b82f6, #10b981);
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .contact-success {
                        text-align: center;
                        padding: 3rem 0;
                    }
                    .success-icon {
                        font-size: 3rem;
                        color: #34d399;
                    }
                    .contact-cta {
                        text-align: center;
                        margin-top: 5rem;
                    }
                    @media (max-width: 900px) {
                        .contact-grid, .form-row {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Asha".into(),
            email: "asha@brand.co".into(),
            company: String::new(),
            message: "Scaling PMax for Diwali.".into(),
        }
    }

    #[test]
    fn complete_draft_is_valid_without_company() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut draft = ContactDraft::default();
        assert_eq!(draft.validate(), Err(ContactError::MissingName));
        draft.name = "  Asha ".into();
        assert_eq!(draft.validate(), Err(ContactError::MissingEmail));
        draft.email = "asha".into();
        assert_eq!(draft.validate(), Err(ContactError::InvalidEmail));
        draft.email = "asha@brand.co".into();
        assert_eq!(draft.validate(), Err(ContactError::MissingMessage));
        draft.message = "hi".into();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("  first.last@sub.domain.in "));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a@b@c.co"));
        assert!(!looks_like_email("a b@c.co"));
    }

    #[test]
    fn field_updates_touch_only_that_field() {
        let draft = filled().with(Field::Company, "Matrix".into());
        assert_eq!(draft.company, "Matrix");
        assert_eq!(draft.name, "Asha");
        assert_eq!(draft.message, filled().message);
    }
}
