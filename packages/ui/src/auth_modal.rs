//! Login / register / OTP-verification modal.

use api::RegisterRequest;
use dioxus::prelude::*;

use crate::notice::{Notice, NoticeLine};
use crate::session::{complete_sign_in, use_auth_modal, use_config, use_session};
use crate::views::ModalOverlay;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const OTP_LEN: usize = 6;

/// The four mutually exclusive screens of the modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Initial,
    Login,
    Register,
    /// Waiting for the OTP mailed to `email`.
    Verify { email: String },
}

/// Visibility, current screen and inline message of the auth modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthModal {
    pub open: bool,
    pub view: AuthView,
    pub notice: Option<Notice>,
}

impl AuthModal {
    pub fn closed() -> Self {
        Self::default()
    }

    /// The welcome screen offered to anonymous visitors.
    pub fn prompt() -> Self {
        Self::show(AuthView::Initial)
    }

    pub fn show(view: AuthView) -> Self {
        Self {
            open: true,
            view,
            notice: None,
        }
    }

    /// Move to another screen. The inline message never carries over.
    pub fn switch(&mut self, view: AuthView) {
        self.open = true;
        self.view = view;
        self.notice = None;
    }

    /// Registration succeeded; wait for the OTP.
    pub fn registered(&mut self, email: &str) {
        self.switch(AuthView::Verify {
            email: email.trim().to_string(),
        });
        self.notice = Some(Notice::success(
            "Registration successful. Check your e-mail for the OTP code.",
        ));
    }

    /// Open the login screen with an explanation, e.g. when buying as a guest.
    pub fn require_login(&mut self, msg: &str) {
        self.switch(AuthView::Login);
        self.notice = Some(Notice::info(msg));
    }

    pub fn close(&mut self) {
        self.open = false;
        self.notice = None;
    }
}

/// Client-side checks of the registration form.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), String> {
    if request.name.trim().is_empty() || request.email.trim().is_empty() {
        return Err("Please fill in your name and e-mail.".to_string());
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        ));
    }
    if request.password != request.confirm_password {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

/// An OTP is exactly six ASCII digits.
pub fn validate_otp(otp: &str) -> Result<(), String> {
    let otp = otp.trim();
    if otp.len() == OTP_LEN && otp.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("Enter the {OTP_LEN}-digit code from the e-mail."))
    }
}

/// Renders the modal when it is open. Mount once, in the app shell.
#[component]
pub fn AuthModalHost() -> Element {
    let mut modal = use_auth_modal();
    let AuthModal { open, view, notice } = modal();

    if !open {
        return rsx! {};
    }

    rsx! {
        ModalOverlay {
            on_close: move |_| modal.write().close(),
            div {
                class: "auth-modal",
                button {
                    class: "auth-modal__close",
                    onclick: move |_| modal.write().close(),
                    "×"
                }
                match view {
                    AuthView::Initial => rsx! { InitialPrompt {} },
                    AuthView::Login => rsx! { LoginForm {} },
                    AuthView::Register => rsx! { RegisterForm {} },
                    AuthView::Verify { email } => rsx! { VerifyForm { email } },
                }
                NoticeLine { notice }
            }
        }
    }
}

#[component]
fn InitialPrompt() -> Element {
    let mut modal = use_auth_modal();
    let config = use_config();
    let shop_name = config.read().shop.name.clone();

    rsx! {
        h2 { class: "auth-modal__title", "Welcome to {shop_name}" }
        p { class: "auth-modal__hint", "Sign in to buy accounts and top up your balance." }
        div {
            class: "auth-modal__actions",
            button {
                class: "btn btn--primary",
                onclick: move |_| modal.write().switch(AuthView::Login),
                "Log in"
            }
            button {
                class: "btn btn--outline",
                onclick: move |_| modal.write().switch(AuthView::Register),
                "Register"
            }
            button {
                class: "btn btn--link",
                onclick: move |_| modal.write().close(),
                "Continue as guest"
            }
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let mut modal = use_auth_modal();
    let config = use_config();
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            busy.set(true);
            modal.write().notice = None;
            let api = api::ShopApi::new(&config.peek().api.base_url);
            match api.login(&email(), &password()).await {
                Ok(response) => {
                    tracing::info!("Logged in as {}", response.user.email);
                    modal.write().notice = Some(Notice::success("Signed in."));
                    complete_sign_in(response, config, session, modal).await;
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    modal.write().notice =
                        Some(Notice::error(e.user_message("Could not sign in. Please try again.")));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        h2 { class: "auth-modal__title", "Log in" }
        form {
            class: "auth-form",
            onsubmit: handle_submit,
            label { r#for: "login-email", "E-mail" }
            input {
                id: "login-email",
                r#type: "email",
                required: true,
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            label { r#for: "login-password", "Password" }
            input {
                id: "login-password",
                r#type: "password",
                required: true,
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            button {
                class: "btn btn--primary",
                r#type: "submit",
                disabled: busy(),
                if busy() { "Signing in..." } else { "Log in" }
            }
        }
        p {
            class: "auth-modal__switch",
            "No account yet? "
            button {
                class: "btn btn--link",
                onclick: move |_| modal.write().switch(AuthView::Register),
                "Register"
            }
        }
    }
}

#[component]
fn RegisterForm() -> Element {
    let mut modal = use_auth_modal();
    let config = use_config();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = RegisterRequest {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            confirm_password: confirm(),
        };
        if let Err(msg) = validate_registration(&request) {
            modal.write().notice = Some(Notice::error(msg));
            return;
        }
        spawn(async move {
            busy.set(true);
            modal.write().notice = None;
            let api = api::ShopApi::new(&config.peek().api.base_url);
            match api.register(&request).await {
                Ok(()) => {
                    tracing::info!("Registered {}, awaiting OTP", request.email);
                    modal.write().registered(&request.email);
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    modal.write().notice =
                        Some(Notice::error(e.user_message("Registration failed. Please try again.")));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        h2 { class: "auth-modal__title", "Register" }
        form {
            class: "auth-form",
            onsubmit: handle_submit,
            label { r#for: "register-name", "Name" }
            input {
                id: "register-name",
                r#type: "text",
                required: true,
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            label { r#for: "register-email", "E-mail" }
            input {
                id: "register-email",
                r#type: "email",
                required: true,
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            label { r#for: "register-password", "Password" }
            input {
                id: "register-password",
                r#type: "password",
                required: true,
                minlength: "{MIN_PASSWORD_LEN}",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            label { r#for: "register-confirm", "Confirm password" }
            input {
                id: "register-confirm",
                r#type: "password",
                required: true,
                value: confirm(),
                oninput: move |evt: FormEvent| confirm.set(evt.value()),
            }
            button {
                class: "btn btn--primary",
                r#type: "submit",
                disabled: busy(),
                if busy() { "Registering..." } else { "Register" }
            }
        }
        p {
            class: "auth-modal__switch",
            "Already have an account? "
            button {
                class: "btn btn--link",
                onclick: move |_| modal.write().switch(AuthView::Login),
                "Log in"
            }
        }
    }
}

#[component]
fn VerifyForm(email: String) -> Element {
    let mut modal = use_auth_modal();
    let config = use_config();
    let session = use_session();
    let mut otp = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let pending_email = email.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let code = otp().trim().to_string();
        if let Err(msg) = validate_otp(&code) {
            modal.write().notice = Some(Notice::error(msg));
            return;
        }
        let email = pending_email.clone();
        spawn(async move {
            busy.set(true);
            let api = api::ShopApi::new(&config.peek().api.base_url);
            match api.verify_email(&email, &code).await {
                Ok(response) => {
                    tracing::info!("E-mail verified for {}", email);
                    modal.write().notice = Some(Notice::success("E-mail verified."));
                    complete_sign_in(response, config, session, modal).await;
                }
                Err(e) => {
                    tracing::warn!("OTP verification failed: {}", e);
                    modal.write().notice =
                        Some(Notice::error(e.user_message("Verification failed. Please try again.")));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        h2 { class: "auth-modal__title", "Verify your e-mail" }
        p { class: "auth-modal__hint", "We sent a {OTP_LEN}-digit code to {email}." }
        form {
            class: "auth-form",
            onsubmit: handle_submit,
            label { r#for: "verify-otp", "OTP code" }
            input {
                id: "verify-otp",
                r#type: "text",
                inputmode: "numeric",
                maxlength: "{OTP_LEN}",
                required: true,
                value: otp(),
                oninput: move |evt: FormEvent| otp.set(evt.value()),
            }
            button {
                class: "btn btn--primary",
                r#type: "submit",
                disabled: busy(),
                if busy() { "Verifying..." } else { "Verify" }
            }
        }
        p {
            class: "auth-modal__switch",
            button {
                class: "btn btn--link",
                onclick: move |_| modal.write().switch(AuthView::Login),
                "Back to login"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            name: "An".into(),
            email: "an@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_switch_clears_notice() {
        let mut modal = AuthModal::prompt();
        modal.notice = Some(Notice::error("bad password"));
        modal.switch(AuthView::Register);
        assert_eq!(modal.view, AuthView::Register);
        assert!(modal.notice.is_none());
        assert!(modal.open);
    }

    #[test]
    fn test_registered_moves_to_verify() {
        let mut modal = AuthModal::show(AuthView::Register);
        modal.registered(" an@example.com ");
        assert_eq!(
            modal.view,
            AuthView::Verify {
                email: "an@example.com".into()
            }
        );
        assert!(modal.notice.as_ref().is_some_and(|n| !n.is_error()));
    }

    #[test]
    fn test_require_login_opens_login_with_message() {
        let mut modal = AuthModal::closed();
        modal.require_login("Please sign in to buy.");
        assert!(modal.open);
        assert_eq!(modal.view, AuthView::Login);
        assert_eq!(
            modal.notice.as_ref().map(Notice::text),
            Some("Please sign in to buy.")
        );
    }

    #[test]
    fn test_close_hides_modal() {
        let mut modal = AuthModal::prompt();
        modal.close();
        assert!(!modal.open);
    }

    #[test]
    fn test_registration_validation() {
        assert!(validate_registration(&request("secret1", "secret1")).is_ok());
        assert_eq!(
            validate_registration(&request("secret1", "secret2")),
            Err("Passwords do not match.".to_string())
        );
        assert!(validate_registration(&request("abc", "abc")).is_err());

        let mut blank = request("secret1", "secret1");
        blank.name = "  ".into();
        assert!(validate_registration(&blank).is_err());
    }

    #[test]
    fn test_otp_validation() {
        assert!(validate_otp("123456").is_ok());
        assert!(validate_otp(" 123456 ").is_ok());
        assert!(validate_otp("12345").is_err());
        assert!(validate_otp("12345a").is_err());
        assert!(validate_otp("1234567").is_err());
    }
}
