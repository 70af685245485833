//! Sign-up submission flow.
//!
//! Kept free of view code so the modal only wires signals into it and the
//! whole flow can be driven from plain tests.

use gloo_net::http::Request;
use leptos::logging::warn;
use serde::{Deserialize, Serialize};

use crate::components::toast::ToastKind;

pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";

pub const SIGNUP_SUCCESS: &str = "Account created successfully!";
const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignUpError {
    #[error("Passwords don't match!")]
    PasswordMismatch,

    /// Server answered with a non-2xx status.
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_FAILURE))]
    Rejected { message: Option<String> },

    /// Request never got a response. The detail only goes to the console.
    #[error("Failed to create account")]
    Network(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn input_name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Form contents while the modal is mounted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }

    pub fn check_passwords(&self) -> Result<(), SignUpError> {
        if self.password == self.confirm_password {
            Ok(())
        } else {
            Err(SignUpError::PasswordMismatch)
        }
    }

    /// The confirmation never leaves the client.
    pub fn to_request(&self) -> SignUpRequest {
        SignUpRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Turns a finished HTTP exchange into the flow's result. Any 2xx counts as
/// success whatever the body holds.
pub fn interpret_response(status: u16, body: &str) -> Result<(), SignUpError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty());

    Err(SignUpError::Rejected { message })
}

/// Where the sign-up request goes.
#[allow(async_fn_in_trait)]
pub trait SignUpApi {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<(), SignUpError>;
}

/// Receives the user-facing outcome messages.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: String);
}

#[derive(Clone, Debug)]
pub struct HttpSignUpApi {
    endpoint: String,
}

impl HttpSignUpApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpSignUpApi {
    fn default() -> Self {
        Self::new(SIGNUP_ENDPOINT)
    }
}

impl SignUpApi for HttpSignUpApi {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<(), SignUpError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| SignUpError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SignUpError::Network(e.to_string()))?;

        let status = response.status();
        // an unreadable body on an error status still falls back to the generic text
        let body = response.text().await.unwrap_or_default();

        interpret_response(status, &body)
    }
}

/// Runs one submission.
///
/// A password mismatch is reported and returned before `set_loading` is
/// ever touched. Otherwise loading is raised for exactly the duration of
/// the request, and `on_close` runs once on success.
pub async fn submit<A, N>(
    draft: &SignUpDraft,
    api: &A,
    notifier: &N,
    set_loading: impl Fn(bool),
    on_close: impl FnOnce(),
) -> Result<(), SignUpError>
where
    A: SignUpApi + ?Sized,
    N: Notifier + ?Sized,
{
    if let Err(err) = draft.check_passwords() {
        notifier.notify(ToastKind::Error, err.to_string());
        return Err(err);
    }

    set_loading(true);
    let result = api.sign_up(&draft.to_request()).await;

    match &result {
        Ok(()) => {
            notifier.notify(ToastKind::Success, SIGNUP_SUCCESS.to_owned());
            on_close();
        }
        Err(err) => {
            if let SignUpError::Network(detail) = err {
                warn!("sign up request failed: {detail}");
            }
            notifier.notify(ToastKind::Error, err.to_string());
        }
    }

    set_loading(false);
    result
}
