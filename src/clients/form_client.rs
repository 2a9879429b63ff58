use tokio::sync::mpsc;
use crate::domain::Identifier;
use crate::form::{FormError, FormSnapshot, RequestToken};
use crate::messages::{FormRequest, InputOutcome};

/// Handle for driving the form actor. Cheap to clone; the actor stops once
/// every handle is dropped.
#[derive(Clone, Debug)]
pub struct FormClient {
    sender: mpsc::Sender<FormRequest>,
}

impl FormClient {
    pub fn new(sender: mpsc::Sender<FormRequest>) -> Self {
        Self { sender }
    }
}

// Replaces the field's raw text; the outcome carries what the field shows.
client_method!(FormClient => fn change_input(raw: String) -> InputOutcome as FormRequest::ChangeInput, Error = FormError);
// Fails with `FormError::IdentifierRequired` while the field is empty.
client_method!(FormClient => fn submit() -> RequestToken as FormRequest::Submit, Error = FormError);
client_method!(FormClient => fn load(identifier: Identifier) -> RequestToken as FormRequest::Load, Error = FormError);
client_method!(FormClient => fn snapshot() -> FormSnapshot as FormRequest::Snapshot, Error = FormError);
client_method!(FormClient => fn settled() -> FormSnapshot as FormRequest::Settled, Error = FormError);
