use axum::extract::FromRef;
use folio_email::{AnyTransport, ContactService};

/// Application state
///
/// Called it "Zustand" to avoid a name collision with `axum::extract::State`.
#[derive(Clone)]
pub struct Zustand<T = AnyTransport> {
    pub contact: ContactService<T>,
}

impl<T> FromRef<Zustand<T>> for ContactService<T>
where
    T: Clone,
{
    fn from_ref(input: &Zustand<T>) -> Self {
        input.contact.clone()
    }
}
