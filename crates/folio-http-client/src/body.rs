use bytes::Bytes;
use http_body::{Frame, SizeHint};
use serde::Serialize;
use std::{
    convert::Infallible,
    fmt,
    pin::Pin,
    task::{self, Poll},
};

/// Request body
///
/// Requests are small and built in one go, so the body is either empty or a single buffer.
#[derive(Clone, Default)]
pub enum Body {
    /// No body
    #[default]
    Empty,

    /// One buffer, taken out on the first poll
    Full(Option<Bytes>),
}

impl Body {
    /// No body, e.g. for GET requests
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }

    /// JSON encoding of `value`
    ///
    /// # Errors
    ///
    /// `value` failed to serialise
    pub fn json<T>(value: &T) -> sonic_rs::Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let encoded = sonic_rs::to_vec(value)?;
        Ok(Self::Full(Some(Bytes::from(encoded))))
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Body::Empty"),
            Self::Full(data) => f
                .debug_struct("Body::Full")
                .field("len", &data.as_ref().map_or(0, Bytes::len))
                .finish(),
        }
    }
}

impl http_body::Body for Body {
    type Data = Bytes;
    type Error = Infallible;

    fn poll_frame(
        self: Pin<&mut Self>,
        _cx: &mut task::Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let frame = match self.get_mut() {
            Self::Empty => None,
            Self::Full(data) => data.take().map(Frame::data),
        };

        Poll::Ready(frame.map(Ok))
    }

    fn is_end_stream(&self) -> bool {
        matches!(self, Self::Empty | Self::Full(None))
    }

    fn size_hint(&self) -> SizeHint {
        match self {
            Self::Full(Some(data)) => SizeHint::with_exact(data.len() as u64),
            Self::Empty | Self::Full(None) => SizeHint::with_exact(0),
        }
    }
}
