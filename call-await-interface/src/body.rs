//! Request body types.

use std::borrow::Cow;

/// The body of a request.
#[derive(Debug, Clone)]
pub enum Body {
    /// Raw bytes with an explicit content type.
    Bytes {
        /// The body content.
        content: Cow<'static, [u8]>,
        /// Value of the `Content-Type` header.
        content_type: Cow<'static, str>,
    },
    /// `application/x-www-form-urlencoded` fields.
    Form {
        /// Field name and value pairs, in order.
        fields: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    },
}

impl Body {
    /// Creates a body from raw bytes.
    pub fn bytes(
        content: impl Into<Cow<'static, [u8]>>,
        content_type: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Bytes {
            content: content.into(),
            content_type: content_type.into(),
        }
    }

    /// Creates a plain text body.
    pub fn text(
        text: impl Into<Cow<'static, str>>,
        content_type: impl Into<Cow<'static, str>>,
    ) -> Self {
        let content = match text.into() {
            Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
            Cow::Owned(s) => Cow::Owned(s.into_bytes()),
        };
        Self::Bytes {
            content,
            content_type: content_type.into(),
        }
    }

    /// Creates a urlencoded form body.
    pub fn form<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        Self::Form {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
