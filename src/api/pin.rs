use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::multipart::{Form, Part};

use super::client::Query;

/// Where the image for a new pin comes from. Exactly one is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Uploaded as the multipart `image` part.
    File { file_name: String, bytes: Vec<u8> },
    /// Sent as `image_url`; Pinterest fetches it.
    Url(String),
    /// Raw image bytes, sent base64-encoded as `image_base64`.
    Base64(Vec<u8>),
}

impl ImageSource {
    /// The form field this source is sent under.
    pub fn field_name(&self) -> &'static str {
        match self {
            ImageSource::File { .. } => "image",
            ImageSource::Url(_) => "image_url",
            ImageSource::Base64(_) => "image_base64",
        }
    }
}

/// A pin to be created on one of the user's boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPin {
    /// Board id, or `username/board_name`.
    pub board: String,
    pub note: String,
    /// The URL the pin links out to.
    pub link: Option<String>,
    pub image: ImageSource,
}

impl NewPin {
    pub fn new(board: impl Into<String>, note: impl Into<String>, image: ImageSource) -> Self {
        Self {
            board: board.into(),
            note: note.into(),
            link: None,
            image,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// The text fields of the request body.
    ///
    /// For [`ImageSource::File`] the image travels as a separate part, so
    /// no image field appears here.
    pub(crate) fn text_fields(&self) -> Query {
        let mut fields = vec![("board", self.board.clone()), ("note", self.note.clone())];
        if let Some(link) = &self.link {
            fields.push(("link", link.clone()));
        }
        match &self.image {
            ImageSource::File { .. } => {}
            ImageSource::Url(url) => fields.push((self.image.field_name(), url.clone())),
            ImageSource::Base64(bytes) => {
                fields.push((self.image.field_name(), STANDARD.encode(bytes)))
            }
        }
        fields
    }

    /// The multipart body, if this pin uploads a file.
    pub(crate) fn multipart_form(&self) -> Option<Form> {
        let image = &self.image;
        let ImageSource::File { file_name, bytes } = image else {
            return None;
        };

        let form = self
            .text_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));
        let part = Part::bytes(bytes.clone()).file_name(file_name.clone());
        Some(form.part(image.field_name(), part))
    }
}
