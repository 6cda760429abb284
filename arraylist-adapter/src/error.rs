use alloc::string::String;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host could not resolve the display surface. Nothing can be rendered without it.
    #[error("no host surface matches selector '{selector}'")]
    HostSurfaceMissing { selector: String },
}

pub type Result<T> = core::result::Result<T, Error>;
