use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error(transparent)]
    Store(#[from] locrec_store::StoreError),

    #[error(transparent)]
    Merge(#[from] locrec_merge::MergeError),

    #[error(transparent)]
    Type(#[from] locrec_types::TypeError),
}

pub type SdkResult<T> = Result<T, SdkError>;
